//! Element-count and character-count bounds for rendered text.

use std::{borrow::Cow, fmt::Display};
use tracing::trace;

const ELLIPSIS: &str = "...";

/// Render `items` as `start item sep item ... end`, rendering at most
/// `max_fields` elements.
///
/// When `items` has more than `max_fields` elements, the first
/// `max_fields - 1` are rendered and the rest collapse into
/// `... N more fields`. Elements past the cap are never formatted.
#[must_use]
pub fn truncated_list<T: Display>(
    items: &[T],
    start: &str,
    sep: &str,
    end: &str,
    max_fields: usize,
) -> String {
    let mut out = String::from(start);

    if items.len() > max_fields {
        let shown = max_fields.saturating_sub(1);
        push_joined(&mut out, &items[..shown], sep);
        if shown > 0 {
            out.push_str(sep);
        }
        let hidden = items.len() - shown;
        out.push_str(&format!("... {hidden} more fields"));
        trace!(total = items.len(), hidden, "truncated rendered list");
    } else {
        push_joined(&mut out, items, sep);
    }

    out.push_str(end);
    out
}

fn push_joined<T: Display>(out: &mut String, items: &[T], sep: &str) {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(sep);
        }
        out.push_str(&item.to_string());
    }
}

/// Cap `text` at `max_len` characters, replacing the tail with `...`.
///
/// Counts characters, not bytes, so multi-byte text is never split.
/// `max_len` below the ellipsis width still yields at most `max_len`
/// characters.
#[must_use]
pub fn abbreviate(text: &str, max_len: usize) -> Cow<'_, str> {
    if text.chars().count() <= max_len {
        return Cow::Borrowed(text);
    }
    if max_len < ELLIPSIS.len() {
        return Cow::Owned(ELLIPSIS[..max_len].to_string());
    }

    let keep = max_len - ELLIPSIS.len();
    let cut = text
        .char_indices()
        .nth(keep)
        .map_or(text.len(), |(index, _)| index);

    Cow::Owned(format!("{}{ELLIPSIS}", &text[..cut]))
}

///
/// TESTS
///
