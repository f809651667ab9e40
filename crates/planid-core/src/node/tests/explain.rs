use super::{jdbc_relation, node_with};
use crate::{
    describe::{self, DescribeOptions},
    node::ScanNodeKind,
    pushdown::{Filter, Predicate},
    test_support::{ParquetSource, StaticReader, columns, wide_columns},
    text::{REDACTION_REPLACEMENT, Redactor},
};

fn defaults() -> DescribeOptions {
    DescribeOptions::default()
}

fn redacting(values: &[&str], keys: &[&str]) -> DescribeOptions {
    let redactor = Redactor::new(values, keys).expect("test patterns should compile");

    DescribeOptions::default().with_redactor(redactor)
}

#[test]
fn describes_source_output_and_pushed_filters() {
    let node = jdbc_relation(
        &["id", "name"],
        StaticReader::plain().with_predicates(vec![Predicate::gt("age", 5)]),
    );

    assert_eq!(
        node.describe_with(&defaults()),
        "JdbcSource[id, name] (PushedFilter: [age > 5])"
    );
}

#[test]
fn empty_node_has_no_parenthesized_suffix() {
    let node = node_with(
        ScanNodeKind::Relation,
        Vec::new(),
        ParquetSource,
        StaticReader::plain(),
    );

    assert_eq!(node.describe_with(&defaults()), "ParquetSource[]");
}

#[test]
fn empty_pushed_set_adds_no_entry() {
    let node = jdbc_relation(&["id"], StaticReader::plain().with_filters(Vec::new()));

    assert_eq!(node.describe_with(&defaults()), "JdbcSource[id]");
}

#[test]
fn flat_filters_render_in_set_order() {
    let node = node_with(
        ScanNodeKind::BatchScan,
        columns(&["id"]),
        ParquetSource,
        StaticReader::plain().with_filters(vec![Filter::is_not_null("id"), Filter::gt("age", 5)]),
    );

    assert_eq!(
        node.describe_with(&defaults()),
        "ParquetSource[id] (PushedFilter: [GreaterThan(age,5), IsNotNull(id)])"
    );
}

#[test]
fn filter_listing_order_does_not_change_descriptor() {
    let a = jdbc_relation(
        &["id"],
        StaticReader::plain().with_predicates(vec![
            Predicate::is_null("b"),
            Predicate::gt("a", 1),
        ]),
    );
    let b = jdbc_relation(
        &["id"],
        StaticReader::plain().with_predicates(vec![
            Predicate::gt("a", 1),
            Predicate::is_null("b"),
        ]),
    );

    assert_eq!(a.describe_with(&defaults()), b.describe_with(&defaults()));
}

#[test]
fn description_reflects_only_structured_capability() {
    let node = jdbc_relation(
        &["id"],
        StaticReader::plain()
            .with_predicates(vec![Predicate::gt("age", 5)])
            .with_filters(vec![Filter::is_not_null("id")]),
    );
    let described = node.describe_with(&defaults());

    assert_eq!(described, "JdbcSource[id] (PushedFilter: [age > 5])");
    assert!(!described.contains("IsNotNull"));
}

#[test]
fn wide_output_is_truncated_by_element_count() {
    let node = node_with(
        ScanNodeKind::BatchScan,
        wide_columns(500),
        ParquetSource,
        StaticReader::plain(),
    );
    let options = defaults();
    let described = node.describe_with(&options);

    assert!(described.ends_with(", ... 476 more fields]"), "{described}");
    let rendered = described
        .trim_start_matches("ParquetSource[")
        .split(", ")
        .filter(|part| !part.starts_with("..."))
        .count();
    assert!(rendered < options.max_fields());
    assert!(!described.contains("c24"));
}

#[test]
fn sensitive_filter_values_never_appear() {
    let node = jdbc_relation(
        &["id"],
        StaticReader::plain().with_predicates(vec![Predicate::eq("password", "hunter2")]),
    );
    let described = node.describe_with(&redacting(&["hunter2"], &[]));

    assert!(!described.contains("hunter2"));
    assert!(described.contains(REDACTION_REPLACEMENT));
    assert_eq!(
        described,
        format!("JdbcSource[id] (PushedFilter: [password = '{REDACTION_REPLACEMENT}'])")
    );
}

#[test]
fn redaction_happens_before_abbreviation() {
    // The secret straddles the abbreviation cut; redacting first keeps any
    // prefix of it from leaking.
    let padding = "x".repeat(85);
    let node = jdbc_relation(
        &["id"],
        StaticReader::plain().with_predicates(vec![Predicate::eq(&padding, "topsecret")]),
    );
    let described = node.describe_with(&redacting(&["topsecret"], &[]));

    assert!(!described.contains("tops"));
}

#[test]
fn long_entry_values_are_abbreviated() {
    let values: Vec<i64> = (0..200).collect();
    let node = jdbc_relation(
        &["id"],
        StaticReader::plain().with_predicates(vec![Predicate::is_in("id", values)]),
    );
    let described = node.describe_with(&defaults());

    let entry = described
        .strip_prefix("JdbcSource[id] (PushedFilter: ")
        .and_then(|rest| rest.strip_suffix(')'))
        .expect("descriptor should carry a pushed filter entry");
    assert_eq!(entry.chars().count(), 100);
    assert!(entry.starts_with("[id IN (0, 1, 2"));
    assert!(entry.ends_with("..."));
}

#[test]
fn options_render_after_filters_with_sensitive_values_hidden() {
    let node = jdbc_relation(
        &["id"],
        StaticReader::plain().with_filters(vec![Filter::gt("age", 5)]),
    )
    .with_options([("url", "jdbc:pg://db"), ("password", "hunter2")]);
    let described = node.describe_with(&redacting(&[], &["(?i)password"]));

    assert_eq!(
        described,
        format!(
            "JdbcSource[id] (PushedFilter: [GreaterThan(age,5)], \
             Options: [password={REDACTION_REPLACEMENT},url=jdbc:pg://db])"
        )
    );
}

#[test]
fn options_do_not_affect_equality() {
    let plain = jdbc_relation(&["id"], StaticReader::plain());
    let with_options =
        jdbc_relation(&["id"], StaticReader::plain()).with_options([("fetchsize", "100")]);

    assert_eq!(plain, with_options);
    assert_ne!(
        plain.describe_with(&defaults()),
        with_options.describe_with(&defaults())
    );
}

#[test]
fn entry_list_is_bounded_too() {
    let node = jdbc_relation(
        &["id"],
        StaticReader::plain().with_predicates(vec![Predicate::gt("age", 5)]),
    )
    .with_options([("url", "jdbc:pg://db")]);

    assert_eq!(
        node.describe_with(&DescribeOptions::new(1, 100)),
        "JdbcSource[id] (... 2 more fields)"
    );
}

#[test]
fn display_uses_thread_options() {
    let node = node_with(
        ScanNodeKind::Relation,
        wide_columns(3),
        ParquetSource,
        StaticReader::plain(),
    );

    let described = describe::with_options(DescribeOptions::new(2, 100), || node.to_string());

    assert_eq!(described, "ParquetSource[c0, ... 2 more fields]");
}

#[test]
fn describe_is_deterministic() {
    let node = jdbc_relation(
        &["id", "name"],
        StaticReader::plain().with_predicates(vec![
            Predicate::is_not_null("name"),
            Predicate::gt("age", 5),
        ]),
    );

    assert_eq!(node.describe_with(&defaults()), node.describe_with(&defaults()));
}
