//! Canonical tagged byte encoding shared by the identity hash and the
//! SHA-256 fingerprint.
//!
//! Every encoded value starts with a one-byte tag and every variable-length
//! field is length-prefixed, so distinct values never share an encoding.
#![expect(clippy::cast_possible_truncation)]

use sha2::{Digest, Sha256};
use xxhash_rust::xxh3::Xxh3;

///
/// HashSink
///

pub(crate) trait HashSink {
    fn write(&mut self, bytes: &[u8]);
}

impl HashSink for Sha256 {
    fn write(&mut self, bytes: &[u8]) {
        Digest::update(self, bytes);
    }
}

impl HashSink for Xxh3 {
    fn write(&mut self, bytes: &[u8]) {
        self.update(bytes);
    }
}

///
/// CanonicalEncode
///

pub(crate) trait CanonicalEncode {
    fn encode(&self, sink: &mut dyn HashSink);
}

/// XXH3 digest of one value's canonical encoding.
pub(crate) fn xxh3_of<T>(value: &T) -> u64
where
    T: CanonicalEncode + ?Sized,
{
    let mut hasher = Xxh3::new();
    value.encode(&mut hasher);
    hasher.digest()
}

/// One step of the `acc = 31 * acc + h` fold.
pub(crate) const fn fold31(acc: u64, hash: u64) -> u64 {
    acc.wrapping_mul(31).wrapping_add(hash)
}

pub(crate) fn write_tag(sink: &mut dyn HashSink, tag: u8) {
    sink.write(&[tag]);
}

pub(crate) fn write_bool(sink: &mut dyn HashSink, value: bool) {
    sink.write(&[u8::from(value)]);
}

pub(crate) fn write_u32(sink: &mut dyn HashSink, value: u32) {
    sink.write(&value.to_be_bytes());
}

pub(crate) fn write_u64(sink: &mut dyn HashSink, value: u64) {
    sink.write(&value.to_be_bytes());
}

pub(crate) fn write_i64(sink: &mut dyn HashSink, value: i64) {
    sink.write(&value.to_be_bytes());
}

pub(crate) fn write_i128(sink: &mut dyn HashSink, value: i128) {
    sink.write(&value.to_be_bytes());
}

pub(crate) fn write_len(sink: &mut dyn HashSink, len: usize) {
    write_u32(sink, len as u32);
}

pub(crate) fn write_bytes(sink: &mut dyn HashSink, bytes: &[u8]) {
    write_len(sink, bytes.len());
    sink.write(bytes);
}

pub(crate) fn write_str(sink: &mut dyn HashSink, value: &str) {
    write_bytes(sink, value.as_bytes());
}

///
/// TESTS
///
