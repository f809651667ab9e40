//! Stable scan fingerprints for cross-process plan caches.
//!
//! Unlike `Hash`, the fingerprint is a SHA-256 digest over the canonical
//! encoding and includes the node kind, so it can key persistent caches.

use crate::{
    hash::{CanonicalEncode, write_len, write_tag},
    node::ScanNode,
};
use sha2::{Digest, Sha256};
use std::fmt::{self, Write as _};

///
/// ScanFingerprint
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ScanFingerprint([u8; 32]);

impl ScanFingerprint {
    #[must_use]
    pub fn as_hex(&self) -> String {
        let mut out = String::with_capacity(64);
        for byte in self.0 {
            let _ = write!(out, "{byte:02x}");
        }
        out
    }
}

impl fmt::Display for ScanFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_hex())
    }
}

impl ScanNode {
    /// Compute the stable fingerprint of this node.
    #[must_use]
    pub fn fingerprint(&self) -> ScanFingerprint {
        let metadata = self.metadata();
        let mut hasher = Sha256::new();
        hasher.update(b"scanfp:v1");

        write_tag(&mut hasher, self.kind().tag());

        write_tag(&mut hasher, 0x01);
        write_len(&mut hasher, metadata.output.len());
        for attribute in &metadata.output {
            attribute.encode(&mut hasher);
        }

        write_tag(&mut hasher, 0x02);
        metadata.source.encode(&mut hasher);

        write_tag(&mut hasher, 0x03);
        write_len(&mut hasher, metadata.pushed_filters.len());
        for filter in metadata.pushed_filters.iter() {
            filter.encode(&mut hasher);
        }

        let digest = hasher.finalize();
        let mut out = [0u8; 32];
        out.copy_from_slice(&digest);

        ScanFingerprint(out)
    }
}
