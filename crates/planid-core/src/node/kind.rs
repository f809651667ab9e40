use std::fmt;

///
/// ScanNodeKind
///
/// Discriminant of the concrete plan-node kind wrapping a source. Nodes of
/// different kinds never compare equal, even with identical metadata.
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ScanNodeKind {
    /// Logical batch relation.
    Relation,
    /// Logical streaming relation.
    StreamingRelation,
    /// Physical batch scan operator.
    BatchScan,
    /// Physical streaming scan operator.
    StreamingScan,
}

impl ScanNodeKind {
    /// Whether a node of this kind accepts comparison against `other`.
    #[must_use]
    pub const fn can_equal(self, other: Self) -> bool {
        self.tag() == other.tag()
    }

    pub(crate) const fn tag(self) -> u8 {
        match self {
            Self::Relation => 0x01,
            Self::StreamingRelation => 0x02,
            Self::BatchScan => 0x03,
            Self::StreamingScan => 0x04,
        }
    }
}

impl fmt::Display for ScanNodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Relation => "Relation",
            Self::StreamingRelation => "StreamingRelation",
            Self::BatchScan => "BatchScan",
            Self::StreamingScan => "StreamingScan",
        };

        f.write_str(label)
    }
}
