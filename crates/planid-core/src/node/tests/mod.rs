mod explain;

use crate::{
    model::Attribute,
    node::{ScanNode, ScanNodeKind},
    pushdown::ScanReader,
    source::DataSource,
    test_support::{JdbcSource, StaticReader, columns},
};
use std::sync::Arc;

// Build a node over an arbitrary source with an arbitrary reader.
fn node_with<S: DataSource>(
    kind: ScanNodeKind,
    output: Vec<Attribute>,
    source: S,
    reader: impl ScanReader + 'static,
) -> ScanNode {
    ScanNode::new(kind, output, Arc::new(source), Arc::new(reader))
}

// Logical relation over a JDBC source.
fn jdbc_relation(names: &[&str], reader: StaticReader) -> ScanNode {
    node_with(
        ScanNodeKind::Relation,
        columns(names),
        JdbcSource::new("jdbc:pg://primary"),
        reader,
    )
}
