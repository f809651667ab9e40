//! Scan nodes as plan-cache keys, end to end through the public API.

use planid_config::PlanidConfig;
use planid_core::{
    describe::DescribeOptions,
    node::ScanFingerprint,
    prelude::*,
    text::REDACTION_REPLACEMENT,
};
use std::{
    collections::{BTreeMap, HashMap},
    sync::Arc,
};

struct KafkaSource;
impl DataSource for KafkaSource {}

struct CatalogReader {
    predicates: Vec<Predicate>,
}

impl SupportsPredicatePushdown for CatalogReader {
    fn pushed_predicates(&self) -> Vec<Predicate> {
        self.predicates.clone()
    }
}

impl ScanReader for CatalogReader {
    fn predicate_pushdown(&self) -> Option<&dyn SupportsPredicatePushdown> {
        Some(self)
    }
}

struct LegacyReader {
    filters: Vec<Filter>,
}

impl SupportsFilterPushdown for LegacyReader {
    fn pushed_filters(&self) -> Vec<Filter> {
        self.filters.clone()
    }
}

impl ScanReader for LegacyReader {
    fn filter_pushdown(&self) -> Option<&dyn SupportsFilterPushdown> {
        Some(self)
    }
}

fn schema() -> Vec<Attribute> {
    vec![
        Attribute::new(1, "offset", DataType::Int64).with_nullable(false),
        Attribute::new(2, "key", DataType::Binary),
        Attribute::new(3, "value", DataType::Utf8),
    ]
}

fn streaming_scan(predicates: Vec<Predicate>) -> ScanNode {
    ScanNode::new(
        ScanNodeKind::StreamingScan,
        schema(),
        Arc::new(KafkaSource),
        Arc::new(CatalogReader { predicates }),
    )
}

#[test]
fn equivalent_scans_share_a_cache_entry() {
    let mut cache: HashMap<ScanNode, &str> = HashMap::new();
    cache.insert(
        streaming_scan(vec![Predicate::gt("offset", 100), Predicate::is_not_null("key")]),
        "compiled-1",
    );

    let reordered =
        streaming_scan(vec![Predicate::is_not_null("key"), Predicate::gt("offset", 100)]);

    assert_eq!(cache.get(&reordered), Some(&"compiled-1"));
    assert_eq!(cache.get(&streaming_scan(Vec::new())), None);
}

#[test]
fn fingerprints_key_ordered_caches() {
    let mut by_fingerprint: BTreeMap<ScanFingerprint, ScanNode> = BTreeMap::new();
    let node = streaming_scan(vec![Predicate::gt("offset", 100)]);
    by_fingerprint.insert(node.fingerprint(), node.clone());

    let twin = streaming_scan(vec![Predicate::gt("offset", 100)]);
    assert_eq!(by_fingerprint.get(&twin.fingerprint()), Some(&node));
    assert_eq!(twin.fingerprint().as_hex().len(), 64);
}

#[test]
fn registry_sources_build_equal_nodes() {
    let registry: HashMap<&str, Arc<dyn DataSource>> = HashMap::from([
        ("kafka-a", Arc::new(KafkaSource) as Arc<dyn DataSource>),
        ("kafka-b", Arc::new(KafkaSource) as Arc<dyn DataSource>),
    ]);
    let node_for = |name: &str| {
        ScanNode::new(
            ScanNodeKind::Relation,
            schema(),
            Arc::clone(&registry[name]),
            Arc::new(CatalogReader {
                predicates: vec![Predicate::gt("offset", 100)],
            }),
        )
    };

    let a = node_for("kafka-a");
    let b = node_for("kafka-b");

    assert_eq!(a, b);
    assert_eq!(a.identity_hash(), b.identity_hash());
    assert_eq!(a.fingerprint(), b.fingerprint());
    assert_eq!(a.source_identity().simple_name(), "KafkaSource");
    assert!(a.describe_with(&DescribeOptions::default()).starts_with("KafkaSource[offset"));
}

#[test]
fn flat_and_structured_vocabularies_are_distinct() {
    let structured = ScanNode::new(
        ScanNodeKind::Relation,
        schema(),
        Arc::new(KafkaSource),
        Arc::new(CatalogReader {
            predicates: vec![Predicate::gt("offset", 100)],
        }),
    );
    let flat = ScanNode::new(
        ScanNodeKind::Relation,
        schema(),
        Arc::new(KafkaSource),
        Arc::new(LegacyReader {
            filters: vec![Filter::gt("offset", 100)],
        }),
    );

    assert_ne!(structured, flat);
    assert_eq!(
        flat.describe_with(&DescribeOptions::default()),
        "KafkaSource[offset, key, value] (PushedFilter: [GreaterThan(offset,100)])"
    );
}

#[test]
fn toml_configured_redaction_applies_to_descriptors() {
    let config = PlanidConfig::from_toml_str(
        r#"
        [describe]
        max_fields = 2

        [redaction]
        value_patterns = ["sk_live_[A-Za-z0-9]+"]
        key_patterns = ["(?i)sasl"]
        "#,
    )
    .expect("config should parse");
    let options = DescribeOptions::from_config(&config).expect("patterns should compile");

    let node = streaming_scan(vec![Predicate::eq("key", "sk_live_abc123")])
        .with_options([("sasl.password", "pw"), ("topic", "events")]);
    let described = node.describe_with(&options);

    assert!(!described.contains("sk_live_abc123"));
    assert!(!described.contains("=pw"));
    assert_eq!(
        described,
        format!(
            "KafkaSource[offset, ... 2 more fields] \
             (PushedFilter: [key = '{REDACTION_REPLACEMENT}'], \
             Options: [sasl.password={REDACTION_REPLACEMENT},topic=events])"
        )
    );
}
