//! Tier classification from service names and image references.

use crate::ir::{ServiceNode, Tier, TierHint};

/// Keyword rules checked in order; the first hit wins. Data-store entries
/// come before edge entries, so a service matching both (say an admin UI
/// built on a database image) lands in the data tier.
///
/// Extending classification means adding a row here, not adding branches.
const TIER_KEYWORDS: &[(&str, Tier)] = &[
    ("postgres", Tier::Data),
    ("mysql", Tier::Data),
    ("mariadb", Tier::Data),
    ("mongo", Tier::Data),
    ("redis", Tier::Data),
    ("cassandra", Tier::Data),
    ("elasticsearch", Tier::Data),
    ("opensearch", Tier::Data),
    ("clickhouse", Tier::Data),
    ("kafka", Tier::Data),
    ("rabbitmq", Tier::Data),
    ("nats", Tier::Data),
    ("minio", Tier::Data),
    ("sqlite", Tier::Data),
    ("memcached", Tier::Data),
    ("etcd", Tier::Data),
    ("couch", Tier::Data),
    ("db", Tier::Data),
    ("database", Tier::Data),
    ("store", Tier::Data),
    ("bucket", Tier::Data),
    ("broker", Tier::Data),
    ("cache", Tier::Data),
    ("queue", Tier::Data),
    ("nginx", Tier::Frontend),
    ("haproxy", Tier::Frontend),
    ("traefik", Tier::Frontend),
    ("caddy", Tier::Frontend),
    ("envoy", Tier::Frontend),
    ("apache", Tier::Frontend),
    ("httpd", Tier::Frontend),
    ("react", Tier::Frontend),
    ("angular", Tier::Frontend),
    ("vue", Tier::Frontend),
    ("svelte", Tier::Frontend),
    ("web", Tier::Frontend),
    ("gateway", Tier::Frontend),
    ("balancer", Tier::Frontend),
    ("frontend", Tier::Frontend),
    ("ui", Tier::Frontend),
    ("proxy", Tier::Frontend),
    ("ingress", Tier::Frontend),
];

/// Assign a node to its tier.
///
/// An explicit database hint wins outright. Otherwise the id and image are
/// lowercased and scanned against the keyword table; no match means the
/// middle tier. Pure function of the node, so classification never depends
/// on the rest of the manifest.
pub fn classify(node: &ServiceNode) -> Tier {
    if node.tier_hint == Some(TierHint::Database) {
        return Tier::Data;
    }
    let id = node.id.to_ascii_lowercase();
    let image = node.image.to_ascii_lowercase();
    TIER_KEYWORDS
        .iter()
        .find(|(keyword, _)| id.contains(keyword) || image.contains(keyword))
        .map(|&(_, tier)| tier)
        .unwrap_or(Tier::Middle)
}
