use serde::Serialize;

/// Horizontal band a service is drawn in. Ordinals are the top-to-bottom
/// draw order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Frontend = 0,
    Middle = 1,
    Data = 2,
}

impl Tier {
    pub const COUNT: usize = 3;

    /// All tiers in draw order.
    pub const ALL: [Tier; Tier::COUNT] = [Tier::Frontend, Tier::Middle, Tier::Data];

    pub fn ordinal(self) -> usize {
        self as usize
    }
}

/// Explicit classification carried by the manifest. The only override the
/// classifier honors today; keyword heuristics cover everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierHint {
    Database,
}

#[derive(Debug, Clone)]
pub struct ServiceNode {
    pub id: String,
    /// Container image reference; empty when the manifest builds the image.
    pub image: String,
    pub tier_hint: Option<TierHint>,
    /// Ids of services this node points at, sorted and deduplicated.
    pub links: Vec<String>,
}

impl ServiceNode {
    pub fn new(id: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            image: image.into(),
            tier_hint: None,
            links: Vec::new(),
        }
    }

    pub fn with_links<I, S>(mut self, links: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.links = links.into_iter().map(Into::into).collect();
        self
    }
}

/// Nodes grouped by tier. Indexed by ordinal, so iteration order is the
/// draw order without any runtime sorting.
#[derive(Debug, Default)]
pub struct TierBuckets<'a> {
    buckets: [Vec<&'a ServiceNode>; Tier::COUNT],
}

impl<'a> TierBuckets<'a> {
    pub fn push(&mut self, tier: Tier, node: &'a ServiceNode) {
        self.buckets[tier.ordinal()].push(node);
    }

    pub fn tier(&self, tier: Tier) -> &[&'a ServiceNode] {
        &self.buckets[tier.ordinal()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Tier, &[&'a ServiceNode])> + '_ {
        Tier::ALL.into_iter().map(move |tier| (tier, self.tier(tier)))
    }

    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }
}
