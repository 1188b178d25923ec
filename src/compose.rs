//! Compose manifest parsing.
//!
//! The walk is deliberately lenient: a service entry that is not the shape
//! we expect is skipped with a warning, because one malformed entry must
//! not cost the rest of the diagram. Only unparseable YAML is an error.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde_yaml::Value;

use crate::ir::{ServiceNode, TierHint};

/// `$$` escapes, `${VAR}`, `${VAR:-default}` and bare `$VAR` references.
static ENV_VAR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\$|\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}|\$([A-Za-z_][A-Za-z0-9_]*)")
        .unwrap()
});

/// Label key that pins a service to the data tier regardless of its name.
const TIER_LABEL: &str = "stackdeck.tier";

#[derive(Debug, thiserror::Error)]
pub enum ComposeError {
    #[error("invalid manifest YAML: {0}")]
    InvalidManifest(#[from] serde_yaml::Error),
}

/// Parse a compose manifest into service nodes, in document order.
///
/// Blank input and manifests without a `services` mapping both produce an
/// empty list, not an error.
pub fn parse_compose(input: &str) -> Result<Vec<ServiceNode>, ComposeError> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    let interpolated = interpolate_env(input);
    let root: Value = serde_yaml::from_str(&interpolated)?;
    let Some(services) = root.get("services").and_then(Value::as_mapping) else {
        return Ok(Vec::new());
    };

    let mut nodes = Vec::with_capacity(services.len());
    for (key, value) in services {
        let Some(id) = key.as_str() else {
            log::warn!("skipping service with non-string name {key:?}");
            continue;
        };
        if !value.is_mapping() {
            log::warn!("skipping malformed service `{id}`");
            continue;
        }

        let image = value
            .get("image")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let mut links = BTreeSet::new();
        collect_links(value.get("depends_on"), &mut links);
        collect_links(value.get("links"), &mut links);

        nodes.push(ServiceNode {
            id: id.to_string(),
            image,
            tier_hint: tier_hint_from_labels(id, value.get("labels")),
            links: links.into_iter().collect(),
        });
    }
    Ok(nodes)
}

/// Collect service references from a `depends_on` or `links` field.
///
/// Accepts the short list form, the long mapping form (keys are service
/// names), and a single bare string. `links` entries may carry a
/// `SERVICE:ALIAS` suffix; the alias is dropped.
fn collect_links(field: Option<&Value>, links: &mut BTreeSet<String>) {
    match field {
        Some(Value::Sequence(items)) => {
            for item in items {
                if let Some(entry) = item.as_str() {
                    links.insert(strip_alias(entry).to_string());
                }
            }
        }
        Some(Value::Mapping(map)) => {
            for (key, _) in map {
                if let Some(entry) = key.as_str() {
                    links.insert(entry.to_string());
                }
            }
        }
        Some(Value::String(entry)) => {
            links.insert(strip_alias(entry).to_string());
        }
        _ => {}
    }
}

fn strip_alias(entry: &str) -> &str {
    match entry.split_once(':') {
        Some((service, _)) => service,
        None => entry,
    }
}

/// Read the tier label from either label syntax: a mapping of key/value
/// pairs or a list of `key=value` strings.
fn tier_hint_from_labels(id: &str, field: Option<&Value>) -> Option<TierHint> {
    let value = match field? {
        Value::Mapping(map) => map.iter().find_map(|(key, value)| {
            if key.as_str() == Some(TIER_LABEL) {
                value.as_str().map(str::to_string)
            } else {
                None
            }
        }),
        Value::Sequence(items) => items.iter().find_map(|item| {
            let entry = item.as_str()?;
            let (key, value) = entry.split_once('=')?;
            if key.trim() == TIER_LABEL {
                Some(value.trim().to_string())
            } else {
                None
            }
        }),
        _ => None,
    }?;

    match value.trim().to_ascii_lowercase().as_str() {
        "database" | "data" | "db" => Some(TierHint::Database),
        other => {
            log::warn!("ignoring unknown {TIER_LABEL} value `{other}` on service `{id}`");
            None
        }
    }
}

/// Substitute environment variable references before the YAML parse, the
/// way compose itself does. Unset variables without a default become empty
/// strings; `$$` becomes a literal `$`.
fn interpolate_env(input: &str) -> String {
    ENV_VAR_RE
        .replace_all(input, |caps: &Captures<'_>| {
            if &caps[0] == "$$" {
                return "$".to_string();
            }
            let name = caps
                .get(1)
                .or_else(|| caps.get(3))
                .map(|m| m.as_str())
                .unwrap_or_default();
            match std::env::var(name) {
                Ok(value) => value,
                Err(_) => match caps.get(2) {
                    Some(default) => default.as_str().to_string(),
                    None => {
                        log::warn!("environment variable `{name}` is not set");
                        String::new()
                    }
                },
            }
        })
        .into_owned()
}
