//! First-run menu import from `~/.ssh/known_hosts`
//!
//! Each key line contributes a group of aliases for one host. Hashed entries
//! (`|1|salt|hash ...`) hide the hostname and are only counted. For every group
//! a display name and a connect address are chosen, and the result becomes a
//! flat list of host records sorted by name.

use crate::menu::{HostItem, Item, item_to_record};
use crate::{log_debug, log_info};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_yml::Value;
use std::collections::{BTreeMap, HashMap};
use std::error::Error;
use std::fmt;
use std::net::ToSocketAddrs;
use std::path::PathBuf;

static HASHED_ENTRY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[|]\d+[|]").expect("valid hashed entry regex"));
static KEY_ENTRY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([^|]\S*)\s+ssh-\S+\s+(\S+)").expect("valid key entry regex"));
static IPV4_ADDRESS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}$").expect("valid address regex"));

/// Parameters given to every imported host ahead of its address.
const IMPORTED_SSH_OPTIONS: &str = "-AX";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupError {
    pub address: String,
    pub detail: String,
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Could not resolve '{}': {}", self.address, self.detail)
    }
}

impl Error for LookupError {}

/// Hostname canonicalization used to pick names and addresses.
pub trait HostResolver {
    fn canonical_name(&self, address: &str) -> Result<String, LookupError>;
}

/// Resolves through the platform resolver.
///
/// Only forward lookups are available, so a resolvable address is returned
/// as given rather than as a reverse-mapped name.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemResolver;

impl HostResolver for SystemResolver {
    fn canonical_name(&self, address: &str) -> Result<String, LookupError> {
        let lookup_error = |detail: String| LookupError {
            address: address.to_string(),
            detail,
        };
        let mut addrs = (address, 0).to_socket_addrs().map_err(|err| lookup_error(err.to_string()))?;
        match addrs.next() {
            Some(_) => Ok(address.to_string()),
            None => Err(lookup_error("no addresses found".to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostAliases {
    /// One alias list per distinct key, in file order.
    pub groups: Vec<Vec<String>>,
    pub hashed_skipped: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportSummary {
    pub records: Vec<Value>,
    /// Number of key groups processed.
    pub processed: usize,
    pub hashed_skipped: usize,
}

impl ImportSummary {
    pub fn message(&self) -> String {
        let mut text = format!("{} host{} imported", self.processed, if self.processed == 1 { "" } else { "s" });
        if self.hashed_skipped > 0 {
            text.push_str(&format!(" ({} hashed hostnames were skipped)", self.hashed_skipped));
        }
        text
    }
}

/// `~/.ssh/known_hosts`
pub fn default_known_hosts_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".ssh").join("known_hosts"))
}

pub fn list_host_aliases(text: &str) -> HostAliases {
    let mut result = HostAliases::default();
    let mut group_by_key: HashMap<&str, usize> = HashMap::new();

    for line in text.lines() {
        if HASHED_ENTRY.is_match(line) {
            result.hashed_skipped += 1;
            continue;
        }
        let Some(captures) = KEY_ENTRY.captures(line) else {
            continue;
        };
        let (Some(aliases), Some(key)) = (captures.get(1), captures.get(2)) else {
            continue;
        };

        let index = *group_by_key.entry(key.as_str()).or_insert_with(|| {
            result.groups.push(Vec::new());
            result.groups.len() - 1
        });
        result.groups[index].extend(aliases.as_str().split(',').map(str::to_string));
    }

    log_debug!(
        "Found {} known host groups, skipped {} hashed entries",
        result.groups.len(),
        result.hashed_skipped
    );
    result
}

/// Shortest alias that is not a dotted IPv4 address. Failing that, the
/// canonical name of the first address that resolves, then the first alias.
pub fn best_alias(aliases: &[String], resolver: &dyn HostResolver) -> Option<String> {
    let shortest_name = aliases.iter().filter(|alias| !IPV4_ADDRESS.is_match(alias)).min_by_key(|alias| alias.len());
    if let Some(name) = shortest_name {
        return Some(name.clone());
    }

    aliases
        .iter()
        .find_map(|alias| resolver.canonical_name(alias).ok())
        .or_else(|| aliases.first().cloned())
}

/// First candidate (`name`, then `aliases`) that resolves, else the last one.
pub fn best_address(name: &str, aliases: &[String], resolver: &dyn HostResolver) -> String {
    let candidates = || std::iter::once(name).chain(aliases.iter().map(String::as_str));
    candidates()
        .find(|candidate| resolver.canonical_name(candidate).is_ok())
        .or_else(|| candidates().last())
        .unwrap_or(name)
        .to_string()
}

/// Builds host records for every alias group in a known_hosts file.
pub fn import_hosts(text: &str, resolver: &dyn HostResolver) -> ImportSummary {
    let aliases = list_host_aliases(text);
    let mut imported: BTreeMap<String, String> = BTreeMap::new();

    for group in &aliases.groups {
        let Some(name) = best_alias(group, resolver) else {
            continue;
        };
        let address = best_address(&name, group, resolver);
        imported.insert(name, address);
    }

    let records = imported
        .into_iter()
        .map(|(name, address)| {
            let host = HostItem::new(name, format!("{} {}", IMPORTED_SSH_OPTIONS, address));
            Value::Mapping(item_to_record(&Item::Host(host)))
        })
        .collect();

    let summary = ImportSummary {
        records,
        processed: aliases.groups.len(),
        hashed_skipped: aliases.hashed_skipped,
    };
    log_info!("{}", summary.message());
    summary
}

#[cfg(test)]
#[path = "test/known_hosts.rs"]
mod tests;
