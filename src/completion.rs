//! Completion sources for the quick-connect entry and the shell.

use crate::history::HistoryStore;
use crate::menu::{HostItem, Item, each_item};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use std::fmt;

/// History suggestions shown under the entry box.
pub const MAX_ENTRY_COMPLETIONS: usize = 11;
/// Host actions shown before the "add menu item" action.
pub const MAX_HOST_ACTIONS: usize = 10;

static ESCAPED_CHAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\(.)").expect("valid unescape regex"));

#[derive(Debug, Clone, PartialEq)]
pub enum EntryAction<'a> {
    /// Connect to an existing menu entry.
    Host(&'a HostItem),
    /// Create a menu entry from the typed text.
    AddHost(String),
}

impl fmt::Display for EntryAction<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryAction::Host(host) => write!(f, "Host: {}", host.title),
            EntryAction::AddHost(text) => write!(f, "Add menu item: {}", text),
        }
    }
}

pub fn entry_completions<'a>(history: &'a HistoryStore, text: &str) -> Vec<&'a str> {
    if text.is_empty() {
        return Vec::new();
    }
    history.each_match(text, false).take(MAX_ENTRY_COMPLETIONS).collect()
}

/// Hosts whose title matches `text` (ignoring case, prefix matches first),
/// followed by an action to add `text` as a new entry.
pub fn entry_actions<'a>(items: &'a [Item], text: &str) -> Vec<EntryAction<'a>> {
    if text.is_empty() {
        return Vec::new();
    }

    let needle = text.to_lowercase();
    let mut match_start = Vec::new();
    let mut match_other = Vec::new();
    each_item(items, |_, item| {
        let Some(host) = item.as_host() else {
            return;
        };
        let title = host.title.to_lowercase();
        if title.starts_with(&needle) {
            match_start.push(host);
        } else if title.contains(&needle) {
            match_other.push(host);
        }
    });

    let mut actions: Vec<EntryAction<'a>> = match_start
        .into_iter()
        .chain(match_other)
        .take(MAX_HOST_ACTIONS)
        .map(EntryAction::Host)
        .collect();
    actions.push(EntryAction::AddHost(text.to_string()));
    actions
}

/// Candidates for shell completion of a host argument.
///
/// `prefix` arrives shell-escaped. Host titles must start with it exactly;
/// history entries are matched ignoring case. Duplicates are dropped.
pub fn list_completions(items: &[Item], history: &HistoryStore, prefix: &str) -> Vec<String> {
    let prefix = ESCAPED_CHAR.replace_all(prefix, "$1").into_owned();
    let mut seen = HashSet::new();
    let mut names = Vec::new();

    each_item(items, |_, item| {
        if let Some(host) = item.as_host()
            && host.title.starts_with(prefix.as_str())
            && seen.insert(host.title.clone())
        {
            names.push(host.title.clone());
        }
    });

    for line in history.each_match(&prefix, true) {
        if seen.insert(line.to_string()) {
            names.push(line.to_string());
        }
    }
    names
}

#[cfg(test)]
#[path = "test/completion.rs"]
mod tests;
