//! Grouping of match contexts by key

use std::collections::BTreeMap;

use serde::Serialize;

use crate::context::MatchContext;
use crate::types::PositionKind;

/// All contexts sharing one key
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryEntry {
    pub key: String,
    pub match_text: String,
    pub position_kind: PositionKind,
    pub contexts: Vec<MatchContext>,
}

impl InventoryEntry {
    pub fn count(&self) -> usize {
        self.contexts.len()
    }
}

/// Contexts grouped by key, groups ordered by key
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Inventory {
    entries: BTreeMap<String, InventoryEntry>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_contexts<I>(contexts: I) -> Self
    where
        I: IntoIterator<Item = MatchContext>,
    {
        let mut inventory = Self::new();
        for context in contexts {
            inventory.add(context);
        }
        inventory
    }

    pub fn add(&mut self, context: MatchContext) {
        let entry = self
            .entries
            .entry(context.key().to_string())
            .or_insert_with(|| InventoryEntry {
                key: context.key().to_string(),
                match_text: context.match_text().to_string(),
                position_kind: context.position_kind(),
                contexts: Vec::new(),
            });
        entry.contexts.push(context);
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&InventoryEntry> {
        self.entries.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &InventoryEntry> {
        self.entries.values()
    }

    pub fn total_occurrences(&self) -> usize {
        self.entries.values().map(InventoryEntry::count).sum()
    }
}
