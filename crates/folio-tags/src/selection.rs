//! User-selected category sets for gallery filters.

use serde::{Deserialize, Serialize};

/// How a selection is tested against an item's labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Item carries at least one selected label.
    #[default]
    Any,
    /// Item carries every selected label.
    All,
}

/// An ordered set of selected labels.
///
/// Labels enter through `toggle` or a deduplicating `collect`, so a
/// selection never holds duplicates. Order is selection order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Selection<C> {
    selected: Vec<C>,
}

impl<C> Default for Selection<C> {
    fn default() -> Self {
        Self { selected: Vec::new() }
    }
}

impl<C: Copy + Eq> Selection<C> {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `label` if absent, remove it if present.
    ///
    /// Returns `true` when the label is selected afterwards.
    pub fn toggle(&mut self, label: C) -> bool {
        if let Some(index) = self.selected.iter().position(|s| *s == label) {
            self.selected.remove(index);
            false
        } else {
            self.selected.push(label);
            true
        }
    }

    pub fn contains(&self, label: C) -> bool {
        self.selected.contains(&label)
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = C> + '_ {
        self.selected.iter().copied()
    }

    /// Test an item's labels against this selection.
    ///
    /// An empty selection matches everything.
    pub fn matches<I>(&self, labels: I, mode: MatchMode) -> bool
    where
        I: IntoIterator<Item = C>,
    {
        if self.selected.is_empty() {
            return true;
        }
        let labels: Vec<C> = labels.into_iter().collect();
        match mode {
            MatchMode::Any => self.selected.iter().any(|s| labels.contains(s)),
            MatchMode::All => self.selected.iter().all(|s| labels.contains(s)),
        }
    }
}

impl<C: Copy + Eq> FromIterator<C> for Selection<C> {
    fn from_iter<T: IntoIterator<Item = C>>(iter: T) -> Self {
        let mut selection = Self::new();
        for label in iter {
            if !selection.contains(label) {
                selection.selected.push(label);
            }
        }
        selection
    }
}

impl<'de, C> Deserialize<'de> for Selection<C>
where
    C: Copy + Eq + Deserialize<'de>,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let labels = Vec::<C>::deserialize(deserializer)?;
        Ok(labels.into_iter().collect())
    }
}
