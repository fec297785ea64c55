//! Aggregation of labels across a collection (tag pickers, count badges).

use std::collections::BTreeMap;

use crate::category::Category;

/// Every label used by at least one item, sorted by wire string.
pub fn distinct<'a, C, I>(label_lists: I) -> Vec<C>
where
    C: Category,
    I: IntoIterator<Item = &'a [C]>,
{
    let mut seen: Vec<C> = Vec::new();
    for labels in label_lists {
        for label in labels {
            if !seen.contains(label) {
                seen.push(*label);
            }
        }
    }
    seen.sort_by_key(|c| c.slug());
    seen
}

/// Number of items carrying each label.
///
/// A label repeated on one item is counted once for that item.
pub fn counts<'a, C, I>(label_lists: I) -> BTreeMap<C, usize>
where
    C: Category,
    I: IntoIterator<Item = &'a [C]>,
{
    let mut counts = BTreeMap::new();
    for labels in label_lists {
        let mut counted: Vec<C> = Vec::with_capacity(labels.len());
        for label in labels {
            if counted.contains(label) {
                continue;
            }
            counted.push(*label);
            *counts.entry(*label).or_insert(0) += 1;
        }
    }
    counts
}
