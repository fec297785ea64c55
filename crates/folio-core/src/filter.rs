//! Filter/sort engine for gallery collections.
//!
//! `apply` is a pure function of a collection and a `FilterSpec`:
//!
//! 1. text search (trimmed, case-insensitive substring over the item's
//!    search fields)
//! 2. categories (any/all of the selected labels)
//! 3. metadata categories (some resolved metadata carries a selected label)
//! 4. metadata names (some resolved metadata has a selected name)
//! 5. kind (exact match, for items that have one)
//!
//! followed by a stable sort. Empty predicates are no-ops.

use folio_tags::{MatchMode, Selection};
use serde::{Deserialize, Serialize};
use std::cmp::{Ordering, Reverse};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::domain::Catalogued;

/// Display order of a gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Highest identifier first
    #[default]
    Latest,
    /// Lowest identifier first
    Oldest,
    TitleAsc,
    TitleDesc,
    /// Keep input order. Unknown sort strings land here.
    #[serde(other)]
    Unsorted,
}

impl SortOrder {
    /// Orders offered in sort pickers.
    pub const OPTIONS: [SortOrder; 4] = [
        SortOrder::Latest,
        SortOrder::Oldest,
        SortOrder::TitleAsc,
        SortOrder::TitleDesc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Latest => "latest",
            Self::Oldest => "oldest",
            Self::TitleAsc => "title-asc",
            Self::TitleDesc => "title-desc",
            Self::Unsorted => "unsorted",
        }
    }

    /// Translation key under a gallery prefix, e.g. `projectsGallery.sort.titleAsc`.
    ///
    /// `Unsorted` has no picker entry and shows the first option's label.
    pub fn label_key(&self, prefix: &str) -> String {
        let leaf = match self {
            Self::Latest | Self::Unsorted => "latest",
            Self::Oldest => "oldest",
            Self::TitleAsc => "titleAsc",
            Self::TitleDesc => "titleDesc",
        };
        format!("{prefix}.sort.{leaf}")
    }
}

impl FromStr for SortOrder {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "latest" => Self::Latest,
            "oldest" => Self::Oldest,
            "title-asc" => Self::TitleAsc,
            "title-desc" => Self::TitleDesc,
            _ => Self::Unsorted,
        })
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The user's current filter and sort choices for one gallery.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSpec<I: Catalogued> {
    /// Free-text search, trimmed before use
    pub search: String,
    pub categories: Selection<I::Category>,
    pub category_mode: MatchMode,
    pub metadata_categories: Selection<I::MetaCategory>,
    /// Selected technology names, compared case-insensitively
    pub metadata_names: Vec<String>,
    /// `None` means every kind
    pub kind: Option<I::Kind>,
    pub sort: SortOrder,
}

impl<I: Catalogued> Default for FilterSpec<I> {
    fn default() -> Self {
        Self {
            search: String::new(),
            categories: Selection::new(),
            category_mode: MatchMode::Any,
            metadata_categories: Selection::new(),
            metadata_names: Vec::new(),
            kind: None,
            sort: SortOrder::Latest,
        }
    }
}

impl<I: Catalogued> FilterSpec<I> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether every field is at its default. A whitespace-only search counts
    /// as empty.
    pub fn is_default(&self) -> bool {
        self.search.trim().is_empty()
            && self.categories.is_empty()
            && self.category_mode == MatchMode::Any
            && self.metadata_categories.is_empty()
            && self.metadata_names.is_empty()
            && self.kind.is_none()
            && self.sort == SortOrder::Latest
    }

    /// Whether `item` passes every predicate.
    pub fn matches(&self, item: &I) -> bool {
        self.matches_search(item)
            && self
                .categories
                .matches(item.categories().iter().copied(), self.category_mode)
            && self
                .metadata_categories
                .matches(item.metadata_categories(), MatchMode::Any)
            && self.matches_names(item)
            && self.kind.map_or(true, |kind| item.kind() == Some(kind))
    }

    /// Add `name` if absent (ignoring case), remove it if present.
    ///
    /// Returns `true` when the name is selected afterwards.
    pub fn toggle_metadata_name(&mut self, name: &str) -> bool {
        let name = name.trim();
        match self.metadata_names.iter().position(|n| n.eq_ignore_ascii_case(name)) {
            Some(index) => {
                self.metadata_names.remove(index);
                false
            }
            None => {
                self.metadata_names.push(name.to_string());
                true
            }
        }
    }

    pub fn has_metadata_name(&self, name: &str) -> bool {
        let name = name.trim();
        self.metadata_names.iter().any(|n| n.eq_ignore_ascii_case(name))
    }

    fn matches_names(&self, item: &I) -> bool {
        self.metadata_names.is_empty()
            || item.metadata_names().into_iter().any(|n| self.has_metadata_name(n))
    }

    fn matches_search(&self, item: &I) -> bool {
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        item.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Filter then sort `items`. The input is left untouched.
pub fn apply<I: Catalogued>(items: &[I], spec: &FilterSpec<I>) -> Vec<I> {
    let mut kept: Vec<I> = items.iter().filter(|item| spec.matches(item)).cloned().collect();
    sort(&mut kept, spec.sort);
    kept
}

/// Stable in-place sort.
pub fn sort<I: Catalogued>(items: &mut [I], order: SortOrder) {
    match order {
        SortOrder::Latest => items.sort_by_key(|item| Reverse(item.id())),
        SortOrder::Oldest => items.sort_by_key(|item| item.id()),
        SortOrder::TitleAsc => items.sort_by_cached_key(|item| title_key(item.title())),
        SortOrder::TitleDesc => {
            items.sort_by_cached_key(|item| Reverse(title_key(item.title())))
        }
        SortOrder::Unsorted => {}
    }
}

/// The `count` most recent items, newest first.
pub fn latest<I: Catalogued>(items: &[I], count: usize) -> Vec<I> {
    let mut sorted = items.to_vec();
    sort(&mut sorted, SortOrder::Latest);
    sorted.truncate(count);
    sorted
}

/// Locale-aware title comparison: accents and case are ignored first, then
/// the raw strings break the tie.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    title_key(a).cmp(&title_key(b))
}

fn title_key(title: &str) -> (String, String) {
    (collation_key(title), title.to_string())
}

/// Fold a string for comparison: decompose, strip combining marks, lowercase.
pub fn collation_key(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Certification, CertificationKind, Project, Technology};
    use folio_tags::{CertificationTag, ProjectCategory, TechCategory};
    use rstest::rstest;

    fn project(id: u32, title: &str) -> Project {
        Project::new(id, title)
    }

    fn ids<I: Catalogued>(items: &[I]) -> Vec<u32> {
        items.iter().map(|i| i.id()).collect()
    }

    #[test]
    fn default_spec_sorts_newest_first() {
        let items = vec![project(1, "B"), project(3, "C"), project(2, "A")];
        let out = apply(&items, &FilterSpec::default());
        assert_eq!(ids(&out), vec![3, 2, 1]);
        assert_eq!(ids(&items), vec![1, 3, 2]);
    }

    #[rstest]
    #[case(SortOrder::Latest, vec![2, 1])]
    #[case(SortOrder::Oldest, vec![1, 2])]
    #[case(SortOrder::TitleAsc, vec![2, 1])]
    #[case(SortOrder::TitleDesc, vec![1, 2])]
    #[case(SortOrder::Unsorted, vec![1, 2])]
    fn sort_orders(#[case] order: SortOrder, #[case] expected: Vec<u32>) {
        let items = vec![project(1, "B"), project(2, "A")];
        let spec = FilterSpec {
            sort: order,
            ..FilterSpec::default()
        };
        assert_eq!(ids(&apply(&items, &spec)), expected);
    }

    #[test]
    fn search_is_trimmed_and_case_insensitive() {
        let items = vec![project(1, "My Project"), project(2, "Blog")];
        let spec = FilterSpec {
            search: "  Proj  ".into(),
            ..FilterSpec::default()
        };
        assert_eq!(ids(&apply(&items, &spec)), vec![1]);
    }

    #[test]
    fn project_search_ignores_description() {
        let mut p = project(1, "Blog");
        p.description = "a rust project".into();
        let spec = FilterSpec {
            search: "rust".into(),
            ..FilterSpec::default()
        };
        assert!(apply(&[p], &spec).is_empty());
    }

    #[test]
    fn certification_search_covers_provider_and_description() {
        let mut a = Certification::new(1, CertificationKind::Standalone, "CCNA", "Cisco");
        a.description = "Routing and switching".into();
        let b = Certification::new(2, CertificationKind::SkillTrack, "Data Analyst", "DataCamp");

        let mut spec = FilterSpec {
            search: "cisco".into(),
            ..FilterSpec::default()
        };
        assert_eq!(ids(&apply(&[a.clone(), b.clone()], &spec)), vec![1]);

        spec.search = "SWITCH".into();
        assert_eq!(ids(&apply(&[a.clone(), b.clone()], &spec)), vec![1]);

        spec.search = "datacamp".into();
        assert_eq!(ids(&apply(&[a, b], &spec)), vec![2]);
    }

    #[test]
    fn category_filter_any_and_all() {
        let mut web = project(1, "w");
        web.categories = vec![ProjectCategory::Web];
        let mut both = project(2, "b");
        both.categories = vec![ProjectCategory::Web, ProjectCategory::Ai];
        let none = project(3, "n");
        let items = vec![web, both, none];

        let mut spec = FilterSpec::default();
        spec.categories.toggle(ProjectCategory::Web);
        spec.categories.toggle(ProjectCategory::Ai);
        assert_eq!(ids(&apply(&items, &spec)), vec![2, 1]);

        spec.category_mode = MatchMode::All;
        assert_eq!(ids(&apply(&items, &spec)), vec![2]);
    }

    #[test]
    fn metadata_category_filter() {
        let mut a = project(1, "a");
        a.technologies = vec![Technology::new("Angular", TechCategory::Frontend)];
        let mut b = project(2, "b");
        b.technologies = vec![
            Technology::new("Rust", TechCategory::Language),
            Technology::new("Postgres", TechCategory::Database),
        ];
        let mut spec = FilterSpec::default();
        spec.metadata_categories.toggle(TechCategory::Database);
        assert_eq!(ids(&apply(&[a, b], &spec)), vec![2]);
    }

    #[test]
    fn metadata_name_filter() {
        let mut a = project(1, "a");
        a.technologies = vec![Technology::new("Angular", TechCategory::Frontend)];
        let mut b = project(2, "b");
        b.technologies = vec![
            Technology::new("Rust", TechCategory::Language),
            Technology::new("Postgres", TechCategory::Database),
        ];
        let c = project(3, "c");
        let items = vec![a, b, c];

        let mut spec = FilterSpec::default();
        assert!(spec.toggle_metadata_name("rust"));
        assert_eq!(ids(&apply(&items, &spec)), vec![2]);

        spec.toggle_metadata_name("Angular");
        assert_eq!(ids(&apply(&items, &spec)), vec![2, 1]);
        assert!(!spec.is_default());

        assert!(!spec.toggle_metadata_name(" RUST "));
        assert!(!spec.toggle_metadata_name("angular"));
        assert!(spec.is_default());
        assert_eq!(ids(&apply(&items, &spec)), vec![3, 2, 1]);
    }

    #[test]
    fn kind_filter_is_exact() {
        let a = Certification::new(1, CertificationKind::Standalone, "a", "p");
        let b = Certification::new(2, CertificationKind::SkillTrack, "b", "p");
        let spec = FilterSpec {
            kind: Some(CertificationKind::SkillTrack),
            ..FilterSpec::default()
        };
        assert_eq!(ids(&apply(&[a, b], &spec)), vec![2]);
    }

    #[test]
    fn predicates_combine_with_and() {
        let mut a = Certification::new(1, CertificationKind::Standalone, "Python Basics", "p");
        a.tags = vec![CertificationTag::Python];
        let mut b = Certification::new(2, CertificationKind::Standalone, "SQL", "p");
        b.tags = vec![CertificationTag::Python, CertificationTag::Sql];

        let mut spec = FilterSpec::default();
        spec.categories.toggle(CertificationTag::Python);
        spec.search = "sql".into();
        assert_eq!(ids(&apply(&[a, b], &spec)), vec![2]);
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let items = vec![project(5, "Same"), project(2, "same"), project(9, "Same")];
        let spec = FilterSpec {
            sort: SortOrder::TitleAsc,
            ..FilterSpec::default()
        };
        // "Same" < "same" on the raw tiebreak; the two "Same" keep input order.
        assert_eq!(ids(&apply(&items, &spec)), vec![5, 9, 2]);
    }

    #[test]
    fn accents_fold_for_comparison() {
        assert_eq!(collation_key("Éclair"), "eclair");
        assert_eq!(compare_titles("éclair", "Ezra"), Ordering::Less);
        assert_eq!(compare_titles("apple", "Banana"), Ordering::Less);
    }

    #[test]
    fn sort_strings_parse_with_fallback() {
        assert_eq!("title-asc".parse::<SortOrder>(), Ok(SortOrder::TitleAsc));
        assert_eq!("random".parse::<SortOrder>(), Ok(SortOrder::Unsorted));
        let s: SortOrder = serde_json::from_str("\"bogus\"").unwrap();
        assert_eq!(s, SortOrder::Unsorted);
        assert_eq!(SortOrder::TitleDesc.to_string(), "title-desc");
    }

    #[test]
    fn sort_label_keys() {
        assert_eq!(SortOrder::TitleAsc.label_key("projectsGallery"), "projectsGallery.sort.titleAsc");
        assert_eq!(
            SortOrder::Unsorted.label_key("certificationsGallery"),
            "certificationsGallery.sort.latest"
        );
    }

    #[test]
    fn latest_takes_prefix() {
        let items = vec![project(1, "a"), project(4, "b"), project(2, "c"), project(3, "d")];
        assert_eq!(ids(&latest(&items, 3)), vec![4, 3, 2]);
        assert_eq!(latest(&items, 10).len(), 4);
        assert!(latest(&items, 0).is_empty());
    }

    #[test]
    fn is_default_ignores_whitespace_search() {
        let mut spec: FilterSpec<Project> = FilterSpec::default();
        spec.search = "   ".into();
        assert!(spec.is_default());
        spec.sort = SortOrder::Oldest;
        assert!(!spec.is_default());
    }
}
