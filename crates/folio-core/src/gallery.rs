//! Gallery presenter: owns a collection and its filters, and keeps the
//! visible subset in step with both.
//!
//! Every mutation recomputes `visible` synchronously through
//! [`filter::apply`]. There is no debouncing or incremental diffing; the
//! collections are tens of items.

use folio_tags::MatchMode;

use crate::domain::{Catalogued, Certification, Locale, LocaleChange, Project};
use crate::filter::{self, FilterSpec, SortOrder};

/// State behind one gallery page.
#[derive(Debug, Clone)]
pub struct Gallery<I: Catalogued> {
    items: Vec<I>,
    filters: FilterSpec<I>,
    visible: Vec<I>,
    locale: Locale,
    loading: bool,
    expanded: Option<u32>,
}

pub type ProjectGallery = Gallery<Project>;
pub type CertificationGallery = Gallery<Certification>;

impl<I: Catalogued> Gallery<I> {
    /// Empty gallery waiting for its first load.
    pub fn new(locale: Locale) -> Self {
        Self {
            items: Vec::new(),
            filters: FilterSpec::default(),
            visible: Vec::new(),
            locale,
            loading: true,
            expanded: None,
        }
    }

    /// Gallery over an already-loaded collection.
    pub fn with_items(locale: Locale, items: Vec<I>) -> Self {
        let mut gallery = Self::new(locale);
        gallery.finish_load(locale, items);
        gallery
    }

    // ===== Loading =====

    /// Mark a load for `locale` as in flight.
    pub fn begin_load(&mut self, locale: Locale) {
        self.locale = locale;
        self.loading = true;
    }

    /// Install a loaded collection.
    ///
    /// A result for any locale other than the most recently requested one is
    /// stale and discarded; returns whether the collection was installed.
    pub fn finish_load(&mut self, locale: Locale, items: Vec<I>) -> bool {
        if locale != self.locale {
            tracing::debug!(
                "Discarding stale {} collection (gallery now shows {})",
                locale,
                self.locale
            );
            return false;
        }
        self.items = items;
        self.loading = false;
        self.recompute();
        true
    }

    /// Drop the collection for the old locale and wait for the new one.
    pub fn on_locale_change(&mut self, change: &LocaleChange) {
        self.items.clear();
        self.visible.clear();
        self.expanded = None;
        self.begin_load(change.current);
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    // ===== Filters =====

    pub fn set_search(&mut self, search: &str) {
        self.filters.search = search.to_string();
        self.recompute();
    }

    pub fn toggle_category(&mut self, category: I::Category) {
        self.filters.categories.toggle(category);
        self.recompute();
    }

    pub fn toggle_metadata_category(&mut self, category: I::MetaCategory) {
        self.filters.metadata_categories.toggle(category);
        self.recompute();
    }

    /// Toggle a technology name filter; names compare case-insensitively.
    pub fn toggle_metadata_name(&mut self, name: &str) {
        self.filters.toggle_metadata_name(name);
        self.recompute();
    }

    pub fn set_category_mode(&mut self, mode: MatchMode) {
        self.filters.category_mode = mode;
        self.recompute();
    }

    pub fn set_kind(&mut self, kind: Option<I::Kind>) {
        self.filters.kind = kind;
        self.recompute();
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        self.filters.sort = sort;
        self.recompute();
    }

    /// Set the sort from its wire string; unknown strings keep input order.
    pub fn set_sort_str(&mut self, sort: &str) {
        let order = sort.parse().unwrap_or(SortOrder::Unsorted);
        self.set_sort(order);
    }

    pub fn clear_categories(&mut self) {
        self.filters.categories.clear();
        self.recompute();
    }

    /// Restore every filter to its default.
    pub fn reset(&mut self) {
        self.filters = FilterSpec::default();
        self.recompute();
    }

    pub fn filters(&self) -> &FilterSpec<I> {
        &self.filters
    }

    pub fn has_active_filters(&self) -> bool {
        !self.filters.is_default()
    }

    pub fn is_category_selected(&self, category: I::Category) -> bool {
        self.filters.categories.contains(category)
    }

    pub fn is_metadata_category_selected(&self, category: I::MetaCategory) -> bool {
        self.filters.metadata_categories.contains(category)
    }

    pub fn is_metadata_name_selected(&self, name: &str) -> bool {
        self.filters.has_metadata_name(name)
    }

    pub fn sort_label_key(&self) -> String {
        self.filters.sort.label_key(I::LABEL_PREFIX)
    }

    // ===== Output =====

    pub fn items(&self) -> &[I] {
        &self.items
    }

    /// Items passing the current filters, in display order.
    pub fn visible(&self) -> &[I] {
        &self.visible
    }

    /// Find a loaded item by identifier, visible or not.
    pub fn find(&self, id: u32) -> Option<&I> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Expand `id`, or collapse it if it is already the expanded card.
    pub fn toggle_expanded(&mut self, id: u32) {
        self.expanded = if self.expanded == Some(id) { None } else { Some(id) };
    }

    pub fn is_expanded(&self, id: u32) -> bool {
        self.expanded == Some(id)
    }

    fn recompute(&mut self) {
        self.visible = filter::apply(&self.items, &self.filters);
    }
}
