//! The single mutable application state driven by the event loop.

use ratatui::widgets::ListState;

use crate::catalog::{group_by_language, language_options, normalize};
use crate::logic::recompute;
use crate::state::{
    FilterState, LanguageGroup, LoadState, SourceRecord, VisibilityProjection,
};

/// Mutable state for the whole TUI session.
///
/// There is exactly one instance, mutated only by the synchronous event
/// handlers and read by the render pass; the two never interleave.
pub struct AppState {
    /// Catalog load lifecycle; terminal states disable all interaction.
    pub load: LoadState,
    /// Raw records as delivered by the feed (kept for rendering).
    pub records: Vec<SourceRecord>,
    /// Fixed render skeleton, computed once after load.
    pub groups: Vec<LanguageGroup>,
    /// Selectable language labels, `Multi-Language` first.
    pub language_options: Vec<String>,
    /// Current filter constraints.
    pub filters: FilterState,
    /// Visibility flags and counts for the current filters.
    pub projection: VisibilityProjection,
    /// Selection index among the currently visible record rows.
    pub selected: usize,
    /// ratatui list selection mirror for the catalog list.
    pub list_state: ListState,
    /// Cursor into the language cycle: 0 = all, 1.. = `language_options`.
    pub language_index: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            load: LoadState::Loading,
            records: Vec::new(),
            groups: Vec::new(),
            language_options: Vec::new(),
            filters: FilterState::default(),
            projection: VisibilityProjection::default(),
            selected: 0,
            list_state: ListState::default(),
            language_index: 0,
        }
    }
}

impl AppState {
    /// What: Install a loaded catalog and build the fixed render order.
    ///
    /// Inputs:
    /// - `records`: Records from a successful feed load (non-empty).
    ///
    /// Output:
    /// - Normalizes, derives the language option list, groups, and runs the
    ///   initial visibility pass so counts are correct before any input.
    pub fn set_catalog(&mut self, records: Vec<SourceRecord>) {
        let decorated = normalize(&records);
        self.language_options = language_options(&decorated);
        self.groups = group_by_language(decorated);
        self.records = records;
        self.load = LoadState::Loaded;
        self.refresh_visibility();
    }

    /// What: Re-run the visibility projection after any filter change.
    ///
    /// Output:
    /// - Replaces the projection and clamps the selection into the new
    ///   visible range (cleared when nothing is visible).
    pub fn refresh_visibility(&mut self) {
        self.projection = recompute(&self.groups, &self.filters);
        if self.projection.total == 0 {
            self.selected = 0;
            self.list_state.select(None);
        } else {
            self.selected = self.selected.min(self.projection.total - 1);
        }
    }

    /// What: Cycle the language selection forward or backward.
    ///
    /// Inputs:
    /// - `forward`: Direction through "all languages" plus the option list.
    pub fn cycle_language(&mut self, forward: bool) {
        let n = self.language_options.len() + 1;
        self.language_index = if forward {
            (self.language_index + 1) % n
        } else {
            (self.language_index + n - 1) % n
        };
        self.filters.language = if self.language_index == 0 {
            String::new()
        } else {
            self.language_options[self.language_index - 1].clone()
        };
        self.refresh_visibility();
    }

    /// What: Cycle the rating filter to its next value.
    pub fn cycle_rating(&mut self) {
        self.filters.rating = self.filters.rating.next();
        self.refresh_visibility();
    }

    /// What: Append a character to the query and re-filter.
    pub fn push_query_char(&mut self, c: char) {
        self.filters.query.push(c);
        self.refresh_visibility();
    }

    /// What: Delete the last query character and re-filter.
    pub fn pop_query_char(&mut self) {
        self.filters.query.pop();
        self.refresh_visibility();
    }

    /// What: Move the selection over the visible record rows.
    ///
    /// Inputs:
    /// - `delta`: Signed step; the result saturates at the list edges.
    pub fn move_selection(&mut self, delta: i64) {
        if self.projection.total == 0 {
            return;
        }
        let last = self.projection.total - 1;
        let cur = i64::try_from(self.selected).unwrap_or(0);
        let next = cur.saturating_add(delta).clamp(0, i64::try_from(last).unwrap_or(0));
        self.selected = usize::try_from(next).unwrap_or(0);
    }
}
