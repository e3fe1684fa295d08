//! View-state store: the two persisted display selections plus the transient
//! options-panel flag.

use crate::prefs::{PREF_GROUPING, PREF_SORTING, PreferenceStore};
use crate::types::{GroupingMode, SortingMode};

pub struct ViewState {
    store: Box<dyn PreferenceStore>,
    grouping: GroupingMode,
    sorting: SortingMode,
    options_visible: bool,
}

impl ViewState {
    /// Restore persisted selections, falling back to grouping=status,
    /// sorting=priority when a key is absent or unparseable.
    pub fn init(store: Box<dyn PreferenceStore>) -> Self {
        let grouping: GroupingMode = store
            .get(PREF_GROUPING)
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();
        let sorting: SortingMode = store
            .get(PREF_SORTING)
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();
        Self {
            store,
            grouping,
            sorting,
            options_visible: false,
        }
    }

    pub fn grouping(&self) -> GroupingMode {
        self.grouping
    }

    pub fn sorting(&self) -> SortingMode {
        self.sorting
    }

    pub fn options_visible(&self) -> bool {
        self.options_visible
    }

    /// Update the grouping selection and persist it.
    pub fn set_grouping(&mut self, mode: GroupingMode) {
        self.grouping = mode;
        self.store.set(PREF_GROUPING, &mode.to_string());
    }

    /// Update the sorting selection and persist it.
    pub fn set_sorting(&mut self, mode: SortingMode) {
        self.sorting = mode;
        self.store.set(PREF_SORTING, &mode.to_string());
    }

    /// Flip the options-panel flag. Purely local; never persisted.
    pub fn toggle_options(&mut self) {
        self.options_visible = !self.options_visible;
    }
}
