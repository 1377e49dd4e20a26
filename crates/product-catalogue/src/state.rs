//! User interactions and the filter state update function.
//!
//! Every control on the catalogue screen maps to one [`FilterAction`].
//! [`FilterState::apply`] consumes the current state and returns the next one;
//! callers re-derive the visible products from the returned value.

use crate::filter::{CategorySelection, FilterState, OwnerFilter, SortColumn, Sorting};

/// An interaction that changes the filter state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterAction {
    /// An owner tab was selected, including the "All" tab.
    SelectOwner(OwnerFilter),
    /// The search field changed. Leading whitespace is dropped.
    SetProductName(String),
    /// The search field's clear button was pressed.
    ClearProductName,
    /// A category button was pressed.
    ToggleCategory(String),
    /// The "All" categories button was pressed.
    ClearCategories,
    /// A column header was clicked.
    ToggleSort(SortColumn),
    /// "Reset all filters" was pressed. Sorting is left as it is.
    ResetFilters,
}

impl FilterState {
    /// Applies `action` and returns the resulting state.
    ///
    /// # Example
    ///
    /// ```
    /// use product_catalogue::{FilterAction, FilterState, SortColumn, Sorting};
    ///
    /// let state = FilterState::default()
    ///     .apply(FilterAction::SetProductName("  milk".to_owned()))
    ///     .apply(FilterAction::ToggleSort(SortColumn::Product));
    ///
    /// assert_eq!(state.product_name, "milk");
    /// assert_eq!(state.sorting, Some(Sorting::ascending(SortColumn::Product)));
    /// ```
    #[must_use]
    pub fn apply(mut self, action: FilterAction) -> Self {
        match action {
            FilterAction::SelectOwner(owner) => self.owner = owner,
            FilterAction::SetProductName(query) => {
                self.product_name = query.trim_start().to_owned();
            }
            FilterAction::ClearProductName => self.product_name.clear(),
            FilterAction::ToggleCategory(title) => self.categories.toggle(&title),
            FilterAction::ClearCategories => self.categories.clear(),
            FilterAction::ToggleSort(column) => {
                self.sorting = Sorting::toggle(self.sorting, column);
            }
            FilterAction::ResetFilters => {
                self.owner = OwnerFilter::All;
                self.product_name.clear();
                self.categories = CategorySelection::default();
            }
        }
        self
    }

    /// Applies each action in turn.
    #[must_use]
    pub fn apply_all<I>(self, actions: I) -> Self
    where
        I: IntoIterator<Item = FilterAction>,
    {
        actions.into_iter().fold(self, Self::apply)
    }
}
