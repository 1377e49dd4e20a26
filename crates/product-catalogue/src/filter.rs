//! Filter state and the visibility filter.
//!
//! [`visible_products`] derives the rows to display from the enriched
//! catalogue and a [`FilterState`]. It runs the owner, name, and category
//! stages in that order and then sorts what is left. Default values for each
//! stage are no-ops, so [`FilterState::default`] yields the whole catalogue in
//! its original order.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::collation;
use crate::model::EnrichedProduct;

/// Owner-filter value meaning "no owner restriction".
pub const OWNER_ALL: &str = "All";

/// Restricts visible products to a single owner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum OwnerFilter {
    /// No restriction.
    #[default]
    All,
    /// Only products whose owner's name matches exactly.
    Named(String),
}

impl OwnerFilter {
    /// Parses an owner tab value, mapping the sentinel [`OWNER_ALL`] to
    /// [`OwnerFilter::All`].
    ///
    /// # Example
    ///
    /// ```
    /// use product_catalogue::OwnerFilter;
    ///
    /// assert_eq!(OwnerFilter::from_name("All"), OwnerFilter::All);
    /// assert_eq!(
    ///     OwnerFilter::from_name("Anna"),
    ///     OwnerFilter::Named("Anna".to_owned())
    /// );
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name == OWNER_ALL {
            Self::All
        } else {
            Self::Named(name.to_owned())
        }
    }

    /// Returns `true` if the product passes this filter.
    #[must_use]
    pub fn matches(&self, product: &EnrichedProduct) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => product.owner.name == *name,
        }
    }
}

impl fmt::Display for OwnerFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(OWNER_ALL),
            Self::Named(name) => f.write_str(name),
        }
    }
}

/// Selected category titles, kept in the order they were toggled on.
///
/// An empty selection places no restriction on the visible products.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySelection {
    titles: Vec<String>,
}

impl CategorySelection {
    /// Adds `title` if absent, removes it if present.
    ///
    /// # Example
    ///
    /// ```
    /// use product_catalogue::CategorySelection;
    ///
    /// let mut selection = CategorySelection::default();
    /// selection.toggle("Fruits");
    /// assert!(selection.contains("Fruits"));
    /// selection.toggle("Fruits");
    /// assert!(selection.is_empty());
    /// ```
    pub fn toggle(&mut self, title: &str) {
        if let Some(position) = self.titles.iter().position(|t| t == title) {
            self.titles.remove(position);
        } else {
            self.titles.push(title.to_owned());
        }
    }

    /// Returns `true` if `title` is selected.
    #[must_use]
    pub fn contains(&self, title: &str) -> bool {
        self.titles.iter().any(|t| t == title)
    }

    /// Returns `true` when nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Deselects every category.
    pub fn clear(&mut self) {
        self.titles.clear();
    }

    /// Returns the selected titles in toggle order.
    #[must_use]
    pub fn titles(&self) -> &[String] {
        &self.titles
    }
}

impl<S: AsRef<str>> FromIterator<S> for CategorySelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut selection = Self::default();
        for title in iter {
            if !selection.contains(title.as_ref()) {
                selection.titles.push(title.as_ref().to_owned());
            }
        }
        selection
    }
}

/// Sortable table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortColumn {
    /// Product identifier, compared numerically.
    Id,
    /// Product name.
    Product,
    /// Category title.
    Category,
    /// Owner name.
    User,
}

impl SortColumn {
    /// All columns in header order.
    pub const ALL: [Self; 4] = [Self::Id, Self::Product, Self::Category, Self::User];

    /// Returns the header label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Product => "Product",
            Self::Category => "Category",
            Self::User => "User",
        }
    }

    fn compare(self, left: &EnrichedProduct, right: &EnrichedProduct) -> Ordering {
        match self {
            Self::Id => left.id.cmp(&right.id),
            Self::Product => collation::compare(&left.name, &right.name),
            Self::Category => collation::compare(&left.category.title, &right.category.title),
            Self::User => collation::compare(&left.owner.name, &right.owner.name),
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a column label is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort column: {value}")]
pub struct UnknownSortColumn {
    /// The rejected label.
    pub value: String,
}

impl FromStr for SortColumn {
    type Err = UnknownSortColumn;

    /// Parses a header label, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|column| column.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownSortColumn {
                value: s.to_owned(),
            })
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// Smallest first.
    Asc,
    /// Largest first.
    Desc,
}

/// An active sort on one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sorting {
    /// Column being sorted.
    pub column: SortColumn,
    /// Direction.
    pub order: SortOrder,
}

impl Sorting {
    /// Ascending sort on `column`.
    #[must_use]
    pub const fn ascending(column: SortColumn) -> Self {
        Self {
            column,
            order: SortOrder::Asc,
        }
    }

    /// Descending sort on `column`.
    #[must_use]
    pub const fn descending(column: SortColumn) -> Self {
        Self {
            column,
            order: SortOrder::Desc,
        }
    }

    /// Advances the header-click cycle for `clicked`.
    ///
    /// Unsorted or another column goes to ascending, ascending goes to
    /// descending, and descending goes back to unsorted.
    ///
    /// # Example
    ///
    /// ```
    /// use product_catalogue::{SortColumn, Sorting};
    ///
    /// let first = Sorting::toggle(None, SortColumn::Id);
    /// let second = Sorting::toggle(first, SortColumn::Id);
    /// let third = Sorting::toggle(second, SortColumn::Id);
    ///
    /// assert_eq!(first, Some(Sorting::ascending(SortColumn::Id)));
    /// assert_eq!(second, Some(Sorting::descending(SortColumn::Id)));
    /// assert_eq!(third, None);
    /// ```
    #[must_use]
    pub fn toggle(current: Option<Self>, clicked: SortColumn) -> Option<Self> {
        match current {
            Some(Self {
                column,
                order: SortOrder::Asc,
            }) if column == clicked => Some(Self::descending(clicked)),
            Some(Self {
                column,
                order: SortOrder::Desc,
            }) if column == clicked => None,
            _ => Some(Self::ascending(clicked)),
        }
    }

    fn compare(self, left: &EnrichedProduct, right: &EnrichedProduct) -> Ordering {
        let ordering = self.column.compare(left, right);
        match self.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

/// Sort icon shown next to a column header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortIndicator {
    /// The column is not the sorted one.
    Unsorted,
    /// The column is sorted ascending.
    Ascending,
    /// The column is sorted descending.
    Descending,
}

/// Returns the indicator for `column` under the current sorting.
#[must_use]
pub fn sort_indicator(sorting: Option<Sorting>, column: SortColumn) -> SortIndicator {
    match sorting {
        Some(active) if active.column == column => match active.order {
            SortOrder::Asc => SortIndicator::Ascending,
            SortOrder::Desc => SortIndicator::Descending,
        },
        _ => SortIndicator::Unsorted,
    }
}

/// Everything that decides which products are visible and in what order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Owner tab selection.
    pub owner: OwnerFilter,
    /// Free-text product name query.
    pub product_name: String,
    /// Selected category titles.
    pub categories: CategorySelection,
    /// Active column sort, if any.
    pub sorting: Option<Sorting>,
}

/// Derives the visible products for `state`.
///
/// Stages run in order: owner, product name, category, sort. Each stage
/// narrows the previous stage's output; the input slice is left untouched.
///
/// # Example
///
/// ```
/// use product_catalogue::{
///     FilterState, OwnerFilter, ReferenceTables, enrich_products, visible_products,
/// };
///
/// let tables = ReferenceTables::builtin().expect("builtin fixture");
/// let products = enrich_products(&tables).expect("references resolve");
///
/// let state = FilterState {
///     owner: OwnerFilter::from_name("Anna"),
///     ..FilterState::default()
/// };
///
/// assert!(visible_products(&products, &state)
///     .iter()
///     .all(|product| product.owner.name == "Anna"));
/// ```
#[must_use]
pub fn visible_products(products: &[EnrichedProduct], state: &FilterState) -> Vec<EnrichedProduct> {
    let query = normalize(&state.product_name);

    let mut visible: Vec<EnrichedProduct> = products
        .iter()
        .filter(|product| state.owner.matches(product))
        .filter(|product| query.is_empty() || normalize(&product.name).contains(&query))
        .filter(|product| {
            state.categories.is_empty() || state.categories.contains(&product.category.title)
        })
        .cloned()
        .collect();

    if let Some(sorting) = state.sorting {
        visible.sort_by(|left, right| sorting.compare(left, right));
    }

    debug!(
        total = products.len(),
        visible = visible.len(),
        "derived visible products"
    );

    visible
}

fn normalize(value: &str) -> String {
    value.to_lowercase().trim().to_owned()
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;
    use crate::model::{Category, Sex, User};

    fn enriched(id: u32, name: &str, title: &str, owner: &str) -> EnrichedProduct {
        EnrichedProduct {
            id,
            name: name.to_owned(),
            category_id: id * 10,
            category: Category {
                id: id * 10,
                title: title.to_owned(),
                icon: "🍎".to_owned(),
                owner_id: 1,
            },
            owner: User {
                id: 1,
                name: owner.to_owned(),
                sex: Sex::Female,
            },
        }
    }

    #[fixture]
    fn catalogue() -> Vec<EnrichedProduct> {
        vec![
            enriched(3, "Bread and butter", "Grocery", "Anna"),
            enriched(1, "Milk", "Drinks", "Roma"),
            enriched(2, "apple juice", "Drinks", "Roma"),
            enriched(4, "Banana", "Fruits", "Anna"),
        ]
    }

    fn ids(products: &[EnrichedProduct]) -> Vec<u32> {
        products.iter().map(|p| p.id).collect()
    }

    #[rstest]
    fn default_state_is_identity(catalogue: Vec<EnrichedProduct>) {
        let visible = visible_products(&catalogue, &FilterState::default());

        assert_eq!(visible, catalogue);
    }

    #[rstest]
    #[case("Anna", vec![3, 4])]
    #[case("Roma", vec![1, 2])]
    #[case("anna", vec![])]
    #[case("Nobody", vec![])]
    fn owner_stage_matches_exact_name(
        catalogue: Vec<EnrichedProduct>,
        #[case] owner: &str,
        #[case] expected: Vec<u32>,
    ) {
        let state = FilterState {
            owner: OwnerFilter::from_name(owner),
            ..FilterState::default()
        };

        assert_eq!(ids(&visible_products(&catalogue, &state)), expected);
    }

    #[rstest]
    #[case("bread", vec![3])]
    #[case(" Bread ", vec![3])]
    #[case("BREAD", vec![3])]
    #[case("an", vec![3, 4])]
    #[case("   ", vec![3, 1, 2, 4])]
    #[case("juice", vec![2])]
    #[case("xyz", vec![])]
    fn name_stage_is_case_and_trim_insensitive(
        catalogue: Vec<EnrichedProduct>,
        #[case] query: &str,
        #[case] expected: Vec<u32>,
    ) {
        let state = FilterState {
            product_name: query.to_owned(),
            ..FilterState::default()
        };

        assert_eq!(ids(&visible_products(&catalogue, &state)), expected);
    }

    #[rstest]
    fn category_stage_keeps_selected_titles(catalogue: Vec<EnrichedProduct>) {
        let state = FilterState {
            categories: ["Drinks", "Fruits"].into_iter().collect(),
            ..FilterState::default()
        };

        assert_eq!(ids(&visible_products(&catalogue, &state)), vec![1, 2, 4]);
    }

    #[rstest]
    fn stages_combine(catalogue: Vec<EnrichedProduct>) {
        let state = FilterState {
            owner: OwnerFilter::from_name("Anna"),
            product_name: "b".to_owned(),
            categories: ["Fruits"].into_iter().collect(),
            sorting: None,
        };

        assert_eq!(ids(&visible_products(&catalogue, &state)), vec![4]);
    }

    #[rstest]
    #[case(Sorting::ascending(SortColumn::Id), vec![1, 2, 3, 4])]
    #[case(Sorting::descending(SortColumn::Id), vec![4, 3, 2, 1])]
    #[case(Sorting::ascending(SortColumn::Product), vec![2, 4, 3, 1])]
    #[case(Sorting::descending(SortColumn::Product), vec![1, 3, 4, 2])]
    #[case(Sorting::ascending(SortColumn::Category), vec![1, 2, 4, 3])]
    #[case(Sorting::ascending(SortColumn::User), vec![3, 4, 1, 2])]
    #[case(Sorting::descending(SortColumn::User), vec![1, 2, 3, 4])]
    fn sort_stage_orders_by_column(
        catalogue: Vec<EnrichedProduct>,
        #[case] sorting: Sorting,
        #[case] expected: Vec<u32>,
    ) {
        let state = FilterState {
            sorting: Some(sorting),
            ..FilterState::default()
        };

        assert_eq!(ids(&visible_products(&catalogue, &state)), expected);
    }

    #[rstest]
    fn filtering_is_idempotent(catalogue: Vec<EnrichedProduct>) {
        let state = FilterState {
            product_name: "a".to_owned(),
            sorting: Some(Sorting::descending(SortColumn::Product)),
            ..FilterState::default()
        };

        let once = visible_products(&catalogue, &state);
        let twice = visible_products(&once, &state);

        assert_eq!(once, twice);
    }

    #[rstest]
    #[case(None, SortColumn::Id, Some(Sorting::ascending(SortColumn::Id)))]
    #[case(
        Some(Sorting::ascending(SortColumn::Id)),
        SortColumn::Id,
        Some(Sorting::descending(SortColumn::Id))
    )]
    #[case(Some(Sorting::descending(SortColumn::Id)), SortColumn::Id, None)]
    #[case(
        Some(Sorting::descending(SortColumn::Id)),
        SortColumn::User,
        Some(Sorting::ascending(SortColumn::User))
    )]
    #[case(
        Some(Sorting::ascending(SortColumn::Product)),
        SortColumn::Category,
        Some(Sorting::ascending(SortColumn::Category))
    )]
    fn toggle_follows_header_click_cycle(
        #[case] current: Option<Sorting>,
        #[case] clicked: SortColumn,
        #[case] expected: Option<Sorting>,
    ) {
        assert_eq!(Sorting::toggle(current, clicked), expected);
    }

    #[rstest]
    #[case(None, SortColumn::Id, SortIndicator::Unsorted)]
    #[case(Some(Sorting::ascending(SortColumn::Id)), SortColumn::Id, SortIndicator::Ascending)]
    #[case(Some(Sorting::descending(SortColumn::Id)), SortColumn::Id, SortIndicator::Descending)]
    #[case(Some(Sorting::ascending(SortColumn::Id)), SortColumn::User, SortIndicator::Unsorted)]
    fn indicator_reflects_sorting(
        #[case] sorting: Option<Sorting>,
        #[case] column: SortColumn,
        #[case] expected: SortIndicator,
    ) {
        assert_eq!(sort_indicator(sorting, column), expected);
    }

    #[rstest]
    #[case("ID", SortColumn::Id)]
    #[case("id", SortColumn::Id)]
    #[case("product", SortColumn::Product)]
    #[case("Category", SortColumn::Category)]
    #[case("USER", SortColumn::User)]
    fn parses_column_labels(#[case] label: &str, #[case] expected: SortColumn) {
        assert_eq!(label.parse::<SortColumn>(), Ok(expected));
    }

    #[test]
    fn rejects_unknown_column_label() {
        assert_eq!(
            "Price".parse::<SortColumn>(),
            Err(UnknownSortColumn {
                value: "Price".to_owned()
            })
        );
    }

    #[test]
    fn category_selection_keeps_toggle_order() {
        let mut selection = CategorySelection::default();
        selection.toggle("Fruits");
        selection.toggle("Drinks");
        selection.toggle("Grocery");
        selection.toggle("Drinks");

        assert_eq!(selection.titles(), ["Fruits", "Grocery"]);
    }

    #[test]
    fn category_selection_collects_without_duplicates() {
        let selection: CategorySelection = ["Drinks", "Drinks", "Fruits"].into_iter().collect();

        assert_eq!(selection.titles(), ["Drinks", "Fruits"]);
    }

    #[test]
    fn owner_filter_displays_sentinel() {
        assert_eq!(OwnerFilter::All.to_string(), "All");
        assert_eq!(OwnerFilter::Named("Max".to_owned()).to_string(), "Max");
    }
}
