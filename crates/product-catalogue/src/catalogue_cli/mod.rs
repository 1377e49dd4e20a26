//! CLI support for querying the product catalogue.
//!
//! Flags stand in for the catalogue screen's controls: each one becomes a
//! [`FilterAction`] applied in command-line order. The binary delegates to
//! these functions so the behaviour can be exercised without spawning a
//! process.

mod error;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::Dir;

pub use error::CliError;

use crate::error::FixtureError;
use crate::filter::{FilterState, OwnerFilter, SortColumn, visible_products};
use crate::fixtures::ReferenceTables;
use crate::join::enrich_products;
use crate::model::EnrichedProduct;
use crate::state::FilterAction;

/// Line printed when no product survives the filters.
pub const NO_MATCHES_MESSAGE: &str = "No products matching selected criteria";

/// Parsed options for the catalogue CLI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    fixtures_path: Option<Utf8PathBuf>,
    actions: Vec<FilterAction>,
}

impl Options {
    /// Returns the fixture file supplied with `--fixtures`, if any.
    ///
    /// # Example
    ///
    /// ```
    /// use product_catalogue::catalogue_cli::{ParseOutcome, parse_args};
    ///
    /// let args = vec!["--fixtures".to_owned(), "catalogue.json".to_owned()];
    /// let ParseOutcome::Options(options) = parse_args(args.into_iter()).expect("parse") else {
    ///     panic!("expected options");
    /// };
    ///
    /// assert_eq!(options.fixtures_path().map(|p| p.as_str()), Some("catalogue.json"));
    /// ```
    #[must_use]
    pub fn fixtures_path(&self) -> Option<&Utf8Path> {
        self.fixtures_path.as_deref()
    }

    /// Returns the interactions to replay, in command-line order.
    #[must_use]
    pub fn actions(&self) -> &[FilterAction] {
        &self.actions
    }
}

/// Outcome of parsing CLI arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// Show help output and exit successfully.
    Help,
    /// Continue with the parsed options.
    Options(Options),
}

/// Result of running a catalogue query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResult {
    /// State reached after replaying every action.
    pub state: FilterState,
    /// Products visible under that state.
    pub visible: Vec<EnrichedProduct>,
}

/// Parses CLI arguments into a query plan.
///
/// # Errors
///
/// Returns [`CliError`] when a flag is unknown, a value is missing, or a sort
/// column is not recognised.
///
/// # Example
///
/// ```
/// use product_catalogue::FilterAction;
/// use product_catalogue::catalogue_cli::{ParseOutcome, parse_args};
///
/// let args = vec!["--category".to_owned(), "Drinks".to_owned()];
/// let ParseOutcome::Options(options) = parse_args(args.into_iter()).expect("parse") else {
///     panic!("expected options");
/// };
///
/// assert_eq!(
///     options.actions(),
///     [FilterAction::ToggleCategory("Drinks".to_owned())]
/// );
/// ```
pub fn parse_args<I>(mut args: I) -> Result<ParseOutcome, CliError>
where
    I: Iterator<Item = String>,
{
    let mut options = Options::default();

    while let Some(arg) = args.next() {
        let action = match arg.as_str() {
            "-h" | "--help" => return Ok(ParseOutcome::Help),
            "--fixtures" => {
                let value = next_value(&mut args, "--fixtures")?;
                options.fixtures_path = Some(Utf8PathBuf::from(value));
                continue;
            }
            "--owner" => {
                let value = next_value(&mut args, "--owner")?;
                FilterAction::SelectOwner(OwnerFilter::from_name(&value))
            }
            "--query" => FilterAction::SetProductName(next_value(&mut args, "--query")?),
            "--category" => FilterAction::ToggleCategory(next_value(&mut args, "--category")?),
            "--sort" => {
                let value = next_value(&mut args, "--sort")?;
                FilterAction::ToggleSort(value.parse::<SortColumn>()?)
            }
            "--reset" => FilterAction::ResetFilters,
            _ => return Err(CliError::UnknownArgument { value: arg }),
        };
        options.actions.push(action);
    }

    Ok(ParseOutcome::Options(options))
}

/// Loads the catalogue, replays the actions, and derives the visible products.
///
/// # Errors
///
/// Returns [`CliError`] when the fixture cannot be loaded or contains a
/// dangling reference.
///
/// # Example
///
/// ```
/// use product_catalogue::catalogue_cli::{ParseOutcome, parse_args, run_query};
///
/// let args = vec!["--owner".to_owned(), "Anna".to_owned()];
/// let ParseOutcome::Options(options) = parse_args(args.into_iter()).expect("parse") else {
///     panic!("expected options");
/// };
///
/// let result = run_query(&options).expect("query runs");
/// assert!(result.visible.iter().all(|product| product.owner.name == "Anna"));
/// ```
pub fn run_query(options: &Options) -> Result<QueryResult, CliError> {
    let tables = load_tables(options.fixtures_path())?;
    let products = enrich_products(&tables)?;
    let state = FilterState::default().apply_all(options.actions.iter().cloned());
    let visible = visible_products(&products, &state);

    Ok(QueryResult { state, visible })
}

/// Formats the visible products for stdout.
///
/// Returns [`NO_MATCHES_MESSAGE`] for an empty list and pretty-printed JSON
/// otherwise.
///
/// # Errors
///
/// Returns [`CliError::SerializeError`] if the products cannot be serialised.
pub fn render_products(products: &[EnrichedProduct]) -> Result<String, CliError> {
    if products.is_empty() {
        return Ok(NO_MATCHES_MESSAGE.to_owned());
    }

    serde_json::to_string_pretty(products).map_err(|err| CliError::SerializeError {
        message: err.to_string(),
    })
}

fn load_tables(path: Option<&Utf8Path>) -> Result<ReferenceTables, CliError> {
    let Some(fixture_path) = path else {
        return Ok(ReferenceTables::builtin()?);
    };

    let parent = fixture_path
        .parent()
        .filter(|dir| !dir.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let file_name = fixture_path
        .file_name()
        .ok_or_else(|| FixtureError::IoError {
            path: fixture_path.to_path_buf(),
            message: "path does not name a file".to_owned(),
        })?;
    let dir =
        Dir::open_ambient_dir(parent, ambient_authority()).map_err(|err| FixtureError::IoError {
            path: fixture_path.to_path_buf(),
            message: err.to_string(),
        })?;

    Ok(ReferenceTables::from_file(&dir, Utf8Path::new(file_name))?)
}

fn next_value<I>(args: &mut I, flag: &'static str) -> Result<String, CliError>
where
    I: Iterator<Item = String>,
{
    args.next().ok_or(CliError::MissingValue { flag })
}
