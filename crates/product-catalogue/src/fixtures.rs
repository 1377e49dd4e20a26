//! Reference table loading.
//!
//! The users, categories, and products tables arrive as one versioned JSON
//! document. Loading only checks the document shape and version; referential
//! integrity is checked when the tables are joined.

use camino::Utf8Path;
use cap_std::fs::Dir;
use serde::Deserialize;

use crate::error::FixtureError;
use crate::model::{Category, Product, User};

/// Current supported fixture version.
const SUPPORTED_VERSION: u32 = 1;

/// Fixture compiled into the crate and used when no file is supplied.
const BUILTIN_FIXTURE: &str = include_str!("../fixtures/catalogue.json");

/// The three immutable reference tables, in input order.
///
/// # Example
///
/// ```
/// use product_catalogue::ReferenceTables;
///
/// let json = r#"{
///     "version": 1,
///     "users": [{"id": 1, "name": "Max", "sex": "m"}],
///     "categories": [{"id": 10, "title": "Fruits", "icon": "🍎", "ownerId": 1}],
///     "products": [{"id": 100, "name": "Banana", "categoryId": 10}]
/// }"#;
///
/// let tables = ReferenceTables::from_json(json).expect("valid fixture");
/// assert_eq!(tables.products().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceTables {
    version: u32,
    users: Vec<User>,
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl ReferenceTables {
    /// Builds reference tables from already-materialised records.
    #[must_use]
    pub const fn new(users: Vec<User>, categories: Vec<Category>, products: Vec<Product>) -> Self {
        Self {
            version: SUPPORTED_VERSION,
            users,
            categories,
            products,
        }
    }

    /// Parses reference tables from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError`] if the JSON is malformed, a required field is
    /// missing, or the version is unsupported.
    pub fn from_json(json: &str) -> Result<Self, FixtureError> {
        let raw: RawFixture = serde_json::from_str(json).map_err(|e| FixtureError::ParseError {
            message: e.to_string(),
        })?;

        if raw.version != SUPPORTED_VERSION {
            return Err(FixtureError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        Ok(Self {
            version: raw.version,
            users: raw.users,
            categories: raw.categories,
            products: raw.products,
        })
    }

    /// Loads reference tables from a file inside `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError`] if the file cannot be read or parsed.
    pub fn from_file(dir: &Dir, path: &Utf8Path) -> Result<Self, FixtureError> {
        let contents = dir
            .read_to_string(path)
            .map_err(|e| FixtureError::IoError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        Self::from_json(&contents)
    }

    /// Parses the fixture bundled with the crate.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError`] if the bundled fixture fails to parse.
    pub fn builtin() -> Result<Self, FixtureError> {
        Self::from_json(BUILTIN_FIXTURE)
    }

    /// Returns the fixture version.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Returns the users table.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Returns the categories table.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Returns the products table.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

/// Raw JSON representation for deserialization.
#[derive(Debug, Deserialize)]
struct RawFixture {
    version: u32,
    users: Vec<User>,
    categories: Vec<Category>,
    products: Vec<Product>,
}
