//! Error types for the product-catalogue crate.
//!
//! Fixture loading and the product join fail for different reasons and are
//! reported through separate `thiserror` enums.

use camino::Utf8PathBuf;
use thiserror::Error;

use crate::model::RecordId;

/// Errors that can occur while loading the reference tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixtureError {
    /// The fixture file could not be read.
    #[error("failed to read fixture file at '{path}': {message}")]
    IoError {
        /// Path to the fixture file.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The fixture JSON is malformed or missing required fields.
    #[error("invalid fixture JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The fixture version is not supported.
    #[error("unsupported fixture version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the fixture.
        actual: u32,
    },
}

/// Dangling references found while joining products to categories and owners.
///
/// The reference tables are expected to be internally consistent, so callers
/// treat these as fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JoinError {
    /// A product points at a category that does not exist.
    #[error("product {product_id} references unknown category {category_id}")]
    UnknownCategory {
        /// Product holding the dangling reference.
        product_id: RecordId,
        /// Category identifier that did not resolve.
        category_id: RecordId,
    },

    /// A category points at an owner that does not exist.
    #[error("category {category_id} references unknown owner {owner_id}")]
    UnknownOwner {
        /// Category holding the dangling reference.
        category_id: RecordId,
        /// User identifier that did not resolve.
        owner_id: RecordId,
    },
}
