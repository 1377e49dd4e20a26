//! Error types for the catalogue CLI.

use thiserror::Error;

use crate::error::{FixtureError, JoinError};
use crate::filter::UnknownSortColumn;

/// Errors surfaced by the CLI parsing and query flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// A flag expected a value but none was provided.
    #[error("missing value for {flag}")]
    MissingValue {
        /// Flag that was missing its value.
        flag: &'static str,
    },
    /// An unsupported argument was supplied.
    #[error("unknown argument: {value}")]
    UnknownArgument {
        /// Argument value that was not recognised.
        value: String,
    },
    /// `--sort` named a column that does not exist.
    #[error("invalid value for --sort: {source}")]
    InvalidSortColumn {
        /// Underlying parse error.
        #[from]
        #[source]
        source: UnknownSortColumn,
    },
    /// The reference tables could not be loaded.
    #[error("fixture error: {source}")]
    FixtureError {
        /// Underlying fixture error.
        #[from]
        #[source]
        source: FixtureError,
    },
    /// The reference tables contain a dangling reference.
    #[error("catalogue join failed: {source}")]
    JoinError {
        /// Underlying join error.
        #[from]
        #[source]
        source: JoinError,
    },
    /// The visible products could not be written as JSON.
    #[error("failed to serialise visible products: {message}")]
    SerializeError {
        /// Serializer error message.
        message: String,
    },
}
