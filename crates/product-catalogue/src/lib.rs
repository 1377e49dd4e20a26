//! Filterable, sortable product catalogue over fixed reference tables.
//!
//! The crate joins products with their category and owner once, then derives
//! the visible rows from an explicit [`FilterState`] every time the state
//! changes. Nothing is cached between derivations.
//!
//! # Overview
//!
//! - Loading the users, categories, and products tables from JSON
//! - Denormalising products with [`enrich_products`]
//! - Filtering by owner, product name, and category, then sorting by column,
//!   with [`visible_products`]
//! - Modelling screen interactions as [`FilterAction`]s applied through
//!   [`FilterState::apply`]
//!
//! # Example
//!
//! ```
//! use product_catalogue::{
//!     FilterAction, FilterState, OwnerFilter, ReferenceTables, enrich_products,
//!     visible_products,
//! };
//!
//! let json = r#"{
//!     "version": 1,
//!     "users": [
//!         {"id": 1, "name": "Max", "sex": "m"},
//!         {"id": 2, "name": "Anna", "sex": "f"}
//!     ],
//!     "categories": [
//!         {"id": 10, "title": "Fruits", "icon": "🍎", "ownerId": 1},
//!         {"id": 20, "title": "Drinks", "icon": "🍹", "ownerId": 2}
//!     ],
//!     "products": [
//!         {"id": 100, "name": "Banana", "categoryId": 10},
//!         {"id": 200, "name": "Water", "categoryId": 20},
//!         {"id": 300, "name": "Apple", "categoryId": 10}
//!     ]
//! }"#;
//!
//! let tables = ReferenceTables::from_json(json).expect("valid fixture");
//! let products = enrich_products(&tables).expect("references resolve");
//!
//! let state = FilterState::default()
//!     .apply(FilterAction::SelectOwner(OwnerFilter::from_name("Anna")));
//! let visible = visible_products(&products, &state);
//!
//! assert_eq!(visible.len(), 1);
//! assert_eq!(visible[0].name, "Water");
//! ```

pub mod catalogue_cli;
pub mod collation;
mod error;
mod filter;
mod fixtures;
mod join;
mod model;
mod state;

pub use error::{FixtureError, JoinError};
pub use filter::{
    CategorySelection, FilterState, OWNER_ALL, OwnerFilter, SortColumn, SortIndicator, SortOrder,
    Sorting, UnknownSortColumn, sort_indicator, visible_products,
};
pub use fixtures::ReferenceTables;
pub use join::enrich_products;
pub use model::{Category, EnrichedProduct, Product, RecordId, Sex, User};
pub use state::FilterAction;
