//! Catalogue record types.
//!
//! The three reference records mirror the fixture JSON one-to-one. The
//! denormalised [`EnrichedProduct`] is produced by the join and is what the
//! visibility filter operates on.

use serde::{Deserialize, Serialize};

/// Numeric identifier shared by users, categories, and products.
pub type RecordId = u32;

/// Sex recorded for a user, serialised as `"m"` or `"f"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    /// Serialised as `"m"`.
    #[serde(rename = "m")]
    Male,
    /// Serialised as `"f"`.
    #[serde(rename = "f")]
    Female,
}

/// A user who may own product categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier.
    pub id: RecordId,
    /// Display name, also the value matched by the owner filter.
    pub name: String,
    /// Recorded sex.
    pub sex: Sex,
}

/// A product category and the user that owns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique identifier.
    pub id: RecordId,
    /// Title shown on the category toggle and matched by the category filter.
    pub title: String,
    /// Emoji icon.
    pub icon: String,
    /// Identifier of the owning [`User`].
    pub owner_id: RecordId,
}

/// A product as stored in the reference table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier.
    pub id: RecordId,
    /// Product name, matched by the free-text filter.
    pub name: String,
    /// Identifier of the product's [`Category`].
    pub category_id: RecordId,
}

/// A product with its category and owner embedded.
///
/// Built once by [`crate::enrich_products`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedProduct {
    /// Product identifier.
    pub id: RecordId,
    /// Product name.
    pub name: String,
    /// Category identifier, kept alongside the embedded record.
    pub category_id: RecordId,
    /// The resolved category.
    pub category: Category,
    /// The category's owner.
    pub owner: User,
}
