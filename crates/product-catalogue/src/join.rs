//! Product denormalisation.
//!
//! Resolves every product's category, then the category's owner, and embeds
//! both records so the visibility filter never needs a lookup.

use std::collections::HashMap;

use tracing::debug;

use crate::error::JoinError;
use crate::fixtures::ReferenceTables;
use crate::model::{Category, EnrichedProduct, RecordId, User};

/// Joins products with their category and owner, preserving product order.
///
/// When an identifier appears more than once in a table the first record
/// wins.
///
/// # Errors
///
/// Returns [`JoinError::UnknownCategory`] when a product's category is
/// missing and [`JoinError::UnknownOwner`] when a category's owner is missing.
///
/// # Example
///
/// ```
/// use product_catalogue::{ReferenceTables, enrich_products};
///
/// let json = r#"{
///     "version": 1,
///     "users": [{"id": 1, "name": "Max", "sex": "m"}],
///     "categories": [{"id": 10, "title": "Fruits", "icon": "🍎", "ownerId": 1}],
///     "products": [{"id": 100, "name": "Banana", "categoryId": 10}]
/// }"#;
///
/// let tables = ReferenceTables::from_json(json).expect("valid fixture");
/// let products = enrich_products(&tables).expect("references resolve");
///
/// assert_eq!(products[0].owner.name, "Max");
/// ```
pub fn enrich_products(tables: &ReferenceTables) -> Result<Vec<EnrichedProduct>, JoinError> {
    let categories = index_by_id(tables.categories(), |category| category.id);
    let users = index_by_id(tables.users(), |user| user.id);

    let products = tables
        .products()
        .iter()
        .map(|product| {
            let category = categories.get(&product.category_id).copied().ok_or(
                JoinError::UnknownCategory {
                    product_id: product.id,
                    category_id: product.category_id,
                },
            )?;
            let owner = resolve_owner(&users, category)?;

            Ok(EnrichedProduct {
                id: product.id,
                name: product.name.clone(),
                category_id: product.category_id,
                category: category.clone(),
                owner: owner.clone(),
            })
        })
        .collect::<Result<Vec<_>, JoinError>>()?;

    debug!(
        products = products.len(),
        categories = tables.categories().len(),
        users = tables.users().len(),
        "joined product catalogue"
    );

    Ok(products)
}

fn resolve_owner<'a>(
    users: &HashMap<RecordId, &'a User>,
    category: &Category,
) -> Result<&'a User, JoinError> {
    users
        .get(&category.owner_id)
        .copied()
        .ok_or(JoinError::UnknownOwner {
            category_id: category.id,
            owner_id: category.owner_id,
        })
}

fn index_by_id<'a, T>(
    records: &'a [T],
    id_of: impl Fn(&T) -> RecordId,
) -> HashMap<RecordId, &'a T> {
    let mut index = HashMap::with_capacity(records.len());
    for record in records {
        index.entry(id_of(record)).or_insert(record);
    }
    index
}
