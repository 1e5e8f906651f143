//! Mandatory category set resolution

use std::collections::HashSet;

use super::model::{Category, CategoryEntry, RangeDraft};
use crate::shared::errors::ValidationError;

/// Map raw category names onto [`Category`], in input order.
///
/// Fails on the first unknown or repeated name, then checks that exactly the
/// mandatory categories are present.
pub fn resolve_categories(
    entries: Vec<CategoryEntry>,
) -> Result<Vec<(Category, Vec<RangeDraft>)>, ValidationError> {
    let mut seen = HashSet::new();
    let mut resolved = Vec::with_capacity(entries.len());

    for entry in entries {
        let category: Category = entry.category.parse()?;
        if !seen.insert(category) {
            return Err(ValidationError::DuplicateCategory);
        }
        resolved.push((category, entry.ranges));
    }

    if !Category::ALL.iter().all(|c| seen.contains(c)) {
        return Err(ValidationError::MissingCategories {
            required: Category::mandatory_set(),
        });
    }

    // Unreachable while parsing only yields mandatory categories.
    if seen.len() != Category::ALL.len() {
        return Err(ValidationError::UnexpectedCategories {
            required: Category::mandatory_set(),
        });
    }

    Ok(resolved)
}
