//! Rate table domain entities

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::shared::errors::ValidationError;

/// Consumer category. The set is closed: every rate table prices exactly
/// these four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Commercial,
    Industrial,
    Residential,
    Public,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Commercial,
        Category::Industrial,
        Category::Residential,
        Category::Public,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Commercial => "COMMERCIAL",
            Self::Industrial => "INDUSTRIAL",
            Self::Residential => "RESIDENTIAL",
            Self::Public => "PUBLIC",
        }
    }

    /// `[COMMERCIAL, INDUSTRIAL, RESIDENTIAL, PUBLIC]`
    pub fn mandatory_set() -> String {
        let names: Vec<&str> = Self::ALL.iter().map(Category::as_str).collect();
        format!("[{}]", names.join(", "))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    /// Case-insensitive. The legacy Portuguese names are accepted as aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "COMMERCIAL" | "COMERCIAL" => Ok(Self::Commercial),
            "INDUSTRIAL" => Ok(Self::Industrial),
            "RESIDENTIAL" | "PARTICULAR" => Ok(Self::Residential),
            "PUBLIC" | "PUBLICO" => Ok(Self::Public),
            _ => Err(ValidationError::InvalidCategory(s.to_string())),
        }
    }
}

/// A range as submitted, before validation. Any field may be missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RangeDraft {
    pub start: Option<u32>,
    pub end: Option<u32>,
    pub unit_price: Option<Decimal>,
}

impl RangeDraft {
    pub fn new(start: u32, end: Option<u32>, unit_price: Decimal) -> Self {
        Self {
            start: Some(start),
            end,
            unit_price: Some(unit_price),
        }
    }
}

/// One tier of a category's price partition. `end` is inclusive; `None`
/// means the tier is unbounded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Range {
    pub start: u32,
    pub end: Option<u32>,
    pub unit_price: Decimal,
}

impl Range {
    pub fn new(start: u32, end: Option<u32>, unit_price: Decimal) -> Self {
        Self {
            start,
            end,
            unit_price,
        }
    }
}

/// Ranges priced for one category of one table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRanges {
    pub category: Category,
    pub ranges: Vec<Range>,
}

/// A persisted rate table with its categories eagerly loaded
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    pub id: i32,
    pub name: String,
    /// Set once at creation
    pub effective_at: DateTime<Utc>,
    pub active: bool,
    pub categories: Vec<CategoryRanges>,
}

impl RateTable {
    pub fn ranges_for(&self, category: Category) -> Option<&[Range]> {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.ranges.as_slice())
    }

    /// Categories sorted by name, each with ranges sorted by `start`.
    pub fn sorted_categories(&self) -> Vec<CategoryRanges> {
        let mut categories = self.categories.clone();
        categories.sort_by(|a, b| a.category.as_str().cmp(b.category.as_str()));
        for c in &mut categories {
            c.ranges.sort_by_key(|r| r.start);
        }
        categories
    }
}

/// A validated table ready to be persisted as the active one
#[derive(Debug, Clone)]
pub struct NewRateTable {
    pub name: String,
    pub effective_at: DateTime<Utc>,
    pub categories: Vec<CategoryRanges>,
}

/// Raw category block of a create request
#[derive(Debug, Clone)]
pub struct CategoryEntry {
    pub category: String,
    pub ranges: Vec<RangeDraft>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BillingLineItem {
    pub range: Range,
    pub units: u32,
    pub unit_price: Decimal,
    pub subtotal: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BillingResult {
    pub category: Category,
    pub consumption: u32,
    pub amount: Decimal,
    pub line_items: Vec<BillingLineItem>,
}
