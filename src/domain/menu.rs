//! The menu catalog: selection codes mapped to product names and unit prices.
//!
//! A catalog is built once at startup, either from the built-in pizzeria menu or
//! from a YAML file, and is shared read-only by every conversation afterwards.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// One orderable item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuEntry {
    /// Short code the customer texts back to pick this item (e.g. `a`).
    pub code: String,
    /// Display name, also used as the order line key.
    pub name: String,
    /// Unit price in dollars.
    pub price: Decimal,
}

impl MenuEntry {
    pub fn new(code: impl Into<String>, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            price,
        }
    }
}

/// Errors raised while building or loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Menu has no items")]
    Empty,

    #[error("Menu item #{0} has an empty code")]
    EmptyCode(usize),

    #[error("Menu item '{0}' has an empty name")]
    EmptyName(String),

    #[error("Duplicate menu code: {0}")]
    DuplicateCode(String),

    #[error("Menu item '{code}' has a negative price: {price}")]
    NegativePrice { code: String, price: Decimal },

    #[error("Failed to read menu file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse menu file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Debug, Deserialize)]
struct MenuFile {
    items: Vec<MenuEntry>,
}

/// Ordered, validated set of [`MenuEntry`] values.
///
/// Definition order is kept because the menu listing is printed in that order.
/// Codes are stored lower-case since inbound text is lower-cased before matching.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuCatalog {
    entries: Vec<MenuEntry>,
}

impl MenuCatalog {
    /// Validates and builds a catalog.
    pub fn new(entries: Vec<MenuEntry>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        let mut normalized = Vec::with_capacity(entries.len());
        for (index, mut entry) in entries.into_iter().enumerate() {
            entry.code = entry.code.trim().to_lowercase();
            if entry.code.is_empty() {
                return Err(CatalogError::EmptyCode(index + 1));
            }
            if entry.name.trim().is_empty() {
                return Err(CatalogError::EmptyName(entry.code));
            }
            if entry.price.is_sign_negative() && !entry.price.is_zero() {
                return Err(CatalogError::NegativePrice {
                    code: entry.code,
                    price: entry.price,
                });
            }
            if !seen.insert(entry.code.clone()) {
                return Err(CatalogError::DuplicateCode(entry.code));
            }
            normalized.push(entry);
        }

        Ok(Self {
            entries: normalized,
        })
    }

    /// The three-pizza menu the service ships with.
    pub fn pizzeria() -> Self {
        Self {
            entries: vec![
                MenuEntry::new("a", "Pepperoni Pizza", Decimal::new(1299, 2)),
                MenuEntry::new("b", "Hawaiian Pizza", Decimal::new(1499, 2)),
                MenuEntry::new("c", "Meat Lovers Pizza", Decimal::new(1699, 2)),
            ],
        }
    }

    /// Parses a catalog from YAML of the form `items: [{code, name, price}]`.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let file: MenuFile = serde_yaml::from_str(yaml)?;
        Self::new(file.items)
    }

    /// Reads and parses a YAML catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&yaml)
    }

    /// Looks up an entry by its (already lower-cased) code.
    pub fn get(&self, code: &str) -> Option<&MenuEntry> {
        self.entries.iter().find(|entry| entry.code == code)
    }

    /// Entries in definition order.
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MenuCatalog {
    fn default() -> Self {
        Self::pizzeria()
    }
}
