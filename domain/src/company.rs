use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("company catalog must not be empty")]
    Empty,

    #[error("duplicate ticker in catalog: {0}")]
    DuplicateTicker(String),
}

/// Static reference data for one listed company. Read-only for the
/// process lifetime; the live price lives in the game's price table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub ticker: String,
    pub name: String,
    pub color: String,
    pub logo: String,
    pub base_price: i64,
}

/// Ordered, validated company list. Order matters: buy targets are drawn
/// from it round-robin.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyCatalog {
    companies: Vec<Company>,
}

impl CompanyCatalog {
    pub fn new(companies: Vec<Company>) -> Result<Self, CatalogError> {
        if companies.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (i, company) in companies.iter().enumerate() {
            if companies[..i].iter().any(|c| c.ticker == company.ticker) {
                return Err(CatalogError::DuplicateTicker(company.ticker.clone()));
            }
        }
        Ok(Self { companies })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.companies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> &Company {
        &self.companies[index % self.companies.len()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Company> {
        self.companies.iter()
    }
}
