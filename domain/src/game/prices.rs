use std::collections::HashMap;

use rand::Rng;
use rand::rngs::SmallRng;

use crate::{Company, CompanyCatalog};

/// Live price per ticker. Seeded from base prices on every run start and
/// advanced only by the price tick.
#[derive(Clone, Debug, Default)]
pub(super) struct PriceTable {
    prices: HashMap<String, i64>,
}

impl PriceTable {
    pub(super) fn seeded(catalog: &CompanyCatalog) -> Self {
        let prices = catalog
            .iter()
            .map(|c| (c.ticker.clone(), c.base_price))
            .collect();
        Self { prices }
    }

    /// Live price with base-price fallback; a missing ticker is a policy
    /// case, never an error.
    pub(super) fn live(&self, company: &Company) -> i64 {
        self.prices
            .get(&company.ticker)
            .copied()
            .unwrap_or(company.base_price)
    }

    /// One bounded random-walk step for every company. Floored at
    /// `floor_ratio` of base price, uncapped above.
    pub(super) fn fluctuate(
        &mut self,
        catalog: &CompanyCatalog,
        rng: &mut SmallRng,
        drift: f64,
        floor_ratio: f64,
    ) {
        let half = drift / 2.0;
        for company in catalog.iter() {
            let current = self.live(company);
            let delta: f64 = rng.gen_range(-half..half);
            let walked = (current as f64 * (1.0 + delta)).round() as i64;
            let floor = (company.base_price as f64 * floor_ratio).round() as i64;
            self.prices.insert(company.ticker.clone(), walked.max(floor));
        }
    }

    #[cfg(test)]
    pub(super) fn set(&mut self, ticker: &str, price: i64) {
        self.prices.insert(ticker.to_string(), price);
    }
}
