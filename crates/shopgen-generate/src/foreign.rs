use std::collections::BTreeMap;

use rand::Rng;
use rand::seq::IndexedRandom;
use shopgen_core::{Customer, MAX_ITEMS_PER_ORDER, Product};

use crate::errors::GenerationError;

/// Identifiers of an already generated parent row-set, used to draw FK values.
#[derive(Debug, Clone, Default)]
pub struct ParentKeys {
    table: &'static str,
    ids: Vec<i64>,
}

impl ParentKeys {
    pub fn new(table: &'static str, ids: Vec<i64>) -> Self {
        Self { table, ids }
    }

    pub fn from_customers(customers: &[Customer]) -> Self {
        Self::new(
            "customers",
            customers.iter().map(|customer| customer.customer_id).collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Draw one parent id uniformly at random.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<i64, GenerationError> {
        self.ids.choose(rng).copied().ok_or_else(|| {
            GenerationError::Precondition(format!("no parent rows in {}", self.table))
        })
    }
}

/// Product lookup by id, used when pricing order lines.
#[derive(Debug, Clone)]
pub struct ProductCatalog<'a> {
    by_id: BTreeMap<i64, &'a Product>,
}

impl<'a> ProductCatalog<'a> {
    /// Build the catalog, refusing one too small to fill the largest order.
    pub fn new(products: &'a [Product]) -> Result<Self, GenerationError> {
        if products.len() < MAX_ITEMS_PER_ORDER {
            return Err(GenerationError::Precondition(format!(
                "product catalog has {} products, at least {} are needed to sample order items \
                 without replacement",
                products.len(),
                MAX_ITEMS_PER_ORDER
            )));
        }

        let by_id = products
            .iter()
            .map(|product| (product.product_id, product))
            .collect();
        Ok(Self { by_id })
    }

    pub fn get(&self, product_id: i64) -> Option<&'a Product> {
        self.by_id.get(&product_id).copied()
    }

    /// Sample `amount` distinct products without replacement.
    pub fn sample_distinct<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        amount: usize,
    ) -> Result<Vec<&'a Product>, GenerationError> {
        if amount > self.by_id.len() {
            return Err(GenerationError::Precondition(format!(
                "cannot sample {} distinct products from a catalog of {}",
                amount,
                self.by_id.len()
            )));
        }

        let products: Vec<&'a Product> = self.by_id.values().copied().collect();
        Ok(rand::seq::index::sample(rng, products.len(), amount)
            .into_iter()
            .map(|idx| products[idx])
            .collect())
    }
}
