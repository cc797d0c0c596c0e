//! Listing every product in the catalog.
//!
//! A [`Listing`] owns one fetched, flattened and sorted copy of the catalog.
//! Paging through it is free; only [`Listing::refetch`] goes back to the store,
//! which is what a caller does after deleting something.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Product;
use crate::pagination::Pagination;
use crate::store::DocumentStore;
use std::cmp::Ordering;
use tracing::debug;

use super::helpers::all_products;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Descending id, i.e. most recently added first
    #[default]
    Newest,
    Oldest,
    PriceLowHigh,
    PriceHighLow,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    /// Only products whose category matches exactly
    pub category: Option<String>,
    pub sort: SortOrder,
}

#[derive(Debug, Clone)]
pub struct Listing {
    query: ListQuery,
    products: Vec<Product>,
}

impl Listing {
    pub fn fetch<S: DocumentStore>(store: &S, query: ListQuery) -> Result<Self> {
        let mut listing = Self {
            query,
            products: Vec::new(),
        };
        listing.refetch(store)?;
        Ok(listing)
    }

    /// Reloads every category document and rebuilds the sorted collection.
    pub fn refetch<S: DocumentStore>(&mut self, store: &S) -> Result<()> {
        let mut products = all_products(store)?;
        if let Some(category) = &self.query.category {
            products.retain(|p| &p.category == category);
        }
        sort_products(&mut products, self.query.sort);
        debug!(count = products.len(), "catalog fetched");
        self.products = products;
        Ok(())
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn total(&self) -> usize {
        self.products.len()
    }

    pub fn page(&self, pagination: &Pagination) -> &[Product] {
        pagination.slice(&self.products)
    }

    pub fn to_result(&self, pagination: &Pagination) -> CmdResult {
        let info = pagination.info(self.total());
        let mut result = CmdResult::default()
            .with_listed_products(self.page(pagination).to_vec())
            .with_page(info);
        if info.is_past_end() && info.total_results > 0 {
            result.add_message(CmdMessage::info(format!(
                "Page {} is past the last page ({})",
                info.page, info.total_pages
            )));
        }
        result
    }
}

pub fn run<S: DocumentStore>(
    store: &S,
    query: ListQuery,
    pagination: &Pagination,
) -> Result<CmdResult> {
    Ok(Listing::fetch(store, query)?.to_result(pagination))
}

pub fn sort_products(products: &mut [Product], order: SortOrder) {
    match order {
        SortOrder::Newest => products.sort_by(|a, b| b.id.cmp(&a.id)),
        SortOrder::Oldest => products.sort_by(|a, b| a.id.cmp(&b.id)),
        SortOrder::PriceLowHigh => {
            products.sort_by(|a, b| compare_price(a.price, b.price, false).then(b.id.cmp(&a.id)))
        }
        SortOrder::PriceHighLow => {
            products.sort_by(|a, b| compare_price(a.price, b.price, true).then(b.id.cmp(&a.id)))
        }
    }
}

// Products without a price always sort last, whichever the direction.
fn compare_price(a: Option<f64>, b: Option<f64>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) if descending => y.total_cmp(&x),
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
