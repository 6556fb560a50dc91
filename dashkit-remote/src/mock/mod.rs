//! Deterministic mock product API.
//!
//! [`ProductCatalog`] generates products from a seed and answers
//! [`ProductQuery`]s; [`MockServer`] serves it over HTTP for tests and demos.

mod server;

use std::cmp::Ordering;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Deserialize;
use serde::Serialize;

use dashkit::table::SortDirection;

pub use server::MockServer;

pub const CATEGORIES: [&str; 4] = ["Electronics", "Clothing", "Books", "Food"];
pub const STATUSES: [&str; 3] = ["published", "draft", "archived"];

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub price: i64,
    pub stock: i64,
    pub status: String,
}

impl Product {
    fn compare_by(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => self.id.cmp(&other.id),
            "name" => self.name.cmp(&other.name),
            "category" => self.category.cmp(&other.category),
            "price" => self.price.cmp(&other.price),
            "stock" => self.stock.cmp(&other.stock),
            "status" => self.status.cmp(&other.status),
            _ => Ordering::Equal,
        }
    }
}

/// Query accepted by the product endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuery {
    pub page: usize,
    pub per_page: usize,
    pub search: String,
    pub sort_by: Option<String>,
    pub sort_dir: SortDirection,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 10,
            search: String::new(),
            sort_by: None,
            sort_dir: SortDirection::Asc,
        }
    }
}

impl ProductQuery {
    /// Reads `page`, `perPage`, `search`, `sortBy` and `sortDir` from a query
    /// string. Missing or unparsable values keep their defaults; any
    /// `sortDir` other than `desc` sorts ascending.
    pub fn from_query_string(query: &str) -> Self {
        let mut parsed = Self::default();
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            match &*key {
                "page" => parsed.page = value.parse().unwrap_or(parsed.page),
                "perPage" => parsed.per_page = value.parse().unwrap_or(parsed.per_page),
                "search" => parsed.search = value.into_owned(),
                "sortBy" if !value.is_empty() => parsed.sort_by = Some(value.into_owned()),
                "sortDir" => {
                    parsed.sort_dir = if value == "desc" {
                        SortDirection::Desc
                    } else {
                        SortDirection::Asc
                    }
                }
                _ => {}
            }
        }
        parsed
    }
}

/// Response body of the product endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    pub data: Vec<Product>,
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
}

/// A fixed, seeded set of products.
#[derive(Debug, Clone)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    /// Generates `count` products numbered from 1.
    ///
    /// The same seed always yields the same catalog.
    pub fn generate(count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let products = (1..=count as i64)
            .map(|id| Product {
                id,
                name: format!("Product {}", id),
                category: CATEGORIES[rng.random_range(0..CATEGORIES.len())].to_string(),
                price: rng.random_range(10..1010),
                stock: rng.random_range(0..100),
                status: STATUSES[rng.random_range(0..STATUSES.len())].to_string(),
            })
            .collect();
        Self { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Searches name and category, sorts, then slices out the page.
    pub fn query(&self, query: &ProductQuery) -> ProductPage {
        let needle = query.search.to_lowercase();
        let mut matches: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| {
                needle.is_empty()
                    || p.name.to_lowercase().contains(&needle)
                    || p.category.to_lowercase().contains(&needle)
            })
            .collect();

        if let Some(field) = &query.sort_by {
            matches.sort_by(|a, b| {
                let ordering = a.compare_by(b, field);
                match query.sort_dir {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                }
            });
        }

        let total = matches.len();
        let data = dashkit::table::paginate(&matches, query.page, query.per_page)
            .iter()
            .map(|p| (*p).clone())
            .collect();

        ProductPage {
            data,
            total,
            page: query.page,
            per_page: query.per_page,
        }
    }
}

impl Default for ProductCatalog {
    fn default() -> Self {
        Self::generate(100, 42)
    }
}
