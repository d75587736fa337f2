//! Product listing: filtering, ordering and pagination of a catalogue read.

use crate::model::Product;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Query string of a product listing. Absent values mean "no filter" / defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub total_pages: u32,
    pub current_page: u32,
    pub total: usize,
}

impl ProductQuery {
    fn matches(&self, product: &Product) -> bool {
        let category = self
            .category
            .as_deref()
            .filter(|c| !c.is_empty())
            .map_or(true, |c| product.category == c);
        let search = self
            .search
            .as_deref()
            .filter(|s| !s.is_empty())
            .map_or(true, |s| product.matches_search(s));
        category && search
    }

    /// Applies the filters, sorts newest first and cuts out the requested page.
    pub fn apply(&self, mut products: Vec<Product>) -> ProductPage {
        let page = self.page.unwrap_or(1).max(1);
        let limit = self.limit.unwrap_or(DEFAULT_PAGE_SIZE).max(1);

        products.retain(|p| self.matches(p));
        products.sort_by(Product::newest_first);

        let total = products.len();
        let skip = (page as usize - 1).saturating_mul(limit as usize);
        ProductPage {
            products: products
                .into_iter()
                .skip(skip)
                .take(limit as usize)
                .collect(),
            total_pages: total.div_ceil(limit as usize) as u32,
            current_page: page,
            total,
        }
    }
}

/// Distinct categories, sorted.
pub fn categories(products: &[Product]) -> Vec<String> {
    products
        .iter()
        .map(|p| p.category.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ProductId, UserId};
    use chrono::{Duration, TimeZone, Utc};
    use rust_decimal::Decimal;

    fn product(id: u32, name: &str, category: &str) -> Product {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        Product {
            id: ProductId(id),
            name: name.into(),
            description: format!("A fine {name}"),
            category: category.into(),
            price: Decimal::ONE,
            stock: 1,
            image_url: None,
            created_by: UserId(1),
            created_at: base + Duration::minutes(id as i64),
        }
    }

    fn catalogue() -> Vec<Product> {
        vec![
            product(1, "Teapot", "kitchen"),
            product(2, "Desk Lamp", "home"),
            product(3, "Kettle", "kitchen"),
            product(4, "Rug", "home"),
            product(5, "Tea Towel", "kitchen"),
        ]
    }

    fn ids(page: &ProductPage) -> Vec<u32> {
        page.products.iter().map(|p| p.id.0).collect()
    }

    #[test]
    fn defaults_list_everything_newest_first() {
        let page = ProductQuery::default().apply(catalogue());
        assert_eq!(ids(&page), vec![5, 4, 3, 2, 1]);
        assert_eq!((page.total, page.total_pages, page.current_page), (5, 1, 1));
    }

    #[test]
    fn category_and_search_combine() {
        let query = ProductQuery {
            category: Some("kitchen".into()),
            search: Some("TEA".into()),
            ..Default::default()
        };
        assert_eq!(ids(&query.apply(catalogue())), vec![5, 1]);
    }

    #[test]
    fn search_covers_description() {
        let query = ProductQuery {
            search: Some("fine rug".into()),
            ..Default::default()
        };
        assert_eq!(ids(&query.apply(catalogue())), vec![4]);
    }

    #[test]
    fn pages_are_cut_after_filtering() {
        let query = ProductQuery {
            page: Some(2),
            limit: Some(2),
            ..Default::default()
        };
        let page = query.apply(catalogue());
        assert_eq!(ids(&page), vec![3, 2]);
        assert_eq!((page.total, page.total_pages, page.current_page), (5, 3, 2));

        let beyond = ProductQuery {
            page: Some(9),
            limit: Some(2),
            ..Default::default()
        };
        assert!(beyond.apply(catalogue()).products.is_empty());
    }

    #[test]
    fn categories_are_distinct_and_sorted() {
        assert_eq!(categories(&catalogue()), vec!["home", "kitchen"]);
        assert!(categories(&[]).is_empty());
    }
}
