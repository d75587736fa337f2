//! Store-wide aggregates for the analytics endpoint.

use crate::model::{Order, Product, ProductId};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

pub const RECENT_ORDERS: usize = 5;
pub const TOP_PRODUCTS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_users: usize,
    pub total_products: usize,
    pub total_orders: usize,
    pub total_revenue: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopProduct {
    pub product_id: ProductId,
    pub name: String,
    pub total_sold: u64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub stats: Stats,
    pub recent_orders: Vec<Order>,
    pub top_products: Vec<TopProduct>,
}

/// Builds the report from full reads of the three stores.
///
/// Best sellers are ranked by units ordered, ties by ascending product id. Ranking happens
/// before the catalogue lookup, so a best seller that has since left the catalogue leaves a
/// gap instead of promoting the next product.
///
/// Revenue is summed with overflow checks and saturates at `Decimal::MAX`.
pub fn summarize(
    total_users: usize,
    products: &[Product],
    mut orders: Vec<Order>,
) -> AnalyticsReport {
    let stats = Stats {
        total_users,
        total_products: products.len(),
        total_orders: orders.len(),
        total_revenue: orders
            .iter()
            .try_fold(Decimal::ZERO, |sum, o| sum.checked_add(o.total_amount))
            .unwrap_or(Decimal::MAX),
    };

    let mut sold: BTreeMap<ProductId, u64> = BTreeMap::new();
    for line in orders.iter().flat_map(|o| &o.lines) {
        *sold.entry(line.product_id).or_default() += u64::from(line.quantity);
    }
    let mut ranked: Vec<(ProductId, u64)> = sold.into_iter().collect();
    // Stable sort keeps BTreeMap's ascending id order among equal totals.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let catalogue: HashMap<ProductId, &Product> = products.iter().map(|p| (p.id, p)).collect();
    let top_products = ranked
        .into_iter()
        .take(TOP_PRODUCTS)
        .filter_map(|(id, total_sold)| {
            catalogue.get(&id).map(|p| TopProduct {
                product_id: id,
                name: p.name.clone(),
                total_sold,
            })
        })
        .collect();

    orders.sort_by(Order::newest_first);
    orders.truncate(RECENT_ORDERS);

    AnalyticsReport {
        stats,
        recent_orders: orders,
        top_products,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OrderId, OrderLine, OrderStatus, ShippingAddress, UserId};
    use chrono::{Duration, TimeZone, Utc};

    fn product(id: u32) -> Product {
        Product {
            id: ProductId(id),
            name: format!("P{id}"),
            description: String::new(),
            category: "misc".into(),
            price: Decimal::ONE,
            stock: 0,
            image_url: None,
            created_by: UserId(1),
            created_at: Utc::now(),
        }
    }

    fn order(id: u32, minute: i64, lines: &[(u32, u32)]) -> Order {
        let lines: Vec<OrderLine> = lines
            .iter()
            .map(|&(product, quantity)| OrderLine {
                product_id: ProductId(product),
                name: format!("P{product}"),
                quantity,
                price: Decimal::new(150, 2),
            })
            .collect();
        Order {
            id: OrderId(id),
            user_id: UserId(1),
            total_amount: Order::total_of(&lines).unwrap(),
            lines,
            status: OrderStatus::Pending,
            shipping_address: ShippingAddress::default(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
                + Duration::minutes(minute),
            requested: Vec::new(),
        }
    }

    #[test]
    fn empty_store() {
        let report = summarize(0, &[], Vec::new());
        assert_eq!(report.stats.total_revenue, Decimal::ZERO);
        assert!(report.recent_orders.is_empty());
        assert!(report.top_products.is_empty());
    }

    #[test]
    fn stats_and_recent_orders() {
        let orders = (1..=7).map(|i| order(i, i as i64, &[(1, 1)])).collect();
        let report = summarize(3, &[product(1)], orders);

        assert_eq!(report.stats.total_users, 3);
        assert_eq!(report.stats.total_products, 1);
        assert_eq!(report.stats.total_orders, 7);
        assert_eq!(report.stats.total_revenue, Decimal::new(1050, 2));

        let recent: Vec<u32> = report.recent_orders.iter().map(|o| o.id.0).collect();
        assert_eq!(recent, vec![7, 6, 5, 4, 3]);
    }

    #[test]
    fn revenue_saturates_instead_of_overflowing() {
        let mut big = order(1, 0, &[]);
        big.total_amount = Decimal::MAX;
        let mut bigger = order(2, 1, &[]);
        bigger.total_amount = Decimal::MAX;

        let report = summarize(1, &[], vec![big, bigger]);
        assert_eq!(report.stats.total_revenue, Decimal::MAX);
        assert_eq!(report.stats.total_orders, 2);
    }

    #[test]
    fn same_instant_orders_list_higher_id_first() {
        let report = summarize(1, &[], vec![order(1, 0, &[]), order(2, 0, &[])]);
        assert_eq!(report.recent_orders[0].id, OrderId(2));
    }

    #[test]
    fn top_products_rank_by_units_then_id() {
        let products: Vec<Product> = (1..=7).map(product).collect();
        let orders = vec![
            order(1, 0, &[(3, 4), (1, 2)]),
            order(2, 1, &[(2, 2), (5, 1), (6, 1), (7, 9)]),
            order(3, 2, &[(4, 2)]),
        ];
        let report = summarize(1, &products, orders);

        let top: Vec<(u32, u64)> = report
            .top_products
            .iter()
            .map(|t| (t.product_id.0, t.total_sold))
            .collect();
        assert_eq!(top, vec![(7, 9), (3, 4), (1, 2), (2, 2), (4, 2)]);
        assert_eq!(report.top_products[0].name, "P7");
    }

    #[test]
    fn removed_best_seller_is_skipped() {
        let orders = vec![order(1, 0, &[(1, 5), (2, 1)])];
        let report = summarize(1, &[product(2)], orders);
        assert_eq!(report.top_products.len(), 1);
        assert_eq!(report.top_products[0].product_id, ProductId(2));
    }
}
