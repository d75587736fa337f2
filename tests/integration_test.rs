use actor_framework::ActorClient;
use rust_decimal::Decimal;
use storefront::config::StoreConfig;
use storefront::lifecycle::OrderSystem;
use storefront::model::{
    Order, OrderCreate, OrderStatus, ProductCreate, ProductId, RequestedItem, ShippingAddress,
    UserCreate, UserId,
};
use storefront::order_actor::{OrderError, ReservationMode};
use storefront::product_actor::ProductError;

// Pattern 4: every actor real, wired by the lifecycle module.

async fn start(reservation: ReservationMode) -> (OrderSystem, UserId) {
    let config = StoreConfig {
        reservation,
        ..StoreConfig::default()
    };
    let system = OrderSystem::new(&config);
    let buyer = system
        .user_client
        .create_user(UserCreate::new("alice", "alice@example.com"))
        .await
        .unwrap();
    (system, buyer)
}

async fn add_product(system: &OrderSystem, name: &str, cents: i64, stock: u32) -> ProductId {
    system
        .product_client
        .create_product(ProductCreate {
            name: name.into(),
            description: format!("{name} description"),
            category: "test".into(),
            price: Decimal::new(cents, 2),
            stock,
            image_url: None,
            created_by: UserId(1),
        })
        .await
        .unwrap()
}

fn order(buyer: UserId, items: &[(String, u32)]) -> OrderCreate {
    OrderCreate {
        user_id: buyer,
        items: items
            .iter()
            .map(|(product, qty)| RequestedItem::new(product.clone(), *qty))
            .collect(),
        shipping_address: ShippingAddress::default(),
    }
}

async fn stock(system: &OrderSystem, id: ProductId) -> u32 {
    system.product_client.check_stock(id).await.unwrap()
}

async fn order_count(system: &OrderSystem) -> usize {
    system.order_client.list().await.unwrap().len()
}

#[tokio::test]
async fn test_order_takes_stock_and_totals_lines() {
    let (system, buyer) = start(ReservationMode::Atomic).await;
    let lamp = add_product(&system, "Lamp", 1000, 5).await;

    let placed = system
        .order_client
        .place_order(order(buyer, &[(lamp.to_string(), 3)]))
        .await
        .unwrap();

    assert_eq!(placed.total_amount, Decimal::new(3000, 2));
    assert_eq!(placed.total_amount.to_string(), "30.00");
    assert_eq!(placed.status, OrderStatus::Pending);
    assert_eq!(placed.lines[0].name, "Lamp");
    assert_eq!(placed.lines[0].price, Decimal::new(1000, 2));
    assert_eq!(stock(&system, lamp).await, 2);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_insufficient_stock_leaves_everything_untouched() {
    let (system, buyer) = start(ReservationMode::Atomic).await;
    let lamp = add_product(&system, "Lamp", 1000, 2).await;

    let err = system
        .order_client
        .place_order(order(buyer, &[(lamp.to_string(), 3)]))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        OrderError::InsufficientStock {
            product: "Lamp".into(),
            requested: 3,
            available: 2,
        }
    );
    assert_eq!(stock(&system, lamp).await, 2);
    assert_eq!(order_count(&system).await, 0);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_product_references() {
    let (system, buyer) = start(ReservationMode::Atomic).await;

    for reference in ["X", "product_99", "99"] {
        let err = system
            .order_client
            .place_order(order(buyer, &[(reference.to_string(), 1)]))
            .await
            .unwrap_err();
        assert_eq!(err, OrderError::ProductNotFound(reference.into()));
    }
    assert_eq!(order_count(&system).await, 0);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_first_failing_line_decides_the_error_in_both_modes() {
    for mode in [ReservationMode::Atomic, ReservationMode::PerItem] {
        let (system, buyer) = start(mode).await;
        let lamp = add_product(&system, "Lamp", 1000, 1).await;

        let err = system
            .order_client
            .place_order(order(buyer, &[(lamp.to_string(), 5), ("X".to_string(), 1)]))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            OrderError::InsufficientStock {
                product: "Lamp".into(),
                requested: 5,
                available: 1,
            },
            "{mode:?}"
        );
        assert_eq!(stock(&system, lamp).await, 1);
        assert_eq!(order_count(&system).await, 0);

        system.shutdown().await.unwrap();
    }
}

#[tokio::test]
async fn test_atomic_mode_rolls_back_earlier_lines() {
    let (system, buyer) = start(ReservationMode::Atomic).await;
    let lamp = add_product(&system, "Lamp", 1000, 5).await;
    let bulb = add_product(&system, "Bulb", 250, 1).await;

    let err = system
        .order_client
        .place_order(order(buyer, &[(lamp.to_string(), 2), (bulb.to_string(), 2)]))
        .await
        .unwrap_err();

    assert!(matches!(err, OrderError::InsufficientStock { .. }));
    assert_eq!(stock(&system, lamp).await, 5);
    assert_eq!(stock(&system, bulb).await, 1);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_per_item_mode_keeps_earlier_lines() {
    let (system, buyer) = start(ReservationMode::PerItem).await;
    let lamp = add_product(&system, "Lamp", 1000, 5).await;
    let bulb = add_product(&system, "Bulb", 250, 1).await;

    let err = system
        .order_client
        .place_order(order(buyer, &[(lamp.to_string(), 2), (bulb.to_string(), 2)]))
        .await
        .unwrap_err();

    assert!(matches!(err, OrderError::InsufficientStock { .. }));
    // Partial application: the first line stays reserved although no order exists.
    assert_eq!(stock(&system, lamp).await, 3);
    assert_eq!(stock(&system, bulb).await, 1);
    assert_eq!(order_count(&system).await, 0);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_orders_never_oversell() {
    let (system, buyer) = start(ReservationMode::Atomic).await;
    let lamp = add_product(&system, "Lamp", 1000, 10).await;
    let bulb = add_product(&system, "Bulb", 250, 30).await;

    let tasks: Vec<_> = (0..25)
        .map(|_| {
            let client = system.order_client.clone();
            let items = [(lamp.to_string(), 1), (bulb.to_string(), 1)];
            tokio::spawn(async move { client.place_order(order(buyer, &items)).await })
        })
        .collect();

    let mut accepted = 0;
    for task in tasks {
        match task.await.unwrap() {
            Ok(_) => accepted += 1,
            Err(e) => assert!(matches!(e, OrderError::InsufficientStock { .. })),
        }
    }

    assert_eq!(accepted, 10);
    assert_eq!(stock(&system, lamp).await, 0);
    assert_eq!(stock(&system, bulb).await, 20);
    assert_eq!(order_count(&system).await, 10);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_price_that_could_overflow_a_total_is_refused() {
    let (system, buyer) = start(ReservationMode::Atomic).await;

    let err = system
        .product_client
        .create_product(ProductCreate {
            name: "Heirloom".into(),
            description: "Priceless".into(),
            category: "test".into(),
            price: Decimal::MAX,
            stock: 2,
            image_url: None,
            created_by: buyer,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ProductError::ValidationError(_)));

    // The stores keep serving afterwards.
    let lamp = add_product(&system, "Lamp", 1000, 5).await;
    let placed = system
        .order_client
        .place_order(order(buyer, &[(lamp.to_string(), 2)]))
        .await
        .unwrap();
    assert_eq!(placed.total_amount, Decimal::new(2000, 2));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_buyer() {
    let (system, _) = start(ReservationMode::Atomic).await;
    let lamp = add_product(&system, "Lamp", 1000, 5).await;

    let err = system
        .order_client
        .place_order(order(UserId(42), &[(lamp.to_string(), 1)]))
        .await
        .unwrap_err();

    assert_eq!(err, OrderError::UnknownBuyer("user_42".into()));
    assert_eq!(stock(&system, lamp).await, 5);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_buyer_sees_own_orders_newest_first() {
    let (system, alice) = start(ReservationMode::Atomic).await;
    let bob = system
        .user_client
        .create_user(UserCreate::new("bob", "bob@example.com"))
        .await
        .unwrap();
    let lamp = add_product(&system, "Lamp", 1000, 10).await;

    let mut placed = Vec::new();
    for buyer in [alice, bob, alice] {
        let o = system
            .order_client
            .place_order(order(buyer, &[(lamp.to_string(), 1)]))
            .await
            .unwrap();
        placed.push(o.id);
    }

    let mine: Vec<_> = system
        .order_client
        .list_for_user(alice)
        .await
        .unwrap()
        .into_iter()
        .map(|o: Order| o.id)
        .collect();
    assert_eq!(mine, vec![placed[2], placed[0]]);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_status_only_moves_forward() {
    let (system, buyer) = start(ReservationMode::Atomic).await;
    let lamp = add_product(&system, "Lamp", 1000, 10).await;
    let placed = system
        .order_client
        .place_order(order(buyer, &[(lamp.to_string(), 1)]))
        .await
        .unwrap();

    let shipped = system
        .order_client
        .update_status(placed.id, OrderStatus::Shipped)
        .await
        .unwrap();
    assert_eq!(shipped.status, OrderStatus::Shipped);
    assert_eq!(shipped.total_amount, placed.total_amount);

    let err = system
        .order_client
        .update_status(placed.id, OrderStatus::Processing)
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::ValidationError(_)));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_restart_from_snapshot_keeps_state_and_ids() {
    let (system, buyer) = start(ReservationMode::Atomic).await;
    let lamp = add_product(&system, "Lamp", 1000, 5).await;
    let first = system
        .order_client
        .place_order(order(buyer, &[(lamp.to_string(), 2)]))
        .await
        .unwrap();

    let snapshot = system.snapshot().await.unwrap();
    system.shutdown().await.unwrap();

    let restored = OrderSystem::from_snapshot(&StoreConfig::default(), snapshot);
    assert_eq!(stock(&restored, lamp).await, 3);
    assert_eq!(
        restored.order_client.get(first.id).await.unwrap(),
        Some(first.clone())
    );

    let kettle = add_product(&restored, "Kettle", 3000, 1).await;
    assert_eq!(kettle, ProductId(2));
    let second = restored
        .order_client
        .place_order(order(buyer, &[(kettle.to_string(), 1)]))
        .await
        .unwrap();
    assert!(second.id > first.id);

    restored.shutdown().await.unwrap();
}
