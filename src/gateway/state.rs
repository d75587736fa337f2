use crate::auth::AuthKeys;
use crate::clients::{OrderClient, ProductClient, UserClient};
use crate::lifecycle::OrderSystem;

/// Shared state of every handler: one client per store plus the token keys.
#[derive(Clone)]
pub struct AppState {
    pub users: UserClient,
    pub products: ProductClient,
    pub orders: OrderClient,
    pub auth: AuthKeys,
}

impl AppState {
    pub fn new(system: &OrderSystem, auth: AuthKeys) -> Self {
        Self {
            users: system.user_client.clone(),
            products: system.product_client.clone(),
            orders: system.order_client.clone(),
            auth,
        }
    }
}
