//! # Observability & Tracing
//!
//! Structured logging for the whole service with the `tracing` crate.
//!
//! `RUST_LOG` wins when set; otherwise the configured `log_level` is used. Text output is
//! compact and hides the module path (`with_target(false)`), since every actor log line already
//! carries an `entity_type` field. JSON output keeps the target for log pipelines.
//!
//! ```bash
//! RUST_LOG=info cargo run                      # compact
//! RUST_LOG=debug cargo run                     # full payloads
//! RUST_LOG=actor_framework=debug cargo run     # one crate only
//! ```
//!
//! ## Workflow Trace Example
//!
//! Placing an order with `RUST_LOG=info`:
//!
//! ```text
//! INFO Transaction committed touched=2
//! INFO Created entity_type="Order" id=order_1 size=1
//! INFO place_order{user_id=user_1 items=2}: Order placed order_id=order_1
//! ```
//!
//! With `RUST_LOG=debug` the request payloads appear once at entry (`place_order called
//! params=OrderCreate { .. }`) and each store logs the request it served (`Get`, `Transact`).

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub fn setup_tracing(level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry.with(fmt::layer().json().with_target(true)).init();
    } else {
        registry
            .with(fmt::layer().with_target(false).compact())
            .init();
    }
}
