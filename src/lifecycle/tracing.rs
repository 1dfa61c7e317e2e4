//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter driven by
//! `RUST_LOG`. Module paths are hidden (`with_target(false)`); actor logs carry an
//! `entity_type` field instead, and client calls open a span per method.
//!
//! ## Usage
//!
//! ```bash
//! # Lifecycle and HTTP requests
//! RUST_LOG=info cargo run
//!
//! # Every actor request with its payload
//! RUST_LOG=debug cargo run
//!
//! # Only the framework
//! RUST_LOG=pizza_sms::framework=debug cargo run
//! ```
//!
//! A returning customer ordering one pizza, at `debug`:
//!
//! ```text
//! DEBUG handle_inbound: Inbound message customer_id=+15551234567 body="a"
//! DEBUG handle_inbound:check_in: Create entity_type="Customer" id=+15551234567 params=CustomerCreate { state: New }
//! DEBUG handle_inbound:check_in: Already exists entity_type="Customer" id=+15551234567
//! DEBUG handle_inbound:handle_message: Message handled customer_id=+15551234567 reply=Selected { product: "Pepperoni Pizza" } lines=1
//! ```
//!
//! Credentials are never logged. Message bodies only appear at `debug`.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "info,tower_http=debug";

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
