//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the process-wide `tracing` subscriber used by every binary
//! built on this crate.
//!
//! - **Structured logging** with the `tracing` crate
//! - **Configurable log levels** via the `RUST_LOG` environment variable
//! - **Compact format** with the module prefix hidden (`with_target(false)`)
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: start (with the hydrated size), shutdown (with the final size)
//! - **Requests**: `Get`, `Action` with the action payload at `debug`
//! - **Transitions**: `Replaced` at `info`, `Unchanged` at `debug`, failures at `warn`
//!
//! ```bash
//! RUST_LOG=info cargo run -- show
//! RUST_LOG=debug cargo run -- add 3
//! RUST_LOG=rocketshoes_cart=debug,state_actor=info cargo run -- remove 3
//! ```
//!
//! With `RUST_LOG=debug` an add looks like:
//!
//! ```text
//! DEBUG Action state_type="Cart" action=AddProduct(ProductId(3))
//! DEBUG stock: Sending request product_id=3
//! INFO Replaced state_type="Cart" size=2
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. `default_directive` applies when `RUST_LOG` is unset.
pub fn setup_tracing(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
