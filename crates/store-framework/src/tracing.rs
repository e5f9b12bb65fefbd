//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate for any binary
//! built on the store framework.
//!
//! ## Configuration
//!
//! Log lines use the compact format without the crate/module prefix (`with_target(false)`);
//! the `state_type` field already says which store a line came from.
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run
//!
//! # Show every dispatched action with its payload
//! RUST_LOG=debug cargo run
//!
//! # Only the framework internals
//! RUST_LOG=store_framework=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Store lifecycle**: `Store started`, `Shutdown` with the final version
//! - **Transitions**: `Dispatch` (debug, with `?action`) and `Transitioned` (info, with `version`)
//! - **Scopes**: cancellation and work dropped in flight (debug)
//!
//! With `RUST_LOG=debug` a catalog load looks like:
//!
//! ```text
//! INFO Store started state_type="CatalogState"
//! DEBUG Dispatch state_type="CatalogState" action=Get([..])
//! INFO Transitioned state_type="CatalogState" version=1
//! ```

/// Installs the global `tracing` subscriber, filtered by `RUST_LOG`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
