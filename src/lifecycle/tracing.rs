//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global subscriber: compact format, no
//! module prefix, level filter from `RUST_LOG`. Output goes to stderr because
//! stdout carries the operation envelopes.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: session actor and tool bridge start and shutdown
//! - **Operations**: one `invoke` span per request with `session_id` and `tool`
//! - **Remote calls**: service, operation and failure reason at `warn`
//! - **Orders**: order id once placed; card numbers only masked
//!
//! ## Usage Examples
//!
//! ```bash
//! # Operation outcomes only
//! RUST_LOG=info boutique-agent
//!
//! # Every request and message exchange
//! RUST_LOG=debug boutique-agent
//!
//! # Only the tool bridge
//! RUST_LOG=boutique_agent::bridge=debug boutique-agent
//! ```
//!
//! With `RUST_LOG=info` a typical checkout reads:
//!
//! ```text
//! INFO invoke:place_order: Order placed order_id="0f6c..." session_id="s1" tool="place_order"
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
