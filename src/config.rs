//! Runtime configuration loaded from environment variables.

use crate::bridge::ToolCommand;
use crate::clients::ServiceAddresses;
use std::path::PathBuf;
use std::time::Duration;

/// Agent configuration with defaults for a local Online Boutique deployment.
///
/// Reads from environment variables:
/// - `BOUTIQUE_CATALOG_ADDR`: product catalog endpoint (default: `"http://localhost:3550"`)
/// - `BOUTIQUE_CART_ADDR`: cart endpoint (default: `"http://localhost:7070"`)
/// - `BOUTIQUE_CHECKOUT_ADDR`: checkout endpoint (default: `"http://localhost:5050"`)
/// - `BOUTIQUE_RPC_TIMEOUT_MS`: per-call deadline (default: `5000`)
/// - `BOUTIQUE_SHARED_CONNECTIONS`: reuse one channel per service (default: `false`)
/// - `BOUTIQUE_CURRENCY`: currency for placed orders (default: `"USD"`)
/// - `BOUTIQUE_FRAUD_LIST`: blocked-card file (default: `"fraudulent_cards.txt"`)
/// - `BOUTIQUE_TRACKER_COMMAND`: shipment tracker program (default: `"python3"`)
/// - `BOUTIQUE_TRACKER_ARGS`: its arguments, space separated
///   (default: `"external_shipping_tracker/shipping_server.py"`)
/// - `BOUTIQUE_TOOL_TIMEOUT_MS`: tracker deadline (default: `10000`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub addresses: ServiceAddresses,
    pub rpc_timeout: Duration,
    pub shared_connections: bool,
    pub currency: String,
    pub fraud_list: PathBuf,
    pub tracker: ToolCommand,
    pub tool_timeout: Duration,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from any key lookup; unset or unparseable
    /// values take the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let millis = |key: &str, default: Duration| {
            lookup(key)
                .and_then(|v| v.trim().parse::<u64>().ok())
                .map(Duration::from_millis)
                .unwrap_or(default)
        };

        let tracker = match lookup("BOUTIQUE_TRACKER_COMMAND") {
            Some(program) => ToolCommand::new(
                program,
                lookup("BOUTIQUE_TRACKER_ARGS")
                    .map(|args| split_args(&args))
                    .unwrap_or_default(),
            ),
            None => match lookup("BOUTIQUE_TRACKER_ARGS") {
                Some(args) => ToolCommand::new(defaults.tracker.program.clone(), split_args(&args)),
                None => defaults.tracker.clone(),
            },
        };

        Self {
            addresses: ServiceAddresses {
                catalog: lookup("BOUTIQUE_CATALOG_ADDR").unwrap_or(defaults.addresses.catalog),
                cart: lookup("BOUTIQUE_CART_ADDR").unwrap_or(defaults.addresses.cart),
                checkout: lookup("BOUTIQUE_CHECKOUT_ADDR").unwrap_or(defaults.addresses.checkout),
            },
            rpc_timeout: millis("BOUTIQUE_RPC_TIMEOUT_MS", defaults.rpc_timeout),
            shared_connections: lookup("BOUTIQUE_SHARED_CONNECTIONS")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.shared_connections),
            currency: lookup("BOUTIQUE_CURRENCY").unwrap_or(defaults.currency),
            fraud_list: lookup("BOUTIQUE_FRAUD_LIST")
                .map(PathBuf::from)
                .unwrap_or(defaults.fraud_list),
            tracker,
            tool_timeout: millis("BOUTIQUE_TOOL_TIMEOUT_MS", defaults.tool_timeout),
        }
    }
}

fn split_args(args: &str) -> Vec<String> {
    args.split_whitespace().map(str::to_string).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addresses: ServiceAddresses {
                catalog: "http://localhost:3550".to_string(),
                cart: "http://localhost:7070".to_string(),
                checkout: "http://localhost:5050".to_string(),
            },
            rpc_timeout: Duration::from_millis(5000),
            shared_connections: false,
            currency: "USD".to_string(),
            fraud_list: PathBuf::from("fraudulent_cards.txt"),
            tracker: ToolCommand::new("python3", ["external_shipping_tracker/shipping_server.py"]),
            tool_timeout: Duration::from_millis(10_000),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.addresses.catalog, "http://localhost:3550");
        assert_eq!(config.rpc_timeout, Duration::from_secs(5));
        assert!(!config.shared_connections);
        assert_eq!(config.currency, "USD");
        assert_eq!(config.tracker.program, "python3");
    }

    #[test]
    fn test_empty_environment_gives_defaults() {
        assert_eq!(Config::from_lookup(lookup(&[])), Config::default());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("BOUTIQUE_CART_ADDR", "http://cart:7070"),
            ("BOUTIQUE_RPC_TIMEOUT_MS", "250"),
            ("BOUTIQUE_SHARED_CONNECTIONS", "true"),
            ("BOUTIQUE_CURRENCY", "EUR"),
            ("BOUTIQUE_TRACKER_COMMAND", "uv"),
            ("BOUTIQUE_TRACKER_ARGS", "run  tracker.py"),
        ]));
        assert_eq!(config.addresses.cart, "http://cart:7070");
        assert_eq!(config.addresses.catalog, "http://localhost:3550");
        assert_eq!(config.rpc_timeout, Duration::from_millis(250));
        assert!(config.shared_connections);
        assert_eq!(config.currency, "EUR");
        assert_eq!(config.tracker, ToolCommand::new("uv", ["run", "tracker.py"]));
    }

    #[test]
    fn test_unparseable_values_fall_back() {
        let config = Config::from_lookup(lookup(&[
            ("BOUTIQUE_RPC_TIMEOUT_MS", "soon"),
            ("BOUTIQUE_SHARED_CONNECTIONS", "yes please"),
        ]));
        assert_eq!(config.rpc_timeout, Duration::from_millis(5000));
        assert!(!config.shared_connections);
    }
}
