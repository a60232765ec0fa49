//! Routes named operations to the orchestrators and phrases the results.

use super::system::BoutiqueSystem;
use crate::bridge::PACKAGE_STATUS_TOOL;
use crate::envelope::ToolOutcome;
use crate::model::{Address, OrderRequest, PaymentInfo, Product};
use crate::orchestrator::OrchestratorError;
use crate::resolver::Resolution;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info_span, Instrument};

/// One operation request from the front end.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Invocation {
    pub session_id: String,
    pub tool: String,
    #[serde(default)]
    pub arguments: Value,
}

#[derive(Deserialize)]
struct SetUserIdArgs {
    #[serde(alias = "user_id")]
    new_user_id: String,
}

#[derive(Deserialize)]
struct AddItemArgs {
    product_name: String,
    quantity: u32,
}

#[derive(Deserialize)]
struct PlaceOrderArgs {
    email: String,
    street_address: String,
    city: String,
    state: String,
    zip_code: ZipCode,
    country: String,
    credit_card_number: String,
    credit_card_cvv: i32,
    credit_card_expiration_year: i32,
    credit_card_expiration_month: i32,
}

/// Front ends send zip codes both as numbers and as strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum ZipCode {
    Number(i32),
    Text(String),
}

impl ZipCode {
    fn value(&self) -> Result<i32, String> {
        match self {
            ZipCode::Number(zip) => Ok(*zip),
            ZipCode::Text(zip) => zip
                .trim()
                .parse()
                .map_err(|_| format!("zip_code '{zip}' is not a number")),
        }
    }
}

impl PlaceOrderArgs {
    fn into_order(self) -> Result<OrderRequest, String> {
        Ok(OrderRequest {
            email: self.email,
            address: Address {
                street_address: self.street_address,
                city: self.city,
                state: self.state,
                zip_code: self.zip_code.value()?,
                country: self.country,
            },
            payment: PaymentInfo {
                card_number: self.credit_card_number,
                cvv: self.credit_card_cvv,
                expiration_year: self.credit_card_expiration_year,
                expiration_month: self.credit_card_expiration_month,
            },
        })
    }
}

#[derive(Deserialize)]
struct OrderIdArgs {
    order_id: String,
}

#[derive(Deserialize)]
struct QueryArgs {
    query: String,
}

#[derive(Deserialize)]
struct ProductNameArgs {
    product_name: String,
}

#[derive(Deserialize)]
struct TrackingIdArgs {
    tracking_id: String,
}

fn args<T: DeserializeOwned>(tool: &str, arguments: Value) -> Result<T, OrchestratorError> {
    // Tools without parameters may be sent `null`.
    let arguments = if arguments.is_null() {
        Value::Object(Default::default())
    } else {
        arguments
    };
    serde_json::from_value(arguments).map_err(|e| OrchestratorError::invalid_arguments(tool, e))
}

impl BoutiqueSystem {
    /// Runs one operation for `session_id`. Never fails: every problem ends
    /// up in the returned envelope.
    pub async fn invoke(&self, session_id: &str, tool: &str, arguments: Value) -> ToolOutcome {
        let span = info_span!("invoke", session_id, tool);
        async {
            debug!(%arguments, "Invocation");
            self.route(session_id, tool, arguments)
                .await
                .unwrap_or_else(ToolOutcome::from)
        }
        .instrument(span)
        .await
    }

    /// Runs a decoded [`Invocation`].
    pub async fn dispatch(&self, invocation: Invocation) -> ToolOutcome {
        self.invoke(&invocation.session_id, &invocation.tool, invocation.arguments)
            .await
    }

    async fn route(
        &self,
        session_id: &str,
        tool: &str,
        arguments: Value,
    ) -> Result<ToolOutcome, OrchestratorError> {
        let outcome = match tool {
            "set_user_id" => {
                let SetUserIdArgs { new_user_id } = args(tool, arguments)?;
                self.sessions.set_user_id(session_id, &new_user_id).await?;
                ToolOutcome::success(format!("User ID has been set to {new_user_id}."))
            }
            "add_item_to_cart" => {
                let AddItemArgs {
                    product_name,
                    quantity,
                } = args(tool, arguments)?;
                let report = self.cart.add_item(session_id, &product_name, quantity).await?;
                ToolOutcome::success(report)
            }
            "get_cart" => {
                let view = self.cart.get_cart(session_id).await?;
                if view.is_empty() {
                    ToolOutcome::success("Your shopping cart is empty.")
                } else {
                    ToolOutcome::success(format!("Your cart contains: {view}"))
                }
            }
            "empty_cart" => {
                self.cart.empty_cart(session_id).await?;
                ToolOutcome::success("Your shopping cart has been emptied.")
            }
            "place_order" => {
                let order = args::<PlaceOrderArgs>(tool, arguments)?
                    .into_order()
                    .map_err(|reason| OrchestratorError::invalid_arguments(tool, reason))?;
                let placed = self.checkout.place_order(session_id, order).await?;
                ToolOutcome::success(format!(
                    "Order placed successfully! Your order ID is {}.",
                    placed.order_id
                ))
            }
            "track_order" => {
                let OrderIdArgs { order_id } = args(tool, arguments)?;
                ToolOutcome::from(self.checkout.track_order(session_id, &order_id).await?)
            }
            "list_products" => {
                let products = self.catalog.list_products().await?;
                let listed: Vec<String> = products
                    .iter()
                    .map(|p| format!("{} (ID: {})", p.name, p.id))
                    .collect();
                ToolOutcome::success(format!("Found products: {}", listed.join(", ")))
            }
            "search_products" => {
                let QueryArgs { query } = args(tool, arguments)?;
                let products = self.catalog.search_products(&query).await?;
                if products.is_empty() {
                    ToolOutcome::success(format!("No products found for '{query}'."))
                } else {
                    ToolOutcome::success(format!(
                        "Found products for '{query}': {}",
                        names(&products)
                    ))
                }
            }
            "get_product_price" => {
                let ProductNameArgs { product_name } = args(tool, arguments)?;
                let report = match self.catalog.product_price(&product_name).await? {
                    Resolution::Resolved(product) => {
                        format!("The price of {} is {}.", product.name, product.price)
                    }
                    Resolution::Ambiguous(candidates) => format!(
                        "Found multiple products for '{product_name}': {}. Please be more specific.",
                        candidates.join(", ")
                    ),
                    Resolution::NotFound => format!("Could not find product '{product_name}'."),
                };
                ToolOutcome::success(report)
            }
            PACKAGE_STATUS_TOOL => {
                let TrackingIdArgs { tracking_id } = args(tool, arguments)?;
                ToolOutcome::success(self.tracker.package_status(&tracking_id).await?)
            }
            other => ToolOutcome::error(format!("Unknown tool '{other}'.")),
        };
        Ok(outcome)
    }
}

fn names(products: &[Product]) -> String {
    products
        .iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
