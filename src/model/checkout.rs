use std::fmt;

/// Shipping address. Passed through to the checkout service unchecked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip_code: i32,
    pub country: String,
}

/// Card details for an order.
///
/// `Debug` is implemented by hand so the card number and CVV never reach a
/// log line.
#[derive(Clone, PartialEq, Eq)]
pub struct PaymentInfo {
    pub card_number: String,
    pub cvv: i32,
    pub expiration_year: i32,
    pub expiration_month: i32,
}

impl PaymentInfo {
    /// The card number with everything but the last four digits hidden.
    pub fn masked_card_number(&self) -> String {
        let digits: Vec<char> = self.card_number.chars().collect();
        let visible = digits.len().min(4);
        let tail: String = digits[digits.len() - visible..].iter().collect();
        format!("{}{}", "*".repeat(digits.len() - visible), tail)
    }
}

impl fmt::Debug for PaymentInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentInfo")
            .field("card_number", &self.masked_card_number())
            .field("cvv", &"***")
            .field("expiration_year", &self.expiration_year)
            .field("expiration_month", &self.expiration_month)
            .finish()
    }
}

/// Everything the checkout service needs besides the user and currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    pub email: String,
    pub address: Address,
    pub payment: PaymentInfo,
}

/// What the checkout service hands back for a placed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedOrder {
    pub order_id: String,
    pub tracking_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payment(card: &str) -> PaymentInfo {
        PaymentInfo {
            card_number: card.to_string(),
            cvv: 672,
            expiration_year: 2030,
            expiration_month: 1,
        }
    }

    #[test]
    fn test_masked_card_number_keeps_last_four() {
        assert_eq!(
            payment("4432801561520454").masked_card_number(),
            "************0454"
        );
        assert_eq!(payment("123").masked_card_number(), "123");
    }

    #[test]
    fn test_debug_hides_card_details() {
        let rendered = format!("{:?}", payment("4432801561520454"));
        assert!(!rendered.contains("4432801561520454"));
        assert!(!rendered.contains("672"));
        assert!(rendered.contains("0454"));
    }
}
