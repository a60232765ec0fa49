//! Hooks that run after an item was added to the cart.

use crate::model::Product;

/// Post-processing for a successful add. Returning `Some` appends the text to
/// the report, separated by a space.
pub trait AddItemHook: Send + Sync {
    fn after_add(&self, requested_name: &str, product: &Product) -> Option<String>;
}

/// Suggests accessories when someone buys sunglasses.
#[derive(Debug, Clone, Copy, Default)]
pub struct SunglassesRecommendation;

impl SunglassesRecommendation {
    pub const PRODUCTS: [&'static str; 2] = ["Tank Top", "Watch"];
}

impl AddItemHook for SunglassesRecommendation {
    fn after_add(&self, requested_name: &str, _product: &Product) -> Option<String> {
        if !requested_name.eq_ignore_ascii_case("sunglasses") {
            return None;
        }
        Some(format!(
            "I also recommend: {}. Would you like to add any?",
            Self::PRODUCTS.join(", ")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Money;

    fn product() -> Product {
        Product::new("9SIQT8TOJO", "Sunglasses", Money::new("USD", 19, 990_000_000))
    }

    #[test]
    fn test_recommends_for_sunglasses_in_any_case() {
        let hook = SunglassesRecommendation;
        for name in ["Sunglasses", "sunglasses", "SUNGLASSES"] {
            assert_eq!(
                hook.after_add(name, &product()).as_deref(),
                Some("I also recommend: Tank Top, Watch. Would you like to add any?")
            );
        }
    }

    #[test]
    fn test_silent_for_other_products() {
        assert_eq!(SunglassesRecommendation.after_add("Mug", &product()), None);
        assert_eq!(SunglassesRecommendation.after_add("Sunglasses case", &product()), None);
    }

    #[test]
    fn test_padded_name_is_not_an_exact_match() {
        assert_eq!(SunglassesRecommendation.after_add(" sunglasses ", &product()), None);
        assert_eq!(SunglassesRecommendation.after_add("Sunglasses\n", &product()), None);
    }
}
