use std::fmt;

/// A monetary amount as the catalog reports it.
///
/// `units` is the whole part and `nanos` the fractional part in billionths,
/// always in `0..=999_999_999` for non-negative amounts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Money {
    pub currency_code: String,
    pub units: i64,
    pub nanos: i32,
}

impl Money {
    pub fn new(currency_code: impl Into<String>, units: i64, nanos: i32) -> Self {
        Self {
            currency_code: currency_code.into(),
            units,
            nanos,
        }
    }

    /// Whole cents, truncated. `nanos` of 990_000_000 yields 99.
    pub fn cents(&self) -> i32 {
        self.nanos / 10_000_000
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02} {}", self.units, self.cents(), self.currency_code)
    }
}

/// A catalog product. The catalog service owns these; we only hold copies
/// for the duration of one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: Money,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Catalog identifier
    /// * `name` - Display name
    /// * `price` - Unit price
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
        }
    }
}
