/// Represents a product held in the inventory.
///
/// Field values are validated by the store before construction: `id` is
/// positive and unique, `name` is non-empty, `price` is non-negative.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub quantity: u32,
    pub price: f64,
}

impl Product {
    pub fn new(id: u32, name: impl Into<String>, quantity: u32, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            price,
        }
    }
}
