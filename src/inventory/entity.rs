use crate::domain::Product;

use super::dtos::ProductDraft;
use super::error::InventoryError;

/// The in-memory product collection and the rules guarding it.
///
/// Insertion order is preserved for listing. Every method either applies
/// its full documented mutation or leaves the collection untouched.
#[derive(Debug, Default)]
pub struct Inventory {
    products: Vec<Product>,
}

impl Inventory {
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
        }
    }

    fn position(&self, id: i64) -> Option<usize> {
        self.products.iter().position(|p| i64::from(p.id) == id)
    }

    /// Validates a draft and inserts the resulting product.
    ///
    /// # Errors
    /// - `InvalidId` if the id is not a positive integer in `u32` range
    /// - `AlreadyExists` if a product with the same id is stored
    /// - `EmptyName` if the trimmed name is blank
    /// - `InvalidQuantity` if the quantity is negative or out of range
    /// - `InvalidPrice` if the price is negative or not finite
    pub fn add(&mut self, draft: ProductDraft) -> Result<Product, InventoryError> {
        let id = u32::try_from(draft.id)
            .ok()
            .filter(|&id| id > 0)
            .ok_or(InventoryError::InvalidId(draft.id))?;
        if self.position(draft.id).is_some() {
            return Err(InventoryError::AlreadyExists(id));
        }
        let name = draft.name.trim().to_string();
        if name.is_empty() {
            return Err(InventoryError::EmptyName);
        }
        let quantity = u32::try_from(draft.quantity)
            .map_err(|_| InventoryError::InvalidQuantity(draft.quantity))?;
        if draft.price < 0.0 || !draft.price.is_finite() {
            return Err(InventoryError::InvalidPrice(draft.price));
        }

        let product = Product::new(id, name, quantity, draft.price);
        self.products.push(product.clone());
        Ok(product)
    }

    /// Removes the product with the given id, returning it.
    pub fn remove(&mut self, id: i64) -> Result<Product, InventoryError> {
        let index = self.position(id).ok_or(InventoryError::NotFound(id))?;
        Ok(self.products.remove(index))
    }

    /// Overwrites the stored quantity of one product, leaving its other
    /// fields untouched, and returns the updated product.
    pub fn update_quantity(&mut self, id: i64, quantity: i64) -> Result<Product, InventoryError> {
        let index = self.position(id).ok_or(InventoryError::NotFound(id))?;
        let quantity =
            u32::try_from(quantity).map_err(|_| InventoryError::InvalidQuantity(quantity))?;
        self.products[index].quantity = quantity;
        Ok(self.products[index].clone())
    }

    /// All stored products in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Sum of `quantity * price` over the whole inventory; `0.0` when empty.
    pub fn total_value(&self) -> f64 {
        self.products
            .iter()
            .map(|p| f64::from(p.quantity) * p.price)
            .sum()
    }
}
