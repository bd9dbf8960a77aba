// DTOs for the inventory store.

/// Raw product fields as entered at the prompt, prior to validation.
///
/// Integer fields stay signed here so out-of-range input reaches the store
/// and fails its validation rules instead of being rejected at parse time.
#[derive(Debug, Clone)]
pub struct ProductDraft {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
    pub price: f64,
}
