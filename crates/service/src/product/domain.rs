use serde::{Deserialize, Serialize};

/// External view of a product. The id is caller-assigned; when absent on
/// create, one is generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub product_types: Vec<String>,
}
