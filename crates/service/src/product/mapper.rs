//! Pure conversions between product rows and transfer objects.

use chrono::Utc;
use models::product;
use uuid::Uuid;

use super::domain::ProductDto;

/// Decode a JSON column into a string list; anything malformed maps to empty.
pub fn string_list(value: &serde_json::Value) -> Vec<String> {
    serde_json::from_value(value.clone()).unwrap_or_default()
}

pub fn to_dto(model: &product::Model) -> ProductDto {
    ProductDto {
        id: Some(model.id.clone()),
        name: model.name.clone(),
        price: model.price,
        ingredients: string_list(&model.ingredients),
        product_types: string_list(&model.product_types),
    }
}

/// DTO to a fresh storage row; a missing id is generated.
pub fn to_model(dto: &ProductDto) -> product::Model {
    let now = Utc::now().into();
    product::Model {
        id: dto.id.clone().unwrap_or_else(|| Uuid::new_v4().to_string()),
        name: dto.name.clone(),
        price: dto.price,
        ingredients: serde_json::json!(dto.ingredients),
        product_types: serde_json::json!(dto.product_types),
        created_at: now,
        updated_at: now,
    }
}
