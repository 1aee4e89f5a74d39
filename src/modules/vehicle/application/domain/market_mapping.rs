use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ManufacturerMapping {
    pub id: i64,
    #[schema(example = "hyundai")]
    pub internal_name: String,
    #[schema(example = "현대")]
    pub korean_name: String,
    pub is_foreign: bool,
    pub kcar_code: Option<String>,
    pub encar_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FuelMapping {
    pub id: i64,
    #[schema(example = "diesel")]
    pub internal_name: String,
    pub encar_name: Option<String>,
    pub kcar_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ModelMapping {
    pub id: i64,
    pub internal_name: String,
    pub manufacturer_korean: String,
    pub encar_model_group: Option<String>,
    pub kcar_model_code: Option<String>,
}

/// Name translations used by the frontend to deep-link into other markets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MarketMappings {
    pub manufacturers: Vec<ManufacturerMapping>,
    pub fuel_types: Vec<FuelMapping>,
    pub models: Vec<ModelMapping>,
}
