use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::shared::pagination::PageRequest;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FavoriteListQuery {
    /// 1-based, defaults to 1
    pub page: Option<String>,
    /// 1..=100, defaults to 20
    pub limit: Option<String>,
}

impl FavoriteListQuery {
    pub fn page_request(&self) -> PageRequest {
        PageRequest::from_raw(self.page.as_deref(), self.limit.as_deref())
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CheckFavoritesRequest {
    #[schema(example = json!([1, 2, 3]))]
    pub vehicle_ids: Vec<i64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CheckFavoritesResponse {
    #[schema(value_type = Object, example = json!({"1": false, "2": true}))]
    pub favorites: BTreeMap<i64, bool>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FavoriteStatusResponse {
    pub is_favorite: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_request_falls_back_to_defaults() {
        let query = FavoriteListQuery {
            page: Some("x".to_string()),
            limit: None,
        };
        assert_eq!(query.page_request(), PageRequest::default());
    }

    #[test]
    fn favorites_map_serializes_ids_as_keys() {
        let response = CheckFavoritesResponse {
            favorites: BTreeMap::from([(1, false), (2, true)]),
        };
        let json = serde_json::to_value(response).unwrap();
        assert_eq!(json["favorites"]["1"], false);
        assert_eq!(json["favorites"]["2"], true);
    }
}
