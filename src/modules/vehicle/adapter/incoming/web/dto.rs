use std::str::FromStr;

use serde::Deserialize;
use utoipa::IntoParams;

use crate::shared::pagination::PageRequest;
use crate::vehicle::application::domain::listing::{ListingType, VehicleListFilter, VehicleSort};

// ============================================================
// Listing query
// ============================================================

/// Raw `GET /api/vehicles` query string. Everything arrives as text so a
/// bad number can be reported with the field name instead of a serde error.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct VehicleListQuery {
    /// 1-based page, defaults to 1
    pub page: Option<String>,
    /// Page size in 1..=100, defaults to 20
    pub limit: Option<String>,
    pub year: Option<String>,
    pub year_max: Option<String>,
    pub price_min: Option<String>,
    pub price_max: Option<String>,
    pub mileage_min: Option<String>,
    pub mileage_max: Option<String>,
    pub fuel_type: Option<String>,
    pub status: Option<String>,
    pub source: Option<String>,
    pub result_status: Option<String>,
    /// `active` or `completed`
    pub listing_type: Option<String>,
    /// `true`/`false` (or `1`/`0`)
    pub has_inspection: Option<String>,
    pub car_number: Option<String>,
    /// Matches model, management number, plate or manufacturer
    pub search: Option<String>,
    /// created_at, updated_at, price, year, mileage or due_date
    pub sort_by: Option<String>,
    /// asc or desc
    pub sort_dir: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value for {field}: {value}")]
pub struct InvalidQuery {
    pub field: &'static str,
    pub value: String,
}

fn text(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn number<T: FromStr>(field: &'static str, raw: Option<String>) -> Result<Option<T>, InvalidQuery> {
    match text(raw) {
        None => Ok(None),
        Some(value) => value
            .parse::<T>()
            .map(Some)
            .map_err(|_| InvalidQuery { field, value }),
    }
}

fn flag(field: &'static str, raw: Option<String>) -> Result<Option<bool>, InvalidQuery> {
    match text(raw) {
        None => Ok(None),
        Some(value) => match value.to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(Some(true)),
            "false" | "0" => Ok(Some(false)),
            _ => Err(InvalidQuery { field, value }),
        },
    }
}

impl VehicleListQuery {
    pub fn into_parts(self) -> Result<(VehicleListFilter, VehicleSort, PageRequest), InvalidQuery> {
        let page = PageRequest::from_raw(self.page.as_deref(), self.limit.as_deref());
        let sort = VehicleSort::parse(self.sort_by.as_deref(), self.sort_dir.as_deref());

        let filter = VehicleListFilter {
            year: number("year", self.year)?,
            year_max: number("year_max", self.year_max)?,
            price_min: number("price_min", self.price_min)?,
            price_max: number("price_max", self.price_max)?,
            mileage_min: number("mileage_min", self.mileage_min)?,
            mileage_max: number("mileage_max", self.mileage_max)?,
            fuel_type: text(self.fuel_type),
            status: text(self.status),
            source: text(self.source),
            result_status: text(self.result_status),
            listing_type: text(self.listing_type).and_then(|v| ListingType::parse(&v)),
            has_inspection: flag("has_inspection", self.has_inspection)?,
            car_number: text(self.car_number),
            search: text(self.search),
        };

        Ok((filter, sort, page))
    }
}

// ============================================================
// Path ids
// ============================================================

/// Vehicle ids arrive as raw path text so a non-numeric id is a 400, not a 404.
pub fn parse_vehicle_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vehicle::application::domain::listing::{SortDirection, SortField};

    #[test]
    fn empty_query_gives_defaults() {
        let (filter, sort, page) = VehicleListQuery::default().into_parts().unwrap();

        assert_eq!(filter, VehicleListFilter::default());
        assert_eq!(sort, VehicleSort::default());
        assert_eq!(page, PageRequest::default());
    }

    #[test]
    fn parses_numbers_and_trims_text() {
        let query = VehicleListQuery {
            year: Some("2020".to_string()),
            price_max: Some(" 15000000 ".to_string()),
            fuel_type: Some(" diesel ".to_string()),
            status: Some("   ".to_string()),
            listing_type: Some("completed".to_string()),
            has_inspection: Some("1".to_string()),
            sort_by: Some("price".to_string()),
            sort_dir: Some("asc".to_string()),
            page: Some("3".to_string()),
            limit: Some("1000".to_string()),
            ..Default::default()
        };

        let (filter, sort, page) = query.into_parts().unwrap();

        assert_eq!(filter.year, Some(2020));
        assert_eq!(filter.price_max, Some(15_000_000));
        assert_eq!(filter.fuel_type.as_deref(), Some("diesel"));
        assert_eq!(filter.status, None);
        assert_eq!(filter.listing_type, Some(ListingType::Completed));
        assert_eq!(filter.has_inspection, Some(true));
        assert_eq!(sort.field, SortField::Price);
        assert_eq!(sort.direction, SortDirection::Asc);
        assert_eq!(page.page(), 3);
        assert_eq!(page.limit(), 20);
    }

    #[test]
    fn non_numeric_filter_is_rejected_with_field_name() {
        let query = VehicleListQuery {
            price_min: Some("cheap".to_string()),
            ..Default::default()
        };

        let err = query.into_parts().unwrap_err();

        assert_eq!(err.field, "price_min");
        assert_eq!(err.value, "cheap");
    }

    #[test]
    fn unknown_listing_type_is_ignored_but_bad_flag_is_not() {
        let (filter, _, _) = VehicleListQuery {
            listing_type: Some("archived".to_string()),
            ..Default::default()
        }
        .into_parts()
        .unwrap();
        assert_eq!(filter.listing_type, None);

        let err = VehicleListQuery {
            has_inspection: Some("maybe".to_string()),
            ..Default::default()
        }
        .into_parts()
        .unwrap_err();
        assert_eq!(err.field, "has_inspection");
    }

    #[test]
    fn vehicle_id_must_be_numeric() {
        assert_eq!(parse_vehicle_id("42"), Some(42));
        assert_eq!(parse_vehicle_id("abc"), None);
        assert_eq!(parse_vehicle_id(""), None);
    }
}
