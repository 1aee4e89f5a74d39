/// `status` value of a vehicle whose auction is still taking bids.
pub const STATUS_BIDDING_OPEN: &str = "bidding-open";
pub const RESULT_SOLD: &str = "sold";
pub const RESULT_FAILED: &str = "failed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingType {
    /// Still open for bidding
    Active,
    /// Auction ended as sold or failed
    Completed,
}

impl ListingType {
    /// Unknown values are treated as "no listing filter".
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "active" => Some(Self::Active),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

/// Optional predicates for the vehicle listing. Every `Some` adds one
/// AND-ed condition; string values are already trimmed and non-empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VehicleListFilter {
    pub year: Option<i32>,
    pub year_max: Option<i32>,
    pub price_min: Option<i64>,
    pub price_max: Option<i64>,
    pub mileage_min: Option<i32>,
    pub mileage_max: Option<i32>,
    pub fuel_type: Option<String>,
    pub status: Option<String>,
    pub source: Option<String>,
    pub result_status: Option<String>,
    pub listing_type: Option<ListingType>,
    pub has_inspection: Option<bool>,
    pub car_number: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortField {
    #[default]
    CreatedAt,
    UpdatedAt,
    Price,
    Year,
    Mileage,
    DueDate,
}

impl SortField {
    /// Anything outside the allow-list sorts by `created_at`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("updated_at") => Self::UpdatedAt,
            Some("price") => Self::Price,
            Some("year") => Self::Year,
            Some("mileage") => Self::Mileage,
            Some("due_date") => Self::DueDate,
            _ => Self::CreatedAt,
        }
    }

    pub fn column(&self) -> &'static str {
        match self {
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
            Self::Price => "price",
            Self::Year => "year",
            Self::Mileage => "mileage",
            Self::DueDate => "due_date",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(v) if v.trim().eq_ignore_ascii_case("asc") => Self::Asc,
            _ => Self::Desc,
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VehicleSort {
    pub field: SortField,
    pub direction: SortDirection,
}

impl VehicleSort {
    pub fn parse(sort_by: Option<&str>, sort_dir: Option<&str>) -> Self {
        Self {
            field: SortField::parse(sort_by),
            direction: SortDirection::parse(sort_dir),
        }
    }
}
