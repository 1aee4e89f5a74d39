use sea_orm::{DatabaseBackend, Statement, Value};

use crate::shared::pagination::PageRequest;
use crate::vehicle::application::domain::listing::{
    ListingType, VehicleListFilter, VehicleSort, RESULT_FAILED, RESULT_SOLD, STATUS_BIDDING_OPEN,
};

/// Count and page statements sharing one WHERE clause.
#[derive(Debug, Clone)]
pub struct ListingStatements {
    pub count: Statement,
    pub data: Statement,
}

/// Accumulates AND-ed predicates with monotonically numbered binds.
#[derive(Debug, Default)]
struct WhereClause {
    predicates: Vec<String>,
    values: Vec<Value>,
}

impl WhereClause {
    fn bind(&mut self, value: impl Into<Value>) -> String {
        self.values.push(value.into());
        format!("${}", self.values.len())
    }

    fn push(&mut self, predicate: String) {
        self.predicates.push(predicate);
    }

    fn to_sql(&self) -> String {
        if self.predicates.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", self.predicates.join(" AND "))
        }
    }
}

/// Escapes ILIKE metacharacters so user text matches literally.
pub fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

fn contains_pattern(raw: &str) -> String {
    format!("%{}%", escape_like(raw))
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn build_where(filter: &VehicleListFilter) -> WhereClause {
    let mut clause = WhereClause::default();

    if let Some(year) = filter.year {
        let p = clause.bind(year);
        clause.push(format!("v.year = {p}"));
    }
    if let Some(year_max) = filter.year_max {
        let p = clause.bind(year_max);
        clause.push(format!("v.year <= {p}"));
    }
    if let Some(price_min) = filter.price_min {
        let p = clause.bind(price_min);
        clause.push(format!("v.price >= {p}"));
    }
    if let Some(price_max) = filter.price_max {
        let p = clause.bind(price_max);
        clause.push(format!("v.price <= {p}"));
    }
    if let Some(mileage_min) = filter.mileage_min {
        let p = clause.bind(mileage_min);
        clause.push(format!("v.mileage >= {p}"));
    }
    if let Some(mileage_max) = filter.mileage_max {
        let p = clause.bind(mileage_max);
        clause.push(format!("v.mileage <= {p}"));
    }

    for (column, value) in [
        ("fuel_type", &filter.fuel_type),
        ("status", &filter.status),
        ("source", &filter.source),
        ("result_status", &filter.result_status),
    ] {
        if let Some(value) = non_blank(value) {
            let p = clause.bind(value.to_string());
            clause.push(format!("v.{column} = {p}"));
        }
    }

    match filter.listing_type {
        Some(ListingType::Active) => {
            let p = clause.bind(STATUS_BIDDING_OPEN);
            clause.push(format!("v.status = {p}"));
        }
        Some(ListingType::Completed) => {
            let sold = clause.bind(RESULT_SOLD);
            let failed = clause.bind(RESULT_FAILED);
            clause.push(format!("v.result_status IN ({sold}, {failed})"));
        }
        None => {}
    }

    match filter.has_inspection {
        Some(true) => clause.push(
            "EXISTS (SELECT 1 FROM vehicle_inspections vi WHERE vi.vehicle_id = v.id)".to_string(),
        ),
        Some(false) => clause.push(
            "NOT EXISTS (SELECT 1 FROM vehicle_inspections vi WHERE vi.vehicle_id = v.id)"
                .to_string(),
        ),
        None => {}
    }

    if let Some(car_number) = non_blank(&filter.car_number) {
        let p = clause.bind(contains_pattern(car_number));
        clause.push(format!("v.car_number ILIKE {p}"));
    }

    if let Some(search) = non_blank(&filter.search) {
        let p = clause.bind(contains_pattern(search));
        clause.push(format!(
            "(v.model_name ILIKE {p} OR v.mgmt_number ILIKE {p} OR v.car_number ILIKE {p} OR v.manufacturer ILIKE {p})"
        ));
    }

    clause
}

/// Builds the total-count query and the page query for a listing request.
pub fn build_listing_statements(
    filter: &VehicleListFilter,
    sort: &VehicleSort,
    page: &PageRequest,
) -> ListingStatements {
    let mut clause = build_where(filter);
    let where_sql = clause.to_sql();

    let count = Statement::from_sql_and_values(
        DatabaseBackend::Postgres,
        format!("SELECT COUNT(*) AS total FROM vehicles v {where_sql}"),
        clause.values.clone(),
    );

    let column = sort.field.column();
    let dir = sort.direction.as_sql();
    let limit = clause.bind(page.limit() as i64);
    let offset = clause.bind(page.offset());

    let data_sql = format!(
        r#"
        WITH page AS (
            SELECT v.*
            FROM vehicles v
            {where_sql}
            ORDER BY v.{column} {dir}, v.id {dir}
            LIMIT {limit} OFFSET {offset}
        )
        SELECT page.*, (vi.id IS NOT NULL) AS has_inspection
        FROM page
        LEFT JOIN vehicle_inspections vi ON vi.vehicle_id = page.id
        ORDER BY page.{column} {dir}, page.id {dir}
        "#
    );

    let data = Statement::from_sql_and_values(DatabaseBackend::Postgres, data_sql, clause.values);

    ListingStatements { count, data }
}
