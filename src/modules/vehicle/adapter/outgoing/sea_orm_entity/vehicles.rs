use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "vehicles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub mgmt_number: Option<String>,
    pub car_number: Option<String>,
    pub manufacturer: Option<String>,
    pub model_name: Option<String>,
    pub fuel_type: Option<String>,
    pub transmission: Option<String>,
    pub year: Option<i32>,
    pub mileage: Option<i32>,
    pub price: Option<i64>,
    pub min_bid_price: Option<i64>,
    pub location: Option<String>,
    pub organization: Option<String>,
    pub due_date: Option<DateTimeWithTimeZone>,
    pub auction_count: Option<i32>,
    pub status: Option<String>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub image_urls: Option<Json>,
    pub detail_url: Option<String>,
    pub source: String,
    pub source_id: String,
    pub final_price: Option<i64>,
    pub result_status: Option<String>,
    pub result_date: Option<DateTimeWithTimeZone>,
    pub case_number: Option<String>,
    pub court_name: Option<String>,
    pub property_type: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::auction_history::Entity")]
    AuctionHistory,
    #[sea_orm(has_one = "super::vehicle_inspections::Entity")]
    VehicleInspections,
}

impl Related<super::auction_history::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AuctionHistory.def()
    }
}

impl Related<super::vehicle_inspections::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VehicleInspections.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
