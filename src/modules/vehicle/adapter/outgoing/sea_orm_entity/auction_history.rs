use sea_orm::entity::prelude::*;

/// Append-only; rows are written by the `vehicles` trigger.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "auction_history")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub vehicle_id: i64,
    pub auction_round: Option<i32>,
    pub listed_price: Option<i64>,
    pub min_bid_price: Option<i64>,
    pub final_price: Option<i64>,
    pub status: String,
    pub bid_deadline: Option<DateTimeWithTimeZone>,
    pub result_date: Option<DateTimeWithTimeZone>,
    pub recorded_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::vehicles::Entity",
        from = "Column::VehicleId",
        to = "super::vehicles::Column::Id",
        on_delete = "Cascade"
    )]
    Vehicles,
}

impl Related<super::vehicles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vehicles.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
