use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "vehicle_external_info")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub car_number: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub data: Json,
    pub source: String,
    pub fetched_at: DateTimeWithTimeZone,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
