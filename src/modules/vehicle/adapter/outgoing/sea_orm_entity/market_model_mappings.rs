use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "market_model_mappings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub internal_name: String,
    pub manufacturer_korean: String,
    pub encar_model_group: Option<String>,
    pub kcar_model_code: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
