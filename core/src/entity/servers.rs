use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "servers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub model: String,
    pub cpu: Option<String>,
    pub ram_gb: Option<i32>,
    pub hdd: Option<String>,
    pub storage_gb: Option<i32>,
    pub location_city: Option<String>,
    pub location_code: Option<String>,
    #[sea_orm(column_type = "Double", nullable)]
    pub price_eur: Option<f64>,
    pub raw_price: Option<String>,
    pub raw_ram: Option<String>,
    pub raw_hdd: Option<String>,
    pub created_at: DateTime,
    pub updated_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
