#![allow(dead_code)]

use std::time::Duration;

use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::{ActiveValue::Set, ConnectionTrait, DatabaseConnection, EntityTrait, Schema};
use serverlist_core::{
    entity::servers,
    infrastructure::{
        db::sqlite::{Sqlite, SqliteConfig},
        server::repositories::SqliteServerRepository,
    },
};

pub fn seeded_at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

pub struct Fixture {
    pub id: i32,
    pub model: &'static str,
    pub cpu: Option<&'static str>,
    pub ram_gb: Option<i32>,
    pub hdd: &'static str,
    pub storage_gb: Option<i32>,
    pub location_city: Option<&'static str>,
    pub location_code: Option<&'static str>,
    pub price_eur: Option<f64>,
}

impl Fixture {
    fn into_active_model(self) -> servers::ActiveModel {
        servers::ActiveModel {
            id: Set(self.id),
            model: Set(self.model.to_string()),
            cpu: Set(self.cpu.map(str::to_string)),
            ram_gb: Set(self.ram_gb),
            hdd: Set(Some(self.hdd.to_string())),
            storage_gb: Set(self.storage_gb),
            location_city: Set(self.location_city.map(str::to_string)),
            location_code: Set(self.location_code.map(str::to_string)),
            price_eur: Set(self.price_eur),
            raw_price: Set(self.price_eur.map(|p| format!("€{p}"))),
            raw_ram: Set(self.ram_gb.map(|r| format!("{r}GBDDR3"))),
            raw_hdd: Set(Some(self.hdd.to_string())),
            created_at: Set(seeded_at()),
            updated_at: Set(None),
        }
    }
}

/// Five listings: two in Amsterdam, two in Frankfurt, one without location or price.
pub fn fixtures() -> Vec<Fixture> {
    vec![
        Fixture {
            id: 1,
            model: "Dell R210Rev.II",
            cpu: Some("Intel Xeon E3-1230v2"),
            ram_gb: Some(16),
            hdd: "2x2TBSATA2",
            storage_gb: Some(4096),
            location_city: Some("Amsterdam"),
            location_code: Some("AMS-01"),
            price_eur: Some(49.99),
        },
        Fixture {
            id: 2,
            model: "HP DL120G7",
            cpu: Some("Intel G850"),
            ram_gb: Some(4),
            hdd: "4x1TBSATA2",
            storage_gb: Some(4096),
            location_city: Some("Amsterdam"),
            location_code: Some("AMS-01"),
            price_eur: Some(39.99),
        },
        Fixture {
            id: 3,
            model: "Dell R730XD",
            cpu: Some("2x Intel Xeon E5-2630v4"),
            ram_gb: Some(32),
            hdd: "2x480GBSSD",
            storage_gb: Some(960),
            location_city: Some("Frankfurt"),
            location_code: Some("FRA-10"),
            price_eur: Some(153.99),
        },
        Fixture {
            id: 4,
            model: "HP DL380eG8",
            cpu: Some("2x Intel Xeon E5-2420"),
            ram_gb: Some(64),
            hdd: "8x2TBSATA2",
            storage_gb: Some(16384),
            location_city: Some("Frankfurt"),
            location_code: Some("FRA-10"),
            price_eur: Some(131.99),
        },
        Fixture {
            id: 5,
            model: "Supermicro X9DRI",
            cpu: None,
            ram_gb: Some(128),
            hdd: "2x120GBSSD",
            storage_gb: Some(240),
            location_city: None,
            location_code: None,
            price_eur: None,
        },
    ]
}

pub async fn empty_database() -> DatabaseConnection {
    let sqlite = Sqlite::new(SqliteConfig {
        database_url: "sqlite::memory:".to_string(),
        max_connections: 1,
        max_lifetime: Duration::from_secs(300),
    })
    .await
    .expect("in-memory database");
    let db = sqlite.get_db();

    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    db.execute(backend.build(&schema.create_table_from_entity(servers::Entity)))
        .await
        .expect("servers table");

    db
}

pub async fn seeded_database() -> DatabaseConnection {
    let db = empty_database().await;
    servers::Entity::insert_many(fixtures().into_iter().map(Fixture::into_active_model))
        .exec(&db)
        .await
        .expect("seed servers");
    db
}

pub async fn seeded_repository() -> SqliteServerRepository {
    SqliteServerRepository::new(seeded_database().await)
}
