#![allow(dead_code)]

use std::{sync::Arc, time::Duration};

use axum_test::TestServer;
use clap::Parser;
use sea_orm::{ActiveValue::Set, ConnectionTrait, DatabaseConnection, EntityTrait, Schema};
use serverlist_api::{
    application::http::server::{app_state::AppState, http_server::router},
    args::Args,
};
use serverlist_core::{
    domain::common::services::Service,
    entity::servers,
    infrastructure::{
        cache::{CacheStore, InMemoryCacheRepository},
        db::sqlite::{Sqlite, SqliteConfig},
        server::repositories::SqliteServerRepository,
    },
};

fn record(
    id: i32,
    model: &str,
    ram_gb: i32,
    hdd: &str,
    storage_gb: i32,
    location: Option<(&str, &str)>,
    price_eur: Option<f64>,
) -> servers::ActiveModel {
    let created_at = chrono::NaiveDate::from_ymd_opt(2024, 5, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();

    servers::ActiveModel {
        id: Set(id),
        model: Set(model.to_string()),
        cpu: Set(Some("Intel Xeon".to_string())),
        ram_gb: Set(Some(ram_gb)),
        hdd: Set(Some(hdd.to_string())),
        storage_gb: Set(Some(storage_gb)),
        location_city: Set(location.map(|(city, _)| city.to_string())),
        location_code: Set(location.map(|(_, code)| code.to_string())),
        price_eur: Set(price_eur),
        raw_price: Set(price_eur.map(|p| format!("€{p}"))),
        raw_ram: Set(Some(format!("{ram_gb}GBDDR3"))),
        raw_hdd: Set(Some(hdd.to_string())),
        created_at: Set(created_at),
        updated_at: Set(None),
    }
}

pub async fn seeded_database() -> DatabaseConnection {
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

    let amsterdam = Some(("Amsterdam", "AMS-01"));
    let frankfurt = Some(("Frankfurt", "FRA-10"));
    servers::Entity::insert_many([
        record(1, "Dell R210Rev.II", 16, "2x2TBSATA2", 4096, amsterdam, Some(49.99)),
        record(2, "HP DL120G7", 8, "4x1TBSATA2", 4096, amsterdam, Some(39.99)),
        record(3, "Dell R730XD", 32, "2x480GBSSD", 960, frankfurt, Some(153.99)),
        record(4, "HP DL380eG8", 64, "8x2TBSATA2", 16384, frankfurt, Some(131.99)),
        record(5, "Supermicro X9DRI", 128, "2x120GBSSD", 240, None, None),
    ])
    .exec(&db)
    .await
    .expect("seed servers");

    db
}

pub fn app(db: DatabaseConnection, cache: CacheStore) -> TestServer {
    let args = Arc::new(Args::parse_from(["serverlist-api"]));
    let service = Service::new(
        SqliteServerRepository::new(db),
        cache,
        Duration::from_secs(60),
    );
    let router = router(AppState::new(args, service)).expect("router");

    TestServer::new(router).expect("test server")
}

pub async fn test_server() -> TestServer {
    app(seeded_database().await, CacheStore::default())
}

pub async fn cached_test_server() -> (TestServer, DatabaseConnection) {
    let db = seeded_database().await;
    let server = app(
        db.clone(),
        CacheStore::Memory(InMemoryCacheRepository::new()),
    );
    (server, db)
}
