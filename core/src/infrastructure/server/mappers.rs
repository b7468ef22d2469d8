use chrono::{TimeZone, Utc};

use crate::domain::server::entities::Server;
use crate::entity::servers::Model as ServerModel;

impl From<ServerModel> for Server {
    fn from(model: ServerModel) -> Self {
        let created_at = Utc.from_utc_datetime(&model.created_at);
        let updated_at = model.updated_at.map(|dt| dt.and_utc());
        Server {
            id: model.id,
            model: model.model,
            cpu: model.cpu,
            ram_gb: model.ram_gb,
            hdd: model.hdd.unwrap_or_default(),
            storage_gb: model.storage_gb,
            location_city: model.location_city,
            location_code: model.location_code,
            price_eur: model.price_eur,
            raw_price: model.raw_price.unwrap_or_default(),
            raw_ram: model.raw_ram.unwrap_or_default(),
            raw_hdd: model.raw_hdd.unwrap_or_default(),
            created_at,
            updated_at,
        }
    }
}

impl From<&ServerModel> for Server {
    fn from(model: &ServerModel) -> Self {
        Self::from(model.clone())
    }
}
