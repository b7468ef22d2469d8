use serde::Serialize;
use sha2::{Digest, Sha256};

use super::value_objects::ServerFilter;

pub const SERVERS_PREFIX: &str = "servers";
pub const LOCATIONS_KEY: &str = "locations";
pub const METRICS_KEY: &str = "metrics";

/// Hashes the serialized form of `value` under `prefix`.
///
/// Struct fields serialize in declaration order, so two values that compare equal always
/// hash the same.
pub fn hashed_key<T: Serialize>(prefix: &str, value: &T) -> String {
    let payload = serde_json::to_vec(value).unwrap_or_default();

    let mut hasher = Sha256::new();
    hasher.update(&payload);
    let hash = hasher.finalize();

    format!("{}:{}", prefix, hex::encode(hash))
}

pub fn servers_key(filter: &ServerFilter) -> String {
    hashed_key(SERVERS_PREFIX, filter)
}

pub fn server_key(id: i32) -> String {
    format!("server:{}", id)
}
