//! Translates a [`ServerFilter`] into parameterized SQL for the `servers` table.
//!
//! Every active filter contributes one predicate and its positional values; inactive filters
//! contribute nothing. The page and count statements are rendered from the same predicate
//! list so their results always agree.

use sea_orm::{DatabaseBackend, Statement, Value};

use crate::domain::server::value_objects::ServerFilter;

pub const SERVER_COLUMNS: &str = "id, model, cpu, ram_gb, hdd, storage_gb, location_city, \
     location_code, price_eur, raw_price, raw_ram, raw_hdd, created_at, updated_at";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerQuery {
    pub conditions: Vec<String>,
    pub values: Vec<Value>,
    pub order_by: String,
    pub limit: u64,
    pub offset: u64,
}

fn placeholders(count: usize) -> String {
    vec!["?"; count].join(", ")
}

fn contains_pattern(term: &str) -> String {
    format!("%{}%", term)
}

impl ServerQuery {
    pub fn from_filter(filter: &ServerFilter) -> Self {
        let mut conditions: Vec<String> = Vec::new();
        let mut values: Vec<Value> = Vec::new();

        if !filter.query.is_empty() {
            conditions.push("(model LIKE ? OR cpu LIKE ?)".to_string());
            let pattern = contains_pattern(&filter.query);
            values.push(pattern.clone().into());
            values.push(pattern.into());
        }

        if !filter.locations.is_empty() {
            let marks = placeholders(filter.locations.len());
            conditions.push(format!(
                "(location_city IN ({marks}) OR location_code IN ({marks}))"
            ));
            // one copy of the set per IN list
            for _ in 0..2 {
                values.extend(filter.locations.iter().cloned().map(Value::from));
            }
        }

        if !filter.ram_values.is_empty() {
            conditions.push(format!(
                "ram_gb IN ({})",
                placeholders(filter.ram_values.len())
            ));
            values.extend(filter.ram_values.iter().copied().map(Value::from));
        } else {
            if let Some(ram_min) = filter.ram_min {
                conditions.push("ram_gb >= ?".to_string());
                values.push(ram_min.into());
            }
            if let Some(ram_max) = filter.ram_max {
                conditions.push("ram_gb <= ?".to_string());
                values.push(ram_max.into());
            }
        }

        if let Some(storage_min) = filter.storage_min_gb {
            conditions.push("storage_gb >= ?".to_string());
            values.push(storage_min.into());
        }
        if let Some(storage_max) = filter.storage_max_gb {
            conditions.push("storage_gb <= ?".to_string());
            values.push(storage_max.into());
        }

        if !filter.storage_type.is_empty() {
            conditions.push("hdd LIKE ?".to_string());
            values.push(contains_pattern(&filter.storage_type).into());
        }

        if let Some(price_min) = filter.price_min {
            conditions.push("price_eur >= ?".to_string());
            values.push(price_min.into());
        }
        if let Some(price_max) = filter.price_max {
            conditions.push("price_eur <= ?".to_string());
            values.push(price_max.into());
        }

        Self {
            conditions,
            values,
            order_by: filter.sort.order_by_clause(),
            limit: filter.page.limit(),
            offset: filter.page.offset(),
        }
    }

    /// Empty when no filter is active.
    pub fn where_clause(&self) -> String {
        if self.conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", self.conditions.join(" AND "))
        }
    }

    pub fn page_sql(&self) -> String {
        format!(
            "SELECT {} FROM servers {} {} LIMIT ? OFFSET ?",
            SERVER_COLUMNS,
            self.where_clause(),
            self.order_by
        )
    }

    pub fn count_sql(&self) -> String {
        format!("SELECT COUNT(*) AS count FROM servers {}", self.where_clause())
    }

    pub fn page_statement(&self, backend: DatabaseBackend) -> Statement {
        let mut values = self.values.clone();
        values.push(Value::from(i64::try_from(self.limit).unwrap_or(i64::MAX)));
        values.push(Value::from(i64::try_from(self.offset).unwrap_or(i64::MAX)));
        Statement::from_sql_and_values(backend, self.page_sql(), values)
    }

    pub fn count_statement(&self, backend: DatabaseBackend) -> Statement {
        Statement::from_sql_and_values(backend, self.count_sql(), self.values.clone())
    }
}
