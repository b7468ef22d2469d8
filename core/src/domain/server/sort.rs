use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Sortable server fields. Anything outside this list falls back to [`SortField::Id`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    #[default]
    Id,
    Model,
    Cpu,
    Ram,
    Storage,
    Location,
    Price,
    CreatedAt,
}

impl SortField {
    /// Accepts the public field names as well as the underlying column names.
    pub fn parse(field: &str) -> Option<Self> {
        match field {
            "id" => Some(Self::Id),
            "model" => Some(Self::Model),
            "cpu" => Some(Self::Cpu),
            "ram" | "ram_gb" => Some(Self::Ram),
            "storage" | "storage_gb" => Some(Self::Storage),
            "location" | "location_city" => Some(Self::Location),
            "price" | "price_eur" => Some(Self::Price),
            "created_at" => Some(Self::CreatedAt),
            _ => None,
        }
    }

    pub fn column(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Model => "model",
            Self::Cpu => "cpu",
            Self::Ram => "ram_gb",
            Self::Storage => "storage_gb",
            Self::Location => "location_city",
            Self::Price => "price_eur",
            Self::CreatedAt => "created_at",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct SortOption {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortOption {
    /// Parses a `field.asc` / `field.desc` token.
    ///
    /// Only those two exact suffixes split the token; a token without one is taken as a bare
    /// field name sorted ascending. Unknown fields degrade to `id`, so this never fails.
    pub fn parse(token: &str) -> Self {
        if token.is_empty() {
            return Self::default();
        }

        let (field, direction) = match token.strip_suffix(".asc") {
            Some(field) if !field.is_empty() => (field, SortDirection::Asc),
            _ => match token.strip_suffix(".desc") {
                Some(field) if !field.is_empty() => (field, SortDirection::Desc),
                _ => (token, SortDirection::Asc),
            },
        };

        Self {
            field: SortField::parse(field).unwrap_or_default(),
            direction,
        }
    }

    /// Non-id sorts break ties on `id` so consecutive pages never overlap.
    pub fn order_by_clause(&self) -> String {
        match self.field {
            SortField::Id => format!("ORDER BY id {}", self.direction.as_sql()),
            field => format!(
                "ORDER BY {} {}, id ASC",
                field.column(),
                self.direction.as_sql()
            ),
        }
    }
}
