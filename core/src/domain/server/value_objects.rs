use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{entities::ServerView, sort::SortOption, units::to_storage_unit};

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PER_PAGE: u64 = 20;
pub const MAX_PER_PAGE: u64 = 100;
/// Largest offset the storage engine accepts as a bound parameter.
pub const MAX_OFFSET: u64 = i64::MAX.unsigned_abs();

/// List request as parsed from the query string, before normalization.
/// Storage bounds are in terabytes here.
#[derive(Debug, Clone, Default)]
pub struct ServerListRequest {
    pub query: String,
    pub locations: Vec<String>,
    pub ram_min: Option<i32>,
    pub ram_max: Option<i32>,
    pub ram_values: Vec<i32>,
    pub storage_min: Option<f64>,
    pub storage_max: Option<f64>,
    pub storage_type: String,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub sort: String,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u64,
    pub per_page: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl PageRequest {
    /// Clamps instead of rejecting: page floors at 1, a non-positive page size becomes the
    /// default and anything above the maximum is capped.
    pub fn new(page: Option<i64>, per_page: Option<i64>) -> Self {
        let page = match page {
            Some(page) if page >= 1 => u64::try_from(page).unwrap_or(DEFAULT_PAGE),
            _ => DEFAULT_PAGE,
        };
        let per_page = match per_page {
            Some(per_page) if per_page >= 1 => {
                u64::try_from(per_page).map_or(MAX_PER_PAGE, |n| n.min(MAX_PER_PAGE))
            }
            _ => DEFAULT_PER_PAGE,
        };

        Self { page, per_page }
    }

    pub fn limit(&self) -> u64 {
        self.per_page
    }

    /// `(page - 1) * per_page`, capped at [`MAX_OFFSET`] for pages past any real result.
    pub fn offset(&self) -> u64 {
        self.page
            .saturating_sub(1)
            .checked_mul(self.per_page)
            .map_or(MAX_OFFSET, |offset| offset.min(MAX_OFFSET))
    }

    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(self.per_page)
    }
}

/// Normalized filter criteria. Built once per request and shared by the page query, the
/// count query and the cache key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerFilter {
    pub query: String,
    pub locations: Vec<String>,
    pub ram_min: Option<i32>,
    pub ram_max: Option<i32>,
    pub ram_values: Vec<i32>,
    pub storage_min_gb: Option<i64>,
    pub storage_max_gb: Option<i64>,
    pub storage_type: String,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub sort: SortOption,
    pub page: PageRequest,
}

impl From<ServerListRequest> for ServerFilter {
    fn from(request: ServerListRequest) -> Self {
        let mut locations: Vec<String> = request
            .locations
            .iter()
            .map(|location| location.trim())
            .filter(|location| !location.is_empty())
            .map(str::to_string)
            .collect();
        locations.sort();
        locations.dedup();

        let mut ram_values = request.ram_values;
        ram_values.sort_unstable();
        ram_values.dedup();

        Self {
            query: request.query.trim().to_string(),
            locations,
            ram_min: request.ram_min,
            ram_max: request.ram_max,
            ram_values,
            storage_min_gb: request.storage_min.map(to_storage_unit),
            storage_max_gb: request.storage_max.map(to_storage_unit),
            storage_type: request.storage_type.trim().to_string(),
            price_min: request.price_min,
            price_max: request.price_max,
            sort: SortOption::parse(request.sort.trim()),
            page: PageRequest::new(request.page, request.per_page),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaginationMeta {
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
    pub total_pages: u64,
}

impl PaginationMeta {
    pub fn new(page: PageRequest, total: u64) -> Self {
        Self {
            page: page.page,
            per_page: page.per_page,
            total,
            total_pages: page.total_pages(total),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ServerList {
    pub data: Vec<ServerView>,
    pub pagination: PaginationMeta,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ServerDetail {
    pub data: ServerView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LocationList {
    pub data: Vec<String>,
}

/// Catalog-wide statistics. `total_servers` counts every record; the price bounds and
/// the location count only consider records with both a price and a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ServerMetrics {
    pub total_servers: u64,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub locations_count: u64,
    pub last_updated: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::server::sort::{SortDirection, SortField};

    #[test]
    fn test_page_request_defaults() {
        let page = PageRequest::new(None, None);
        assert_eq!(page.page, 1);
        assert_eq!(page.per_page, 20);
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn test_page_request_clamps() {
        assert_eq!(PageRequest::new(Some(0), Some(0)), PageRequest::new(None, None));
        assert_eq!(PageRequest::new(Some(-3), Some(-1)).page, 1);
        assert_eq!(PageRequest::new(Some(1), Some(500)).per_page, 100);
        assert_eq!(PageRequest::new(Some(1), Some(1)).per_page, 1);
    }

    #[test]
    fn test_offset_is_page_minus_one_times_size() {
        for page in 1..=10_i64 {
            for per_page in [1_i64, 7, 20, 100] {
                let request = PageRequest::new(Some(page), Some(per_page));
                assert_eq!(request.offset(), ((page - 1) * per_page) as u64);
                assert_eq!(request.limit(), per_page as u64);
            }
        }
    }

    #[test]
    fn test_offset_of_huge_page_is_capped() {
        let page = PageRequest::new(Some(i64::MAX), Some(20));
        assert_eq!(page.page, u64::try_from(i64::MAX).unwrap());
        assert_eq!(page.offset(), MAX_OFFSET);
        assert_eq!(i64::try_from(page.offset()).unwrap(), i64::MAX);

        let page = PageRequest::new(Some(i64::MAX / 20), Some(20));
        assert!(page.offset() <= MAX_OFFSET);
    }

    #[test]
    fn test_total_pages() {
        let page = PageRequest::new(Some(1), Some(20));
        assert_eq!(page.total_pages(0), 0);
        assert_eq!(page.total_pages(1), 1);
        assert_eq!(page.total_pages(20), 1);
        assert_eq!(page.total_pages(21), 2);
        assert_eq!(page.total_pages(100), 5);
    }

    #[test]
    fn test_filter_normalization() {
        let filter = ServerFilter::from(ServerListRequest {
            query: "  dell ".to_string(),
            locations: vec![
                "Amsterdam".to_string(),
                " ".to_string(),
                "Berlin".to_string(),
                "Amsterdam".to_string(),
            ],
            ram_values: vec![64, 16, 64],
            storage_min: Some(1.0),
            storage_max: Some(2.5),
            sort: "price.desc".to_string(),
            page: Some(2),
            per_page: Some(250),
            ..Default::default()
        });

        assert_eq!(filter.query, "dell");
        assert_eq!(filter.locations, vec!["Amsterdam", "Berlin"]);
        assert_eq!(filter.ram_values, vec![16, 64]);
        assert_eq!(filter.storage_min_gb, Some(1024));
        assert_eq!(filter.storage_max_gb, Some(2560));
        assert_eq!(filter.sort.field, SortField::Price);
        assert_eq!(filter.sort.direction, SortDirection::Desc);
        assert_eq!(filter.page.page, 2);
        assert_eq!(filter.page.per_page, 100);
    }

    #[test]
    fn test_pagination_meta() {
        let meta = PaginationMeta::new(PageRequest::new(Some(3), Some(2)), 5);
        assert_eq!(meta.page, 3);
        assert_eq!(meta.per_page, 2);
        assert_eq!(meta.total, 5);
        assert_eq!(meta.total_pages, 3);
    }
}
