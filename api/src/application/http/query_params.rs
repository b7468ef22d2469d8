use std::str::FromStr;

use serverlist_core::domain::server::value_objects::ServerListRequest;

/// Query parameters accepted by the server listing.
///
/// Parsing never fails: unknown keys are skipped and values that do not parse leave the
/// corresponding filter unset. Scalar keys keep their last occurrence while `location` and
/// `ram_values` accumulate across repeats and comma separated lists.
#[derive(Debug, Clone, Default)]
pub struct ServerQueryParams(pub ServerListRequest);

fn parse_scalar<T: FromStr>(value: &str) -> Option<T> {
    value.trim().parse::<T>().ok()
}

/// Decimal values must be finite, `NaN` and infinities are dropped.
fn parse_decimal(value: &str) -> Option<f64> {
    parse_scalar::<f64>(value).filter(|v| v.is_finite())
}

fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').map(str::trim).filter(|part| !part.is_empty())
}

impl ServerQueryParams {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let mut request = ServerListRequest::default();

        for (key, value) in pairs {
            match key.as_str() {
                "q" => request.query = value.trim().to_string(),
                "location" => request
                    .locations
                    .extend(split_list(value).map(str::to_string)),
                "ram_min" => request.ram_min = parse_scalar(value),
                "ram_max" => request.ram_max = parse_scalar(value),
                "ram_values" => request
                    .ram_values
                    .extend(split_list(value).filter_map(parse_scalar::<i32>)),
                "storage_min" => request.storage_min = parse_decimal(value),
                "storage_max" => request.storage_max = parse_decimal(value),
                "hdd" => request.storage_type = value.trim().to_string(),
                "price_min" => request.price_min = parse_decimal(value),
                "price_max" => request.price_max = parse_decimal(value),
                "sort" => request.sort = value.trim().to_string(),
                "page" => request.page = parse_scalar(value),
                "per_page" => request.per_page = parse_scalar(value),
                _ => {}
            }
        }

        Self(request)
    }

    pub fn from_query_string(query: &str) -> Self {
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query).unwrap_or_default();
        Self::from_pairs(&pairs)
    }

    pub fn into_inner(self) -> ServerListRequest {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query() {
        let params = ServerQueryParams::from_query_string("").into_inner();
        assert!(params.query.is_empty());
        assert!(params.locations.is_empty());
        assert_eq!(params.page, None);
        assert_eq!(params.per_page, None);
    }

    #[test]
    fn test_full_query() {
        let params = ServerQueryParams::from_query_string(
            "q=xeon&location=Amsterdam&ram_min=16&ram_max=64&storage_min=0.5&storage_max=4\
             &hdd=SSD&price_min=10&price_max=99.9&sort=price.desc&page=2&per_page=50",
        )
        .into_inner();

        assert_eq!(params.query, "xeon");
        assert_eq!(params.locations, vec!["Amsterdam"]);
        assert_eq!(params.ram_min, Some(16));
        assert_eq!(params.ram_max, Some(64));
        assert_eq!(params.storage_min, Some(0.5));
        assert_eq!(params.storage_max, Some(4.0));
        assert_eq!(params.storage_type, "SSD");
        assert_eq!(params.price_min, Some(10.0));
        assert_eq!(params.price_max, Some(99.9));
        assert_eq!(params.sort, "price.desc");
        assert_eq!(params.page, Some(2));
        assert_eq!(params.per_page, Some(50));
    }

    #[test]
    fn test_locations_accept_csv_and_repeats() {
        let params = ServerQueryParams::from_query_string(
            "location=Amsterdam,%20Frankfurt&location=AMS-01&location=,",
        )
        .into_inner();
        assert_eq!(params.locations, vec!["Amsterdam", "Frankfurt", "AMS-01"]);
    }

    #[test]
    fn test_ram_values_skip_invalid_entries() {
        let params = ServerQueryParams::from_query_string("ram_values=16,abc,32&ram_values=64")
            .into_inner();
        assert_eq!(params.ram_values, vec![16, 32, 64]);
    }

    #[test]
    fn test_invalid_values_are_ignored() {
        let params = ServerQueryParams::from_query_string(
            "ram_min=lots&price_max=NaN&storage_min=inf&page=first&per_page=&unknown=1",
        )
        .into_inner();
        assert_eq!(params.ram_min, None);
        assert_eq!(params.price_max, None);
        assert_eq!(params.storage_min, None);
        assert_eq!(params.page, None);
        assert_eq!(params.per_page, None);
    }

    #[test]
    fn test_last_scalar_wins() {
        let params = ServerQueryParams::from_query_string("page=2&page=5").into_inner();
        assert_eq!(params.page, Some(5));
    }
}
