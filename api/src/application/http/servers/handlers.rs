pub mod get_locations;
pub mod get_metrics;
pub mod get_server;
pub mod get_servers;
