pub mod cache_key;
pub mod entities;
pub mod ports;
pub mod services;
pub mod sort;
pub mod units;
pub mod value_objects;

pub use entities::{Server, ServerView};
pub use ports::{ServerRepository, ServerService};
