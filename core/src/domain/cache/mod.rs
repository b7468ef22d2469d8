pub mod ports;

pub use ports::CacheRepository;
