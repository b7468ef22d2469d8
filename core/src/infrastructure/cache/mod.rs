pub mod memory;
pub mod noop;
pub mod store;

pub use memory::InMemoryCacheRepository;
pub use noop::NoOpCacheRepository;
pub use store::CacheStore;
