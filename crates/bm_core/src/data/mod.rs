pub mod name_pool;

pub use name_pool::NamePool;
