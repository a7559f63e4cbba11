pub mod core;
pub mod pool;


pub use self::core::*;
pub use self::pool::{POOL_SIZE, RegionPool};
