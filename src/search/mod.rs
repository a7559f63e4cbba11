pub mod compare;
pub mod core;

#[cfg(test)]
mod tests;

pub use self::compare::*;
pub use self::core::*;
