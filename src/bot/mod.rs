pub mod basic_strategy;
pub mod types;

pub use basic_strategy::BasicStrategy;
pub use types::Strategy;
