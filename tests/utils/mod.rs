pub mod game_builders;

// Re-export main utilities for use by test files
pub use game_builders::GameBuilder;
