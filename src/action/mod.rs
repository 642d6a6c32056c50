// tandem/src/action/mod.rs

//! Defines the `ActionBuilder` fluent API, the frozen `Action` struct, and
//! its execution logic.

pub mod builder;
pub mod definition;
pub mod execution;

// Re-export the main entry points
pub use builder::ActionBuilder;
pub use definition::Action;
