//! AI components

pub mod brain;
pub mod cooldowns;
pub mod hazard;
pub mod phases;

// Tests (separate files with _tests suffix)
#[cfg(test)]
mod phases_tests;

// Re-export all components
pub use brain::*;
pub use cooldowns::*;
pub use hazard::*;
pub use phases::*;
