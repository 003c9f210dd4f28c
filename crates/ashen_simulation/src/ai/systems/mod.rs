//! AI systems (decision + escalation)

pub mod boss;
pub mod clone;
pub mod enemy;
pub mod escalation;
pub mod shockwave;

// Re-export all systems
pub use boss::*;
pub use clone::*;
pub use enemy::*;
pub use escalation::*;
pub use shockwave::*;
