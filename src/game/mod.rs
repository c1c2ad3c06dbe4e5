pub mod error;
pub mod moves;
pub mod position;
pub mod session;

// Re-export important types
pub use error::*;
pub use moves::*;
pub use position::*;
pub use session::*;
