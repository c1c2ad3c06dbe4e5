pub mod client;

// Re-export important types
pub use client::*;
