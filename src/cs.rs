pub mod error;
pub mod hashing;

// Re-export all modules
pub use hashing::*;
