/*!
 * Core Module
 * The guarded container shared by every adapter, plus its errors and config
 */

pub mod config;
pub mod errors;
pub mod guarded;

// Re-export for convenience
pub use config::GuardConfig;
pub use errors::*;
pub use guarded::{Guarded, LockMode};
