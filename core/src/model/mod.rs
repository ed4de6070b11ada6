//! Core data model for wheel generation
//!
//! This module provides the types every generator operates on:
//! - **pool**: the deduplicated, ascending number pool a wheel draws from
//! - **ticket**: one playable K-sized combination with intersection helpers
//! - **guarantee**: `(guaranteed, must_match)` coverage guarantees and their
//!   `"m-if-t"` notation
//! - **config**: strategy selection, resource ceilings, and the game shape
//! - **result**: the uniform `WheelResult` returned by every strategy
//! - **error**: the validation / resource-limit error taxonomy
//!
//! # Example
//!
//! ```rust
//! use wheelgen_core::model::*;
//! use wheelgen_core::engine::generate_wheel;
//!
//! let shape = GameShape { game_size: 2, total_numbers: 10 };
//! let result = generate_wheel(&[1, 2, 3, 4], shape, &WheelConfig::full()).unwrap();
//!
//! assert_eq!(result.ticket_count, 6);
//! assert_eq!(result.full_wheel_count, 6);
//! assert_eq!(result.score, 100);
//! ```

mod config;
mod error;
mod guarantee;
mod pool;
mod result;
mod ticket;

// Re-export all public items for convenient access
pub use config::{GameShape, GuaranteeLevel, Limits, WheelConfig, WheelType};
pub use error::{DesignError, DesignResult};
pub use guarantee::GuaranteeSpec;
pub use pool::Pool;
pub use result::{CoverageResult, WheelResult};
pub use ticket::Ticket;
