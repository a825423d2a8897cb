//! fe-core: Shared types for the Future Engineers field randomizer
//!
//! This crate provides the vocabulary used across all fe crates: the four
//! track sections, pillar slots and colours, driving direction, coin tosses,
//! pixel geometry and the common error type.

mod error;
mod field;
mod geometry;

pub use error::*;
pub use field::*;
pub use geometry::*;
