//! # fe-layout: Field geometry for a drawn configuration
//!
//! Turns an abstract [`fe_randomizer::Configuration`] into pillar positions,
//! parking lot lines and direction arrows in playfield pixels, and decides
//! how to turn the finished diagram.

pub mod coords;
pub mod orientation;
pub mod projector;

pub use coords::*;
pub use orientation::*;
pub use projector::*;
