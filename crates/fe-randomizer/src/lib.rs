//! # fe-randomizer: Field draws for the Future Engineers challenges
//!
//! Produces rule-constrained random field configurations from coin tosses,
//! die rolls and a shuffled card deck.
//!
//! ## Architecture
//!
//! ```text
//! FieldRandomizer
//!     │
//!     ├── RandomSource (coin, die, direction, deck shuffle)
//!     ├── select_section (two tosses → section)
//!     └── CardTable (36 pillar cards)
//!           │
//!           v
//!     Configuration / OpenConfiguration
//! ```

pub mod cards;
pub mod config;
pub mod engine;
pub mod obstacle;
pub mod open;
pub mod random;
pub mod selector;

pub use cards::*;
pub use config::*;
pub use engine::*;
pub use obstacle::*;
pub use open::*;
pub use random::*;
pub use selector::*;
