// Recase Transform Module
// Pure, stateless text conversions selected by `Selector`

pub mod case;
pub mod engine;
pub mod morse;
pub mod style;

pub use engine::{transform, transform_named};
