// Recase Core Library
// Text case conversions, Morse code and text statistics

pub mod morse;
pub mod selector;
pub mod stats;
pub mod transform;
mod whitespace;

#[cfg(feature = "export")]
pub mod export;

#[cfg(feature = "settings")]
pub mod settings;

pub use selector::Selector;
pub use stats::{compute_stats, TextStats};
pub use transform::{transform, transform_named};

#[cfg(feature = "settings")]
pub use settings::{Settings, SettingsError};

#[cfg(feature = "export")]
pub use export::save_text_atomic;
