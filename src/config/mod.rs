//! Project configuration (`.pocket.toml`).

pub mod settings;

pub use settings::Settings;
