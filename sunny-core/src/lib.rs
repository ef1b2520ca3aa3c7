//! Core library for the `sunny` CLI.
//!
//! This crate defines:
//! - Configuration handling and the first-run bootstrap
//! - Theme documents with fallback-protected accessors
//! - Threshold classification and the ASCII glyph catalog
//! - The presentation facade composing the three
//! - The OpenWeather provider client
//!
//! It is used by `sunny-cli`, but can also be reused by other binaries.

pub mod bootstrap;
pub mod classify;
pub mod config;
pub mod glyphs;
pub mod model;
pub mod presentation;
pub mod provider;
pub mod theme;

pub use classify::{Bucket, humidity_bucket, temperature_bucket};
pub use config::{Config, ConfigError};
pub use model::{Condition, Coordinates, ForecastEntry, Units, WeatherSnapshot};
pub use presentation::Presentation;
pub use provider::{WeatherProvider, provider_from_config};
pub use theme::{BoxStyle, DEFAULT_THEME, PanelStyle, Theme};
