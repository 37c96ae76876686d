pub mod appearance;
pub mod config;
mod json;
pub mod localization;

pub use appearance::AppearanceCatalog;
pub use config::{ConfigError, ConfigManager};
pub use localization::{LocalizationManager, TranslationTable};
