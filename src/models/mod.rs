pub mod count_config;
pub mod default_questions;
pub mod loaders;
pub mod section;
pub mod settings;

pub use count_config::CountConfig;
pub use default_questions::DEFAULT_QUESTIONS;
pub use loaders::{load_settings, save_settings};
pub use section::Section;
pub use settings::{Settings, SettingsOverride};
