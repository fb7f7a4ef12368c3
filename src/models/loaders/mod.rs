pub mod settings_loader;

pub use settings_loader::{load_settings, save_settings};
