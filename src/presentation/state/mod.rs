mod app_state;

pub use app_state::{AppState, TranslationDefaults};
