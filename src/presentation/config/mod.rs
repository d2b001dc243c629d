mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    JobSettings, LlmSettings, LoggingSettings, ServerSettings, Settings, StorageSettings,
};
