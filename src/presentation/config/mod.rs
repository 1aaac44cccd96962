mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{AzureOpenAiSettings, ServerSettings, SessionSettings, Settings};
