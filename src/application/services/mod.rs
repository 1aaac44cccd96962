mod analysis_service;
mod chat_service;
mod prompt_catalog;

pub use analysis_service::{AnalysisError, AnalysisService};
pub use chat_service::{ChatReply, ChatService, HISTORY_WINDOW};
pub use prompt_catalog::{AnalysisInput, InputShape, PromptTemplate};
