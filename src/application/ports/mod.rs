mod chat_client;
mod session_store;
mod text_extractor;

pub use chat_client::{ChatClient, ChatClientError};
pub use session_store::SessionStore;
pub use text_extractor::{ExtractionError, TextExtractor};
