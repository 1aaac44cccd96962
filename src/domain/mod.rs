mod document;
mod message;
mod message_role;
mod session;

pub use document::{Document, DocumentId, DocumentKind};
pub use message::ChatMessage;
pub use message_role::MessageRole;
pub use session::Session;
