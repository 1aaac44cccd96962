mod azure_chat_client;
mod sampling_policy;

pub use azure_chat_client::{assemble_conversation, parameter_rejected, AzureChatClient};
pub use sampling_policy::SamplingPolicy;
