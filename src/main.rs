use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use paralex::application::ports::ChatClient;
use paralex::application::services::{AnalysisService, ChatService};
use paralex::infrastructure::extraction::CompositeExtractor;
use paralex::infrastructure::llm::AzureChatClient;
use paralex::infrastructure::observability::{init_tracing, TracingConfig};
use paralex::infrastructure::session::{spawn_session_sweeper, InMemorySessionStore};
use paralex::presentation::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    init_tracing(TracingConfig::default(), settings.server.port);

    if !settings.azure_openai.is_configured() {
        tracing::warn!(
            "Azure OpenAI is not fully configured; set AZURE_OPENAI_ENDPOINT, \
             AZURE_OPENAI_DEPLOYMENT_NAME, and AZURE_OPENAI_API_KEY"
        );
    }

    let extractor = Arc::new(CompositeExtractor::with_default_adapters());
    let chat_client = Arc::new(AzureChatClient::new(settings.azure_openai.clone())?);
    let session_store = Arc::new(InMemorySessionStore::new(settings.session.max_age_days));
    spawn_session_sweeper(Arc::clone(&session_store));

    let analysis_service = Arc::new(AnalysisService::new(
        extractor,
        Arc::clone(&chat_client) as Arc<dyn ChatClient>,
    ));
    let chat_service = Arc::new(ChatService::new(chat_client, session_store));

    let state = AppState {
        analysis_service,
        chat_service,
        settings: settings.clone(),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
