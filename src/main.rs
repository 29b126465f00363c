use encyclopedia::logger::Logger;
use encyclopedia::{app, AppState, Config, FileEntryStore, WikiError};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), WikiError> {
    if let Err(e) = Logger::init() {
        eprintln!("Logger already installed: {}", e);
    }

    let config = Config::from_env();
    let store = FileEntryStore::open(&config.entries_dir)?;
    log::info!("Serving entries from {:?}", store.base_dir());

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr).await?;
    log::info!("Encyclopedia listening on http://{}", addr);
    axum::serve(listener, app(AppState::new(store))).await.map_err(WikiError::from)
}
