use dotenv::dotenv;
use log::info;
use status_api::{
    api::{self, APIState, server::ServerOptions},
    libs::{config, global::log_result, log::init_log},
    store::open_store,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    init_log(config::LOG_LEVEL.as_str())?;

    info!("{:?}", *config::ARGS);

    let store = open_store(&config::store_backend()).await;
    let state = Arc::new(APIState::new(store.clone()));

    let server = api::server::build(
        state,
        &ServerOptions {
            bind: config::HTTP_BIND.clone(),
            port: *config::HTTP_PORT,
            workers: *config::HTTP_WORKERS,
            cors_origins: config::CORS_ORIGINS.clone(),
        },
    )?;

    let handle = server.handle();
    let (stop_tx, mut stop_rx) = tokio::sync::mpsc::unbounded_channel::<()>();
    ctrlc::set_handler(move || {
        info!("Received Ctrl+C signal. Exiting...");
        let _ = stop_tx.send(());
    })?;
    tokio::spawn(async move {
        if stop_rx.recv().await.is_some() {
            handle.stop(true).await;
        }
    });

    log_result(server.await);

    store.close().await;
    info!("Application shutdown");

    Ok(())
}
