use std::sync::Arc;

use actix_web::{App, HttpServer, middleware, web};

use formbox::config::AppConfig;
use formbox::handlers;
use formbox::services::identity::DevTokens;
use formbox::services::mail::LogMailer;
use formbox::services::uploads::MemoryFileStore;
use formbox::state::AppState;
use formbox::store::MemoryStore;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env();

    // Identity table for this snapshot: opaque bearer tokens resolved
    // against DEV_TOKENS ("token=user,token2=user2")
    let identity = match std::env::var("DEV_TOKENS") {
        Ok(raw) => DevTokens::from_env(&raw),
        Err(_) => DevTokens::new(),
    };
    if identity.is_empty() {
        log::warn!("No usable DEV_TOKENS entries — every owner route will reject");
    }

    let state = AppState {
        config: config.clone(),
        store: Arc::new(MemoryStore::new()),
        identity: Arc::new(identity),
        mailer: Arc::new(LogMailer::new()),
        uploads: Arc::new(MemoryFileStore::new()),
    };

    log::info!("Starting server at http://{}", config.bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure)
    })
    .bind(config.bind_addr.as_str())?
    .run()
    .await
}
