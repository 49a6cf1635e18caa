use actix_web::{App, HttpServer, middleware::Logger, web};
use anyhow::Result;
use fxsync::api::{self, AppState};
use fxsync::config::Config;
use fxsync::store;
use fxsync::upstream::RatesClient;
use log::info;

#[actix_web::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = Config::from_env()?;
    let pool = store::connect(&cfg.database_url, cfg.db_max_connections).await?;
    let state = AppState {
        pool,
        client: RatesClient::from_config(&cfg),
    };

    info!(
        "Serving {} rates from {} on {}",
        cfg.target_currency, cfg.api_base_url, cfg.listen_addr
    );

    HttpServer::new(move || {
        App::new()
            .wrap(api::cors())
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(api::configure)
    })
    .bind(cfg.listen_addr)?
    .run()
    .await?;

    Ok(())
}
