use actix_cors::Cors;
use actix_web::{HttpResponse, web};
use chrono::Utc;
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::error::{AppError, AppResult};
use crate::sync;
use crate::upstream::RatesClient;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub client: RatesClient,
}

#[derive(Deserialize)]
pub struct FetchParams {
    period: String,
}

/// Any origin, method and header, with credentials.
pub fn cors() -> Cors {
    Cors::permissive()
}

/// Route table.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::QueryConfig::default()
            .error_handler(|_, _| actix_web::Error::from(AppError::InvalidPeriod)),
    )
    .route("/fetch_data", web::get().to(fetch_data))
    .route("/exchange_rates", web::get().to(exchange_rates));
}

async fn fetch_data(
    state: web::Data<AppState>,
    params: web::Query<FetchParams>,
) -> AppResult<HttpResponse> {
    let mut conn = state.pool.acquire().await?;
    let today = Utc::now().date_naive();
    let ack = sync::fetch_and_store(&mut conn, &state.client, &params.period, today).await?;

    Ok(HttpResponse::Ok().json(ack))
}

async fn exchange_rates(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let mut conn = state.pool.acquire().await?;
    let rates = sync::list_rates(&mut conn).await?;

    Ok(HttpResponse::Ok().json(rates))
}
