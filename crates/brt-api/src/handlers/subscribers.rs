//! Subscriber handlers

use crate::dto::{BalanceUpdateRequest, BalanceUpdateResponse};
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use brt_core::{error::AppError, traits::Repository};
use tracing::{debug, info, instrument};

/// Get a subscriber by MSISDN
///
/// GET /api/subscribers/{msisdn}
#[instrument(skip(state))]
pub async fn get_subscriber(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let msisdn = path.into_inner();
    debug!("Fetching subscriber: {}", msisdn);

    let subscriber = state
        .subscribers
        .find_by_id(&msisdn)
        .await?
        .ok_or(AppError::SubscriberNotFound(msisdn))?;

    Ok(HttpResponse::Ok().json(subscriber))
}

/// Add an amount to the subscriber balance
///
/// PATCH /api/subscribers/{msisdn}/balance
#[instrument(skip(state, req))]
pub async fn update_balance(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<BalanceUpdateRequest>,
) -> Result<HttpResponse, AppError> {
    let msisdn = path.into_inner();
    let amount = req.amount;
    debug!(msisdn = %msisdn, amount = %amount, "Processing balance update");

    let (previous_balance, subscriber) = state
        .subscribers
        .update_balance(&msisdn, amount)
        .await?;

    info!(
        msisdn = %msisdn,
        amount = %amount,
        previous_balance = %previous_balance,
        new_balance = %subscriber.balance,
        "Balance updated"
    );

    Ok(HttpResponse::Ok().json(BalanceUpdateResponse::new(
        subscriber,
        previous_balance,
        amount,
    )))
}

/// Configure subscriber routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/subscribers")
            .route("/{msisdn}", web::get().to(get_subscriber))
            .route("/{msisdn}/balance", web::patch().to(update_balance)),
    );
}
