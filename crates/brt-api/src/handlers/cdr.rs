//! CDR API handlers
//!
//! CRUD over call detail records. Identifiers are assigned by the service
//! on create; replace keeps the original creation time.

use crate::dto::{CdrFilterParams, CdrRecordRequest};
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use brt_core::{error::AppError, models::CdrRecord, traits::Repository};
use tracing::{debug, info, instrument, warn};
use validator::Validate;

fn validate_request(req: &CdrRecordRequest) -> Result<(), AppError> {
    req.validate().map_err(|e| {
        warn!("CDR validation failed: {}", e);
        AppError::from(e)
    })
}

/// List CDRs with an optional caller filter
///
/// # Examples
///
/// ```text
/// GET /api/cdr?caller=89991112233&page=1&per_page=50
/// ```
#[instrument(skip(state, query))]
pub async fn list_cdrs(
    state: web::Data<AppState>,
    query: web::Query<CdrFilterParams>,
) -> Result<HttpResponse, AppError> {
    query.validate().map_err(|e| {
        warn!("Invalid query parameters: {}", e);
        AppError::from(e)
    })?;

    debug!(
        "Listing CDRs: page={}, per_page={}, caller={:?}",
        query.pagination.page, query.pagination.per_page, query.caller
    );

    let (cdrs, total) = state
        .cdrs
        .list_filtered(
            query.caller.as_deref(),
            query.pagination.limit(),
            query.pagination.offset(),
        )
        .await?;

    info!("Retrieved {} CDRs out of {} total", cdrs.len(), total);

    Ok(HttpResponse::Ok().json(query.pagination.paginate(cdrs, total)))
}

/// Create a CDR
///
/// # Errors
///
/// Returns 400 if a required field is missing or malformed.
#[instrument(skip(state, req))]
pub async fn create_cdr(
    state: web::Data<AppState>,
    req: web::Json<CdrRecordRequest>,
) -> Result<HttpResponse, AppError> {
    validate_request(&req)?;

    if let Some(client_id) = &req.id {
        debug!(client_id = %client_id, "Ignoring client supplied CDR id");
    }

    let record = req.into_inner().into_cdr_record(CdrRecord::generate_id())?;
    let created = state.cdrs.create(&record).await?;

    info!(id = %created.id, caller = %created.caller, "CDR created");

    Ok(HttpResponse::Created().json(created))
}

/// Get a single CDR by id
///
/// ```text
/// GET /api/cdr/12345
/// ```
#[instrument(skip(state))]
pub async fn get_cdr(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    debug!("Fetching CDR with id: {}", id);

    let cdr = state
        .cdrs
        .find_by_id(&id)
        .await?
        .ok_or(AppError::CdrNotFound(id))?;

    Ok(HttpResponse::Ok().json(cdr))
}

/// Replace a CDR
///
/// # Errors
///
/// Returns 404 if the CDR does not exist, 400 if the body is invalid or
/// names a different id than the path.
#[instrument(skip(state, req))]
pub async fn update_cdr(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<CdrRecordRequest>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    validate_request(&req)?;

    if let Some(body_id) = req.id.as_deref() {
        if body_id != id {
            warn!(path_id = %id, body_id = %body_id, "CDR id mismatch");
            return Err(AppError::InvalidInput(format!(
                "Body id '{}' does not match path id '{}'",
                body_id, id
            )));
        }
    }

    let record = req.into_inner().into_cdr_record(id)?;
    let updated = state.cdrs.update(&record).await?;

    info!(id = %updated.id, "CDR updated");

    Ok(HttpResponse::Ok().json(updated))
}

/// Delete a CDR
///
/// Returns 204 on success, 404 if nothing was removed.
#[instrument(skip(state))]
pub async fn delete_cdr(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    if !state.cdrs.delete(&id).await? {
        return Err(AppError::CdrNotFound(id));
    }

    info!(id = %id, "CDR deleted");

    Ok(HttpResponse::NoContent().finish())
}

/// Configure CDR routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/cdr")
            .route("", web::get().to(list_cdrs))
            .route("", web::post().to(create_cdr))
            .route("/{id}", web::get().to(get_cdr))
            .route("/{id}", web::put().to(update_cdr))
            .route("/{id}", web::delete().to(delete_cdr)),
    );
}
