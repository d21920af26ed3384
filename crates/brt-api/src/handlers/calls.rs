//! Call record handlers
//!
//! Ingestion and lookup of raw call events.

use crate::dto::{CallFilterParams, CallRecordRequest};
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use brt_core::{error::AppError, traits::Repository};
use tracing::{debug, info, instrument, warn};
use validator::Validate;

/// Record a call
///
/// POST /api/calls
#[instrument(skip(state, req))]
pub async fn create_call(
    state: web::Data<AppState>,
    req: web::Json<CallRecordRequest>,
) -> Result<HttpResponse, AppError> {
    req.validate().map_err(|e| {
        warn!("Call record validation failed: {}", e);
        AppError::from(e)
    })?;

    let record = req.into_inner().into_call_record().map_err(|e| {
        warn!("Call record rejected: {}", e);
        e
    })?;

    let created = state.calls.create(&record).await?;

    info!(
        id = %created.id,
        caller = %created.caller_msisdn,
        callee = %created.callee_msisdn,
        "Call record created"
    );

    Ok(HttpResponse::Created().json(created))
}

/// Get a call record by id
///
/// GET /api/calls/{id}
#[instrument(skip(state))]
pub async fn get_call(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    debug!("Fetching call record: {}", id);

    let record = state
        .calls
        .find_by_id(&id)
        .await?
        .ok_or(AppError::CallNotFound(id))?;

    Ok(HttpResponse::Ok().json(record))
}

/// List call records
///
/// GET /api/calls?msisdn=&page=&per_page=
#[instrument(skip(state, query))]
pub async fn list_calls(
    state: web::Data<AppState>,
    query: web::Query<CallFilterParams>,
) -> Result<HttpResponse, AppError> {
    query.validate().map_err(|e| {
        warn!("Invalid query parameters: {}", e);
        AppError::from(e)
    })?;

    let (records, total) = state
        .calls
        .list_by_msisdn(
            query.msisdn.as_deref(),
            query.pagination.limit(),
            query.pagination.offset(),
        )
        .await?;

    debug!(returned = records.len(), total, "Listed call records");

    Ok(HttpResponse::Ok().json(query.pagination.paginate(records, total)))
}

/// Configure call record routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/calls")
            .route("", web::get().to(list_calls))
            .route("", web::post().to(create_call))
            .route("/{id}", web::get().to(get_call)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use brt_store::InMemoryStore;
    use serde_json::{json, Value};

    fn state() -> web::Data<AppState> {
        web::Data::new(AppState::from_store(&InMemoryStore::new()))
    }

    fn call_body() -> Value {
        json!({
            "serviceType": "01",
            "callerMsisdn": "89991112233",
            "calleeMsisdn": "89992223344",
            "startTime": "2024-01-20T10:00:00Z",
            "endTime": "2024-01-20T10:05:00Z"
        })
    }

    #[actix_web::test]
    async fn test_create_then_get() {
        let app = test::init_service(App::new().app_data(state()).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/calls")
            .set_json(call_body())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Value = test::read_body_json(resp).await;
        let id = created["id"].as_str().unwrap().to_string();
        assert!(created["createdAt"].is_string());

        let req = test::TestRequest::get()
            .uri(&format!("/calls/{}", id))
            .to_request();
        let fetched: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched["callerMsisdn"], "89991112233");
        assert_eq!(fetched["serviceType"], "01");
        assert_eq!(fetched, created);
    }

    #[actix_web::test]
    async fn test_invalid_caller_is_bad_request() {
        let app = test::init_service(App::new().app_data(state()).configure(configure)).await;

        let mut body = call_body();
        body["callerMsisdn"] = json!("invalid");
        let req = test::TestRequest::post()
            .uri("/calls")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["message"].is_string());
    }

    #[actix_web::test]
    async fn test_get_unknown_call() {
        let app = test::init_service(App::new().app_data(state()).configure(configure)).await;

        let req = test::TestRequest::get().uri("/calls/missing").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["message"].as_str().unwrap().contains("not found"));
    }

    #[actix_web::test]
    async fn test_list_filters_by_msisdn() {
        let app = test::init_service(App::new().app_data(state()).configure(configure)).await;

        for caller in ["89991112233", "89995556677"] {
            let mut body = call_body();
            body["callerMsisdn"] = json!(caller);
            let req = test::TestRequest::post()
                .uri("/calls")
                .set_json(body)
                .to_request();
            test::call_service(&app, req).await;
        }

        let req = test::TestRequest::get()
            .uri("/calls?msisdn=89995556677")
            .to_request();
        let page: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(page["pagination"]["total"], 1);
        assert_eq!(page["data"][0]["callerMsisdn"], "89995556677");

        let req = test::TestRequest::get()
            .uri("/calls?msisdn=89992223344&per_page=1")
            .to_request();
        let page: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(page["pagination"]["total"], 2);
        assert_eq!(page["pagination"]["total_pages"], 2);
        assert_eq!(page["data"].as_array().unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_page_out_of_range_is_bad_request() {
        let app = test::init_service(App::new().app_data(state()).configure(configure)).await;

        let req = test::TestRequest::get()
            .uri("/calls?page=9223372036854775807&per_page=1000")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["message"].as_str().unwrap().contains("page"));

        let req = test::TestRequest::get()
            .uri("/calls?page=1000000&per_page=1000")
            .to_request();
        let page: Value = test::call_and_read_body_json(&app, req).await;
        assert!(page["data"].as_array().unwrap().is_empty());
        assert_eq!(page["pagination"]["page"], 1_000_000);
    }
}
