//! Server construction

use actix_cors::Cors;
use actix_web::{dev::Server, http::header, middleware, web, App, HttpResponse, HttpServer};
use brt_api::{configure_routes, AppState};
use brt_core::config::CorsConfig;
use brt_core::AppConfig;
use std::net::TcpListener;
use tracing::info;
use tracing_actix_web::TracingLogger;

fn cors(config: &CorsConfig) -> Cors {
    let origins = config.origin_list();
    Cors::default()
        .allowed_origin_fn(move |origin, _req_head| {
            origin
                .to_str()
                .map(|o| origins.iter().any(|allowed| allowed == o))
                .unwrap_or(false)
        })
        .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}

/// Build the HTTP server on an already bound listener
///
/// The returned [`Server`] must be awaited (or spawned) to start serving.
pub fn run(listener: TcpListener, state: AppState, config: &AppConfig) -> std::io::Result<Server> {
    let state = web::Data::new(state);
    let cors_config = config.cors.clone();

    info!(
        addr = %listener.local_addr()?,
        workers = config.server.workers,
        "Starting HTTP server"
    );

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(cors(&cors_config))
            .wrap(middleware::Logger::new("%a \"%r\" %s %b %Dms"))
            .wrap(TracingLogger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_routes)
            .route(
                "/",
                web::get().to(|| async {
                    HttpResponse::Found()
                        .append_header(("Location", "/api/health"))
                        .finish()
                }),
            )
    })
    .workers(config.server.workers.max(1))
    .listen(listener)?
    .run();

    Ok(server)
}
