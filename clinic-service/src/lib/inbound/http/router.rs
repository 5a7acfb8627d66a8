use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::animals::create_animal::create_animal;
use super::handlers::animals::delete_animal::delete_animal;
use super::handlers::animals::get_animal::get_animal;
use super::handlers::animals::list_animals::list_animals;
use super::handlers::animals::update_animal::update_animal;
use super::handlers::treatments::create_treatment::create_treatment;
use super::handlers::treatments::delete_treatment::delete_treatment;
use super::handlers::treatments::get_treatment::get_treatment;
use super::handlers::treatments::list_treatments::list_treatments;
use super::handlers::treatments::update_treatment::update_treatment;
use super::handlers::vets::delete_vet::delete_vet;
use super::handlers::vets::login::login;
use super::handlers::vets::register_vet::register_vet;
use super::handlers::vets::update_vet::update_vet;
use super::middleware::authenticate as auth_middleware;
use crate::domain::animal::ports::AnimalServicePort;
use crate::domain::treatment::ports::TreatmentServicePort;
use crate::domain::vet::ports::VetServicePort;

#[derive(Clone)]
pub struct AppState {
    pub vet_service: Arc<dyn VetServicePort>,
    pub animal_service: Arc<dyn AnimalServicePort>,
    pub treatment_service: Arc<dyn TreatmentServicePort>,
    pub authenticator: Arc<Authenticator>,
}

pub fn create_router(
    vet_service: Arc<dyn VetServicePort>,
    animal_service: Arc<dyn AnimalServicePort>,
    treatment_service: Arc<dyn TreatmentServicePort>,
    authenticator: Arc<Authenticator>,
) -> Router {
    let state = AppState {
        vet_service,
        animal_service,
        treatment_service,
        authenticator,
    };

    let public_routes = Router::new()
        .route("/vets/register", post(register_vet))
        .route("/vets/login", post(login));

    let protected_routes = Router::new()
        .route("/vets/:vet_id", put(update_vet).delete(delete_vet))
        .route("/animals", get(list_animals).post(create_animal))
        .route("/animals/", get(list_animals).post(create_animal))
        .route(
            "/animals/:animal_id",
            get(get_animal).put(update_animal).delete(delete_animal),
        )
        .route(
            "/animals/:animal_id/treatments",
            get(list_treatments).post(create_treatment),
        )
        .route(
            "/animals/:animal_id/treatments/",
            get(list_treatments).post(create_treatment),
        )
        .route(
            "/treatments/:treatment_id",
            get(get_treatment)
                .put(update_treatment)
                .delete(delete_treatment),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
