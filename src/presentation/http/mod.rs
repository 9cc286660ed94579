pub mod endpoints;
pub mod mappers;
pub mod requests;
pub mod responses;

use std::sync::Arc;

use poem::Route;
use poem_openapi::OpenApiService;

use crate::{
    application::campus_app::CampusApp,
    presentation::http::endpoints::{
        birthdays::BirthdaysEndpoints, groups::GroupsEndpoints, health::HealthEndpoints,
        root::ApiState, teachers::TeachersEndpoints, users::UsersEndpoints,
    },
};

pub type CampusApi = (
    HealthEndpoints,
    GroupsEndpoints,
    UsersEndpoints,
    TeachersEndpoints,
    BirthdaysEndpoints,
);

pub fn api_service(campus: Arc<CampusApp>, server_url: &str) -> OpenApiService<CampusApi, ()> {
    let state = Arc::new(ApiState { campus });
    let endpoints = (
        HealthEndpoints,
        GroupsEndpoints::new(state.clone()),
        UsersEndpoints::new(state.clone()),
        TeachersEndpoints::new(state.clone()),
        BirthdaysEndpoints::new(state),
    );
    OpenApiService::new(endpoints, "Campus API", env!("CARGO_PKG_VERSION"))
        .server(format!("{server_url}/api"))
}

/// Full route tree: the API under `/api` and the Swagger UI at `/`.
pub fn routes(campus: Arc<CampusApp>, server_url: &str) -> Route {
    let api_service = api_service(campus, server_url);
    let ui = api_service.swagger_ui();
    Route::new().nest("/api", api_service).nest("/", ui)
}
