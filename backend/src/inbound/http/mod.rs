//! HTTP inbound adapter exposing REST endpoints.

pub mod arithmetic;
pub mod calculation_schemas;
pub mod calculations;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
pub mod users;
pub mod validation;

use actix_web::web;

pub use error::{ApiResult, json_config};

/// Register every API route and the JSON error handler.
///
/// Health endpoints are left to the caller since they need their own state.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use calculator::inbound::http::{configure, state::HttpState};
///
/// let app = App::new()
///     .app_data(web::Data::new(HttpState::default()))
///     .configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(
            web::scope("/api/v1")
                .service(calculations::create_calculation)
                .service(calculations::get_calculation)
                .service(calculations::update_calculation)
                .service(calculations::delete_calculation)
                .service(users::register_user)
                .service(users::list_user_calculations)
                .service(users::get_user)
                .service(users::update_user)
                .service(users::delete_user),
        )
        .service(arithmetic::add)
        .service(arithmetic::subtract)
        .service(arithmetic::multiply)
        .service(arithmetic::divide);
}
