//! Wire domain services onto the HTTP state.

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;
use tracing::warn;

use calculator::domain::{CalculationCommandService, CalculationQueryService, UserService};
use calculator::inbound::http::state::HttpState;
use calculator::outbound::persistence::{
    DbPool, DieselCalculationRepository, DieselUserRepository,
};

fn database_state(pool: &DbPool) -> HttpState {
    let clock = Arc::new(DefaultClock);
    let users = Arc::new(UserService::new(
        Arc::new(DieselUserRepository::new(pool.clone())),
        clock.clone(),
    ));
    let calculations = Arc::new(DieselCalculationRepository::new(pool.clone()));
    HttpState {
        users: users.clone(),
        users_query: users,
        calculations: Arc::new(CalculationCommandService::new(
            calculations.clone(),
            clock,
        )),
        calculations_query: Arc::new(CalculationQueryService::new(calculations)),
    }
}

/// Services over PostgreSQL when a pool exists, fixtures otherwise.
pub(crate) fn build_http_state(pool: Option<&DbPool>) -> web::Data<HttpState> {
    let state = match pool {
        Some(pool) => database_state(pool),
        None => {
            warn!("no database configured; requests are served by non-persistent fixtures");
            HttpState::default()
        }
    };
    web::Data::new(state)
}
