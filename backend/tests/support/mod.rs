//! Shared helpers for the HTTP integration tests.
//!
//! The app is assembled exactly as the server does it, with the real domain
//! services running over [`in_memory::InMemoryStore`].

pub mod in_memory;

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use actix_http::Request;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use serde_json::{Value, json};

use calculator::Trace;
use calculator::domain::{CalculationCommandService, CalculationQueryService, UserService};
use calculator::inbound::http::configure;
use calculator::inbound::http::health::{HealthState, live, ready};
use calculator::inbound::http::state::HttpState;

use in_memory::InMemoryStore;

/// Clock advancing one second per reading so ordering by time is stable.
#[derive(Default)]
pub struct SteppingClock {
    seconds: AtomicI64,
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let offset = self.seconds.fetch_add(1, Ordering::SeqCst);
        Utc.timestamp_opt(1_700_000_000 + offset, 0)
            .single()
            .unwrap_or_default()
    }
}

pub fn http_state(store: Arc<InMemoryStore>) -> HttpState {
    let clock: Arc<dyn Clock> = Arc::new(SteppingClock::default());
    let users = Arc::new(UserService::new(store.clone(), clock.clone()));
    HttpState {
        users: users.clone(),
        users_query: users,
        calculations: Arc::new(CalculationCommandService::new(store.clone(), clock)),
        calculations_query: Arc::new(CalculationQueryService::new(store)),
    }
}

pub async fn init_app(
    store: Arc<InMemoryStore>,
) -> impl Service<Request, Response = ServiceResponse, Error = actix_web::Error> {
    let health = web::Data::new(HealthState::new());
    health.mark_ready();
    test::init_service(
        App::new()
            .app_data(health)
            .app_data(web::Data::new(http_state(store)))
            .wrap(Trace)
            .configure(configure)
            .service(ready)
            .service(live),
    )
    .await
}

/// Send a request and decode the JSON body, or `Null` when there is none.
pub async fn send<S>(app: &S, request: test::TestRequest) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let response = test::call_service(app, request.to_request()).await;
    let status = response.status();
    let body = test::read_body(response).await;
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).expect("JSON response body")
    };
    (status, json)
}

/// Register a user and return its id.
pub async fn register<S>(app: &S, username: &str) -> String
where
    S: Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let (status, body) = send(
        app,
        test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(json!({"username": username, "email": format!("{username}@example.com")})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "register failed: {body}");
    body["id"].as_str().expect("user id").to_owned()
}
