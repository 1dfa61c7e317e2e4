//! # SMS Webhook
//!
//! HTTP adapter for the SMS provider. Inbound messages arrive as form posts and
//! are answered with TwiML.
//!
//! ## Endpoints
//!
//! - `POST /` and `POST /sms` - inbound message (`From`, `Body`), replies with TwiML
//! - `GET /health` - liveness probe

pub mod twiml;

pub use twiml::MessagingResponse;

use crate::domain::CustomerId;
use crate::lifecycle::FrontDesk;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Sent when the actors cannot answer.
const APOLOGY: &str = "Sorry, something went wrong on our end. Please try again in a moment.";

/// Form fields of an inbound SMS. Missing fields read as empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InboundSms {
    #[serde(rename = "From", default)]
    pub from: String,
    #[serde(rename = "Body", default)]
    pub body: String,
}

#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
}

/// Builds the webhook router.
pub fn router(desk: FrontDesk) -> Router {
    Router::new()
        .route("/", post(inbound_sms))
        .route("/sms", post(inbound_sms))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(desk)
}

/// Serves the webhook on `addr` until Ctrl-C.
pub async fn serve(addr: SocketAddr, desk: FrontDesk) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Webhook listening");
    axum::serve(listener, router(desk))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// POST / and POST /sms
async fn inbound_sms(State(desk): State<FrontDesk>, Form(sms): Form<InboundSms>) -> Response {
    let from = CustomerId::from(sms.from);
    match desk.handle_inbound(from.clone(), &sms.body).await {
        Ok(reply) => MessagingResponse::new(reply.to_string()).into_response(),
        Err(e) => {
            error!(customer_id = %from, error = %e, "Failed to handle inbound message");
            (StatusCode::INTERNAL_SERVER_ERROR, MessagingResponse::new(APOLOGY)).into_response()
        }
    }
}

/// GET /health
async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}
