use actix_web::{web, HttpResponse};
use rand::Rng;
use serde::Deserialize;
use serde_json::json;

use crate::errors::AppError;
use crate::models::collaboration::{Collaboration, ProcessOutcome, Registry, Status};
use crate::notify::Mailer;
use crate::validate;

/// Contact-form payload. `name` is accepted as an alias for `brand`
/// since older clients submit it under that key.
#[derive(Debug, Deserialize)]
pub struct SubmissionForm {
    #[serde(default, alias = "name")]
    pub brand: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TokenQuery {
    pub token: Option<String>,
    pub action: Option<String>,
}

/// POST /api/send-collaboration
/// Validates the form, stores a pending request, then notifies the
/// operator with confirm/reject links. A notification failure is
/// reported to the caller but the stored record is not rolled back.
pub async fn submit(
    registry: web::Data<Registry>,
    mailer: web::Data<Mailer>,
    body: web::Json<SubmissionForm>,
) -> Result<HttpResponse, AppError> {
    let form = body.into_inner();
    let brand = form.brand.unwrap_or_default();
    let email = form.email.unwrap_or_default();
    let budget = form.budget.unwrap_or_default();
    let message = form.message.unwrap_or_default();

    let error = validate::validate_required(&brand, "Brand", 200)
        .or_else(|| validate::validate_email(&email))
        .or_else(|| validate::validate_required(&budget, "Budget", 100))
        .or_else(|| validate::validate_message(&message));
    if let Some(msg) = error {
        return Err(AppError::Validation(msg));
    }

    let token = generate_token();
    let record = Collaboration::new(
        token.clone(),
        brand.trim().to_string(),
        email.trim().to_string(),
        budget.trim().to_string(),
        message.trim().to_string(),
    );
    registry.insert(record.clone());

    let counts = registry.counts();
    log::info!(
        "Collaboration request stored: brand={} pending={} total={}",
        record.brand, counts.pending, counts.total
    );

    // The lock is long gone by now; only the notification awaits.
    mailer
        .notify_collaboration(&record)
        .await
        .map_err(AppError::Mail)?;

    Ok(HttpResponse::Ok().json(json!({ "message": "Collaboration request sent" })))
}

/// GET /api/confirm-collaboration?token=...
/// Human-facing links also carry an `action` parameter; those requests
/// are redirected to the status page with both parameters preserved.
pub async fn confirm(
    registry: web::Data<Registry>,
    query: web::Query<TokenQuery>,
) -> Result<HttpResponse, AppError> {
    let q = query.into_inner();
    if let (Some(token), Some(action)) = (&q.token, &q.action) {
        return Ok(HttpResponse::SeeOther()
            .insert_header((
                "Location",
                format!("/collaboration-status?token={token}&action={action}"),
            ))
            .finish());
    }
    let token = require_token(q.token)?;
    apply_transition(&registry, &token, Status::Success, "Collaboration confirmed")
}

/// GET /api/reject-collaboration?token=...
pub async fn reject(
    registry: web::Data<Registry>,
    query: web::Query<TokenQuery>,
) -> Result<HttpResponse, AppError> {
    let token = require_token(query.into_inner().token)?;
    apply_transition(&registry, &token, Status::Rejected, "Collaboration rejected")
}

/// GET /collaboration-status
pub async fn status_page() -> HttpResponse {
    let html = include_str!("../../templates/collaboration_status.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}

fn require_token(token: Option<String>) -> Result<String, AppError> {
    token
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| AppError::Validation("Missing token parameter".to_string()))
}

fn apply_transition(
    registry: &Registry,
    token: &str,
    status: Status,
    message: &str,
) -> Result<HttpResponse, AppError> {
    match registry.process(token, status) {
        ProcessOutcome::Applied(record) => {
            log::info!("Collaboration {status}: brand={}", record.brand);
            Ok(HttpResponse::Ok().json(json!({ "message": message, "token": record.token })))
        }
        ProcessOutcome::NotFound => Err(AppError::NotFound(
            "No collaboration request found for that token".to_string(),
        )),
        ProcessOutcome::AlreadyProcessed(current) => Err(AppError::Conflict(format!(
            "Request was already processed (status: {current})"
        ))),
    }
}

/// Generate a random 32-byte hex token.
fn generate_token() -> String {
    let mut rng = rand::rng();
    let bytes: [u8; 32] = rng.random();
    hex::encode(bytes)
}
