use serde_json::json;

use crate::config::Config;
use crate::models::collaboration::Collaboration;

/// Outbound email notifications, delivered through an HTTP mail relay.
///
/// When no relay is configured the mailer runs in disabled mode: the
/// message is logged at info level and reported as delivered. This keeps
/// local development and tests working without a mail account.
pub struct Mailer {
    http: reqwest::Client,
    relay: Option<Relay>,
    operator_email: String,
    base_url: String,
}

struct Relay {
    api_url: String,
    api_token: Option<String>,
    from: String,
}

impl Mailer {
    pub fn from_config(config: &Config) -> Self {
        let relay = config.mail_api_url.as_ref().map(|url| Relay {
            api_url: url.clone(),
            api_token: config.mail_api_token.clone(),
            from: config.mail_from.clone(),
        });
        Self {
            http: reqwest::Client::new(),
            relay,
            operator_email: config.operator_email.clone(),
            base_url: config.public_url.trim_end_matches('/').to_string(),
        }
    }

    /// A mailer with no relay configured. Used in tests and dev setups.
    pub fn disabled(operator_email: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            relay: None,
            operator_email: operator_email.into(),
            base_url: base_url.into(),
        }
    }

    /// Notify the operator about a new collaboration request. The body
    /// carries the submission details plus confirm/reject links
    /// embedding the record's token.
    pub async fn notify_collaboration(&self, record: &Collaboration) -> Result<(), String> {
        let subject = format!("Collaboration Request from {}", record.brand);
        let body = collaboration_body(record, &self.base_url);
        self.send(&self.operator_email, &subject, &body).await
    }

    /// Deliver a single message. Fire-and-forget from the caller's point
    /// of view: the caller only learns success or failure, never retries.
    pub async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), String> {
        let Some(relay) = &self.relay else {
            log::info!("Mailer disabled — would send to {to}: {subject}\n{body}");
            return Ok(());
        };

        let payload = json!({
            "from": relay.from,
            "to": to,
            "subject": subject,
            "text": body,
        });
        let mut request = self.http.post(&relay.api_url).json(&payload);
        if let Some(token) = &relay.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| e.to_string())?;
        response.error_for_status().map_err(|e| e.to_string())?;
        log::info!("Notification sent to {to}: {subject}");
        Ok(())
    }
}

/// Build the operator notification body for a collaboration request.
pub fn collaboration_body(record: &Collaboration, base_url: &str) -> String {
    format!(
        "New collaboration request\n\
         \n\
         Brand: {brand}\n\
         Email: {email}\n\
         Budget: {budget}\n\
         Message: {message}\n\
         Received: {timestamp}\n\
         \n\
         Confirm: {base_url}/api/confirm-collaboration?token={token}\n\
         Reject:  {base_url}/api/reject-collaboration?token={token}\n",
        brand = record.brand,
        email = record.email,
        budget = record.budget,
        message = record.message,
        timestamp = record.timestamp.to_rfc3339(),
        token = record.token,
    )
}
