/// Contact relay: forwards the contact form to the owner through EmailJS.
///
/// Every outbound mail goes through a `RelayService`. The HTTP implementation talks to
/// the EmailJS REST endpoint; tests swap in their own implementation or a mock server.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::errors::AppError;

pub mod handlers;

pub const DEFAULT_EMAILJS_ENDPOINT: &str = "https://api.emailjs.com";
const SEND_PATH: &str = "/api/v1.0/email/send";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("relay rejected the message (status {status}): {message}")]
    Rejected { status: u16, message: String },
}

/// Sends one templated mail.
#[async_trait]
pub trait RelayService: Send + Sync {
    async fn send(&self, template_id: &str, params: Value) -> Result<(), RelayError>;
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: Value,
}

/// EmailJS REST client.
#[derive(Clone)]
pub struct EmailJsRelay {
    client: Client,
    endpoint: String,
    service_id: String,
    public_key: String,
}

impl EmailJsRelay {
    pub fn new(endpoint: String, service_id: String, public_key: String) -> Result<Self, RelayError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            service_id,
            public_key,
        })
    }
}

#[async_trait]
impl RelayService for EmailJsRelay {
    async fn send(&self, template_id: &str, params: Value) -> Result<(), RelayError> {
        let body = SendRequest {
            service_id: &self.service_id,
            template_id,
            user_id: &self.public_key,
            template_params: params,
        };

        let response = self
            .client
            .post(format!("{}{SEND_PATH}", self.endpoint))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(RelayError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        debug!("EmailJS accepted template {template_id} ({status})");
        Ok(())
    }
}

/// Template ids and recipient for the contact form.
#[derive(Debug, Clone)]
pub struct ContactSettings {
    pub notification_template_id: String,
    pub autoreply_template_id: String,
    pub to_email: String,
}

/// Fields submitted by the contact form.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactRequest {
    pub user_name: String,
    pub user_email: String,
    pub subject: String,
    pub message: String,
}

impl ContactRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        for (field, value) in [
            ("user_name", &self.user_name),
            ("user_email", &self.user_email),
            ("subject", &self.subject),
            ("message", &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::Validation(format!("{field} is required")));
            }
        }
        if !is_plausible_email(self.user_email.trim()) {
            return Err(AppError::Validation(
                "user_email is not a valid email address".to_string(),
            ));
        }
        Ok(())
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}

/// Sends the owner notification, then the auto-reply to the sender.
///
/// The auto-reply is only attempted after the notification succeeded, and its failure
/// does not fail the submission.
pub async fn send_contact(
    relay: &dyn RelayService,
    settings: &ContactSettings,
    request: &ContactRequest,
) -> Result<(), RelayError> {
    let notification = json!({
        "from_name": request.user_name,
        "user_email": request.user_email,
        "subject": request.subject,
        "message": request.message,
        "to_email": settings.to_email,
    });
    relay
        .send(&settings.notification_template_id, notification)
        .await?;
    info!("Contact notification sent for subject {:?}", request.subject);

    let auto_reply = json!({
        "to_name": request.user_name,
        "subject": request.subject,
        "to_email": request.user_email,
    });
    if let Err(e) = relay.send(&settings.autoreply_template_id, auto_reply).await {
        warn!("Auto-reply to {} failed: {e}", request.user_email);
    }
    Ok(())
}
