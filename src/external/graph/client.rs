//! Graph API client.

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::ACCEPT;

use super::error::GraphError;
use super::provider::MailGateway;
use super::types::{GraphMessage, SendMailRequest};
use crate::config::GraphConfig;
use crate::external::client::HTTP_CLIENT;
use crate::models::MailDetails;

/// Client for the Microsoft Graph mail endpoints.
///
/// Holds the base URL and the bearer token captured at construction time;
/// the shared [`HTTP_CLIENT`] supplies pooling and the 30 second per-call
/// timeout.
pub struct GraphMailClient {
    api_url: String,
    access_token: Option<String>,
}

impl GraphMailClient {
    pub fn new(config: &GraphConfig) -> Self {
        Self {
            api_url: config.api_url.trim_end_matches('/').to_string(),
            access_token: config
                .access_token
                .clone()
                .filter(|token| !token.is_empty()),
        }
    }

    fn token(&self) -> Result<&str, GraphError> {
        self.access_token.as_deref().ok_or(GraphError::MissingToken)
    }
}

#[async_trait]
impl MailGateway for GraphMailClient {
    async fn fetch_message(
        &self,
        user_id: &str,
        message_id: &str,
    ) -> Result<MailDetails, GraphError> {
        let token = self.token()?;
        let url = format!("{}/users/{}/messages/{}", self.api_url, user_id, message_id);

        let response = HTTP_CLIENT
            .get(&url)
            .bearer_auth(token)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(GraphError::Status { status, body });
        }

        let raw: GraphMessage = response.json().await.map_err(GraphError::Decode)?;
        Ok(MailDetails::from(raw))
    }

    async fn send_mail(
        &self,
        subject: &str,
        message: &str,
        recipient: &str,
    ) -> Result<(), GraphError> {
        let token = self.token()?;
        let url = format!("{}/me/sendmail", self.api_url);
        let payload = SendMailRequest::plain_text(subject, message, recipient);

        let response = HTTP_CLIENT
            .post(&url)
            .bearer_auth(token)
            .header(ACCEPT, "application/json")
            .json(&payload)
            .send()
            .await?;

        // 202 is how the API acknowledges an async send
        match response.status() {
            StatusCode::OK | StatusCode::ACCEPTED => Ok(()),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(GraphError::Status {
                    status: status.as_u16(),
                    body,
                })
            }
        }
    }

    fn is_configured(&self) -> bool {
        self.access_token.is_some()
    }
}
