use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use bindex_app_core::{AppSettings, BindingsPort, MetadataPort};
use bindex_core::{BindingRecord, ObjectDescriptor, TriggerOperation};

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("no instance URL is configured")]
    NotConfigured,
    #[error("access token environment variable `{0}` is not set")]
    MissingToken(String),
    #[error("platform request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("platform rejected the query ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("malformed platform response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Live collaborator: the hosting platform's REST query endpoint.
pub struct PlatformClient {
    http: reqwest::Client,
    instance_url: String,
    api_version: String,
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct QueryResponse<T> {
    records: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

impl PlatformClient {
    /// Build a client from the saved connection settings, reading the bearer
    /// token from the configured environment variable.
    pub fn from_settings(settings: &AppSettings) -> Result<Self, PlatformError> {
        if settings.instance_url.is_empty() {
            return Err(PlatformError::NotConfigured);
        }
        let access_token = std::env::var(&settings.access_token_env)
            .map_err(|_| PlatformError::MissingToken(settings.access_token_env.clone()))?;

        Ok(Self {
            http: crate::net::default_http_client()?,
            instance_url: settings.instance_url.trim_end_matches('/').to_string(),
            api_version: settings.api_version.clone(),
            access_token,
        })
    }

    pub fn instance_url(&self) -> &str {
        &self.instance_url
    }

    async fn query<T: serde::de::DeserializeOwned>(
        &self,
        soql: &str,
    ) -> Result<Vec<T>, PlatformError> {
        let url = format!(
            "{}/services/data/{}/tooling/query",
            self.instance_url, self.api_version
        );
        debug!(%soql, "platform query");

        let resp = self
            .http
            .get(&url)
            .query(&[("q", soql)])
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            let message = extract_api_error(&body);
            warn!(status = status.as_u16(), %message, "platform query rejected");
            return Err(PlatformError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: QueryResponse<T> = serde_json::from_str(&body)?;
        Ok(parsed.records)
    }

    async fn bindings_query(
        &self,
        object_developer_name: &str,
        phase: TriggerOperation,
        is_async: bool,
    ) -> Result<Vec<BindingRecord>, PlatformError> {
        let soql = format!(
            "SELECT Id, MasterLabel, Type__c, IsActive__c, OrderOfExecution__c, \
             ExecuteAsynchronous__c FROM DomainProcessBinding__mdt \
             WHERE RelatedDomainBindingSObject__r.DeveloperName = '{}' \
             AND TriggerOperation__c = '{}' AND ExecuteAsynchronous__c = {} \
             ORDER BY OrderOfExecution__c ASC",
            soql_quote(object_developer_name),
            phase,
            is_async
        );
        let mut records: Vec<BindingRecord> = self.query(&soql).await?;
        // The endpoint honors ORDER BY, but execution order is a display
        // invariant, so it is enforced here too.
        records.sort_by_key(|r| r.order_of_execution);
        Ok(records)
    }
}

/// Escape for embedding in a single-quoted SOQL string literal.
fn soql_quote(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

/// The error payload is a JSON array of {message, errorCode}; fall back to
/// the raw body when it is anything else.
fn extract_api_error(body: &str) -> String {
    match serde_json::from_str::<Vec<ApiErrorBody>>(body) {
        Ok(errors) if !errors.is_empty() => errors
            .into_iter()
            .map(|e| e.message)
            .collect::<Vec<_>>()
            .join("; "),
        _ => body.trim().to_string(),
    }
}

#[async_trait]
impl MetadataPort for PlatformClient {
    async fn entity_definitions(&self) -> anyhow::Result<Vec<ObjectDescriptor>> {
        let records = self
            .query(
                "SELECT DeveloperName, Label FROM EntityDefinition \
                 WHERE IsApexTriggerable = true",
            )
            .await?;
        Ok(records)
    }
}

#[async_trait]
impl BindingsPort for PlatformClient {
    async fn domain_process_bindings(
        &self,
        object_developer_name: &str,
        phase: TriggerOperation,
        is_async: bool,
    ) -> anyhow::Result<Vec<BindingRecord>> {
        Ok(self
            .bindings_query(object_developer_name, phase, is_async)
            .await?)
    }

    async fn refresh_domain_process_bindings(
        &self,
        object_developer_name: &str,
        phase: TriggerOperation,
        is_async: bool,
    ) -> anyhow::Result<Vec<BindingRecord>> {
        // The client itself holds no cache; a refresh is a plain re-query.
        Ok(self
            .bindings_query(object_developer_name, phase, is_async)
            .await?)
    }
}
