use log::debug;
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;

use crate::auth::credentials::{API_KEY_KEY, CredentialManager, EMAIL_KEY};
use crate::config::Config;
use crate::core::name::trim_zone;
use crate::error::Error;
use crate::http_client::{HttpRequest, HttpTransport, ReqwestTransport};
use crate::providers::rage4::error::Rage4Error;
use crate::providers::rage4::types::*;

#[derive(Clone)]
struct BasicAuth {
    email: String,
    api_key: String,
}

impl fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuth")
            .field("email", &self.email)
            .field("api_key", &"<REDACTED>")
            .finish()
    }
}

/// Rage4 DNS provider.
///
/// Holds no per-zone state: every public operation resolves the domain ID
/// afresh, so one instance can be shared across tasks.
pub struct Rage4Provider {
    api_url: String,
    auth: BasicAuth,
    transport: Arc<dyn HttpTransport>,
}

impl fmt::Debug for Rage4Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rage4Provider")
            .field("api_url", &self.api_url)
            .field("auth", &self.auth)
            .finish()
    }
}

impl Rage4Provider {
    pub fn new(
        config: &Config,
        credentials: Arc<dyn CredentialManager>,
    ) -> Result<Self, Rage4Error> {
        let transport = ReqwestTransport::new(config.timeout)?;
        Self::with_transport(config, credentials, Arc::new(transport))
    }

    pub fn with_transport(
        config: &Config,
        credentials: Arc<dyn CredentialManager>,
        transport: Arc<dyn HttpTransport>,
    ) -> Result<Self, Rage4Error> {
        let email = credentials.get(EMAIL_KEY).map_err(credential_error)?;
        let api_key = credentials.get(API_KEY_KEY).map_err(credential_error)?;

        Ok(Self {
            api_url: config.api_url.trim_end_matches('/').to_string(),
            auth: BasicAuth { email, api_key },
            transport,
        })
    }

    async fn request<T>(
        &self,
        endpoint: &str,
        query: Vec<(String, String)>,
    ) -> Result<T, Rage4Error>
    where
        T: DeserializeOwned,
    {
        debug!("rage4 {endpoint} {query:?}");
        let request = HttpRequest {
            url: format!("{}/{}", self.api_url, endpoint),
            query,
            username: self.auth.email.clone(),
            password: self.auth.api_key.clone(),
        };
        let response = self.transport.get(request).await?;
        if !response.is_success() {
            return Err(Rage4Error::Status {
                status: response.status,
                body: response.body,
            });
        }
        Ok(serde_json::from_str(&response.body)?)
    }

    /// Issues a mutating call and unwraps the `{status, id, error}` envelope.
    async fn mutate(
        &self,
        endpoint: &str,
        query: Vec<(String, String)>,
    ) -> Result<CommonResponse, Rage4Error> {
        let response: CommonResponse = self.request(endpoint, query).await?;
        if !response.status {
            return Err(Rage4Error::Api(response.error));
        }
        Ok(response)
    }

    pub async fn list_domains(&self) -> Result<Vec<Rage4Domain>, Rage4Error> {
        self.request("GetDomains", Vec::new()).await
    }

    pub async fn get_domain(&self, domain_id: u64) -> Result<Rage4Domain, Rage4Error> {
        self.request("GetDomain", id_query(domain_id)).await
    }

    pub async fn list_records(&self, domain_id: u64) -> Result<Vec<Rage4Record>, Rage4Error> {
        self.request("GetRecords", id_query(domain_id)).await
    }

    pub async fn create_record(
        &self,
        domain_id: u64,
        req: CreateRecordRequest,
    ) -> Result<CommonResponse, Rage4Error> {
        self.mutate("CreateRecord", req.into_query(domain_id)).await
    }

    pub async fn delete_record(&self, record_id: u64) -> Result<CommonResponse, Rage4Error> {
        self.mutate("DeleteRecord", id_query(record_id)).await
    }

    /// Finds the numeric ID of `zone` among the account's domains.
    pub async fn domain_id(&self, zone: &str) -> Result<u64, Rage4Error> {
        let zone = trim_zone(zone);
        self.list_domains()
            .await?
            .into_iter()
            .find(|domain| domain.name == zone)
            .map(|domain| domain.id)
            .ok_or_else(|| Rage4Error::DomainNotFound(zone.to_string()))
    }
}

fn credential_error(e: Error) -> Rage4Error {
    match e {
        Error::Credential(msg) => Rage4Error::Credential(msg),
        other => Rage4Error::Credential(other.to_string()),
    }
}

fn id_query(id: u64) -> Vec<(String, String)> {
    vec![("id".to_string(), id.to_string())]
}
