//! Permissions service client
//!
//! This module provides a gRPC client for the protected permissions
//! service that:
//! - Resolves mTLS credentials through a pluggable provider keyed by a
//!   certificate storage identifier
//! - Registers instance permissions and returns the issued secret
//! - Unregisters instances
//!
//! Every RPC is bounded by the configured request timeout. Failures are
//! reported with context and never retried here.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tonic::transport::{Certificate, Channel, ClientTlsConfig, Identity};
use tracing::{debug, info};

use crate::convert::{instance_ident_to_wire, register_instance_request_to_wire};
use crate::error::ConversionError;
use crate::models::{FunctionalServicePermissions, InstanceIdent, PermKeyValue};
use crate::proto::iam::v1::{PermissionsServiceClient, UnregisterInstanceRequest};

/// Source of channel credentials for a certificate storage identifier.
/// The client never sees raw key material outside the returned config.
#[async_trait]
pub trait TlsCredentials: Send + Sync {
    async fn client_tls_config(&self, cert_storage: &str) -> Result<ClientTlsConfig>;
}

/// File-based credentials provider: certificates for a storage
/// identifier live under `<root>/<storage>/` as `ca.crt`, `client.crt`
/// and `client.key` in PEM form.
pub struct FileTlsCredentials {
    root: PathBuf,
}

impl FileTlsCredentials {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl TlsCredentials for FileTlsCredentials {
    async fn client_tls_config(&self, cert_storage: &str) -> Result<ClientTlsConfig> {
        let storage = self.root.join(cert_storage);

        let ca_cert = tokio::fs::read(storage.join("ca.crt"))
            .await
            .with_context(|| format!("Failed to read CA certificate from {:?}", storage))?;
        let ca = Certificate::from_pem(ca_cert);

        let client_cert = tokio::fs::read(storage.join("client.crt"))
            .await
            .with_context(|| format!("Failed to read client certificate from {:?}", storage))?;
        let client_key = tokio::fs::read(storage.join("client.key"))
            .await
            .with_context(|| format!("Failed to read client key from {:?}", storage))?;
        let identity = Identity::from_pem(client_cert, client_key);

        Ok(ClientTlsConfig::new().ca_certificate(ca).identity(identity))
    }
}

/// Configuration for the permissions service client.
#[derive(Debug, Clone)]
pub struct PermissionsClientConfig {
    /// Protected service endpoint URL (e.g., "https://iam-service:8089")
    pub endpoint: String,
    /// Certificate storage identifier passed to the credentials provider
    pub cert_storage: String,
    /// Connection timeout
    pub connect_timeout: Duration,
    /// Per-RPC deadline
    pub request_timeout: Duration,
}

impl Default for PermissionsClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://iam-service:8089".to_string(),
            cert_storage: "sm".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(10),
        }
    }
}

/// gRPC client for instance permission registration.
pub struct PermissionsClient {
    config: PermissionsClientConfig,
    credentials: Arc<dyn TlsCredentials>,
}

impl PermissionsClient {
    pub fn new(config: PermissionsClientConfig, credentials: Arc<dyn TlsCredentials>) -> Self {
        info!(
            endpoint = %config.endpoint,
            cert_storage = %config.cert_storage,
            "Initializing permissions service client"
        );

        Self {
            config,
            credentials,
        }
    }

    /// Get the endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// Register an instance's functional service permissions and return
    /// the short-lived secret issued for it.
    pub async fn register_instance(
        &self,
        ident: &InstanceIdent,
        permissions: &[FunctionalServicePermissions],
    ) -> Result<String> {
        info!(
            service_id = %ident.service_id,
            subject_id = %ident.subject_id,
            instance = ident.instance,
            "Registering instance"
        );

        let mut client = PermissionsServiceClient::new(self.connect().await?);

        let mut request =
            tonic::Request::new(register_instance_request_to_wire(ident, permissions));
        request.set_timeout(self.config.request_timeout);

        let response = client
            .register_instance(request)
            .await
            .context("Register instance request failed")?;

        Ok(response.into_inner().secret)
    }

    /// Remove a previously registered instance.
    pub async fn unregister_instance(&self, ident: &InstanceIdent) -> Result<()> {
        info!(
            service_id = %ident.service_id,
            subject_id = %ident.subject_id,
            instance = ident.instance,
            "Unregistering instance"
        );

        let mut client = PermissionsServiceClient::new(self.connect().await?);

        let mut request = tonic::Request::new(UnregisterInstanceRequest {
            instance: Some(instance_ident_to_wire(ident)),
        });
        request.set_timeout(self.config.request_timeout);

        client
            .unregister_instance(request)
            .await
            .context("Unregister instance request failed")?;

        Ok(())
    }

    /// Permission lookup is handled by the service side; this client
    /// intentionally does not implement it.
    pub fn get_permissions(
        &self,
        _secret: &str,
        _func_server_id: &str,
        ident: &InstanceIdent,
    ) -> Result<Vec<PermKeyValue>> {
        debug!(
            service_id = %ident.service_id,
            subject_id = %ident.subject_id,
            instance = ident.instance,
            "Get permissions"
        );

        Err(ConversionError::NotSupported.into())
    }

    /// Open an mTLS channel to the protected endpoint.
    async fn connect(&self) -> Result<Channel> {
        let tls_config = self
            .credentials
            .client_tls_config(&self.config.cert_storage)
            .await
            .context("Failed to get mTLS client credentials")?
            .domain_name(self.extract_domain()?);

        let channel = Channel::from_shared(self.config.endpoint.clone())?
            .tls_config(tls_config)?
            .connect_timeout(self.config.connect_timeout)
            .timeout(self.config.request_timeout)
            .connect()
            .await
            .with_context(|| format!("Failed to connect to {}", self.config.endpoint))?;

        Ok(channel)
    }

    /// Extract domain name from endpoint URL
    fn extract_domain(&self) -> Result<String> {
        let url = url::Url::parse(&self.config.endpoint)
            .with_context(|| format!("Invalid endpoint URL: {}", self.config.endpoint))?;
        url.host_str()
            .map(|s| s.to_string())
            .ok_or_else(|| anyhow::anyhow!("No host in endpoint URL"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> PermissionsClient {
        PermissionsClient::new(
            PermissionsClientConfig {
                endpoint: "https://iam-test:8089".to_string(),
                ..Default::default()
            },
            Arc::new(FileTlsCredentials::new("/tmp/certs")),
        )
    }

    #[test]
    fn test_config_default() {
        let config = PermissionsClientConfig::default();
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.cert_storage, "sm");
    }

    #[test]
    fn test_extract_domain() {
        let client = test_client();
        assert_eq!(client.extract_domain().unwrap(), "iam-test");
    }

    #[test]
    fn test_get_permissions_not_supported() {
        let client = test_client();
        let ident = InstanceIdent {
            service_id: "svcA".to_string(),
            subject_id: "subj1".to_string(),
            instance: 0,
        };

        let err = client
            .get_permissions("secret", "storage", &ident)
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConversionError>(),
            Some(&ConversionError::NotSupported)
        );
    }

    #[tokio::test]
    async fn test_missing_certificates_fail_with_context() {
        let credentials = FileTlsCredentials::new("/nonexistent");
        let err = credentials.client_tls_config("sm").await.unwrap_err();
        assert!(err.to_string().contains("CA certificate"));
    }
}
