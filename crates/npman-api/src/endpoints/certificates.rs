// Certificate endpoints
//
// CRUD at `/api/nginx/certificates`, plus multipart upload of custom
// certificate/key pairs and the pre-flight `validate` route. No
// enable/disable side channel exists for certificates.

use reqwest::multipart::{Form, Part};
use serde_json::Value;
use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::models::{Certificate, CertificatePayload};

fn cert_form(certificate: Vec<u8>, key: Vec<u8>) -> Form {
    Form::new()
        .part(
            "certificate",
            Part::bytes(certificate).file_name("certificate.pem"),
        )
        .part(
            "certificate_key",
            Part::bytes(key).file_name("certificate_key.pem"),
        )
}

impl ApiClient {
    /// `GET /api/nginx/certificates`
    pub async fn list_certificates(&self) -> Result<Vec<Certificate>, Error> {
        debug!("listing certificates");
        self.get("nginx/certificates").await
    }

    /// `GET /api/nginx/certificates/{id}`
    pub async fn get_certificate(&self, id: u64) -> Result<Certificate, Error> {
        self.get(&format!("nginx/certificates/{id}")).await
    }

    /// Fetch by id, mapping 404 to `None`.
    pub async fn find_certificate(&self, id: u64) -> Result<Option<Certificate>, Error> {
        self.get_maybe(&format!("nginx/certificates/{id}"), &[])
            .await
    }

    /// `POST /api/nginx/certificates`
    pub async fn create_certificate(
        &self,
        payload: &CertificatePayload,
    ) -> Result<Certificate, Error> {
        debug!("creating certificate");
        self.post("nginx/certificates", payload).await
    }

    /// `DELETE /api/nginx/certificates/{id}`
    pub async fn delete_certificate(&self, id: u64) -> Result<bool, Error> {
        debug!(id, "deleting certificate");
        self.delete_action(&format!("nginx/certificates/{id}")).await
    }

    /// Attach a PEM certificate/key pair to an existing certificate
    /// record.
    ///
    /// `POST /api/nginx/certificates/{id}/upload` (multipart)
    pub async fn upload_certificate(
        &self,
        id: u64,
        certificate: Vec<u8>,
        key: Vec<u8>,
    ) -> Result<Value, Error> {
        debug!(id, "uploading certificate files");
        self.post_multipart(
            &format!("nginx/certificates/{id}/upload"),
            cert_form(certificate, key),
        )
        .await
    }

    /// Pre-flight validation of a PEM certificate/key pair without
    /// creating anything.
    ///
    /// `POST /api/nginx/certificates/validate` (multipart)
    pub async fn validate_certificate(
        &self,
        certificate: Vec<u8>,
        key: Vec<u8>,
    ) -> Result<Value, Error> {
        debug!("validating certificate files");
        self.post_multipart("nginx/certificates/validate", cert_form(certificate, key))
            .await
    }
}
