use std::time::Duration;

use book_logging::{book_debug, book_warn};

use crate::types::{AddressRecord, LookupEnvelope, LookupError, LookupFailureKind};

/// Connection settings for the lookup collaborator.
#[derive(Debug, Clone)]
pub struct LookupSettings {
    /// Base URL of the collaborator, without the `/api/getAddresses` path.
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for LookupSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[async_trait::async_trait]
pub trait AddressLookup: Send + Sync {
    /// Requests candidates for the given postcode and street number.
    async fn search(
        &self,
        postcode: &str,
        street_number: &str,
    ) -> Result<Vec<AddressRecord>, LookupError>;
}

/// Reqwest-backed client for the collaborator's `getAddresses` endpoint.
#[derive(Debug, Clone)]
pub struct HttpAddressLookup {
    settings: LookupSettings,
    client: reqwest::Client,
}

impl HttpAddressLookup {
    pub fn new(settings: LookupSettings) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(map_reqwest_error)?;
        Ok(Self { settings, client })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/api/getAddresses",
            self.settings.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait::async_trait]
impl AddressLookup for HttpAddressLookup {
    async fn search(
        &self,
        postcode: &str,
        street_number: &str,
    ) -> Result<Vec<AddressRecord>, LookupError> {
        let response = self
            .client
            .get(self.endpoint())
            .query(&[("postcode", postcode), ("streetnumber", street_number)])
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let body = response.text().await.map_err(map_reqwest_error)?;

        // The collaborator sends its envelope for rejections too, so the
        // body is decoded before the status is judged.
        let envelope: LookupEnvelope = match serde_json::from_str(&body) {
            Ok(envelope) => envelope,
            Err(err) if status.is_success() => {
                book_warn!("undecodable lookup response: {err}");
                return Err(LookupError::new(LookupFailureKind::MalformedResponse));
            }
            Err(_) => {
                // Rejected without a usable body; report the status alone.
                return Err(LookupError::new(LookupFailureKind::HttpStatus(
                    status.as_u16(),
                )));
            }
        };

        if envelope.status == "ok" {
            if let Some(details) = envelope.details {
                book_debug!(
                    "lookup for postcode={} streetnumber={} returned {} candidate(s)",
                    postcode,
                    street_number,
                    details.len()
                );
                return Ok(details);
            }
            // "ok" without details violates the contract.
            return Err(LookupError::new(LookupFailureKind::MalformedResponse));
        }

        let kind = match status.as_u16() {
            404 => LookupFailureKind::NoResults,
            code if !status.is_success() => LookupFailureKind::HttpStatus(code),
            // A success status carrying an error envelope still means the
            // search found nothing.
            _ => LookupFailureKind::NoResults,
        };
        book_debug!("lookup rejected: {kind} ({:?})", envelope.errormessage);
        Err(LookupError::with_message(kind, envelope.errormessage))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> LookupError {
    let kind = if err.is_timeout() {
        LookupFailureKind::Timeout
    } else {
        LookupFailureKind::Network
    };
    book_warn!("lookup transport failure: {err}");
    LookupError::new(kind)
}
