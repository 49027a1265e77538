//! Blocking SOAP client for the depot service.

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, info, warn};

use crate::config::{Credentials, DepotConfig};
use crate::envelope::{GET_DEPOTS, get_depots_envelope};
use crate::error::{DepotError, Result};
use crate::response::{Depot, DepotsResponse, parse_get_depots_response};

/// Source of depot listings.
pub trait DepotLookup {
    /// Full `GetDepots` answer, including the service status.
    fn get_depots(&self, credentials: &Credentials) -> Result<DepotsResponse>;

    /// The depots of a successful answer.
    ///
    /// A service status other than `Success` is a [`DepotError::Protocol`]
    /// carrying the service's error message.
    fn fetch_depots(&self, credentials: &Credentials) -> Result<Vec<Depot>> {
        let response = self.get_depots(credentials)?;
        response.ensure_success()?;
        Ok(response.depots)
    }
}

/// Depot lookup over HTTP. One request per call; no retries, no caching.
pub struct SoapDepotClient {
    client: Client,
    config: DepotConfig,
}

impl SoapDepotClient {
    pub fn new(config: DepotConfig) -> Result<Self> {
        if config.endpoint.trim().is_empty() {
            return Err(DepotError::Config("endpoint is empty".to_string()));
        }
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| DepotError::Network(e.to_string()))?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &DepotConfig {
        &self.config
    }
}

impl DepotLookup for SoapDepotClient {
    fn get_depots(&self, credentials: &Credentials) -> Result<DepotsResponse> {
        let envelope = get_depots_envelope(&self.config.namespace, credentials)?;
        let action = self.config.soap_action(GET_DEPOTS);
        debug!(endpoint = %self.config.endpoint, action = %action, "sending GetDepots");

        let response = self
            .client
            .post(&self.config.endpoint)
            .header(CONTENT_TYPE, "text/xml; charset=utf-8")
            .header("SOAPAction", action)
            .body(envelope)
            .send()
            .map_err(|e| DepotError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| DepotError::Network(e.to_string()))?;
        debug!(status = status.as_u16(), bytes = body.len(), "GetDepots response");

        if !status.is_success() {
            // ASMX services report faults with HTTP 500 and a SOAP body
            return match parse_get_depots_response(&body, &self.config.namespace) {
                Err(fault @ DepotError::Fault { .. }) => Err(fault),
                _ => {
                    warn!(status = status.as_u16(), "depot service returned an error status");
                    Err(DepotError::Http {
                        status: status.as_u16(),
                    })
                }
            };
        }

        let parsed = parse_get_depots_response(&body, &self.config.namespace)?;
        info!(
            status = %parsed.status,
            depots = parsed.depots.len(),
            "depot lookup complete"
        );
        Ok(parsed)
    }
}
