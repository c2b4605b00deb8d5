/// SOAP transport for the e-Boekhouden service.
///
/// The [`Transport`] trait is the seam between the client and the wire:
/// one remote invocation in, one result envelope out. [`HttpTransport`]
/// is the default implementation over reqwest.
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::config::ClientOptions;
use crate::errors::EboekhoudenError;
use crate::soap::{self, SoapAction};

/// A single remote invocation: one SOAP action with a parameter map,
/// returning the call result envelope (a mapping with a single result
/// key).
///
/// The client creates an [`HttpTransport`] by default; tests and
/// embedders can substitute their own implementation through
/// [`EboekhoudenClient::with_transport`](crate::EboekhoudenClient::with_transport).
#[async_trait]
pub trait Transport: Send + Sync {
    async fn call(&self, action: SoapAction, params: &Value)
        -> Result<Value, EboekhoudenError>;
}

/// Default transport: posts SOAP 1.1 envelopes over HTTP.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: Url,
}

impl HttpTransport {
    /// Create a transport posting to the endpoint configured in `options`.
    pub fn new(options: &ClientOptions) -> Result<Self, EboekhoudenError> {
        let endpoint = Url::parse(options.endpoint())?;
        Ok(Self {
            client: Client::new(),
            endpoint,
        })
    }

    /// The endpoint this transport posts to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn call(
        &self,
        action: SoapAction,
        params: &Value,
    ) -> Result<Value, EboekhoudenError> {
        let envelope = soap::build_envelope(action, params);
        debug!(
            "transport.call action={} endpoint={} body_len={}",
            action,
            self.endpoint,
            envelope.len()
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .header("Content-Type", "text/xml; charset=utf-8")
            .header("SOAPAction", format!("\"{}\"", action.header_uri()))
            .body(envelope)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        debug!(
            "transport.call action={} status={} body_len={}",
            action,
            status,
            text.len()
        );

        if !status.is_success() {
            // Fault bodies carry the reason; prefer it over the bare status.
            if let Err(fault @ EboekhoudenError::Transport(_)) =
                soap::parse_result_envelope(&text)
            {
                return Err(fault);
            }
            let snippet: String = text.chars().take(500).collect();
            return Err(EboekhoudenError::Transport(format!(
                "HTTP {status}: {snippet}"
            )));
        }

        soap::parse_result_envelope(&text)
    }
}
