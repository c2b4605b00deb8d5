/// Construction options for the e-Boekhouden client.
/// Default URL of the vendor's public SOAP endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://soap.e-boekhouden.nl/soap.asmx";

/// Default retry ceiling for transport failures.
pub const DEFAULT_RETRIES: u32 = 3;

/// Account credentials, supplied once at construction and immutable for the
/// lifetime of a client instance.
///
/// The two security codes can be found in the e-Boekhouden settings under
/// Beheer > Instellingen > API/SOAP.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub security_code_1: String,
    pub security_code_2: String,
    /// GUID of the administration to open a sub-session for. Only used by
    /// accountants managing multiple client administrations.
    pub administration_guid: Option<String>,
}

/// Options to create a new [`EboekhoudenClient`](crate::EboekhoudenClient).
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub credentials: Credentials,
    /// Service endpoint URL. Defaults to the vendor's public endpoint.
    pub url: String,
    /// When enabled, every call logs its raw result envelope at debug level.
    pub debug: bool,
    /// Number of retries to perform when a SOAP call fails with a transport
    /// error. With ceiling N a persistently failing call is attempted N+1
    /// times in total.
    pub retries: u32,
}

impl ClientOptions {
    /// Create options with the mandatory credentials and all defaults.
    pub fn new(
        username: impl Into<String>,
        security_code_1: impl Into<String>,
        security_code_2: impl Into<String>,
    ) -> Self {
        Self {
            credentials: Credentials {
                username: username.into(),
                security_code_1: security_code_1.into(),
                security_code_2: security_code_2.into(),
                administration_guid: None,
            },
            url: DEFAULT_ENDPOINT.into(),
            debug: false,
            retries: DEFAULT_RETRIES,
        }
    }

    /// Open a sub-session for the given administration GUID.
    pub fn administration_guid(mut self, guid: impl Into<String>) -> Self {
        self.credentials.administration_guid = Some(guid.into());
        self
    }

    /// Override the service endpoint URL. A trailing `?wsdl` suffix is
    /// accepted and stripped, since this client posts directly to the
    /// service instead of fetching the WSDL.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Enable debug logging of raw result envelopes.
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Override the retry ceiling.
    pub fn retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// The endpoint to post SOAP requests to, with any `?wsdl` suffix
    /// stripped.
    pub fn endpoint(&self) -> &str {
        self.url.strip_suffix("?wsdl").unwrap_or(&self.url)
    }
}
