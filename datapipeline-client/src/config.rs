//! Client configuration: credentials and regional endpoints

use std::fmt;

/// Long-term AWS credential used to sign requests
///
/// Obtaining and rotating credentials is the caller's concern; the client
/// only holds what it needs to sign.
#[derive(Clone)]
pub struct Credentials {
    pub access_key: String,
    pub secret_key: String,
}

impl Credentials {
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

/// Target region: a signing name plus the regional endpoint URL
#[derive(Debug, Clone)]
pub struct Region {
    name: String,
    endpoint: String,
}

impl Region {
    /// Region with an explicit endpoint URL
    ///
    /// Intended for non-standard endpoints such as local test servers; the
    /// `name` is still used in the credential scope of the signature.
    pub fn new(name: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            endpoint: endpoint.into(),
        }
    }

    fn aws(name: &str) -> Self {
        Self {
            name: name.to_string(),
            endpoint: format!("https://datapipeline.{name}.amazonaws.com/"),
        }
    }

    pub fn us_east_1() -> Self {
        Self::aws("us-east-1")
    }

    pub fn us_west_2() -> Self {
        Self::aws("us-west-2")
    }

    pub fn eu_west_1() -> Self {
        Self::aws("eu-west-1")
    }

    pub fn ap_northeast_1() -> Self {
        Self::aws("ap-northeast-1")
    }

    pub fn ap_southeast_2() -> Self {
        Self::aws("ap-southeast-2")
    }

    /// Region name used in the credential scope
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Endpoint URL requests are posted to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Host component of the endpoint, as covered by the signature
    pub(crate) fn host(&self) -> &str {
        let host = self
            .endpoint
            .strip_prefix("http://")
            .or_else(|| self.endpoint.strip_prefix("https://"))
            .unwrap_or(&self.endpoint);
        host.split('/').next().unwrap_or(host)
    }
}
