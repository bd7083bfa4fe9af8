//! AWS Signature Version 4 signing for the JSON protocol
//!
//! Every request is a POST to the endpoint root with a fixed header set, so
//! the canonical request collapses to a known shape: method, path `/`, no
//! query string, the four signed headers, and the payload hash. The
//! signature therefore covers the exact bytes sent, including the timestamp
//! and target action.

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

use crate::config::Credentials;

/// Service name used in the credential scope.
pub(crate) const SIGNING_SERVICE: &str = "datapipeline";

/// Media type of the service's JSON protocol.
pub(crate) const CONTENT_TYPE: &str = "application/x-amz-json-1.1";

const ALGORITHM: &str = "AWS4-HMAC-SHA256";
const SIGNED_HEADERS: &str = "content-type;host;x-amz-date;x-amz-target";

/// Header values produced by signing one request.
pub(crate) struct SignedRequest {
    /// ISO-8601 basic UTC timestamp for the `X-Amz-Date` header.
    pub amz_date: String,
    /// Value for the `Authorization` header.
    pub authorization: String,
}

/// Sign a Data Pipeline request.
///
/// `target` is the full `X-Amz-Target` value (`DataPipeline.<Action>`) and
/// `body` the serialized JSON payload. The timestamp is a parameter so
/// tests can verify signatures deterministically.
pub(crate) fn sign(
    credentials: &Credentials,
    region: &str,
    host: &str,
    target: &str,
    timestamp: DateTime<Utc>,
    body: &[u8],
) -> SignedRequest {
    let amz_date = timestamp.format("%Y%m%dT%H%M%SZ").to_string();
    let date = timestamp.format("%Y%m%d").to_string();

    let payload_hash = hex_sha256(body);
    let canonical_request = format!(
        "POST\n/\n\ncontent-type:{CONTENT_TYPE}\nhost:{host}\nx-amz-date:{amz_date}\nx-amz-target:{target}\n\n{SIGNED_HEADERS}\n{payload_hash}"
    );

    let credential_scope = format!("{date}/{region}/{SIGNING_SERVICE}/aws4_request");
    let string_to_sign = format!(
        "{ALGORITHM}\n{amz_date}\n{credential_scope}\n{}",
        hex_sha256(canonical_request.as_bytes())
    );

    let signature = calculate_signature(&credentials.secret_key, &date, region, &string_to_sign);
    let authorization = format!(
        "{ALGORITHM} Credential={}/{credential_scope}, SignedHeaders={SIGNED_HEADERS}, Signature={signature}",
        credentials.access_key
    );

    SignedRequest {
        amz_date,
        authorization,
    }
}

/// Calculate SHA-256 and return as hex string.
fn hex_sha256(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Calculate HMAC-SHA256.
fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut mac = Hmac::<Sha256>::new_from_slice(key).expect("HMAC key should be valid");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

/// Derive the signing key and sign the string-to-sign.
fn calculate_signature(secret_key: &str, date: &str, region: &str, string_to_sign: &str) -> String {
    let k_date = hmac_sha256(format!("AWS4{secret_key}").as_bytes(), date.as_bytes());
    let k_region = hmac_sha256(&k_date, region.as_bytes());
    let k_service = hmac_sha256(&k_region, SIGNING_SERVICE.as_bytes());
    let k_signing = hmac_sha256(&k_service, b"aws4_request");
    hex::encode(hmac_sha256(&k_signing, string_to_sign.as_bytes()))
}
