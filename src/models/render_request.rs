use crate::constants::DEFAULT_PROXY_TYPE;
use crate::models::RenderError;
use crate::utils::{first_value, is_ascii_digits, QueryParams};

/// Validated proxy parameters for one request
///
/// Only [`RenderRequest::from_query`] builds this, so holding one means every
/// field already passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    pub ip: String,
    /// Decimal digits exactly as supplied, rendered verbatim
    pub port: String,
    pub proxy_type: String,
    pub cipher: String,
    pub password: String,
}

fn field<'a>(params: &'a QueryParams, key: &str, default: &'a str) -> &'a str {
    first_value(params, key).unwrap_or(default).trim()
}

impl RenderRequest {
    /// Extract and validate the request fields
    ///
    /// Checks run in a fixed order (`ip`, `port`, `cipher`, `password`) and the
    /// first failure is returned. `type` is never validated.
    pub fn from_query(params: &QueryParams) -> Result<Self, RenderError> {
        let ip = field(params, "ip", "");
        let port = field(params, "port", "");
        let proxy_type = field(params, "type", DEFAULT_PROXY_TYPE);
        let cipher = field(params, "cipher", "");
        let password = field(params, "password", "");

        if ip.is_empty() {
            return Err(RenderError::missing("ip"));
        }
        if !is_ascii_digits(port) {
            return Err(RenderError::invalid("port must be integer"));
        }
        if cipher.is_empty() {
            return Err(RenderError::missing("cipher"));
        }
        if password.is_empty() {
            return Err(RenderError::missing("password"));
        }

        Ok(Self {
            ip: ip.to_owned(),
            port: port.to_owned(),
            proxy_type: proxy_type.to_owned(),
            cipher: cipher.to_owned(),
            password: password.to_owned(),
        })
    }
}
