//! Promise rejections for failed requests.

use napi::bindgen_prelude::*;
use schoolmock_core::transport::TransportError;

/// Rejection code holding the HTTP status of a failed request, e.g. `"500"`.
///
/// Surfaces in JS as `error.code`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpStatus(String);

impl From<u16> for HttpStatus {
    fn from(status: u16) -> Self {
        Self(status.to_string())
    }
}

impl AsRef<str> for HttpStatus {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Rejects with the transport message unchanged and the status as the code.
pub fn to_napi_error(e: TransportError) -> Error<HttpStatus> {
    Error::new(HttpStatus::from(e.status), e.message)
}
