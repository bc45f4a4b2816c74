//! Request and response data model shared by the transport and domain APIs.

pub mod envelope;
pub mod request;
pub mod response;
