//! Device layer for talking to a FortiGate management interface.
//!
//! This module provides types and traits for:
//! - Building HTTP requests ([`HttpRequest`])
//! - Handling HTTP responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//! - Device operations used by the pipeline ([`DeviceHandler`], [`FortiOsHandler`])
//! - Classifying device replies ([`DeviceResponse`])
//! - Single-attribute edits ([`MemberOperation`])

mod client;
mod error;
mod handler;
mod member;
mod response;
mod transport;

#[cfg(test)]
mod client_tests;

pub use client::ReqwestClient;
pub use error::{DeviceError, HttpError};
pub use handler::{DeviceHandler, FortiOsHandler};
pub use member::{MemberOperation, MemberState};
pub use response::{DeviceResponse, is_successful};
pub use transport::{HttpClient, HttpRequest, HttpResponse};
