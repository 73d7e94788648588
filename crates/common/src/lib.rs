//! Common types and utilities for the ExtSoap engine
//!
//! This crate contains the structured metadata model (methods, parameters,
//! XSD types), the SOAP request/response values that travel through the
//! capture bridge, the collaborator trait implemented by native SOAP
//! transports, and the error type shared by the parser and engine crates.

mod client;
mod collection;
mod http_binding;
mod model;

pub use client::NativeSoapClient;
pub use collection::{MethodCollection, Named, NamedCollection, TypeCollection, XsdTypeCollection};
pub use http_binding::{LastRequestInfo, SoapRequest, SoapResponse, SoapVersion};
pub use model::{Method, Parameter, Property, Type, XsdType};

use thiserror::Error;

/// Errors that can occur while extracting metadata or driving a SOAP call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Malformed signature \"{signature}\" at byte {position}: {reason}")]
    MalformedSignature {
        signature: String,
        position: usize,
        reason: String,
    },

    #[error("Duplicate {kind} \"{name}\"")]
    DuplicateName { kind: &'static str, name: String },

    #[error("No {kind} with name \"{name}\" found")]
    NotFound { kind: &'static str, name: String },

    #[error("No request has been captured yet")]
    NoRequestCaptured,

    #[error("Internal SOAP error: {0}")]
    InternalSoap(String),

    #[error(
        "Invalid configuration. Expected value of option {key} to be of type {expected} but got {actual}."
    )]
    UnexpectedConfiguration {
        key: &'static str,
        expected: &'static str,
        actual: String,
    },
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
