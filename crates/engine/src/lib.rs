//! ExtSoap engine
//!
//! Ties the pieces together around a native SOAP client:
//! - [`CaptureBridge`] splits a native call into envelope capture, real
//!   execution and response replay
//! - [`ExtSoapMetadata`] exposes the service's methods and types, extracted
//!   once per client
//! - [`ExtSoapEngineFactory`] resolves the WSDL to a local file before the
//!   native client is connected
//!
//! The building blocks are re-exported as [`common`], [`parser`] and [`wsdl`].

mod bridge;
mod error_handling;
mod factory;
mod metadata;
mod transport;

pub use bridge::{BridgeState, CaptureBridge};
pub use error_handling::ExtSoapErrorHandler;
pub use factory::ExtSoapEngineFactory;
pub use metadata::ExtSoapMetadata;
pub use transport::Transport;

pub use extsoap_engine_common as common;
pub use extsoap_engine_parser as parser;
pub use extsoap_engine_wsdl as wsdl;

pub use extsoap_engine_common::{
    EngineError, LastRequestInfo, NativeSoapClient, Result, SoapRequest, SoapResponse,
    SoapVersion,
};
