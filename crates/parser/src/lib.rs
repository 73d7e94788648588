//! Service metadata parsing for native SOAP clients
//!
//! This crate turns the stringly-typed introspection output of a native
//! SOAP client into the structured model of `extsoap-engine-common`.
//!
//! ## Parsing Strategy
//!
//! Signatures are tokenized with logos and parsed by small recursive-descent
//! parsers:
//! - method signatures (`TestResponse Test1Param(Test1 $parameter1)`) become
//!   [`Method`](extsoap_engine_common::Method)s
//! - `struct` type signatures become [`Type`](extsoap_engine_common::Type)s
//! - simple, list, union and array type signatures seed the XSD type catalog
//!
//! Type names are resolved by exact lookup in the catalog; unknown names pass
//! through unresolved.

mod extractor;
mod lexer;
mod methods_parser;
pub mod signature;
pub mod type_signature;
mod types_parser;
mod xsd_types_parser;

pub use extractor::MetadataExtractor;
pub use methods_parser::MethodsParser;
pub use signature::SignatureParser;
pub use type_signature::TypeSignatureParser;
pub use types_parser::TypesParser;
pub use xsd_types_parser::{XsdTypesParser, ARRAY_BASE_TYPE, UNION_BASE_TYPE};
