//! Method signature parser
//!
//! Parses the method signatures a native SOAP client exposes through
//! introspection into a structured [`Method`](extsoap_engine_common::Method).
//!
//! ## Grammar
//! ```text
//! signature  := returnSpec name "(" paramList? ")"
//! returnSpec := typeName | "list" "(" namedType ("," namedType)* ")"
//! namedType  := typeName "$" ident
//! paramList  := namedType ("," namedType)*
//! ```
//!
//! Whitespace is skipped between tokens and never required: `list(A $a)Foo()`
//! and `Foo Bar(T $ x)` parse like their conventionally spaced forms. Only
//! the return type and the method name must be separated, since they would
//! otherwise lex as one identifier.
//!
//! A `list(...)` return always resolves to the synthetic type `array`; the
//! named members inside it are informational only.
//!
//! ## Usage
//! ```rust
//! use extsoap_engine_common::XsdTypeCollection;
//! use extsoap_engine_parser::SignatureParser;
//!
//! let method = SignatureParser::parse(
//!     "TestResponse Test1Param(Test1 $parameter1)",
//!     &XsdTypeCollection::new(),
//! )?;
//! assert_eq!(method.name, "Test1Param");
//! assert_eq!(method.parameters[0].name, "parameter1");
//! # Ok::<(), extsoap_engine_common::EngineError>(())
//! ```

mod parser;
mod types;

pub use parser::SignatureParser;
pub use types::*;
