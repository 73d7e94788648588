//! Type signature parser
//!
//! Parses the type signatures a native SOAP client exposes alongside its
//! method signatures.
//!
//! ## Format
//! ```text
//! struct Foo {
//!  string bar;
//!  int baz;
//! }
//! list listType {int}
//! union unionType {int,string}
//! Foo ArrayOfFoo[]
//! string simpleType
//! ```

mod parser;
mod types;

pub use parser::TypeSignatureParser;
pub use types::*;
