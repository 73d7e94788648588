//! Contract for the native SOAP client collaborator
//!
//! The native client owns the wire: it opens connections and executes the
//! call. The engine only needs it to send a prepared envelope and to expose
//! the introspection strings it derived from the WSDL.

use crate::http_binding::SoapRequest;
use crate::model::XsdType;

/// A native SOAP transport and its service introspection output
pub trait NativeSoapClient {
    /// Send the envelope over the wire and return the raw response body
    ///
    /// `Ok(None)` means the transport produced no response at all, which is
    /// what one-way calls typically yield.
    fn send_raw(&self, request: &SoapRequest) -> anyhow::Result<Option<String>>;

    /// Method signatures such as `TestResponse Test1Param(Test1 $parameter1)`
    fn exposed_method_signatures(&self) -> Vec<String>;

    /// Type signatures such as `struct Foo {\n string bar;\n}` or `string simpleType`
    fn exposed_type_signatures(&self) -> Vec<String>;

    /// Explicit XSD type definitions seeding the resolution catalog
    fn exposed_xsd_type_definitions(&self) -> Vec<XsdType> {
        Vec::new()
    }

    /// Raw headers of the last request sent by [`send_raw`](Self::send_raw)
    fn last_request_headers(&self) -> String {
        String::new()
    }

    /// Raw headers of the last response received by [`send_raw`](Self::send_raw)
    fn last_response_headers(&self) -> String {
        String::new()
    }
}
