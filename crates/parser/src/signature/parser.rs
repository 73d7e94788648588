//! Recursive-descent parser for method signatures

use super::types::{MethodSignature, NamedType, ReturnSpec};
use crate::lexer::{TokenCursor, TokenKind};
use extsoap_engine_common::{Method, Parameter, Result, XsdType, XsdTypeCollection};

/// Parses one introspection method signature
pub struct SignatureParser;

impl SignatureParser {
    /// Parse a signature and resolve its types against the catalog
    ///
    /// Fails with `EngineError::MalformedSignature` when the string does not
    /// follow the method signature grammar.
    pub fn parse(signature: &str, catalog: &XsdTypeCollection) -> Result<Method> {
        let parsed = Self::parse_signature(signature)?;
        Ok(Self::resolve(parsed, catalog))
    }

    /// Parse a signature into its syntax tree without resolving types
    pub fn parse_signature(signature: &str) -> Result<MethodSignature> {
        let mut cursor = TokenCursor::tokenize(signature)?;

        let return_spec = parse_return_spec(&mut cursor)?;
        let name = cursor.expect_ident("method name")?.to_string();

        cursor.expect(TokenKind::LParen)?;
        let parameters = if cursor.at(TokenKind::RParen) {
            Vec::new()
        } else {
            parse_named_types(&mut cursor, "parameter")?
        };
        cursor.expect(TokenKind::RParen)?;
        cursor.expect_end()?;

        Ok(MethodSignature {
            return_spec,
            name,
            parameters,
        })
    }

    /// Turn a syntax tree into a `Method`, looking up every type in the catalog
    pub fn resolve(signature: MethodSignature, catalog: &XsdTypeCollection) -> Method {
        let return_type = match &signature.return_spec {
            ReturnSpec::Type(name) => catalog.resolve(name),
            list @ ReturnSpec::List(_) => XsdType::create(list.type_name()),
        };

        let parameters = signature
            .parameters
            .into_iter()
            .map(|param| Parameter::new(param.name, catalog.resolve(&param.type_name)))
            .collect();

        Method::new(signature.name, parameters, return_type)
    }
}

fn parse_return_spec(cursor: &mut TokenCursor<'_>) -> Result<ReturnSpec> {
    if cursor.at_keyword("list", TokenKind::LParen) {
        cursor.bump();
        cursor.bump();
        let members = parse_named_types(cursor, "list member")?;
        cursor.expect(TokenKind::RParen)?;
        return Ok(ReturnSpec::List(members));
    }

    Ok(ReturnSpec::Type(
        cursor.expect_ident("return type")?.to_string(),
    ))
}

/// One or more comma separated `typeName $name` pairs
fn parse_named_types(cursor: &mut TokenCursor<'_>, what: &str) -> Result<Vec<NamedType>> {
    let mut named_types = Vec::new();
    loop {
        let type_name = cursor.expect_ident(&format!("{} type", what))?.to_string();
        cursor.expect(TokenKind::Dollar)?;
        let name = cursor.expect_ident(&format!("{} name", what))?.to_string();
        named_types.push(NamedType { type_name, name });

        if !cursor.eat(TokenKind::Comma) {
            break;
        }
    }
    Ok(named_types)
}
