//! Recursive-descent parser for type signatures

use super::types::{StructMember, TypeSignature};
use crate::lexer::{TokenCursor, TokenKind};
use extsoap_engine_common::Result;

/// Parses one introspection type signature
pub struct TypeSignatureParser;

impl TypeSignatureParser {
    pub fn parse(signature: &str) -> Result<TypeSignature> {
        let mut cursor = TokenCursor::tokenize(signature)?;

        let parsed = if at_block(&cursor, "struct") {
            cursor.bump();
            let name = cursor.expect_ident("struct name")?.to_string();
            let members = parse_struct_body(&mut cursor)?;
            TypeSignature::Struct { name, members }
        } else if at_block(&cursor, "list") {
            cursor.bump();
            let name = cursor.expect_ident("list name")?.to_string();
            let member_types = parse_member_types(&mut cursor)?;
            TypeSignature::List { name, member_types }
        } else if at_block(&cursor, "union") {
            cursor.bump();
            let name = cursor.expect_ident("union name")?.to_string();
            let member_types = parse_member_types(&mut cursor)?;
            TypeSignature::Union { name, member_types }
        } else {
            let base = cursor.expect_ident("base type")?.to_string();
            let name = cursor.expect_ident("type name")?.to_string();
            if cursor.at(TokenKind::LBracket) {
                let dimensions = parse_dimensions(&mut cursor)?;
                TypeSignature::Array {
                    name,
                    item_type: base,
                    dimensions,
                }
            } else {
                TypeSignature::Simple {
                    name,
                    base_type: base,
                }
            }
        };

        cursor.expect_end()?;
        Ok(parsed)
    }
}

/// `keyword name {`
fn at_block(cursor: &TokenCursor<'_>, keyword: &str) -> bool {
    cursor
        .peek()
        .is_some_and(|t| t.kind == TokenKind::Ident && t.text == keyword)
        && cursor
            .peek_nth(1)
            .is_some_and(|t| t.kind == TokenKind::Ident)
        && cursor
            .peek_nth(2)
            .is_some_and(|t| t.kind == TokenKind::LBrace)
}

fn parse_struct_body(cursor: &mut TokenCursor<'_>) -> Result<Vec<StructMember>> {
    cursor.expect(TokenKind::LBrace)?;
    let mut members = Vec::new();
    while !cursor.eat(TokenKind::RBrace) {
        let type_name = cursor.expect_ident("member type")?.to_string();
        let name = cursor.expect_ident("member name")?.to_string();
        cursor.expect(TokenKind::Semicolon)?;
        members.push(StructMember { type_name, name });
    }
    Ok(members)
}

fn parse_member_types(cursor: &mut TokenCursor<'_>) -> Result<Vec<String>> {
    cursor.expect(TokenKind::LBrace)?;
    let mut member_types = Vec::new();
    loop {
        member_types.push(cursor.expect_ident("member type")?.to_string());
        if !cursor.eat(TokenKind::Comma) {
            break;
        }
    }
    cursor.expect(TokenKind::RBrace)?;
    Ok(member_types)
}

/// One or more `[...]` groups of sizes and commas: `[]`, `[,]`, `[2]`, `[][]`
fn parse_dimensions(cursor: &mut TokenCursor<'_>) -> Result<String> {
    let mut dimensions = String::new();
    while cursor.eat(TokenKind::LBracket) {
        dimensions.push('[');
        while !cursor.eat(TokenKind::RBracket) {
            match cursor.peek().copied() {
                Some(token) if matches!(token.kind, TokenKind::Number | TokenKind::Comma) => {
                    dimensions.push_str(token.text);
                    cursor.bump();
                }
                _ => return Err(cursor.error("expected array dimension or ']'".to_string())),
            }
        }
        dimensions.push(']');
    }
    Ok(dimensions)
}
