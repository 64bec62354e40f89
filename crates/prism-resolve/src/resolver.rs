//! Reference resolution over a token tree.
//!
//! Resolution walks the dependency graph depth-first with an explicit
//! visitation stack: the stack both orders resolution (dependencies first)
//! and recovers the full cycle path when one exists. The canonical tree is
//! never mutated; the result is a new tree with every placeholder replaced.

use std::collections::HashMap;

use prism_core::{Token, TokenPath, TokenTree, TokenValue};

use crate::error::ResolveError;
use crate::reference::{scan, sole_reference, Piece};

/// Resolve every token reference in `tree`, producing a new tree in which
/// no value contains placeholder syntax.
///
/// Substitution rules:
/// - a value that is exactly one placeholder inherits the referenced
///   token's resolved value kind (a number stays a number);
/// - a placeholder amid other text substitutes textually and the result is
///   a string.
pub fn resolve(tree: &TokenTree) -> Result<TokenTree, ResolveError> {
    let mut done: HashMap<TokenPath, TokenValue> = HashMap::new();
    let mut stack: Vec<TokenPath> = Vec::new();

    for token in tree.flatten() {
        resolve_token(tree, token, &mut done, &mut stack)?;
    }

    let mut resolved = tree.clone();
    resolved.for_each_token_mut(|token| {
        if let Some(value) = done.get(&token.path) {
            token.value = value.clone();
        }
    });
    Ok(resolved)
}

fn resolve_token(
    tree: &TokenTree,
    token: &Token,
    done: &mut HashMap<TokenPath, TokenValue>,
    stack: &mut Vec<TokenPath>,
) -> Result<TokenValue, ResolveError> {
    if let Some(value) = done.get(&token.path) {
        return Ok(value.clone());
    }
    if let Some(pos) = stack.iter().position(|p| *p == token.path) {
        return Err(ResolveError::CyclicReference {
            cycle: stack[pos..].to_vec(),
        });
    }

    let raw = match &token.value {
        TokenValue::Str(s) => s.clone(),
        literal => {
            done.insert(token.path.clone(), literal.clone());
            return Ok(literal.clone());
        }
    };

    let pieces = scan(&raw).ok_or_else(|| ResolveError::UnclosedReference {
        token: token.path.clone(),
        raw: raw.clone(),
    })?;

    if !pieces.iter().any(|p| matches!(p, Piece::Reference(_))) {
        let value = TokenValue::Str(raw);
        done.insert(token.path.clone(), value.clone());
        return Ok(value);
    }

    stack.push(token.path.clone());
    let result = substitute(tree, token, &pieces, done, stack);
    stack.pop();

    let value = result?;
    done.insert(token.path.clone(), value.clone());
    Ok(value)
}

fn substitute(
    tree: &TokenTree,
    token: &Token,
    pieces: &[Piece],
    done: &mut HashMap<TokenPath, TokenValue>,
    stack: &mut Vec<TokenPath>,
) -> Result<TokenValue, ResolveError> {
    // Whole-value reference: inherit the referenced token's kind.
    if let Some(reference) = sole_reference(pieces) {
        let target = find_target(tree, &token.path, reference)?;
        return resolve_token(tree, target, done, stack);
    }

    let mut out = String::new();
    for piece in pieces {
        match piece {
            Piece::Literal(text) => out.push_str(text),
            Piece::Reference(reference) => {
                let target = find_target(tree, &token.path, reference)?;
                let value = resolve_token(tree, target, done, stack)?;
                out.push_str(&value.to_string());
            }
        }
    }
    Ok(TokenValue::Str(out))
}

/// Find the token a placeholder names. A trailing `.value` segment is
/// accepted and stripped when no token exists at the literal path.
fn find_target<'t>(
    tree: &'t TokenTree,
    referrer: &TokenPath,
    reference: &str,
) -> Result<&'t Token, ResolveError> {
    if let Some(path) = TokenPath::parse(reference.trim()) {
        if let Some(token) = tree.lookup(&path) {
            return Ok(token);
        }
        if path.len() > 1 && path.leaf() == Some("value") {
            let stripped =
                TokenPath::from_segments(path.segments()[..path.len() - 1].to_vec());
            if let Some(token) = tree.lookup(&stripped) {
                return Ok(token);
            }
        }
    }
    Err(ResolveError::DanglingReference {
        token: referrer.clone(),
        reference: reference.to_string(),
    })
}
