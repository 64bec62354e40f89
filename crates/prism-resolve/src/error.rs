//! Resolution errors. Both variants are fatal for the whole build.

use prism_core::TokenPath;
use thiserror::Error;

/// Errors raised while resolving token references.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("cyclic token reference: {}", format_cycle(.cycle))]
    CyclicReference { cycle: Vec<TokenPath> },

    #[error("token '{token}' references unknown path '{reference}'")]
    DanglingReference { token: TokenPath, reference: String },

    #[error("token '{token}' has an unclosed reference in value '{raw}'")]
    UnclosedReference { token: TokenPath, raw: String },
}

fn format_cycle(cycle: &[TokenPath]) -> String {
    let mut names: Vec<String> = cycle.iter().map(TokenPath::to_string).collect();
    if let Some(first) = names.first().cloned() {
        names.push(first);
    }
    names.join(" -> ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_message_names_every_member() {
        let err = ResolveError::CyclicReference {
            cycle: vec![
                TokenPath::parse("a.b").unwrap(),
                TokenPath::parse("c.d").unwrap(),
            ],
        };
        assert_eq!(err.to_string(), "cyclic token reference: a.b -> c.d -> a.b");
    }
}
