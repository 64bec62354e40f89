//! Name transforms: token path → output identifier.

use std::fmt;

use prism_core::TokenPath;

/// Computes a token's output identifier from its path.
///
/// Object-safe so transforms can be stored in `Box<dyn NameTransform>`.
pub trait NameTransform: fmt::Debug + Send + Sync {
    /// Registry name, e.g. `name/kebab`.
    fn name(&self) -> &str;

    fn apply(&self, path: &TokenPath) -> String;
}

/// Identifier casing convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Case {
    Kebab,
    Camel,
    Pascal,
    Snake,
    Constant,
}

/// Case-convention name transform over the path's words.
#[derive(Debug)]
pub struct CaseTransform {
    name: &'static str,
    case: Case,
}

impl CaseTransform {
    pub fn kebab() -> Self {
        Self {
            name: "name/kebab",
            case: Case::Kebab,
        }
    }

    pub fn camel() -> Self {
        Self {
            name: "name/camel",
            case: Case::Camel,
        }
    }

    pub fn pascal() -> Self {
        Self {
            name: "name/pascal",
            case: Case::Pascal,
        }
    }

    pub fn snake() -> Self {
        Self {
            name: "name/snake",
            case: Case::Snake,
        }
    }

    pub fn constant() -> Self {
        Self {
            name: "name/constant",
            case: Case::Constant,
        }
    }
}

impl NameTransform for CaseTransform {
    fn name(&self) -> &str {
        self.name
    }

    fn apply(&self, path: &TokenPath) -> String {
        let words = words(path);
        match self.case {
            Case::Kebab => words.join("-"),
            Case::Snake => words.join("_"),
            Case::Constant => words
                .iter()
                .map(|w| w.to_uppercase())
                .collect::<Vec<_>>()
                .join("_"),
            Case::Camel => {
                let mut out = String::new();
                for (i, word) in words.iter().enumerate() {
                    if i == 0 {
                        out.push_str(word);
                    } else {
                        out.push_str(&capitalize(word));
                    }
                }
                out
            }
            Case::Pascal => words.iter().map(|w| capitalize(w)).collect(),
        }
    }
}

/// Lowercase words of a path: each segment split on `-`, `_` and spaces.
fn words(path: &TokenPath) -> Vec<String> {
    path.segments()
        .iter()
        .flat_map(|segment| segment.split(['-', '_', ' ']))
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
