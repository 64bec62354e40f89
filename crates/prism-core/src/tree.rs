//! The token tree container.
//!
//! Internal nodes are named groups, leaves are tokens, and children keep
//! their source-declaration order. A name maps to a group or a token, never
//! both.

use serde::{Deserialize, Serialize};

use crate::error::SourceError;
use crate::path::TokenPath;
use crate::token::Token;

/// A node in the tree: either a named group of children or a token leaf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TreeNode {
    Group(Group),
    Token(Token),
}

/// An ordered group of named children.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Group {
    children: Vec<(String, TreeNode)>,
}

impl Group {
    pub fn get(&self, name: &str) -> Option<&TreeNode> {
        self.children
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, node)| node)
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut TreeNode> {
        self.children
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, node)| node)
    }

    /// Replace the node at `name` keeping its position, or append it.
    fn set(&mut self, name: &str, node: TreeNode) {
        match self.children.iter_mut().find(|(n, _)| n == name) {
            Some((_, slot)) => *slot = node,
            None => self.children.push((name.to_string(), node)),
        }
    }

    pub fn children(&self) -> impl Iterator<Item = (&str, &TreeNode)> {
        self.children.iter().map(|(n, node)| (n.as_str(), node))
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// The canonical in-memory token tree. Read-only after loading; resolution
/// and transformation work on copies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenTree {
    root: Group,
}

impl TokenTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> &Group {
        &self.root
    }

    /// Insert a token at its path, creating intermediate groups.
    ///
    /// A token already present at the path is replaced (last-wins merge
    /// semantics). A group at the leaf path, or a token at an intermediate
    /// path, is an `AmbiguousNode` error.
    pub fn insert(&mut self, token: Token) -> Result<(), SourceError> {
        let segments = token.path.segments();
        let Some((leaf, groups)) = segments.split_last() else {
            return Err(SourceError::InvalidSegment {
                path: String::new(),
                segment: String::new(),
            });
        };

        let mut current = &mut self.root;
        let mut walked = TokenPath::root();
        for segment in groups {
            walked = walked.child(segment);
            if current.get(segment).is_none() {
                current.set(segment, TreeNode::Group(Group::default()));
            }
            current = match current.get_mut(segment) {
                Some(TreeNode::Group(group)) => group,
                Some(TreeNode::Token(_)) => {
                    return Err(SourceError::AmbiguousNode {
                        path: walked.to_string(),
                    });
                }
                None => unreachable!("group was just inserted"),
            };
        }

        let leaf = leaf.clone();
        match current.get(&leaf) {
            Some(TreeNode::Group(_)) => Err(SourceError::AmbiguousNode {
                path: token.path.to_string(),
            }),
            _ => {
                current.set(&leaf, TreeNode::Token(token));
                Ok(())
            }
        }
    }

    /// Look up a token by exact path.
    pub fn lookup(&self, path: &TokenPath) -> Option<&Token> {
        let mut node: Option<&TreeNode> = None;
        let mut group = &self.root;
        for segment in path.segments() {
            node = group.get(segment);
            match node {
                Some(TreeNode::Group(g)) => group = g,
                Some(TreeNode::Token(_)) | None => break,
            }
        }
        // Only a full walk that ended on a token at the final segment counts.
        match node {
            Some(TreeNode::Token(token)) if token.path == *path => Some(token),
            _ => None,
        }
    }

    /// All tokens, depth-first, children in source-declaration order.
    pub fn flatten(&self) -> Vec<&Token> {
        let mut out = Vec::new();
        fn walk<'a>(group: &'a Group, out: &mut Vec<&'a Token>) {
            for (_, node) in group.children() {
                match node {
                    TreeNode::Token(token) => out.push(token),
                    TreeNode::Group(child) => walk(child, out),
                }
            }
        }
        walk(&self.root, &mut out);
        out
    }

    /// Visit every token mutably, in flattened order.
    pub fn for_each_token_mut<F: FnMut(&mut Token)>(&mut self, mut f: F) {
        fn walk<F: FnMut(&mut Token)>(group: &mut Group, f: &mut F) {
            for (_, node) in group.children.iter_mut() {
                match node {
                    TreeNode::Token(token) => f(token),
                    TreeNode::Group(child) => walk(child, f),
                }
            }
        }
        walk(&mut self.root, &mut f);
    }

    /// All tokens by value, in flattened order, consuming the tree.
    pub fn into_tokens(self) -> Vec<Token> {
        fn walk(group: Group, out: &mut Vec<Token>) {
            for (_, node) in group.children {
                match node {
                    TreeNode::Token(token) => out.push(token),
                    TreeNode::Group(child) => walk(child, out),
                }
            }
        }
        let mut out = Vec::new();
        walk(self.root, &mut out);
        out
    }

    /// Deep-union merge: `other`'s tokens override tokens at the same path
    /// (last-wins), groups merge recursively, new names append after
    /// existing ones.
    pub fn merge(&mut self, other: TokenTree) -> Result<(), SourceError> {
        for token in other.into_tokens() {
            self.insert(token)?;
        }
        Ok(())
    }

    pub fn token_count(&self) -> usize {
        self.flatten().len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenType;
    use crate::value::TokenValue;

    fn token(path: &str, value: &str) -> Token {
        Token::new(
            TokenPath::parse(path).unwrap(),
            TokenValue::Str(value.to_string()),
            TokenType::Color,
        )
    }

    #[test]
    fn insert_and_lookup() {
        let mut tree = TokenTree::new();
        tree.insert(token("color.base.red", "#ff0000")).unwrap();

        let path = TokenPath::parse("color.base.red").unwrap();
        let found = tree.lookup(&path).unwrap();
        assert_eq!(found.value, TokenValue::Str("#ff0000".to_string()));

        assert!(tree.lookup(&TokenPath::parse("color.base").unwrap()).is_none());
        assert!(tree.lookup(&TokenPath::parse("color.base.blue").unwrap()).is_none());
    }

    #[test]
    fn flatten_preserves_declaration_order() {
        let mut tree = TokenTree::new();
        tree.insert(token("color.red", "#ff0000")).unwrap();
        tree.insert(token("size.base", "16")).unwrap();
        tree.insert(token("color.blue", "#0000ff")).unwrap();

        let paths: Vec<String> = tree.flatten().iter().map(|t| t.path.to_string()).collect();
        // color.blue lands inside the existing color group, before size.base.
        assert_eq!(paths, vec!["color.red", "color.blue", "size.base"]);
    }

    #[test]
    fn token_under_token_is_ambiguous() {
        let mut tree = TokenTree::new();
        tree.insert(token("color.red", "#ff0000")).unwrap();

        let err = tree.insert(token("color.red.dark", "#990000")).unwrap_err();
        assert!(matches!(err, SourceError::AmbiguousNode { path } if path == "color.red"));
    }

    #[test]
    fn group_at_leaf_is_ambiguous() {
        let mut tree = TokenTree::new();
        tree.insert(token("color.red.dark", "#990000")).unwrap();

        let err = tree.insert(token("color.red", "#ff0000")).unwrap_err();
        assert!(matches!(err, SourceError::AmbiguousNode { path } if path == "color.red"));
    }

    #[test]
    fn merge_is_last_wins() {
        let mut base = TokenTree::new();
        base.insert(token("a.b", "first")).unwrap();
        base.insert(token("a.c", "keep")).unwrap();

        let mut overlay = TokenTree::new();
        overlay.insert(token("a.b", "second")).unwrap();
        overlay.insert(token("d.e", "new")).unwrap();

        base.merge(overlay).unwrap();
        assert_eq!(base.token_count(), 3);

        let b = base.lookup(&TokenPath::parse("a.b").unwrap()).unwrap();
        assert_eq!(b.value, TokenValue::Str("second".to_string()));

        // overridden key keeps its original position
        let paths: Vec<String> = base.flatten().iter().map(|t| t.path.to_string()).collect();
        assert_eq!(paths, vec!["a.b", "a.c", "d.e"]);
    }
}
