//! The transform engine: token tree + transform group → resolved tree.

use prism_core::{ResolvedToken, ResolvedTree, TokenTree};

use crate::error::TransformError;
use crate::group::TransformGroup;
use crate::registry::TransformRegistry;

/// Apply a transform group to every token of an already reference-resolved
/// tree, producing the flat resolved view renderers consume.
///
/// Value transforms whose predicate matches a token chain in group order;
/// the name transform runs last. Transform names resolve against the
/// registry up front, so a group naming an unknown transform fails before
/// any token is touched.
pub fn apply(
    tree: &TokenTree,
    group: &TransformGroup,
    registry: &TransformRegistry,
) -> Result<ResolvedTree, TransformError> {
    let value_transforms = group
        .value_transforms
        .iter()
        .map(|name| registry.value_transform(name))
        .collect::<Result<Vec<_>, _>>()?;
    let name_transform = registry.name_transform(&group.name_transform)?;

    let mut resolved = ResolvedTree::new(group.name.clone());
    for token in tree.flatten() {
        let mut value = token.value.clone();
        for transform in &value_transforms {
            if transform.matches(token) {
                value = transform.apply(&value, token)?;
            }
        }

        resolved.push(ResolvedToken {
            path: token.path.clone(),
            name: name_transform.apply(&token.path),
            value,
            token_type: token.token_type.clone(),
            comment: token.comment.clone(),
            attributes: token.attributes.clone(),
        });
    }
    Ok(resolved)
}
