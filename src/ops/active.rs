use indexmap::{IndexMap, IndexSet};

use crate::model::{Forest, Node, NodeId};

/// The result of one recomputation pass.
///
/// Owns the pass-scoped match cache and the ordered set of groups to expand.
/// Nothing here is shared across passes: every call to [`recompute`] builds a
/// fresh `MatchPass`, and superseding a pass means dropping the old one.
#[derive(Debug, Default)]
pub struct MatchPass {
    /// Per-node active state: true if the node's own link matches the
    /// location, or any descendant's does
    cache: IndexMap<NodeId, bool>,
    /// Groups that transitively contain an active node, in post-order
    expand: IndexSet<NodeId>,
}

impl MatchPass {
    /// Whether the node (or a descendant) was active in this pass.
    ///
    /// Nodes the pass never consulted (dividers, section headers, roots
    /// outside any group) report false.
    pub fn is_active(&self, id: NodeId) -> bool {
        self.cache.get(&id).copied().unwrap_or(false)
    }

    /// The groups to force open, in the order they were discovered
    pub fn expanded(&self) -> &IndexSet<NodeId> {
        &self.expand
    }

    /// Number of nodes with a cached match result
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }
}

/// Run one active-match pass over the forest.
///
/// `matcher` decides whether a single link matches the current location
/// (see [`crate::ops::route::active_matcher`]). The walk is post-order, so
/// every child's match result is cached before its parent's is computed;
/// within one pass no link is matched more than once, even when overlapping
/// subtrees are consulted both during traversal and for ancestor matching.
///
/// The forest itself is untouched; apply the returned pass with
/// [`Forest::apply_expansion`]. An empty forest yields an empty pass.
pub fn recompute<F>(forest: &Forest, matcher: F) -> MatchPass
where
    F: Fn(&str) -> bool,
{
    let mut pass = MatchPass::default();
    for root in forest.roots() {
        expand_walk(root, &matcher, &mut pass);
    }
    pass
}

/// Bottom-up active check with memoization.
///
/// Dividers and section headers short out immediately: they have no link and
/// no children, and never enter the cache.
fn matches<F>(node: &Node, matcher: &F, pass: &mut MatchPass) -> bool
where
    F: Fn(&str) -> bool,
{
    let id = match node {
        Node::Item(i) => i.id,
        Node::Group(g) => g.id,
        _ => return false,
    };
    if let Some(&cached) = pass.cache.get(&id) {
        return cached;
    }
    if let Some(link) = node.link()
        && matcher(link)
    {
        pass.cache.insert(id, true);
        return true;
    }
    let hit = node
        .children()
        .is_some_and(|children| children.iter().any(|child| matches(child, matcher, pass)));
    pass.cache.insert(id, hit);
    hit
}

/// Post-order expansion walk: children first, then this group's own match.
fn expand_walk<F>(node: &Node, matcher: &F, pass: &mut MatchPass)
where
    F: Fn(&str) -> bool,
{
    if let Node::Group(group) = node {
        for child in &group.items {
            expand_walk(child, matcher, pass);
        }
        if matches(node, matcher, pass) {
            pass.expand.insert(group.id);
        }
    }
}
