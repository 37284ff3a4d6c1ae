use std::fmt::Write as _;

use indexmap::IndexSet;
use serde::Serialize;

use super::node::{Node, NodeId};

/// The ordered sequence of root-level sidebar nodes.
///
/// This is the working copy owned by the tree holder: it is built fresh from
/// the upstream source on every tree change (never patched) and mutated only
/// by [`Forest::apply_expansion`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Forest {
    roots: Vec<Node>,
}

impl Forest {
    pub(crate) fn new(roots: Vec<Node>) -> Self {
        Forest { roots }
    }

    pub fn empty() -> Self {
        Forest::default()
    }

    pub fn roots(&self) -> &[Node] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Number of root-level nodes (not a deep count)
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// Depth-first pre-order walk over every node in the forest
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        let mut stack: Vec<&Node> = self.roots.iter().rev().collect();
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            if let Some(children) = node.children() {
                stack.extend(children.iter().rev());
            }
            Some(node)
        })
    }

    pub fn find(&self, id: NodeId) -> Option<&Node> {
        self.iter().find(|n| n.id() == id)
    }

    /// Apply a recomputation pass's expansion set as one atomic update.
    ///
    /// Monotonic: groups in the set are forced open, groups outside it keep
    /// whatever flag they already had. Nothing is ever collapsed here.
    pub fn apply_expansion(&mut self, expand: &IndexSet<NodeId>) {
        fn walk(node: &mut Node, expand: &IndexSet<NodeId>) {
            if let Node::Group(group) = node {
                if expand.contains(&group.id) {
                    group.expanded = true;
                }
                for child in &mut group.items {
                    walk(child, expand);
                }
            }
        }
        for root in &mut self.roots {
            walk(root, expand);
        }
    }

    /// Plain-text dump of the tree for logs and snapshot tests.
    ///
    /// `v`/`>` mark expanded/collapsed groups; depth is derived during the
    /// walk, two spaces per level.
    pub fn outline(&self) -> String {
        fn walk(node: &Node, depth: usize, out: &mut String) {
            let indent = "  ".repeat(depth);
            match node {
                Node::Divider(_) => {
                    let _ = writeln!(out, "{indent}----");
                }
                Node::SectionHeader(h) => {
                    let _ = writeln!(out, "{indent}== {} ==", h.text);
                }
                Node::Item(item) => match &item.link {
                    Some(link) => {
                        let _ = writeln!(out, "{indent}- {} ({})", item.text, link);
                    }
                    None => {
                        let _ = writeln!(out, "{indent}- {}", item.text);
                    }
                },
                Node::Group(group) => {
                    let marker = if group.expanded { 'v' } else { '>' };
                    let _ = writeln!(out, "{indent}{marker} {}", group.text);
                    for child in &group.items {
                        walk(child, depth + 1, out);
                    }
                }
            }
        }
        let mut out = String::new();
        for root in &self.roots {
            walk(root, 0, &mut out);
        }
        out
    }
}
