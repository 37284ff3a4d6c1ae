use serde::Serialize;

/// Stable per-node handle, assigned sequentially at decode time.
///
/// Identity keys the per-pass match cache: a rebuilt forest gets fresh ids,
/// so cache entries from one tree can never be read against another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// The raw index value (ids are dense, starting at 0 per decode).
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Visual style of a divider line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DividerStyle {
    Dashed,
    Solid,
}

/// A visual separator. Never active, never expandable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Divider {
    pub id: NodeId,
    pub style: DividerStyle,
}

/// A non-navigable label, optionally with a small tag badge
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionHeader {
    pub id: NodeId,
    pub text: String,
    pub tag: Option<String>,
}

/// A navigable leaf: display text plus a target link.
///
/// `link` is `None` for malformed source nodes (no link, no children); such
/// leaves stay in the tree but can never become active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub id: NodeId,
    pub text: String,
    pub link: Option<String>,
    pub tag: Option<String>,
}

/// A named container of child nodes with an expansion flag.
///
/// `expanded` defaults to false (collapsed) unless the source data says
/// otherwise. Within one recomputation pass it is only ever forced `true`;
/// collapsing is a user action recorded upstream, never something the
/// matching algorithm does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    pub id: NodeId,
    pub text: String,
    /// Groups may carry their own navigable link
    pub link: Option<String>,
    pub tag: Option<String>,
    pub items: Vec<Node>,
    pub expanded: bool,
}

/// One node of the sidebar tree, tagged by kind.
///
/// The raw source discriminates kinds by shape (`dividerType`,
/// `sectionHeaderText`, `items`, `link`); decoding resolves that exactly once,
/// so everything downstream matches on this enum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Node {
    Divider(Divider),
    SectionHeader(SectionHeader),
    Item(Item),
    Group(Group),
}

impl Node {
    pub fn id(&self) -> NodeId {
        match self {
            Node::Divider(d) => d.id,
            Node::SectionHeader(h) => h.id,
            Node::Item(i) => i.id,
            Node::Group(g) => g.id,
        }
    }

    /// The node's own target link, if it has one
    pub fn link(&self) -> Option<&str> {
        match self {
            Node::Item(i) => i.link.as_deref(),
            Node::Group(g) => g.link.as_deref(),
            _ => None,
        }
    }

    /// Child nodes, for group-like nodes
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Group(g) => Some(&g.items),
            _ => None,
        }
    }

    pub fn as_group(&self) -> Option<&Group> {
        match self {
            Node::Group(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_group_mut(&mut self) -> Option<&mut Group> {
        match self {
            Node::Group(g) => Some(g),
            _ => None,
        }
    }

    /// True for nodes that participate in active matching (items and groups)
    pub fn is_navigable(&self) -> bool {
        matches!(self, Node::Item(_) | Node::Group(_))
    }
}
