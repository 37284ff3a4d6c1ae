//! Active-path matching and auto-expansion core for hierarchical navigation
//! sidebars.
//!
//! Given a forest of groups, items, dividers, and section headers plus the
//! current page location, `sidenav` determines which leaves are active and
//! which ancestor groups must be force-expanded so the active leaf is
//! visible. One synchronous pass runs per navigation or tree-change event;
//! the pass memoizes per-node results in a cache it owns, and the tree
//! holder applies the resulting expansion set atomically.
//!
//! Rendering is out of scope: the presentation layer consumes the published
//! [`Forest`] (with authoritative `expanded` flags) and the
//! [`SidebarState::is_link_active`] predicate.

pub mod model;
pub mod ops;
pub mod parse;
pub mod preload;
pub mod state;

pub use model::{Forest, Node, NodeId, SidebarConfig};
pub use ops::{MatchPass, is_active, recompute};
pub use parse::{decode_forest, parse_forest};
pub use state::{SharedSource, SidebarState};
