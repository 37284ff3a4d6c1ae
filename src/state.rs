use std::sync::Arc;

use crate::model::{Forest, SidebarConfig};
use crate::ops::active::{MatchPass, recompute};
use crate::ops::route::{active_matcher, decode_path};
use crate::parse::{RawEntry, decode_forest};
use crate::preload::Preloader;

/// The upstream sidebar data, shared by reference.
///
/// The provider must hand out a new `Arc` whenever the contents change
/// (locale switch, config reload); pointer identity is the only tree-change
/// signal the holder consumes.
pub type SharedSource = Arc<Vec<RawEntry>>;

/// Owns the working sidebar forest and drives recomputation.
///
/// One `sync` call per navigation or tree-change event: the working copy is
/// rebuilt only when the source reference changed, a match pass runs when
/// either the source or the location changed, and the pass's expansion set is
/// applied as one atomic update before the forest is read again. Each pass
/// fully supersedes the previous one.
#[derive(Debug, Default)]
pub struct SidebarState {
    config: SidebarConfig,
    /// Last-seen upstream reference
    source: Option<SharedSource>,
    /// Published working forest
    data: Forest,
    /// Decoded current location
    location: String,
    last_pass: Option<MatchPass>,
}

impl SidebarState {
    pub fn new(config: SidebarConfig) -> Self {
        SidebarState {
            config,
            ..SidebarState::default()
        }
    }

    /// The published forest, expansion flags included
    pub fn data(&self) -> &Forest {
        &self.data
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// The most recent pass, for introspection (per-node active state)
    pub fn last_pass(&self) -> Option<&MatchPass> {
        self.last_pass.as_ref()
    }

    /// React to a navigation or tree-change event.
    ///
    /// Returns whether a recomputation pass ran. The only no-op case is an
    /// upstream reference identical to the last-published one combined with
    /// an unchanged (decoded) location.
    pub fn sync(&mut self, source: &SharedSource, raw_location: &str) -> bool {
        let pathname = decode_path(raw_location);
        let tree_changed = !self
            .source
            .as_ref()
            .is_some_and(|last| Arc::ptr_eq(last, source));
        if !tree_changed && pathname == self.location {
            return false;
        }
        if tree_changed {
            // Fresh flatten, fresh ids. Expansion flags reset to the
            // source's defaults; the pass below re-opens the active chain.
            self.data = decode_forest(source);
            self.source = Some(Arc::clone(source));
        }
        self.location = pathname;

        let matcher = active_matcher(&self.config, &self.location);
        let pass = recompute(&self.data, matcher);
        self.data.apply_expansion(pass.expanded());
        log::debug!(
            "sidebar pass for {}: {} nodes cached, {} groups expanded",
            self.location,
            pass.cache_len(),
            pass.expanded().len()
        );
        self.last_pass = Some(pass);
        true
    }

    /// Render-time active check for a single link.
    ///
    /// Re-derived on every call from the config and current location; this
    /// deliberately does not consult the pass cache.
    pub fn is_link_active(&self, link: &str) -> bool {
        active_matcher(&self.config, &self.location)(link)
    }

    /// Ask `preloader` to warm the resource behind `link`.
    ///
    /// Failures are logged and dropped; preloading can never affect the
    /// published tree or the match state.
    pub fn preload(&self, preloader: &dyn Preloader, link: &str) {
        if let Err(err) = preloader.preload(link) {
            log::debug!("preload failed for {}: {}", link, err);
        }
    }
}
