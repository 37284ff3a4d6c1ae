/// Error type for link preloading
#[derive(Debug, thiserror::Error)]
pub enum PreloadError {
    #[error("no route matches link: {0}")]
    NoRoute(String),
    #[error("preload failed: {0}")]
    Failed(String),
}

/// Warms whatever resource a link will need before the user navigates to it.
///
/// Implemented by the consumer against its own route table. Preloading is
/// fire-and-forget: [`crate::state::SidebarState::preload`] logs failures and
/// drops them, so an implementation can report errors freely without ever
/// affecting match computation.
pub trait Preloader {
    fn preload(&self, link: &str) -> Result<(), PreloadError>;
}

/// Preloader for consumers without a route table. Always succeeds, does
/// nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPreloader;

impl Preloader for NoopPreloader {
    fn preload(&self, _link: &str) -> Result<(), PreloadError> {
        Ok(())
    }
}
