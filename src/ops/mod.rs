pub mod active;
pub mod route;

pub use active::{MatchPass, recompute};
pub use route::{active_matcher, decode_path, is_active, normalize_slash};
