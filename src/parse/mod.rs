pub mod decode;
pub mod raw;

pub use decode::{DecodeError, decode_forest, parse_forest};
pub use raw::{RawEntry, RawNode};
