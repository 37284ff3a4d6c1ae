use serde::Deserialize;

/// One slot of the upstream sidebar data.
///
/// The source format is permissive: a slot may be `null` (dropped during
/// decoding), a nested array of slots (flattened during decoding), or an
/// actual node object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawEntry {
    /// A `null` slot
    Absent,
    /// A nested array of slots
    Many(Vec<RawEntry>),
    /// A node object
    Node(RawNode),
}

/// An undecoded sidebar node, mirroring the upstream object shape.
///
/// Kinds are discriminated by which fields are present: `divider_type` marks
/// a divider, `section_header_text` a section header, `items` a group, and a
/// bare `link` a leaf item. Classification happens once, in
/// [`decode_forest`](super::decode_forest).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNode {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub items: Option<Vec<RawEntry>>,
    /// Collapsed state from the source; absent means collapsed
    #[serde(default)]
    pub collapsed: Option<bool>,
    /// `"dashed"` or `"solid"`
    #[serde(default)]
    pub divider_type: Option<String>,
    #[serde(default)]
    pub section_header_text: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
}
