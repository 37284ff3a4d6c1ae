use crate::model::{Divider, DividerStyle, Forest, Group, Item, Node, NodeId, SectionHeader};

use super::raw::{RawEntry, RawNode};

/// Error type for sidebar data decoding
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("malformed sidebar data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse sidebar data from JSON text and decode it into a forest
pub fn parse_forest(text: &str) -> Result<Forest, DecodeError> {
    let entries: Vec<RawEntry> = serde_json::from_str(text)?;
    Ok(decode_forest(&entries))
}

/// Decode raw entries into a fresh forest.
///
/// `null` slots are dropped, nested arrays are concatenated in order, and
/// each node's shape is classified exactly once into a tagged [`Node`].
/// Ids are assigned pre-order, dense from 0; a second decode of the same
/// entries yields an equal forest with equal ids.
pub fn decode_forest(entries: &[RawEntry]) -> Forest {
    let mut ids = IdGen::default();
    let mut roots = Vec::new();
    collect(entries, &mut ids, &mut roots);
    Forest::new(roots)
}

#[derive(Default)]
struct IdGen {
    next: u32,
}

impl IdGen {
    fn next(&mut self) -> NodeId {
        let id = NodeId(self.next);
        self.next += 1;
        id
    }
}

fn collect(entries: &[RawEntry], ids: &mut IdGen, out: &mut Vec<Node>) {
    for entry in entries {
        match entry {
            RawEntry::Absent => {}
            RawEntry::Many(inner) => collect(inner, ids, out),
            RawEntry::Node(raw) => out.push(decode_node(raw, ids)),
        }
    }
}

fn decode_node(raw: &RawNode, ids: &mut IdGen) -> Node {
    let id = ids.next();
    if let Some(style) = &raw.divider_type {
        return Node::Divider(Divider {
            id,
            style: if style == "dashed" {
                DividerStyle::Dashed
            } else {
                DividerStyle::Solid
            },
        });
    }
    if let Some(text) = &raw.section_header_text {
        return Node::SectionHeader(SectionHeader {
            id,
            text: text.clone(),
            tag: raw.tag.clone(),
        });
    }
    // Group-likeness is "has items": a node carrying both a link and items is
    // still a group, with its own link participating in matching.
    if let Some(items) = &raw.items {
        let mut children = Vec::new();
        collect(items, ids, &mut children);
        return Node::Group(Group {
            id,
            text: raw.text.clone().unwrap_or_default(),
            link: raw.link.clone(),
            tag: raw.tag.clone(),
            items: children,
            expanded: !raw.collapsed.unwrap_or(true),
        });
    }
    // Leaf. A missing link is tolerated: the item decodes but can never
    // become active.
    Node::Item(Item {
        id,
        text: raw.text.clone().unwrap_or_default(),
        link: raw.link.clone(),
        tag: raw.tag.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_nulls_filtered_and_arrays_flattened() {
        let forest = parse_forest(
            r#"[
                null,
                {"text": "A", "link": "/a"},
                [{"text": "B", "link": "/b"}, null, {"text": "C", "link": "/c"}],
                null
            ]"#,
        )
        .unwrap();
        let texts: Vec<&str> = forest
            .roots()
            .iter()
            .filter_map(|n| match n {
                Node::Item(i) => Some(i.text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_shape_classification() {
        let forest = parse_forest(
            r#"[
                {"dividerType": "dashed"},
                {"sectionHeaderText": "Reference", "tag": "new"},
                {"text": "Intro", "link": "/intro"},
                {"text": "Guide", "items": [{"text": "Start", "link": "/guide/start"}]}
            ]"#,
        )
        .unwrap();
        let roots = forest.roots();
        assert!(matches!(
            &roots[0],
            Node::Divider(d) if d.style == DividerStyle::Dashed
        ));
        assert!(matches!(
            &roots[1],
            Node::SectionHeader(h) if h.text == "Reference" && h.tag.as_deref() == Some("new")
        ));
        assert!(matches!(&roots[2], Node::Item(_)));
        assert!(matches!(&roots[3], Node::Group(g) if g.items.len() == 1));
    }

    #[test]
    fn test_linked_node_with_items_is_a_group() {
        let forest = parse_forest(
            r#"[{"text": "API", "link": "/api", "items": [{"text": "GET", "link": "/api/get"}]}]"#,
        )
        .unwrap();
        let group = forest.roots()[0].as_group().unwrap();
        assert_eq!(group.link.as_deref(), Some("/api"));
        assert_eq!(group.items.len(), 1);
    }

    #[test]
    fn test_collapsed_defaults() {
        let forest = parse_forest(
            r#"[
                {"text": "A", "items": []},
                {"text": "B", "items": [], "collapsed": false},
                {"text": "C", "items": [], "collapsed": true}
            ]"#,
        )
        .unwrap();
        let expanded: Vec<bool> = forest
            .roots()
            .iter()
            .map(|n| n.as_group().unwrap().expanded)
            .collect();
        assert_eq!(expanded, vec![false, true, false]);
    }

    #[test]
    fn test_malformed_node_decodes_inactive() {
        let forest = parse_forest(r#"[{"text": "orphan"}]"#).unwrap();
        let Node::Item(item) = &forest.roots()[0] else {
            panic!("expected an item");
        };
        assert_eq!(item.link, None);
    }

    #[test]
    fn test_ids_dense_and_unique() {
        let forest = parse_forest(
            r#"[
                null,
                {"text": "Guide", "items": [
                    {"text": "Start", "link": "/start"},
                    [{"text": "Next", "link": "/next"}]
                ]},
                {"dividerType": "solid"}
            ]"#,
        )
        .unwrap();
        let mut ids: Vec<usize> = forest.iter().map(|n| n.id().index()).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_redecoding_same_entries_yields_equal_forest() {
        let text = r#"[{"text": "Guide", "items": [{"text": "Start", "link": "/start"}]}]"#;
        assert_eq!(parse_forest(text).unwrap(), parse_forest(text).unwrap());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(parse_forest("not json").is_err());
        assert!(parse_forest(r#"{"text": "not an array"}"#).is_err());
    }
}
