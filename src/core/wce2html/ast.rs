//! Tree node model for the UI language.
//!
//! Nodes live in an id-indexed arena owned by [`Tree`]; parent/child links
//! are [`NodeId`] handles, which keeps the builder's context stack a plain
//! vector of ids. A tree is built once per parse invocation and discarded
//! after rendering.

/// The call-name prefix that marks a statement as part of the UI language.
pub const CALL_PREFIX: &str = "wce_";

/// Container kinds: constructs of the form `name({ ... })` that wrap their
/// children in a block element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    Row,
    Col,
    Card,
    Container,
    Panel,
}

impl ContainerKind {
    /// Map a prefix-stripped call name to a container kind.
    ///
    /// `column` is normalized to [`ContainerKind::Col`] here, once, so the
    /// renderer never has to compare name spellings.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "row" => Some(ContainerKind::Row),
            "col" | "column" => Some(ContainerKind::Col),
            "card" => Some(ContainerKind::Card),
            "container" => Some(ContainerKind::Container),
            "panel" => Some(ContainerKind::Panel),
            _ => None,
        }
    }

    /// The kind name used in the emitted `wce-<kind>` class.
    pub fn as_str(self) -> &'static str {
        match self {
            ContainerKind::Row => "row",
            ContainerKind::Col => "col",
            ContainerKind::Card => "card",
            ContainerKind::Container => "container",
            ContainerKind::Panel => "panel",
        }
    }
}

/// Leaf kinds: terminal widgets with a flat argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeafKind {
    Text,
    Button,
    Slider,
    Progress,
    Input,
    /// Any other call name, kept verbatim (prefix already stripped).
    Other(String),
}

impl LeafKind {
    pub fn from_name(name: &str) -> Self {
        match name {
            "text" => LeafKind::Text,
            "button" => LeafKind::Button,
            "slider" => LeafKind::Slider,
            "progress" => LeafKind::Progress,
            "input" => LeafKind::Input,
            other => LeafKind::Other(other.to_string()),
        }
    }
}

/// A node's kind. Derivation is name-based: whether a call used the brace
/// form only decides where its children go, not what kind it gets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Root,
    Container(ContainerKind),
    Leaf(LeafKind),
}

impl NodeKind {
    /// Derive the kind from a call name with the `wce_` prefix stripped.
    pub fn from_call_name(name: &str) -> Self {
        match ContainerKind::from_name(name) {
            Some(kind) => NodeKind::Container(kind),
            None => NodeKind::Leaf(LeafKind::from_name(name)),
        }
    }

    pub fn is_container(&self) -> bool {
        matches!(self, NodeKind::Container(_))
    }
}

/// Handle to a node inside a [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(u32);

impl NodeId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// A single tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    /// The original call name (`wce_row`, `wce_text`, ...); `None` only for
    /// the root.
    pub name: Option<String>,
    /// Raw argument strings, in declaration order. Leaf constructs only.
    pub args: Vec<String>,
    /// Child ids in declaration order. Populated through container scopes.
    pub children: Vec<NodeId>,
}

/// The ownership tree for one parse invocation.
#[derive(Debug)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    /// Create a tree holding only the distinguished root node.
    pub fn new() -> Self {
        Tree {
            nodes: vec![Node {
                kind: NodeKind::Root,
                name: None,
                args: Vec::new(),
                children: Vec::new(),
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Allocate a node and return its handle.
    pub fn alloc(&mut self, kind: NodeKind, name: String, args: Vec<String>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            kind,
            name: Some(name),
            args,
            children: Vec::new(),
        });
        id
    }

    /// Append `child` to `parent`'s child list.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[parent.index()].children.push(child);
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all nodes in allocation order, root included.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_normalized_to_col() {
        assert_eq!(ContainerKind::from_name("column"), Some(ContainerKind::Col));
        assert_eq!(ContainerKind::from_name("col"), Some(ContainerKind::Col));
        assert_eq!(ContainerKind::Col.as_str(), "col");
    }

    #[test]
    fn test_kind_derivation_is_name_based() {
        assert_eq!(
            NodeKind::from_call_name("row"),
            NodeKind::Container(ContainerKind::Row)
        );
        assert_eq!(NodeKind::from_call_name("text"), NodeKind::Leaf(LeafKind::Text));
        assert_eq!(
            NodeKind::from_call_name("gauge"),
            NodeKind::Leaf(LeafKind::Other("gauge".to_string()))
        );
    }

    #[test]
    fn test_tree_starts_with_root_only() {
        let tree = Tree::new();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.node(tree.root()).kind, NodeKind::Root);
        assert!(tree.node(tree.root()).children.is_empty());
    }

    #[test]
    fn test_children_keep_declaration_order() {
        let mut tree = Tree::new();
        let root = tree.root();
        let a = tree.alloc(
            NodeKind::Leaf(LeafKind::Text),
            "wce_text".to_string(),
            vec!["a".to_string()],
        );
        let b = tree.alloc(
            NodeKind::Leaf(LeafKind::Text),
            "wce_text".to_string(),
            vec!["b".to_string()],
        );
        tree.add_child(root, a);
        tree.add_child(root, b);
        assert_eq!(tree.node(root).children, vec![a, b]);
    }
}
