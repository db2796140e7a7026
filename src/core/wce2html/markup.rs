//! HTML generation from the node tree.
//!
//! Depth-first, pre-order emission. Containers become class-tagged block
//! wrappers; every leaf emits a traceability comment echoing the original
//! call, and only `text` and `button` emit functional markup on top of it.

use super::ast::{LeafKind, Node, NodeId, NodeKind, Tree};
use super::{CompileWarning, WarningKind};

/// The fixed stylesheet fragment appended whenever a UI region was compiled,
/// regardless of which kinds actually occurred.
pub const DEFAULT_UI_CSS: &str = "
.wce-row { display: flex; flex-direction: row; gap: 10px; margin-bottom: 10px; }
.wce-col { display: flex; flex-direction: column; flex: 1; }
.wce-card { background: #fff; padding: 15px; border-radius: 8px; box-shadow: 0 2px 4px rgba(0,0,0,0.1); }
.wce-container { padding: 20px; }
";

/// Render a tree to markup text, collecting non-fatal warnings about
/// widgets that produced placeholder output only.
pub fn render_tree(tree: &Tree) -> (String, Vec<CompileWarning>) {
    let mut renderer = HtmlRenderer {
        tree,
        warnings: Vec::new(),
    };
    let mut output = String::new();
    for &child in &tree.node(tree.root()).children {
        renderer.render_node(child, &mut output);
    }
    (output, renderer.warnings)
}

struct HtmlRenderer<'a> {
    tree: &'a Tree,
    warnings: Vec<CompileWarning>,
}

impl HtmlRenderer<'_> {
    fn render_node(&mut self, id: NodeId, output: &mut String) {
        let node = self.tree.node(id);
        match &node.kind {
            NodeKind::Root => {
                for &child in &node.children {
                    self.render_node(child, output);
                }
            }
            NodeKind::Container(kind) => {
                output.push_str(&format!("<div class=\"wce-{}\">\n", kind.as_str()));
                for &child in &node.children {
                    self.render_node(child, output);
                }
                output.push_str("</div>\n");
            }
            NodeKind::Leaf(kind) => self.render_leaf(node, kind, output),
        }
    }

    fn render_leaf(&mut self, node: &Node, kind: &LeafKind, output: &mut String) {
        let name = node.name.as_deref().unwrap_or("");
        let args_str = node.args.join(", ");

        output.push_str(&format!("<!-- {}({}) -->\n", name, args_str));

        match kind {
            LeafKind::Text => {
                output.push_str(&format!("<span>{}</span>\n", args_str));
            }
            LeafKind::Button => {
                let label = node.args.first().map(String::as_str).unwrap_or("Button");
                let handler = node.args.get(1).map(String::as_str).unwrap_or("");
                output.push_str(&format!(
                    "<button onclick=\"{}\">{}</button>\n",
                    handler, label
                ));
            }
            LeafKind::Slider | LeafKind::Progress | LeafKind::Input => {
                self.warnings.push(CompileWarning::placeholder_widget(name));
            }
            LeafKind::Other(_) => {
                self.warnings.push(CompileWarning::unknown_widget(name));
            }
        }

        // Children of a non-container never render.
        if !node.children.is_empty() {
            self.warnings.push(CompileWarning::dropped_children(name));
        }
    }
}
