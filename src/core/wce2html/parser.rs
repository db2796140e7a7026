//! Recursive-descent builder for the UI language.
//!
//! Consumes a token stream and produces the node tree. Nesting is tracked
//! with an explicit stack of node ids; the stack always holds at least the
//! root, and its top is the node currently accepting children. A builder is
//! single-use: create a fresh one per source region.

use super::ast::{NodeKind, NodeId, Tree, CALL_PREFIX};
use super::engine::{tokenize, TokenKind, TokenStream};
use crate::utils::error::{CompileError, CompileResult};

/// Hard cap on container nesting. Deeper input aborts the build instead of
/// recursing without bound.
pub const MAX_NESTING_DEPTH: usize = 64;

/// Single-use tree builder.
pub struct UiBuilder {
    tree: Tree,
    stack: Vec<NodeId>,
}

impl UiBuilder {
    pub fn new() -> Self {
        let tree = Tree::new();
        let root = tree.root();
        UiBuilder {
            tree,
            stack: vec![root],
        }
    }

    /// Tokenize `source` and build the tree, consuming the builder.
    ///
    /// The first grammar violation aborts the whole build; no partial tree is
    /// returned.
    pub fn build(mut self, source: &str) -> CompileResult<Tree> {
        let mut tokens = tokenize(source);
        while !tokens.check(TokenKind::Eof) {
            if tokens.peek().is_none() {
                break;
            }
            self.statement(&mut tokens)?;
        }
        Ok(self.tree)
    }

    /// The node currently accepting children.
    fn current(&self) -> NodeId {
        self.stack.last().copied().unwrap_or_else(|| self.tree.root())
    }

    /// One statement: a `wce_`-prefixed call, or a single skipped token.
    fn statement(&mut self, tokens: &mut TokenStream) -> CompileResult<Option<NodeId>> {
        if tokens.check_prefix(TokenKind::Ident, CALL_PREFIX) {
            self.function_scope(tokens).map(Some)
        } else {
            // Unrecognized statements are skipped, not reported.
            tokens.consume();
            Ok(None)
        }
    }

    /// A call after its name has been recognized: either a container scope
    /// `name({ ... })` or a flat leaf call `name(arg, ...)`.
    fn function_scope(&mut self, tokens: &mut TokenStream) -> CompileResult<NodeId> {
        let name = tokens.expect(TokenKind::Ident)?;
        tokens.expect(TokenKind::LParen)?;

        if tokens.check(TokenKind::LBrace) {
            tokens.consume();
            self.container_scope(tokens, name.text)
        } else {
            self.leaf_call(tokens, name.text)
        }
    }

    /// Container body after `name({`. The node is attached to the current
    /// stack top, then pushed so nested statements land inside it.
    fn container_scope(&mut self, tokens: &mut TokenStream, name: String) -> CompileResult<NodeId> {
        if self.stack.len() >= MAX_NESTING_DEPTH {
            return Err(CompileError::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
            });
        }

        let kind = NodeKind::from_call_name(strip_prefix(&name));
        let node = self.tree.alloc(kind, name, Vec::new());
        self.tree.add_child(self.current(), node);
        self.stack.push(node);

        while !tokens.check(TokenKind::RBrace) && !tokens.check(TokenKind::Eof) {
            self.statement(tokens)?;
            if tokens.check(TokenKind::Semicolon) {
                tokens.consume();
            }
        }

        tokens.expect(TokenKind::RBrace)?;
        tokens.expect(TokenKind::RParen)?;
        if tokens.check(TokenKind::Semicolon) {
            tokens.consume();
        }

        self.stack.pop();
        Ok(node)
    }

    /// Leaf argument list after `name(`. The capture is flat: every token's
    /// text up to the first `)` is recorded verbatim, commas separating.
    /// Nested parentheses and braces are not matched structurally.
    fn leaf_call(&mut self, tokens: &mut TokenStream, name: String) -> CompileResult<NodeId> {
        let mut args = Vec::new();
        while !tokens.check(TokenKind::RParen) && !tokens.check(TokenKind::Eof) {
            if let Some(token) = tokens.consume() {
                if token.kind != TokenKind::Comma {
                    args.push(token.text);
                }
            } else {
                break;
            }
        }

        tokens.expect(TokenKind::RParen)?;
        if tokens.check(TokenKind::Semicolon) {
            tokens.consume();
        }

        let kind = NodeKind::from_call_name(strip_prefix(&name));
        let node = self.tree.alloc(kind, name, args);
        self.tree.add_child(self.current(), node);
        Ok(node)
    }
}

impl Default for UiBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn strip_prefix(name: &str) -> &str {
    name.strip_prefix(CALL_PREFIX).unwrap_or(name)
}

/// Build the node tree for one UI region.
pub fn build_tree(source: &str) -> CompileResult<Tree> {
    UiBuilder::new().build(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::wce2html::ast::{ContainerKind, LeafKind};

    #[test]
    fn test_nested_container_and_leaf() {
        let tree = build_tree("wce_row({ wce_text(\"Hello\"); });").unwrap();
        let root = tree.node(tree.root());
        assert_eq!(root.children.len(), 1);

        let row = tree.node(root.children[0]);
        assert_eq!(row.kind, NodeKind::Container(ContainerKind::Row));
        assert_eq!(row.name.as_deref(), Some("wce_row"));
        assert_eq!(row.children.len(), 1);

        let text = tree.node(row.children[0]);
        assert_eq!(text.kind, NodeKind::Leaf(LeafKind::Text));
        assert_eq!(text.args, vec!["Hello"]);
    }

    #[test]
    fn test_top_level_leaf_args() {
        let tree = build_tree("wce_button(\"Click\", \"go()\");").unwrap();
        let root = tree.node(tree.root());
        let button = tree.node(root.children[0]);
        assert_eq!(button.args, vec!["Click", "go()"]);
    }

    #[test]
    fn test_column_rewritten_to_col() {
        let tree = build_tree("wce_column({ wce_row({}); });").unwrap();
        let col = tree.node(tree.node(tree.root()).children[0]);
        assert_eq!(col.kind, NodeKind::Container(ContainerKind::Col));
        // The original call name is kept.
        assert_eq!(col.name.as_deref(), Some("wce_column"));
    }

    #[test]
    fn test_missing_close_brace_aborts() {
        let err = build_tree("wce_row({ wce_text(\"x\");").unwrap_err();
        match err {
            CompileError::Grammar(g) => {
                assert_eq!(g.expected, TokenKind::RBrace);
                assert_eq!(g.found.map(|t| t.kind), Some(TokenKind::Eof));
            }
            other => panic!("expected grammar error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_open_paren_aborts() {
        let err = build_tree("wce_row{}").unwrap_err();
        match err {
            CompileError::Grammar(g) => assert_eq!(g.expected, TokenKind::LParen),
            other => panic!("expected grammar error, got {other:?}"),
        }
    }

    #[test]
    fn test_unrecognized_statements_skipped() {
        let tree = build_tree("int x; wce_text(\"y\"); foo();").unwrap();
        let root = tree.node(tree.root());
        assert_eq!(root.children.len(), 1);
        assert_eq!(tree.node(root.children[0]).args, vec!["y"]);
    }

    #[test]
    fn test_flat_capture_does_not_match_nested_parens() {
        // The inner ')' terminates the capture; leftovers are skipped as
        // unrecognized statements.
        let tree = build_tree("wce_text(\"a\", bar(1));").unwrap();
        let text = tree.node(tree.node(tree.root()).children[0]);
        assert_eq!(text.args, vec!["a", "bar", "(", "1"]);
    }

    #[test]
    fn test_stack_balanced_after_build() {
        let mut builder = UiBuilder::new();
        let mut tokens = tokenize("wce_row({ wce_col({ wce_text(\"x\"); }); });");
        builder.statement(&mut tokens).unwrap();
        assert_eq!(builder.stack.len(), 1);
        assert_eq!(builder.stack[0], builder.tree.root());
    }

    #[test]
    fn test_deep_nesting_hits_guard() {
        let mut source = String::new();
        for _ in 0..MAX_NESTING_DEPTH + 1 {
            source.push_str("wce_row({ ");
        }
        for _ in 0..MAX_NESTING_DEPTH + 1 {
            source.push_str("});");
        }
        let err = build_tree(&source).unwrap_err();
        assert!(matches!(err, CompileError::NestingTooDeep { .. }));
    }

    #[test]
    fn test_brace_form_unknown_name_keeps_children_in_tree() {
        let tree = build_tree("wce_widget({ wce_text(\"x\"); });").unwrap();
        let widget = tree.node(tree.node(tree.root()).children[0]);
        assert_eq!(
            widget.kind,
            NodeKind::Leaf(LeafKind::Other("widget".to_string()))
        );
        assert_eq!(widget.children.len(), 1);
    }

    #[test]
    fn test_semicolons_optional() {
        let tree = build_tree("wce_row({ wce_text(\"a\") wce_text(\"b\") })").unwrap();
        let row = tree.node(tree.node(tree.root()).children[0]);
        assert_eq!(row.children.len(), 2);
    }
}
