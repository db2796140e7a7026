//! WebCee UI language to HTML compiler.
//!
//! This module implements the whole pipeline: marker-delimited regions are
//! sliced out of the host source, the UI region is tokenized and parsed into
//! a node tree, and the tree is rendered to static markup. The style and
//! script regions bypass parsing and pass through verbatim.

pub mod ast;
pub mod blocks;
pub mod engine;
pub mod markup;
pub mod parser;

use crate::utils::error::CompileResult;
use crate::utils::report::{CompileReport, RegionSummary};

use ast::NodeKind;
use blocks::{extract_block, HTML_MARKERS, SCRIPT_MARKERS, STYLE_MARKERS, UI_MARKERS};
use markup::{render_tree, DEFAULT_UI_CSS};
use parser::build_tree;

// =============================================================================
// Warning System
// =============================================================================

/// Kind of warning generated while rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// A known widget kind has no HTML generator yet and was emitted as a
    /// traceability comment only (slider, progress, input).
    PlaceholderWidget,
    /// An unrecognized widget call was emitted as a comment only.
    UnknownWidget,
    /// A brace scope on a non-container widget: its children were parsed but
    /// never rendered.
    DroppedChildren,
}

impl std::fmt::Display for WarningKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WarningKind::PlaceholderWidget => write!(f, "placeholder widget"),
            WarningKind::UnknownWidget => write!(f, "unknown widget"),
            WarningKind::DroppedChildren => write!(f, "dropped children"),
        }
    }
}

/// A non-fatal warning generated during compilation.
///
/// Warnings never change the emitted markup; they exist so callers can see
/// where the generator produced placeholder output.
#[derive(Debug, Clone)]
pub struct CompileWarning {
    /// The kind of warning
    pub kind: WarningKind,
    /// Human-readable message
    pub message: String,
    /// Location context (the original call name)
    pub location: Option<String>,
}

impl CompileWarning {
    /// Create a new warning
    pub fn new(kind: WarningKind, message: impl Into<String>) -> Self {
        CompileWarning {
            kind,
            message: message.into(),
            location: None,
        }
    }

    /// Add location context to the warning
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// A known widget kind rendered as comment only
    pub fn placeholder_widget(name: &str) -> Self {
        CompileWarning::new(
            WarningKind::PlaceholderWidget,
            format!("'{}' has no HTML generator and was emitted as a comment", name),
        )
        .with_location(name.to_string())
    }

    /// An unknown widget call rendered as comment only
    pub fn unknown_widget(name: &str) -> Self {
        CompileWarning::new(
            WarningKind::UnknownWidget,
            format!("unknown widget '{}' was emitted as a comment", name),
        )
        .with_location(name.to_string())
    }

    /// A non-container scope whose children are not rendered
    pub fn dropped_children(name: &str) -> Self {
        CompileWarning::new(
            WarningKind::DroppedChildren,
            format!("'{}' is not a container; its nested children were dropped", name),
        )
        .with_location(name.to_string())
    }
}

impl std::fmt::Display for CompileWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref loc) = self.location {
            write!(f, "[{}] {}: {}", self.kind, loc, self.message)
        } else {
            write!(f, "[{}] {}", self.kind, self.message)
        }
    }
}

// =============================================================================
// Pipeline
// =============================================================================

/// Result of compiling one source file.
#[derive(Debug, Clone)]
pub struct CompileOutput {
    /// Passthrough HTML region followed by the markup generated from the UI
    /// region.
    pub markup: String,
    /// Style region followed by the default UI stylesheet fragment (the
    /// fragment is appended only when a UI region was compiled).
    pub style: String,
    /// Script region, verbatim.
    pub script: String,
    /// Warnings generated while rendering.
    pub warnings: Vec<CompileWarning>,
}

impl CompileOutput {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Compile a whole source file: extract the four regions, build and render
/// the UI tree, pass style/script through.
pub fn compile_source(source: &str) -> CompileResult<CompileOutput> {
    compile_source_with_report(source).map(|(output, _)| output)
}

/// Like [`compile_source`], additionally returning a serializable summary of
/// what the compiler saw.
pub fn compile_source_with_report(source: &str) -> CompileResult<(CompileOutput, CompileReport)> {
    let style_region = extract_block(source, STYLE_MARKERS.0, STYLE_MARKERS.1);
    let html_region = extract_block(source, HTML_MARKERS.0, HTML_MARKERS.1);
    let script_region = extract_block(source, SCRIPT_MARKERS.0, SCRIPT_MARKERS.1);
    let ui_region = extract_block(source, UI_MARKERS.0, UI_MARKERS.1);

    let mut markup = html_region.to_string();
    let mut style = style_region.to_string();
    let mut warnings = Vec::new();
    let mut containers = 0;
    let mut leaves = 0;

    if !ui_region.is_empty() {
        let tree = build_tree(ui_region)?;
        let (generated, mut render_warnings) = render_tree(&tree);
        markup.push_str(&generated);
        style.push_str(DEFAULT_UI_CSS);
        warnings.append(&mut render_warnings);

        for node in tree.iter() {
            match node.kind {
                NodeKind::Container(_) => containers += 1,
                NodeKind::Leaf(_) => leaves += 1,
                NodeKind::Root => {}
            }
        }
    }

    let report = CompileReport {
        regions: RegionSummary {
            style: !style_region.is_empty(),
            markup: !html_region.is_empty(),
            script: !script_region.is_empty(),
            ui: !ui_region.is_empty(),
        },
        containers,
        leaves,
        warnings: warnings.iter().map(Into::into).collect(),
    };

    let output = CompileOutput {
        markup,
        style,
        script: script_region.to_string(),
        warnings,
    };
    Ok((output, report))
}

/// Compile a bare UI fragment (no region markers) straight to markup.
pub fn ui_to_html(ui_source: &str) -> CompileResult<String> {
    let tree = build_tree(ui_source)?;
    let (html, _) = render_tree(&tree);
    Ok(html)
}
