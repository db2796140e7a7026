//! WebCee - embedded UI-description DSL to static HTML compiler
//!
//! WebCee source files embed up to four marker-delimited regions: a style
//! sheet, passthrough HTML, a script block, and the UI language region. The
//! compiler slices the regions out of the host file, parses the UI region's
//! nested `wce_*` calls into a tree, and renders that tree as static markup;
//! the style and script regions pass through verbatim.
//!
//! # Example
//!
//! ```
//! use webcee::ui_to_html;
//!
//! let html = ui_to_html("wce_row({ wce_text(\"Hello\"); });").unwrap();
//! assert!(html.contains("<span>Hello</span>"));
//! ```

pub mod core;
pub mod upgrade;
pub mod utils;

// Re-export the pipeline surface at the crate root.
pub use crate::core::wce2html::{
    compile_source, compile_source_with_report, ui_to_html, CompileOutput, CompileWarning,
    WarningKind,
};
pub use crate::core::wce2html::ast::{ContainerKind, LeafKind, Node, NodeId, NodeKind, Tree};
pub use crate::core::wce2html::engine::{tokenize, Token, TokenKind, TokenStream};
pub use crate::core::wce2html::markup::DEFAULT_UI_CSS;
pub use crate::core::wce2html::parser::{build_tree, UiBuilder, MAX_NESTING_DEPTH};
pub use upgrade::{upgrade_file, upgrade_source, upgrade_tree, UpgradeOutcome};
pub use utils::error::{CompileError, CompileResult, GrammarError};
pub use utils::report::CompileReport;
