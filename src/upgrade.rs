//! Legacy syntax migration.
//!
//! Upgrades source files from the legacy marker-macro syntax
//! (`WCE_ROW_BEGIN` / `WCE_ROW_END`, uppercase leaf macros) to the current
//! function-scope call syntax. This is a one-time text substitution over
//! fixed literal markers; it shares no state with the compiler.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use regex::Regex;

/// File extensions eligible for an in-place upgrade.
const UPGRADE_EXTENSIONS: &[&str] = &["c", "h", "wce"];

lazy_static! {
    /// Marker-to-call rewrite table, applied in order.
    static ref LEGACY_PATTERNS: Vec<(Regex, &'static str)> = [
        (r"WCE_ROW_BEGIN", "wce_row({"),
        (r"WCE_ROW_END", "});"),
        (r"WCE_COL_BEGIN", "wce_col({"),
        (r"WCE_COL_END", "});"),
        (r"WCE_COLUMN_BEGIN", "wce_col({"),
        (r"WCE_COLUMN_END", "});"),
        (r"WCE_CARD_BEGIN", "wce_card(\"\", {"),
        (r"WCE_CARD_END", "});"),
        (r"WCE_CONTAINER_BEGIN", "wce_container({"),
        (r"WCE_CONTAINER_END", "});"),
        (r"WCE_PANEL_BEGIN", "wce_panel({"),
        (r"WCE_PANEL_END", "});"),
        // Uppercase leaf macros become lowercase calls; heuristic, the
        // argument lists are left untouched.
        (r"WCE_TEXT\(", "wce_text("),
        (r"WCE_BUTTON\(", "wce_button("),
        (r"WCE_SLIDER\(", "wce_slider("),
        (r"WCE_PROGRESS\(", "wce_progress("),
        (r"WCE_INPUT\(", "wce_input("),
    ]
    .into_iter()
    .map(|(pattern, replacement)| {
        let re = Regex::new(pattern).expect("legacy pattern is a valid regex");
        (re, replacement)
    })
    .collect();
}

/// Apply the rewrite table to a source string.
pub fn upgrade_source(content: &str) -> String {
    let mut upgraded = content.to_string();
    for (pattern, replacement) in LEGACY_PATTERNS.iter() {
        upgraded = pattern.replace_all(&upgraded, *replacement).into_owned();
    }
    upgraded
}

/// Upgrade one file in place. Returns whether the file changed; unchanged
/// files are not rewritten.
pub fn upgrade_file(path: &Path) -> io::Result<bool> {
    let content = fs::read_to_string(path)?;
    let upgraded = upgrade_source(&content);
    if upgraded != content {
        fs::write(path, upgraded)?;
        Ok(true)
    } else {
        Ok(false)
    }
}

/// Outcome of upgrading one file.
#[derive(Debug, Clone)]
pub struct UpgradeOutcome {
    pub path: PathBuf,
    pub changed: bool,
}

/// Upgrade a file, or every eligible file under a directory (recursively).
///
/// Directory entries whose extension is not one of `.c`, `.h`, `.wce` are
/// skipped. A single-file target is upgraded regardless of its extension.
pub fn upgrade_tree(target: &Path) -> io::Result<Vec<UpgradeOutcome>> {
    let mut outcomes = Vec::new();
    if target.is_dir() {
        upgrade_dir(target, &mut outcomes)?;
    } else {
        let changed = upgrade_file(target)?;
        outcomes.push(UpgradeOutcome {
            path: target.to_path_buf(),
            changed,
        });
    }
    Ok(outcomes)
}

fn upgrade_dir(dir: &Path, outcomes: &mut Vec<UpgradeOutcome>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            upgrade_dir(&path, outcomes)?;
        } else if eligible(&path) {
            let changed = upgrade_file(&path)?;
            outcomes.push(UpgradeOutcome { path, changed });
        }
    }
    Ok(())
}

fn eligible(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| UPGRADE_EXTENSIONS.contains(&ext))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_container_markers_rewritten() {
        let legacy = "WCE_ROW_BEGIN\n  WCE_TEXT(\"hi\");\nWCE_ROW_END";
        assert_eq!(
            upgrade_source(legacy),
            "wce_row({\n  wce_text(\"hi\");\n});"
        );
    }

    #[test]
    fn test_column_spelling_variants() {
        assert_eq!(upgrade_source("WCE_COL_BEGIN"), "wce_col({");
        assert_eq!(upgrade_source("WCE_COLUMN_BEGIN"), "wce_col({");
    }

    #[test]
    fn test_card_gets_empty_title_argument() {
        assert_eq!(
            upgrade_source("WCE_CARD_BEGIN WCE_CARD_END"),
            "wce_card(\"\", { });"
        );
    }

    #[test]
    fn test_leaf_macros_need_open_paren() {
        // A bare WCE_BUTTON identifier without a call is left alone.
        assert_eq!(upgrade_source("WCE_BUTTON;"), "WCE_BUTTON;");
        assert_eq!(
            upgrade_source("WCE_BUTTON(\"Go\", on_go);"),
            "wce_button(\"Go\", on_go);"
        );
    }

    #[test]
    fn test_current_syntax_untouched() {
        let current = "wce_row({ wce_text(\"x\"); });";
        assert_eq!(upgrade_source(current), current);
    }

    #[test]
    fn test_eligible_extensions() {
        assert!(eligible(Path::new("ui.wce")));
        assert!(eligible(Path::new("main.c")));
        assert!(eligible(Path::new("webcee.h")));
        assert!(!eligible(Path::new("notes.md")));
        assert!(!eligible(Path::new("Makefile")));
    }
}
