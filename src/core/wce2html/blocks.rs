//! Marker-delimited region extraction.
//!
//! A WebCee source file embeds up to four regions, each fenced by a literal
//! marker pair. Extraction is substring-based and independent of the
//! tokenizer; only the first marker pair in the file is honored.

/// Style sheet region markers.
pub const STYLE_MARKERS: (&str, &str) = ("WCE_STYLE_BEGIN", "WCE_STYLE_END");
/// Passthrough HTML region markers.
pub const HTML_MARKERS: (&str, &str) = ("WCE_HTML_BEGIN", "WCE_HTML_END");
/// Passthrough script region markers.
pub const SCRIPT_MARKERS: (&str, &str) = ("WCE_SCRIPT_BEGIN", "WCE_SCRIPT_END");
/// UI language region markers.
pub const UI_MARKERS: (&str, &str) = ("WCE_UI_BEGIN", "WCE_UI_END");

/// Extract the text strictly between the first `begin` marker and the first
/// `end` marker after it, trimmed. Returns `""` when either marker is
/// missing; repeated marker pairs later in the file are ignored.
pub fn extract_block<'a>(source: &'a str, begin: &str, end: &str) -> &'a str {
    let Some(start) = source.find(begin) else {
        return "";
    };
    let body_start = start + begin.len();
    let Some(len) = source[body_start..].find(end) else {
        return "";
    };
    source[body_start..body_start + len].trim()
}
