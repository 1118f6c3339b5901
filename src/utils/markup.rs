//! Helpers for Telegram's HTML parse mode
//!
//! Schedules are sent with `ParseMode::Html`, which only needs `<`, `>` and `&`
//! escaped in text nodes. The wrappers below keep tag spelling in one place.

/// Escapes text for Telegram's HTML parse mode
///
/// # Example
/// ```
/// use group_schedule_bot::utils::markup::escape_html;
///
/// assert_eq!(escape_html("R&D <lab>"), "R&amp;D &lt;lab&gt;");
/// ```
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Opening delimiter of a quoted block.
pub const BLOCKQUOTE_OPEN: &str = "<blockquote>";
/// Closing delimiter of a quoted block.
pub const BLOCKQUOTE_CLOSE: &str = "</blockquote>";

/// Wraps already-escaped markup in a quoted block.
pub fn blockquote(inner: &str) -> String {
    format!("{BLOCKQUOTE_OPEN}{inner}{BLOCKQUOTE_CLOSE}")
}

/// Wraps already-escaped markup in bold.
pub fn bold(inner: &str) -> String {
    format!("<b>{inner}</b>")
}

/// Wraps already-escaped markup in underline.
pub fn underline(inner: &str) -> String {
    format!("<u>{inner}</u>")
}
