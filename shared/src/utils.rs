//! # Shared Utility Functions
//!
//! Display helpers used by consumers of the blog DTOs.
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::excerpt;
//!
//! assert_eq!(excerpt("Hello, wonderful world", 5), "Hello...");
//! ```

/// Shorten `text` to at most `max_chars` characters, appending `...` when cut.
///
/// Counts characters, not bytes, so multi-byte content is never split mid-codepoint.
/// Leading/trailing whitespace is trimmed first.
///
/// # Examples
///
/// ```rust
/// use shared::utils::excerpt;
///
/// assert_eq!(excerpt("short", 10), "short");
/// assert_eq!(excerpt("  padded  ", 10), "padded");
/// assert_eq!(excerpt("héllo wörld", 5), "héllo...");
/// ```
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let text = text.trim();

    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", text[..cut].trim_end()),
        None => text.to_string(),
    }
}

/// Single-line preview: newlines collapsed to spaces, then [`excerpt`]ed.
pub fn preview(text: &str, max_chars: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    excerpt(&flat, max_chars)
}
