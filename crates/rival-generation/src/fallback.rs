//! Deterministic offline answer: a reduction of the prompt itself.

/// Lines kept from the prompt.
pub const MAX_FALLBACK_LINES: usize = 20;
/// Character cap on the fallback answer.
pub const MAX_FALLBACK_CHARS: usize = 2000;

/// First [`MAX_FALLBACK_LINES`] non-blank trimmed lines of the prompt,
/// joined with newlines and capped at [`MAX_FALLBACK_CHARS`] characters.
/// Non-empty whenever the prompt has any non-blank line.
pub fn fallback_text(prompt: &str) -> String {
    let joined = prompt
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(MAX_FALLBACK_LINES)
        .collect::<Vec<_>>()
        .join("\n");
    truncate_chars(joined, MAX_FALLBACK_CHARS)
}

/// Truncate to at most `max` characters, never splitting a char boundary.
fn truncate_chars(mut s: String, max: usize) -> String {
    if let Some((idx, _)) = s.char_indices().nth(max) {
        s.truncate(idx);
    }
    s
}
