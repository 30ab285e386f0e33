//! Cleanup for caller supplied ids and queries.

/// Longest input kept, in characters, before trimming.
pub const MAX_INPUT_LEN: usize = 100;

const STRIPPED: [char; 4] = ['<', '>', '\'', '"'];

/// Strips `< > ' "`, caps the length at [`MAX_INPUT_LEN`] characters and
/// trims surrounding whitespace, in that order.
pub fn sanitize_input(input: &str) -> String {
    let capped: String = input
        .chars()
        .filter(|c| !STRIPPED.contains(c))
        .take(MAX_INPUT_LEN)
        .collect();
    capped.trim().to_owned()
}
