//! Input line parsing.

/// Split a line into a lowercased command word and positional arguments.
///
/// Returns `None` for a blank line. The command word is case-insensitive;
/// arguments keep their original case.
pub fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?.to_lowercase();
    let args = tokens.map(str::to_string).collect();
    Some((command, args))
}
