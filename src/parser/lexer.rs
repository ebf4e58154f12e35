

/// Splits an expression into its signed terms.
///
/// A `+` separates two terms and is dropped. A `-` separates two terms and
/// stays at the front of the following one, so `d6-1` yields `["d6", "-1"]`.
/// Separators at the edges produce empty terms (`-4` yields `["", "-4"]`),
/// which callers ignore.
pub(crate) fn split_terms(input: &str) -> Vec<&str> {
    let mut terms = Vec::new();
    let mut start = 0;

    for (position, ch) in input.char_indices() {
        match ch {
            '+' => {
                terms.push(&input[start..position]);
                start = position + 1;
            }
            '-' => {
                terms.push(&input[start..position]);
                start = position;
            }
            _ => {}
        }
    }

    terms.push(&input[start..]);
    terms
}
