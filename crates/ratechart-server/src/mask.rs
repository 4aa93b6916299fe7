//! Sensitive-data masking.

const MASK_CHAR: char = '*';

/// Masks every character except the first and last.
///
/// Strings shorter than two characters are returned unchanged and a
/// two-character string keeps only its first character.
///
/// ```
/// use ratechart_server::mask::mask_string;
///
/// assert_eq!(mask_string("홍길동"), "홍*동");
/// assert_eq!(mask_string("ab"), "a*");
/// assert_eq!(mask_string("a"), "a");
/// ```
pub fn mask_string(input: &str) -> String {
    let count = input.chars().count();
    match count {
        0 | 1 => input.to_string(),
        2 => input.chars().take(1).chain(std::iter::once(MASK_CHAR)).collect(),
        _ => input
            .chars()
            .enumerate()
            .map(|(i, c)| if i == 0 || i == count - 1 { c } else { MASK_CHAR })
            .collect(),
    }
}
