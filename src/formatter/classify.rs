//! Date format classification
//!
//! Decides whether a custom code formats a date, from the code text left
//! after the legacy corrections.

use crate::dialect::{code_text, has_elapsed, replace_ignore_ascii_case, Piece};

/// Letters that are date or time tokens.
const TOKEN_LETTERS: &str = "ymdhsgYMDHSG";

/// Characters a date code may carry besides tokens.
fn is_date_char(c: char) -> bool {
    TOKEN_LETTERS.contains(c)
        || matches!(
            c,
            'e' | 'E'
                | 'a'
                | 'A'
                | '/'
                | '-'
                | '.'
                | ':'
                | ','
                | ' '
                | '('
                | ')'
                | '0'
                | '年'
                | '月'
                | '日'
                | '時'
                | '分'
                | '秒'
        )
}

/// Whether the pieces of a code describe a date or time.
///
/// Elapsed tags always do. Otherwise the code text, with `AM/PM` and `A/P`
/// markers removed, must consist of date characters and carry at least one
/// year, month, day, hour, second or era token.
pub fn is_date_format(pieces: &[Piece]) -> bool {
    if has_elapsed(pieces) {
        return true;
    }

    let code = code_text(pieces);
    let code = replace_ignore_ascii_case(&code, "AM/PM", "");
    let code = replace_ignore_ascii_case(&code, "A/P", "");

    code.chars().all(is_date_char) && code.chars().any(|c| TOKEN_LETTERS.contains(c))
}

/// Whether the code text carries a y/m/d/h/s letter once `General` is removed.
pub fn has_date_letter(pieces: &[Piece]) -> bool {
    let code = replace_ignore_ascii_case(&code_text(pieces), "General", "");
    code.chars()
        .any(|c| matches!(c.to_ascii_lowercase(), 'y' | 'm' | 'd' | 'h' | 's'))
}
