//! Token types for the decimal pattern lexer.

/// A token in a decimal pattern.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Literals
    Literal(char),
    Quoted(String),

    // Digit placeholders
    Zero, // 0
    Hash, // #

    // Separators
    DecimalPoint, // .
    Grouping,     // ,
    SectionSep,   // ;

    // Multipliers
    Percent,  // %
    PerMille, // ‰

    // Scientific notation
    Exponent, // E

    // End of input
    Eof,
}

/// A token with its position in the source.
#[derive(Debug, Clone)]
pub struct SpannedToken {
    pub token: Token,
    pub start: usize,
    pub end: usize,
}
