//! Lexer for tokenizing decimal patterns.
//!
//! Quoting follows the decimal-format convention: `'text'` is literal text and
//! `''` is a single apostrophe, inside or outside a quoted run.

use crate::decimal::tokens::{SpannedToken, Token};
use crate::error::ParseError;

/// A lexer for decimal pattern strings.
pub struct Lexer<'a> {
    /// The input string being tokenized.
    pub(crate) input: &'a str,
    /// The current byte position in the input.
    position: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input string.
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += ch.len_utf8();
        Some(ch)
    }

    /// Returns the next token from the input.
    pub fn next_token(&mut self) -> Result<SpannedToken, ParseError> {
        let start = self.position;
        let Some(ch) = self.bump() else {
            return Ok(SpannedToken {
                token: Token::Eof,
                start,
                end: start,
            });
        };

        let token = match ch {
            '0' => Token::Zero,
            '#' => Token::Hash,
            '.' => Token::DecimalPoint,
            ',' => Token::Grouping,
            ';' => Token::SectionSep,
            '%' => Token::Percent,
            '\u{2030}' => Token::PerMille,
            'E' => Token::Exponent,
            '\'' => self.lex_quoted(start)?,
            other => Token::Literal(other),
        };

        Ok(SpannedToken {
            token,
            start,
            end: self.position,
        })
    }

    /// Lex the rest of a quoted run; the opening quote is already consumed.
    fn lex_quoted(&mut self, start: usize) -> Result<Token, ParseError> {
        // '' outside a run is an escaped apostrophe
        if self.peek() == Some('\'') {
            self.bump();
            return Ok(Token::Literal('\''));
        }

        let mut text = String::new();
        loop {
            match self.bump() {
                None => return Err(ParseError::UnterminatedQuote { position: start }),
                Some('\'') => {
                    if self.peek() == Some('\'') {
                        self.bump();
                        text.push('\'');
                    } else {
                        return Ok(Token::Quoted(text));
                    }
                }
                Some(c) => text.push(c),
            }
        }
    }
}
