//! Decimal patterns: the `#,##0.00;(#,##0.00)` language numeric cells are
//! rendered with.
//!
//! A pattern has a positive subpattern and an optional negative one. Only the
//! affixes of the negative subpattern are used; the number part always comes
//! from the positive side.

pub mod lexer;
mod render;
pub mod tokens;

use crate::error::ParseError;
use lexer::Lexer;
use tokens::{SpannedToken, Token};

/// Digit placeholder type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitPlaceholder {
    /// `0` - Display digit or zero
    Zero,
    /// `#` - Display digit or nothing
    Hash,
}

impl DigitPlaceholder {
    /// Returns true if this placeholder requires a digit (shows 0 for missing).
    pub fn is_required(&self) -> bool {
        matches!(self, DigitPlaceholder::Zero)
    }
}

/// A piece of a prefix or suffix.
#[derive(Debug, Clone, PartialEq)]
pub enum AffixPart {
    Literal(String),
    /// `%` - multiplies the value by 100
    Percent,
    /// `‰` - multiplies the value by 1000
    PerMille,
}

/// Text around the number.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Affixes {
    pub prefix: Vec<AffixPart>,
    pub suffix: Vec<AffixPart>,
}

impl Affixes {
    /// Factor the value is scaled by before display.
    pub fn multiplier(&self) -> f64 {
        self.prefix
            .iter()
            .chain(&self.suffix)
            .map(|part| match part {
                AffixPart::Percent => 100.0,
                AffixPart::PerMille => 1000.0,
                AffixPart::Literal(_) => 1.0,
            })
            .product()
    }
}

/// Exponent of a scientific pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExponentSpec {
    /// Minimum exponent digits (count of `0` after `E`)
    pub min_digits: usize,
    /// `E+` shows a plus sign on non-negative exponents
    pub show_plus: bool,
}

/// The number part of a pattern.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumberSpec {
    pub integer: Vec<DigitPlaceholder>,
    pub fraction: Vec<DigitPlaceholder>,
    /// Digits per group, when the integer part has a grouping separator
    pub grouping_size: Option<usize>,
    pub exponent: Option<ExponentSpec>,
}

impl NumberSpec {
    pub fn min_integer_digits(&self) -> usize {
        self.integer.iter().filter(|p| p.is_required()).count()
    }

    pub fn min_fraction_digits(&self) -> usize {
        self.fraction.iter().filter(|p| p.is_required()).count()
    }

    pub fn max_fraction_digits(&self) -> usize {
        self.fraction.len()
    }
}

/// A parsed decimal pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct DecimalPattern {
    pub number: NumberSpec,
    pub positive: Affixes,
    pub negative: Option<Affixes>,
}

impl DecimalPattern {
    /// Parse a decimal pattern string.
    pub fn parse(pattern: &str) -> Result<DecimalPattern, ParseError> {
        parse(pattern)
    }
}

/// Parse a decimal pattern string into a DecimalPattern.
pub fn parse(pattern: &str) -> Result<DecimalPattern, ParseError> {
    if pattern.is_empty() {
        return Err(ParseError::EmptyPattern);
    }

    let mut parser = Parser::new(pattern)?;
    parser.parse()
}

/// Parser for decimal pattern strings.
struct Parser<'a> {
    lexer: Lexer<'a>,
    /// Current token
    current: SpannedToken,
}

impl<'a> Parser<'a> {
    fn new(pattern: &'a str) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(pattern);
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    /// Advance to the next token.
    fn advance(&mut self) -> Result<(), ParseError> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    fn unexpected(&self) -> ParseError {
        let found = self.lexer.input[self.current.start..]
            .chars()
            .next()
            .unwrap_or('\0');
        ParseError::UnexpectedChar {
            position: self.current.start,
            found,
        }
    }

    fn parse(&mut self) -> Result<DecimalPattern, ParseError> {
        let (positive, number) = self.parse_subpattern()?;
        let number = number.ok_or(ParseError::NoDigits)?;

        let negative = if matches!(self.current.token, Token::SectionSep) {
            self.advance()?;
            let (affixes, _) = self.parse_subpattern()?;
            if matches!(self.current.token, Token::SectionSep) {
                return Err(ParseError::TooManySections);
            }
            Some(affixes)
        } else {
            None
        };

        Ok(DecimalPattern {
            number,
            positive,
            negative,
        })
    }

    /// Parse `prefix number suffix`, stopping at a section separator or the end.
    fn parse_subpattern(&mut self) -> Result<(Affixes, Option<NumberSpec>), ParseError> {
        let prefix = self.parse_affix()?;
        let number = self.parse_number()?;
        let suffix = self.parse_affix()?;

        match self.current.token {
            Token::Eof | Token::SectionSep => Ok((Affixes { prefix, suffix }, number)),
            _ => Err(self.unexpected()),
        }
    }

    fn parse_affix(&mut self) -> Result<Vec<AffixPart>, ParseError> {
        let mut parts: Vec<AffixPart> = Vec::new();
        loop {
            let part = match &self.current.token {
                Token::Literal(c) => AffixPart::Literal(c.to_string()),
                Token::Quoted(s) => AffixPart::Literal(s.clone()),
                Token::Percent => AffixPart::Percent,
                Token::PerMille => AffixPart::PerMille,
                _ => break,
            };
            // Merge adjacent literal runs
            match (parts.last_mut(), part) {
                (Some(AffixPart::Literal(prev)), AffixPart::Literal(next)) => prev.push_str(&next),
                (_, part) => parts.push(part),
            }
            self.advance()?;
        }
        Ok(parts)
    }

    fn parse_number(&mut self) -> Result<Option<NumberSpec>, ParseError> {
        let mut spec = NumberSpec::default();
        let mut after_point = false;
        let mut last_grouping: Option<usize> = None;

        loop {
            match self.current.token {
                Token::Zero | Token::Hash => {
                    let placeholder = if self.current.token == Token::Zero {
                        DigitPlaceholder::Zero
                    } else {
                        DigitPlaceholder::Hash
                    };
                    if after_point {
                        spec.fraction.push(placeholder);
                    } else {
                        spec.integer.push(placeholder);
                    }
                }
                Token::Grouping => {
                    if after_point {
                        return Err(self.unexpected());
                    }
                    last_grouping = Some(spec.integer.len());
                }
                Token::DecimalPoint => {
                    if after_point {
                        return Err(ParseError::MultipleDecimalPoints {
                            position: self.current.start,
                        });
                    }
                    after_point = true;
                }
                Token::Exponent => {
                    spec.exponent = Some(self.parse_exponent(&spec)?);
                    break;
                }
                _ => break,
            }
            self.advance()?;
        }

        if spec.integer.is_empty() && spec.fraction.is_empty() && !after_point {
            return Ok(None);
        }

        // A trailing separator (`#,##0,`) scales in Excel but groups nothing here
        spec.grouping_size = last_grouping
            .map(|position| spec.integer.len() - position)
            .filter(|size| *size > 0);

        Ok(Some(spec))
    }

    /// Parse `E[+-]0+`; the current token is the `E`.
    fn parse_exponent(&mut self, spec: &NumberSpec) -> Result<ExponentSpec, ParseError> {
        let position = self.current.start;
        if spec.integer.is_empty() && spec.fraction.is_empty() {
            return Err(ParseError::MalformedExponent { position });
        }
        self.advance()?;

        let mut show_plus = false;
        match self.current.token {
            Token::Literal('+') => {
                show_plus = true;
                self.advance()?;
            }
            Token::Literal('-') => self.advance()?,
            _ => {}
        }

        let mut min_digits = 0;
        while self.current.token == Token::Zero {
            min_digits += 1;
            self.advance()?;
        }
        if min_digits == 0 {
            return Err(ParseError::MalformedExponent { position });
        }

        Ok(ExponentSpec {
            min_digits,
            show_plus,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_general_pattern() {
        let pattern = parse("0.##########").unwrap();
        assert_eq!(pattern.number.min_integer_digits(), 1);
        assert_eq!(pattern.number.min_fraction_digits(), 0);
        assert_eq!(pattern.number.max_fraction_digits(), 10);
        assert_eq!(pattern.number.grouping_size, None);
        assert!(pattern.negative.is_none());
    }

    #[test]
    fn test_parse_grouping_and_negative() {
        let pattern = parse("$#,##0.00;($#,##0.00)").unwrap();
        assert_eq!(pattern.number.grouping_size, Some(3));
        assert_eq!(
            pattern.positive.prefix,
            vec![AffixPart::Literal("$".to_string())]
        );
        let negative = pattern.negative.unwrap();
        assert_eq!(negative.prefix, vec![AffixPart::Literal("($".to_string())]);
        assert_eq!(negative.suffix, vec![AffixPart::Literal(")".to_string())]);
    }

    #[test]
    fn test_parse_percent_multiplier() {
        let pattern = parse("0.00%").unwrap();
        assert_eq!(pattern.positive.multiplier(), 100.0);
    }

    #[test]
    fn test_parse_exponent() {
        let pattern = parse("0.00E+00").unwrap();
        assert_eq!(
            pattern.number.exponent,
            Some(ExponentSpec {
                min_digits: 2,
                show_plus: true
            })
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse(""), Err(ParseError::EmptyPattern));
        assert_eq!(parse("abc"), Err(ParseError::NoDigits));
        assert_eq!(parse("0;0;0"), Err(ParseError::TooManySections));
        assert!(matches!(
            parse("0.0.0"),
            Err(ParseError::MultipleDecimalPoints { position: 3 })
        ));
        assert!(matches!(
            parse("0.00E"),
            Err(ParseError::MalformedExponent { .. })
        ));
        assert!(matches!(
            parse("0 x 0"),
            Err(ParseError::UnexpectedChar { found: '0', .. })
        ));
    }
}
