// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! Format patterns such as `h:mm:ss a`.
//!
//! A pattern is a sequence of field runs and literals. A field run is one or
//! more repetitions of a single token character:
//!
//! | token | field |
//! |-------|-------|
//! | `H`, `HH` | hour, 24 hour clock |
//! | `h`, `hh` | hour, 12 hour clock |
//! | `m`, `mm` | minute |
//! | `s`, `ss` | second |
//! | `a` | AM/PM |
//!
//! A doubled token asks for a leading zero. Everything else is a literal
//! and is shown as a divider between the fields.

use winnow::{
    combinator::{alt, peek, repeat},
    token::{one_of, take_till, take_while},
    ModalResult, Parser,
};

use crate::TimeInputError;

const TOKEN_CHARS: [char; 5] = ['H', 'h', 'm', 's', 'a'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Hour24,
    Hour12,
    Minute,
    Second,
    AmPm,
    Literal,
}

impl TokenKind {
    fn of(c: char) -> Self {
        match c {
            'H' => TokenKind::Hour24,
            'h' => TokenKind::Hour12,
            'm' => TokenKind::Minute,
            's' => TokenKind::Second,
            'a' => TokenKind::AmPm,
            _ => TokenKind::Literal,
        }
    }

    /// Both hour tokens are drawn by the same hour renderer, which picks the
    /// 12 or 24 hour field from the case of the token.
    pub fn renderer(self) -> TokenKind {
        match self {
            TokenKind::Hour12 => TokenKind::Hour24,
            kind => kind,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

impl Token<'_> {
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether the field should be shown with a leading zero.
    ///
    /// # Errors
    ///
    /// A token repeated more than twice is a configuration error.
    pub fn show_leading_zeros(&self, default: bool) -> Result<bool, TimeInputError> {
        match self.len() {
            0 | 1 => Ok(default),
            2 => Ok(true),
            _ => Err(TimeInputError::UnsupportedToken(self.text.to_owned())),
        }
    }
}

fn field_run<'a>(input: &mut &'a str) -> ModalResult<Token<'a>> {
    let c = peek(one_of(TOKEN_CHARS)).parse_next(input)?;
    take_while(1.., c)
        .map(|text| Token {
            kind: TokenKind::of(c),
            text,
        })
        .parse_next(input)
}

fn literal<'a>(input: &mut &'a str) -> ModalResult<Token<'a>> {
    take_till(1.., TOKEN_CHARS)
        .map(|text| Token {
            kind: TokenKind::Literal,
            text,
        })
        .parse_next(input)
}

fn tokens<'a>(input: &mut &'a str) -> ModalResult<Vec<Token<'a>>> {
    repeat(0.., alt((field_run, literal))).parse_next(input)
}

/// Splits a pattern into field runs and literals, in order.
///
/// Every character ends up in exactly one token, so this never fails.
pub fn tokenize(pattern: &str) -> Vec<Token<'_>> {
    let mut input = pattern;
    tokens.parse_next(&mut input).unwrap_or_default()
}

/// One element of the rendered field group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text between two fields.
    Divider(&'a str),
    /// A field to render.
    Field(Token<'a>),
    /// A repeated field token shown as plain text.
    Literal(&'a str),
}

/// Lays out a placeholder as dividers and fields.
///
/// With `allow_repeats` false (the placeholder was derived from the locale
/// rather than given by the caller) each renderer is used at most once and
/// later tokens for it are kept as literal text.
pub fn render_segments(placeholder: &str, allow_repeats: bool) -> Vec<Segment<'_>> {
    let mut used: Vec<TokenKind> = Vec::new();
    tokenize(placeholder)
        .into_iter()
        .map(|token| {
            if token.kind == TokenKind::Literal {
                return Segment::Divider(token.text);
            }
            let renderer = token.kind.renderer();
            if !allow_repeats && used.contains(&renderer) {
                return Segment::Literal(token.text);
            }
            used.push(renderer);
            Segment::Field(token)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(kind: TokenKind, text: &str) -> Segment<'_> {
        Segment::Field(Token { kind, text })
    }

    #[test]
    fn tokenize_twelve_hour_pattern() {
        let kinds: Vec<_> = tokenize("h:mm:ss a")
            .into_iter()
            .map(|t| (t.kind, t.text))
            .collect();
        assert_eq!(
            kinds,
            [
                (TokenKind::Hour12, "h"),
                (TokenKind::Literal, ":"),
                (TokenKind::Minute, "mm"),
                (TokenKind::Literal, ":"),
                (TokenKind::Second, "ss"),
                (TokenKind::Literal, " "),
                (TokenKind::AmPm, "a"),
            ]
        );
    }

    #[test]
    fn tokenize_splits_mixed_runs() {
        let kinds: Vec<_> = tokenize("hH").into_iter().map(|t| t.kind).collect();
        assert_eq!(kinds, [TokenKind::Hour12, TokenKind::Hour24]);
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn segments_with_leading_and_trailing_dividers() {
        assert_eq!(
            render_segments("[HH.mm]", true),
            [
                Segment::Divider("["),
                field(TokenKind::Hour24, "HH"),
                Segment::Divider("."),
                field(TokenKind::Minute, "mm"),
                Segment::Divider("]"),
            ]
        );
    }

    #[test]
    fn repeats_become_literals_when_not_allowed() {
        assert_eq!(
            render_segments("H:mm h", false),
            [
                field(TokenKind::Hour24, "H"),
                Segment::Divider(":"),
                field(TokenKind::Minute, "mm"),
                Segment::Divider(" "),
                Segment::Literal("h"),
            ]
        );
        assert_eq!(
            render_segments("H:mm h", true)[4],
            field(TokenKind::Hour12, "h")
        );
    }

    #[test]
    fn leading_zero_preference() {
        let token = |text| Token {
            kind: TokenKind::Minute,
            text,
        };
        assert_eq!(token("m").show_leading_zeros(false), Ok(false));
        assert_eq!(token("m").show_leading_zeros(true), Ok(true));
        assert_eq!(token("mm").show_leading_zeros(false), Ok(true));
        assert_eq!(
            token("mmm").show_leading_zeros(false),
            Err(TimeInputError::UnsupportedToken("mmm".to_owned()))
        );
    }
}
