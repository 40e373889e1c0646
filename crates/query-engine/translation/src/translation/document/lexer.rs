//! Split a query string into tokens.

use std::fmt;

use super::Location;
use crate::translation::error::Error;

#[derive(Debug, Clone, PartialEq)]
pub(super) enum TokenKind {
    BraceL,
    BraceR,
    ParenL,
    ParenR,
    BracketL,
    BracketR,
    Colon,
    Dollar,
    Spread,
    Name(String),
    Int(String),
    Float(String),
    String(String),
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TokenKind::BraceL => write!(f, "\"{{\""),
            TokenKind::BraceR => write!(f, "\"}}\""),
            TokenKind::ParenL => write!(f, "\"(\""),
            TokenKind::ParenR => write!(f, "\")\""),
            TokenKind::BracketL => write!(f, "\"[\""),
            TokenKind::BracketR => write!(f, "\"]\""),
            TokenKind::Colon => write!(f, "\":\""),
            TokenKind::Dollar => write!(f, "\"$\""),
            TokenKind::Spread => write!(f, "\"...\""),
            TokenKind::Name(name) => write!(f, "Name \"{name}\""),
            TokenKind::Int(text) => write!(f, "Int \"{text}\""),
            TokenKind::Float(text) => write!(f, "Float \"{text}\""),
            TokenKind::String(value) => write!(f, "String \"{value}\""),
            TokenKind::Eof => write!(f, "<EOF>"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(super) struct Token {
    pub kind: TokenKind,
    pub location: Location,
}

pub(super) struct Lexer {
    source: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Lexer {
            source: source.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    fn peek(&self) -> Option<char> {
        self.peek_nth(0)
    }

    fn peek_nth(&self, n: usize) -> Option<char> {
        self.source.get(self.position + n).copied()
    }

    fn location(&self) -> Location {
        Location {
            line: self.line,
            column: self.column,
        }
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Whitespace, commas, the byte order mark and comments carry no meaning.
    fn skip_ignored(&mut self) {
        while let Some(c) = self.peek() {
            match c {
                ' ' | '\t' | '\n' | '\r' | ',' | '\u{feff}' => {
                    self.bump();
                }
                '#' => {
                    while let Some(c) = self.peek() {
                        if c == '\n' || c == '\r' {
                            break;
                        }
                        self.bump();
                    }
                }
                _ => break,
            }
        }
    }

    pub fn next_token(&mut self) -> Result<Token, Error> {
        self.skip_ignored();
        let location = self.location();

        let Some(c) = self.peek() else {
            return Ok(Token {
                kind: TokenKind::Eof,
                location,
            });
        };

        let punctuator = match c {
            '{' => Some(TokenKind::BraceL),
            '}' => Some(TokenKind::BraceR),
            '(' => Some(TokenKind::ParenL),
            ')' => Some(TokenKind::ParenR),
            '[' => Some(TokenKind::BracketL),
            ']' => Some(TokenKind::BracketR),
            ':' => Some(TokenKind::Colon),
            '$' => Some(TokenKind::Dollar),
            _ => None,
        };

        let kind = if let Some(kind) = punctuator {
            self.bump();
            kind
        } else if c == '.' {
            if self.peek_nth(1) == Some('.') && self.peek_nth(2) == Some('.') {
                self.bump();
                self.bump();
                self.bump();
                TokenKind::Spread
            } else {
                return Err(Error::syntax("Unexpected character \".\".", location));
            }
        } else if is_name_start(c) {
            TokenKind::Name(self.read_name())
        } else if c == '-' || c.is_ascii_digit() {
            self.read_number()?
        } else if c == '"' {
            TokenKind::String(self.read_string()?)
        } else {
            return Err(Error::syntax(
                format!("Unexpected character \"{}\".", c.escape_default()),
                location,
            ));
        };

        Ok(Token { kind, location })
    }

    fn read_name(&mut self) -> String {
        let mut name = String::new();
        while let Some(c) = self.peek() {
            if !is_name_continue(c) {
                break;
            }
            name.push(c);
            self.bump();
        }
        name
    }

    fn read_digits(&mut self, text: &mut String) -> Result<(), Error> {
        match self.peek() {
            Some(c) if c.is_ascii_digit() => {}
            other => {
                return Err(Error::syntax(
                    format!("Invalid number, expected digit but got: {}.", describe(other)),
                    self.location(),
                ))
            }
        }
        while let Some(c) = self.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            text.push(c);
            self.bump();
        }
        Ok(())
    }

    fn read_number(&mut self) -> Result<TokenKind, Error> {
        let mut text = String::new();
        let mut is_float = false;

        if self.peek() == Some('-') {
            text.push('-');
            self.bump();
        }

        if self.peek() == Some('0') {
            text.push('0');
            self.bump();
            if let Some(c) = self.peek().filter(char::is_ascii_digit) {
                return Err(Error::syntax(
                    format!("Invalid number, unexpected digit after 0: \"{c}\"."),
                    self.location(),
                ));
            }
        } else {
            self.read_digits(&mut text)?;
        }

        if self.peek() == Some('.') {
            is_float = true;
            text.push('.');
            self.bump();
            self.read_digits(&mut text)?;
        }

        if let Some(e @ ('e' | 'E')) = self.peek() {
            is_float = true;
            text.push(e);
            self.bump();
            if let Some(sign @ ('+' | '-')) = self.peek() {
                text.push(sign);
                self.bump();
            }
            self.read_digits(&mut text)?;
        }

        if let Some(c) = self.peek().filter(|c| *c == '.' || is_name_start(*c)) {
            return Err(Error::syntax(
                format!("Invalid number, expected digit but got: \"{c}\"."),
                self.location(),
            ));
        }

        Ok(if is_float {
            TokenKind::Float(text)
        } else {
            TokenKind::Int(text)
        })
    }

    fn read_string(&mut self) -> Result<String, Error> {
        let start = self.location();
        if self.peek_nth(1) == Some('"') && self.peek_nth(2) == Some('"') {
            return Err(Error::syntax("Block strings are not supported.", start));
        }
        self.bump();

        let mut value = String::new();
        loop {
            let location = self.location();
            match self.bump() {
                None | Some('\n' | '\r') => {
                    return Err(Error::syntax("Unterminated string.", location))
                }
                Some('"') => return Ok(value),
                Some('\\') => value.push(self.read_escape(location)?),
                Some(c) if c < ' ' && c != '\t' => {
                    return Err(Error::syntax(
                        format!("Invalid character within String: \"{}\".", c.escape_default()),
                        location,
                    ))
                }
                Some(c) => value.push(c),
            }
        }
    }

    fn read_escape(&mut self, location: Location) -> Result<char, Error> {
        let escaped = match self.bump() {
            Some('"') => '"',
            Some('\\') => '\\',
            Some('/') => '/',
            Some('b') => '\u{8}',
            Some('f') => '\u{c}',
            Some('n') => '\n',
            Some('r') => '\r',
            Some('t') => '\t',
            Some('u') => {
                let mut hex = String::new();
                for _ in 0..4 {
                    match self.peek() {
                        Some(c) if c.is_ascii_hexdigit() => {
                            hex.push(c);
                            self.bump();
                        }
                        _ => break,
                    }
                }
                return u32::from_str_radix(&hex, 16)
                    .ok()
                    .filter(|_| hex.len() == 4)
                    .and_then(char::from_u32)
                    .ok_or_else(|| {
                        Error::syntax(
                            format!("Invalid Unicode escape sequence: \"\\u{hex}\"."),
                            location,
                        )
                    });
            }
            Some(c) => {
                return Err(Error::syntax(
                    format!(
                        "Invalid character escape sequence: \"\\{}\".",
                        c.escape_default()
                    ),
                    location,
                ))
            }
            None => return Err(Error::syntax("Unterminated string.", self.location())),
        };
        Ok(escaped)
    }
}

fn is_name_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic()
}

fn is_name_continue(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}

fn describe(c: Option<char>) -> String {
    match c {
        None => "<EOF>".to_string(),
        Some(c) => format!("\"{}\"", c.escape_default()),
    }
}
