//! A recursive descent parser over the token stream.

use indexmap::IndexMap;

use query_engine_metadata::metadata::InputValue;

use super::lexer::{Lexer, Token, TokenKind};
use super::{Argument, Document, Field, Location, OperationDefinition, OperationKind};
use crate::translation::error::Error;

/// Parse a query string into a document.
pub fn parse(query: &str) -> Result<Document, Error> {
    let mut parser = Parser::new(query)?;
    parser.parse_document()
}

/// How deep selection sets, lists and objects may nest, counted together.
pub const MAX_DEPTH: usize = 64;

struct Parser {
    lexer: Lexer,
    current: Token,
    depth: usize,
}

impl Parser {
    fn new(query: &str) -> Result<Self, Error> {
        let mut lexer = Lexer::new(query);
        let current = lexer.next_token()?;
        Ok(Parser {
            lexer,
            current,
            depth: 0,
        })
    }

    /// Enter a nested selection set or value, refusing to go past [`MAX_DEPTH`].
    fn descend(&mut self, location: Location) -> Result<(), Error> {
        if self.depth >= MAX_DEPTH {
            return Err(Error::syntax("Query is nested too deeply.", location));
        }
        self.depth += 1;
        Ok(())
    }

    fn ascend(&mut self) {
        self.depth -= 1;
    }

    fn advance(&mut self) -> Result<Token, Error> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    fn unexpected(&self) -> Error {
        Error::syntax(
            format!("Unexpected {}.", self.current.kind),
            self.current.location,
        )
    }

    fn expect(&mut self, kind: &TokenKind) -> Result<Location, Error> {
        if &self.current.kind == kind {
            Ok(self.advance()?.location)
        } else {
            Err(Error::syntax(
                format!("Expected {kind}, found {}.", self.current.kind),
                self.current.location,
            ))
        }
    }

    fn expect_name(&mut self) -> Result<(String, Location), Error> {
        match &self.current.kind {
            TokenKind::Name(name) => {
                let name = name.clone();
                Ok((name, self.advance()?.location))
            }
            other => Err(Error::syntax(
                format!("Expected Name, found {other}."),
                self.current.location,
            )),
        }
    }

    fn skip(&mut self, kind: &TokenKind) -> Result<bool, Error> {
        if &self.current.kind == kind {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn parse_document(&mut self) -> Result<Document, Error> {
        let mut operations = vec![self.parse_operation()?];
        while self.current.kind != TokenKind::Eof {
            operations.push(self.parse_operation()?);
        }
        Ok(Document { operations })
    }

    fn parse_operation(&mut self) -> Result<OperationDefinition, Error> {
        let location = self.current.location;
        let kind = match &self.current.kind {
            TokenKind::BraceL => {
                return Ok(OperationDefinition {
                    kind: OperationKind::Query,
                    name: None,
                    selection_set: self.parse_selection_set()?,
                    location,
                })
            }
            TokenKind::Name(keyword) => match keyword.as_str() {
                "query" => OperationKind::Query,
                "mutation" => OperationKind::Mutation,
                "subscription" => OperationKind::Subscription,
                "fragment" => return Err(Error::syntax("Fragments are not supported.", location)),
                _ => return Err(self.unexpected()),
            },
            _ => return Err(self.unexpected()),
        };
        self.advance()?;

        let name = match self.current.kind {
            TokenKind::Name(_) => Some(self.expect_name()?.0),
            _ => None,
        };

        if self.current.kind == TokenKind::ParenL {
            return Err(Error::syntax(
                "Variable definitions are not supported.",
                self.current.location,
            ));
        }

        Ok(OperationDefinition {
            kind,
            name,
            selection_set: self.parse_selection_set()?,
            location,
        })
    }

    fn parse_selection_set(&mut self) -> Result<Vec<Field>, Error> {
        let location = self.expect(&TokenKind::BraceL)?;
        self.descend(location)?;
        let mut fields = vec![self.parse_selection()?];
        while !self.skip(&TokenKind::BraceR)? {
            fields.push(self.parse_selection()?);
        }
        self.ascend();
        Ok(fields)
    }

    fn parse_selection(&mut self) -> Result<Field, Error> {
        if self.current.kind == TokenKind::Spread {
            return Err(Error::syntax(
                "Fragments are not supported.",
                self.current.location,
            ));
        }

        let (name_or_alias, location) = self.expect_name()?;
        let (alias, name) = if self.skip(&TokenKind::Colon)? {
            (Some(name_or_alias), self.expect_name()?.0)
        } else {
            (None, name_or_alias)
        };

        let arguments = if self.current.kind == TokenKind::ParenL {
            self.parse_arguments()?
        } else {
            vec![]
        };

        let selection_set = if self.current.kind == TokenKind::BraceL {
            Some(self.parse_selection_set()?)
        } else {
            None
        };

        Ok(Field {
            alias,
            name,
            arguments,
            selection_set,
            location,
        })
    }

    fn parse_arguments(&mut self) -> Result<Vec<Argument>, Error> {
        self.expect(&TokenKind::ParenL)?;
        let mut arguments = vec![];
        loop {
            let (name, location) = self.expect_name()?;
            self.expect(&TokenKind::Colon)?;
            let value = self.parse_value()?;
            arguments.push(Argument {
                name,
                value,
                location,
            });
            if self.skip(&TokenKind::ParenR)? {
                return Ok(arguments);
            }
        }
    }

    fn parse_value(&mut self) -> Result<InputValue, Error> {
        match &self.current.kind {
            TokenKind::Dollar => Err(Error::syntax(
                "Variables are not supported.",
                self.current.location,
            )),
            TokenKind::BracketL => {
                let location = self.advance()?.location;
                self.descend(location)?;
                let mut values = vec![];
                while !self.skip(&TokenKind::BracketR)? {
                    values.push(self.parse_value()?);
                }
                self.ascend();
                Ok(InputValue::List(values))
            }
            TokenKind::BraceL => {
                let location = self.advance()?.location;
                self.descend(location)?;
                let mut fields = IndexMap::new();
                while !self.skip(&TokenKind::BraceR)? {
                    let (name, _) = self.expect_name()?;
                    self.expect(&TokenKind::Colon)?;
                    fields.insert(name, self.parse_value()?);
                }
                self.ascend();
                Ok(InputValue::Object(fields))
            }
            TokenKind::String(value) => {
                let value = InputValue::String(value.clone());
                self.advance()?;
                Ok(value)
            }
            TokenKind::Int(text) => {
                let value = InputValue::Int(text.clone());
                self.advance()?;
                Ok(value)
            }
            TokenKind::Float(text) => {
                let value = InputValue::Float(text.clone());
                self.advance()?;
                Ok(value)
            }
            TokenKind::Name(name) => {
                let value = match name.as_str() {
                    "true" => InputValue::Boolean(true),
                    "false" => InputValue::Boolean(false),
                    "null" => InputValue::Null,
                    _ => InputValue::Enum(name.clone()),
                };
                self.advance()?;
                Ok(value)
            }
            _ => Err(self.unexpected()),
        }
    }
}
