//! Recursive-descent JSON parser
//!
//! Single pass with one byte of lookahead: each production consumes exactly
//! the characters it grammatically owns and leaves the cursor on the first
//! unconsumed one. The top-level entry points require the whole input to be
//! consumed; any failure aborts the parse with no partial value.

mod builder;
mod cursor;

use builder::{ArenaBuilder, Elements, Members, OwnedBuilder, ValueBuilder};
use cursor::Cursor;
use smallvec::SmallVec;

use crate::error::{Error, Result};
use crate::memory::Arena;
use crate::value::{ArenaValue, JsonValue};

/// Default container nesting limit
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Parser tuning knobs
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Maximum container nesting depth before the parse is rejected with
    /// `DepthLimitExceeded`
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// JSON parser entry point
///
/// Duplicate object keys are accepted; the last occurrence wins in both parse
/// modes.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a parser with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with a custom configuration
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse JSON text into an owned value tree
    pub fn parse(&self, input: &str) -> Result<JsonValue> {
        tracing::trace!(len = input.len(), "parsing document");
        ParseRun::new(input, OwnedBuilder, self.config.max_depth).parse_document()
    }

    /// Parse JSON text, routing string and container storage through `arena`.
    ///
    /// The returned tree borrows the arena; it must be dropped before the
    /// arena can be cleared or dropped.
    pub fn parse_with_arena<'a>(&self, input: &str, arena: &'a Arena) -> Result<ArenaValue<'a>> {
        tracing::trace!(
            len = input.len(),
            arena_remaining = arena.remaining_bytes(),
            "parsing document into arena"
        );
        ParseRun::new(input, ArenaBuilder { arena }, self.config.max_depth).parse_document()
    }
}

/// Parse JSON text into an owned value tree with default settings
pub fn parse(input: &str) -> Result<JsonValue> {
    Parser::new().parse(input)
}

/// Parse JSON text into an arena-backed value tree with default settings
pub fn parse_with_arena<'a>(input: &str, arena: &'a Arena) -> Result<ArenaValue<'a>> {
    Parser::new().parse_with_arena(input, arena)
}

/// One parse over one input with one storage strategy
struct ParseRun<'s, B: ValueBuilder> {
    cursor: Cursor<'s>,
    builder: B,
    depth: usize,
    max_depth: usize,
}

impl<'s, B: ValueBuilder> ParseRun<'s, B> {
    fn new(input: &'s str, builder: B, max_depth: usize) -> Self {
        Self {
            cursor: Cursor::new(input),
            builder,
            depth: 0,
            max_depth,
        }
    }

    fn parse_document(mut self) -> Result<B::Value> {
        self.cursor.skip_whitespace();
        if self.cursor.is_eof() {
            return Err(Error::end_of_input(self.cursor.position()));
        }
        let value = self.parse_value()?;
        self.cursor.skip_whitespace();
        if !self.cursor.is_eof() {
            return Err(Error::TrailingData {
                position: self.cursor.position(),
            });
        }
        Ok(value)
    }

    fn parse_value(&mut self) -> Result<B::Value> {
        match self.cursor.peek() {
            None => Err(Error::end_of_input(self.cursor.position())),
            Some(b'{') => self.parse_object(),
            Some(b'[') => self.parse_array(),
            Some(b'"') => {
                let text = self.cursor.read_string()?;
                self.builder.string(&text)
            }
            Some(b't') => {
                self.cursor.eat_literal("true")?;
                Ok(self.builder.boolean(true))
            }
            Some(b'f') => {
                self.cursor.eat_literal("false")?;
                Ok(self.builder.boolean(false))
            }
            Some(b'n') => {
                self.cursor.eat_literal("null")?;
                Ok(self.builder.null())
            }
            Some(b'-' | b'0'..=b'9') => self.parse_number(),
            Some(_) => Err(Error::unexpected_token(
                self.cursor.position(),
                "value",
                self.cursor.current_char(),
            )),
        }
    }

    fn parse_number(&mut self) -> Result<B::Value> {
        let position = self.cursor.position();
        let token = self.cursor.read_number()?;
        if token.is_float {
            // The grammar was validated by the cursor; out-of-range floats
            // saturate to infinity per IEEE semantics.
            let value: f64 = token.text.parse().map_err(|_| Error::NumericOverflow {
                position,
                literal: token.text.to_string(),
            })?;
            Ok(self.builder.float(value))
        } else {
            let value: i64 = token.text.parse().map_err(|_| Error::NumericOverflow {
                position,
                literal: token.text.to_string(),
            })?;
            Ok(self.builder.integer(value))
        }
    }

    fn parse_array(&mut self) -> Result<B::Value> {
        let open_position = self.cursor.position();
        self.enter(open_position)?;
        self.cursor.bump();
        self.cursor.skip_whitespace();

        let mut items: Elements<B::Value> = SmallVec::new();
        if self.cursor.peek() == Some(b']') {
            self.cursor.bump();
            self.leave();
            return self.builder.array(items);
        }

        loop {
            let value = self.parse_value()?;
            items.push(value);
            self.cursor.skip_whitespace();
            match self.cursor.peek() {
                Some(b',') => {
                    self.cursor.bump();
                    self.cursor.skip_whitespace();
                }
                Some(b']') => {
                    self.cursor.bump();
                    break;
                }
                Some(_) => {
                    return Err(Error::unexpected_token(
                        self.cursor.position(),
                        "',' or ']'",
                        self.cursor.current_char(),
                    ));
                }
                None => return Err(Error::end_of_input(self.cursor.position())),
            }
        }

        self.leave();
        self.builder.array(items)
    }

    fn parse_object(&mut self) -> Result<B::Value> {
        let open_position = self.cursor.position();
        self.enter(open_position)?;
        self.cursor.bump();
        self.cursor.skip_whitespace();

        let mut members: Members<B::Str, B::Value> = SmallVec::new();
        if self.cursor.peek() == Some(b'}') {
            self.cursor.bump();
            self.leave();
            return self.builder.object(members);
        }

        loop {
            let key_text = self.cursor.read_string()?;
            let key = self.builder.key(&key_text)?;

            self.cursor.skip_whitespace();
            self.cursor.expect_byte(b':', "':'")?;
            self.cursor.skip_whitespace();

            let value = self.parse_value()?;
            members.push((key, value));

            self.cursor.skip_whitespace();
            match self.cursor.peek() {
                Some(b',') => {
                    self.cursor.bump();
                    self.cursor.skip_whitespace();
                }
                Some(b'}') => {
                    self.cursor.bump();
                    break;
                }
                Some(_) => {
                    return Err(Error::unexpected_token(
                        self.cursor.position(),
                        "',' or '}'",
                        self.cursor.current_char(),
                    ));
                }
                None => return Err(Error::end_of_input(self.cursor.position())),
            }
        }

        self.leave();
        self.builder.object(members)
    }

    fn enter(&mut self, position: usize) -> Result<()> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(Error::DepthLimitExceeded {
                position,
                limit: self.max_depth,
            });
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }
}
