use std::fmt;

use crate::stream::Stream;

macro_rules! consume {
    ($self:ident, $predicate:expr, $matched:ident, $unmatched:ident) => {
        while let Some(byte) = $self.stream.peek() {
            if ($predicate)(byte) {
                $matched!(byte);
            } else {
                $unmatched!(byte);
            }
            $self.stream.forward()
        }
    };
}

macro_rules! munch_while {
    ($self:ident, $lexeme:ident, :numeric) => {
        munch_while!($self, $lexeme, |byte: u8| byte.is_ascii_digit())
    };

    ($self:ident, $lexeme:ident, $predicate:expr) => {
        macro_rules! matched {
            ($byte:ident) => { $lexeme.push($byte as char); }
        }
        macro_rules! unmatched {
            ($byte:ident) => { break; }
        }
        consume!($self, $predicate, matched, unmatched)
    };
}

macro_rules! skip_until {
    ($self:ident, $predicate:expr) => {
        macro_rules! matched {
            ($byte:ident) => { break; }
        }
        macro_rules! unmatched {
            ($byte:ident) => { (); }
        }
        consume!($self, $predicate, matched, unmatched)
    };
}

/// A field looks like `<axis><sign><digits>`, e.g. `X+94` on a button line or `Y=5400` on
/// the prize line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldPattern {
    pub axis: u8,
    pub sign: u8,
}

pub const X_OFFSET: FieldPattern = FieldPattern { axis: b'X', sign: b'+' };
pub const Y_OFFSET: FieldPattern = FieldPattern { axis: b'Y', sign: b'+' };
pub const X_TARGET: FieldPattern = FieldPattern { axis: b'X', sign: b'=' };
pub const Y_TARGET: FieldPattern = FieldPattern { axis: b'Y', sign: b'=' };

impl fmt::Display for FieldPattern {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{}{}<digits>", self.axis as char, self.sign as char)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Field {
    pub value: String,
    pub line: u32,
    pub column: u32,
}

pub struct Lexer<I: Iterator<Item = u8>> {
    stream: Stream<I>,
}

impl<I: Iterator<Item = u8>> Lexer<I> {
    pub fn new(stream: Stream<I>) -> Lexer<I> {
        Self { stream }
    }

    /// Finds the leftmost occurrence of `pattern` whose digit run is non-empty. The digit run
    /// is taken greedily; anything around the field is ignored.
    pub fn find(&mut self, pattern: FieldPattern) -> Option<Field> {
        loop {
            skip_until!(self, |byte: u8| byte == pattern.axis);

            self.stream.peek()?;
            let line = self.stream.line;
            let column = self.stream.column;
            self.stream.forward();

            /* An axis letter without its sign may still be followed by another axis letter,
             * so leave the next byte for the following scan */
            if self.stream.peek() != Some(pattern.sign) {
                continue;
            }
            self.stream.forward();

            let mut value = String::new();
            munch_while!(self, value, :numeric);

            if !value.is_empty() {
                return Some(Field { value, line, column });
            }
        }
    }
}

pub fn find_field(line: u32, text: &str, pattern: FieldPattern) -> Option<Field> {
    let stream = Stream::new(line, text.bytes());
    Lexer::new(stream).find(pattern)
}
