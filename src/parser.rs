use crate::document::Block;
use crate::errors::PatternError;
use crate::lexer::{find_field, FieldPattern, X_OFFSET, X_TARGET, Y_OFFSET, Y_TARGET};

/// The six fields of one block, kept as the digit runs found in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equation {
    /// X+ of button A, X+ of button B, X= of the prize
    pub x: [String; 3],
    /// Y+ of button A, Y+ of button B, Y= of the prize
    pub y: [String; 3],
}

impl Equation {
    /// Fields in output order: the X column, then the Y column.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.x.iter().chain(self.y.iter()).map(String::as_str)
    }
}

macro_rules! pattern_error {
    ($filename:expr, $line:expr, $column:expr, $( $format_params:expr ),+) => {{
        let message = format!($($format_params),*);
        Err(PatternError::new($filename, $line, $column, &message))
    }};
}

/* Line patterns in extraction order: every X field, then every Y field */
const EXTRACTION_ORDER: [(usize, FieldPattern); 6] = [
    (0, X_OFFSET),
    (1, X_OFFSET),
    (2, X_TARGET),
    (0, Y_OFFSET),
    (1, Y_OFFSET),
    (2, Y_TARGET),
];

pub fn parse_block(filename: &str, block: &Block) -> Result<Equation, PatternError> {
    let lines: Vec<(u32, &str)> = block.lines().take(3).collect();
    let mut values: [String; 6] = Default::default();

    for (slot, &(index, pattern)) in EXTRACTION_ORDER.iter().enumerate() {
        let (line, text) = match lines.get(index) {
            Some(&line) => line,
            None => {
                return pattern_error!(
                    filename,
                    block.line + index as u32,
                    1,
                    "block {} is missing line {} (expected `{}`)",
                    block.index,
                    index + 1,
                    pattern
                );
            }
        };

        match find_field(line, text, pattern) {
            Some(field) => values[slot] = field.value,
            None => return pattern_error!(filename, line, 1, "expected `{}` in block {}", pattern, block.index),
        }
    }

    let [x1, x2, x3, y1, y2, y3] = values;

    Ok(Equation {
        x: [x1, x2, x3],
        y: [y1, y2, y3],
    })
}
