use std::fs;
use std::path::Path;

use crate::errors::{Error, Result};

const BLOCK_SEPARATOR: &str = "\n\n";

pub struct Document {
    pub filename: String,
    text: String,
}

/// One group of equations: two button lines followed by a prize line.
#[derive(Debug, PartialEq, Eq)]
pub struct Block<'a> {
    /// 1-based position of the block in the document
    pub index: usize,
    /// 1-based line number of the block's first line
    pub line: u32,
    pub text: &'a str,
}

impl Document {
    pub fn new(filename: String, text: &str) -> Document {
        Self {
            filename,
            text: text.replace('\r', ""),
        }
    }

    pub fn load(path: &Path) -> Result<Document> {
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Document::new(path.display().to_string(), &text))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn blocks(&self) -> impl Iterator<Item = Block<'_>> {
        let mut line = 1;

        self.text.split(BLOCK_SEPARATOR).enumerate().map(move |(index, text)| {
            let block = Block {
                index: index + 1,
                line,
                text,
            };
            line += text.matches('\n').count() as u32 + 2;
            block
        })
    }
}

impl<'a> Block<'a> {
    /// Lines paired with their absolute line numbers.
    pub fn lines(&self) -> impl Iterator<Item = (u32, &'a str)> {
        let first = self.line;
        self.text.split('\n').enumerate().map(move |(offset, text)| (first + offset as u32, text))
    }
}
