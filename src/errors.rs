use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write output: {0}")]
    Write(#[from] io::Error),

    #[error(transparent)]
    Pattern(#[from] PatternError),
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("{desc}")]
pub struct PatternError {
    desc: String,
    line: u32,
    column: u32,
}

impl PatternError {
    pub fn new(filename: &str, line: u32, column: u32, message: &str) -> PatternError {
        let desc = format!("{}:{}:{}: {}", filename, line, column, message);
        PatternError { desc, line, column }
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }
}
