//! Extracts the button offsets and prize position of every claw machine in a puzzle input.
//!
//! The input is a sequence of blocks separated by blank lines:
//!
//! ```text
//! Button A: X+94, Y+34
//! Button B: X+22, Y+67
//! Prize: X=8400, Y=5400
//! ```
//!
//! Each block is printed as six lines: the three X fields, then the three Y fields.

use std::path::PathBuf;

use tracing::{debug, info, warn};

pub mod document;
pub mod errors;
pub mod lexer;
pub mod parser;
pub mod renderers;
pub mod stream;

use crate::document::Document;
use crate::errors::Result;
use crate::renderers::Renderer;

#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub blocks: usize,
}

pub fn run<R: Renderer>(config: &Config, renderer: &mut R) -> Result<Summary> {
    let document = Document::load(&config.input)?;
    info!(path = %config.input.display(), bytes = document.text().len(), "loaded input");

    run_document(&document, renderer)
}

/// Parses and renders blocks in order, stopping at the first block that fails.
pub fn run_document<R: Renderer>(document: &Document, renderer: &mut R) -> Result<Summary> {
    let mut summary = Summary { blocks: 0 };

    for block in document.blocks() {
        let equation = match parser::parse_block(&document.filename, &block) {
            Ok(equation) => equation,
            Err(error) => {
                warn!(block = block.index, line = block.line, "cannot parse block");
                return Err(error.into());
            }
        };
        debug!(block = block.index, line = block.line, ?equation, "parsed block");

        renderer.write_equation(&equation)?;
        summary.blocks += 1;
    }

    info!(blocks = summary.blocks, "done");
    Ok(summary)
}
