use std::io;
use std::io::Write;

use crate::errors::Error;
use crate::parser::Equation;

pub trait Renderer {
    fn write_equation(&mut self, equation: &Equation) -> Result<(), Error>;
}

/// Writes each field on its own line, X column first.
pub struct PlainRenderer<W: io::Write> {
    stream: W,
}

impl<W: io::Write> PlainRenderer<W> {
    pub fn new(stream: W) -> Self {
        Self { stream }
    }

    pub fn into_inner(self) -> W {
        self.stream
    }
}

impl<W: io::Write> Renderer for PlainRenderer<W> {
    fn write_equation(&mut self, equation: &Equation) -> Result<(), Error> {
        for value in equation.values() {
            writeln!(self.stream, "{}", value)?;
        }

        /* Earlier blocks stay visible if a later block fails */
        self.stream.flush()?;

        Ok(())
    }
}
