use std::{
    cell::RefCell,
    io::{self, Stdout, Write},
    rc::Rc,
};

use thiserror::Error;

use crate::display::DisplayLine;

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("Unable to write display line: {0}")]
    Io(#[from] io::Error),
}

/// Line oriented destination of display lines.
pub trait LineSink {
    fn emit(&mut self, line: &DisplayLine) -> Result<(), SinkError>;

    fn flush(&mut self) -> Result<(), SinkError> {
        Ok(())
    }
}

pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        WriterSink { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterSink<Stdout> {
    pub fn stdout() -> Self {
        WriterSink::new(io::stdout())
    }
}

impl<W: Write> LineSink for WriterSink<W> {
    fn emit(&mut self, line: &DisplayLine) -> Result<(), SinkError> {
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), SinkError> {
        self.writer.flush()?;
        Ok(())
    }
}

/// In-memory sink. Clones share the same buffer.
#[derive(Clone, Default)]
pub struct MemorySink {
    lines: Rc<RefCell<Vec<DisplayLine>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<DisplayLine> {
        self.lines.borrow().clone()
    }

    pub fn take(&self) -> Vec<DisplayLine> {
        self.lines.take()
    }
}

impl LineSink for MemorySink {
    fn emit(&mut self, line: &DisplayLine) -> Result<(), SinkError> {
        self.lines.borrow_mut().push(line.clone());
        Ok(())
    }
}
