//! Report sink port
//!
//! Report lines go to a [`ReportSink`] instead of straight to stdout, so
//! callers decide where output ends up. A `Vec<ReportLine>` collects lines
//! in memory; [`WriterSink`] prints them to any `io::Write`.

use std::io::{self, Write};

use crate::domain::ReportLine;

/// Destination for report lines
pub trait ReportSink {
    fn emit(&mut self, line: ReportLine) -> io::Result<()>;
}

impl ReportSink for Vec<ReportLine> {
    fn emit(&mut self, line: ReportLine) -> io::Result<()> {
        self.push(line);
        Ok(())
    }
}

/// Writes each report line, newline-terminated, to the wrapped writer
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for WriterSink<W> {
    fn emit(&mut self, line: ReportLine) -> io::Result<()> {
        writeln!(self.writer, "{line}")
    }
}
