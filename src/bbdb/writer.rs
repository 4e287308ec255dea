//! Sequential BBDB file output.

use super::formatter::FormattedRecord;
use std::io::{self, Write};

/// Header lines every BBDB file starts with: coding cookie, file format
/// version and the declared user fields.
pub const HEADER: [&str; 3] = [
    ";; -*-coding: utf-8-emacs;-*-",
    ";;; file-version: 6",
    ";;; user-fields: (title website department)",
];

/// Writes a BBDB file: the header once, then one record per line.
///
/// The writer owns its sink for the whole run and emits records in the
/// order they are handed in.
pub struct BbdbWriter<W: Write> {
    sink: W,
    records_written: usize,
}

impl<W: Write> BbdbWriter<W> {
    /// Wrap a sink and write the header.
    pub fn new(mut sink: W) -> io::Result<Self> {
        for line in HEADER {
            writeln!(sink, "{}", line)?;
        }
        Ok(Self {
            sink,
            records_written: 0,
        })
    }

    /// Append one record line.
    pub fn write_record(&mut self, record: &FormattedRecord) -> io::Result<()> {
        writeln!(self.sink, "{}", record)?;
        self.records_written += 1;
        Ok(())
    }

    pub fn records_written(&self) -> usize {
        self.records_written
    }

    /// Flush and hand back the sink.
    pub fn finish(mut self) -> io::Result<W> {
        self.sink.flush()?;
        Ok(self.sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bbdb::RecordFormatter;
    use crate::models::ContactRecord;

    #[test]
    fn test_header_only() {
        let writer = BbdbWriter::new(Vec::new()).unwrap();
        let out = String::from_utf8(writer.finish().unwrap()).unwrap();
        assert_eq!(
            out,
            ";; -*-coding: utf-8-emacs;-*-\n;;; file-version: 6\n;;; user-fields: (title website department)\n"
        );
    }

    #[test]
    fn test_records_follow_header_in_order() {
        let formatter = RecordFormatter::new();
        let mut writer = BbdbWriter::new(Vec::new()).unwrap();
        writer
            .write_record(&formatter.format_line(&ContactRecord::named("Ada Lovelace")))
            .unwrap();
        writer
            .write_record(&formatter.format_line(&ContactRecord::named("Madonna")))
            .unwrap();
        assert_eq!(writer.records_written(), 2);

        let out = String::from_utf8(writer.finish().unwrap()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[3].starts_with("[\"Ada\" \"Lovelace\""));
        assert!(lines[4].starts_with("[\"Madonna\" nil"));
    }
}
