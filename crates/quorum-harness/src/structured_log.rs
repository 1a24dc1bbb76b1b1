//! One JSON object per line, written to a report file alongside the
//! harness's human-readable `eprintln!` progress: console noise and a
//! machine-parsable record of what ran are kept separate.

use std::io::{self, Write};

use serde::Serialize;

/// One fixture's outcome, in the shape written to the report file.
#[derive(Debug, Serialize)]
pub struct LogEntry<'a> {
    pub name: &'a str,
    pub passed: bool,
    pub detail: &'a str,
}

/// Appends `entries` to `writer` as newline-delimited JSON, one object per
/// line.
pub fn write_jsonl<'a, W: Write>(
    writer: &mut W,
    entries: impl IntoIterator<Item = LogEntry<'a>>,
) -> io::Result<()> {
    for entry in entries {
        serde_json::to_writer(&mut *writer, &entry)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_one_json_object_per_line() {
        let entries = vec![
            LogEntry {
                name: "unanimous",
                passed: true,
                detail: "ok",
            },
            LogEntry {
                name: "forked",
                passed: false,
                detail: "mismatch",
            },
        ];
        let mut buf = Vec::new();
        write_jsonl(&mut buf, entries).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("\"unanimous\""));
        assert!(lines[1].contains("\"forked\""));
    }
}
