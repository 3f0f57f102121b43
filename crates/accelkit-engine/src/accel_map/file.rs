//! Accelerator map file format.
//!
//! One entry per line: `(gtk_accel_path "<path>" "<accelerator-name>")`.
//! Lines starting with `;` are comments. Anything else that does not match
//! the entry grammar is skipped on load.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::sync::LazyLock;

use accelkit_common::AccelError;
use regex::Regex;

use super::map::{AccelMap, AccelPathEntry, Changes};
use super::path::is_valid_accel_path;
use crate::keymap::{accelerator_name, accelerator_parse};

const HEADER: &str = "; accelkit accelerator map\n\
; Lines starting with ';' are ignored. Edit the accelerator strings to rebind.\n";

static LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\(gtk_accel_path\s+"((?:[^"\\]|\\.)*)"\s+"((?:[^"\\]|\\.)*)"\s*\)$"#).unwrap()
});

/// Write one line per entry, in path order, after a comment header.
pub(crate) fn write_entries<W: Write>(
    entries: &[AccelPathEntry],
    writer: &mut W,
) -> std::io::Result<()> {
    writer.write_all(HEADER.as_bytes())?;
    for entry in entries {
        writeln!(writer, "{}", format_line(entry))?;
    }
    writer.flush()
}

pub(crate) fn format_line(entry: &AccelPathEntry) -> String {
    let accel = accelerator_name(entry.key.key, entry.key.modifier);
    format!(
        "(gtk_accel_path \"{}\" \"{}\")",
        escape(&entry.path),
        escape(&accel)
    )
}

/// Split an entry line into `(path, accelerator)`, unescaped.
pub(crate) fn parse_line(line: &str) -> Option<(String, String)> {
    let caps = LINE_RE.captures(line.trim())?;
    Some((unescape(&caps[1]), unescape(&caps[2])))
}

/// Result of reading a map file into an [`AccelMap`].
///
/// A read failure ends the load early, but entries applied before it stay
/// in the map and their change notifications are still delivered.
#[must_use]
pub(crate) struct Loaded {
    count: usize,
    changes: Changes,
    error: Option<std::io::Error>,
}

impl Loaded {
    /// Notify listeners, then report the read failure if there was one.
    pub(crate) fn finish(self) -> Result<usize, AccelError> {
        self.changes.notify();
        match self.error {
            Some(e) => Err(e.into()),
            None => Ok(self.count),
        }
    }
}

/// Read entry lines into `map`. Lines that are not valid UTF-8 or do not
/// parse are skipped with a warning.
pub(crate) fn read_entries<R: BufRead>(map: &mut AccelMap, reader: R) -> Loaded {
    let mut applied = Vec::new();
    let mut error = None;

    for (index, line) in reader.split(b'\n').enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!(line = index + 1, "accel map read failed: {e}");
                error = Some(e);
                break;
            }
        };
        let Ok(line) = String::from_utf8(line) else {
            tracing::warn!(line = index + 1, "skipping accel map line that is not UTF-8");
            continue;
        };
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with(';') {
            continue;
        }

        let Some((path, accel)) = parse_line(trimmed) else {
            tracing::warn!(line = index + 1, "skipping unrecognized accel map line");
            continue;
        };
        if !is_valid_accel_path(&path) {
            tracing::warn!(line = index + 1, path = %path, "skipping invalid accel path");
            continue;
        }
        let Some((key, modifier)) = accelerator_parse(&accel) else {
            tracing::warn!(line = index + 1, accel = %accel, "skipping unparsable accelerator");
            continue;
        };

        let key = map.store(&path, key, modifier);
        applied.push((path, key));
    }

    Loaded {
        count: applied.len(),
        changes: map.changes(applied),
        error,
    }
}

impl AccelMap {
    /// Serialize every entry to `writer`.
    pub fn save_to_writer<W: Write>(&self, writer: &mut W) -> Result<(), AccelError> {
        write_entries(&self.snapshot(false), writer)?;
        Ok(())
    }

    /// Parse entries from `reader`, upserting each one. Returns how many
    /// entries were applied; malformed lines are skipped. On a read error
    /// the entries before it stay applied.
    pub fn load_from_reader<R: BufRead>(&mut self, reader: R) -> Result<usize, AccelError> {
        read_entries(self, reader).finish()
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), AccelError> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        self.save_to_writer(&mut writer)?;
        tracing::info!(path = %path.display(), entries = self.len(), "saved accel map");
        Ok(())
    }

    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<usize, AccelError> {
        let path = path.as_ref();
        let count = self.load_from_reader(BufReader::new(File::open(path)?))?;
        tracing::info!(path = %path.display(), entries = count, "loaded accel map");
        Ok(count)
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::{AccelKey, AccelFlags, ModifierType};

    fn entry(path: &str, key: u32, modifier: ModifierType) -> AccelPathEntry {
        AccelPathEntry {
            path: path.into(),
            key: AccelKey::new(key, modifier, AccelFlags::empty()),
            changed: true,
        }
    }

    #[test]
    fn format_entry_line() {
        let line = format_line(&entry("<Test>/Test", 113, ModifierType::CONTROL));
        assert_eq!(line, r#"(gtk_accel_path "<Test>/Test" "<Primary>q")"#);
    }

    #[test]
    fn format_unnamed_key_as_empty() {
        let line = format_line(&entry("<Test>/None", 0, ModifierType::empty()));
        assert_eq!(line, r#"(gtk_accel_path "<Test>/None" "")"#);
    }

    #[test]
    fn parse_entry_line() {
        let parsed = parse_line(r#"(gtk_accel_path "<Test>/Test" "<Control>q")"#);
        assert_eq!(
            parsed,
            Some(("<Test>/Test".to_string(), "<Control>q".to_string()))
        );
    }

    #[test]
    fn parse_rejects_other_lines() {
        assert_eq!(parse_line("; (gtk_accel_path \"<a>/b\" \"q\")"), None);
        assert_eq!(parse_line("(gtk_accel_path \"<a>/b\")"), None);
        assert_eq!(parse_line("garbage"), None);
    }

    #[test]
    fn escaping_round_trips() {
        let original = entry("<Test>/Say \"hi\" \\ bye", 113, ModifierType::SHIFT);
        let line = format_line(&original);
        let (path, accel) = parse_line(&line).unwrap();
        assert_eq!(path, original.path);
        assert_eq!(accel, "<Shift>q");
    }

    #[test]
    fn write_includes_header_and_entries() {
        let mut out = Vec::new();
        write_entries(
            &[
                entry("<Test>/A", 97, ModifierType::CONTROL),
                entry("<Test>/B", 98, ModifierType::MOD1),
            ],
            &mut out,
        )
        .unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with(';'));
        assert!(lines.contains(&r#"(gtk_accel_path "<Test>/A" "<Primary>a")"#));
        assert!(lines.contains(&r#"(gtk_accel_path "<Test>/B" "<Alt>b")"#));
    }
}
