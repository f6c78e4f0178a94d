use std::{fmt, fs, io::Write, path::Path};

use crate::{DemoError, files::Workspace};

/// One `name:population` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatEntry {
    pub name: String,
    pub population: i64,
}

impl fmt::Display for StatEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {}", self.name, self.population)
    }
}

/// Length of the leading integer in `text` (optional sign, then digits).
fn integer_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'-' | b'+')) {
        end = 1;
    }
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    end
}

/// Parses `name:count` entries separated by whitespace.
///
/// The name is everything up to the next `:` (so it may contain spaces);
/// the count is the integer right after it. Parsing stops at the first entry
/// whose count is missing or malformed, keeping the entries before it.
pub fn parse_stats(text: &str) -> Vec<StatEntry> {
    let mut entries = Vec::new();
    let mut rest = text.trim_start();

    while let Some((name, after)) = rest.split_once(':') {
        let after = after.trim_start();
        let end = integer_prefix_len(after);

        let Ok(population) = after[..end].parse::<i64>() else {
            break;
        };

        entries.push(StatEntry {
            name: name.to_owned(),
            population,
        });
        rest = after[end..].trim_start();
    }

    entries
}

pub fn read_stats(path: &Path) -> Result<Vec<StatEntry>, DemoError> {
    let text = fs::read_to_string(path).map_err(|e| DemoError::open_failed(path, e))?;
    Ok(parse_stats(&text))
}

/// Prints `<name> -- <population>` for each entry of the workspace stats file.
pub fn print_stats<W: Write>(workspace: &Workspace, out: &mut W) -> Result<(), DemoError> {
    for entry in read_stats(&workspace.stats_file())? {
        writeln!(out, "{entry}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, population: i64) -> StatEntry {
        StatEntry {
            name: name.to_string(),
            population,
        }
    }

    #[test]
    fn test_parse_lines() {
        let text = "Spain:47000000\nFrance: 68000000\n\nNew Zealand:5100000\n";
        assert_eq!(
            parse_stats(text),
            vec![
                entry("Spain", 47_000_000),
                entry("France", 68_000_000),
                entry("New Zealand", 5_100_000),
            ]
        );
    }

    #[test]
    fn test_stops_at_malformed_count() {
        let text = "Spain:47000000\nAtlantis:unknown\nFrance:68000000\n";
        assert_eq!(parse_stats(text), vec![entry("Spain", 47_000_000)]);
    }

    #[test]
    fn test_trailing_text_without_delimiter() {
        assert_eq!(parse_stats("Peru:34000000\nleftovers"), vec![entry("Peru", 34_000_000)]);
        assert!(parse_stats("").is_empty());
    }

    #[test]
    fn test_signed_counts() {
        assert_eq!(parse_stats("Delta:-5 Gamma:+7"), vec![entry("Delta", -5), entry("Gamma", 7)]);
    }

    #[test]
    fn test_print_stats_file() {
        let dir = tempfile::tempdir().unwrap();
        let workspace = Workspace::new(dir.path());
        fs::write(workspace.stats_file(), "Italy:59000000\nPortugal:10300000\n").unwrap();

        let mut out = Vec::new();
        print_stats(&workspace, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Italy -- 59000000\nPortugal -- 10300000\n"
        );
    }

    #[test]
    fn test_missing_stats_file() {
        let dir = tempfile::tempdir().unwrap();
        let workspace = Workspace::new(dir.path());
        let err = print_stats(&workspace, &mut Vec::new()).unwrap_err();
        assert!(matches!(err, DemoError::OpenFailed { .. }));
    }
}
