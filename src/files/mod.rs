pub mod binary;
pub mod parsing;
pub mod text;
pub mod workspace;

use std::io::Write;

pub use parsing::StatEntry;
pub use workspace::Workspace;

use crate::DemoError;

/// Runs `step`, reporting a file that couldn't be opened instead of failing.
///
/// Text files report a bare `Unable to open file`; the binary file is
/// reported by its file name.
fn attempt<W: Write>(
    out: &mut W,
    file_name: Option<&str>,
    step: impl FnOnce(&mut W) -> Result<(), DemoError>,
) -> Result<(), DemoError> {
    match step(out) {
        Err(DemoError::OpenFailed { .. }) => {
            match file_name {
                Some(name) => writeln!(out, "Could not open file {name}")?,
                None => writeln!(out, "Unable to open file")?,
            }
            Ok(())
        }
        other => other,
    }
}

/// Every file demo in turn: text write, append and read, the binary records,
/// then the stats file.
pub fn run<W: Write>(workspace: &Workspace, out: &mut W) -> Result<(), DemoError> {
    let binary_file = Some(Workspace::BINARY_FILE);

    attempt(out, None, |out| text::write_output_file(workspace, out))?;
    attempt(out, None, |out| text::append_to_file(workspace, out))?;
    attempt(out, None, |out| text::read_input_file(workspace, out))?;
    attempt(out, binary_file, |_| binary::write_binary_file(workspace))?;
    attempt(out, binary_file, |out| binary::read_binary_file(workspace, out))?;
    attempt(out, None, |out| parsing::print_stats(workspace, out))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_run_without_stats_file() {
        let dir = tempfile::tempdir().unwrap();
        let workspace = Workspace::new(dir.path());

        let mut out = Vec::new();
        run(&workspace, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();

        assert!(output.starts_with(
            "File written successfully\n\
             File written successfully\n\
             Hello, world!\n\
             This is a test file.\n\
             This is a new line.\n\
             Name: Frodo\n"
        ));
        assert!(output.ends_with("Name: Aragorn\nAge: 300\nHeight: 1.9\n\nUnable to open file\n"));
    }

    #[test]
    fn test_run_with_stats_file() {
        let dir = tempfile::tempdir().unwrap();
        let workspace = Workspace::new(dir.path());
        fs::write(workspace.stats_file(), "Chile:19000000\n").unwrap();

        let mut out = Vec::new();
        run(&workspace, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().ends_with("\nChile -- 19000000\n"));
    }

    #[test]
    fn test_missing_directory_keeps_going() {
        let dir = tempfile::tempdir().unwrap();
        let workspace = Workspace::new(dir.path().join("missing"));

        let mut out = Vec::new();
        run(&workspace, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "Unable to open file");
        assert_eq!(lines[3], "Could not open file test.bin");
        assert_eq!(lines[4], "Could not open file test.bin");
        assert_eq!(lines[5], "Unable to open file");
    }
}
