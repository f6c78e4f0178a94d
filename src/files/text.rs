use std::{
    fs::{File, OpenOptions},
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{DemoError, files::Workspace};

pub const FIRST_LINES: [&str; 2] = ["Hello, world!", "This is a test file."];
pub const APPENDED_LINE: &str = "This is a new line.";

/// Truncates (or creates) `path` and writes `lines`, one per line.
pub fn write_lines(path: &Path, lines: &[&str]) -> Result<(), DemoError> {
    let file = File::create(path).map_err(|e| DemoError::open_failed(path, e))?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{line}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Appends one line to `path`, creating the file if needed.
pub fn append_line(path: &Path, line: &str) -> Result<(), DemoError> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| DemoError::open_failed(path, e))?;
    writeln!(file, "{line}")?;
    Ok(())
}

/// Every line of `path`, without terminators.
pub fn read_lines(path: &Path) -> Result<Vec<String>, DemoError> {
    let file = File::open(path).map_err(|e| DemoError::open_failed(path, e))?;
    let lines = BufReader::new(file).lines().collect::<Result<Vec<_>, _>>()?;
    Ok(lines)
}

/// Writes the two greeting lines to the workspace text file.
pub fn write_output_file<W: Write>(workspace: &Workspace, out: &mut W) -> Result<(), DemoError> {
    write_lines(&workspace.text_file(), &FIRST_LINES)?;
    writeln!(out, "File written successfully")?;
    Ok(())
}

/// Appends a line to the workspace text file, keeping what's there.
pub fn append_to_file<W: Write>(workspace: &Workspace, out: &mut W) -> Result<(), DemoError> {
    append_line(&workspace.text_file(), APPENDED_LINE)?;
    writeln!(out, "File written successfully")?;
    Ok(())
}

/// Prints the workspace text file line by line.
pub fn read_input_file<W: Write>(workspace: &Workspace, out: &mut W) -> Result<(), DemoError> {
    for line in read_lines(&workspace.text_file())? {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
