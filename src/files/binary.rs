use std::{
    fs::File,
    io::{BufReader, BufWriter, ErrorKind, Read, Write},
    path::Path,
};

use crate::{
    DemoError, Serializable,
    files::Workspace,
    records::{PERSON_SIZE, Person},
};

/// Writes the records back to back, truncating `path` first.
pub fn write_people(path: &Path, people: &[Person]) -> Result<(), DemoError> {
    let file = File::create(path).map_err(|e| DemoError::open_failed(path, e))?;
    let mut writer = BufWriter::new(file);
    for person in people {
        writer.write_all(&person.to_bytes())?;
    }
    writer.flush()?;
    Ok(())
}

/// Reads whole records from `reader` until it runs dry.
///
/// A trailing partial record is dropped, the same as a short read ending a
/// read loop.
pub fn read_records<R: Read>(mut reader: R) -> Result<Vec<Person>, DemoError> {
    let mut people = Vec::new();

    loop {
        let mut buf = [0u8; PERSON_SIZE];
        match reader.read_exact(&mut buf) {
            Ok(()) => people.push(Person::from_bytes(buf)),
            Err(err) if err.kind() == ErrorKind::UnexpectedEof => break,
            Err(err) => return Err(err.into()),
        }
    }

    Ok(people)
}

pub fn read_people(path: &Path) -> Result<Vec<Person>, DemoError> {
    let file = File::open(path).map_err(|e| DemoError::open_failed(path, e))?;
    read_records(BufReader::new(file))
}

/// Frodo, Sam, Gandalf and Aragorn.
pub fn fellowship() -> Result<Vec<Person>, DemoError> {
    Ok(vec![
        Person::new("Frodo", 220, 0.8)?,
        Person::new("Sam", 210, 0.7)?,
        Person::new("Gandalf", 1000, 1.8)?,
        Person::new("Aragorn", 300, 1.9)?,
    ])
}

/// Writes the sample people to the workspace binary file.
pub fn write_binary_file(workspace: &Workspace) -> Result<(), DemoError> {
    write_people(&workspace.binary_file(), &fellowship()?)
}

/// Prints every record of the workspace binary file followed by a blank line.
pub fn read_binary_file<W: Write>(workspace: &Workspace, out: &mut W) -> Result<(), DemoError> {
    for person in read_people(&workspace.binary_file())? {
        writeln!(out, "{person}")?;
    }
    Ok(())
}
