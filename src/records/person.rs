use std::fmt::Display;

use crate::{DemoError, Serializable};

/// Bytes reserved for the name, terminator included.
pub const NAME_LEN: usize = 40;

/// Encoded size of a [`Person`]: name, `i32` age, `f64` height, no padding.
pub const PERSON_SIZE: usize = NAME_LEN + 4 + 8;

/// A fixed-layout person record.
///
/// Layout on disk:
/// - `0..40`: name, UTF-8, NUL padded
/// - `40..44`: age, little-endian `i32`
/// - `44..52`: height, little-endian `f64`
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    name: [u8; NAME_LEN],
    pub age: i32,
    pub height: f64,
}

impl Person {
    /// Creates a person, rejecting names that don't leave room for the terminator.
    pub fn new(name: &str, age: i32, height: f64) -> Result<Self, DemoError> {
        let bytes = name.as_bytes();
        if bytes.len() >= NAME_LEN {
            return Err(DemoError::RecordError(format!(
                "name {name:?} is {} bytes, at most {} fit",
                bytes.len(),
                NAME_LEN - 1
            )));
        }
        if bytes.contains(&0) {
            return Err(DemoError::RecordError(format!(
                "name {name:?} contains a NUL byte"
            )));
        }

        let mut buffer = [0u8; NAME_LEN];
        buffer[..bytes.len()].copy_from_slice(bytes);

        Ok(Self {
            name: buffer,
            age,
            height,
        })
    }

    /// The name up to the first NUL.
    ///
    /// Bytes read back from a foreign file may not be UTF-8; those are
    /// replaced rather than rejected.
    pub fn name(&self) -> String {
        let end = self
            .name
            .iter()
            .position(|b| *b == 0)
            .unwrap_or(NAME_LEN);
        String::from_utf8_lossy(&self.name[..end]).into_owned()
    }
}

impl Serializable<PERSON_SIZE> for Person {
    fn to_bytes(&self) -> [u8; PERSON_SIZE] {
        let mut bytes = [0u8; PERSON_SIZE];
        bytes[..NAME_LEN].copy_from_slice(&self.name);
        bytes[NAME_LEN..NAME_LEN + 4].copy_from_slice(&self.age.to_le_bytes());
        bytes[NAME_LEN + 4..].copy_from_slice(&self.height.to_le_bytes());
        bytes
    }

    fn from_bytes(data: [u8; PERSON_SIZE]) -> Self {
        let mut name = [0u8; NAME_LEN];
        name.copy_from_slice(&data[..NAME_LEN]);

        let mut age = [0u8; 4];
        age.copy_from_slice(&data[NAME_LEN..NAME_LEN + 4]);

        let mut height = [0u8; 8];
        height.copy_from_slice(&data[NAME_LEN + 4..]);

        Self {
            name,
            age: i32::from_le_bytes(age),
            height: f64::from_le_bytes(height),
        }
    }
}

impl Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Name: {}", self.name())?;
        writeln!(f, "Age: {}", self.age)?;
        writeln!(f, "Height: {}", self.height)
    }
}
