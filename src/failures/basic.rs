use std::io::Write;

use strum::{Display, EnumIter};

use crate::DemoError;

/// Numbered error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum ErrorCode {
    #[strum(serialize = "ERROR_0")]
    Error0,
    #[strum(serialize = "ERROR_1")]
    Error1,
    #[strum(serialize = "ERROR_2")]
    Error2,
}

impl ErrorCode {
    pub fn message(self) -> &'static str {
        match self {
            ErrorCode::Error0 => "Error number 0",
            ErrorCode::Error1 => "Error number 1",
            ErrorCode::Error2 => "Error number 2",
        }
    }
}

/// Payloads of different types, the way a thrown value can be anything.
#[derive(Debug, Clone, PartialEq)]
pub enum Thrown {
    Int(i32),
    Message(&'static str),
    Text(String),
    Code(ErrorCode),
    Float(f32),
    Double(f64),
    Bool(bool),
}

/// Which payload [`might_go_wrong`] raises; the first set flag wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flags {
    pub message: bool,
    pub text: bool,
    pub float: bool,
    pub boolean: bool,
}

impl Default for Flags {
    fn default() -> Self {
        Self {
            message: false,
            text: false,
            float: true,
            boolean: true,
        }
    }
}

pub fn might_go_wrong(flags: &Flags) -> Result<(), Thrown> {
    if flags.message {
        return Err(Thrown::Message("Something went wrong"));
    }
    if flags.text {
        return Err(Thrown::Text("Something else went wrong".to_string()));
    }
    if flags.float {
        return Err(Thrown::Float(1.234));
    }
    if flags.boolean {
        return Err(Thrown::Bool(true));
    }
    Ok(())
}

/// Raises the first code whose flag is set.
pub fn might_go_wrong_2(flags: &[bool; 3]) -> Result<(), Thrown> {
    let codes = [ErrorCode::Error0, ErrorCode::Error1, ErrorCode::Error2];
    match flags.iter().zip(codes).find(|(set, _)| **set) {
        Some((_, code)) => Err(Thrown::Code(code)),
        None => Ok(()),
    }
}

/// Runs both, letting the first failure through.
pub fn use_might_go_wrong(flags: &Flags, code_flags: &[bool; 3]) -> Result<(), Thrown> {
    might_go_wrong(flags)?;
    might_go_wrong_2(code_flags)
}

/// The handler line for each payload type.
pub fn handle(thrown: &Thrown) -> String {
    match thrown {
        Thrown::Int(code) => format!("Error code: {code}"),
        Thrown::Message(message) => format!("Error message: {message}"),
        Thrown::Text(text) => format!("String error message: {text}"),
        Thrown::Code(code) => format!("Error code: {}", code.message()),
        Thrown::Float(value) => format!("Float error code: {value}"),
        Thrown::Double(value) => format!("Double error code: {value}"),
        Thrown::Bool(value) => format!("Boolean error: {}", if *value { "Yes" } else { "No" }),
    }
}

pub fn run<W: Write>(out: &mut W) -> Result<(), DemoError> {
    if let Err(thrown) = use_might_go_wrong(&Flags::default(), &[true; 3]) {
        writeln!(out, "{}", handle(&thrown))?;
    }
    writeln!(out, "Still running")?;
    Ok(())
}
