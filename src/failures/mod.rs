pub mod basic;
pub mod catch_order;
pub mod custom;
pub mod standard;

pub use catch_order::{CatchChain, Clause};
pub use standard::{FailureKind, Raised};

use std::io::Write;

use crate::DemoError;

/// Runs each failure demo, separated by a blank line.
pub fn run<W: Write>(out: &mut W) -> Result<(), DemoError> {
    basic::run(out)?;
    writeln!(out)?;
    custom::run(out)?;
    writeln!(out)?;
    standard::run(out)?;
    writeln!(out)?;
    catch_order::run(out)?;
    Ok(())
}
