use std::io::{Write, stdout};

use miette::{IntoDiagnostic, Result};

use idiom_lab::{
    common::report::install_hooks,
    files::{self, Workspace},
};

fn main() -> Result<()> {
    install_hooks()?;

    // Optional first argument: the directory holding the demo files
    let workspace = Workspace::from_args(std::env::args());

    let mut stdout = stdout().lock();
    files::run(&workspace, &mut stdout)?;
    stdout.flush().into_diagnostic()?;

    Ok(())
}
