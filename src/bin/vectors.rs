use std::io::stdout;

use miette::Result;

use idiom_lab::{common::report::install_hooks, containers::vector};

fn main() -> Result<()> {
    install_hooks()?;

    vector::run_tour(&mut stdout().lock())?;

    Ok(())
}
