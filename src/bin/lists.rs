use std::io::{stdin, stdout};

use miette::Result;

use idiom_lab::{Console, common::report::install_hooks, containers::ListSession};

fn main() -> Result<()> {
    install_hooks()?;

    let console = Console::new(stdin().lock(), stdout().lock());
    ListSession::new(console).run()?;

    println!("Exiting list manager");

    Ok(())
}
