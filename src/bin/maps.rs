use std::io::{stdin, stdout};

use miette::Result;

use idiom_lab::{Console, common::report::install_hooks, containers::MapSession};

fn main() -> Result<()> {
    install_hooks()?;

    let console = Console::new(stdin().lock(), stdout().lock());
    MapSession::new(console).run()?;

    println!("Exiting map manager");

    Ok(())
}
