use std::io::{stdin, stdout};

use miette::Result;

use idiom_lab::{Console, DemoError, common::report::install_hooks, failures};

fn main() -> Result<()> {
    install_hooks()?;

    let mut console = Console::new(stdin().lock(), stdout().lock());
    failures::run(console.out())?;

    match console.pause("Press ENTER to exit...") {
        Ok(()) | Err(DemoError::EndOfInput) => Ok(()),
        Err(err) => Err(err.into()),
    }
}
