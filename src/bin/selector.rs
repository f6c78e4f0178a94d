use std::io::{Write, stdin, stdout};

use miette::{IntoDiagnostic, Result};
use strum::{Display, EnumIter};

use idiom_lab::{Console, Menu, common::report::install_hooks};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
enum Choice {
    #[strum(serialize = "Option 1")]
    First,
    #[strum(serialize = "Option 2")]
    Second,
    #[strum(serialize = "Option 3")]
    Third,
}

fn main() -> Result<()> {
    install_hooks()?;

    let mut console = Console::new(stdin().lock(), stdout().lock());
    let mut menu = Menu::<Choice>::from_enum()?;

    if let Some(choice) = menu.select(&mut console)? {
        console.clear_screen()?;
        writeln!(console.out(), "You selected: {choice}").into_diagnostic()?;
    }

    Ok(())
}
