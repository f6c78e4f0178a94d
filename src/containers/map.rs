use std::{
    collections::BTreeMap,
    fmt,
    io::{BufRead, Write},
};

use strum::{Display, EnumIter, EnumString};

use crate::{DemoError, console::Console, menu::Menu};

/// Actions offered by the map menu, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString)]
pub enum MapAction {
    Insert,
    Modify,
    Remove,
    Find,
    Clear,
    Empty,
    Size,
    Predefine,
    Exit,
}

/// Composite key: ordered by `id`, then by `name`.
///
/// Field order matters, the derived `Ord` compares fields top to bottom.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CustomKey {
    pub id: i32,
    pub name: String,
}

impl CustomKey {
    pub fn new(id: i32, name: &str) -> Self {
        Self {
            id,
            name: name.to_owned(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomValue {
    pub age: i32,
    pub address: String,
}

impl CustomValue {
    pub fn new(age: i32, address: &str) -> Self {
        Self {
            age,
            address: address.to_owned(),
        }
    }
}

/// One map entry, printed the way the map menu lists it.
pub struct EntryLine<'a>(pub &'a CustomKey, pub &'a CustomValue);

impl fmt::Display for EntryLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {} ID({}) -> Age: {}, Address: {}",
            self.0.name, self.0.id, self.1.age, self.1.address
        )
    }
}

/// Ordered map of people keyed by `(id, name)`.
///
/// Lookups by id alone scan in key order and act on the first match.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MapManager {
    entries: BTreeMap<CustomKey, CustomValue>,
}

impl MapManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &BTreeMap<CustomKey, CustomValue> {
        &self.entries
    }

    /// Inserts or overwrites.
    pub fn insert(&mut self, key: CustomKey, value: CustomValue) -> Option<CustomValue> {
        self.entries.insert(key, value)
    }

    pub fn find(&self, id: i32) -> Option<(&CustomKey, &CustomValue)> {
        self.entries.iter().find(|(key, _)| key.id == id)
    }

    pub fn find_mut(&mut self, id: i32) -> Option<&mut CustomValue> {
        self.entries
            .iter_mut()
            .find(|(key, _)| key.id == id)
            .map(|(_, value)| value)
    }

    /// Replaces the value of the first entry with `id`; false when absent.
    pub fn modify(&mut self, id: i32, value: CustomValue) -> bool {
        match self.find_mut(id) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: i32) -> Option<(CustomKey, CustomValue)> {
        let key = self.find(id).map(|(key, _)| key.clone())?;
        self.entries.remove_entry(&key)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Loads the three sample people.
    pub fn predefine(&mut self) {
        self.insert(CustomKey::new(1, "Alice"), CustomValue::new(25, "123 Main St"));
        self.insert(CustomKey::new(2, "Bob"), CustomValue::new(30, "456 Elm St"));
        self.insert(
            CustomKey::new(3, "Charlie"),
            CustomValue::new(35, "789 Oak St"),
        );
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<(), DemoError> {
        for (key, value) in &self.entries {
            writeln!(out, "{}", EntryLine(key, value))?;
        }
        Ok(())
    }
}

/// Interactive map menu bound to a console.
#[derive(Debug)]
pub struct MapSession<R, W> {
    console: Console<R, W>,
    manager: MapManager,
}

impl<R: BufRead, W: Write> MapSession<R, W> {
    pub fn new(console: Console<R, W>) -> Self {
        Self {
            console,
            manager: MapManager::new(),
        }
    }

    pub fn into_parts(self) -> (Console<R, W>, MapManager) {
        (self.console, self.manager)
    }

    /// Runs the menu until `Exit` is picked or input runs out.
    pub fn run(&mut self) -> Result<(), DemoError> {
        let mut menu = Menu::<MapAction>::from_enum()?;

        loop {
            let Some(action) = menu.select(&mut self.console)? else {
                return Ok(());
            };
            if action == MapAction::Exit {
                return Ok(());
            }

            self.console.clear_screen()?;
            match self.perform(action) {
                Ok(()) => {}
                Err(DemoError::EndOfInput) => return Ok(()),
                Err(err @ DemoError::InvalidInput { .. }) => {
                    writeln!(self.console.out(), "{err}")?;
                }
                Err(err) => return Err(err),
            }

            match self.console.wait_for_enter() {
                Ok(()) => {}
                Err(DemoError::EndOfInput) => return Ok(()),
                Err(err) => return Err(err),
            }
        }
    }

    /// Runs one action: asks for its arguments and prints the outcome.
    pub fn perform(&mut self, action: MapAction) -> Result<(), DemoError> {
        match action {
            MapAction::Insert => {
                self.console.prompt("Enter ID: ")?;
                let id = self.console.read_number()?;
                self.console.prompt("Enter name: ")?;
                let name = self.console.read_token()?;
                let value = self.ask_value("Enter age: ", "Enter address: ")?;

                self.manager.insert(CustomKey { id, name }, value);
                self.print()
            }
            MapAction::Modify => {
                self.console
                    .prompt("Enter the ID of the key to modify: ")?;
                let id = self.console.read_number()?;

                if self.manager.find(id).is_some() {
                    let value = self.ask_value("Enter new age: ", "Enter new address: ")?;
                    self.manager.modify(id, value);
                }
                self.print()
            }
            MapAction::Remove => {
                self.console
                    .prompt("Enter the ID of the key to remove: ")?;
                let id = self.console.read_number()?;
                self.manager.remove(id);
                self.print()
            }
            MapAction::Find => {
                self.console.prompt("Enter the ID of the key to find: ")?;
                let id = self.console.read_number()?;

                let line = match self.manager.find(id) {
                    Some((key, value)) => format!(
                        "Found ID: {} Name: {} -> Age: {}, Address: {}",
                        key.id, key.name, value.age, value.address
                    ),
                    None => "Key not found".to_string(),
                };
                writeln!(self.console.out(), "{line}")?;
                Ok(())
            }
            MapAction::Clear => {
                self.manager.clear();
                self.print()
            }
            MapAction::Empty => {
                let text = if self.manager.is_empty() {
                    "The map is empty"
                } else {
                    "The map is not empty"
                };
                writeln!(self.console.out(), "{text}")?;
                Ok(())
            }
            MapAction::Size => {
                let len = self.manager.len();
                writeln!(self.console.out(), "The size of the map is: {len}")?;
                Ok(())
            }
            MapAction::Predefine => {
                self.manager.predefine();
                self.print()
            }
            MapAction::Exit => Ok(()),
        }
    }

    fn ask_value(&mut self, age_prompt: &str, address_prompt: &str) -> Result<CustomValue, DemoError> {
        self.console.prompt(age_prompt)?;
        let age = self.console.read_number()?;
        self.console.prompt(address_prompt)?;
        let address = self.console.read_text()?;
        Ok(CustomValue { age, address })
    }

    fn print(&mut self) -> Result<(), DemoError> {
        let Self { console, manager } = self;
        manager.write_to(console.out())
    }
}
