use std::{
    collections::VecDeque,
    io::{BufRead, Write},
};

use strum::{Display, EnumIter, EnumString};
use thiserror::Error;

use crate::{DemoError, console::Console, menu::Menu};

/// Actions offered by the list menu, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString)]
pub enum ListAction {
    Print,
    #[strum(serialize = "Push back")]
    PushBack,
    #[strum(serialize = "Push front")]
    PushFront,
    Insert,
    Remove,
    Sort,
    Reverse,
    Merge,
    Clear,
    Empty,
    Size,
    Exit,
}

/// Rejected list operations.
///
/// The display text is exactly what the menu prints back to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("Invalid list number.")]
    InvalidListNumber,
    #[error("Invalid position.")]
    InvalidPosition,
    #[error("Invalid option")]
    InvalidOption,
}

/// Which of the two user-editable lists an action targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListId {
    First,
    Second,
}

impl TryFrom<i64> for ListId {
    type Error = ListError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::First),
            2 => Ok(Self::Second),
            _ => Err(ListError::InvalidListNumber),
        }
    }
}

/// The largest element count a list of `i32` could address.
pub fn max_size() -> usize {
    isize::MAX as usize / std::mem::size_of::<i32>()
}

/// `Lista: ` followed by every element and a trailing space each.
pub fn format_list(list: &VecDeque<i32>) -> String {
    let mut line = String::from("Lista: ");
    for value in list {
        line.push_str(&value.to_string());
        line.push(' ');
    }
    line
}

/// Inserts `value` before `position`; `position == len` appends.
pub fn insert_at(list: &mut VecDeque<i32>, position: usize, value: i32) -> Result<(), ListError> {
    if position > list.len() {
        return Err(ListError::InvalidPosition);
    }
    list.insert(position, value);
    Ok(())
}

/// Removes the element at `position`, leaving the list untouched when out of range.
pub fn remove_at(list: &mut VecDeque<i32>, position: usize) -> Result<i32, ListError> {
    list.remove(position).ok_or(ListError::InvalidPosition)
}

/// Removes every occurrence of `value`, returning how many went away.
pub fn remove_value(list: &mut VecDeque<i32>, value: i32) -> usize {
    let before = list.len();
    list.retain(|item| *item != value);
    before - list.len()
}

pub fn sort(list: &mut VecDeque<i32>) {
    list.make_contiguous().sort();
}

pub fn reverse(list: &mut VecDeque<i32>) {
    list.make_contiguous().reverse();
}

/// Merges `source` into `target` as a linked-list merge does.
///
/// Both are walked front to back and the smaller head is taken, `target`
/// winning ties, so two sorted lists give a sorted result. `source` is left
/// empty.
pub fn merge_into(target: &mut VecDeque<i32>, source: &mut VecDeque<i32>) {
    let mut left = std::mem::take(target);
    let mut right = std::mem::take(source);
    let mut merged = VecDeque::with_capacity(left.len() + right.len());

    while let (Some(a), Some(b)) = (left.front(), right.front()) {
        let next = if b < a {
            right.pop_front()
        } else {
            left.pop_front()
        };
        merged.extend(next);
    }
    merged.extend(left);
    merged.extend(right);

    *target = merged;
}

/// The two editable lists plus the merge target.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ListManager {
    pub first: VecDeque<i32>,
    pub second: VecDeque<i32>,
    pub merged: VecDeque<i32>,
}

impl ListManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self, id: ListId) -> &VecDeque<i32> {
        match id {
            ListId::First => &self.first,
            ListId::Second => &self.second,
        }
    }

    pub fn list_mut(&mut self, id: ListId) -> &mut VecDeque<i32> {
        match id {
            ListId::First => &mut self.first,
            ListId::Second => &mut self.second,
        }
    }

    /// Clears the merge target and merges both lists into it, draining them.
    pub fn merge(&mut self) -> &VecDeque<i32> {
        self.merged.clear();
        merge_into(&mut self.merged, &mut self.first);
        merge_into(&mut self.merged, &mut self.second);
        &self.merged
    }
}

/// Interactive list menu bound to a console.
#[derive(Debug)]
pub struct ListSession<R, W> {
    console: Console<R, W>,
    manager: ListManager,
}

impl<R: BufRead, W: Write> ListSession<R, W> {
    pub fn new(console: Console<R, W>) -> Self {
        Self {
            console,
            manager: ListManager::new(),
        }
    }

    pub fn into_parts(self) -> (Console<R, W>, ListManager) {
        (self.console, self.manager)
    }

    /// Runs the menu until `Exit` is picked or input runs out.
    pub fn run(&mut self) -> Result<(), DemoError> {
        let mut menu = Menu::<ListAction>::from_enum()?;

        loop {
            let Some(action) = menu.select(&mut self.console)? else {
                return Ok(());
            };
            if action == ListAction::Exit {
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
    pub fn perform(&mut self, action: ListAction) -> Result<(), DemoError> {
        match action {
            ListAction::Merge => {
                let merged = format_list(self.manager.merge());
                writeln!(self.console.out(), "{merged}")?;
                return Ok(());
            }
            ListAction::Exit => return Ok(()),
            _ => {}
        }

        self.console.prompt("Enter the list number (1 or 2): ")?;
        let number: i64 = self.console.read_number()?;
        let id = match ListId::try_from(number) {
            Ok(id) => id,
            Err(err) => {
                writeln!(self.console.out(), "{err}")?;
                return Ok(());
            }
        };

        match action {
            ListAction::Print => self.print(id),
            ListAction::PushBack => {
                let value = self.ask_number()?;
                self.manager.list_mut(id).push_back(value);
                self.print(id)
            }
            ListAction::PushFront => {
                let value = self.ask_number()?;
                self.manager.list_mut(id).push_front(value);
                self.print(id)
            }
            ListAction::Insert => {
                let value = self.ask_number()?;
                self.console
                    .prompt("Enter a position to insert the number: ")?;
                let position = self.ask_position()?;
                let inserted = position.and_then(|position| {
                    insert_at(self.manager.list_mut(id), position, value)
                });
                self.report(inserted)?;
                self.print(id)
            }
            ListAction::Remove => self.remove(id),
            ListAction::Sort => {
                sort(self.manager.list_mut(id));
                self.print(id)
            }
            ListAction::Reverse => {
                reverse(self.manager.list_mut(id));
                self.print(id)
            }
            ListAction::Clear => {
                self.manager.list_mut(id).clear();
                self.print(id)
            }
            ListAction::Empty => {
                let text = if self.manager.list(id).is_empty() {
                    "The list is empty"
                } else {
                    "The list is not empty"
                };
                writeln!(self.console.out(), "{text}")?;
                Ok(())
            }
            ListAction::Size => {
                let len = self.manager.list(id).len();
                let out = self.console.out();
                writeln!(out, "The size of the list is: {len}")?;
                writeln!(out, "The maximum size of the list is: {}", max_size())?;
                Ok(())
            }
            ListAction::Merge | ListAction::Exit => Ok(()),
        }
    }

    fn remove(&mut self, id: ListId) -> Result<(), DemoError> {
        self.console.prompt(
            "Do you want to remove a specific position or all occurrences of a number? (1 or 2): ",
        )?;
        let option: i64 = self.console.read_number()?;

        match option {
            1 => {
                self.console
                    .prompt("Enter a position to remove the number: ")?;
                let position = self.ask_position()?;
                let removed = position
                    .and_then(|position| remove_at(self.manager.list_mut(id), position))
                    .map(|_| ());
                self.report(removed)?;
                self.print(id)
            }
            2 => {
                self.console
                    .prompt("Enter a number to remove from the list: ")?;
                let value: i32 = self.console.read_number()?;
                remove_value(self.manager.list_mut(id), value);
                self.print(id)
            }
            _ => {
                writeln!(self.console.out(), "{}", ListError::InvalidOption)?;
                Ok(())
            }
        }
    }

    fn ask_number(&mut self) -> Result<i32, DemoError> {
        self.console.prompt("Enter a number to add to the list: ")?;
        self.console.read_number()
    }

    /// Reads a position; negative numbers are out of range.
    fn ask_position(&mut self) -> Result<Result<usize, ListError>, DemoError> {
        let position: i64 = self.console.read_number()?;
        Ok(usize::try_from(position).map_err(|_| ListError::InvalidPosition))
    }

    fn report(&mut self, outcome: Result<(), ListError>) -> Result<(), DemoError> {
        if let Err(err) = outcome {
            writeln!(self.console.out(), "{err}")?;
        }
        Ok(())
    }

    fn print(&mut self, id: ListId) -> Result<(), DemoError> {
        let line = format_list(self.manager.list(id));
        writeln!(self.console.out(), "{line}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn list(values: &[i32]) -> VecDeque<i32> {
        values.iter().copied().collect()
    }

    fn run_session(script: &str) -> (String, ListManager) {
        let console = Console::new(script.as_bytes(), Vec::new());
        let mut session = ListSession::new(console);
        session.run().expect("session should finish");
        let (console, manager) = session.into_parts();
        (String::from_utf8(console.into_output()).unwrap(), manager)
    }

    #[test]
    fn test_action_labels() {
        assert_eq!(ListAction::PushBack.to_string(), "Push back");
        assert_eq!(
            ListAction::from_str("Push front").unwrap(),
            ListAction::PushFront
        );
        assert_eq!(ListAction::Exit.to_string(), "Exit");
    }

    #[test]
    fn test_format_list() {
        assert_eq!(format_list(&list(&[])), "Lista: ");
        assert_eq!(format_list(&list(&[3, 1, 2])), "Lista: 3 1 2 ");
    }

    #[test]
    fn test_insert_at() {
        let mut values = list(&[1, 3]);
        insert_at(&mut values, 1, 2).unwrap();
        insert_at(&mut values, 3, 4).unwrap();
        assert_eq!(values, list(&[1, 2, 3, 4]));

        assert_eq!(insert_at(&mut values, 9, 5), Err(ListError::InvalidPosition));
        assert_eq!(values, list(&[1, 2, 3, 4]));
    }

    #[test]
    fn test_remove_out_of_range_leaves_list_unchanged() {
        let mut values = list(&[1, 2, 3]);
        assert_eq!(remove_at(&mut values, 3), Err(ListError::InvalidPosition));
        assert_eq!(values, list(&[1, 2, 3]));
        assert_eq!(ListError::InvalidPosition.to_string(), "Invalid position.");

        assert_eq!(remove_at(&mut values, 0), Ok(1));
        assert_eq!(values, list(&[2, 3]));
    }

    #[test]
    fn test_remove_value_removes_all() {
        let mut values = list(&[4, 1, 4, 2, 4]);
        assert_eq!(remove_value(&mut values, 4), 3);
        assert_eq!(values, list(&[1, 2]));
        assert_eq!(remove_value(&mut values, 9), 0);
    }

    #[test]
    fn test_sort_and_reverse() {
        let mut values = list(&[5, 1, 4, 1]);
        sort(&mut values);
        assert_eq!(values, list(&[1, 1, 4, 5]));
        reverse(&mut values);
        assert_eq!(values, list(&[5, 4, 1, 1]));
    }

    #[test]
    fn test_merge_drains_sources() {
        let mut manager = ListManager::new();
        manager.first = list(&[1, 4, 9]);
        manager.second = list(&[2, 3, 10]);
        manager.merged = list(&[100]);

        assert_eq!(manager.merge(), &list(&[1, 2, 3, 4, 9, 10]));
        assert!(manager.first.is_empty());
        assert!(manager.second.is_empty());
    }

    #[test]
    fn test_merge_unsorted_follows_heads() {
        let mut target = list(&[3, 1]);
        let mut source = list(&[2]);
        merge_into(&mut target, &mut source);
        assert_eq!(target, list(&[2, 3, 1]));
    }

    #[test]
    fn test_list_id() {
        assert_eq!(ListId::try_from(1), Ok(ListId::First));
        assert_eq!(ListId::try_from(2), Ok(ListId::Second));
        assert_eq!(ListId::try_from(3), Err(ListError::InvalidListNumber));
    }

    #[test]
    fn test_session_push_and_exit() {
        // Menu starts on "Print": down once to "Push back", Enter, list 1,
        // value 7, continue; then up to wrap onto "Exit".
        let script = "s\n\n1\n7\n\nkk\n\n";
        let (output, manager) = run_session(script);

        assert_eq!(manager.first, list(&[7]));
        assert!(output.contains("Enter a number to add to the list: Lista: 7 \n"));
        assert!(output.contains("> Exit <"));
    }

    #[test]
    fn test_session_remove_out_of_range() {
        // Push back 5 into list 2, then Remove position 4 from it.
        let script = "s\n\n2\n5\n\nsss\n\n2\n1\n4\n\n";
        let (output, manager) = run_session(script);

        assert_eq!(manager.second, list(&[5]));
        assert!(output.contains("Invalid position.\nLista: 5 \n"));
    }

    #[test]
    fn test_session_negative_positions() {
        // Push back 5 into list 1, Remove position -1, then Insert 8 at -2.
        let script = "s\n\n1\n5\n\nsss\n\n1\n1\n-1\n\nw\n\n1\n8\n-2\n\n";
        let (output, manager) = run_session(script);

        assert_eq!(manager.first, list(&[5]));
        assert_eq!(output.matches("Invalid position.\nLista: 5 \n").count(), 2);
        assert!(!output.contains("Invalid input"));
    }

    #[test]
    fn test_session_invalid_list_number() {
        let script = "\n7\n\n";
        let (output, manager) = run_session(script);

        assert_eq!(manager, ListManager::new());
        assert!(output.contains("Invalid list number.\n"));
    }

    #[test]
    fn test_session_non_numeric_input() {
        let script = "\nabc\n\n";
        let (output, _) = run_session(script);
        assert!(output.contains("Invalid input: expected a number, got \"abc\""));
    }
}
