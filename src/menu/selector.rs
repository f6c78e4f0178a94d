use std::{
    fmt::Display,
    io::{BufRead, Write},
};

use strum::IntoEnumIterator;

use crate::{DemoError, console::Console, menu::key::Key};

/// A vertical list of options with one of them highlighted.
///
/// Up/down move the highlight and wrap around at both ends; Enter picks the
/// highlighted option.
#[derive(Debug, Clone)]
pub struct Menu<T> {
    options: Vec<T>,
    selection: usize,
}

impl<T: Copy + Display> Menu<T> {
    /// Creates a menu with the first option highlighted.
    pub fn new(options: Vec<T>) -> Result<Self, DemoError> {
        if options.is_empty() {
            return Err(DemoError::MenuError(
                "a menu needs at least one option".to_string(),
            ));
        }

        Ok(Self {
            options,
            selection: 0,
        })
    }

    /// One option per enum variant, in declaration order.
    pub fn from_enum() -> Result<Self, DemoError>
    where
        T: IntoEnumIterator,
    {
        Self::new(T::iter().collect())
    }

    pub fn selected(&self) -> T {
        self.options[self.selection]
    }

    pub fn move_up(&mut self) {
        let len = self.options.len();
        self.selection = (self.selection + len - 1) % len;
    }

    pub fn move_down(&mut self) {
        self.selection = (self.selection + 1) % self.options.len();
    }

    /// Applies a key, returning the chosen option on Enter.
    pub fn apply(&mut self, key: Key) -> Option<T> {
        match key {
            Key::Up => self.move_up(),
            Key::Down => self.move_down(),
            Key::Enter => return Some(self.selected()),
            Key::Other(_) => {}
        }
        None
    }

    /// Writes every option on its own line, `> label <` for the highlighted one.
    pub fn render<W: Write>(&self, out: &mut W) -> Result<(), DemoError> {
        for (idx, option) in self.options.iter().enumerate() {
            if idx == self.selection {
                writeln!(out, "> {option} <")?;
            } else {
                writeln!(out, "  {option}")?;
            }
        }
        out.flush()?;
        Ok(())
    }

    /// Redraws and reads keys until an option is picked.
    ///
    /// Returns `None` once input runs out.
    pub fn select<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<Option<T>, DemoError> {
        loop {
            console.clear_screen()?;
            self.render(console.out())?;

            let key = match console.read_key() {
                Ok(key) => key,
                Err(DemoError::EndOfInput) => return Ok(None),
                Err(err) => return Err(err),
            };

            if let Some(choice) = self.apply(key) {
                return Ok(Some(choice));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::{Display, EnumIter};

    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Display, EnumIter)]
    enum Choice {
        #[strum(serialize = "Option 1")]
        First,
        #[strum(serialize = "Option 2")]
        Second,
        #[strum(serialize = "Option 3")]
        Third,
    }

    #[test]
    fn test_empty_menu_rejected() {
        let menu = Menu::<Choice>::new(Vec::new());
        assert!(matches!(menu, Err(DemoError::MenuError(_))));
    }

    #[test]
    fn test_wraparound() {
        let mut menu = Menu::<Choice>::from_enum().expect("non-empty");
        assert_eq!(menu.selected(), Choice::First);

        menu.move_up();
        assert_eq!(menu.selected(), Choice::Third);

        menu.move_down();
        assert_eq!(menu.selected(), Choice::First);

        menu.move_down();
        menu.move_down();
        menu.move_down();
        assert_eq!(menu.selected(), Choice::First);
    }

    #[test]
    fn test_apply_only_picks_on_enter() {
        let mut menu = Menu::<Choice>::from_enum().expect("non-empty");
        assert_eq!(menu.apply(Key::Down), None);
        assert_eq!(menu.apply(Key::Other(b'x')), None);
        assert_eq!(menu.apply(Key::Enter), Some(Choice::Second));
    }

    #[test]
    fn test_render_marks_selection() {
        let mut menu = Menu::<Choice>::from_enum().expect("non-empty");
        menu.move_down();

        let mut out = Vec::new();
        menu.render(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "  Option 1\n> Option 2 <\n  Option 3\n"
        );
    }

    #[test]
    fn test_select_from_console() {
        let mut console = Console::new("k\n\n".as_bytes(), Vec::new());
        let mut menu = Menu::<Choice>::from_enum().expect("non-empty");

        let choice = menu.select(&mut console).unwrap();
        assert_eq!(choice, Some(Choice::Third));

        let mut console = Console::new("s\n".as_bytes(), Vec::new());
        assert_eq!(menu.select(&mut console).unwrap(), None);
    }
}
