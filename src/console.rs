use std::{
    collections::VecDeque,
    io::{BufRead, Write},
    str::FromStr,
};

use crate::{DemoError, menu::key::Key};

const ESC: u8 = 0x1b;

/// Clears the terminal and homes the cursor.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[1;1H";

/// Blocking console: an input stream plus the writer everything is echoed to.
///
/// Input is consumed a line at a time but handed out per byte, so menu keys,
/// whitespace separated tokens and whole lines can be mixed on one stream,
/// like a terminal shared between key reads and formatted extraction.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,

    /// Bytes of the current line that haven't been consumed yet.
    pending: VecDeque<u8>,

    /// Whether the last consumed byte ended a line (or nothing was read yet).
    at_line_start: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
            at_line_start: true,
        }
    }

    /// The writer demos print to.
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consumes the console, returning the writer (handy in tests).
    pub fn into_output(self) -> W {
        self.output
    }

    pub fn clear_screen(&mut self) -> Result<(), DemoError> {
        self.output.write_all(CLEAR_SCREEN.as_bytes())?;
        Ok(())
    }

    /// Prints `text` without a newline and flushes so it shows before blocking.
    pub fn prompt(&mut self, text: &str) -> Result<(), DemoError> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    fn fill(&mut self) -> Result<bool, DemoError> {
        let mut line = Vec::new();
        let read = self.input.read_until(b'\n', &mut line)?;
        self.pending.extend(line);
        Ok(read > 0)
    }

    fn peek_byte(&mut self) -> Result<Option<u8>, DemoError> {
        if self.pending.is_empty() && !self.fill()? {
            return Ok(None);
        }
        Ok(self.pending.front().copied())
    }

    fn next_byte(&mut self) -> Result<Option<u8>, DemoError> {
        let byte = self.peek_byte()?;
        if let Some(byte) = byte {
            self.pending.pop_front();
            self.at_line_start = byte == b'\n';
        }
        Ok(byte)
    }

    /// Drops exactly one byte of input, if there is one.
    pub fn skip_byte(&mut self) -> Result<(), DemoError> {
        self.next_byte()?;
        Ok(())
    }

    /// Reads the next whitespace separated word, leaving the delimiter unread.
    pub fn read_token(&mut self) -> Result<String, DemoError> {
        while let Some(byte) = self.peek_byte()? {
            if !byte.is_ascii_whitespace() {
                break;
            }
            self.next_byte()?;
        }

        let mut token = Vec::new();
        while let Some(byte) = self.peek_byte()? {
            if byte.is_ascii_whitespace() {
                break;
            }
            token.push(byte);
            self.next_byte()?;
        }

        if token.is_empty() {
            return Err(DemoError::EndOfInput);
        }
        Ok(String::from_utf8_lossy(&token).into_owned())
    }

    /// Reads a token and parses it.
    pub fn read_number<T: FromStr>(&mut self) -> Result<T, DemoError> {
        let token = self.read_token()?;
        token.parse().map_err(|_| DemoError::InvalidInput {
            expected: "a number",
            found: token,
        })
    }

    /// Returns the rest of the current line, without its terminator.
    pub fn read_line(&mut self) -> Result<String, DemoError> {
        let mut line = Vec::new();
        let mut saw_any = false;

        while let Some(byte) = self.next_byte()? {
            saw_any = true;
            if byte == b'\n' {
                break;
            }
            line.push(byte);
        }

        if !saw_any {
            return Err(DemoError::EndOfInput);
        }
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        Ok(String::from_utf8_lossy(&line).into_owned())
    }

    /// Reads a free-text answer that follows a token on the same stream.
    ///
    /// One separator byte is skipped; if that leaves nothing on the line the
    /// answer is taken from the next one.
    pub fn read_text(&mut self) -> Result<String, DemoError> {
        self.skip_byte()?;
        if self.at_line_start {
            return self.read_line();
        }
        let rest = self.read_line()?;
        if rest.trim().is_empty() {
            return self.read_line();
        }
        Ok(rest)
    }

    /// Prints `text` and blocks until a line is entered.
    ///
    /// Whatever is left of the line the last answer was typed on is thrown
    /// away first, so a stray newline doesn't skip the pause.
    pub fn pause(&mut self, text: &str) -> Result<(), DemoError> {
        if !self.pending.is_empty() {
            self.pending.clear();
            self.at_line_start = true;
        }
        self.prompt(text)?;
        self.read_line()?;
        Ok(())
    }

    pub fn wait_for_enter(&mut self) -> Result<(), DemoError> {
        self.pause("Press ENTER to continue...")
    }

    /// Reads and decodes one key press.
    ///
    /// Understands the Windows console arrow prefix (`0xE0`/`0x00` then
    /// `72`/`80`), ANSI arrows (`ESC [ A`/`ESC [ B`) and `w`/`k`/`s`/`j` for
    /// terminals that only deliver whole lines. A `\n` is Enter only when it
    /// is alone on its line; otherwise it just ends a line of other keys.
    pub fn read_key(&mut self) -> Result<Key, DemoError> {
        loop {
            let line_start = self.at_line_start;
            let Some(byte) = self.next_byte()? else {
                return Err(DemoError::EndOfInput);
            };

            let key = match byte {
                0xE0 | 0x00 => match self.next_byte()? {
                    Some(72) => Key::Up,
                    Some(80) => Key::Down,
                    Some(other) => Key::Other(other),
                    None => return Err(DemoError::EndOfInput),
                },
                ESC => {
                    if self.peek_byte()? != Some(b'[') {
                        Key::Other(ESC)
                    } else {
                        self.next_byte()?;
                        match self.next_byte()? {
                            Some(b'A') => Key::Up,
                            Some(b'B') => Key::Down,
                            Some(other) => Key::Other(other),
                            None => return Err(DemoError::EndOfInput),
                        }
                    }
                }
                b'w' | b'k' => Key::Up,
                b's' | b'j' => Key::Down,
                b'\r' => {
                    if self.peek_byte()? == Some(b'\n') {
                        self.next_byte()?;
                    }
                    Key::Enter
                }
                b'\n' if line_start => Key::Enter,
                b'\n' => continue,
                other => Key::Other(other),
            };

            return Ok(key);
        }
    }
}
