/// A decoded key press.
///
/// Only the keys the menus react to get their own variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Enter,

    /// Any other byte, ignored by the menus.
    Other(u8),
}
