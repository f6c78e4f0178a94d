pub mod key;
pub mod selector;

pub use key::Key;
pub use selector::Menu;
