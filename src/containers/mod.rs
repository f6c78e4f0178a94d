pub mod list;
pub mod map;
pub mod vector;

pub use list::{ListAction, ListManager, ListSession};
pub use map::{CustomKey, CustomValue, MapAction, MapManager, MapSession};
