pub mod common;
pub mod console;
pub mod containers;
pub mod failures;
pub mod files;
pub mod menu;
pub mod records;

pub use common::error::DemoError;
pub use console::Console;
pub use menu::{Key, Menu};

/// Trait for serializing fixed-size data structures to bytes.
///
/// Implementors have a pinned on-disk layout of exactly `N` bytes, so a file
/// of records is just their concatenation.
pub trait Serializable<const N: usize>: Sized {
    /// Size of one encoded record.
    const SIZE: usize = N;

    /// Convert this value to a fixed-size byte array.
    fn to_bytes(&self) -> [u8; N];

    /// Reconstruct this value from a fixed-size byte array.
    fn from_bytes(data: [u8; N]) -> Self;
}
