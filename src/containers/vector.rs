//! A guided tour of `Vec`: building, iterating, growing and shrinking.
//!
//! Sizes printed here are deterministic; capacities are whatever the
//! allocator hands out and are printed as reported.

use std::{fmt::Display, io::Write};

use crate::DemoError;

/// Writes a blank line, then the items space separated on one line.
pub fn write_items<W: Write, T: Display>(out: &mut W, items: &[T]) -> Result<(), DemoError> {
    writeln!(out)?;
    for item in items {
        write!(out, "{item} ")?;
    }
    writeln!(out)?;
    Ok(())
}

/// Writes a blank line, then one `key: value` line per pair.
pub fn write_pairs<W: Write>(out: &mut W, pairs: &[(i32, &str)]) -> Result<(), DemoError> {
    writeln!(out)?;
    for (number, word) in pairs {
        writeln!(out, "{number}: {word}")?;
    }
    Ok(())
}

/// Writes a blank line, then one line per row.
pub fn write_grid<W: Write>(out: &mut W, grid: &[Vec<i32>]) -> Result<(), DemoError> {
    writeln!(out)?;
    for row in grid {
        for cell in row {
            write!(out, "{cell} ")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Pushes three strings, then walks them forward, by iterator and backwards.
pub fn vector_init<W: Write>(out: &mut W) -> Result<(), DemoError> {
    let mut strings: Vec<String> = Vec::new();
    strings.push("one".to_string());
    strings.push("two".to_string());
    strings.push("three".to_string());

    writeln!(out, "Size of strings: {}", strings.len())?;
    writeln!(out, "Capacity of strings: {}", strings.capacity())?;

    writeln!(out, "\nIteration over strings using range-based for loop:")?;
    for s in &strings {
        writeln!(out, "{s}")?;
    }

    writeln!(out, "\nIteration over strings using iterator:")?;
    for s in strings.iter() {
        writeln!(out, "{s}")?;
    }

    writeln!(out, "\nIteration over strings using reverse iterator:")?;
    for s in strings.iter().rev() {
        writeln!(out, "{s}")?;
    }

    Ok(())
}

/// Pushes `items` onto `numbers`, returning the capacity after each change.
pub fn capacity_growth<T>(numbers: &mut Vec<T>, items: impl IntoIterator<Item = T>) -> Vec<usize> {
    let mut capacity = numbers.capacity();
    let mut changes = Vec::new();

    for item in items {
        numbers.push(item);
        if numbers.capacity() != capacity {
            capacity = numbers.capacity();
            changes.push(capacity);
        }
    }

    changes
}

fn write_size_and_capacity<W: Write>(
    out: &mut W,
    size: usize,
    capacity: usize,
) -> Result<(), DemoError> {
    writeln!(out, "Size: {size}")?;
    writeln!(out, "Capacity: {capacity}")?;
    Ok(())
}

/// Grows a vector to 1500 items, then clears, resizes, reserves and shrinks it.
pub fn vector_resize<W: Write>(out: &mut W) -> Result<(), DemoError> {
    let mut numbers: Vec<i32> = Vec::new();

    writeln!(out, "\nSize and Capacity of an empty vector")?;
    write_size_and_capacity(out, numbers.len(), numbers.capacity())?;

    for capacity in capacity_growth(&mut numbers, 0..1500) {
        writeln!(out, "Capacity: {capacity}")?;
    }

    writeln!(out, "\nClear the vector")?;
    numbers.clear();
    write_size_and_capacity(out, numbers.len(), numbers.capacity())?;

    writeln!(out, "\nResize the vector to 100 elements")?;
    numbers.resize(100, 0);
    write_size_and_capacity(out, numbers.len(), numbers.capacity())?;

    writeln!(out, "\nReserve memory for 100000 elements")?;
    numbers.reserve(100_000 - numbers.len());
    write_size_and_capacity(out, numbers.len(), numbers.capacity())?;

    writeln!(out, "\nShrink the vector")?;
    numbers.shrink_to_fit();
    write_size_and_capacity(out, numbers.len(), numbers.capacity())?;

    Ok(())
}

/// The different ways of building a vector.
pub fn vector_creation<W: Write>(out: &mut W) -> Result<(), DemoError> {
    let numbers = vec![1, 2, 3, 4, 5];
    write_items(out, &numbers)?;

    let strings = vec!["one", "two", "three"];
    write_items(out, &strings)?;

    let pairs = vec![(1, "one"), (2, "two"), (3, "three")];
    write_pairs(out, &pairs)?;

    let nested = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]];
    write_grid(out, &nested)?;

    let zeros = vec![0; 10];
    write_items(out, &zeros)?;

    let ones = vec![1; 10];
    write_items(out, &ones)?;

    let copy = numbers.clone();
    write_items(out, &copy)?;

    let array = [1, 2, 3, 4, 5];
    let from_array = array.to_vec();
    write_items(out, &from_array)?;

    Ok(())
}

/// A 3x4 grid filled with 5.
pub fn two_dimension_vectors<W: Write>(out: &mut W) -> Result<(), DemoError> {
    let grid = vec![vec![5; 4]; 3];
    write_grid(out, &grid)
}

/// Runs the whole tour in order.
pub fn run_tour<W: Write>(out: &mut W) -> Result<(), DemoError> {
    vector_init(out)?;
    vector_resize(out)?;
    vector_creation(out)?;
    two_dimension_vectors(out)?;
    out.flush()?;
    Ok(())
}
