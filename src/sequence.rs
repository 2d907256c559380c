//! Printing a raw contiguous sequence, element count supplied by the caller.
//!
//! This is the raw-buffer traversal from the source material: the operation
//! walks `len` elements from a pointer and never checks that the backing
//! storage is actually that long. Pairing the pointer with its correct length
//! is the caller's obligation, so the functions here are `unsafe` rather than
//! bounds-checked. Hardening this with slice indexing would change the
//! behavior being taught, which is why the unchecked reads stay.

use std::fmt::Display;
use std::io::{self, Write};

/// Writes `len` elements starting at `items`, each followed by a single
/// space, then a newline. Elements are visited in index order, `0` to
/// `len - 1`.
///
/// # Safety
///
/// `items` must point to at least `len` consecutive initialized values of
/// type `T`. Passing a larger `len` reads past the end of the allocation;
/// nothing here detects it.
pub unsafe fn write_sequence<T, W>(out: &mut W, items: *const T, len: usize) -> io::Result<()>
where
    T: Display,
    W: Write,
{
    for i in 0..len {
        // SAFETY: the caller guarantees `items..items + len` is readable.
        let element = unsafe { &*items.add(i) };
        write!(out, "{} ", element)?;
    }
    writeln!(out)
}

/// Prints `len` elements starting at `items` to standard output.
///
/// # Safety
///
/// Same contract as [`write_sequence`]: `items` must point to at least `len`
/// initialized values.
pub unsafe fn print_sequence<T: Display>(items: *const T, len: usize) -> io::Result<()> {
    unsafe { write_sequence(&mut io::stdout().lock(), items, len) }
}
