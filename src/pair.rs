//! Printing two independently-typed values.
//!
//! The two type parameters have nothing to do with each other; each only has
//! to be printable. Nothing stops both from being the same type, and pinning
//! the types at the call site controls how the values render (the codes 79
//! and 75 pinned to `char` print `O K`, not `79 75`).

use std::fmt::Display;
use std::io::{self, Write};

/// Writes `a` and `b` separated by a single space, newline-terminated.
pub fn write_pair<A, B, W>(out: &mut W, a: A, b: B) -> io::Result<()>
where
    A: Display,
    B: Display,
    W: Write,
{
    writeln!(out, "{} {}", a, b)
}

/// Prints `a` and `b` to standard output.
///
/// ```
/// generic_functions::print_pair("pi:", 3.14159).unwrap();
/// ```
pub fn print_pair<A, B>(a: A, b: B) -> io::Result<()>
where
    A: Display,
    B: Display,
{
    write_pair(&mut io::stdout().lock(), a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_and_number() {
        let mut out = Vec::new();
        write_pair(&mut out, "pi:", 3.14159).unwrap();
        assert_eq!(out, b"pi: 3.14159\n");
    }

    #[test]
    fn both_types_may_be_the_same() {
        let mut out = Vec::new();
        write_pair(&mut out, "Hello,", "World!").unwrap();
        assert_eq!(out, b"Hello, World!\n");
    }

    #[test]
    fn codes_pinned_to_char_render_as_characters() {
        let mut out = Vec::new();
        write_pair(&mut out, char::from(79), char::from(75)).unwrap();
        assert_eq!(out, b"O K\n");
    }

    #[test]
    fn repeated_calls_produce_identical_output() {
        let mut first = Vec::new();
        let mut second = Vec::new();
        write_pair(&mut first, 'x', 42).unwrap();
        write_pair(&mut second, 'x', 42).unwrap();
        assert_eq!(first, second);
    }
}
