//! Midpoint of two same-typed values.
//!
//! One generic body serves every numeric type: the compiler monomorphizes
//! `midpoint` for each concrete type used at a call site, so there is no need
//! to write an overload per type. The arithmetic is the type's own: integer
//! midpoints truncate toward zero, float midpoints keep the fraction.

use std::fmt::Display;
use std::io::{self, Write};

/// Types that have a halfway point between two values.
///
/// `Output` is the type the midpoint is reported in. For every numeric type
/// it is `Self`; for `char` it is the numeric code (see below).
pub trait Midpoint {
    type Output;

    fn midpoint(self, other: Self) -> Self::Output;
}

// The body `(a + b) / 2` is written exactly once; the macro stamps it out for
// each primitive numeric type with that type's own division semantics.
macro_rules! impl_midpoint {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Midpoint for $ty {
                type Output = $ty;

                #[inline]
                fn midpoint(self, other: Self) -> $ty {
                    (self + other) / (2 as $ty)
                }
            }
        )*
    };
}

impl_midpoint!(i8, i16, i32, i64, i128, isize);
impl_midpoint!(u8, u16, u32, u64, u128, usize);
impl_midpoint!(f32, f64);

/// Characters promote to their scalar codes before the arithmetic, so the
/// midpoint of `'a'` and `'c'` is the number `98`, not the character `'b'`.
impl Midpoint for char {
    type Output = u32;

    #[inline]
    fn midpoint(self, other: Self) -> u32 {
        (self as u32 + other as u32) / 2
    }
}

/// Returns the halfway point between `a` and `b`.
///
/// Both operands must resolve to one type; pin it with turbofish when the
/// literals alone would not agree:
///
/// ```
/// use generic_functions::midpoint;
///
/// assert_eq!(midpoint(1, 4), 2);            // i32: truncating division
/// assert_eq!(midpoint(1.0f32, 4.0), 2.5);   // f32: fractional division
/// assert_eq!(midpoint::<f32>(1.0, 1.5), 1.25);
/// ```
///
/// Mismatched operand types are rejected at compile time:
///
/// ```compile_fail
/// generic_functions::midpoint(1, 1.5);
/// ```
pub fn midpoint<T: Midpoint>(a: T, b: T) -> T::Output {
    a.midpoint(b)
}

/// Writes the midpoint of `a` and `b` to `out`, newline-terminated.
pub fn write_midpoint<T, W>(out: &mut W, a: T, b: T) -> io::Result<()>
where
    T: Midpoint,
    T::Output: Display,
    W: Write,
{
    writeln!(out, "{}", a.midpoint(b))
}

/// Prints the midpoint of `a` and `b` to standard output.
pub fn print_midpoint<T>(a: T, b: T) -> io::Result<()>
where
    T: Midpoint,
    T::Output: Display,
{
    write_midpoint(&mut io::stdout().lock(), a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn integer_midpoint_truncates() {
        assert_eq!(midpoint(1, 4), 2);
        assert_eq!(midpoint(2, 4), 3);
        assert_eq!(midpoint(-1, -4), -2); // toward zero, not floor
    }

    #[test]
    fn float_midpoint_keeps_fraction() {
        assert_eq!(midpoint(1.0f32, 4.0), 2.5);
        assert_eq!(midpoint(1.0f64, 4.0), 2.5);
    }

    #[test]
    fn pinned_type_changes_result_class() {
        // The same logical inputs as (1, 1.5), pinned to f32.
        assert_eq!(midpoint::<f32>(1.0, 1.5), 1.25);
    }

    #[test]
    fn char_midpoint_promotes_to_code() {
        assert_eq!(midpoint('a', 'c'), 98);
    }

    #[test]
    fn written_output_is_value_and_newline() {
        let mut out = Vec::new();
        write_midpoint(&mut out, 1, 4).unwrap();
        assert_eq!(out, b"2\n");

        out.clear();
        write_midpoint(&mut out, 1.0f32, 4.0).unwrap();
        assert_eq!(out, b"2.5\n");
    }

    #[test]
    fn repeated_calls_produce_identical_output() {
        let mut first = Vec::new();
        let mut second = Vec::new();
        write_midpoint(&mut first, 7, 10).unwrap();
        write_midpoint(&mut second, 7, 10).unwrap();
        assert_eq!(first, second);
    }

    proptest! {
        #[test]
        fn midpoint_is_symmetric(a in -1_000_000i32..1_000_000, b in -1_000_000i32..1_000_000) {
            prop_assert_eq!(midpoint(a, b), midpoint(b, a));
        }

        #[test]
        fn midpoint_lies_between_operands(a in -1_000_000i32..1_000_000, b in -1_000_000i32..1_000_000) {
            let m = midpoint(a, b);
            prop_assert!(a.min(b) <= m && m <= a.max(b));
        }

        #[test]
        fn midpoint_of_equal_operands_is_identity(a in -1e300f64..1e300) {
            prop_assert_eq!(midpoint(a, a), a);
        }
    }
}
