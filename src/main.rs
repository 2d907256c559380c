//! Demonstration driver: exercises each generic operation with a fixed set of
//! concrete types, pausing for Enter between groups.

use colored::Colorize;

use generic_functions::{print_midpoint, print_pair, print_sequence, wait_for_enter, DemoError};

fn main() -> Result<(), DemoError> {
    midpoint_group()?;
    wait_for_enter().map_err(DemoError::Pause)?;

    pair_group()?;
    wait_for_enter().map_err(DemoError::Pause)?;

    sequence_group()?;
    wait_for_enter().map_err(DemoError::Pause)?;

    Ok(())
}

/// One `midpoint` body, specialized per call site. Each call is echoed before
/// it runs so the output reads as a transcript.
fn midpoint_group() -> Result<(), DemoError> {
    println!("{}", "=== Midpoint: one body, many types ===".bold().cyan());

    // Inferred as i32: integer division truncates.
    println!("{}", "midpoint(1, 4)".cyan());
    print_midpoint(1, 4).map_err(DemoError::Write)?;

    // Inferred as f32: division keeps the fraction.
    println!("{}", "midpoint(1.0f32, 4.0)".cyan());
    print_midpoint(1.0f32, 4.0).map_err(DemoError::Write)?;

    // Characters promote to their codes, so this prints 98.
    println!("{}", "midpoint('a', 'c')".cyan());
    print_midpoint('a', 'c').map_err(DemoError::Write)?;

    // Operands of two different types do not compile without a pin:
    // midpoint(1, 1.5);

    // Turbofish pins the type when the literals alone would not agree.
    println!("{}", "midpoint::<f32>(1.0, 1.5)".cyan());
    print_midpoint::<f32>(1.0, 1.5).map_err(DemoError::Write)?;

    Ok(())
}

/// Two independent type parameters; each value only has to be printable.
fn pair_group() -> Result<(), DemoError> {
    println!("{}", "=== Pair: two independent types ===".bold().cyan());

    print_pair("pi:", 3.14159).map_err(DemoError::Write)?;

    // Nothing stops both types from being the same.
    print_pair("Hello,", "World!").map_err(DemoError::Write)?;

    // The codes 79 and 75, rendered as the characters they name.
    print_pair(char::from(79), char::from(75)).map_err(DemoError::Write)?;

    Ok(())
}

/// Raw sequence traversal; the caller pairs each pointer with its length.
fn sequence_group() -> Result<(), DemoError> {
    println!("{}", "=== Sequence: caller-counted traversal ===".bold().cyan());

    let ints = [1, 2, 3, 4, 5];
    // SAFETY: length matches the array.
    unsafe { print_sequence(ints.as_ptr(), ints.len()) }.map_err(DemoError::Write)?;

    let floats = [
        1.0f32, 2.1, 3.21, 4.321, 5.4321, 6.54321, 7.654_321, 8.765_432, 9.876_543,
    ];
    // SAFETY: length matches the array.
    unsafe { print_sequence(floats.as_ptr(), floats.len()) }.map_err(DemoError::Write)?;

    // A text value is itself a character sequence; the length here counts the
    // trailing NUL terminator, so the terminator prints too.
    let text: Vec<char> = "print string test\0".chars().collect();
    // SAFETY: length matches the vector.
    unsafe { print_sequence(text.as_ptr(), text.len()) }.map_err(DemoError::Write)?;

    Ok(())
}
