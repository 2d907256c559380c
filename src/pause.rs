//! Presentation pacing: block until the audience presses Enter.

use std::io::{self, BufRead};

/// Reads and discards one line from standard input. The content is not
/// validated; any line (including an empty one) releases the gate.
pub fn wait_for_enter() -> io::Result<()> {
    let mut discarded = String::new();
    io::stdin().lock().read_line(&mut discarded)?;
    Ok(())
}
