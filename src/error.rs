use std::io;

use thiserror::Error;

/// The driver's only runtime failure modes are the two console surfaces.
/// Type mismatches in the generic operations never get this far; the compiler
/// rejects them before the program exists.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("writing to standard output failed")]
    Write(#[source] io::Error),

    #[error("reading the pause gate from standard input failed")]
    Pause(#[source] io::Error),
}
