//! One generic definition, many concrete types.
//!
//! A small teaching library showing how Rust generics replace hand-written
//! per-type overloads: each operation here is written once and the compiler
//! monomorphizes it for every concrete type a call site uses.
//!
//! Three operations:
//! - [`midpoint`] — halfway point of two same-typed values, using the type's
//!   own arithmetic (integers truncate, floats keep the fraction).
//! - [`print_pair`] — two independently-typed printable values on one line.
//! - [`print_sequence`] — raw traversal of a contiguous sequence whose length
//!   the caller vouches for (see its `# Safety` contract).
//!
//! The companion binary walks through the operations with fixed inputs; run
//! it with `cargo run`.

pub mod error;
pub mod midpoint;
pub mod pair;
pub mod pause;
pub mod sequence;

pub use error::DemoError;
pub use midpoint::{midpoint, print_midpoint, write_midpoint, Midpoint};
pub use pair::{print_pair, write_pair};
pub use pause::wait_for_enter;
pub use sequence::{print_sequence, write_sequence};
