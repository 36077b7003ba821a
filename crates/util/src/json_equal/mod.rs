//! JSON equality utilities.
//!
//! [`deep_equal`] is strict structural equality over two values.
//! [`has_same_value`] extends it to possibly-absent operands, treating
//! "no value" and explicit null as interchangeable at the comparison
//! boundary.

mod deep_equal;
mod same_value;

pub use deep_equal::deep_equal;
pub use same_value::has_same_value;
