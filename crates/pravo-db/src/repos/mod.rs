//! Repository modules implementing store operations.
//!
//! Each module adds methods to `PravoDb` via `impl PravoDb` blocks.

pub mod incident;
pub mod seed;
