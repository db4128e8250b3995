/*
 * Input/Output Boundaries
 *
 * File-operation plumbing between the host environment and the
 * controller:
 * - user: caller-supplied memory that must be copied across the
 *   privilege boundary (and can fault)
 * - file: the operation table for a registered pseudo-file and the
 *   per-open cursor that carries the read position
 */

pub mod file;
pub mod user;

pub use file::{FileOps, OpenFile};
pub use user::{UserSlice, UserSliceMut};
