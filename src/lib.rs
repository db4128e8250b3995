/*
 * DSCR Prefetch-Depth Controller
 *
 * Kernel component that exposes the Data Stream Control Register (DSCR,
 * SPR 3) prefetch-depth field as a debugfs pseudo-file. An operator can
 * read the current depth and set a new one (0-7) without rebooting:
 *
 *   cat  prefetch-controller/prefetch-depth      -> "3\n"
 *   echo 5 > prefetch-controller/prefetch-depth
 *
 * The host kernel environment is modeled at its interface boundary:
 * - `debugfs::DebugFs` is the node registration surface it provides
 * - `dscr::DscrIo` is the raw register access primitive
 * - `io::user` is the cross-boundary memory copy that can fault
 *
 * Everything between those boundaries (validation, parsing, formatting,
 * lifecycle rollback) is ordinary non-privileged code and is tested
 * against mock implementations of the boundaries.
 */

#![cfg_attr(not(test), no_std)]
#![cfg_attr(target_arch = "powerpc64", feature(asm_experimental_arch))]

extern crate alloc;

pub mod arch;
pub mod debugfs;
pub mod dscr;
pub mod error;
pub mod io;
pub mod module;
pub mod prefetch;

#[cfg(test)]
pub(crate) mod testing;

pub use debugfs::{DebugFs, DirHandle, FileHandle, Mode};
pub use dscr::DscrIo;
pub use error::Errno;
pub use io::{FileOps, OpenFile, UserSlice, UserSliceMut};
pub use module::{PrefetchModule, Registration, register, unregister};
pub use prefetch::PrefetchDepthFile;
