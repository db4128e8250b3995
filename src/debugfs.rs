/*
 * Debugfs Registration Surface
 *
 * Interface boundary to the host kernel's virtual filesystem. The host
 * owns node creation and teardown; this crate only keeps the opaque
 * handles it gets back and removes the subtree at unload.
 */

use alloc::sync::Arc;

use bitflags::bitflags;

use crate::error::Errno;
use crate::io::file::FileOps;

bitflags! {
    /// Permission mode bits for a created node (octal POSIX layout).
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Mode: u32 {
        const OWNER_READ = 0o400;
        const OWNER_WRITE = 0o200;
        const GROUP_READ = 0o040;
        const OTHER_READ = 0o004;
    }
}

impl Mode {
    /// rw-r--r-- (0644), the mode of the control file.
    pub const RW_R_R: Mode = Mode::OWNER_READ
        .union(Mode::OWNER_WRITE)
        .union(Mode::GROUP_READ)
        .union(Mode::OTHER_READ);
}

/// Opaque handle to a directory node issued by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirHandle(pub u64);

/// Opaque handle to a file node issued by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHandle(pub u64);

/// Node registration surface provided by the host environment.
///
/// Load/unload are serialized by the host, so the surface takes `&self`
/// without further locking here.
pub trait DebugFs {
    /// Create a top-level directory.
    fn create_dir(&self, name: &str) -> Result<DirHandle, Errno>;

    /// Create a file under `parent`, dispatching its I/O to `ops`.
    fn create_file(
        &self,
        name: &str,
        mode: Mode,
        parent: DirHandle,
        ops: Arc<dyn FileOps>,
    ) -> Result<FileHandle, Errno>;

    /// Remove a directory and everything under it. Idempotent.
    fn remove_recursive(&self, dir: DirHandle);
}
