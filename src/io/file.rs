/*
 * File Operation Table
 *
 * debugfs-style operation table plus the per-open cursor. Mirrors the
 * file_operations/loff_t split: the table is stateless and shared across
 * opens, the position lives with the open file description.
 */

use alloc::sync::Arc;

use crate::error::Errno;
use crate::io::user::{UserSlice, UserSliceMut};

/// Operation table for a registered pseudo-file.
///
/// One table is shared by every open session; per-open state is limited
/// to the position handed in by [`OpenFile`].
pub trait FileOps: Send + Sync {
    /// Called once per open.
    fn open(&self) -> Result<(), Errno> {
        Ok(())
    }

    /// Called once when the open session goes away.
    fn release(&self) -> Result<(), Errno> {
        Ok(())
    }

    /// Read at `pos` into the caller's buffer, advancing `pos` by the
    /// number of bytes produced.
    fn read(&self, buf: &mut dyn UserSliceMut, pos: &mut u64) -> Result<usize, Errno>;

    /// Write the caller's buffer at `pos`, returning the number of bytes
    /// consumed.
    fn write(&self, buf: &dyn UserSlice, pos: &mut u64) -> Result<usize, Errno>;
}

/// One open session on a pseudo-file.
///
/// Owns the file position, which resets with every fresh open. Dropping
/// the session releases the file.
pub struct OpenFile {
    ops: Arc<dyn FileOps>,
    pos: u64,
}

impl OpenFile {
    /// Open a session against an operation table.
    pub fn open(ops: Arc<dyn FileOps>) -> Result<Self, Errno> {
        ops.open()?;
        Ok(Self { ops, pos: 0 })
    }

    pub fn read(&mut self, buf: &mut dyn UserSliceMut) -> Result<usize, Errno> {
        self.ops.read(buf, &mut self.pos)
    }

    pub fn write(&mut self, buf: &dyn UserSlice) -> Result<usize, Errno> {
        self.ops.write(buf, &mut self.pos)
    }

    pub fn pos(&self) -> u64 {
        self.pos
    }
}

impl Drop for OpenFile {
    fn drop(&mut self) {
        let _ = self.ops.release();
    }
}
