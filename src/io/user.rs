/*
 * User Memory Boundary
 *
 * Caller-supplied buffers reach the controller from outside the privilege
 * boundary, so the copy itself can fail: an invalid or inaccessible
 * region surfaces as EFAULT, mirroring copy_from_user/copy_to_user.
 *
 * Kernel-resident slices implement both traits infallibly; tests inject
 * faulting implementations to cover the error paths.
 */

use crate::error::Errno;

/// Caller-supplied source buffer (write path).
pub trait UserSlice {
    /// Number of bytes the caller handed in.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy the whole buffer into the start of `dst`.
    ///
    /// `dst` must hold at least `len()` bytes. Fails with EFAULT when the
    /// caller's memory cannot be read.
    fn copy_from_user(&self, dst: &mut [u8]) -> Result<(), Errno>;
}

/// Caller-supplied destination buffer (read path).
pub trait UserSliceMut {
    /// Capacity the caller can accept.
    fn capacity(&self) -> usize;

    /// Copy `src` to the start of the caller's buffer.
    ///
    /// `src` must not exceed `capacity()`. Fails with EFAULT when the
    /// caller's memory cannot be written.
    fn copy_to_user(&mut self, src: &[u8]) -> Result<(), Errno>;
}

impl UserSlice for &[u8] {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn copy_from_user(&self, dst: &mut [u8]) -> Result<(), Errno> {
        dst[..self.len()].copy_from_slice(self);
        Ok(())
    }
}

impl UserSliceMut for &mut [u8] {
    fn capacity(&self) -> usize {
        (**self).len()
    }

    fn copy_to_user(&mut self, src: &[u8]) -> Result<(), Errno> {
        self[..src.len()].copy_from_slice(src);
        Ok(())
    }
}
