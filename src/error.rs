/*
 * Error Codes
 *
 * POSIX errno subset used across the controller, for syscall-level
 * compatibility with the host environment:
 * - EINVAL: malformed or out-of-range input, undersized read buffer
 * - EFAULT: caller-supplied memory could not be copied
 * - ENOMEM: debugfs node creation failed at load time
 */

/// POSIX errno values
///
/// Subset of standard POSIX error codes returned by the controller and
/// its host-environment boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum Errno {
    EIO = 5,     // I/O error
    EBADF = 9,   // Bad file descriptor
    ENOMEM = 12, // Out of memory
    EFAULT = 14, // Bad address
    EINVAL = 22, // Invalid argument
}

impl Errno {
    /// Negative error code for C-shaped entry points (0 = success,
    /// -errno = failure).
    pub fn to_neg(self) -> i32 {
        -(self as i32)
    }
}
