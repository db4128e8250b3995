/*
 * DSCR Register Boundary
 *
 * The prefetch depth lives in bits 0-2 of the Data Stream Control
 * Register; everything above carries unrelated control fields and must
 * survive a depth update. The register is per-hardware-thread, so access
 * needs no locking: a call only ever touches the register of the CPU it
 * runs on.
 */

use alloc::sync::Arc;

/// Low three bits of the DSCR hold the prefetch depth.
pub const DEPTH_MASK: u64 = 0x7;

/// Largest valid prefetch depth. 8-15 are representable hex digits but
/// never valid depths.
pub const DEPTH_MAX: u64 = 7;

/// Raw access to the current execution context's DSCR.
///
/// The one privileged primitive in the system. The hardware
/// implementation lives in [`crate::arch`]; tests swap in a mock.
pub trait DscrIo: Send + Sync {
    fn read(&self) -> u64;
    fn write(&self, value: u64);
}

impl<T: DscrIo + ?Sized> DscrIo for Arc<T> {
    fn read(&self) -> u64 {
        (**self).read()
    }

    fn write(&self, value: u64) {
        (**self).write(value)
    }
}

/// Extract the prefetch depth from a raw register value.
pub fn depth_of(dscr: u64) -> u64 {
    dscr & DEPTH_MASK
}

/// Replace the depth field, leaving the upper bits untouched.
pub fn with_depth(dscr: u64, depth: u64) -> u64 {
    (dscr & !DEPTH_MASK) | (depth & DEPTH_MASK)
}
