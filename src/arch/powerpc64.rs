/*
 * powerpc64 DSCR Access
 *
 * mfspr/mtspr on SPR 3, the problem-state DSCR alias (PowerISA Book II
 * §4.2). Each hardware thread has a private copy of the register, so no
 * synchronization is needed around the instruction pair.
 */

use core::arch::asm;

use crate::dscr::DscrIo;

/// Live DSCR of the executing hardware thread.
pub struct HardwareDscr;

impl DscrIo for HardwareDscr {
    fn read(&self) -> u64 {
        let value: u64;
        // SAFETY: mfspr from SPR 3 only samples the current thread's
        // register and has no memory effects.
        unsafe {
            asm!("mfspr {0}, 3", out(reg) value, options(nomem, nostack, preserves_flags));
        }
        value
    }

    fn write(&self, value: u64) {
        // SAFETY: the caller hands in a full register image with the
        // unrelated control fields already preserved.
        unsafe {
            asm!("mtspr 3, {0}", in(reg) value, options(nostack, preserves_flags));
        }
    }
}
