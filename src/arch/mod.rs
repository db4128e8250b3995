/*
 * Architecture Support
 *
 * Hardware access to the DSCR is Power-specific; other architectures
 * only see the mockable `DscrIo` boundary from `crate::dscr`.
 */

#[cfg(target_arch = "powerpc64")]
pub mod powerpc64;

#[cfg(target_arch = "powerpc64")]
pub use powerpc64::HardwareDscr;
