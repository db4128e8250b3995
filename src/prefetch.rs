/*
 * Prefetch-Depth Control Endpoint
 *
 * Translates between the single-hex-digit file protocol and the live
 * 3-bit depth field:
 * - read: sample the register, format "{depth:x}\n", copy out once per
 *   open session (later reads hit EOF)
 * - write: accept 1-2 bytes, parse as hex, enforce 0-7, clear-and-set
 *   the depth bits
 *
 * Every check runs before the register is touched, so a rejected write
 * leaves the hardware unmodified.
 */

use core::fmt::Write as _;

use heapless::String;

use crate::dscr::{self, DEPTH_MAX, DscrIo};
use crate::error::Errno;
use crate::io::file::FileOps;
use crate::io::user::{UserSlice, UserSliceMut};

/// debugfs directory the endpoint lives in.
pub const DIR_NAME: &str = "prefetch-controller";

/// Control file under it.
pub const FILE_NAME: &str = "prefetch-depth";

/// Largest accepted write: one hex digit plus one trailing byte.
const MAX_WRITE_LEN: usize = 2;

/// Control file backing `prefetch-controller/prefetch-depth`.
pub struct PrefetchDepthFile<D: DscrIo> {
    dscr: D,
}

impl<D: DscrIo> PrefetchDepthFile<D> {
    pub fn new(dscr: D) -> Self {
        Self { dscr }
    }

    /// Parse the scratch buffer as a base-16 value.
    ///
    /// The buffer is zero-filled before the copy-in, so NUL padding and a
    /// single trailing newline are tolerated after the digit; anything
    /// else fails the parse.
    fn parse_hex(data: &[u8]) -> Option<u64> {
        let end = data
            .iter()
            .position(|&b| b == 0 || b == b'\n')
            .unwrap_or(data.len());
        let text = core::str::from_utf8(&data[..end]).ok()?;
        if text.is_empty() {
            return None;
        }
        u64::from_str_radix(text, 16).ok()
    }
}

impl<D: DscrIo> FileOps for PrefetchDepthFile<D> {
    fn open(&self) -> Result<(), Errno> {
        log::info!("prefetch controller device open");
        Ok(())
    }

    fn release(&self) -> Result<(), Errno> {
        log::info!("prefetch controller device close");
        Ok(())
    }

    fn read(&self, buf: &mut dyn UserSliceMut, pos: &mut u64) -> Result<usize, Errno> {
        // One line per open session, cat-style; later reads hit EOF.
        if *pos != 0 {
            return Ok(0);
        }

        let depth = dscr::depth_of(self.dscr.read());

        // A masked depth always fits one digit plus the newline.
        let mut line: String<4> = String::new();
        let _ = write!(line, "{:x}\n", depth);

        if line.len() > buf.capacity() {
            log::error!(
                "read buffer too small for depth line ({} bytes)",
                buf.capacity()
            );
            return Err(Errno::EINVAL);
        }

        buf.copy_to_user(line.as_bytes())?;

        *pos += line.len() as u64;
        Ok(line.len())
    }

    fn write(&self, buf: &dyn UserSlice, _pos: &mut u64) -> Result<usize, Errno> {
        let count = buf.len();

        // Expect exactly one digit, optionally followed by a newline.
        if count < 1 || count > MAX_WRITE_LEN {
            log::error!("only single-digit depths 0-7 are accepted");
            return Err(Errno::EINVAL);
        }

        let mut data = [0u8; 8];
        buf.copy_from_user(&mut data[..count])?;

        let Some(depth) = Self::parse_hex(&data[..count]) else {
            log::warn!(
                "invalid depth value '{}'",
                core::str::from_utf8(&data[..count]).unwrap_or("<non-utf8>")
            );
            return Err(Errno::EINVAL);
        };

        // Valid hex digit but not a valid depth (8-f).
        if depth > DEPTH_MAX {
            log::error!("DSCR depth must be in range 0-7, got {:#x}", depth);
            return Err(Errno::EINVAL);
        }

        // All checks passed; clear-and-set the depth field, preserving
        // the unrelated control fields above bit 2.
        let current = self.dscr.read();
        self.dscr.write(dscr::with_depth(current, depth));

        Ok(count)
    }
}
