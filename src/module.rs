/*
 * Module Lifecycle
 *
 * Registers the prefetch-controller debugfs subtree at load and removes
 * it at unload. The two node handles are owned by an explicit
 * Registration so the resource lifetime stays visible; PrefetchModule
 * adapts that to the host's C-shaped init/exit entry points.
 */

use alloc::sync::Arc;

use spin::Mutex;

use crate::debugfs::{DebugFs, DirHandle, FileHandle, Mode};
use crate::dscr::DscrIo;
use crate::error::Errno;
use crate::prefetch::{DIR_NAME, FILE_NAME, PrefetchDepthFile};

/// Live registration of the debugfs subtree.
///
/// Created once at load, consumed once at unload, never shared.
pub struct Registration {
    dir: DirHandle,
    file: FileHandle,
}

impl Registration {
    pub fn dir(&self) -> DirHandle {
        self.dir
    }

    pub fn file(&self) -> FileHandle {
        self.file
    }
}

/// Create the directory and the control file.
///
/// Rolls the directory back when file creation fails, so a load error
/// never leaves a partial subtree behind. Creation failures surface as
/// ENOMEM to the loader.
pub fn register<D>(fs: &dyn DebugFs, dscr: D) -> Result<Registration, Errno>
where
    D: DscrIo + 'static,
{
    let dir = match fs.create_dir(DIR_NAME) {
        Ok(dir) => dir,
        Err(err) => {
            log::error!("failed to create debugfs directory {}: {:?}", DIR_NAME, err);
            return Err(Errno::ENOMEM);
        }
    };

    let ops = Arc::new(PrefetchDepthFile::new(dscr));
    let file = match fs.create_file(FILE_NAME, Mode::RW_R_R, dir, ops) {
        Ok(file) => file,
        Err(err) => {
            log::error!("failed to create debugfs file {}: {:?}", FILE_NAME, err);
            fs.remove_recursive(dir);
            return Err(Errno::ENOMEM);
        }
    };

    log::info!("prefetch controller loaded at {}/{}", DIR_NAME, FILE_NAME);
    Ok(Registration { dir, file })
}

/// Tear the subtree down; one recursive removal frees both nodes.
pub fn unregister(fs: &dyn DebugFs, registration: Registration) {
    fs.remove_recursive(registration.dir);
    log::info!("prefetch controller unloaded");
}

/// Module-lifetime holder for the registration, shaped like the host's
/// load/unload entry points.
pub struct PrefetchModule {
    registration: Mutex<Option<Registration>>,
}

impl PrefetchModule {
    pub const fn new() -> Self {
        Self {
            registration: Mutex::new(None),
        }
    }

    /// Load entry point: 0 on success, negative errno on failure.
    pub fn init<D>(&self, fs: &dyn DebugFs, dscr: D) -> i32
    where
        D: DscrIo + 'static,
    {
        match register(fs, dscr) {
            Ok(registration) => {
                *self.registration.lock() = Some(registration);
                0
            }
            Err(err) => err.to_neg(),
        }
    }

    /// Unload entry point. Never fails: a no-op when nothing is
    /// registered, so calling it after a failed load is safe.
    pub fn exit(&self, fs: &dyn DebugFs) {
        if let Some(registration) = self.registration.lock().take() {
            unregister(fs, registration);
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.registration.lock().is_some()
    }
}

impl Default for PrefetchModule {
    fn default() -> Self {
        Self::new()
    }
}
