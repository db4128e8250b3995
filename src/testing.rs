/*
 * Shared Test Doubles
 *
 * Mock implementations of the two host-environment boundaries: the DSCR
 * register and the debugfs registration surface, plus buffers that fault
 * on copy. Test-only; the real implementations live in the host kernel.
 */

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicU64, Ordering};

use spin::Mutex;

use crate::debugfs::{DebugFs, DirHandle, FileHandle, Mode};
use crate::dscr::DscrIo;
use crate::error::Errno;
use crate::io::file::{FileOps, OpenFile};
use crate::io::user::{UserSlice, UserSliceMut};

/// Register double backed by an atomic, shareable across the endpoint
/// and the asserting test.
pub struct MockDscr(AtomicU64);

impl MockDscr {
    pub fn new(value: u64) -> Arc<Self> {
        Arc::new(Self(AtomicU64::new(value)))
    }

    pub fn value(&self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }
}

impl DscrIo for MockDscr {
    fn read(&self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }

    fn write(&self, value: u64) {
        self.0.store(value, Ordering::SeqCst);
    }
}

/// Write-path source whose copy always faults.
pub struct FaultingSlice(pub usize);

impl UserSlice for FaultingSlice {
    fn len(&self) -> usize {
        self.0
    }

    fn copy_from_user(&self, _dst: &mut [u8]) -> Result<(), Errno> {
        Err(Errno::EFAULT)
    }
}

/// Read-path sink whose copy always faults.
pub struct FaultingSliceMut(pub usize);

impl UserSliceMut for FaultingSliceMut {
    fn capacity(&self) -> usize {
        self.0
    }

    fn copy_to_user(&mut self, _src: &[u8]) -> Result<(), Errno> {
        Err(Errno::EFAULT)
    }
}

struct FakeFile {
    handle: FileHandle,
    name: String,
    mode: Mode,
    parent: DirHandle,
    ops: Arc<dyn FileOps>,
}

#[derive(Default)]
struct FakeState {
    next_handle: u64,
    dirs: Vec<DirHandle>,
    files: Vec<FakeFile>,
    remove_calls: usize,
}

/// In-memory registration surface with failure injection.
pub struct FakeDebugFs {
    state: Mutex<FakeState>,
    fail_create_dir: bool,
    fail_create_file: bool,
}

impl FakeDebugFs {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FakeState::default()),
            fail_create_dir: false,
            fail_create_file: false,
        }
    }

    pub fn fail_create_dir(mut self) -> Self {
        self.fail_create_dir = true;
        self
    }

    pub fn fail_create_file(mut self) -> Self {
        self.fail_create_file = true;
        self
    }

    pub fn dir_count(&self) -> usize {
        self.state.lock().dirs.len()
    }

    pub fn file_count(&self) -> usize {
        self.state.lock().files.len()
    }

    pub fn remove_calls(&self) -> usize {
        self.state.lock().remove_calls
    }

    pub fn file_info(&self, handle: FileHandle) -> Option<(String, Mode, DirHandle)> {
        let state = self.state.lock();
        state
            .files
            .iter()
            .find(|f| f.handle == handle)
            .map(|f| (f.name.clone(), f.mode, f.parent))
    }

    /// Open a registered file by name, the way the host would dispatch
    /// an open from userspace.
    pub fn open(&self, name: &str) -> Result<OpenFile, Errno> {
        let ops = {
            let state = self.state.lock();
            state
                .files
                .iter()
                .find(|f| f.name == name)
                .map(|f| f.ops.clone())
                .ok_or(Errno::EBADF)?
        };
        OpenFile::open(ops)
    }
}

impl DebugFs for FakeDebugFs {
    fn create_dir(&self, _name: &str) -> Result<DirHandle, Errno> {
        if self.fail_create_dir {
            return Err(Errno::ENOMEM);
        }
        let mut state = self.state.lock();
        state.next_handle += 1;
        let dir = DirHandle(state.next_handle);
        state.dirs.push(dir);
        Ok(dir)
    }

    fn create_file(
        &self,
        name: &str,
        mode: Mode,
        parent: DirHandle,
        ops: Arc<dyn FileOps>,
    ) -> Result<FileHandle, Errno> {
        if self.fail_create_file {
            return Err(Errno::ENOMEM);
        }
        let mut state = self.state.lock();
        if !state.dirs.contains(&parent) {
            return Err(Errno::EBADF);
        }
        state.next_handle += 1;
        let handle = FileHandle(state.next_handle);
        state.files.push(FakeFile {
            handle,
            name: String::from(name),
            mode,
            parent,
            ops,
        });
        Ok(handle)
    }

    fn remove_recursive(&self, dir: DirHandle) {
        let mut state = self.state.lock();
        state.remove_calls += 1;
        state.dirs.retain(|&d| d != dir);
        state.files.retain(|f| f.parent != dir);
    }
}
