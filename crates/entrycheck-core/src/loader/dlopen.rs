//! Platform backend over `dlopen`/`dlsym`/`dlclose`.
use std::ffi::{CStr, c_void};
use std::mem::{self, ManuallyDrop};
use std::path::Path;

use libloading::os::unix::{Library, RTLD_LAZY};
use log::trace;

use crate::loader::error::LoaderErrorSource;
use crate::loader::{DynamicLoader, EntryFn, ModuleHandle};

/// [`DynamicLoader`] backed by the system dynamic linker.
///
/// Handles are kept as raw `dlopen` handles so they can be passed to the
/// module verbatim; `libloading` only does the calls and error capture.
#[derive(Debug, Default)]
pub struct DlopenLoader;

impl DlopenLoader {
    pub fn new() -> Self {
        Self
    }
}

impl DynamicLoader for DlopenLoader {
    fn open(&mut self, path: &Path) -> Result<ModuleHandle, LoaderErrorSource> {
        // Running the library's constructors is the point of this tool.
        let library = unsafe { Library::open(Some(path), RTLD_LAZY) }?;
        let handle = ModuleHandle::from_raw(library.into_raw());
        trace!("dlopen({}) -> {:?}", path.display(), handle);
        Ok(handle)
    }

    unsafe fn resolve(&mut self, handle: ModuleHandle, symbol: &CStr) -> Result<EntryFn, LoaderErrorSource> {
        // Borrow the handle without taking ownership; dropping a Library would dlclose it.
        let library = ManuallyDrop::new(unsafe { Library::from_raw(handle.as_raw()) });
        let ptr = unsafe { library.get::<*mut c_void>(symbol.to_bytes_with_nul()) }
            .map(|sym| *sym)?;
        if ptr.is_null() {
            return Err(LoaderErrorSource::Other(format!(
                "symbol '{}' resolved to a null address",
                symbol.to_string_lossy()
            )));
        }
        trace!("dlsym({:?}, {}) -> {:p}", handle, symbol.to_string_lossy(), ptr);
        Ok(unsafe { mem::transmute::<*mut c_void, EntryFn>(ptr) })
    }

    fn close(&mut self, handle: ModuleHandle) -> Result<(), LoaderErrorSource> {
        let library = unsafe { Library::from_raw(handle.as_raw()) };
        library.close()?;
        trace!("dlclose({:?})", handle);
        Ok(())
    }
}
