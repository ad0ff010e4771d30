//! # Entrycheck Loader
//!
//! Drives a single module through open, resolve, invoke and close.
//!
//! ## Key Submodules and Responsibilities:
//!
//! - **[`runner`]**: The four-step sequence ([`EntryRunner`](runner::EntryRunner))
//!   and its [`Stage`](runner::Stage) state machine.
//! - **[`dlopen`]**: The platform backend ([`DlopenLoader`](dlopen::DlopenLoader))
//!   built on `libloading`.
//! - **[`bundle`]**: Maps a `.vst3` bundle directory to the shared object inside it.
//! - **[`error`]**: The failure taxonomy ([`EntryCheckError`](error::EntryCheckError)).
//!
//! The platform loader is reached through the [`DynamicLoader`] trait so the
//! sequence can run against a recording double in tests.
//!
//! Symbol lookup does not check signatures. Whatever sits behind
//! `ModuleEntry` is trusted to match [`EntryFn`]; anything else is undefined
//! behaviour at the call site.
pub mod bundle;
#[cfg(unix)]
pub mod dlopen;
pub mod error;
pub mod runner;

use std::ffi::{CStr, c_void};
use std::os::raw::c_char;
use std::path::Path;

use crate::loader::error::LoaderErrorSource;

/// Signature of the module initializer: its own handle in, zero on failure out.
pub type EntryFn = unsafe extern "C-unwind" fn(*mut c_void) -> c_char;

/// Opaque identifier the platform loader assigned to an open library.
///
/// The value is only meaningful to the loader and to the module itself, so it
/// is kept as a raw pointer-sized id rather than an owning wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleHandle(*mut c_void);

impl ModuleHandle {
    pub fn from_raw(raw: *mut c_void) -> Self {
        Self(raw)
    }

    pub fn as_raw(&self) -> *mut c_void {
        self.0
    }
}

/// Access to the platform's dynamic loading facility.
pub trait DynamicLoader {
    /// Open the library at `path` with lazy symbol binding.
    fn open(&mut self, path: &Path) -> Result<ModuleHandle, LoaderErrorSource>;

    /// Look up `symbol` in an open library.
    ///
    /// # Safety
    /// The caller must only call the returned pointer while `handle` is open,
    /// and the exported symbol must really have the [`EntryFn`] signature.
    unsafe fn resolve(&mut self, handle: ModuleHandle, symbol: &CStr) -> Result<EntryFn, LoaderErrorSource>;

    /// Release a handle returned by [`open`](Self::open). The handle is dead afterwards.
    fn close(&mut self, handle: ModuleHandle) -> Result<(), LoaderErrorSource>;
}

impl<L: DynamicLoader + ?Sized> DynamicLoader for &mut L {
    fn open(&mut self, path: &Path) -> Result<ModuleHandle, LoaderErrorSource> {
        (**self).open(path)
    }

    unsafe fn resolve(&mut self, handle: ModuleHandle, symbol: &CStr) -> Result<EntryFn, LoaderErrorSource> {
        unsafe { (**self).resolve(handle, symbol) }
    }

    fn close(&mut self, handle: ModuleHandle) -> Result<(), LoaderErrorSource> {
        (**self).close(handle)
    }
}
