//! # Entrycheck Core
//!
//! Library side of the `entrycheck` smoke-test harness. It opens one dynamic
//! library, resolves its `ModuleEntry` initializer, calls it with the
//! library's own handle and unloads the library again.
//!
//! The binary crate only wires logging and exit codes around
//! [`EntryRunner::run`]; everything that touches the platform loader lives in
//! [`loader`].
pub mod constants;
pub mod loader;

pub use loader::error::{EntryCheckError, FailureKind, LoaderErrorSource, Result};
pub use loader::runner::{EntryRunner, Stage};
pub use loader::{DynamicLoader, EntryFn, ModuleHandle};
#[cfg(unix)]
pub use loader::dlopen::DlopenLoader;
