//! # Entry runner
//!
//! Runs one module through `Start → Loaded → Resolved → Invoked → Unloaded`.
//! Any failure ends the run with an [`EntryCheckError`]; nothing is retried.
//!
//! Once a module is loaded its handle is released on every path out of
//! [`EntryRunner::run`], including a failed `ModuleEntry` call.
use std::any::Any;
use std::fmt;
use std::panic;
use std::path::Path;

use log::{debug, info, warn};

use crate::constants::{ENTRY_SYMBOL, ENTRY_SYMBOL_C};
use crate::loader::bundle;
use crate::loader::error::{EntryCheckError, Result};
use crate::loader::{DynamicLoader, EntryFn, ModuleHandle};

/// Position in the load sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Start,
    Loaded,
    Resolved,
    Invoked,
    Unloaded,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Start => "start",
            Stage::Loaded => "loaded",
            Stage::Resolved => "resolved",
            Stage::Invoked => "invoked",
            Stage::Unloaded => "unloaded",
        };
        f.write_str(name)
    }
}

/// Drives a [`DynamicLoader`] through the load, resolve, invoke, unload sequence.
#[derive(Debug)]
pub struct EntryRunner<L> {
    loader: L,
}

impl<L: DynamicLoader> EntryRunner<L> {
    pub fn new(loader: L) -> Self {
        Self { loader }
    }

    /// Load the module at `path`, call its `ModuleEntry` with its own handle and unload it.
    ///
    /// `path` may name a shared object or a `.vst3` bundle directory. Returns
    /// [`Stage::Unloaded`] when every step succeeded.
    pub fn run(&mut self, path: &Path) -> Result<Stage> {
        let library_path = bundle::library_path(path);
        info!("Loading module {}", library_path.display());

        let handle = self
            .loader
            .open(&library_path)
            .map_err(|source| EntryCheckError::Load {
                path: library_path.clone(),
                source,
            })?;
        let stage = advance(Stage::Start, Stage::Loaded);

        // SAFETY: the pointer is only called below, before the handle is closed.
        let entry = match unsafe { self.loader.resolve(handle, ENTRY_SYMBOL_C) } {
            Ok(entry) => entry,
            Err(source) => {
                self.release_after_failure(handle);
                return Err(EntryCheckError::Symbol {
                    symbol: ENTRY_SYMBOL.to_string(),
                    source,
                });
            }
        };
        let stage = advance(stage, Stage::Resolved);

        let outcome = invoke(entry, handle);
        let stage = advance(stage, Stage::Invoked);
        if let Err(message) = outcome {
            self.release_after_failure(handle);
            return Err(EntryCheckError::Invocation {
                symbol: ENTRY_SYMBOL.to_string(),
                message,
            });
        }

        self.loader
            .close(handle)
            .map_err(|source| EntryCheckError::Unload { source })?;
        let stage = advance(stage, Stage::Unloaded);

        info!("Module {} initialized and unloaded", library_path.display());
        Ok(stage)
    }

    /// Close `handle` on an error path. The original error wins over a close failure.
    fn release_after_failure(&mut self, handle: ModuleHandle) {
        if let Err(e) = self.loader.close(handle) {
            warn!("Failed to release module after earlier error: {}", e);
        }
    }
}

fn advance(from: Stage, to: Stage) -> Stage {
    debug!("Stage {} -> {}", from, to);
    to
}

/// Call the entry function. A zero return or an unwinding panic is a failure.
fn invoke(entry: EntryFn, handle: ModuleHandle) -> std::result::Result<(), String> {
    let result = panic::catch_unwind(move || unsafe { entry(handle.as_raw()) });
    match result {
        Ok(0) => Err(format!("{ENTRY_SYMBOL} returned false")),
        Ok(_) => Ok(()),
        Err(panic_obj) => Err(format!("panic: {}", panic_message(&*panic_obj))),
    }
}

fn panic_message(panic_obj: &(dyn Any + Send)) -> String {
    if let Some(s_ref) = panic_obj.downcast_ref::<&'static str>() {
        (*s_ref).to_string()
    } else if let Some(s_obj) = panic_obj.downcast_ref::<String>() {
        s_obj.clone()
    } else {
        "Unknown panic reason".to_string()
    }
}
