//! # Entrycheck Loader Errors
//!
//! Defines the error taxonomy of the load, resolve, invoke, unload sequence.
//!
//! Every failure is terminal. [`EntryCheckError`] carries the context of the
//! step that failed and [`FailureKind`] names that step without its payload.
//! Platform diagnostics travel as [`LoaderErrorSource`].
use std::path::PathBuf;
use std::result::Result as StdResult;

use thiserror::Error as ThisError;

/// The step of the sequence that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
pub enum FailureKind {
    #[error("LoadError")]
    LoadError,
    #[error("SymbolError")]
    SymbolError,
    #[error("InvocationFailure")]
    InvocationFailure,
    #[error("UnloadError")]
    UnloadError,
}

impl FailureKind {
    /// perror-style context string printed in front of the diagnostic.
    ///
    /// `None` for [`FailureKind::InvocationFailure`], whose line has no prefix.
    pub fn context(&self) -> Option<&'static str> {
        match self {
            FailureKind::LoadError => Some("dlopen"),
            FailureKind::SymbolError => Some("dlsym"),
            FailureKind::InvocationFailure => None,
            FailureKind::UnloadError => Some("dlclose"),
        }
    }
}

#[derive(Debug, ThisError)]
pub enum EntryCheckError {
    #[error("failed to load module '{}': {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: LoaderErrorSource,
    },

    #[error("failed to resolve symbol '{symbol}': {source}")]
    Symbol {
        symbol: String,
        #[source]
        source: LoaderErrorSource,
    },

    #[error("failed to init: {message}")]
    Invocation {
        symbol: String,
        message: String,
    },

    #[error("failed to unload module: {source}")]
    Unload {
        #[source]
        source: LoaderErrorSource,
    },
}

impl EntryCheckError {
    pub fn kind(&self) -> FailureKind {
        match self {
            EntryCheckError::Load { .. } => FailureKind::LoadError,
            EntryCheckError::Symbol { .. } => FailureKind::SymbolError,
            EntryCheckError::Invocation { .. } => FailureKind::InvocationFailure,
            EntryCheckError::Unload { .. } => FailureKind::UnloadError,
        }
    }

    /// Process exit status for this failure. All kinds share status 1.
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// The one-line diagnostic shown to the user, `<context>: <message>`.
    ///
    /// Invocation failures print the bare `failed to init` line instead.
    pub fn diagnostic(&self) -> String {
        match (self, self.kind().context()) {
            (
                EntryCheckError::Load { source, .. }
                | EntryCheckError::Symbol { source, .. }
                | EntryCheckError::Unload { source },
                Some(context),
            ) => format!("{}: {}", context, source),
            _ => "failed to init".to_string(),
        }
    }
}

/// Cause reported by a [`DynamicLoader`](crate::loader::DynamicLoader) backend.
#[derive(Debug, ThisError)]
pub enum LoaderErrorSource {
    #[error(transparent)]
    Library(#[from] libloading::Error),
    #[error("{0}")]
    Other(String),
}

/// Shorthand for Result with our Error type
pub type Result<T> = StdResult<T, EntryCheckError>;
