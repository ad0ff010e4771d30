use std::ffi::CStr;

/// Application name
pub const APP_NAME: &str = "entrycheck";

/// Path of the module under test, fixed at build time.
///
/// Set `ENTRYCHECK_MODULE_PATH` while compiling to point the harness at a
/// different module. Either a shared object or a `.vst3` bundle directory is
/// accepted.
pub const MODULE_PATH: &str = match option_env!("ENTRYCHECK_MODULE_PATH") {
    Some(path) => path,
    None => DEFAULT_MODULE_PATH,
};

/// Fallback for [`MODULE_PATH`]: the debug build of the SDK's `adelay` example.
pub const DEFAULT_MODULE_PATH: &str =
    "/home/mikedorf/dev/vst3sdk/build/VST3/Debug/adelay.vst3/Contents/x86_64-linux/adelay.so";

/// Name of the exported initializer.
pub const ENTRY_SYMBOL: &str = "ModuleEntry";

/// [`ENTRY_SYMBOL`] as handed to the platform loader
pub const ENTRY_SYMBOL_C: &CStr = c"ModuleEntry";

/// Directory inside a bundle that holds the per-platform binaries
pub const BUNDLE_CONTENTS_DIR: &str = "Contents";

/// Suffix of the per-platform directory, appended to the machine architecture
pub const BUNDLE_PLATFORM_SUFFIX: &str = "linux";

/// Extension of the shared object inside a bundle
pub const BUNDLE_LIBRARY_EXTENSION: &str = "so";
