use std::os::raw::{c_char, c_void};

// The host looks for "ModuleEntry"; this one is misnamed on purpose.
#[no_mangle]
#[allow(non_snake_case)]
pub extern "C" fn ModuleEntryMisnamed(_handle: *mut c_void) -> c_char {
    1
}
