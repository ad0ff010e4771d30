use std::os::raw::{c_char, c_void};

/// Succeeds as long as the host passes a handle at all.
#[no_mangle]
#[allow(non_snake_case)]
pub extern "C" fn ModuleEntry(handle: *mut c_void) -> c_char {
    if handle.is_null() {
        0
    } else {
        1
    }
}
