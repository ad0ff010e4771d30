use std::os::raw::{c_char, c_void};

#[no_mangle]
#[allow(non_snake_case)]
pub extern "C" fn ModuleEntry(_handle: *mut c_void) -> c_char {
    // Reports that initialization failed.
    0
}
