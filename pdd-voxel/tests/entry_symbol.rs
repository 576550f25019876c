use std::ffi::c_void;

// Declares the exported entry function under `$name` and yields its address
// together with the name, so the linker and the string agree by construction.
macro_rules! entry_symbol {
    ($name:ident) => {{
        extern "C" {
            fn $name(
                get_proc_address: *const c_void,
                library: *mut c_void,
                initialization: *mut c_void,
            ) -> u8;
        }
        ($name as usize, stringify!($name))
    }};
}

#[test]
fn exported_symbol_matches_entry_symbol_constant() {
    let (address, name) = entry_symbol!(pdd_voxel_library_init);
    assert_ne!(std::hint::black_box(address), 0);
    assert_eq!(name, pdd_voxel::ENTRY_SYMBOL);
}
