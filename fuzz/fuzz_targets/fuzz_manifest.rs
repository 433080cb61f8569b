#![no_main]

use bandtable_spec::Manifest;
use libfuzzer_sys::fuzz_target;

// Manifest parsing and resolution must reject bad input without panicking.
fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(manifest) = Manifest::from_json(json) {
        let _ = manifest.layout.resolve();
        let _ = manifest.resolve_presets();
    }
});
