#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(table) = vinkit::ManufacturerTable::from_reader(data) {
        let _ = table.lookup_wmi("JM1");
    }
});
