#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic. Rejections are fine, panics are bugs.
        if let Ok(vin) = vinkit::Vin::create(s) {
            let _ = vin.details();
            let _ = (vin.check_digit(), vin.plant_code());
            assert_eq!(vinkit::decode(s).as_deref(), Ok(vin.as_str()));
        }
    }
});
