#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(isbn) = s.parse::<bookland::Isbn10>() {
            // A parsed value must convert and round-trip
            let isbn13 = isbn.to_isbn13();
            assert_eq!(isbn13.to_isbn10().unwrap(), isbn);
        }
        let _ = s.parse::<bookland::Isbn13>();
    }
});
