#![no_main]
use base_model::column::{decode_column, ColumnOptions};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }

    // First two bytes pick the symbol count (capped), third the counter width
    let len = usize::from(u16::from_le_bytes([data[0], data[1]]));
    let opts = ColumnOptions {
        narrow: data[2] & 1 == 1,
        ..Default::default()
    };
    if let Ok(symbols) = decode_column(&data[3..], len, &opts) {
        assert_eq!(symbols.len(), len);
        assert!(symbols.iter().all(|&s| s < 4));
    }
});
