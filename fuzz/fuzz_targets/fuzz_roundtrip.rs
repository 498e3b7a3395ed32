#![no_main]
use base_model::{Counter, FrequencyModel, RangeDecoder, RangeEncoder};
use libfuzzer_sys::fuzz_target;

fn roundtrip<C: Counter>(symbols: &[u8]) {
    let mut model = FrequencyModel::<C>::new();
    let mut encoder = RangeEncoder::new();
    let coded: Vec<u8> = symbols
        .iter()
        .map(|&s| model.encode_symbol(&mut encoder, s))
        .collect();
    let bytes = encoder.finish();

    let mut model = FrequencyModel::<C>::new();
    let mut decoder = RangeDecoder::new(&bytes);
    for &expected in &coded {
        assert_eq!(model.decode_symbol(&mut decoder), expected);
    }
}

fuzz_target!(|data: &[u8]| {
    // Fold bytes onto 0..=4, keeping runs so rescales are reached
    let symbols: Vec<u8> = data.iter().map(|&b| b % 5).collect();
    roundtrip::<u8>(&symbols);
    roundtrip::<u16>(&symbols);
});
