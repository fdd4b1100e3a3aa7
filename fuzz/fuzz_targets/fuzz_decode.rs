#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Header probing and full decode must never panic
    let _ = zenbmp::probe(data);

    let limits = zenbmp::Limits {
        max_pixels: Some(1 << 24),
        max_memory_bytes: Some(256 << 20),
        ..Default::default()
    };
    let _ = zenbmp::DecodeRequest::new(std::io::Cursor::new(data))
        .with_limits(&limits)
        .decode(enough::Unstoppable);
});
