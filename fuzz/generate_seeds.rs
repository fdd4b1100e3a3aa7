#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn bmp(
    width: i32,
    height: i32,
    bits: u16,
    compression: u32,
    extra: &[u8],
    pixels: &[u8],
) -> Vec<u8> {
    let data_offset = 54 + extra.len() as u32;
    let mut out = vec![0u8; 54];
    out[0] = b'B';
    out[1] = b'M';
    out[2..6].copy_from_slice(&(data_offset + pixels.len() as u32).to_le_bytes());
    out[10..14].copy_from_slice(&data_offset.to_le_bytes());
    out[14..18].copy_from_slice(&40u32.to_le_bytes());
    out[18..22].copy_from_slice(&width.to_le_bytes());
    out[22..26].copy_from_slice(&height.to_le_bytes());
    out[26..28].copy_from_slice(&1u16.to_le_bytes());
    out[28..30].copy_from_slice(&bits.to_le_bytes());
    out[30..34].copy_from_slice(&compression.to_le_bytes());
    out.extend_from_slice(extra);
    out.extend_from_slice(pixels);
    out
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // 24-bit 1x1, bottom-up
    fs::write(format!("{dir}/rgb24_1x1.bmp"), bmp(1, 1, 24, 0, &[], &[0, 0, 0xff, 0])).unwrap();

    // 32-bit 2x1, top-down
    let px = [0x10, 0x20, 0x30, 0x40, 0x50, 0x60, 0x70, 0x80];
    fs::write(format!("{dir}/rgb32_2x1.bmp"), bmp(2, -1, 32, 0, &[], &px)).unwrap();

    // 16-bit 5-5-5 via bit fields
    let mut masks = Vec::new();
    for m in [0x7C00u32, 0x03E0, 0x001F, 0] {
        masks.extend_from_slice(&m.to_le_bytes());
    }
    let rgb16 = bmp(2, 1, 16, 3, &masks, &[0xff, 0x7f, 0, 0]);
    fs::write(format!("{dir}/rgb16_555.bmp"), rgb16).unwrap();

    // 1, 4 and 8-bit with a two-color palette
    let palette = [0, 0, 0, 0, 0xff, 0xff, 0xff, 0];
    let mut pal256 = Vec::new();
    for i in 0..=255u8 {
        pal256.extend_from_slice(&[i, i, i, 0]);
    }
    let idx1 = bmp(9, 2, 1, 0, &palette, &[0xaa, 0x80, 0, 0, 0x55, 0, 0, 0]);
    fs::write(format!("{dir}/idx1_9x2.bmp"), idx1).unwrap();
    let idx4 = bmp(3, 1, 4, 0, &pal256[..64], &[0x12, 0x30, 0, 0]);
    fs::write(format!("{dir}/idx4_3x1.bmp"), idx4).unwrap();
    let idx8 = bmp(2, 2, 8, 0, &pal256, &[0, 0xff, 0, 0, 0x80, 0x40, 0, 0]);
    fs::write(format!("{dir}/idx8_2x2.bmp"), idx8).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();
    fs::write(format!("{dir}/rle8_header.bin"), bmp(4, 4, 8, 1, &[], &[])).unwrap();

    println!("Generated seed corpus in {dir}/");
}
