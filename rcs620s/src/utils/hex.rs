//! Hex formatting helpers for trace output.

/// Format bytes as a compact lowercase hex string.
///
/// Example: `&[0x01, 0xfe]` -> `"01fe"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    use std::fmt::Write;
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(&mut s, "{:02x}", b);
    }
    s
}

/// Format bytes as lowercase hex with one space between bytes.
///
/// Example: `&[0x01, 0xfe]` -> `"01 fe"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    use std::fmt::Write;
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        let _ = write!(&mut s, "{:02x}", b);
    }
    s
}
