//! H8S/2000 register naming tables.
//!
//! Register fields are 4-bit nibbles. Byte registers split each 16-bit
//! register into high and low halves (`r0h..r7h`, `r0l..r7l`); word
//! registers name the low and extended halves (`r0..r7`, `e0..e7`); the
//! eight 32-bit registers are `er0..er6` plus `sp` for er7. The longword
//! table wraps: encodings routinely carry bit 3 set in a longword register
//! nibble, so values 8..=15 name the same eight registers again.

/// Byte register name for a 4-bit field: 0..=7 are the high halves,
/// 8..=15 the low halves.
pub fn byte_reg_name(n: u8) -> &'static str {
    match n & 0xF {
        0x0 => "r0h",
        0x1 => "r1h",
        0x2 => "r2h",
        0x3 => "r3h",
        0x4 => "r4h",
        0x5 => "r5h",
        0x6 => "r6h",
        0x7 => "r7h",
        0x8 => "r0l",
        0x9 => "r1l",
        0xA => "r2l",
        0xB => "r3l",
        0xC => "r4l",
        0xD => "r5l",
        0xE => "r6l",
        _ => "r7l",
    }
}

/// Word register name for a 4-bit field: 0..=7 are `r0..r7`, 8..=15 the
/// extended registers `e0..e7`.
pub fn word_reg_name(n: u8) -> &'static str {
    match n & 0xF {
        0x0 => "r0",
        0x1 => "r1",
        0x2 => "r2",
        0x3 => "r3",
        0x4 => "r4",
        0x5 => "r5",
        0x6 => "r6",
        0x7 => "r7",
        0x8 => "e0",
        0x9 => "e1",
        0xA => "e2",
        0xB => "e3",
        0xC => "e4",
        0xD => "e5",
        0xE => "e6",
        _ => "e7",
    }
}

/// Longword register name for a 4-bit field. er7 is the stack pointer and
/// renders as `sp`; the table wraps so 8..=15 alias 0..=7.
pub fn long_reg_name(n: u8) -> &'static str {
    match n & 0x7 {
        0x0 => "er0",
        0x1 => "er1",
        0x2 => "er2",
        0x3 => "er3",
        0x4 => "er4",
        0x5 => "er5",
        0x6 => "er6",
        _ => "sp",
    }
}

/// Longword lookup with the nibble pre-biased by 8, used by the one
/// two-register longword form whose source field arrives shifted.
pub fn long_reg_name_shifted(n: u8) -> &'static str {
    long_reg_name(n.wrapping_add(8) & 0xF)
}
