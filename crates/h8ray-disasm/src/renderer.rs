//! Assembler text rendering.
//!
//! `render` turns a resolved record into `mnemonic[.size] operands`;
//! `render_line` wraps it in the listing format with position and raw
//! bytes. Immediates print as signed decimal with a `#` prefix;
//! absolute addresses and displacements print zero-padded hex tagged
//! with their width, e.g. `@0x1234:16`.

use h8ray_core::{
    byte_reg_name, long_reg_name, long_reg_name_shifted, word_reg_name, InstructionRecord,
    OperandEncoding,
};

/// Renders one record as assembler text.
pub fn render(record: &InstructionRecord) -> String {
    if record.is_sentinel() {
        return format!(".word {:#06x}", be16(&record.bytes[0..2]));
    }
    let mut text = String::with_capacity(24);
    text.push_str(record.opcode.mnemonic());
    if !record.opcode.suppresses_size_suffix() {
        text.push_str(record.size.suffix());
    }
    let ops = operands(record);
    if !ops.is_empty() {
        text.push(' ');
        text.push_str(&ops);
    }
    text
}

/// Renders one listing line: position, raw bytes in 2-byte groups, text.
///
/// Positions print as 4 hex digits, widening to 5 past 0xFFFF.
pub fn render_line(record: &InstructionRecord) -> String {
    let bytes_field = record
        .bytes
        .chunks(2)
        .map(|pair| pair.iter().map(|b| format!("{b:02x}")).collect::<String>())
        .collect::<Vec<_>>()
        .join(" ");
    if record.position > 0xFFFF {
        format!("{:05x}: {:<26}{}", record.position, bytes_field, render(record))
    } else {
        format!("{:04x}: {:<26}{}", record.position, bytes_field, render(record))
    }
}

fn operands(rec: &InstructionRecord) -> String {
    use OperandEncoding::*;

    // The resolver guarantees the fields an encoding shape reads from.
    let dst = rec.dst.unwrap_or(0);
    let src = rec.src.unwrap_or(0);
    let imm = rec.imm.unwrap_or(0);

    match rec.encoding {
        Unresolved => "???".into(),
        NoOperands => String::new(),

        ByteRegPair => format!("{}, {}", byte_reg_name(src), byte_reg_name(dst)),
        WordRegPair => format!("{}, {}", word_reg_name(src), word_reg_name(dst)),
        LongRegPair => format!("{}, {}", long_reg_name(src), long_reg_name(dst)),
        LongRegPairShifted => {
            format!("{}, {}", long_reg_name_shifted(src), long_reg_name(dst))
        }
        ByteWordRegPair => format!("{}, {}", byte_reg_name(src), word_reg_name(dst)),
        WordLongRegPair => format!("{}, {}", word_reg_name(src), long_reg_name(dst)),

        ByteReg => byte_reg_name(dst).into(),
        WordReg => word_reg_name(dst).into(),
        LongReg => long_reg_name(dst).into(),

        ShiftByteReg => shift_operand(imm, byte_reg_name(dst)),
        ShiftWordReg => shift_operand(imm, word_reg_name(dst)),
        ShiftLongReg => shift_operand(imm, long_reg_name(dst)),
        CountWordReg => format!("#{}, {}", imm, word_reg_name(dst)),
        CountLongReg => format!("#{}, {}", imm, long_reg_name(dst)),
        ImmNibble => format!("#{imm}"),

        Imm8ByteReg => format!("#{}, {}", rec.bytes[1] as i8, byte_reg_name(dst)),
        Imm16WordReg => {
            format!("#{}, {}", be16(&rec.bytes[2..4]) as i16, word_reg_name(dst))
        }
        Imm32LongReg => {
            format!("#{}, {}", be32(&rec.bytes[2..6]) as i32, long_reg_name(dst))
        }

        Imm8Ccr => format!("#{}, ccr", rec.bytes[1] as i8),
        Imm8Exr => format!("#{}, exr", rec.bytes[3] as i8),
        RegCcr => format!("{}, {}", byte_reg_name(dst), control_reg_name(rec)),
        CcrReg => format!("{}, {}", control_reg_name(rec), byte_reg_name(dst)),
        LdmacReg => format!("{}, {}", long_reg_name(dst), mac_reg_name(rec)),
        StmacReg => format!("{}, {}", mac_reg_name(rec), long_reg_name(dst)),

        Abs8ByteRegLoad => format!("{}, {}", absolute(rec, 1), byte_reg_name(dst)),
        Abs8ByteRegStore => format!("{}, {}", byte_reg_name(dst), absolute(rec, 1)),
        Abs16ByteRegLoad | Abs32ByteRegLoad => {
            format!("{}, {}", absolute(rec, 2), byte_reg_name(dst))
        }
        Abs16ByteRegStore | Abs32ByteRegStore => {
            format!("{}, {}", byte_reg_name(dst), absolute(rec, 2))
        }
        Abs16WordRegLoad | Abs32WordRegLoad => {
            format!("{}, {}", absolute(rec, 2), word_reg_name(dst))
        }
        Abs16WordRegStore | Abs32WordRegStore => {
            format!("{}, {}", word_reg_name(dst), absolute(rec, 2))
        }
        Abs16LongRegLoad | Abs32LongRegLoad => {
            format!("{}, {}", absolute(rec, 4), long_reg_name(dst))
        }
        Abs16LongRegStore | Abs32LongRegStore => {
            format!("{}, {}", long_reg_name(dst), absolute(rec, 4))
        }

        Abs24Jump => absolute(rec, 1),
        MemIndJump => format!("@@{:#04x}:8", rec.bytes[1]),
        IndReg => format!("@{}", long_reg_name(dst)),

        IndByteRegLoad => format!("@{}, {}", long_reg_name(src), byte_reg_name(dst)),
        IndByteRegStore => format!("{}, @{}", byte_reg_name(dst), long_reg_name(src)),
        IndWordRegLoad => format!("@{}, {}", long_reg_name(src), word_reg_name(dst)),
        IndWordRegStore => format!("{}, @{}", word_reg_name(dst), long_reg_name(src)),
        IndLongRegLoad => format!("@{}, {}", long_reg_name(src), long_reg_name(dst)),
        IndLongRegStore => format!("{}, @{}", long_reg_name(dst), long_reg_name(src)),

        PostIncByteReg => format!("@{}+, {}", long_reg_name(src), byte_reg_name(dst)),
        PreDecByteReg => format!("{}, @-{}", byte_reg_name(dst), long_reg_name(src)),
        PostIncWordReg => format!("@{}+, {}", long_reg_name(src), word_reg_name(dst)),
        PreDecWordReg => format!("{}, @-{}", word_reg_name(dst), long_reg_name(src)),
        PostIncLongReg => format!("@{}+, {}", long_reg_name(src), long_reg_name(dst)),
        PreDecLongReg => format!("{}, @-{}", long_reg_name(dst), long_reg_name(src)),

        Disp16ByteLoad => format!("{}, {}", displacement(rec, 2), byte_reg_name(dst)),
        Disp16ByteStore => format!("{}, {}", byte_reg_name(dst), displacement(rec, 2)),
        Disp16WordLoad => format!("{}, {}", displacement(rec, 2), word_reg_name(dst)),
        Disp16WordStore => format!("{}, {}", word_reg_name(dst), displacement(rec, 2)),
        Disp16LongLoad => format!("{}, {}", displacement(rec, 4), long_reg_name(dst)),
        Disp16LongStore => format!("{}, {}", long_reg_name(dst), displacement(rec, 4)),
        Disp32ByteLoad => format!("{}, {}", displacement(rec, 4), byte_reg_name(dst)),
        Disp32ByteStore => format!("{}, {}", byte_reg_name(dst), displacement(rec, 4)),
        Disp32WordLoad => format!("{}, {}", displacement(rec, 4), word_reg_name(dst)),
        Disp32WordStore => format!("{}, {}", word_reg_name(dst), displacement(rec, 4)),
        Disp32LongLoad => format!("{}, {}", displacement(rec, 6), long_reg_name(dst)),
        Disp32LongStore => format!("{}, {}", long_reg_name(dst), displacement(rec, 6)),

        PcRel8 => branch_target(rec, rec.bytes[1] as i8 as i64),
        PcRel16 => branch_target(rec, be16(&rec.bytes[2..4]) as i16 as i64),

        BitRegByteReg => format!("{}, {}", byte_reg_name(src), byte_reg_name(dst)),
        BitImmByteReg => format!("#{}, {}", imm, byte_reg_name(dst)),
        BitRegInd => format!("{}, @{}", byte_reg_name(src), long_reg_name(dst)),
        BitImmInd => format!("#{}, @{}", imm, long_reg_name(dst)),
        BitRegAbs8 => format!("{}, {}", byte_reg_name(src), absolute(rec, 1)),
        BitImmAbs8 => format!("#{}, {}", imm, absolute(rec, 1)),
        BitRegAbs16 | BitRegAbs32 => {
            format!("{}, {}", byte_reg_name(src), absolute(rec, 2))
        }
        BitImmAbs16 | BitImmAbs32 => format!("#{}, {}", imm, absolute(rec, 2)),

        LdcInd => format!("@{}, {}", long_reg_name(src), control_reg_name(rec)),
        StcInd => format!("{}, @{}", control_reg_name(rec), long_reg_name(src)),
        LdcPostInc => format!("@{}+, {}", long_reg_name(src), control_reg_name(rec)),
        StcPreDec => format!("{}, @-{}", control_reg_name(rec), long_reg_name(src)),
        LdcDisp16 => format!("{}, {}", displacement(rec, 4), control_reg_name(rec)),
        StcDisp16 => format!("{}, {}", control_reg_name(rec), displacement(rec, 4)),
        LdcDisp32 => format!("{}, {}", displacement(rec, 6), control_reg_name(rec)),
        StcDisp32 => format!("{}, {}", control_reg_name(rec), displacement(rec, 6)),
        LdcAbs16 | LdcAbs32 => format!("{}, {}", absolute(rec, 4), control_reg_name(rec)),
        StcAbs16 | StcAbs32 => format!("{}, {}", control_reg_name(rec), absolute(rec, 4)),

        LdmRegRange => format!("@sp+, er{}-er{}", dst.saturating_sub(imm), dst),
        StmRegRange => format!("er{}-er{}, @-sp", dst, dst + imm),
        MacPostInc => format!("@{}+, @{}+", long_reg_name(src), long_reg_name(dst)),
    }
}

/// One-bit shifts render the register alone; the two-bit form carries the
/// `#2` count.
fn shift_operand(imm: u8, reg: &str) -> String {
    if imm == 2 {
        format!("#2, {reg}")
    } else {
        reg.into()
    }
}

/// Absolute address operand starting at byte `at`, tagged with the
/// record's operand width.
fn absolute(rec: &InstructionRecord, at: usize) -> String {
    match rec.operand_bits {
        8 => format!("@{:#04x}:8", rec.bytes[at]),
        16 => format!("@{:#06x}:16", be16(&rec.bytes[at..at + 2])),
        24 => format!("@{:#08x}:24", be24(&rec.bytes[at..at + 3])),
        _ => format!("@{:#010x}:32", be32(&rec.bytes[at..at + 4])),
    }
}

/// Displacement operand starting at byte `at`; the base register comes
/// from the resolved source field.
fn displacement(rec: &InstructionRecord, at: usize) -> String {
    let base = long_reg_name(rec.src.unwrap_or(0));
    if rec.operand_bits == 32 {
        format!("@({:#010x}:32,{})", be32(&rec.bytes[at..at + 4]), base)
    } else {
        format!("@({:#06x}:16,{})", be16(&rec.bytes[at..at + 2]), base)
    }
}

/// Resolved branch target: displacement relative to the end of the
/// instruction, wrapped to the 24-bit address space.
fn branch_target(rec: &InstructionRecord, disp: i64) -> String {
    let target = (rec.position as i64 + rec.total_length as i64 + disp) & 0xFF_FFFF;
    format!("{target:#x}")
}

/// ccr or exr, read back from the encoded bytes: prefixed forms keep the
/// flavor in byte 1's low bit, 2-byte forms in byte 1's high nibble.
fn control_reg_name(rec: &InstructionRecord) -> &'static str {
    let flag = if rec.bytes[0] == 0x01 {
        rec.bytes[1] & 0x01
    } else {
        (rec.bytes[1] >> 4) & 0x01
    };
    if flag != 0 {
        "exr"
    } else {
        "ccr"
    }
}

/// mach or macl from byte 1's high nibble (0x2 or 0x3).
fn mac_reg_name(rec: &InstructionRecord) -> &'static str {
    if (rec.bytes[1] >> 4) & 0x01 != 0 {
        "macl"
    } else {
        "mach"
    }
}

fn be16(b: &[u8]) -> u16 {
    u16::from_be_bytes([b[0], b[1]])
}

fn be24(b: &[u8]) -> u32 {
    u32::from_be_bytes([0, b[0], b[1], b[2]])
}

fn be32(b: &[u8]) -> u32 {
    u32::from_be_bytes([b[0], b[1], b[2], b[3]])
}
