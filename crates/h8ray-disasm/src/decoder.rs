//! Primary nibble dispatch.
//!
//! Byte 0 splits into the `AH`/`AL` nibbles that key the 16-way primary
//! dispatch; byte 1 supplies `BH`/`BL` where a family needs them. Families
//! that cannot be resolved from the first two bytes delegate to the
//! extended decoders in [`crate::levels`]. Any combination outside the
//! tables leaves the record as the raw-word sentinel.

use h8ray_core::{AddressingMode, InstructionRecord, Opcode, OperandSize};

use crate::error::DecodeError;
use crate::levels;

/// Longest instruction the tables can produce, in bytes.
pub const MAX_INSTRUCTION_LEN: usize = 10;
/// Shortest instruction (and the sentinel length), in bytes.
pub const MIN_INSTRUCTION_LEN: usize = 2;

/// Condition-branch opcodes in encoding order. Indexed by `AL` for the
/// 8-bit displacement forms (0x40..=0x4F) and by `BH` for the 16-bit
/// forms (0x58).
pub(crate) const CONDITION_BRANCHES: [Opcode; 16] = [
    Opcode::Bra,
    Opcode::Brn,
    Opcode::Bhi,
    Opcode::Bls,
    Opcode::Bcc,
    Opcode::Bcs,
    Opcode::Bne,
    Opcode::Beq,
    Opcode::Bvc,
    Opcode::Bvs,
    Opcode::Bpl,
    Opcode::Bmi,
    Opcode::Bge,
    Opcode::Blt,
    Opcode::Bgt,
    Opcode::Ble,
];

/// Word/longword immediate ALU group shared by the 0x79 and 0x7A
/// families, indexed by `BH`.
const WIDE_IMM_GROUP: [Opcode; 7] = [
    Opcode::Mov,
    Opcode::Add,
    Opcode::Cmp,
    Opcode::Sub,
    Opcode::Or,
    Opcode::Xor,
    Opcode::And,
];

/// 8-bit immediate ALU grid for first-byte high nibbles 0x8..=0xE. The
/// 0xF row is not in the tables; an all-ones byte pair is a sentinel.
const BYTE_IMM_GRID: [Opcode; 7] = [
    Opcode::Add,
    Opcode::Addx,
    Opcode::Cmp,
    Opcode::Subx,
    Opcode::Or,
    Opcode::Xor,
    Opcode::And,
];

/// Splits a byte into (high, low) nibbles.
pub(crate) const fn nibbles(b: u8) -> (u8, u8) {
    (b >> 4, b & 0xF)
}

/// Assigns the decode-level fields in one shot. Levels that match a
/// pattern call this exactly once; falling through without calling it
/// leaves the record in the sentinel shape.
pub(crate) fn assign(
    rec: &mut InstructionRecord,
    opcode: Opcode,
    size: OperandSize,
    mode: AddressingMode,
    bits: u8,
    length: usize,
) {
    rec.opcode = opcode;
    rec.size = size;
    rec.addressing_mode = mode;
    rec.operand_bits = bits;
    rec.total_length = length;
}

/// Table-driven H8S/2000 instruction decoder.
///
/// Stateless; decoding is a pure function of the byte window, so one
/// instance can serve any number of buffers.
pub struct H8Disassembler;

impl H8Disassembler {
    pub fn new() -> Self {
        Self
    }

    /// Decodes a single instruction starting at `bytes[0]`.
    ///
    /// At least 2 bytes must be supplied; dispatch reads through a
    /// logical 10-byte window and treats bytes past the end of the slice
    /// as zero. The returned record carries opcode, size, addressing
    /// mode, operand width, and total length; `bytes` is left empty for
    /// the splitter to copy once the length is final.
    pub fn decode(
        &self,
        bytes: &[u8],
        position: usize,
    ) -> Result<InstructionRecord, DecodeError> {
        if bytes.len() < MIN_INSTRUCTION_LEN {
            return Err(DecodeError::truncated(
                position,
                MIN_INSTRUCTION_LEN,
                bytes.len(),
            ));
        }
        let w = window(bytes);
        let mut rec = InstructionRecord::new(position);
        dispatch(&w, &mut rec);
        Ok(rec)
    }
}

impl Default for H8Disassembler {
    fn default() -> Self {
        Self::new()
    }
}

/// Copies up to 10 bytes into a zero-padded decode window.
fn window(bytes: &[u8]) -> [u8; MAX_INSTRUCTION_LEN] {
    let mut w = [0u8; MAX_INSTRUCTION_LEN];
    let n = bytes.len().min(MAX_INSTRUCTION_LEN);
    w[..n].copy_from_slice(&bytes[..n]);
    w
}

fn dispatch(w: &[u8; MAX_INSTRUCTION_LEN], rec: &mut InstructionRecord) {
    use AddressingMode::*;
    use OperandSize::*;

    let (ah, al) = nibbles(w[0]);
    match ah {
        0x0 => decode_0(al, w, rec),
        0x1 => decode_1(al, w, rec),
        // mov.b @aa:8, Rd / mov.b Rd, @aa:8; the register is AL.
        0x2 | 0x3 => assign(rec, Opcode::Mov, Byte, Absolute, 8, 2),
        0x4 => assign(
            rec,
            CONDITION_BRANCHES[al as usize],
            Unset,
            PcRelative,
            8,
            2,
        ),
        0x5 => decode_5(al, w, rec),
        0x6 => decode_6(al, w, rec),
        0x7 => decode_7(al, w, rec),
        0x8..=0xE => assign(
            rec,
            BYTE_IMM_GRID[(ah - 8) as usize],
            Byte,
            Immediate,
            0,
            2,
        ),
        _ => {}
    }
}

fn decode_0(al: u8, w: &[u8; MAX_INSTRUCTION_LEN], rec: &mut InstructionRecord) {
    use AddressingMode::*;
    use OperandSize::*;

    let (bh, _bl) = nibbles(w[1]);
    match al {
        0x0 if w[1] == 0x00 => assign(rec, Opcode::Nop, Unset, None, 0, 2),
        0x1 => levels::level2(w, rec),
        0x2 => match bh {
            0x0 | 0x1 => assign(rec, Opcode::Stc, Byte, RegisterDirect, 0, 2),
            0x2 | 0x3 => assign(rec, Opcode::Stmac, Unset, RegisterDirect, 0, 2),
            _ => {}
        },
        0x3 => match bh {
            0x0 | 0x1 => assign(rec, Opcode::Ldc, Byte, RegisterDirect, 0, 2),
            0x2 | 0x3 => assign(rec, Opcode::Ldmac, Unset, RegisterDirect, 0, 2),
            _ => {}
        },
        0x4 => assign(rec, Opcode::Orc, Unset, Immediate, 0, 2),
        0x5 => assign(rec, Opcode::Xorc, Unset, Immediate, 0, 2),
        0x6 => assign(rec, Opcode::Andc, Unset, Immediate, 0, 2),
        0x7 => assign(rec, Opcode::Ldc, Byte, Immediate, 0, 2),
        0x8 => assign(rec, Opcode::Add, Byte, RegisterDirect, 0, 2),
        0x9 => assign(rec, Opcode::Add, Word, RegisterDirect, 0, 2),
        0xA => match bh {
            0x0 => assign(rec, Opcode::Inc, Byte, RegisterDirect, 0, 2),
            0x8..=0xF => assign(rec, Opcode::Add, Longword, RegisterDirect, 0, 2),
            _ => {}
        },
        0xB => match bh {
            0x0 | 0x8 | 0x9 => assign(rec, Opcode::Adds, Unset, RegisterDirect, 0, 2),
            0x5 | 0xD => assign(rec, Opcode::Inc, Word, RegisterDirect, 0, 2),
            0x7 | 0xF => assign(rec, Opcode::Inc, Longword, RegisterDirect, 0, 2),
            _ => {}
        },
        0xC => assign(rec, Opcode::Mov, Byte, RegisterDirect, 0, 2),
        0xD => assign(rec, Opcode::Mov, Word, RegisterDirect, 0, 2),
        0xE => assign(rec, Opcode::Addx, Byte, RegisterDirect, 0, 2),
        0xF => match bh {
            0x0 => assign(rec, Opcode::Daa, Byte, RegisterDirect, 0, 2),
            0x8..=0xF => assign(rec, Opcode::Mov, Longword, RegisterDirect, 0, 2),
            _ => {}
        },
        _ => {}
    }
}

fn decode_1(al: u8, w: &[u8; MAX_INSTRUCTION_LEN], rec: &mut InstructionRecord) {
    use AddressingMode::*;
    use OperandSize::*;

    let (bh, _bl) = nibbles(w[1]);
    match al {
        // Shift/rotate grid: BH bit 3 picks the arithmetic/through-carry
        // sibling, BH & 3 the size, BH bit 2 the two-bit form.
        0x0..=0x3 => {
            let size = match bh & 0x3 {
                0x0 => Byte,
                0x1 => Word,
                0x3 => Longword,
                _ => return,
            };
            let opcode = match (al, bh & 0x8 != 0) {
                (0x0, false) => Opcode::Shll,
                (0x0, true) => Opcode::Shal,
                (0x1, false) => Opcode::Shlr,
                (0x1, true) => Opcode::Shar,
                (0x2, false) => Opcode::Rotxl,
                (0x2, true) => Opcode::Rotl,
                (0x3, false) => Opcode::Rotxr,
                _ => Opcode::Rotr,
            };
            assign(rec, opcode, size, RegisterDirect, 0, 2);
        }
        0x4 => assign(rec, Opcode::Or, Byte, RegisterDirect, 0, 2),
        0x5 => assign(rec, Opcode::Xor, Byte, RegisterDirect, 0, 2),
        0x6 => assign(rec, Opcode::And, Byte, RegisterDirect, 0, 2),
        0x7 => match bh {
            0x0 => assign(rec, Opcode::Not, Byte, RegisterDirect, 0, 2),
            0x1 => assign(rec, Opcode::Not, Word, RegisterDirect, 0, 2),
            0x3 => assign(rec, Opcode::Not, Longword, RegisterDirect, 0, 2),
            0x5 => assign(rec, Opcode::Extu, Word, RegisterDirect, 0, 2),
            0x7 => assign(rec, Opcode::Extu, Longword, RegisterDirect, 0, 2),
            0x8 => assign(rec, Opcode::Neg, Byte, RegisterDirect, 0, 2),
            0x9 => assign(rec, Opcode::Neg, Word, RegisterDirect, 0, 2),
            0xB => assign(rec, Opcode::Neg, Longword, RegisterDirect, 0, 2),
            0xD => assign(rec, Opcode::Exts, Word, RegisterDirect, 0, 2),
            0xF => assign(rec, Opcode::Exts, Longword, RegisterDirect, 0, 2),
            _ => {}
        },
        0x8 => assign(rec, Opcode::Sub, Byte, RegisterDirect, 0, 2),
        0x9 => assign(rec, Opcode::Sub, Word, RegisterDirect, 0, 2),
        0xA => match bh {
            0x0 => assign(rec, Opcode::Dec, Byte, RegisterDirect, 0, 2),
            0x8..=0xF => assign(rec, Opcode::Sub, Longword, RegisterDirect, 0, 2),
            _ => {}
        },
        0xB => match bh {
            0x0 | 0x8 | 0x9 => assign(rec, Opcode::Subs, Unset, RegisterDirect, 0, 2),
            0x5 | 0xD => assign(rec, Opcode::Dec, Word, RegisterDirect, 0, 2),
            0x7 | 0xF => assign(rec, Opcode::Dec, Longword, RegisterDirect, 0, 2),
            _ => {}
        },
        0xC => assign(rec, Opcode::Cmp, Byte, RegisterDirect, 0, 2),
        0xD => assign(rec, Opcode::Cmp, Word, RegisterDirect, 0, 2),
        0xE => assign(rec, Opcode::Subx, Byte, RegisterDirect, 0, 2),
        0xF => match bh {
            0x0 => assign(rec, Opcode::Das, Byte, RegisterDirect, 0, 2),
            0x8..=0xF => assign(rec, Opcode::Cmp, Longword, RegisterDirect, 0, 2),
            _ => {}
        },
        _ => {}
    }
}

fn decode_5(al: u8, w: &[u8; MAX_INSTRUCTION_LEN], rec: &mut InstructionRecord) {
    use AddressingMode::*;
    use OperandSize::*;

    let (bh, bl) = nibbles(w[1]);
    match al {
        0x0 => assign(rec, Opcode::Mulxu, Byte, RegisterDirect, 0, 2),
        0x1 => assign(rec, Opcode::Divxu, Byte, RegisterDirect, 0, 2),
        0x2 => assign(rec, Opcode::Mulxu, Word, RegisterDirect, 0, 2),
        0x3 => assign(rec, Opcode::Divxu, Word, RegisterDirect, 0, 2),
        0x4 if w[1] == 0x70 => assign(rec, Opcode::Rts, Unset, None, 0, 2),
        0x5 => assign(rec, Opcode::Bsr, Unset, PcRelative, 8, 2),
        0x6 if w[1] == 0x70 => assign(rec, Opcode::Rte, Unset, None, 0, 2),
        0x7 if bh <= 0x3 && bl == 0 => assign(rec, Opcode::Trapa, Unset, Immediate, 0, 2),
        0x8 if bl == 0 => assign(
            rec,
            CONDITION_BRANCHES[bh as usize],
            Unset,
            PcRelative,
            16,
            4,
        ),
        0x9 if bh <= 0x7 && bl == 0 => assign(rec, Opcode::Jmp, Unset, RegisterIndirect, 0, 2),
        0xA => assign(rec, Opcode::Jmp, Unset, Absolute, 24, 4),
        0xB => assign(rec, Opcode::Jmp, Unset, MemoryIndirect, 8, 2),
        0xC if w[1] == 0x00 => assign(rec, Opcode::Bsr, Unset, PcRelative, 16, 4),
        0xD if bh <= 0x7 && bl == 0 => assign(rec, Opcode::Jsr, Unset, RegisterIndirect, 0, 2),
        0xE => assign(rec, Opcode::Jsr, Unset, Absolute, 24, 4),
        0xF => assign(rec, Opcode::Jsr, Unset, MemoryIndirect, 8, 2),
        _ => {}
    }
}

fn decode_6(al: u8, w: &[u8; MAX_INSTRUCTION_LEN], rec: &mut InstructionRecord) {
    use AddressingMode::*;
    use OperandSize::*;

    let (bh, _bl) = nibbles(w[1]);
    match al {
        0x0 => assign(rec, Opcode::Bset, Unset, RegisterDirect, 0, 2),
        0x1 => assign(rec, Opcode::Bnot, Unset, RegisterDirect, 0, 2),
        0x2 => assign(rec, Opcode::Bclr, Unset, RegisterDirect, 0, 2),
        0x3 => assign(rec, Opcode::Btst, Unset, RegisterDirect, 0, 2),
        0x4 => assign(rec, Opcode::Or, Word, RegisterDirect, 0, 2),
        0x5 => assign(rec, Opcode::Xor, Word, RegisterDirect, 0, 2),
        0x6 => assign(rec, Opcode::And, Word, RegisterDirect, 0, 2),
        0x7 => {
            let opcode = if bh & 0x8 != 0 { Opcode::Bist } else { Opcode::Bst };
            assign(rec, opcode, Unset, RegisterDirect, 0, 2);
        }
        0x8 => assign(rec, Opcode::Mov, Byte, RegisterIndirect, 0, 2),
        0x9 => assign(rec, Opcode::Mov, Word, RegisterIndirect, 0, 2),
        0xA => match bh {
            0x0 | 0x8 => assign(rec, Opcode::Mov, Byte, Absolute, 16, 4),
            0x2 | 0xA => assign(rec, Opcode::Mov, Byte, Absolute, 32, 6),
            // Bit manipulation on an absolute address; resolved at Level 4.
            0x1 | 0x3 => levels::level2(w, rec),
            _ => {}
        },
        0xB => match bh {
            0x0 | 0x8 => assign(rec, Opcode::Mov, Word, Absolute, 16, 4),
            0x2 | 0xA => assign(rec, Opcode::Mov, Word, Absolute, 32, 6),
            _ => {}
        },
        0xC => {
            let mode = if bh & 0x8 != 0 {
                RegisterIndirectPreDecrement
            } else {
                RegisterIndirectPostIncrement
            };
            assign(rec, Opcode::Mov, Byte, mode, 0, 2);
        }
        0xD => {
            let mode = if bh & 0x8 != 0 {
                RegisterIndirectPreDecrement
            } else {
                RegisterIndirectPostIncrement
            };
            assign(rec, Opcode::Mov, Word, mode, 0, 2);
        }
        0xE => assign(rec, Opcode::Mov, Byte, RegisterIndirectDisplacement, 16, 4),
        0xF => assign(rec, Opcode::Mov, Word, RegisterIndirectDisplacement, 16, 4),
        _ => {}
    }
}

fn decode_7(al: u8, w: &[u8; MAX_INSTRUCTION_LEN], rec: &mut InstructionRecord) {
    use AddressingMode::*;
    use OperandSize::*;

    let (bh, _bl) = nibbles(w[1]);
    match al {
        0x0 if bh <= 0x7 => assign(rec, Opcode::Bset, Unset, RegisterDirect, 0, 2),
        0x1 if bh <= 0x7 => assign(rec, Opcode::Bnot, Unset, RegisterDirect, 0, 2),
        0x2 if bh <= 0x7 => assign(rec, Opcode::Bclr, Unset, RegisterDirect, 0, 2),
        0x3 if bh <= 0x7 => assign(rec, Opcode::Btst, Unset, RegisterDirect, 0, 2),
        0x4 => {
            let opcode = if bh & 0x8 != 0 { Opcode::Bior } else { Opcode::Bor };
            assign(rec, opcode, Unset, RegisterDirect, 0, 2);
        }
        0x5 => {
            let opcode = if bh & 0x8 != 0 { Opcode::Bixor } else { Opcode::Bxor };
            assign(rec, opcode, Unset, RegisterDirect, 0, 2);
        }
        0x6 => {
            let opcode = if bh & 0x8 != 0 { Opcode::Biand } else { Opcode::Band };
            assign(rec, opcode, Unset, RegisterDirect, 0, 2);
        }
        0x7 => {
            let opcode = if bh & 0x8 != 0 { Opcode::Bild } else { Opcode::Bld };
            assign(rec, opcode, Unset, RegisterDirect, 0, 2);
        }
        0x8 => levels::level2(w, rec),
        0x9 if bh <= 0x6 => assign(
            rec,
            WIDE_IMM_GROUP[bh as usize],
            Word,
            Immediate,
            0,
            4,
        ),
        0xA if bh <= 0x6 => assign(
            rec,
            WIDE_IMM_GROUP[bh as usize],
            Longword,
            Immediate,
            0,
            6,
        ),
        0xB..=0xF => levels::level2(w, rec),
        _ => {}
    }
}
