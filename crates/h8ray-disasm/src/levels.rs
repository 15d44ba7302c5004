//! Extended decode levels.
//!
//! Prefix families that cannot be resolved from the first two bytes land
//! here. Level 2 matches over `bytes[0..4]`, Level 3 over `bytes[2..6]`,
//! and Level 4 over `bytes[2..10]`. Each level either commits a full
//! instruction, delegates deeper, or resets the record to the raw-word
//! sentinel; the reset discards anything a shallower level tentatively
//! set, so a failed deep match never leaks fields into the output.

use h8ray_core::{AddressingMode, InstructionRecord, Opcode, OperandSize};

use crate::decoder::{assign, nibbles, MAX_INSTRUCTION_LEN};

type Window = [u8; MAX_INSTRUCTION_LEN];

/// Level-2 dispatch over the 4-byte window `bytes[0..4]`.
pub(crate) fn level2(w: &Window, rec: &mut InstructionRecord) {
    match w[0] {
        0x01 => level2_01(w, rec),
        0x6A => level2_bit_abs_prefix(w, rec),
        0x78 => level2_disp32(w, rec),
        0x7B => level2_block_move(w, rec),
        0x7C | 0x7D => level2_bit_indirect(w, rec),
        0x7E | 0x7F => level2_bit_abs8(w, rec),
        _ => {}
    }
}

/// The 0x01 prefix family: longword moves, control-register transfers,
/// multi-register push/pop, and the signed multiply/divide, MAC, and TAS
/// forms.
fn level2_01(w: &Window, rec: &mut InstructionRecord) {
    use AddressingMode::*;
    use OperandSize::*;

    match w[1] {
        0x00 => {
            rec.opcode = Opcode::Mov;
            rec.size = Longword;
            level3(w, rec);
        }
        0x10 | 0x20 | 0x30 if w[2] == 0x6D => match w[3] >> 4 {
            0x7 => assign(rec, Opcode::Ldm, Longword, RegisterIndirectPostIncrement, 0, 4),
            0xF => assign(rec, Opcode::Stm, Longword, RegisterIndirectPreDecrement, 0, 4),
            _ => {}
        },
        0x40 | 0x41 => {
            // 01 41 with a small third byte carries the EXR immediate
            // group; everything else in this row is a control-register
            // memory transfer resolved at Level 3.
            if w[1] == 0x41 && w[2] <= 0x07 {
                match w[2] {
                    0x04 => assign(rec, Opcode::Orc, Unset, Immediate, 0, 4),
                    0x05 => assign(rec, Opcode::Xorc, Unset, Immediate, 0, 4),
                    0x06 => assign(rec, Opcode::Andc, Unset, Immediate, 0, 4),
                    0x07 => assign(rec, Opcode::Ldc, Byte, Immediate, 0, 4),
                    _ => {}
                }
                return;
            }
            rec.opcode = Opcode::Ldc;
            rec.size = Word;
            level3(w, rec);
        }
        0x60 if w[2] == 0x6D => {
            assign(rec, Opcode::Mac, Unset, RegisterIndirectPostIncrement, 0, 4)
        }
        0x80 => assign(rec, Opcode::Sleep, Unset, None, 0, 2),
        0xA0 => assign(rec, Opcode::Clrmac, Unset, None, 0, 2),
        0xC0 => match w[2] {
            0x50 => assign(rec, Opcode::Mulxs, Byte, RegisterDirect, 0, 4),
            0x52 => assign(rec, Opcode::Mulxs, Word, RegisterDirect, 0, 4),
            _ => {}
        },
        0xD0 => match w[2] {
            0x51 => assign(rec, Opcode::Divxs, Byte, RegisterDirect, 0, 4),
            0x53 => assign(rec, Opcode::Divxs, Word, RegisterDirect, 0, 4),
            _ => {}
        },
        0xE0 if w[2] == 0x7B && w[3] & 0x0F == 0x0C => {
            assign(rec, Opcode::Tas, Unset, RegisterIndirect, 0, 4)
        }
        0xF0 => match w[2] {
            0x64 => assign(rec, Opcode::Or, Longword, RegisterDirect, 0, 4),
            0x65 => assign(rec, Opcode::Xor, Longword, RegisterDirect, 0, 4),
            0x66 => assign(rec, Opcode::And, Longword, RegisterDirect, 0, 4),
            _ => {}
        },
        _ => {}
    }
}

/// Level-3 dispatch over `bytes[2..6]` for the 0x01-prefixed move and
/// control-register families. Level 2 has already set opcode and size;
/// this level fixes mode, operand width, and length, and flips a
/// control-register load to a store when the direction bit is set.
fn level3(w: &Window, rec: &mut InstructionRecord) {
    use AddressingMode::*;

    let (ch, cl) = nibbles(w[2]);
    let (dh, _dl) = nibbles(w[3]);
    let store = dh & 0x8 != 0;
    let ctrl = rec.opcode == Opcode::Ldc;
    match (ch, cl) {
        (0x6, 0x9) => {
            if ctrl && store {
                rec.opcode = Opcode::Stc;
            }
            rec.addressing_mode = RegisterIndirect;
            rec.total_length = 4;
        }
        (0x6, 0xB) => {
            match dh {
                0x0 | 0x8 => {
                    rec.operand_bits = 16;
                    rec.total_length = 6;
                }
                0x2 | 0xA => {
                    rec.operand_bits = 32;
                    rec.total_length = 8;
                }
                _ => {
                    rec.reset_to_raw_word();
                    return;
                }
            }
            if ctrl && store {
                rec.opcode = Opcode::Stc;
            }
            rec.addressing_mode = Absolute;
        }
        (0x6, 0xD) => {
            if ctrl && store {
                rec.opcode = Opcode::Stc;
            }
            rec.addressing_mode = if store {
                RegisterIndirectPreDecrement
            } else {
                RegisterIndirectPostIncrement
            };
            rec.total_length = 4;
        }
        (0x6, 0xF) => {
            if ctrl && store {
                rec.opcode = Opcode::Stc;
            }
            rec.addressing_mode = RegisterIndirectDisplacement;
            rec.operand_bits = 16;
            rec.total_length = 6;
        }
        (0x7, 0x8) => level4_disp32(w, rec),
        _ => rec.reset_to_raw_word(),
    }
}

/// Level-4 match for the 10-byte 32-bit-displacement forms reached
/// through `01 .. 78`. Window is `bytes[2..10]`.
fn level4_disp32(w: &Window, rec: &mut InstructionRecord) {
    let (eh, el) = nibbles(w[3]);
    let (gh, _gl) = nibbles(w[5]);
    if eh <= 0x7 && el == 0 && w[4] == 0x6B && (gh == 0x2 || gh == 0xA) {
        if rec.opcode == Opcode::Ldc && gh == 0xA {
            rec.opcode = Opcode::Stc;
        }
        rec.addressing_mode = AddressingMode::RegisterIndirectDisplacement;
        rec.operand_bits = 32;
        rec.total_length = 10;
    } else {
        rec.reset_to_raw_word();
    }
}

/// The 0x6A prefix rows that carry bit manipulation on an absolute
/// address. Tentatively records the address width, then lets Level 4 pick
/// the operation from the trailing sub-opcode byte.
fn level2_bit_abs_prefix(w: &Window, rec: &mut InstructionRecord) {
    let (bh, bl) = nibbles(w[1]);
    if bl != 0x0 && bl != 0x8 {
        return;
    }
    match bh {
        0x1 => {
            rec.addressing_mode = AddressingMode::Absolute;
            rec.operand_bits = 16;
            level4_bit_abs(w, rec);
        }
        0x3 => {
            rec.addressing_mode = AddressingMode::Absolute;
            rec.operand_bits = 32;
            level4_bit_abs(w, rec);
        }
        _ => {}
    }
}

/// Level-4 match for bit manipulation on `@aa:16` / `@aa:32`. Window is
/// `bytes[2..10]`; the sub-opcode byte sits after the embedded address
/// (`bytes[4]` for the 16-bit width, `bytes[6]` for 32), and both widths
/// consume 8 bytes.
fn level4_bit_abs(w: &Window, rec: &mut InstructionRecord) {
    let sub_at = if rec.operand_bits == 32 { 6 } else { 4 };
    match bit_sub_opcode(BitGroup::Either, w[sub_at], w[sub_at + 1]) {
        Some(opcode) => {
            rec.opcode = opcode;
            rec.total_length = 8;
        }
        None => rec.reset_to_raw_word(),
    }
}

/// 32-bit displacement byte/word moves behind the 0x78 prefix.
fn level2_disp32(w: &Window, rec: &mut InstructionRecord) {
    use AddressingMode::*;
    use OperandSize::*;

    let (bh, bl) = nibbles(w[1]);
    let (ch, cl) = nibbles(w[2]);
    let (dh, _dl) = nibbles(w[3]);
    if bh > 0x7 || bl != 0 || ch != 0x6 {
        return;
    }
    let size = match cl {
        0xA => Byte,
        0xB => Word,
        _ => return,
    };
    if dh == 0x2 || dh == 0xA {
        assign(rec, Opcode::Mov, size, RegisterIndirectDisplacement, 32, 8);
    }
}

/// The 0x7B block-transfer row.
fn level2_block_move(w: &Window, rec: &mut InstructionRecord) {
    if w[2] != 0x59 || w[3] != 0x8F {
        return;
    }
    match w[1] {
        0x5C => assign(
            rec,
            Opcode::Eepmov,
            OperandSize::Byte,
            AddressingMode::None,
            0,
            4,
        ),
        0xD4 => assign(
            rec,
            Opcode::Eepmov,
            OperandSize::Word,
            AddressingMode::None,
            0,
            4,
        ),
        _ => {}
    }
}

/// Bit manipulation through `@ERd` (0x7C test group, 0x7D modify group).
fn level2_bit_indirect(w: &Window, rec: &mut InstructionRecord) {
    let group = if w[0] == 0x7D {
        BitGroup::Modify
    } else {
        BitGroup::Test
    };
    let (bh, bl) = nibbles(w[1]);
    if bh > 0x7 || bl != 0 {
        return;
    }
    if let Some(opcode) = bit_sub_opcode(group, w[2], w[3]) {
        assign(rec, opcode, OperandSize::Unset, AddressingMode::RegisterIndirect, 0, 4);
    }
}

/// Bit manipulation through `@aa:8` (0x7E test group, 0x7F modify group).
fn level2_bit_abs8(w: &Window, rec: &mut InstructionRecord) {
    let group = if w[0] == 0x7F {
        BitGroup::Modify
    } else {
        BitGroup::Test
    };
    if let Some(opcode) = bit_sub_opcode(group, w[2], w[3]) {
        assign(rec, opcode, OperandSize::Unset, AddressingMode::Absolute, 8, 4);
    }
}

/// Which sub-opcode set a bit-manipulation prefix admits. The absolute
/// 16/32-bit rows accept both sets.
#[derive(Clone, Copy, PartialEq, Eq)]
enum BitGroup {
    Test,
    Modify,
    Either,
}

/// Maps a bit-manipulation sub-opcode byte plus its operand byte to the
/// final opcode. The operand byte's low nibble must be clear; its high
/// bit selects the inverted variant where one exists, and is invalid for
/// the immediate-only rows 0x70..=0x73.
fn bit_sub_opcode(group: BitGroup, sub: u8, operand: u8) -> Option<Opcode> {
    let test_ok = group != BitGroup::Modify;
    let modify_ok = group != BitGroup::Test;
    let (nh, nl) = nibbles(operand);
    if nl != 0 {
        return None;
    }
    let inverse = nh & 0x8 != 0;
    if matches!(sub, 0x70..=0x73) && inverse {
        return None;
    }
    let opcode = match sub {
        0x63 | 0x73 if test_ok => Opcode::Btst,
        0x74 if test_ok => {
            if inverse {
                Opcode::Bior
            } else {
                Opcode::Bor
            }
        }
        0x75 if test_ok => {
            if inverse {
                Opcode::Bixor
            } else {
                Opcode::Bxor
            }
        }
        0x76 if test_ok => {
            if inverse {
                Opcode::Biand
            } else {
                Opcode::Band
            }
        }
        0x77 if test_ok => {
            if inverse {
                Opcode::Bild
            } else {
                Opcode::Bld
            }
        }
        0x60 | 0x70 if modify_ok => Opcode::Bset,
        0x61 | 0x71 if modify_ok => Opcode::Bnot,
        0x62 | 0x72 if modify_ok => Opcode::Bclr,
        0x67 if modify_ok => {
            if inverse {
                Opcode::Bist
            } else {
                Opcode::Bst
            }
        }
        _ => return None,
    };
    Some(opcode)
}
