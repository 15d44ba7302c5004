//! Operand resolution.
//!
//! Maps each decoded record onto an [`OperandEncoding`] shape and pulls
//! the register and small-immediate nibbles out of the instruction bytes.
//! Field conventions: the register naming the destination-side operand
//! goes in `dst` (for memory-addressed bit operations that is the base
//! register), the source-side register in `src`, and shift counts, bit
//! numbers, trap vectors, and add/subtract constants in `imm`. Wide
//! immediates, addresses, and displacements stay in `bytes` and are read
//! back by the renderer.
//!
//! Combinations without a rule keep [`OperandEncoding::Unresolved`] and
//! render as the diagnostic marker.

use h8ray_core::{AddressingMode, InstructionRecord, Opcode, OperandEncoding, OperandSize};

/// Where operand fields live in the instruction bytes once the encoding
/// shape is known.
#[derive(Clone, Copy)]
enum Extract {
    Nothing,
    /// src/dst register nibbles from byte 1.
    PairB1,
    /// src/dst register nibbles from byte 3.
    PairB3,
    /// Memory form: base register in byte 1 high, data register low.
    MemB1,
    /// Memory form: base register in byte 3 high, data register low.
    MemB3,
    /// 0x78-prefixed: base register in byte 1, data register in byte 3.
    MemB1B3,
    /// 01-00-78: base register in byte 3, data register in byte 5.
    MemB3B5,
    DstB0,
    DstB1,
    DstB3,
    /// Sole register operand in byte 1 high (jump forms).
    RegIndB1,
    /// Sole register operand in byte 3 high (tas).
    RegIndB3,
    /// Control-register memory forms: base register in byte 3 high.
    BaseB3,
    /// Trap vector in byte 1 high.
    TrapVector,
    /// Shift target in byte 1 low; bit 6 selects the two-bit form.
    ShiftB1,
    /// Inc/dec and adds/subs constant from byte 1 high.
    CountB1,
    /// Immediate bit number in byte 1 high, target register low.
    BitImmB1,
    /// Bit-number register in byte 3, base register in byte 1.
    BitIndReg,
    /// Immediate bit number in byte 3, base register in byte 1.
    BitIndImm,
    /// Bit-number register nibble at a byte offset (absolute forms).
    BitNumReg { at: usize },
    /// Immediate bit number nibble at a byte offset (absolute forms).
    BitNumImm { at: usize },
    /// Register-list boundary in byte 3, register count in byte 1 high.
    Range,
    /// Both multiply-accumulate pointer registers from byte 3.
    MacB3,
}

/// Assigns `record.encoding` and the operand nibble fields.
///
/// Purely a function of the record and its bytes; the splitter calls it
/// once per record after the byte copy.
pub fn resolve(record: &mut InstructionRecord) {
    if record.is_sentinel() || record.bytes.len() < 2 {
        return;
    }
    if let Some((encoding, rule)) = classify(record) {
        record.encoding = encoding;
        apply(rule, record);
    }
}

fn classify(rec: &InstructionRecord) -> Option<(OperandEncoding, Extract)> {
    use AddressingMode as Mode;
    use OperandEncoding::*;
    use OperandSize::*;

    // The 0x01-prefixed control-register forms reuse opcodes that also
    // have 2-byte encodings; the prefix byte tells them apart.
    let prefixed = rec.bytes[0] == 0x01;

    let pair = match rec.opcode {
        Opcode::Nop
        | Opcode::Rts
        | Opcode::Rte
        | Opcode::Sleep
        | Opcode::Clrmac
        | Opcode::Eepmov => (NoOperands, Extract::Nothing),

        Opcode::Mov => classify_mov(rec)?,

        Opcode::Add | Opcode::Sub | Opcode::Cmp => match rec.addressing_mode {
            Mode::RegisterDirect => match rec.size {
                Byte => (ByteRegPair, Extract::PairB1),
                Word => (WordRegPair, Extract::PairB1),
                Longword => (LongRegPairShifted, Extract::PairB1),
                Unset => return None,
            },
            Mode::Immediate => match rec.size {
                Byte => (Imm8ByteReg, Extract::DstB0),
                Word => (Imm16WordReg, Extract::DstB1),
                Longword => (Imm32LongReg, Extract::DstB1),
                Unset => return None,
            },
            _ => return None,
        },

        Opcode::Addx | Opcode::Subx => match rec.addressing_mode {
            Mode::RegisterDirect => (ByteRegPair, Extract::PairB1),
            Mode::Immediate => (Imm8ByteReg, Extract::DstB0),
            _ => return None,
        },

        Opcode::Or | Opcode::Xor | Opcode::And => match rec.addressing_mode {
            Mode::RegisterDirect => match rec.size {
                Byte => (ByteRegPair, Extract::PairB1),
                Word => (WordRegPair, Extract::PairB1),
                // 01 F0 6x puts the register pair in byte 3.
                Longword => (LongRegPair, Extract::PairB3),
                Unset => return None,
            },
            Mode::Immediate => match rec.size {
                Byte => (Imm8ByteReg, Extract::DstB0),
                Word => (Imm16WordReg, Extract::DstB1),
                Longword => (Imm32LongReg, Extract::DstB1),
                Unset => return None,
            },
            _ => return None,
        },

        Opcode::Inc | Opcode::Dec => match rec.size {
            Byte => (ByteReg, Extract::DstB1),
            Word => (CountWordReg, Extract::CountB1),
            Longword => (CountLongReg, Extract::CountB1),
            Unset => return None,
        },
        Opcode::Adds | Opcode::Subs => (CountLongReg, Extract::CountB1),
        Opcode::Daa | Opcode::Das => (ByteReg, Extract::DstB1),

        Opcode::Not | Opcode::Neg | Opcode::Extu | Opcode::Exts => match rec.size {
            Byte => (ByteReg, Extract::DstB1),
            Word => (WordReg, Extract::DstB1),
            Longword => (LongReg, Extract::DstB1),
            Unset => return None,
        },

        Opcode::Shal
        | Opcode::Shar
        | Opcode::Shll
        | Opcode::Shlr
        | Opcode::Rotl
        | Opcode::Rotr
        | Opcode::Rotxl
        | Opcode::Rotxr => match rec.size {
            Byte => (ShiftByteReg, Extract::ShiftB1),
            Word => (ShiftWordReg, Extract::ShiftB1),
            Longword => (ShiftLongReg, Extract::ShiftB1),
            Unset => return None,
        },

        Opcode::Mulxu | Opcode::Divxu => match rec.size {
            Byte => (ByteWordRegPair, Extract::PairB1),
            Word => (WordLongRegPair, Extract::PairB1),
            _ => return None,
        },
        Opcode::Mulxs | Opcode::Divxs => match rec.size {
            Byte => (ByteWordRegPair, Extract::PairB3),
            Word => (WordLongRegPair, Extract::PairB3),
            _ => return None,
        },

        Opcode::Orc | Opcode::Xorc | Opcode::Andc => {
            if prefixed {
                (Imm8Exr, Extract::Nothing)
            } else {
                (Imm8Ccr, Extract::Nothing)
            }
        }
        Opcode::Trapa => (ImmNibble, Extract::TrapVector),

        Opcode::Ldc => match rec.addressing_mode {
            Mode::RegisterDirect => (RegCcr, Extract::DstB1),
            Mode::Immediate => {
                if prefixed {
                    (Imm8Exr, Extract::Nothing)
                } else {
                    (Imm8Ccr, Extract::Nothing)
                }
            }
            Mode::RegisterIndirect => (LdcInd, Extract::BaseB3),
            Mode::RegisterIndirectPostIncrement => (LdcPostInc, Extract::BaseB3),
            Mode::RegisterIndirectDisplacement => {
                if rec.operand_bits == 32 {
                    (LdcDisp32, Extract::BaseB3)
                } else {
                    (LdcDisp16, Extract::BaseB3)
                }
            }
            Mode::Absolute => {
                if rec.operand_bits == 32 {
                    (LdcAbs32, Extract::Nothing)
                } else {
                    (LdcAbs16, Extract::Nothing)
                }
            }
            _ => return None,
        },
        Opcode::Stc => match rec.addressing_mode {
            Mode::RegisterDirect => (CcrReg, Extract::DstB1),
            Mode::RegisterIndirect => (StcInd, Extract::BaseB3),
            Mode::RegisterIndirectPreDecrement => (StcPreDec, Extract::BaseB3),
            Mode::RegisterIndirectDisplacement => {
                if rec.operand_bits == 32 {
                    (StcDisp32, Extract::BaseB3)
                } else {
                    (StcDisp16, Extract::BaseB3)
                }
            }
            Mode::Absolute => {
                if rec.operand_bits == 32 {
                    (StcAbs32, Extract::Nothing)
                } else {
                    (StcAbs16, Extract::Nothing)
                }
            }
            _ => return None,
        },
        Opcode::Ldmac => (LdmacReg, Extract::DstB1),
        Opcode::Stmac => (StmacReg, Extract::DstB1),
        Opcode::Ldm => (LdmRegRange, Extract::Range),
        Opcode::Stm => (StmRegRange, Extract::Range),
        Opcode::Mac => (MacPostInc, Extract::MacB3),
        Opcode::Tas => (IndReg, Extract::RegIndB3),

        Opcode::Band
        | Opcode::Bclr
        | Opcode::Biand
        | Opcode::Bild
        | Opcode::Bior
        | Opcode::Bist
        | Opcode::Bixor
        | Opcode::Bld
        | Opcode::Bnot
        | Opcode::Bor
        | Opcode::Bset
        | Opcode::Bst
        | Opcode::Btst
        | Opcode::Bxor => classify_bit(rec)?,

        Opcode::Bra
        | Opcode::Brn
        | Opcode::Bhi
        | Opcode::Bls
        | Opcode::Bcc
        | Opcode::Bcs
        | Opcode::Bne
        | Opcode::Beq
        | Opcode::Bvc
        | Opcode::Bvs
        | Opcode::Bpl
        | Opcode::Bmi
        | Opcode::Bge
        | Opcode::Blt
        | Opcode::Bgt
        | Opcode::Ble
        | Opcode::Bsr => {
            if rec.operand_bits == 16 {
                (PcRel16, Extract::Nothing)
            } else {
                (PcRel8, Extract::Nothing)
            }
        }

        Opcode::Jmp | Opcode::Jsr => match rec.addressing_mode {
            Mode::RegisterIndirect => (IndReg, Extract::RegIndB1),
            Mode::Absolute => (Abs24Jump, Extract::Nothing),
            Mode::MemoryIndirect => (MemIndJump, Extract::Nothing),
            _ => return None,
        },

        Opcode::Word => return None,
    };
    Some(pair)
}

fn classify_mov(rec: &InstructionRecord) -> Option<(OperandEncoding, Extract)> {
    use AddressingMode as Mode;
    use OperandEncoding::*;
    use OperandSize::*;

    let b = &rec.bytes;
    let pair = match rec.addressing_mode {
        Mode::RegisterDirect => match rec.size {
            Byte => (ByteRegPair, Extract::PairB1),
            Word => (WordRegPair, Extract::PairB1),
            Longword => (LongRegPairShifted, Extract::PairB1),
            Unset => return None,
        },
        Mode::Immediate => match rec.size {
            Word => (Imm16WordReg, Extract::DstB1),
            Longword => (Imm32LongReg, Extract::DstB1),
            _ => return None,
        },
        Mode::Absolute => match (rec.size, rec.operand_bits) {
            (Byte, 8) => {
                // First-byte high nibble 0x2 loads, 0x3 stores.
                if b[0] >> 4 == 0x3 {
                    (Abs8ByteRegStore, Extract::DstB0)
                } else {
                    (Abs8ByteRegLoad, Extract::DstB0)
                }
            }
            (Byte, 16) => {
                if b[1] & 0x80 != 0 {
                    (Abs16ByteRegStore, Extract::DstB1)
                } else {
                    (Abs16ByteRegLoad, Extract::DstB1)
                }
            }
            (Byte, 32) => {
                if b[1] & 0x80 != 0 {
                    (Abs32ByteRegStore, Extract::DstB1)
                } else {
                    (Abs32ByteRegLoad, Extract::DstB1)
                }
            }
            (Word, 16) => {
                if b[1] & 0x80 != 0 {
                    (Abs16WordRegStore, Extract::DstB1)
                } else {
                    (Abs16WordRegLoad, Extract::DstB1)
                }
            }
            (Word, 32) => {
                if b[1] & 0x80 != 0 {
                    (Abs32WordRegStore, Extract::DstB1)
                } else {
                    (Abs32WordRegLoad, Extract::DstB1)
                }
            }
            (Longword, 16) => {
                if b[3] & 0x80 != 0 {
                    (Abs16LongRegStore, Extract::DstB3)
                } else {
                    (Abs16LongRegLoad, Extract::DstB3)
                }
            }
            (Longword, 32) => {
                if b[3] & 0x80 != 0 {
                    (Abs32LongRegStore, Extract::DstB3)
                } else {
                    (Abs32LongRegLoad, Extract::DstB3)
                }
            }
            _ => return None,
        },
        Mode::RegisterIndirect => match rec.size {
            Byte => {
                if b[1] & 0x80 != 0 {
                    (IndByteRegStore, Extract::MemB1)
                } else {
                    (IndByteRegLoad, Extract::MemB1)
                }
            }
            Word => {
                if b[1] & 0x80 != 0 {
                    (IndWordRegStore, Extract::MemB1)
                } else {
                    (IndWordRegLoad, Extract::MemB1)
                }
            }
            Longword => {
                if b[3] & 0x80 != 0 {
                    (IndLongRegStore, Extract::MemB3)
                } else {
                    (IndLongRegLoad, Extract::MemB3)
                }
            }
            Unset => return None,
        },
        // Post-increment is always the load direction, pre-decrement the
        // store direction.
        Mode::RegisterIndirectPostIncrement => match rec.size {
            Byte => (PostIncByteReg, Extract::MemB1),
            Word => (PostIncWordReg, Extract::MemB1),
            Longword => (PostIncLongReg, Extract::MemB3),
            Unset => return None,
        },
        Mode::RegisterIndirectPreDecrement => match rec.size {
            Byte => (PreDecByteReg, Extract::MemB1),
            Word => (PreDecWordReg, Extract::MemB1),
            Longword => (PreDecLongReg, Extract::MemB3),
            Unset => return None,
        },
        Mode::RegisterIndirectDisplacement => match (rec.size, rec.operand_bits) {
            (Byte, 16) => {
                if b[1] & 0x80 != 0 {
                    (Disp16ByteStore, Extract::MemB1)
                } else {
                    (Disp16ByteLoad, Extract::MemB1)
                }
            }
            (Word, 16) => {
                if b[1] & 0x80 != 0 {
                    (Disp16WordStore, Extract::MemB1)
                } else {
                    (Disp16WordLoad, Extract::MemB1)
                }
            }
            (Longword, 16) => {
                if b[3] & 0x80 != 0 {
                    (Disp16LongStore, Extract::MemB3)
                } else {
                    (Disp16LongLoad, Extract::MemB3)
                }
            }
            (Byte, 32) => {
                if b[3] & 0x80 != 0 {
                    (Disp32ByteStore, Extract::MemB1B3)
                } else {
                    (Disp32ByteLoad, Extract::MemB1B3)
                }
            }
            (Word, 32) => {
                if b[3] & 0x80 != 0 {
                    (Disp32WordStore, Extract::MemB1B3)
                } else {
                    (Disp32WordLoad, Extract::MemB1B3)
                }
            }
            (Longword, 32) => {
                if b[5] & 0x80 != 0 {
                    (Disp32LongStore, Extract::MemB3B5)
                } else {
                    (Disp32LongLoad, Extract::MemB3B5)
                }
            }
            _ => return None,
        },
        _ => return None,
    };
    Some(pair)
}

fn classify_bit(rec: &InstructionRecord) -> Option<(OperandEncoding, Extract)> {
    use AddressingMode as Mode;
    use OperandEncoding::*;

    let b = &rec.bytes;
    let pair = match rec.addressing_mode {
        Mode::RegisterDirect => {
            // Only the 0x60..=0x63 rows carry the bit number in a
            // register; every other direct form is an immediate.
            if matches!(b[0], 0x60..=0x63) {
                (BitRegByteReg, Extract::PairB1)
            } else {
                (BitImmByteReg, Extract::BitImmB1)
            }
        }
        Mode::RegisterIndirect => {
            if matches!(b[2], 0x60..=0x63) {
                (BitRegInd, Extract::BitIndReg)
            } else {
                (BitImmInd, Extract::BitIndImm)
            }
        }
        Mode::Absolute => match rec.operand_bits {
            8 => {
                if matches!(b[2], 0x60..=0x63) {
                    (BitRegAbs8, Extract::BitNumReg { at: 3 })
                } else {
                    (BitImmAbs8, Extract::BitNumImm { at: 3 })
                }
            }
            16 => {
                if matches!(b[4], 0x60..=0x63) {
                    (BitRegAbs16, Extract::BitNumReg { at: 5 })
                } else {
                    (BitImmAbs16, Extract::BitNumImm { at: 5 })
                }
            }
            32 => {
                if matches!(b[6], 0x60..=0x63) {
                    (BitRegAbs32, Extract::BitNumReg { at: 7 })
                } else {
                    (BitImmAbs32, Extract::BitNumImm { at: 7 })
                }
            }
            _ => return None,
        },
        _ => return None,
    };
    Some(pair)
}

fn apply(rule: Extract, rec: &mut InstructionRecord) {
    match rule {
        Extract::Nothing => {}
        Extract::PairB1 => {
            let b1 = rec.bytes[1];
            rec.src = Some(b1 >> 4);
            rec.dst = Some(b1 & 0xF);
        }
        Extract::PairB3 => {
            let b3 = rec.bytes[3];
            rec.src = Some(b3 >> 4);
            rec.dst = Some(b3 & 0xF);
        }
        Extract::MemB1 => {
            let b1 = rec.bytes[1];
            rec.src = Some((b1 >> 4) & 0x7);
            rec.dst = Some(b1 & 0xF);
        }
        Extract::MemB3 => {
            let b3 = rec.bytes[3];
            rec.src = Some((b3 >> 4) & 0x7);
            rec.dst = Some(b3 & 0xF);
        }
        Extract::MemB1B3 => {
            rec.src = Some((rec.bytes[1] >> 4) & 0x7);
            rec.dst = Some(rec.bytes[3] & 0xF);
        }
        Extract::MemB3B5 => {
            rec.src = Some((rec.bytes[3] >> 4) & 0x7);
            rec.dst = Some(rec.bytes[5] & 0xF);
        }
        Extract::DstB0 => rec.dst = Some(rec.bytes[0] & 0xF),
        Extract::DstB1 => rec.dst = Some(rec.bytes[1] & 0xF),
        Extract::DstB3 => rec.dst = Some(rec.bytes[3] & 0xF),
        Extract::RegIndB1 => rec.dst = Some((rec.bytes[1] >> 4) & 0x7),
        Extract::RegIndB3 => rec.dst = Some((rec.bytes[3] >> 4) & 0x7),
        Extract::BaseB3 => rec.src = Some((rec.bytes[3] >> 4) & 0x7),
        Extract::TrapVector => rec.imm = Some(rec.bytes[1] >> 4),
        Extract::ShiftB1 => {
            let b1 = rec.bytes[1];
            rec.dst = Some(b1 & 0xF);
            rec.imm = Some(if b1 & 0x40 != 0 { 2 } else { 1 });
        }
        Extract::CountB1 => {
            let b1 = rec.bytes[1];
            rec.dst = Some(b1 & 0xF);
            rec.imm = Some(match b1 >> 4 {
                0x9 => 4,
                0x8 | 0xD | 0xF => 2,
                _ => 1,
            });
        }
        Extract::BitImmB1 => {
            let b1 = rec.bytes[1];
            rec.dst = Some(b1 & 0xF);
            rec.imm = Some((b1 >> 4) & 0x7);
        }
        Extract::BitIndReg => {
            rec.dst = Some((rec.bytes[1] >> 4) & 0x7);
            rec.src = Some(rec.bytes[3] >> 4);
        }
        Extract::BitIndImm => {
            rec.dst = Some((rec.bytes[1] >> 4) & 0x7);
            rec.imm = Some((rec.bytes[3] >> 4) & 0x7);
        }
        Extract::BitNumReg { at } => rec.src = Some(rec.bytes[at] >> 4),
        Extract::BitNumImm { at } => rec.imm = Some((rec.bytes[at] >> 4) & 0x7),
        Extract::Range => {
            rec.dst = Some(rec.bytes[3] & 0xF);
            rec.imm = Some(rec.bytes[1] >> 4);
        }
        Extract::MacB3 => {
            let b3 = rec.bytes[3];
            rec.src = Some((b3 >> 4) & 0x7);
            rec.dst = Some(b3 & 0x7);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::H8Disassembler;

    fn resolved(bytes: &[u8]) -> InstructionRecord {
        let recs = H8Disassembler::new().split(bytes, 0).unwrap();
        assert_eq!(recs.len(), 1, "{bytes:02x?} must decode as one record");
        recs.into_iter().next().unwrap()
    }

    #[test]
    fn register_pairs_pull_byte_one_nibbles() {
        let rec = resolved(&[0x08, 0x3E]);
        assert_eq!(rec.encoding, OperandEncoding::ByteRegPair);
        assert_eq!(rec.src, Some(0x3));
        assert_eq!(rec.dst, Some(0xE));

        let rec = resolved(&[0x0A, 0x93]);
        assert_eq!(rec.encoding, OperandEncoding::LongRegPairShifted);
        assert_eq!(rec.src, Some(0x9));
        assert_eq!(rec.dst, Some(0x3));
    }

    #[test]
    fn immediates_keep_destination_only() {
        let rec = resolved(&[0x8D, 0x81]);
        assert_eq!(rec.encoding, OperandEncoding::Imm8ByteReg);
        assert_eq!(rec.dst, Some(0xD));
        assert_eq!(rec.src, None);

        let rec = resolved(&[0x7A, 0x15, 0x00, 0x01, 0x00, 0x00]);
        assert_eq!(rec.encoding, OperandEncoding::Imm32LongReg);
        assert_eq!(rec.dst, Some(0x5));
    }

    #[test]
    fn shift_counts() {
        let rec = resolved(&[0x10, 0x03]);
        assert_eq!(rec.encoding, OperandEncoding::ShiftByteReg);
        assert_eq!(rec.dst, Some(0x3));
        assert_eq!(rec.imm, Some(1));

        let rec = resolved(&[0x10, 0x43]);
        assert_eq!(rec.imm, Some(2));
    }

    #[test]
    fn add_subtract_constants() {
        let rec = resolved(&[0x0B, 0x07]);
        assert_eq!(rec.encoding, OperandEncoding::CountLongReg);
        assert_eq!(rec.dst, Some(0x7));
        assert_eq!(rec.imm, Some(1));

        assert_eq!(resolved(&[0x0B, 0x87]).imm, Some(2));
        assert_eq!(resolved(&[0x0B, 0x97]).imm, Some(4));
        assert_eq!(resolved(&[0x1B, 0x97]).imm, Some(4));
        assert_eq!(resolved(&[0x0B, 0xD3]).imm, Some(2));
    }

    #[test]
    fn memory_moves_split_base_and_data_registers() {
        let rec = resolved(&[0x69, 0xA3]);
        assert_eq!(rec.encoding, OperandEncoding::IndWordRegStore);
        assert_eq!(rec.src, Some(0x2));
        assert_eq!(rec.dst, Some(0x3));

        let rec = resolved(&[0x01, 0x00, 0x69, 0x23]);
        assert_eq!(rec.encoding, OperandEncoding::IndLongRegLoad);
        assert_eq!(rec.src, Some(0x2));
        assert_eq!(rec.dst, Some(0x3));

        let rec = resolved(&[0x78, 0x30, 0x6A, 0x2D, 0x00, 0x01, 0x00, 0x00]);
        assert_eq!(rec.encoding, OperandEncoding::Disp32ByteLoad);
        assert_eq!(rec.src, Some(0x3));
        assert_eq!(rec.dst, Some(0xD));

        let rec = resolved(&[0x01, 0x00, 0x78, 0x30, 0x6B, 0xA5, 0x00, 0x01, 0x00, 0x00]);
        assert_eq!(rec.encoding, OperandEncoding::Disp32LongStore);
        assert_eq!(rec.src, Some(0x3));
        assert_eq!(rec.dst, Some(0x5));
    }

    #[test]
    fn absolute_moves() {
        let rec = resolved(&[0x23, 0x7F]);
        assert_eq!(rec.encoding, OperandEncoding::Abs8ByteRegLoad);
        assert_eq!(rec.dst, Some(0x3));

        let rec = resolved(&[0x3A, 0x80]);
        assert_eq!(rec.encoding, OperandEncoding::Abs8ByteRegStore);
        assert_eq!(rec.dst, Some(0xA));

        let rec = resolved(&[0x6B, 0x85, 0x12, 0x34]);
        assert_eq!(rec.encoding, OperandEncoding::Abs16WordRegStore);
        assert_eq!(rec.dst, Some(0x5));

        let rec = resolved(&[0x01, 0x00, 0x6B, 0x05, 0x12, 0x34]);
        assert_eq!(rec.encoding, OperandEncoding::Abs16LongRegLoad);
        assert_eq!(rec.dst, Some(0x5));
    }

    #[test]
    fn bit_forms_distinguish_register_from_immediate() {
        let rec = resolved(&[0x63, 0x72]);
        assert_eq!(rec.encoding, OperandEncoding::BitRegByteReg);
        assert_eq!(rec.src, Some(0x7));
        assert_eq!(rec.dst, Some(0x2));

        let rec = resolved(&[0x73, 0x62]);
        assert_eq!(rec.encoding, OperandEncoding::BitImmByteReg);
        assert_eq!(rec.imm, Some(0x6));
        assert_eq!(rec.dst, Some(0x2));

        let rec = resolved(&[0x7C, 0x30, 0x63, 0x40]);
        assert_eq!(rec.encoding, OperandEncoding::BitRegInd);
        assert_eq!(rec.dst, Some(0x3));
        assert_eq!(rec.src, Some(0x4));

        let rec = resolved(&[0x7D, 0x30, 0x70, 0x60]);
        assert_eq!(rec.encoding, OperandEncoding::BitImmInd);
        assert_eq!(rec.dst, Some(0x3));
        assert_eq!(rec.imm, Some(0x6));

        let rec = resolved(&[0x7E, 0x42, 0x76, 0x50]);
        assert_eq!(rec.encoding, OperandEncoding::BitImmAbs8);
        assert_eq!(rec.imm, Some(0x5));

        let rec = resolved(&[0x6A, 0x10, 0x00, 0x00, 0x63, 0x20, 0x00, 0x00]);
        assert_eq!(rec.encoding, OperandEncoding::BitRegAbs16);
        assert_eq!(rec.src, Some(0x2));

        let rec = resolved(&[0x6A, 0x30, 0x00, 0x01, 0x23, 0x44, 0x73, 0x50]);
        assert_eq!(rec.encoding, OperandEncoding::BitImmAbs32);
        assert_eq!(rec.imm, Some(0x5));
    }

    #[test]
    fn control_register_flavors() {
        let rec = resolved(&[0x03, 0x13]);
        assert_eq!(rec.encoding, OperandEncoding::RegCcr);
        assert_eq!(rec.dst, Some(0x3));

        let rec = resolved(&[0x02, 0x23]);
        assert_eq!(rec.encoding, OperandEncoding::StmacReg);
        assert_eq!(rec.dst, Some(0x3));

        let rec = resolved(&[0x01, 0x40, 0x6D, 0x30]);
        assert_eq!(rec.encoding, OperandEncoding::LdcPostInc);
        assert_eq!(rec.src, Some(0x3));

        let rec = resolved(&[0x01, 0x40, 0x6D, 0xB0]);
        assert_eq!(rec.encoding, OperandEncoding::StcPreDec);
        assert_eq!(rec.src, Some(0x3));

        let rec = resolved(&[0x04, 0x12]);
        assert_eq!(rec.encoding, OperandEncoding::Imm8Ccr);
        let rec = resolved(&[0x01, 0x41, 0x04, 0x12]);
        assert_eq!(rec.encoding, OperandEncoding::Imm8Exr);
    }

    #[test]
    fn jumps_and_traps() {
        let rec = resolved(&[0x59, 0x30]);
        assert_eq!(rec.encoding, OperandEncoding::IndReg);
        assert_eq!(rec.dst, Some(0x3));

        let rec = resolved(&[0x01, 0xE0, 0x7B, 0x3C]);
        assert_eq!(rec.encoding, OperandEncoding::IndReg);
        assert_eq!(rec.dst, Some(0x3));

        let rec = resolved(&[0x57, 0x20]);
        assert_eq!(rec.encoding, OperandEncoding::ImmNibble);
        assert_eq!(rec.imm, Some(0x2));

        assert_eq!(
            resolved(&[0x40, 0x10]).encoding,
            OperandEncoding::PcRel8
        );
        assert_eq!(
            resolved(&[0x58, 0x70, 0x01, 0x00]).encoding,
            OperandEncoding::PcRel16
        );
    }

    #[test]
    fn register_ranges_and_mac() {
        let rec = resolved(&[0x01, 0x30, 0x6D, 0x77]);
        assert_eq!(rec.encoding, OperandEncoding::LdmRegRange);
        assert_eq!(rec.dst, Some(0x7));
        assert_eq!(rec.imm, Some(0x3));

        let rec = resolved(&[0x01, 0x10, 0x6D, 0xF4]);
        assert_eq!(rec.encoding, OperandEncoding::StmRegRange);
        assert_eq!(rec.dst, Some(0x4));
        assert_eq!(rec.imm, Some(0x1));

        let rec = resolved(&[0x01, 0x60, 0x6D, 0x12]);
        assert_eq!(rec.encoding, OperandEncoding::MacPostInc);
        assert_eq!(rec.src, Some(0x1));
        assert_eq!(rec.dst, Some(0x2));
    }

    #[test]
    fn sentinels_stay_unresolved() {
        let rec = resolved(&[0xFF, 0xFF]);
        assert_eq!(rec.encoding, OperandEncoding::Unresolved);
        assert_eq!(rec.dst, None);
        assert_eq!(rec.src, None);
        assert_eq!(rec.imm, None);
    }
}
