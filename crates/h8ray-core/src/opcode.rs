//! Mnemonic identities.

use std::fmt;

/// Every mnemonic the decoder can produce.
///
/// The sixteen conditional branches are separate opcodes rather than one
/// opcode with a condition field: the primary dispatch table indexes them
/// directly by nibble and nothing downstream needs the family grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Opcode {
    // Data movement
    Mov,
    Ldc,
    Stc,
    Ldm,
    Stm,
    Ldmac,
    Stmac,
    Eepmov,
    // Arithmetic
    Add,
    Adds,
    Addx,
    Cmp,
    Daa,
    Das,
    Dec,
    Divxs,
    Divxu,
    Inc,
    Mac,
    Clrmac,
    Mulxs,
    Mulxu,
    Neg,
    Sub,
    Subs,
    Subx,
    Exts,
    Extu,
    Tas,
    // Logic
    And,
    Andc,
    Not,
    Or,
    Orc,
    Xor,
    Xorc,
    // Shifts and rotates
    Shal,
    Shar,
    Shll,
    Shlr,
    Rotl,
    Rotr,
    Rotxl,
    Rotxr,
    // Bit manipulation
    Band,
    Bclr,
    Biand,
    Bild,
    Bior,
    Bist,
    Bixor,
    Bld,
    Bnot,
    Bor,
    Bset,
    Bst,
    Btst,
    Bxor,
    // Conditional branches, in encoding order
    Bra,
    Brn,
    Bhi,
    Bls,
    Bcc,
    Bcs,
    Bne,
    Beq,
    Bvc,
    Bvs,
    Bpl,
    Bmi,
    Bge,
    Blt,
    Bgt,
    Ble,
    // Control flow and system
    Bsr,
    Jmp,
    Jsr,
    Rts,
    Rte,
    Sleep,
    Trapa,
    Nop,
    /// Raw-word sentinel: an unrecognized byte pair kept as `.word` data.
    Word,
}

impl Opcode {
    /// Returns the lowercase mnemonic text.
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Self::Mov => "mov",
            Self::Ldc => "ldc",
            Self::Stc => "stc",
            Self::Ldm => "ldm",
            Self::Stm => "stm",
            Self::Ldmac => "ldmac",
            Self::Stmac => "stmac",
            Self::Eepmov => "eepmov",
            Self::Add => "add",
            Self::Adds => "adds",
            Self::Addx => "addx",
            Self::Cmp => "cmp",
            Self::Daa => "daa",
            Self::Das => "das",
            Self::Dec => "dec",
            Self::Divxs => "divxs",
            Self::Divxu => "divxu",
            Self::Inc => "inc",
            Self::Mac => "mac",
            Self::Clrmac => "clrmac",
            Self::Mulxs => "mulxs",
            Self::Mulxu => "mulxu",
            Self::Neg => "neg",
            Self::Sub => "sub",
            Self::Subs => "subs",
            Self::Subx => "subx",
            Self::Exts => "exts",
            Self::Extu => "extu",
            Self::Tas => "tas",
            Self::And => "and",
            Self::Andc => "andc",
            Self::Not => "not",
            Self::Or => "or",
            Self::Orc => "orc",
            Self::Xor => "xor",
            Self::Xorc => "xorc",
            Self::Shal => "shal",
            Self::Shar => "shar",
            Self::Shll => "shll",
            Self::Shlr => "shlr",
            Self::Rotl => "rotl",
            Self::Rotr => "rotr",
            Self::Rotxl => "rotxl",
            Self::Rotxr => "rotxr",
            Self::Band => "band",
            Self::Bclr => "bclr",
            Self::Biand => "biand",
            Self::Bild => "bild",
            Self::Bior => "bior",
            Self::Bist => "bist",
            Self::Bixor => "bixor",
            Self::Bld => "bld",
            Self::Bnot => "bnot",
            Self::Bor => "bor",
            Self::Bset => "bset",
            Self::Bst => "bst",
            Self::Btst => "btst",
            Self::Bxor => "bxor",
            Self::Bra => "bra",
            Self::Brn => "brn",
            Self::Bhi => "bhi",
            Self::Bls => "bls",
            Self::Bcc => "bcc",
            Self::Bcs => "bcs",
            Self::Bne => "bne",
            Self::Beq => "beq",
            Self::Bvc => "bvc",
            Self::Bvs => "bvs",
            Self::Bpl => "bpl",
            Self::Bmi => "bmi",
            Self::Bge => "bge",
            Self::Blt => "blt",
            Self::Bgt => "bgt",
            Self::Ble => "ble",
            Self::Bsr => "bsr",
            Self::Jmp => "jmp",
            Self::Jsr => "jsr",
            Self::Rts => "rts",
            Self::Rte => "rte",
            Self::Sleep => "sleep",
            Self::Trapa => "trapa",
            Self::Nop => "nop",
            Self::Word => ".word",
        }
    }

    /// Control-register load/store never carries a size suffix, even when
    /// the record's size is set.
    pub fn suppresses_size_suffix(&self) -> bool {
        matches!(self, Self::Ldc | Self::Stc)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mnemonics_are_lowercase() {
        for op in [Opcode::Mov, Opcode::Bra, Opcode::Divxs, Opcode::Rotxl] {
            let m = op.mnemonic();
            assert_eq!(m, m.to_lowercase());
        }
    }

    #[test]
    fn sentinel_prints_as_word_directive() {
        assert_eq!(Opcode::Word.to_string(), ".word");
    }

    #[test]
    fn only_control_register_moves_suppress_suffix() {
        assert!(Opcode::Ldc.suppresses_size_suffix());
        assert!(Opcode::Stc.suppresses_size_suffix());
        assert!(!Opcode::Mov.suppresses_size_suffix());
        assert!(!Opcode::Stmac.suppresses_size_suffix());
    }
}
