//! Decoded instruction records.

use crate::encoding::OperandEncoding;
use crate::opcode::Opcode;

/// Operand width attached to a mnemonic.
///
/// `Unset` means the opcode carries no data-size distinction (bit
/// operations, control flow, the raw-word sentinel); the renderer emits no
/// suffix for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OperandSize {
    #[default]
    Unset,
    Byte,
    Word,
    Longword,
}

impl OperandSize {
    /// Returns the assembler suffix: `""`, `".b"`, `".w"`, or `".l"`.
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::Byte => ".b",
            Self::Word => ".w",
            Self::Longword => ".l",
        }
    }
}

/// How an instruction addresses its operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AddressingMode {
    #[default]
    None,
    Immediate,
    RegisterDirect,
    RegisterIndirect,
    Absolute,
    PcRelative,
    MemoryIndirect,
    RegisterIndirectDisplacement,
    RegisterIndirectPostIncrement,
    RegisterIndirectPreDecrement,
}

/// A single decoded H8S/2000 instruction.
///
/// Built incrementally: the decoder assigns `opcode`, `size`,
/// `addressing_mode`, `operand_bits`, and `total_length`; the splitter
/// copies `bytes` once the length is final; the resolver fills `encoding`
/// and the nibble fields. A record whose pattern matched no table entry is
/// the raw-word sentinel: `opcode == Opcode::Word`, `total_length == 2`,
/// size unset, mode none.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InstructionRecord {
    /// Byte offset of the instruction in the source stream.
    pub position: usize,
    /// Instruction length in bytes: 2, 4, 6, 8, or 10.
    pub total_length: usize,
    pub size: OperandSize,
    pub opcode: Opcode,
    pub addressing_mode: AddressingMode,
    /// Width in bits of an embedded address or displacement operand
    /// (8/16/24/32); 0 for modes that embed none.
    pub operand_bits: u8,
    /// Raw bytes consumed, exactly `total_length` long once the splitter
    /// has copied them.
    pub bytes: Vec<u8>,
    /// Operand shape, assigned by the resolver; stays `Unresolved` for
    /// combinations with no resolution rule.
    pub encoding: OperandEncoding,
    /// Destination (or sole) register field nibble.
    pub dst: Option<u8>,
    /// Source register field nibble.
    pub src: Option<u8>,
    /// Small immediate nibble: shift counts, bit numbers, trap vectors,
    /// inc/dec and adds/subs constants. Wide immediates stay in `bytes`.
    pub imm: Option<u8>,
}

impl InstructionRecord {
    /// Creates a record in the sentinel shape at `position`. Decode levels
    /// promote it to a real instruction only when a pattern fully matches.
    pub fn new(position: usize) -> Self {
        Self {
            position,
            total_length: 2,
            size: OperandSize::Unset,
            opcode: Opcode::Word,
            addressing_mode: AddressingMode::None,
            operand_bits: 0,
            bytes: Vec::new(),
            encoding: OperandEncoding::Unresolved,
            dst: None,
            src: None,
            imm: None,
        }
    }

    /// Resets every decoder-assigned field back to the canonical sentinel
    /// shape, discarding whatever an earlier decode level tentatively set.
    pub fn reset_to_raw_word(&mut self) {
        let position = self.position;
        *self = Self::new(position);
    }

    pub fn with_opcode(mut self, opcode: Opcode) -> Self {
        self.opcode = opcode;
        self
    }

    pub fn with_size(mut self, size: OperandSize) -> Self {
        self.size = size;
        self
    }

    pub fn with_mode(mut self, mode: AddressingMode) -> Self {
        self.addressing_mode = mode;
        self
    }

    pub fn with_bits(mut self, bits: u8) -> Self {
        self.operand_bits = bits;
        self
    }

    pub fn with_length(mut self, length: usize) -> Self {
        self.total_length = length;
        self
    }

    /// True for the raw-word sentinel.
    pub fn is_sentinel(&self) -> bool {
        self.opcode == Opcode::Word
    }
}
