//! Buffer splitting.
//!
//! Walks a byte buffer front to back, decoding one instruction per step
//! and advancing by its length. Lengths are always even and at least 2,
//! so the walk terminates; a record whose length would run past the end
//! of the buffer is demoted to the raw-word sentinel, which keeps record
//! lengths summing exactly to the bytes consumed.

use h8ray_core::{AddressingMode, InstructionRecord, OperandSize};

use crate::decoder::{H8Disassembler, MAX_INSTRUCTION_LEN, MIN_INSTRUCTION_LEN};
use crate::error::DecodeError;
use crate::resolver;

impl H8Disassembler {
    /// Splits `bytes` into a sequence of resolved instruction records.
    ///
    /// `base` offsets every record position; pass the load address of the
    /// buffer when disassembling a mapped image. A trailing odd byte is
    /// ignored. An error means an internal table inconsistency, not bad
    /// input: any byte pattern decodes, unmatched ones as sentinels.
    pub fn split(
        &self,
        bytes: &[u8],
        base: usize,
    ) -> Result<Vec<InstructionRecord>, DecodeError> {
        let mut records = Vec::new();
        let mut offset = 0;
        while bytes.len() - offset >= MIN_INSTRUCTION_LEN {
            let remaining = &bytes[offset..];
            let mut rec = self.decode(remaining, base + offset)?;
            if rec.total_length > remaining.len() {
                // The tables promised more bytes than the buffer holds.
                rec.reset_to_raw_word();
            }
            rec.bytes = remaining[..rec.total_length].to_vec();
            validate(&rec)?;
            resolver::resolve(&mut rec);
            offset += rec.total_length;
            records.push(rec);
        }
        Ok(records)
    }
}

/// Consistency checks on a freshly decoded record. A failure here is a
/// table bug, never a property of the input bytes.
fn validate(rec: &InstructionRecord) -> Result<(), DecodeError> {
    if rec.total_length < MIN_INSTRUCTION_LEN
        || rec.total_length > MAX_INSTRUCTION_LEN
        || rec.total_length % 2 != 0
    {
        return Err(DecodeError::inconsistent(rec.position, "length out of range"));
    }
    if rec.bytes.len() != rec.total_length {
        return Err(DecodeError::inconsistent(
            rec.position,
            "byte count does not match length",
        ));
    }
    if rec.is_sentinel()
        && (rec.total_length != MIN_INSTRUCTION_LEN
            || rec.size != OperandSize::Unset
            || rec.addressing_mode != AddressingMode::None
            || rec.operand_bits != 0)
    {
        return Err(DecodeError::inconsistent(
            rec.position,
            "sentinel not in canonical shape",
        ));
    }
    Ok(())
}
