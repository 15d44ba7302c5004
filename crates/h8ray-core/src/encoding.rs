//! Operand encoding shapes.
//!
//! Each variant names one concrete operand arrangement the renderer knows
//! how to format. The decoder never assigns these; the resolver maps a
//! finished record onto a shape, and anything it cannot classify stays
//! [`OperandEncoding::Unresolved`].

/// Operand arrangement of a decoded instruction.
///
/// Doc comments show the rendered form; `Rs`/`Rd` stand for whatever
/// register class the shape names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OperandEncoding {
    /// No resolution rule matched; renders the diagnostic operand marker.
    #[default]
    Unresolved,
    /// Mnemonic only.
    NoOperands,

    // Register-to-register
    /// `add.b r3h, r6l`
    ByteRegPair,
    /// `add.w r3, e2`
    WordRegPair,
    /// `add.l er3, er6`
    LongRegPair,
    /// Two-register longword form whose source nibble arrives pre-biased;
    /// uses the shifted longword lookup.
    LongRegPairShifted,
    /// `mulxu.b r2l, r3` (byte source, word destination)
    ByteWordRegPair,
    /// `mulxu.w r2, er3` (word source, longword destination)
    WordLongRegPair,

    // Single register
    /// `inc.b r3h`
    ByteReg,
    /// `neg.w r3`
    WordReg,
    /// `exts.l er3`
    LongReg,

    // Shift and rotate: one-bit form bare, two-bit form `#2, Rd`
    /// `shll.b r3h` / `shll.b #2, r3h`
    ShiftByteReg,
    /// `shar.w r3` / `shar.w #2, r3`
    ShiftWordReg,
    /// `rotl.l er3` / `rotl.l #2, er3`
    ShiftLongReg,

    // Small-constant forms
    /// `inc.w #1, r3`
    CountWordReg,
    /// `adds #2, er3`
    CountLongReg,
    /// `trapa #3`
    ImmNibble,

    // Wide immediates
    /// `add.b #18, r6l`
    Imm8ByteReg,
    /// `add.w #4660, r3`
    Imm16WordReg,
    /// `add.l #65536, er5`
    Imm32LongReg,

    // Control-register and MAC-register transfers
    /// `orc #6, ccr`
    Imm8Ccr,
    /// `orc #6, exr`
    Imm8Exr,
    /// `ldc r3h, ccr` (flavor read from the encoded bytes)
    RegCcr,
    /// `stc ccr, r3h`
    CcrReg,
    /// `ldmac er3, mach`
    LdmacReg,
    /// `stmac mach, er3`
    StmacReg,

    // Absolute-address moves
    /// `mov.b @0x12:8, r3h`
    Abs8ByteRegLoad,
    /// `mov.b r3h, @0x12:8`
    Abs8ByteRegStore,
    /// `mov.b @0x1234:16, r3h`
    Abs16ByteRegLoad,
    /// `mov.b r3h, @0x1234:16`
    Abs16ByteRegStore,
    /// `mov.b @0x12345678:32, r3h`
    Abs32ByteRegLoad,
    /// `mov.b r3h, @0x12345678:32`
    Abs32ByteRegStore,
    /// `mov.w @0x1234:16, r3`
    Abs16WordRegLoad,
    /// `mov.w r3, @0x1234:16`
    Abs16WordRegStore,
    /// `mov.w @0x12345678:32, r3`
    Abs32WordRegLoad,
    /// `mov.w r3, @0x12345678:32`
    Abs32WordRegStore,
    /// `mov.l @0x1234:16, er3`
    Abs16LongRegLoad,
    /// `mov.l er3, @0x1234:16`
    Abs16LongRegStore,
    /// `mov.l @0x12345678:32, er3`
    Abs32LongRegLoad,
    /// `mov.l er3, @0x12345678:32`
    Abs32LongRegStore,

    // Jumps and calls
    /// `jmp @0x123456:24`
    Abs24Jump,
    /// `jmp @@0x34:8`
    MemIndJump,
    /// `jmp @er3` (also `tas @er3`)
    IndReg,

    // Register-indirect moves
    /// `mov.b @er3, r2h`
    IndByteRegLoad,
    /// `mov.b r2h, @er3`
    IndByteRegStore,
    /// `mov.w @er3, r2`
    IndWordRegLoad,
    /// `mov.w r2, @er3`
    IndWordRegStore,
    /// `mov.l @er3, er2`
    IndLongRegLoad,
    /// `mov.l er2, @er3`
    IndLongRegStore,

    // Post-increment loads and pre-decrement stores
    /// `mov.b @er3+, r2h`
    PostIncByteReg,
    /// `mov.b r2h, @-er3`
    PreDecByteReg,
    /// `mov.w @er3+, r2`
    PostIncWordReg,
    /// `mov.w r2, @-er3`
    PreDecWordReg,
    /// `mov.l @er3+, er2`
    PostIncLongReg,
    /// `mov.l er2, @-er3`
    PreDecLongReg,

    // Register-indirect with displacement
    /// `mov.b @(0x1234:16,er3), r2h`
    Disp16ByteLoad,
    /// `mov.b r2h, @(0x1234:16,er3)`
    Disp16ByteStore,
    /// `mov.w @(0x1234:16,er3), r2`
    Disp16WordLoad,
    /// `mov.w r2, @(0x1234:16,er3)`
    Disp16WordStore,
    /// `mov.l @(0x1234:16,er3), er2`
    Disp16LongLoad,
    /// `mov.l er2, @(0x1234:16,er3)`
    Disp16LongStore,
    /// `mov.b @(0x12345678:32,er3), r2h`
    Disp32ByteLoad,
    /// `mov.b r2h, @(0x12345678:32,er3)`
    Disp32ByteStore,
    /// `mov.w @(0x12345678:32,er3), r2`
    Disp32WordLoad,
    /// `mov.w r2, @(0x12345678:32,er3)`
    Disp32WordStore,
    /// `mov.l @(0x12345678:32,er3), er2`
    Disp32LongLoad,
    /// `mov.l er2, @(0x12345678:32,er3)`
    Disp32LongStore,

    // Program-counter relative
    /// `bne 0x1042` (resolved target)
    PcRel8,
    /// `bsr 0x10f2`
    PcRel16,

    // Bit manipulation
    /// `bset r1l, r2h`
    BitRegByteReg,
    /// `bset #4, r2h`
    BitImmByteReg,
    /// `bset r1l, @er3`
    BitRegInd,
    /// `bset #4, @er3`
    BitImmInd,
    /// `bset r1l, @0x12:8`
    BitRegAbs8,
    /// `bset #4, @0x12:8`
    BitImmAbs8,
    /// `btst r1l, @0x1234:16`
    BitRegAbs16,
    /// `btst #4, @0x1234:16`
    BitImmAbs16,
    /// `btst r1l, @0x12345678:32`
    BitRegAbs32,
    /// `btst #4, @0x12345678:32`
    BitImmAbs32,

    // Control-register memory transfers (ccr/exr read from the bytes)
    /// `ldc @er3, ccr`
    LdcInd,
    /// `stc ccr, @er3`
    StcInd,
    /// `ldc @er3+, ccr`
    LdcPostInc,
    /// `stc ccr, @-er3`
    StcPreDec,
    /// `ldc @(0x1234:16,er3), ccr`
    LdcDisp16,
    /// `stc ccr, @(0x1234:16,er3)`
    StcDisp16,
    /// `ldc @(0x12345678:32,er3), ccr`
    LdcDisp32,
    /// `stc ccr, @(0x12345678:32,er3)`
    StcDisp32,
    /// `ldc @0x1234:16, ccr`
    LdcAbs16,
    /// `stc ccr, @0x1234:16`
    StcAbs16,
    /// `ldc @0x12345678:32, ccr`
    LdcAbs32,
    /// `stc ccr, @0x12345678:32`
    StcAbs32,

    // Multi-register and MAC forms
    /// `ldm.l @sp+, er4-er7`
    LdmRegRange,
    /// `stm.l er4-er7, @-sp`
    StmRegRange,
    /// `mac @er1+, @er2+`
    MacPostInc,
}
