//! Core instruction model for the h8ray disassembler.
//!
//! This crate defines the data types shared by the decoder, resolver, and
//! renderer: the [`InstructionRecord`] produced for every decoded
//! instruction, the closed [`Opcode`] and [`OperandEncoding`] vocabularies,
//! and the H8S/2000 register-naming tables.

pub mod encoding;
pub mod instruction;
pub mod opcode;
pub mod register;

pub use encoding::OperandEncoding;
pub use instruction::{AddressingMode, InstructionRecord, OperandSize};
pub use opcode::Opcode;
pub use register::{byte_reg_name, long_reg_name, long_reg_name_shifted, word_reg_name};
