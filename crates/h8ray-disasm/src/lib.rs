//! H8S/2000 instruction decoder.
//!
//! The pipeline runs one direction: raw bytes go through the multi-level
//! nibble dispatch ([`decoder`], [`levels`]) to produce
//! [`h8ray_core::InstructionRecord`]s, the [`splitter`] walks a whole
//! buffer, the [`resolver`] maps each record onto an operand encoding
//! shape, and the [`renderer`] turns records into assembler text.
//!
//! Unrecognized byte patterns never fail: they decode to the canonical
//! 2-byte raw-word sentinel and decoding continues at the next pair.

pub mod decoder;
pub mod error;
pub mod levels;
pub mod renderer;
pub mod resolver;
pub mod splitter;

pub use decoder::H8Disassembler;
pub use error::DecodeError;
pub use renderer::{render, render_line};
pub use resolver::resolve;
