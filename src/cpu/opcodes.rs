// Opcode lookup table for 6502 CPU
// Maps each of the 256 possible opcode byte values to its addressing mode,
// instruction length, and base cycle count, used by `Cpu::step` for dispatch
// and by `Cpu::trace` for disassembly.

use crate::cpu::addressing::AddressingMode;

/// Static information about a single opcode
///
/// `cycles` is the base cycle count for the instruction; `page_cycle` marks
/// instructions that take one extra cycle when an indexed addressing mode
/// crosses a page boundary (branch instructions compute their own extra
/// cycles instead and ignore this flag, see `Cpu::step`).
#[derive(Debug, Clone, Copy)]
pub struct OpcodeInfo {
    pub mnemonic: &'static str,
    pub mode: AddressingMode,
    pub bytes: u8,
    pub cycles: u8,
    pub page_cycle: bool,
}

const fn op(
    mnemonic: &'static str,
    mode: AddressingMode,
    bytes: u8,
    cycles: u8,
    page_cycle: bool,
) -> OpcodeInfo {
    OpcodeInfo {
        mnemonic,
        mode,
        bytes,
        cycles,
        page_cycle,
    }
}

/// Placeholder entry for byte values with no official 6502 instruction.
///
/// `Cpu::execute_instruction` treats unknown opcodes as a no-op, so this
/// entry only needs to keep `step`/`trace` from indexing out of bounds or
/// misreading operand bytes.
const ILLEGAL: OpcodeInfo = op("NOP", AddressingMode::Implied, 1, 2, false);

use AddressingMode::{
    Absolute, AbsoluteX, AbsoluteY, Accumulator, Immediate, Implied, IndexedIndirect, Indirect,
    IndirectIndexed, Relative, ZeroPage, ZeroPageX, ZeroPageY,
};

/// Lookup table indexed by opcode byte, covering all 151 official 6502
/// instructions. Unused byte values hold `ILLEGAL`.
pub static OPCODE_TABLE: [OpcodeInfo; 256] = {
    let mut table = [ILLEGAL; 256];

    // Load/Store
    table[0xA9] = op("LDA", Immediate, 2, 2, false);
    table[0xA5] = op("LDA", ZeroPage, 2, 3, false);
    table[0xB5] = op("LDA", ZeroPageX, 2, 4, false);
    table[0xAD] = op("LDA", Absolute, 3, 4, false);
    table[0xBD] = op("LDA", AbsoluteX, 3, 4, true);
    table[0xB9] = op("LDA", AbsoluteY, 3, 4, true);
    table[0xA1] = op("LDA", IndexedIndirect, 2, 6, false);
    table[0xB1] = op("LDA", IndirectIndexed, 2, 5, true);

    table[0xA2] = op("LDX", Immediate, 2, 2, false);
    table[0xA6] = op("LDX", ZeroPage, 2, 3, false);
    table[0xB6] = op("LDX", ZeroPageY, 2, 4, false);
    table[0xAE] = op("LDX", Absolute, 3, 4, false);
    table[0xBE] = op("LDX", AbsoluteY, 3, 4, true);

    table[0xA0] = op("LDY", Immediate, 2, 2, false);
    table[0xA4] = op("LDY", ZeroPage, 2, 3, false);
    table[0xB4] = op("LDY", ZeroPageX, 2, 4, false);
    table[0xAC] = op("LDY", Absolute, 3, 4, false);
    table[0xBC] = op("LDY", AbsoluteX, 3, 4, true);

    table[0x85] = op("STA", ZeroPage, 2, 3, false);
    table[0x95] = op("STA", ZeroPageX, 2, 4, false);
    table[0x8D] = op("STA", Absolute, 3, 4, false);
    table[0x9D] = op("STA", AbsoluteX, 3, 5, false);
    table[0x99] = op("STA", AbsoluteY, 3, 5, false);
    table[0x81] = op("STA", IndexedIndirect, 2, 6, false);
    table[0x91] = op("STA", IndirectIndexed, 2, 6, false);

    table[0x86] = op("STX", ZeroPage, 2, 3, false);
    table[0x96] = op("STX", ZeroPageY, 2, 4, false);
    table[0x8E] = op("STX", Absolute, 3, 4, false);

    table[0x84] = op("STY", ZeroPage, 2, 3, false);
    table[0x94] = op("STY", ZeroPageX, 2, 4, false);
    table[0x8C] = op("STY", Absolute, 3, 4, false);

    // Arithmetic
    table[0x69] = op("ADC", Immediate, 2, 2, false);
    table[0x65] = op("ADC", ZeroPage, 2, 3, false);
    table[0x75] = op("ADC", ZeroPageX, 2, 4, false);
    table[0x6D] = op("ADC", Absolute, 3, 4, false);
    table[0x7D] = op("ADC", AbsoluteX, 3, 4, true);
    table[0x79] = op("ADC", AbsoluteY, 3, 4, true);
    table[0x61] = op("ADC", IndexedIndirect, 2, 6, false);
    table[0x71] = op("ADC", IndirectIndexed, 2, 5, true);

    table[0xE9] = op("SBC", Immediate, 2, 2, false);
    table[0xE5] = op("SBC", ZeroPage, 2, 3, false);
    table[0xF5] = op("SBC", ZeroPageX, 2, 4, false);
    table[0xED] = op("SBC", Absolute, 3, 4, false);
    table[0xFD] = op("SBC", AbsoluteX, 3, 4, true);
    table[0xF9] = op("SBC", AbsoluteY, 3, 4, true);
    table[0xE1] = op("SBC", IndexedIndirect, 2, 6, false);
    table[0xF1] = op("SBC", IndirectIndexed, 2, 5, true);

    table[0xE6] = op("INC", ZeroPage, 2, 5, false);
    table[0xF6] = op("INC", ZeroPageX, 2, 6, false);
    table[0xEE] = op("INC", Absolute, 3, 6, false);
    table[0xFE] = op("INC", AbsoluteX, 3, 7, false);
    table[0xE8] = op("INX", Implied, 1, 2, false);
    table[0xC8] = op("INY", Implied, 1, 2, false);

    table[0xC6] = op("DEC", ZeroPage, 2, 5, false);
    table[0xD6] = op("DEC", ZeroPageX, 2, 6, false);
    table[0xCE] = op("DEC", Absolute, 3, 6, false);
    table[0xDE] = op("DEC", AbsoluteX, 3, 7, false);
    table[0xCA] = op("DEX", Implied, 1, 2, false);
    table[0x88] = op("DEY", Implied, 1, 2, false);

    // Logical
    table[0x29] = op("AND", Immediate, 2, 2, false);
    table[0x25] = op("AND", ZeroPage, 2, 3, false);
    table[0x35] = op("AND", ZeroPageX, 2, 4, false);
    table[0x2D] = op("AND", Absolute, 3, 4, false);
    table[0x3D] = op("AND", AbsoluteX, 3, 4, true);
    table[0x39] = op("AND", AbsoluteY, 3, 4, true);
    table[0x21] = op("AND", IndexedIndirect, 2, 6, false);
    table[0x31] = op("AND", IndirectIndexed, 2, 5, true);

    table[0x09] = op("ORA", Immediate, 2, 2, false);
    table[0x05] = op("ORA", ZeroPage, 2, 3, false);
    table[0x15] = op("ORA", ZeroPageX, 2, 4, false);
    table[0x0D] = op("ORA", Absolute, 3, 4, false);
    table[0x1D] = op("ORA", AbsoluteX, 3, 4, true);
    table[0x19] = op("ORA", AbsoluteY, 3, 4, true);
    table[0x01] = op("ORA", IndexedIndirect, 2, 6, false);
    table[0x11] = op("ORA", IndirectIndexed, 2, 5, true);

    table[0x49] = op("EOR", Immediate, 2, 2, false);
    table[0x45] = op("EOR", ZeroPage, 2, 3, false);
    table[0x55] = op("EOR", ZeroPageX, 2, 4, false);
    table[0x4D] = op("EOR", Absolute, 3, 4, false);
    table[0x5D] = op("EOR", AbsoluteX, 3, 4, true);
    table[0x59] = op("EOR", AbsoluteY, 3, 4, true);
    table[0x41] = op("EOR", IndexedIndirect, 2, 6, false);
    table[0x51] = op("EOR", IndirectIndexed, 2, 5, true);

    table[0x24] = op("BIT", ZeroPage, 2, 3, false);
    table[0x2C] = op("BIT", Absolute, 3, 4, false);

    // Shift/Rotate
    table[0x0A] = op("ASL", Accumulator, 1, 2, false);
    table[0x06] = op("ASL", ZeroPage, 2, 5, false);
    table[0x16] = op("ASL", ZeroPageX, 2, 6, false);
    table[0x0E] = op("ASL", Absolute, 3, 6, false);
    table[0x1E] = op("ASL", AbsoluteX, 3, 7, false);

    table[0x4A] = op("LSR", Accumulator, 1, 2, false);
    table[0x46] = op("LSR", ZeroPage, 2, 5, false);
    table[0x56] = op("LSR", ZeroPageX, 2, 6, false);
    table[0x4E] = op("LSR", Absolute, 3, 6, false);
    table[0x5E] = op("LSR", AbsoluteX, 3, 7, false);

    table[0x2A] = op("ROL", Accumulator, 1, 2, false);
    table[0x26] = op("ROL", ZeroPage, 2, 5, false);
    table[0x36] = op("ROL", ZeroPageX, 2, 6, false);
    table[0x2E] = op("ROL", Absolute, 3, 6, false);
    table[0x3E] = op("ROL", AbsoluteX, 3, 7, false);

    table[0x6A] = op("ROR", Accumulator, 1, 2, false);
    table[0x66] = op("ROR", ZeroPage, 2, 5, false);
    table[0x76] = op("ROR", ZeroPageX, 2, 6, false);
    table[0x6E] = op("ROR", Absolute, 3, 6, false);
    table[0x7E] = op("ROR", AbsoluteX, 3, 7, false);

    // Compare
    table[0xC9] = op("CMP", Immediate, 2, 2, false);
    table[0xC5] = op("CMP", ZeroPage, 2, 3, false);
    table[0xD5] = op("CMP", ZeroPageX, 2, 4, false);
    table[0xCD] = op("CMP", Absolute, 3, 4, false);
    table[0xDD] = op("CMP", AbsoluteX, 3, 4, true);
    table[0xD9] = op("CMP", AbsoluteY, 3, 4, true);
    table[0xC1] = op("CMP", IndexedIndirect, 2, 6, false);
    table[0xD1] = op("CMP", IndirectIndexed, 2, 5, true);

    table[0xE0] = op("CPX", Immediate, 2, 2, false);
    table[0xE4] = op("CPX", ZeroPage, 2, 3, false);
    table[0xEC] = op("CPX", Absolute, 3, 4, false);

    table[0xC0] = op("CPY", Immediate, 2, 2, false);
    table[0xC4] = op("CPY", ZeroPage, 2, 3, false);
    table[0xCC] = op("CPY", Absolute, 3, 4, false);

    // Branches - relative addressing computes its own extra cycles in
    // `Cpu::step`, so `page_cycle` here is never consulted.
    table[0x90] = op("BCC", Relative, 2, 2, false);
    table[0xB0] = op("BCS", Relative, 2, 2, false);
    table[0xF0] = op("BEQ", Relative, 2, 2, false);
    table[0x30] = op("BMI", Relative, 2, 2, false);
    table[0xD0] = op("BNE", Relative, 2, 2, false);
    table[0x10] = op("BPL", Relative, 2, 2, false);
    table[0x50] = op("BVC", Relative, 2, 2, false);
    table[0x70] = op("BVS", Relative, 2, 2, false);

    // Jump/Subroutine
    table[0x4C] = op("JMP", Absolute, 3, 3, false);
    table[0x6C] = op("JMP", Indirect, 3, 5, false);
    table[0x20] = op("JSR", Absolute, 3, 6, false);
    table[0x60] = op("RTS", Implied, 1, 6, false);

    // Stack
    table[0x48] = op("PHA", Implied, 1, 3, false);
    table[0x68] = op("PLA", Implied, 1, 4, false);
    table[0x08] = op("PHP", Implied, 1, 3, false);
    table[0x28] = op("PLP", Implied, 1, 4, false);
    table[0x9A] = op("TXS", Implied, 1, 2, false);
    table[0xBA] = op("TSX", Implied, 1, 2, false);

    // Transfer
    table[0xAA] = op("TAX", Implied, 1, 2, false);
    table[0xA8] = op("TAY", Implied, 1, 2, false);
    table[0x8A] = op("TXA", Implied, 1, 2, false);
    table[0x98] = op("TYA", Implied, 1, 2, false);

    // Flags
    table[0x18] = op("CLC", Implied, 1, 2, false);
    table[0xD8] = op("CLD", Implied, 1, 2, false);
    table[0x58] = op("CLI", Implied, 1, 2, false);
    table[0xB8] = op("CLV", Implied, 1, 2, false);
    table[0x38] = op("SEC", Implied, 1, 2, false);
    table[0xF8] = op("SED", Implied, 1, 2, false);
    table[0x78] = op("SEI", Implied, 1, 2, false);

    // Miscellaneous
    table[0x00] = op("BRK", Implied, 1, 7, false);
    table[0x40] = op("RTI", Implied, 1, 6, false);
    table[0xEA] = op("NOP", Implied, 1, 2, false);

    table
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_all_256_entries() {
        assert_eq!(OPCODE_TABLE.len(), 256);
    }

    #[test]
    fn known_addressing_modes_cover_151_official_opcodes() {
        // Every official opcode was assigned explicitly above; everything
        // else still sitting on the ILLEGAL default is unofficial.
        let assigned = 256 - OPCODE_TABLE.iter().filter(|i| i.mnemonic == "NOP" && i.bytes == 1 && i.cycles == 2).count();
        // $EA (real NOP) looks identical to ILLEGAL and gets excluded too,
        // so add it back.
        assert_eq!(assigned + 1, 151);
    }

    #[test]
    fn brk_is_single_byte_seven_cycles() {
        let info = &OPCODE_TABLE[0x00];
        assert_eq!(info.mnemonic, "BRK");
        assert_eq!(info.bytes, 1);
        assert_eq!(info.cycles, 7);
    }

    #[test]
    fn lda_immediate_decodes_correctly() {
        let info = &OPCODE_TABLE[0xA9];
        assert_eq!(info.mnemonic, "LDA");
        assert_eq!(info.mode, AddressingMode::Immediate);
        assert_eq!(info.bytes, 2);
        assert_eq!(info.cycles, 2);
    }

    #[test]
    fn jmp_indirect_is_three_bytes() {
        let info = &OPCODE_TABLE[0x6C];
        assert_eq!(info.mnemonic, "JMP");
        assert_eq!(info.mode, AddressingMode::Indirect);
        assert_eq!(info.bytes, 3);
    }

    #[test]
    fn illegal_opcode_is_safe_single_byte_nop() {
        let info = &OPCODE_TABLE[0x02];
        assert_eq!(info.bytes, 1);
        assert_eq!(info.cycles, 2);
    }
}
