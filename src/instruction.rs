use crate::constant::{OPCODE_SHIFT, OPERAND_MASK};
use crate::data::Opcode;
use std::fmt;

/// One assembled instruction: an opcode plus its range-checked operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub opcode: Opcode,
    pub operand: u32,
}

impl Instruction {
    pub fn new(opcode: Opcode, operand: u32) -> Self {
        Self { opcode, operand }
    }

    /// Pack into one 32-bit word: opcode in bits 31-28, operand in bits
    /// 27-0. Operands are range-checked by the parser, so the mask never
    /// drops live bits.
    pub fn encode(&self) -> u32 {
        (self.opcode.code() << OPCODE_SHIFT) | (self.operand & OPERAND_MASK)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ {} ]::{:#010x}", self.opcode, self.encode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constant::ADDRESS_MAX;

    #[test]
    fn hlt_encodes_to_all_zero() {
        assert_eq!(Instruction::new(Opcode::Hlt, 0).encode(), 0x0000_0000);
    }

    #[test]
    fn opcode_lands_in_the_top_nibble() {
        assert_eq!(
            Instruction::new(Opcode::SetResultAddr, 0x1A).encode(),
            0x1000_001A
        );
        assert_eq!(
            Instruction::new(Opcode::SetImgNum, 10).encode(),
            0x5000_000A
        );
    }

    #[test]
    fn operand_field_round_trips() {
        for operand in [0, 1, 0xABC_DEF0, ADDRESS_MAX] {
            let word = Instruction::new(Opcode::BeginProc, operand).encode();
            assert_eq!(word >> 28, 0x4);
            assert_eq!(word & ADDRESS_MAX, operand);
        }
    }
}
