pub const NAME: &str = "ipu-as";

pub const COMMENT: char = '#';
pub const HEX_PREFIX: &str = " 0x";

pub const OPCODE_SHIFT: u32 = 28;
pub const OPERAND_MASK: u32 = 0x0FFF_FFFF;

// operand width limits
pub const ADDRESS_DIGITS: usize = 7;
pub const ADDRESS_MAX: u32 = OPERAND_MASK;
pub const COUNT_MAX: u32 = 65535;

pub const WORD_BYTES: usize = 4;
pub const MAX_INSTRUCTIONS: usize = 8192;
