use crate::constant::WORD_BYTES;
use crate::instruction::Instruction;

/// Flatten the program into its binary image: one big-endian 32-bit word
/// per instruction, program order, no header or trailer.
pub fn emit(program: &[Instruction]) -> Vec<u8> {
    let mut image = Vec::<u8>::with_capacity(program.len() * WORD_BYTES);
    for instruction in program {
        image.extend(instruction.encode().to_be_bytes());
    }
    image
}
