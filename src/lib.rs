pub mod assembler;
pub mod constant;
pub mod data;
pub mod emitter;
pub mod instruction;
pub mod parser;
pub mod scanner;

pub use assembler::{assemble, Assembler};
pub use data::{AssemblyError, AssemblyErrorCode, Opcode, OperandKind};
pub use instruction::Instruction;
