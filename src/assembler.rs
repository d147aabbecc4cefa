use crate::constant::MAX_INSTRUCTIONS;
use crate::data::{AssemblyError, AssemblyErrorCode};
use crate::instruction::Instruction;
use crate::parser::{parse_operand, validate_trailing};
use crate::scanner::scan_line;

/// Single-pass driver. Owns the growing program and the 1-based line
/// counter; any stage error is tagged with the current line and aborts the
/// whole run.
pub struct Assembler {
    program: Vec<Instruction>,
    line_num: usize,
}

impl Assembler {
    pub fn new() -> Self {
        Self {
            program: Vec::new(),
            line_num: 0,
        }
    }

    pub fn assemble_source(&mut self, source: &str) -> Result<(), AssemblyError> {
        for line in source.lines() {
            self.line_num += 1;
            self.assemble_line(line)
                .map_err(|err| err.on_line(self.line_num))?;
        }
        Ok(())
    }

    fn assemble_line(&mut self, line: &str) -> Result<(), AssemblyError> {
        let (opcode, suffix) = scan_line(line);
        let (operand, rest) = match opcode {
            Some(opcode) => parse_operand(opcode.operand_kind(), suffix)?,
            None => (0, suffix),
        };
        validate_trailing(rest)?;
        if let Some(opcode) = opcode {
            if self.program.len() == MAX_INSTRUCTIONS {
                return Err(AssemblyError::new(
                    AssemblyErrorCode::ProgramCapacityExceeded,
                    format!("program larger than {MAX_INSTRUCTIONS} instructions"),
                ));
            }
            self.program.push(Instruction::new(opcode, operand));
        }
        Ok(())
    }

    /// Consume the assembler and hand back the finished program. A program
    /// with no instructions at all is a fatal error.
    pub fn finish(self) -> Result<Vec<Instruction>, AssemblyError> {
        if self.program.is_empty() {
            return Err(AssemblyError::new(
                AssemblyErrorCode::EmptyProgram,
                "expected at least one instruction".to_string(),
            ));
        }
        Ok(self.program)
    }
}

/// Assemble a complete source text in one call.
pub fn assemble(source: &str) -> Result<Vec<Instruction>, AssemblyError> {
    let mut assembler = Assembler::new();
    assembler.assemble_source(source)?;
    assembler.finish()
}
