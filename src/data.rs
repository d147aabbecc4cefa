use crate::constant::NAME;
use colorize::AnsiColor;
use std::fmt;

/// The six operations understood by the downstream processing unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    Hlt,
    SetResultAddr,
    LoadRnw,
    LoadDnw,
    BeginProc,
    SetImgNum,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandKind {
    None,
    HexAddress,
    Decimal,
}

impl Opcode {
    /// 4-bit code stored in the top nibble of the encoded word.
    pub fn code(&self) -> u32 {
        match self {
            Opcode::Hlt => 0x0,
            Opcode::SetResultAddr => 0x1,
            Opcode::LoadRnw => 0x2,
            Opcode::LoadDnw => 0x3,
            Opcode::BeginProc => 0x4,
            Opcode::SetImgNum => 0x5,
        }
    }

    pub fn operand_kind(&self) -> OperandKind {
        match self {
            Opcode::Hlt => OperandKind::None,
            Opcode::SetResultAddr => OperandKind::HexAddress,
            Opcode::LoadRnw => OperandKind::HexAddress,
            Opcode::LoadDnw => OperandKind::HexAddress,
            Opcode::BeginProc => OperandKind::HexAddress,
            Opcode::SetImgNum => OperandKind::Decimal,
        }
    }

    pub fn mnemonic(&self) -> &'static str {
        match self {
            Opcode::Hlt => "HLT",
            Opcode::SetResultAddr => "SET_RESULT_ADDR",
            Opcode::LoadRnw => "LOAD_RNW",
            Opcode::LoadDnw => "LOAD_DNW",
            Opcode::BeginProc => "BEGIN_PROC",
            Opcode::SetImgNum => "SET_IMG_NUM",
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssemblyErrorCode {
    SourceFileReadError,
    OutputWriteError,
    ExpectedAddress,
    InvalidAddress,
    AddressTooWide,
    ExpectedInteger,
    IntegerTooWide,
    UnexpectedCharacter,
    ProgramCapacityExceeded,
    EmptyProgram,
}

pub struct AssemblyError {
    pub code: AssemblyErrorCode,
    pub reason: String,
    pub line: Option<usize>,
}

impl AssemblyError {
    pub fn new(code: AssemblyErrorCode, reason: String) -> Self {
        Self {
            code,
            reason,
            line: None,
        }
    }

    /// Tag the error with the 1-based source line it occurred on.
    pub fn on_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

impl fmt::Display for AssemblyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.line {
            Some(line) => format!("error on line {line}:"),
            None => "error:".to_string(),
        };
        let string = format!(
            "{NAME}: {} {} :: {}",
            tag.red(),
            format!("{:?}", self.code).yellow(),
            self.reason
        );
        write!(f, "{string}")
    }
}

impl fmt::Debug for AssemblyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?} :: {})", self.code, self.reason)
    }
}
