use crate::data::Opcode;

/// Match order follows the opcode numbering. The mnemonics are mutually
/// non-prefixing, so first match is the only match.
pub const MNEMONICS: &[(&str, Opcode)] = &[
    ("HLT", Opcode::Hlt),
    ("SET_RESULT_ADDR", Opcode::SetResultAddr),
    ("LOAD_RNW", Opcode::LoadRnw),
    ("LOAD_DNW", Opcode::LoadDnw),
    ("BEGIN_PROC", Opcode::BeginProc),
    ("SET_IMG_NUM", Opcode::SetImgNum),
];

/// Strip a mnemonic prefix off one source line. Matching is case-sensitive
/// and the mnemonic must start at column 0. A line with no mnemonic is
/// returned whole; it produces no instruction but still has to pass
/// trailing validation.
pub fn scan_line(line: &str) -> (Option<Opcode>, &str) {
    for (mnemonic, opcode) in MNEMONICS {
        if let Some(suffix) = line.strip_prefix(mnemonic) {
            return (Some(*opcode), suffix);
        }
    }
    (None, line)
}
