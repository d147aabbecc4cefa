use crate::constant::{ADDRESS_DIGITS, COMMENT, COUNT_MAX, HEX_PREFIX};
use crate::data::{AssemblyError, AssemblyErrorCode, OperandKind};

/// Extract the operand from the line suffix left over by the scanner.
/// Returns the value and the rest of the line for trailing validation.
pub fn parse_operand(kind: OperandKind, suffix: &str) -> Result<(u32, &str), AssemblyError> {
    match kind {
        OperandKind::None => Ok((0, suffix)),
        OperandKind::HexAddress => parse_hex_address(suffix),
        OperandKind::Decimal => parse_decimal(suffix),
    }
}

/// A DRAM address is a single space, a `0x` prefix, then 1 to 7 hex digits.
/// A valid hex digit in the 8th position would not fit the 28-bit operand
/// field and is rejected outright.
fn parse_hex_address(suffix: &str) -> Result<(u32, &str), AssemblyError> {
    let digits = match suffix.strip_prefix(HEX_PREFIX) {
        Some(rest) => rest,
        None => {
            return Err(AssemblyError::new(
                AssemblyErrorCode::ExpectedAddress,
                "expected DRAM address".to_string(),
            ))
        }
    };
    let mut value: u32 = 0;
    let mut read = 0;
    for c in digits.chars() {
        let digit = match c.to_digit(16) {
            Some(d) => d,
            None => break,
        };
        if read == ADDRESS_DIGITS {
            return Err(AssemblyError::new(
                AssemblyErrorCode::AddressTooWide,
                "DRAM address longer than 28 bits".to_string(),
            ));
        }
        value = (value << 4) | digit;
        read += 1;
    }
    if read == 0 {
        return Err(AssemblyError::new(
            AssemblyErrorCode::InvalidAddress,
            "invalid DRAM address".to_string(),
        ));
    }
    Ok((value, &digits[read..]))
}

/// An image count is a single space then zero or more decimal digits; no
/// digits at all means 0. The value is capped at 16 bits and rejected the
/// moment it passes the cap.
fn parse_decimal(suffix: &str) -> Result<(u32, &str), AssemblyError> {
    let digits = match suffix.strip_prefix(' ') {
        Some(rest) => rest,
        None => {
            return Err(AssemblyError::new(
                AssemblyErrorCode::ExpectedInteger,
                "expected integer value".to_string(),
            ))
        }
    };
    let mut value: u32 = 0;
    let mut read = 0;
    for c in digits.chars() {
        let digit = match c.to_digit(10) {
            Some(d) => d,
            None => break,
        };
        value = value * 10 + digit;
        if value > COUNT_MAX {
            return Err(AssemblyError::new(
                AssemblyErrorCode::IntegerTooWide,
                "integer value greater than 16 bits".to_string(),
            ));
        }
        read += 1;
    }
    Ok((value, &digits[read..]))
}

/// Everything after the operand must be whitespace, optionally followed by
/// a `#` comment running to end of line. Runs for every line, matched or
/// not, so junk after an unrecognized mnemonic is still rejected.
pub fn validate_trailing(suffix: &str) -> Result<(), AssemblyError> {
    for c in suffix.chars() {
        match c {
            COMMENT => return Ok(()),
            ' ' | '\t' => continue,
            _ => {
                return Err(AssemblyError::new(
                    AssemblyErrorCode::UnexpectedCharacter,
                    format!("unexpected character [ {c} ]"),
                ))
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constant::ADDRESS_MAX;

    #[test]
    fn hex_address_basic() {
        let (value, rest) = parse_operand(OperandKind::HexAddress, " 0x1A").unwrap();
        assert_eq!(value, 0x1A);
        assert_eq!(rest, "");
    }

    #[test]
    fn hex_address_seven_digits_is_the_limit() {
        let (value, rest) = parse_operand(OperandKind::HexAddress, " 0xFFFFFFF").unwrap();
        assert_eq!(value, ADDRESS_MAX);
        assert_eq!(rest, "");
        let err = parse_operand(OperandKind::HexAddress, " 0x10000000").unwrap_err();
        assert_eq!(err.code, AssemblyErrorCode::AddressTooWide);
    }

    #[test]
    fn hex_address_eighth_digit_rejected_regardless_of_value() {
        let err = parse_operand(OperandKind::HexAddress, " 0x00000000").unwrap_err();
        assert_eq!(err.code, AssemblyErrorCode::AddressTooWide);
    }

    #[test]
    fn hex_address_stops_at_first_non_digit() {
        let (value, rest) = parse_operand(OperandKind::HexAddress, " 0x2b00 # base").unwrap();
        assert_eq!(value, 0x2B00);
        assert_eq!(rest, " # base");
    }

    #[test]
    fn hex_address_requires_prefix() {
        let err = parse_operand(OperandKind::HexAddress, " 1A").unwrap_err();
        assert_eq!(err.code, AssemblyErrorCode::ExpectedAddress);
        let err = parse_operand(OperandKind::HexAddress, "0x1A").unwrap_err();
        assert_eq!(err.code, AssemblyErrorCode::ExpectedAddress);
    }

    #[test]
    fn hex_address_requires_a_leading_digit() {
        let err = parse_operand(OperandKind::HexAddress, " 0x").unwrap_err();
        assert_eq!(err.code, AssemblyErrorCode::InvalidAddress);
        let err = parse_operand(OperandKind::HexAddress, " 0xG1").unwrap_err();
        assert_eq!(err.code, AssemblyErrorCode::InvalidAddress);
    }

    #[test]
    fn hex_digits_accept_both_cases() {
        let (value, _) = parse_operand(OperandKind::HexAddress, " 0xaBcDeF0").unwrap();
        assert_eq!(value, 0xABCDEF0);
    }

    #[test]
    fn decimal_basic() {
        let (value, rest) = parse_operand(OperandKind::Decimal, " 10 # frames").unwrap();
        assert_eq!(value, 10);
        assert_eq!(rest, " # frames");
    }

    #[test]
    fn decimal_sixteen_bit_boundary() {
        let (value, _) = parse_operand(OperandKind::Decimal, " 65535").unwrap();
        assert_eq!(value, 65535);
        let err = parse_operand(OperandKind::Decimal, " 65536").unwrap_err();
        assert_eq!(err.code, AssemblyErrorCode::IntegerTooWide);
    }

    #[test]
    fn decimal_with_no_digits_defaults_to_zero() {
        let (value, rest) = parse_operand(OperandKind::Decimal, " ").unwrap();
        assert_eq!(value, 0);
        assert_eq!(rest, "");
    }

    #[test]
    fn decimal_requires_separator_space() {
        let err = parse_operand(OperandKind::Decimal, "7").unwrap_err();
        assert_eq!(err.code, AssemblyErrorCode::ExpectedInteger);
        let err = parse_operand(OperandKind::Decimal, "").unwrap_err();
        assert_eq!(err.code, AssemblyErrorCode::ExpectedInteger);
    }

    #[test]
    fn no_operand_passes_suffix_through() {
        let (value, rest) = parse_operand(OperandKind::None, " # stop").unwrap();
        assert_eq!(value, 0);
        assert_eq!(rest, " # stop");
    }

    #[test]
    fn trailing_accepts_whitespace_and_comments() {
        assert!(validate_trailing("").is_ok());
        assert!(validate_trailing("  \t ").is_ok());
        assert!(validate_trailing("# anything at all ~!@").is_ok());
        assert!(validate_trailing("  \t# comment").is_ok());
    }

    #[test]
    fn trailing_rejects_anything_else() {
        let err = validate_trailing(" x").unwrap_err();
        assert_eq!(err.code, AssemblyErrorCode::UnexpectedCharacter);
        let err = validate_trailing("0").unwrap_err();
        assert_eq!(err.code, AssemblyErrorCode::UnexpectedCharacter);
    }
}
