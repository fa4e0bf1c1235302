//! Data-conversion operators used by `::OP[VALUE]` tokens and `::wtf[VALUE]`.
//!
//! Every operator is a pure function of its input. Malformed or unsupported
//! input produces an empty string rather than an error.

mod identify;
mod morse;
mod numeric;
mod roman;

/// The conversion service consulted by the interpreter.
pub trait Converter {
    /// Apply the named operator. `None` means the operator is unknown;
    /// `Some("")` means the input could not be converted.
    fn convert(&self, operator: &str, input: &str) -> Option<String>;

    /// Best-effort identification report for an opaque value, one entry per
    /// output line. Empty input yields no lines.
    fn identify(&self, input: &str) -> Vec<String>;
}

/// The built-in operator table.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardConverter;

impl Converter for StandardConverter {
    fn convert(&self, operator: &str, input: &str) -> Option<String> {
        Operator::from_name(operator).map(|op| op.apply(input))
    }

    fn identify(&self, input: &str) -> Vec<String> {
        identify::report(input)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    DecimalToBinary,
    DecimalToHex,
    DecimalToAscii,
    DecimalToRoman,
    HexToDecimal,
    HexToBinary,
    HexToAscii,
    BinaryToDecimal,
    BinaryToHex,
    BinaryToAscii,
    AsciiToDecimal,
    AsciiToHex,
    AsciiToBinary,
    TextToMorse,
    MorseToText,
    RomanToDecimal,
}

impl Operator {
    pub fn from_name(name: &str) -> Option<Self> {
        let op = match name {
            "dec->bin" => Operator::DecimalToBinary,
            "dec->hex" => Operator::DecimalToHex,
            "dec->ascii" => Operator::DecimalToAscii,
            "dec->roman" => Operator::DecimalToRoman,
            "hex->dec" => Operator::HexToDecimal,
            "hex->bin" => Operator::HexToBinary,
            "hex->ascii" => Operator::HexToAscii,
            "bin->dec" => Operator::BinaryToDecimal,
            "bin->hex" => Operator::BinaryToHex,
            "bin->ascii" => Operator::BinaryToAscii,
            "ascii->dec" => Operator::AsciiToDecimal,
            "ascii->hex" => Operator::AsciiToHex,
            "ascii->bin" => Operator::AsciiToBinary,
            "text->morse" | "morse" => Operator::TextToMorse,
            "morse->text" => Operator::MorseToText,
            "roman->dec" => Operator::RomanToDecimal,
            _ => return None,
        };
        Some(op)
    }

    pub fn apply(self, input: &str) -> String {
        match self {
            Operator::DecimalToBinary => numeric::reformat(input, 10, 2),
            Operator::DecimalToHex => numeric::reformat(input, 10, 16),
            Operator::DecimalToAscii => numeric::to_ascii(input, 10),
            Operator::DecimalToRoman => roman::encode(input),
            Operator::HexToDecimal => numeric::reformat(input, 16, 10),
            Operator::HexToBinary => numeric::reformat(input, 16, 2),
            Operator::HexToAscii => numeric::bytes_to_ascii(input, 16),
            Operator::BinaryToDecimal => numeric::reformat(input, 2, 10),
            Operator::BinaryToHex => numeric::reformat(input, 2, 16),
            Operator::BinaryToAscii => numeric::bytes_to_ascii(input, 2),
            Operator::AsciiToDecimal => numeric::ascii_codes(input),
            Operator::AsciiToHex => numeric::ascii_to_bytes(input, 16),
            Operator::AsciiToBinary => numeric::ascii_to_bytes(input, 2),
            Operator::TextToMorse => morse::encode(input),
            Operator::MorseToText => morse::decode(input),
            Operator::RomanToDecimal => roman::decode(input),
        }
    }
}
