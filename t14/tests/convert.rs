use proptest::prelude::*;
use t14::convert::{Converter, Operator, StandardConverter};

fn convert(operator: &str, input: &str) -> String {
    StandardConverter
        .convert(operator, input)
        .unwrap_or_else(|| panic!("unknown operator {}", operator))
}

#[test]
fn unknown_operator() {
    assert_eq!(StandardConverter.convert("dec->octal", "8"), None);
    assert_eq!(Operator::from_name("DEC->BIN"), None);
}

#[test]
fn decimal_conversions() {
    assert_eq!(convert("dec->bin", "10"), "1010");
    assert_eq!(convert("dec->bin", "0"), "0");
    assert_eq!(convert("dec->hex", "255"), "FF");
    assert_eq!(convert("dec->hex", " 4096 "), "1000");
    assert_eq!(convert("dec->ascii", "65"), "A");
    assert_eq!(convert("dec->bin", "18446744073709551615"), "1".repeat(64));
}

#[test]
fn malformed_numbers_give_empty_output() {
    assert_eq!(convert("dec->bin", "-1"), "");
    assert_eq!(convert("dec->bin", "+1"), "");
    assert_eq!(convert("dec->bin", "ten"), "");
    assert_eq!(convert("dec->bin", ""), "");
    assert_eq!(convert("dec->hex", "18446744073709551616"), "");
    assert_eq!(convert("dec->ascii", "128"), "");
    assert_eq!(convert("bin->dec", "102"), "");
    assert_eq!(convert("hex->dec", "G1"), "");
}

#[test]
fn hex_conversions() {
    assert_eq!(convert("hex->dec", "FF"), "255");
    assert_eq!(convert("hex->dec", "ff"), "255");
    assert_eq!(convert("hex->dec", "0x1A"), "26");
    assert_eq!(convert("hex->bin", "A"), "1010");
    assert_eq!(convert("hex->ascii", "48656C6C6F"), "Hello");
    assert_eq!(convert("hex->ascii", "48656"), "He");
    assert_eq!(convert("hex->ascii", "FF"), "");
}

#[test]
fn binary_conversions() {
    assert_eq!(convert("bin->dec", "1010"), "10");
    assert_eq!(convert("bin->hex", "11111111"), "FF");
    assert_eq!(convert("bin->ascii", "0100100001101001"), "Hi");
    assert_eq!(convert("bin->ascii", "01001000011"), "H");
}

#[test]
fn ascii_conversions() {
    assert_eq!(convert("ascii->dec", "A"), "65");
    assert_eq!(convert("ascii->dec", "Hi"), "72 105");
    assert_eq!(convert("ascii->hex", "Hello"), "48656C6C6F");
    assert_eq!(convert("ascii->bin", "A"), "01000001");
    assert_eq!(convert("ascii->bin", "é"), "");
}

#[test]
fn morse() {
    assert_eq!(convert("text->morse", "sos"), "... --- ...");
    assert_eq!(convert("morse", "Hi there"), ".... ../- .... . .-. .");
    assert_eq!(convert("morse->text", ".... ../- .... . .-. ."), "HI THERE");
    assert_eq!(convert("text->morse", "a!b"), ".- -...");
    assert_eq!(convert("text->morse", "a  b"), ".-/-...");
    assert_eq!(convert("morse->text", "...---..."), "");
}

#[test]
fn roman_numerals() {
    assert_eq!(convert("dec->roman", "1994"), "MCMXCIV");
    assert_eq!(convert("dec->roman", "3999"), "MMMCMXCIX");
    assert_eq!(convert("dec->roman", "4"), "IV");
    assert_eq!(convert("dec->roman", "0"), "");
    assert_eq!(convert("dec->roman", "4000"), "");
    assert_eq!(convert("roman->dec", "MCMXCIV"), "1994");
    assert_eq!(convert("roman->dec", "xiv"), "14");
    assert_eq!(convert("roman->dec", "IIII"), "");
    assert_eq!(convert("roman->dec", "VX"), "");
    assert_eq!(convert("roman->dec", ""), "");
}

#[test]
fn identify_binary() {
    let report = StandardConverter.identify("01001000");
    assert!(report.iter().any(|l| l.contains("binary")));
    assert!(report.contains(&"::bin->dec[01001000] = 72".to_string()));
    assert!(report.contains(&"::bin->hex[01001000] = 48".to_string()));
    assert!(report.contains(&"::bin->ascii[01001000] = H".to_string()));
}

#[test]
fn identify_hex() {
    let report = StandardConverter.identify("4869");
    assert!(report.iter().any(|l| l.contains("hexadecimal")));
    assert!(report.contains(&"::hex->dec[4869] = 18537".to_string()));
    assert!(report.contains(&"::hex->ascii[4869] = Hi".to_string()));
}

#[test]
fn identify_unknown_and_empty() {
    let report = StandardConverter.identify("hello");
    assert_eq!(report.len(), 2);
    assert!(report[1].contains("No interpretation"));
    assert!(StandardConverter.identify("  ").is_empty());
}

proptest! {
    #[test]
    fn decimal_binary_round_trip(n in any::<u64>()) {
        let binary = convert("dec->bin", &n.to_string());
        prop_assert_eq!(convert("bin->dec", &binary), n.to_string());
    }

    #[test]
    fn decimal_hex_round_trip(n in any::<u64>()) {
        let hex = convert("dec->hex", &n.to_string());
        prop_assert_eq!(convert("hex->dec", &hex), n.to_string());
    }

    #[test]
    fn roman_round_trip(n in 1u64..=3999) {
        let roman = convert("dec->roman", &n.to_string());
        prop_assert_eq!(convert("roman->dec", &roman), n.to_string());
    }

    #[test]
    fn ascii_hex_round_trip(text in "[ -~]{0,24}") {
        let hex = convert("ascii->hex", &text);
        prop_assert_eq!(convert("hex->ascii", &hex), text);
    }

    // Morse has no case, so decoding yields the upper-cased input.
    #[test]
    fn morse_round_trip(words in prop::collection::vec("[a-zA-Z0-9]{1,8}", 1..5)) {
        let text = words.join(" ");
        let morse = convert("text->morse", &text);
        prop_assert_eq!(convert("morse->text", &morse), text.to_uppercase());
    }
}
