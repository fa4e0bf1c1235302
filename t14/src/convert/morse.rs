// International Morse Code letters and digits.
const CODES: [(char, &str); 36] = [
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    ('0', "-----"),
];

fn code_for(ch: char) -> Option<&'static str> {
    CODES.iter().find(|(c, _)| *c == ch).map(|(_, code)| *code)
}

fn char_for(code: &str) -> Option<char> {
    CODES.iter().find(|(_, m)| *m == code).map(|(c, _)| *c)
}

/// Letters within a word are separated by a space, words by `/`.
/// Characters without a code are dropped.
pub(super) fn encode(text: &str) -> String {
    text.to_uppercase()
        .split(' ')
        .map(|word| {
            word.chars()
                .filter_map(code_for)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// Decodes to upper case, words joined by a single space.
pub(super) fn decode(morse: &str) -> String {
    morse
        .split('/')
        .map(|word| word.split_whitespace().filter_map(char_for).collect::<String>())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
