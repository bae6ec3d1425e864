use crate::calc_engine::{Calculator, Digit, Input, Operator};
use tracing::warn;

/// Maps a typed character to the keypad button it stands for.
pub fn parse_key(c: char) -> Option<Input> {
    if let Some(digit) = Digit::from_char(c) {
        return Some(Input::Digit(digit));
    }

    match c {
        '.' | ',' => Some(Input::DecimalPoint),
        '+' => Some(Input::Operator(Operator::Add)),
        '-' => Some(Input::Operator(Operator::Subtract)),
        '*' | 'x' | 'X' | '×' => Some(Input::Operator(Operator::Multiply)),
        '/' | '÷' => Some(Input::Operator(Operator::Divide)),
        '=' => Some(Input::Equals),
        'c' | 'C' => Some(Input::Clear),
        _ => None,
    }
}

/// Feeds every mapped character of `script` into `calculator`.
///
/// Returns the display after each accepted key. Whitespace is skipped silently,
/// other unknown characters with a warning.
pub fn run_script(calculator: &mut Calculator, script: &str) -> Vec<String> {
    let mut displays = Vec::new();

    for c in script.chars() {
        if c.is_whitespace() {
            continue;
        }
        match parse_key(c) {
            Some(input) => displays.push(calculator.press(input).to_string()),
            None => warn!(key = %c, "ignoring unmapped key"),
        }
    }

    displays
}
