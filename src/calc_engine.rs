use std::fmt;

use thiserror::Error;
use tracing::{debug, warn};

/// Text shown after a failed evaluation.
pub const ERROR_TEXT: &str = "Error";
pub const DEFAULT_MAX_DIGITS: usize = 16;
pub const DEFAULT_PRECISION: usize = 10;

// Integral results at or above this magnitude switch to exponent notation.
const INTEGER_DISPLAY_LIMIT: f64 = 1e15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '×',
            Operator::Divide => '÷',
        }
    }

    fn apply(self, lhs: f64, rhs: f64) -> Result<f64, CalcError> {
        match self {
            Operator::Add => Ok(lhs + rhs),
            Operator::Subtract => Ok(lhs - rhs),
            Operator::Multiply => Ok(lhs * rhs),
            Operator::Divide => {
                if rhs == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                Ok(lhs / rhs)
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single decimal digit, 0 through 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digit(u8);

impl Digit {
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Digit(value))
    }

    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Digit(d as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

/// One button press on the keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Digit(Digit),
    DecimalPoint,
    Operator(Operator),
    Equals,
    Clear,
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Digit(d) => write!(f, "{}", d.as_char()),
            Input::DecimalPoint => write!(f, "."),
            Input::Operator(op) => write!(f, "{}", op),
            Input::Equals => write!(f, "="),
            Input::Clear => write!(f, "C"),
        }
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    #[error("division by zero")]
    DivisionByZero,
}

/// Bounds on what the calculator accepts and shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Digits accepted in a typed entry before further digits are ignored.
    pub max_digits: usize,
    /// Fractional digits kept when a computed result is displayed.
    pub precision: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_digits: DEFAULT_MAX_DIGITS,
            precision: DEFAULT_PRECISION,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Pending {
    operand: String,
    operator: Operator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Entering,
    OperatorSelected,
    EnteringSecond,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorState {
    current_entry: String,
    pending: Option<Pending>,
    is_entering: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        CalculatorState {
            current_entry: String::from("0"),
            pending: None,
            is_entering: false,
        }
    }
}

impl CalculatorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_entry(&self) -> &str {
        &self.current_entry
    }

    pub fn pending_operand(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.operand.as_str())
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending.as_ref().map(|p| p.operator)
    }

    pub fn is_entering(&self) -> bool {
        self.is_entering
    }

    pub fn phase(&self) -> Phase {
        match (self.pending.is_some(), self.is_entering) {
            (false, false) => Phase::Idle,
            (false, true) => Phase::Entering,
            (true, false) => Phase::OperatorSelected,
            (true, true) => Phase::EnteringSecond,
        }
    }

    /// Short "operand operator" label for the pending operation, e.g. `8 +`.
    pub fn pending_summary(&self) -> Option<String> {
        self.pending
            .as_ref()
            .map(|p| format!("{} {}", p.operand, p.operator))
    }

    fn push_digit(&mut self, digit: Digit, limits: &Limits) {
        if !self.is_entering || self.current_entry == "0" {
            self.current_entry = digit.as_char().to_string();
            self.is_entering = true;
        } else if digit_count(&self.current_entry) < limits.max_digits {
            self.current_entry.push(digit.as_char());
        }
    }

    fn push_decimal_point(&mut self) {
        if self.current_entry.contains('.') {
            return;
        }

        if !self.is_entering || self.current_entry == "0" {
            self.current_entry = String::from("0.");
            self.is_entering = true;
        } else {
            self.current_entry.push('.');
        }
    }

    fn select_operator(&mut self, operator: Operator, limits: &Limits) -> Result<(), CalcError> {
        if self.is_entering {
            self.evaluate(limits)?;
        }

        self.pending = Some(Pending {
            operand: self.current_entry.clone(),
            operator,
        });
        self.is_entering = false;
        Ok(())
    }

    // Without a pending operation, or with an operand that does not parse,
    // the state is left as it is.
    fn evaluate(&mut self, limits: &Limits) -> Result<(), CalcError> {
        let Some(pending) = &self.pending else {
            return Ok(());
        };
        let (Ok(lhs), Ok(rhs)) = (
            pending.operand.parse::<f64>(),
            self.current_entry.parse::<f64>(),
        ) else {
            return Ok(());
        };

        let result = pending.operator.apply(lhs, rhs)?;
        self.current_entry = format_number(result, limits.precision);
        self.pending = None;
        self.is_entering = false;
        Ok(())
    }
}

// The zero in front of a bare fraction ("0.5") is not a typed digit.
fn digit_count(entry: &str) -> usize {
    let typed = entry
        .strip_prefix('0')
        .filter(|rest| rest.starts_with('.'))
        .unwrap_or(entry);
    typed.chars().filter(|c| c.is_ascii_digit()).count()
}

/// Applies one input to `state` and returns the next state with the text to display.
///
/// Evaluation failures never escape: the state falls back to its defaults and
/// the display reads [`ERROR_TEXT`] until the next input.
pub fn step(state: CalculatorState, input: Input, limits: &Limits) -> (CalculatorState, String) {
    let mut next = state;
    let outcome = match input {
        Input::Digit(digit) => {
            next.push_digit(digit, limits);
            Ok(())
        }
        Input::DecimalPoint => {
            next.push_decimal_point();
            Ok(())
        }
        Input::Operator(operator) => next.select_operator(operator, limits),
        Input::Equals => next.evaluate(limits),
        Input::Clear => {
            next = CalculatorState::default();
            Ok(())
        }
    };

    match outcome {
        Ok(()) => {
            debug!(%input, phase = ?next.phase(), entry = %next.current_entry, "input applied");
            let display = next.current_entry.clone();
            (next, display)
        }
        Err(err) => {
            warn!(%input, error = %err, "evaluation failed, calculator reset");
            (CalculatorState::default(), ERROR_TEXT.to_string())
        }
    }
}

/// Renders a computed value for the display.
///
/// Whole numbers below 1e15 print without a fractional part. Larger magnitudes
/// use exponent notation. Everything else is rounded to `precision` fractional
/// digits with trailing zeros dropped; exponent mantissas get the same rounding.
/// Infinities and NaN print as `inf`, `-inf` and `NaN`, all of which parse back.
pub fn format_number(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value.fract() == 0.0 && value.abs() < INTEGER_DISPLAY_LIMIT {
        return format!("{}", value as i64);
    }
    if value.abs() >= INTEGER_DISPLAY_LIMIT {
        let scientific = format!("{:.*e}", precision, value);
        return match scientific.split_once('e') {
            Some((mantissa, exponent)) => format!("{}e{}", trim_fraction(mantissa), exponent),
            None => scientific,
        };
    }

    let fixed = format!("{:.*}", precision, value);
    match trim_fraction(&fixed) {
        "-0" => String::from("0"),
        other => other.to_string(),
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

/// Owns the calculator state and the last display text on behalf of a UI.
#[derive(Debug, Clone)]
pub struct Calculator {
    state: CalculatorState,
    limits: Limits,
    display: String,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self::with_limits(Limits::default())
    }

    pub fn with_limits(limits: Limits) -> Self {
        let state = CalculatorState::default();
        let display = state.current_entry.clone();
        Calculator {
            state,
            limits,
            display,
        }
    }

    pub fn press(&mut self, input: Input) -> &str {
        let state = std::mem::take(&mut self.state);
        let (state, display) = step(state, input, &self.limits);
        self.state = state;
        self.display = display;
        &self.display
    }

    pub fn on_digit(&mut self, digit: Digit) -> &str {
        self.press(Input::Digit(digit))
    }

    pub fn on_decimal_point(&mut self) -> &str {
        self.press(Input::DecimalPoint)
    }

    pub fn on_operator(&mut self, operator: Operator) -> &str {
        self.press(Input::Operator(operator))
    }

    pub fn on_equals(&mut self) -> &str {
        self.press(Input::Equals)
    }

    pub fn on_clear(&mut self) -> &str {
        self.press(Input::Clear)
    }

    pub fn current_display(&self) -> &str {
        &self.display
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }
}
