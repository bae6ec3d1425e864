//! Four-function keypad calculator with immediate evaluation.
//!
//! The engine in [`calc_engine`] is a pure state machine; terminal front ends
//! own a [`Calculator`] and feed it key presses.

pub mod calc_engine;
pub mod keys;

pub use calc_engine::{
    format_number, step, CalcError, Calculator, CalculatorState, Digit, Input, Limits, Operator,
    Phase, ERROR_TEXT,
};
pub use keys::{parse_key, run_script};
