use super::helpers::{button_at, KeypadButton};
use keypad_calc::{parse_key, Calculator, Input};
use tracing::debug;

pub struct App {
    pub calculator: Calculator,
    pub should_quit: bool,
    pub show_help: bool,
    pub help_scroll: usize,
    pub terminal_too_small: bool,
    pub last_pressed: Option<Input>,
    // Hit areas from the last frame, used for mouse clicks.
    pub buttons: Vec<KeypadButton>,
}

impl App {
    pub fn new(calculator: Calculator) -> Self {
        App {
            calculator,
            should_quit: false,
            show_help: false,
            help_scroll: 0,
            terminal_too_small: false,
            last_pressed: None,
            buttons: Vec::new(),
        }
    }

    pub fn press(&mut self, input: Input) {
        self.calculator.press(input);
        self.last_pressed = Some(input);
    }

    /// Returns false when `c` is not a keypad key.
    pub fn press_key(&mut self, c: char) -> bool {
        match parse_key(c) {
            Some(input) => {
                self.press(input);
                true
            }
            None => {
                debug!(key = %c, "unmapped key");
                false
            }
        }
    }

    pub fn click(&mut self, column: u16, row: u16) -> bool {
        match button_at(&self.buttons, column, row) {
            Some(input) => {
                self.press(input);
                true
            }
            None => false,
        }
    }

    pub fn open_help(&mut self) {
        self.show_help = true;
        self.help_scroll = 0;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
        self.help_scroll = 0;
    }
}
