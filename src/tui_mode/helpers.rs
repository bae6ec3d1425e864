use keypad_calc::{parse_key, Input};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Button rows, top to bottom, as they appear on the keypad.
pub const KEYPAD_LAYOUT: [&str; 5] = ["789÷", "456×", "123-", "0.=+", "C"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadButton {
    pub input: Input,
    pub area: Rect,
}

pub fn keypad_rows() -> Vec<Vec<Input>> {
    KEYPAD_LAYOUT
        .iter()
        .map(|row| row.chars().filter_map(parse_key).collect())
        .collect()
}

/// Splits `area` into an even grid, one cell per button.
///
/// Cell width comes from the widest row, so short rows stay left-aligned.
pub fn layout_keypad(area: Rect, rows: &[Vec<Input>]) -> Vec<KeypadButton> {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    if rows.is_empty() || columns == 0 {
        return Vec::new();
    }

    let cell_width = area.width / columns as u16;
    let cell_height = area.height / rows.len() as u16;
    if cell_width == 0 || cell_height == 0 {
        return Vec::new();
    }

    let mut buttons = Vec::new();
    for (r, row) in rows.iter().enumerate() {
        for (c, input) in row.iter().enumerate() {
            buttons.push(KeypadButton {
                input: *input,
                area: Rect::new(
                    area.x + c as u16 * cell_width,
                    area.y + r as u16 * cell_height,
                    cell_width,
                    cell_height,
                ),
            });
        }
    }
    buttons
}

pub fn button_at(buttons: &[KeypadButton], column: u16, row: u16) -> Option<Input> {
    buttons
        .iter()
        .find(|b| {
            column >= b.area.x
                && column < b.area.x + b.area.width
                && row >= b.area.y
                && row < b.area.y + b.area.height
        })
        .map(|b| b.input)
}

/// Right-aligns `text` in `width` columns, dropping leading characters behind
/// an ellipsis when it does not fit.
pub fn fit_display(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width <= width {
        return format!("{}{}", " ".repeat(width - text_width), text);
    }
    if width == 0 {
        return String::new();
    }

    let mut kept = Vec::new();
    let mut kept_width = 0;
    for c in text.chars().rev() {
        let char_width = UnicodeWidthChar::width(c).unwrap_or(0);
        if kept_width + char_width > width - 1 {
            break;
        }
        kept.push(c);
        kept_width += char_width;
    }

    let tail: String = kept.into_iter().rev().collect();
    format!("{}…{}", " ".repeat(width - 1 - kept_width), tail)
}

pub fn button_style(input: Input, highlighted: bool) -> Style {
    let fg = match input {
        Input::Operator(_) => Color::Yellow,
        Input::Equals => Color::LightGreen,
        Input::Clear => Color::LightRed,
        Input::Digit(_) | Input::DecimalPoint => Color::White,
    };

    if highlighted {
        Style::default()
            .fg(Color::Black)
            .bg(fg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(fg).add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keypad_calc::{Digit, Operator};

    #[test]
    fn test_keypad_rows_match_layout() {
        let rows = keypad_rows();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].len(), 4);
        assert_eq!(rows[0][3], Input::Operator(Operator::Divide));
        assert_eq!(rows[1][3], Input::Operator(Operator::Multiply));
        assert_eq!(rows[3][2], Input::Equals);
        assert_eq!(rows[4], vec![Input::Clear]);
    }

    #[test]
    fn test_layout_keypad_grid() {
        let rows = keypad_rows();
        let buttons = layout_keypad(Rect::new(0, 3, 40, 15), &rows);
        assert_eq!(buttons.len(), 17);
        assert_eq!(buttons[0].area, Rect::new(0, 3, 10, 3));
        assert_eq!(buttons[3].area, Rect::new(30, 3, 10, 3));
        assert_eq!(buttons[16].input, Input::Clear);
        assert_eq!(buttons[16].area, Rect::new(0, 15, 10, 3));
    }

    #[test]
    fn test_layout_keypad_too_small() {
        let rows = keypad_rows();
        assert!(layout_keypad(Rect::new(0, 0, 3, 3), &rows).is_empty());
    }

    #[test]
    fn test_button_at() {
        let rows = keypad_rows();
        let buttons = layout_keypad(Rect::new(0, 0, 40, 15), &rows);
        assert_eq!(
            button_at(&buttons, 0, 0),
            Some(Input::Digit(Digit::new(7).unwrap()))
        );
        assert_eq!(button_at(&buttons, 39, 11), Some(Input::Operator(Operator::Add)));
        assert_eq!(button_at(&buttons, 25, 13), None);
        assert_eq!(button_at(&buttons, 40, 0), None);
    }

    #[test]
    fn test_fit_display_pads() {
        assert_eq!(fit_display("42", 5), "   42");
        assert_eq!(fit_display("Error", 5), "Error");
    }

    #[test]
    fn test_fit_display_truncates_from_left() {
        assert_eq!(fit_display("123456789", 5), "…6789");
        assert_eq!(fit_display("123", 0), "");
    }
}
