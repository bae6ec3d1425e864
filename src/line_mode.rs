use anyhow::Result;
use keypad_calc::{parse_key, Calculator, Input};
use std::io::{stdin, stdout, Write};
use termion::{clear::CurrentLine as ClearLine, event::Key, input::TermRead, raw::IntoRawMode};
use tracing::debug;

pub fn run_line(mut calculator: Calculator) -> Result<()> {
    println!("Keypad Calculator");
    println!("Keys: 0-9 . + - x / =   Enter calculates, Esc or c clears, q quits\n");

    let mut stdout = stdout().into_raw_mode()?;
    redraw(&mut stdout, &calculator)?;

    for key in stdin().keys() {
        let input = match key? {
            Key::Char('q') | Key::Char('Q') | Key::Ctrl('c') => break,
            Key::Char('\n') => Some(Input::Equals),
            Key::Esc | Key::Delete => Some(Input::Clear),
            Key::Char(c) => parse_key(c),
            _ => None,
        };

        match input {
            Some(input) => {
                calculator.press(input);
                redraw(&mut stdout, &calculator)?;
            }
            None => debug!("unmapped key"),
        }
    }

    write!(stdout, "\r\n")?;
    stdout.flush()?;
    Ok(())
}

fn redraw<W: Write>(out: &mut W, calculator: &Calculator) -> Result<()> {
    let pending = calculator
        .state()
        .pending_summary()
        .map(|p| format!("   [{}]", p))
        .unwrap_or_default();

    write!(
        out,
        "\r{}Display: {}{}",
        ClearLine,
        calculator.current_display(),
        pending
    )?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redraw_shows_pending_operation() {
        let mut calc = Calculator::new();
        keypad_calc::run_script(&mut calc, "12+");

        let mut out = Vec::new();
        redraw(&mut out, &calc).unwrap();
        let line = String::from_utf8(out).unwrap();
        assert!(line.ends_with("Display: 12   [12 +]"));
    }

    #[test]
    fn test_redraw_plain_display() {
        let calc = Calculator::new();
        let mut out = Vec::new();
        redraw(&mut out, &calc).unwrap();
        let line = String::from_utf8(out).unwrap();
        assert!(line.starts_with('\r'));
        assert!(line.ends_with("Display: 0"));
    }
}
