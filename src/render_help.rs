use crate::tui_mode::app::App;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render_help(frame: &mut Frame, app: &mut App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" Keypad Calculator Help ")
        .title_alignment(Alignment::Center)
        .style(Style::default().bg(Color::Black));

    let heading = Style::default().fg(Color::Cyan).add_modifier(Modifier::UNDERLINED);
    let limits = *app.calculator.limits();

    let help_text = vec![
        Line::from(Span::styled("Keypad Calculator", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(Span::styled("Operations:", heading)),
        Line::from("  + : Addition        (e.g., 7 + 3 = 10)"),
        Line::from("  - : Subtraction     (e.g., 10 - 4 = 6)"),
        Line::from("  × : Multiplication  (keys x, X or *; 6 × 7 = 42)"),
        Line::from("  ÷ : Division        (key /; 15 ÷ 3 = 5)"),
        Line::from(""),
        Line::from(Span::styled("How it evaluates:", heading)),
        Line::from("  No precedence: each operator folds the pending one first."),
        Line::from("  5 + 3 + 2 = shows 8 after the second +, then 10."),
        Line::from("  Pressing = with nothing pending leaves the display alone."),
        Line::from("  Dividing by zero shows Error and starts over."),
        Line::from(""),
        Line::from(Span::styled("Keys:", heading)),
        Line::from("  0-9, . or ,  : Enter a number"),
        Line::from("  Enter or =   : Calculate"),
        Line::from("  Esc, Del, c  : Clear"),
        Line::from("  Mouse click  : Press a keypad button"),
        Line::from("  F1 or ?      : Toggle this help"),
        Line::from("  q, Ctrl+C    : Quit"),
        Line::from(""),
        Line::from(Span::styled("Limits:", heading)),
        Line::from(format!("  Up to {} digits per entry", limits.max_digits)),
        Line::from(format!("  Results rounded to {} decimal places", limits.precision)),
    ];

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true })
        .scroll((app.help_scroll as u16, 0));

    frame.render_widget(Clear, frame.size());
    frame.render_widget(paragraph, frame.size());
}
