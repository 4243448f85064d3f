use super::app::{Mode, NameEditor};
use crate::console::HOW_TO_PLAY;
use crate::game::{Cell, GameSnapshot, Phase, Player, COLS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    state: &GameSnapshot,
    selected_column: usize,
    message: Option<&str>,
    mode: &Mode,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, state, chunks[0]);
    render_board(frame, state, selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);

    match mode {
        Mode::Playing => {}
        Mode::Help => render_help(frame),
        Mode::EditingNames(editor) => render_name_editor(frame, editor),
    }
}

fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Red,
        Player::Two => Color::Yellow,
    }
}

fn render_header(frame: &mut Frame, state: &GameSnapshot, area: Rect) {
    let (status, color) = match state.phase {
        Phase::InProgress => {
            let player = state.current_player;
            (
                format!("{}'s turn  |  Move {}", state.name(player), state.move_count + 1),
                player_color(player),
            )
        }
        Phase::Won(winner) => (
            format!("Game Over  |  The winner is {}", state.name(winner)),
            player_color(winner),
        ),
        Phase::Draw => ("Game Over  |  Draw".to_string(), Color::White),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, state: &GameSnapshot, selected_column: usize, area: Rect) {
    let mut lines = Vec::new();
    let selectable = !state.phase.is_terminal();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..COLS {
        let label = format!(" {} ", col + 1);
        if selectable && col == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    lines.push(Line::from("  ╔═════════════════════╗"));

    for (row, cells) in state.board.rows().enumerate() {
        let mut row_spans = vec![Span::raw("  ║")];

        for (col, &cell) in cells.iter().enumerate() {
            let (symbol, mut style) = match cell {
                Cell::Empty => (" . ", Style::default().fg(Color::DarkGray)),
                Cell::PlayerOne => (" \u{25cf} ", Style::default().fg(player_color(Player::One))),
                Cell::PlayerTwo => (" \u{25cf} ", Style::default().fg(player_color(Player::Two))),
            };
            if state.winning_line.is_some_and(|line| line.contains(row, col)) {
                style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
            } else if state
                .last_move
                .is_some_and(|last| last.row == row && last.column == col)
            {
                style = style.add_modifier(Modifier::BOLD);
            }
            row_spans.push(Span::styled(symbol, style));
        }

        row_spans.push(Span::raw("║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from("  ╚═════════════════════╝"));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..COLS {
        if selectable && col == selected_column {
            indicator_line.push(Span::styled(
                " ▲ ",
                Style::default().fg(player_color(state.current_player)),
            ));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let text = message.unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from(
        "←/→: Move  |  Enter or 1-7: Drop  |  R: New game  |  E: Names  |  H: Help  |  Q: Quit",
    );

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}

fn render_help(frame: &mut Frame) {
    let area = centered_rect(60, 50, frame.area());
    let help = Paragraph::new(HOW_TO_PLAY)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("How to Play (any key to close)"),
        );

    frame.render_widget(Clear, area);
    frame.render_widget(help, area);
}

fn render_name_editor(frame: &mut Frame, editor: &NameEditor) {
    let area = centered_rect(50, 30, frame.area());

    let field = |player: Player, text: &str| {
        let active = editor.editing == player;
        let cursor = if active { "_" } else { "" };
        let label_style = Style::default().fg(player_color(player));
        let label_style = if active {
            label_style.add_modifier(Modifier::BOLD)
        } else {
            label_style
        };
        Line::from(vec![
            Span::styled(format!("{}: ", player.default_name()), label_style),
            Span::raw(format!("{text}{cursor}")),
        ])
    };

    let lines = vec![
        field(Player::One, &editor.one),
        field(Player::Two, &editor.two),
        Line::from(""),
        Line::from("Tab: Switch  |  Enter: Save  |  Esc: Cancel"),
    ];

    let dialog = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Player Names"),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(dialog, area);
}

/// A rectangle of the given percentage size centered in `area`
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
