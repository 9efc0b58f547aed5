use crate::game::{Board, Cell, GameEngine, GameStatus, Line, Player};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line as TextLine, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Red,
        Player::Two => Color::Blue,
    }
}

pub fn render(
    frame: &mut Frame,
    engine: &GameEngine,
    selected_column: usize,
    message: &Option<String>,
    show_column_numbers: bool,
) {
    // column numbers, two borders, selector row
    let board_rows = engine.board().height() as u16 + 4;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),       // Header
            Constraint::Min(board_rows), // Board
            Constraint::Length(3),       // Message
            Constraint::Length(3),       // Controls
        ])
        .split(frame.area());

    render_header(frame, engine, chunks[0]);
    render_board(
        frame,
        engine.board(),
        engine.winning_line(),
        selected_column,
        show_column_numbers,
        chunks[1],
    );
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, engine: &GameEngine, area: Rect) {
    let (status, color) = match engine.status() {
        GameStatus::InProgress => {
            let player = engine.active_player();
            (format!("Current Player: {player}"), player_color(player))
        }
        GameStatus::Won(player) => (format!("Game Over  |  {player} won!"), player_color(player)),
        GameStatus::Draw => ("Game Over  |  Tie game!".to_string(), Color::White),
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

fn render_board(
    frame: &mut Frame,
    board: &Board,
    winning_line: Option<Line>,
    selected_column: usize,
    show_column_numbers: bool,
    area: Rect,
) {
    let width = board.width();
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    if show_column_numbers {
        let mut col_line = vec![Span::raw("   ")]; // matches "  ║"
        for col in 0..width {
            let label = format!("{:^3}", col + 1);
            if col == selected_column {
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
        col_line.push(Span::raw("  ")); // matches " ║"
        lines.push(TextLine::from(col_line));
    }

    let rule = "═".repeat(width * 3 + 1);
    lines.push(TextLine::from(format!("  ╔{rule}╗")));

    for row in 0..board.height() {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..width {
            let (symbol, mut style) = match board.get(row, col) {
                Cell::Empty => (" . ", Style::default().fg(Color::DarkGray)),
                Cell::Occupied(player) => (" ● ", Style::default().fg(player_color(player))),
            };
            if winning_line.is_some_and(|line| line.contains(&(row, col))) {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            row_spans.push(Span::styled(symbol, style));
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(TextLine::from(row_spans));
    }

    lines.push(TextLine::from(format!("  ╚{rule}╝")));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..width {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(TextLine::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new("←/→: Move  |  1-9: Drop in column  |  Enter: Drop  |  R: Restart  |  Q: Quit")
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
