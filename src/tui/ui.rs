use crate::session::EMPTY_MESSAGE;
use crate::tui::app::App;
use crate::tui::colors;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Rows used by one record: title, description, spacer
const ITEM_HEIGHT: u16 = 3;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search bar
            Constraint::Length(1), // Result count
            Constraint::Min(3),    // Results
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    app.results.visible_items = ((chunks[2].height / ITEM_HEIGHT) as usize).max(1);
    app.results.clamp();

    draw_search_bar(frame, app, chunks[0]);
    draw_count(frame, app, chunks[1]);
    draw_results(frame, app, chunks[2]);
    draw_status_bar(frame, app, chunks[3]);

    if app.search.focused {
        // Border (1) + leading space (1)
        let cursor_x = chunks[0].x + 2 + app.search.cursor_width() as u16;
        let cursor_y = chunks[0].y + 1;
        frame.set_cursor_position(Position::new(
            cursor_x.min(chunks[0].right().saturating_sub(2)),
            cursor_y,
        ));
    }
}

fn draw_search_bar(frame: &mut Frame, app: &App, area: Rect) {
    let border_style = if app.search.focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Search ")
        .title_style(Style::default().add_modifier(Modifier::BOLD));

    let line = if app.search.query.is_empty() {
        Line::from(vec![
            Span::raw(" "),
            Span::styled("Type here...", colors::placeholder_style()),
        ])
    } else {
        Line::from(format!(" {}", app.search.query))
    };

    let paragraph = Paragraph::new(line)
        .block(block)
        .style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, area);
}

fn draw_count(frame: &mut Frame, app: &App, area: Rect) {
    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled(
            format!("{} post", app.session.result_count()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" were found."),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_results(frame: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;

    if session.result_count() == 0 {
        let y = area.y + area.height / 2;
        let message_area = Rect::new(area.x, y.min(area.bottom().saturating_sub(1)), area.width, 1);
        frame.render_widget(
            Paragraph::new(EMPTY_MESSAGE)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Gray)),
            message_area,
        );
        return;
    }

    let start = app.results.scroll_offset;
    let mut lines: Vec<Line> = Vec::new();

    for (logical_idx, record) in session
        .results()
        .enumerate()
        .skip(start)
        .take(app.results.visible_items)
    {
        let is_selected = app.results.selected == Some(logical_idx) && !app.search.focused;
        let (marker, bg) = if is_selected {
            ("\u{258C} ", colors::SELECTED_BG)
        } else {
            ("  ", Color::Reset)
        };

        let mut title = vec![Span::styled(marker, Style::default().fg(Color::Cyan).bg(bg))];
        title.extend(colors::styled_spans(
            &session.highlight(&record.title),
            colors::title_style().bg(bg),
        ));

        let mut description = vec![Span::styled("  ", Style::default().bg(bg))];
        description.extend(colors::styled_spans(
            &session.highlight(&record.description),
            colors::description_style().bg(bg),
        ));

        lines.push(Line::from(title));
        lines.push(Line::from(description));
        lines.push(Line::default());
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let mut left_text = format!(
        " {} of {} records",
        session.result_count(),
        session.catalog().len()
    );
    if session.is_debouncing() {
        left_text.push_str(" | debouncing\u{2026}");
    }

    let right_text = " Tab:Focus  Enter:Apply  \u{2191}\u{2193}:Select  Esc:Clear/Back  Ctrl+Q:Quit ";

    // Left-aligned text + padding + right-aligned text
    let available_width = area.width as usize;
    let left_len = left_text.chars().count();
    let right_len = right_text.chars().count();

    let status_str = if left_len + right_len < available_width {
        let padding = available_width - left_len - right_len;
        format!("{}{:padding$}{}", left_text, "", right_text, padding = padding)
    } else {
        format!("{:width$}", left_text, width = available_width)
    };

    let status = Paragraph::new(status_str)
        .style(Style::default().fg(Color::White).bg(colors::BAR_BG));

    frame.render_widget(status, area);
}
