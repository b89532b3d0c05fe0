use crate::highlight::Span as HitSpan;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

pub const BAR_BG: Color = Color::Rgb(0, 95, 135);
pub const SELECTED_BG: Color = Color::Rgb(60, 60, 80);

/// Matched text: dark on yellow, like a marker pen
pub fn match_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
}

pub fn title_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

pub fn description_style() -> Style {
    Style::default().fg(Color::Gray)
}

pub fn placeholder_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC)
}

/// Turn highlight spans into styled ratatui spans on top of `base`
pub fn styled_spans<'a>(spans: &[HitSpan<'a>], base: Style) -> Vec<Span<'a>> {
    spans
        .iter()
        .map(|span| match span {
            HitSpan::Plain(text) => Span::styled(*text, base),
            HitSpan::Match(text) => Span::styled(*text, base.patch(match_style())),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matched_runs_keep_base_modifiers() {
        let spans = styled_spans(
            &[HitSpan::Match("Test"), HitSpan::Plain(" 1")],
            title_style(),
        );
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].content, "Test");
        assert_eq!(spans[0].style.bg, Some(Color::Yellow));
        assert!(spans[0].style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(spans[1].style, title_style());
    }
}
