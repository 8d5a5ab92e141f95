use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_OK};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, server_url: Option<&str>) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let title_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled("tally", title_style),
        ];
        if let Some(url) = server_url {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled("● ", Style::default().fg(STATUS_OK)));
            spans.push(Span::styled(url.to_string(), text_style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
