use crate::controller::ControlId;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{body_parts, layout_regions};
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, BUTTON_BORDER, HEADER_TEXT, NEGATIVE};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.server_url()), header);
    frame.render_widget(Clear, body);

    let (display, buttons) = body_parts(body);
    let text = app.display_text();
    let color = if text.starts_with('-') { NEGATIVE } else { HEADER_TEXT };
    let display_widget = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(display_widget, display);

    for (control, rect) in ControlId::ALL.into_iter().zip(buttons) {
        if rect.area() == 0 {
            continue;
        }
        let focused = control == app.focus();
        let (border, background) = if focused {
            (Style::default().fg(ACCENT), Style::default().bg(ACTIVE_HIGHLIGHT))
        } else {
            (Style::default().fg(BUTTON_BORDER), Style::default())
        };
        let button = Paragraph::new(control.label())
            .alignment(Alignment::Center)
            .style(background.fg(HEADER_TEXT))
            .block(Block::default().borders(Borders::ALL).border_style(border));
        frame.render_widget(button, rect);
    }

    frame.render_widget(Footer::new().widget(footer), footer);
}
