use ratatui::layout::Rect;

pub const BUTTON_WIDTH: u16 = 11;
pub const BUTTON_GAP: u16 = 2;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

pub fn body_rect(area: Rect) -> Rect {
    layout_regions(area).1
}

/// Split the body into the display line and the three button cells.
///
/// Content is centered in the body; button cells are clipped to it, so on
/// a narrow terminal some may be empty.
pub fn body_parts(body: Rect) -> (Rect, [Rect; 3]) {
    let display_height = 3.min(body.height);
    let button_height = 3.min(body.height.saturating_sub(display_height));
    let top = body.y + body.height.saturating_sub(display_height + button_height) / 2;

    let display = Rect {
        x: body.x,
        y: top,
        width: body.width,
        height: display_height,
    };

    let row_width = BUTTON_WIDTH * 3 + BUTTON_GAP * 2;
    let start_x = body.x + body.width.saturating_sub(row_width) / 2;
    let buttons = [0u16, 1, 2].map(|i| {
        Rect {
            x: start_x + i * (BUTTON_WIDTH + BUTTON_GAP),
            y: top + display_height,
            width: BUTTON_WIDTH,
            height: button_height,
        }
        .intersection(body)
    });

    (display, buttons)
}

/// Whether the cell at (`col`, `row`) lies inside `rect`.
pub fn hit(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x
        && row >= rect.y
        && col < rect.x.saturating_add(rect.width)
        && row < rect.y.saturating_add(rect.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_cover_the_screen() {
        let area = Rect::new(0, 0, 80, 24);
        let (header, body, footer) = layout_regions(area);
        assert_eq!(header.height, 3);
        assert_eq!(footer.height, 3);
        assert_eq!(body.height, 18);
        assert_eq!(footer.y, 21);
    }

    #[test]
    fn buttons_are_centered_and_disjoint() {
        let body = Rect::new(0, 3, 80, 18);
        let (display, buttons) = body_parts(body);
        assert_eq!(display.height, 3);
        assert_eq!(buttons[0].y, display.y + display.height);
        assert_eq!(buttons[0].x, (80 - 37) / 2);
        assert!(buttons[0].x + buttons[0].width < buttons[1].x);
        assert!(buttons[1].x + buttons[1].width < buttons[2].x);
    }

    #[test]
    fn tiny_body_clips_buttons() {
        let body = Rect::new(0, 3, 10, 2);
        let (_, buttons) = body_parts(body);
        assert!(buttons.iter().all(|b| b.area() == 0 || hit(body, b.x, b.y)));
    }
}
