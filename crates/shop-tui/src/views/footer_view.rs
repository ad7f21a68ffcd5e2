use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

const HINTS: [(&str, &str); 4] = [
    ("Tab", "switch"),
    ("j/k", "move"),
    ("Enter", "add to cart"),
    ("q", "quit"),
];

/// Key hints on the left, variant description on the right
pub struct FooterWidget<'a>(pub &'a str, pub &'a Theme);

impl Widget for FooterWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }

        let (description, theme) = (self.0, self.1);

        let spans: Vec<Span> = HINTS
            .iter()
            .flat_map(|(key, action)| {
                [
                    Span::styled(format!(" {} ", key), theme.key_hint()),
                    Span::styled(format!("{}  ", action), theme.muted()),
                ]
            })
            .collect();
        let hints = Line::from(spans);
        let hints_width = hints.width() as u16;
        hints.render(area, buf);

        let width = description.chars().count() as u16 + 1;
        if hints_width + width < area.width {
            buf.set_string(
                area.x + area.width - width,
                area.y,
                description,
                theme.info(),
            );
        }
    }
}
