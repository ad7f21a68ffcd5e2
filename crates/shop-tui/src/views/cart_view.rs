use crate::theme::Theme;
use crate::view_models::CartViewModel;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct CartWidget<'a>(pub &'a CartViewModel, pub &'a Theme);

impl Widget for CartWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (vm, theme) = (self.0, self.1);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.panel_border())
            .title(Line::styled(" Cart ", theme.panel_title()));

        let style = if vm.count == 0 {
            theme.muted()
        } else {
            theme.cart_count()
        };

        Paragraph::new(Line::styled(vm.text.as_str(), style))
            .block(block)
            .render(area, buf);
    }
}
