use crate::theme::Theme;
use crate::view_models::ProductListViewModel;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

pub struct ProductListWidget<'a>(pub &'a ProductListViewModel, pub &'a Theme);

impl Widget for ProductListWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (vm, theme) = (self.0, self.1);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.panel_border())
            .title(Line::styled(" Products ", theme.panel_title()));

        if let Some(placeholder) = &vm.placeholder {
            let style = if placeholder.starts_with("failed") {
                theme.error()
            } else {
                theme.muted()
            };
            Paragraph::new(Line::styled(placeholder.as_str(), style))
                .block(block)
                .render(area, buf);
            return;
        }

        let items: Vec<ListItem> = vm
            .rows
            .iter()
            .map(|row| ListItem::new(row.label.as_str()))
            .collect();

        let list = List::new(items)
            .block(block)
            .style(theme.text())
            .highlight_style(theme.selected())
            .highlight_symbol("> ");

        let mut state = ListState::default().with_selected(vm.selected);
        StatefulWidget::render(list, area, buf, &mut state);
    }
}
