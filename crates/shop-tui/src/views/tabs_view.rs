use crate::theme::Theme;
use crate::view_models::TabsViewModel;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

/// Widget wrapper for rendering the variant tabs from view model
pub struct TabsWidget<'a>(pub &'a TabsViewModel, pub &'a Theme);

impl Widget for TabsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }

        let (vm, theme) = (self.0, self.1);

        for x in area.x..area.x + area.width {
            buf[(x, area.y)].set_bg(theme.bg_secondary);
        }

        let mut x = area.x;
        for tab in &vm.tabs {
            let padded_text = format!("  {}  ", tab.text);
            let width = padded_text.chars().count() as u16;
            if x + width > area.x + area.width {
                break;
            }
            buf.set_string(x, area.y, &padded_text, theme.tab(tab.active));
            x += width + 1;
        }
    }
}
