//! Views
//!
//! Layout of the screen, top to bottom: tab bar, cart summary, product
//! list, key hints.

mod cart_view;
mod footer_view;
mod product_list_view;
mod tabs_view;

use crate::theme::Theme;
use crate::view_models::AppViewModel;
use cart_view::CartWidget;
use footer_view::FooterWidget;
use product_list_view::ProductListWidget;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Block,
    Frame,
};
use tabs_view::TabsWidget;

pub fn render(vm: &AppViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    f.render_widget(Block::default().style(theme.text().bg(theme.bg_primary)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    f.render_widget(TabsWidget(&vm.tabs, theme), chunks[0]);
    f.render_widget(CartWidget(&vm.shop.cart, theme), chunks[1]);
    f.render_widget(ProductListWidget(&vm.shop.product_list, theme), chunks[2]);
    f.render_widget(FooterWidget(vm.shop.description, theme), chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FetchStatus;
    use crate::domain_models::Product;
    use crate::state::ProductListState;
    use crate::variants::Tab;
    use crate::view_models::{CartViewModel, ProductListViewModel, ShopViewModel, TabsViewModel};
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(vm: &AppViewModel) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal
            .draw(|f| render(vm, &Theme::default(), f.area(), f))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_cart_and_products() {
        let products = vec![Product::new(1, "Widget"), Product::new(2, "Gadget")];
        let vm = AppViewModel {
            tabs: TabsViewModel::new(Tab::Store),
            shop: ShopViewModel {
                description: "state read straight from a store",
                cart: CartViewModel::new(2),
                product_list: ProductListViewModel::new(
                    &products,
                    &ProductListState::default(),
                    &FetchStatus::Loaded,
                ),
            },
        };

        let text = screen_text(&vm);
        assert!(text.contains("2 store"));
        assert!(text.contains("shopping list count: 2"));
        assert!(text.contains("Gadget  [add to cart]"));
    }

    #[test]
    fn test_renders_placeholder() {
        let vm = AppViewModel {
            tabs: TabsViewModel::new(Tab::State),
            shop: ShopViewModel {
                description: "state held by the view itself",
                cart: CartViewModel::new(0),
                product_list: ProductListViewModel::new(
                    &[],
                    &ProductListState::default(),
                    &FetchStatus::Loading,
                ),
            },
        };

        assert!(screen_text(&vm).contains("loading products..."));
    }
}
