/// Listings browse page
///
/// Toolbar (back, sort order, price filter), then a wrapping grid of
/// listing cards. While the catalog loads the grid shows one page of
/// shimmering skeletons; once data arrives the caller swaps them for
/// populated cards.

use iced::widget::{button, column, container, pick_list, row, scrollable, text, Space};
use iced::{Alignment, Element, Length};
use iced_aw::Wrap;

use crate::card::skeleton::card_skeleton;
use crate::constants::{SortOption, ITEMS_PER_PAGE, PRICE_RANGES};
use crate::ui::theme;
use crate::{Message, StayFinder};

pub fn view(app: &StayFinder) -> Element<'_, Message> {
    let toolbar = row![
        button(text("\u{2039} Home").size(14)).on_press(Message::ShowLanding),
        pick_list(&SortOption::ALL[..], Some(app.sort), Message::SortChanged)
            .text_size(14),
        pick_list(&PRICE_RANGES[..], app.filter.price, Message::PriceFilterChanged)
            .placeholder("Any price")
            .text_size(14),
    ]
    .push_maybe(
        app.filter
            .price
            .map(|_| button(text("Clear").size(14)).on_press(Message::ClearFilters)),
    )
    .push(Space::with_width(Length::Fill))
    .push(text(&app.status).size(14).color(theme::text_secondary()))
    .spacing(12)
    .align_y(Alignment::Center)
    .padding(16);

    let mut tiles: Vec<Element<'_, Message>> = Vec::new();

    if app.loading {
        for _ in 0..ITEMS_PER_PAGE {
            tiles.push(card_skeleton(app.shimmer));
        }
    } else {
        for (index, card) in app.cards.iter().enumerate() {
            if !app.filter.matches(&app.listings[index]) {
                continue;
            }
            let focused = app.focused == Some(index);
            tiles.push(
                card.view(focused)
                    .map(move |interaction| Message::Card(index, interaction)),
            );
        }
    }

    let content: Element<'_, Message> = if tiles.is_empty() {
        container(
            text("No stays match those filters.")
                .size(16)
                .color(theme::text_secondary()),
        )
        .padding(48)
        .center_x(Length::Fill)
        .into()
    } else {
        container(Wrap::with_elements(tiles).spacing(16.0).line_spacing(16.0))
            .padding(16)
            .center_x(Length::Fill)
            .into()
    };

    scrollable(column![toolbar, content].width(Length::Fill)).into()
}
