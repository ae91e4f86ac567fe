/// Loading placeholder for a listing card
///
/// Matches the card geometry (photo region plus three text bars) while
/// the backing listing is not yet available. The skeleton holds no
/// state of its own: the shimmer phase in `[0, 1)` is supplied by the
/// host, which advances it from its animation subscription and swaps
/// the skeleton for a real card when the data arrives.

use iced::widget::{column, container, row, Space};
use iced::{Element, Length};

use super::{CARD_WIDTH, MEDIA_HEIGHT};
use crate::ui::theme;

/// Build one skeleton card at the given shimmer phase
pub fn card_skeleton<'a, Message: 'a>(phase: f32) -> Element<'a, Message> {
    // Triangular wave so the highlight sweeps back and forth instead of
    // snapping at the loop point
    let sweep = 1.0 - (phase * 2.0 - 1.0).abs();

    let media = container(Space::new(Length::Fill, Length::Fill))
        .width(Length::Fill)
        .height(Length::Fixed(MEDIA_HEIGHT))
        .style(move |_theme| theme::skeleton_block(sweep));

    let lines = column![
        text_bar(7, sweep),
        text_bar(5, sweep),
        text_bar(4, sweep),
    ]
    .spacing(8)
    .padding(12);

    container(column![media, lines])
        .width(Length::Fixed(CARD_WIDTH))
        .style(|_theme| theme::card_surface(false))
        .into()
}

/// One placeholder text line, `tenths/10` of the card width wide
fn text_bar<'a, Message: 'a>(tenths: u16, sweep: f32) -> Element<'a, Message> {
    row![
        container(Space::new(Length::Fill, 14))
            .width(Length::FillPortion(tenths))
            .style(move |_theme| theme::skeleton_bar(sweep)),
        Space::new(Length::FillPortion(10 - tenths), 14),
    ]
    .into()
}
