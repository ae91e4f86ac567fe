/// Marketing landing page
///
/// Hero section with the app name, tagline and the "Explore Listings"
/// call to action, followed by the three-feature pitch. Static markup;
/// the only message it emits is the explore intent.

use iced::font::Weight;
use iced::widget::{button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Font, Length};

use crate::constants::{APP_DESCRIPTION, APP_NAME};
use crate::ui::theme;
use crate::Message;

pub fn view<'a>() -> Element<'a, Message> {
    let heavy = Font {
        weight: Weight::Bold,
        ..Font::DEFAULT
    };

    let hero = container(
        column![
            text(APP_NAME).size(56).font(heavy),
            text(APP_DESCRIPTION).size(24),
            button(text("Explore Listings").size(18))
                .on_press(Message::ExploreListings)
                .padding([12.0, 24.0])
                .style(theme::hero_button),
        ]
        .spacing(24)
        .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .padding(80)
    .center_x(Length::Fill)
    .style(|_theme| theme::hero());

    let features = row![
        feature("\u{1f3e0}", "Unique Properties", "Discover one-of-a-kind places to stay around the world"),
        feature("\u{2b50}", "Trusted Reviews", "Read verified reviews from real guests"),
        feature("\u{1f4b0}", "Best Prices", "Find great deals on amazing properties"),
    ]
    .spacing(32)
    .padding(48);

    let pitch = column![
        text("Why Choose Us?").size(32).font(heavy).color(theme::text_primary()),
        features,
    ]
    .spacing(8)
    .align_x(Alignment::Center)
    .width(Length::Fill);

    scrollable(column![hero, pitch].width(Length::Fill)).into()
}

fn feature<'a>(icon: &'a str, title: &'a str, blurb: &'a str) -> Element<'a, Message> {
    let semibold = Font {
        weight: Weight::Semibold,
        ..Font::DEFAULT
    };

    column![
        text(icon).size(40),
        text(title).size(20).font(semibold).color(theme::text_primary()),
        text(blurb).size(15).color(theme::text_secondary()),
    ]
    .spacing(10)
    .align_x(Alignment::Center)
    .width(Length::Fixed(260.0))
    .into()
}
