/// Listing card component
///
/// This module owns everything a single listing card does:
/// - caller-supplied props (input.rs)
/// - the per-instance carousel index and its wrap-around transitions
/// - capability-gated intents (open, favorite-toggle) reported to the host
/// - the rendered card surface, and the loading skeleton (skeleton.rs)
///
/// The card keeps no external state: favorite status and "what opening a
/// card means" belong to the caller and flow back out as host messages.

pub mod input;
pub mod skeleton;

use std::fmt;

use iced::alignment::{Horizontal, Vertical};
use iced::font::Weight;
use iced::keyboard::{self, key};
use iced::widget::tooltip::Position;
use iced::widget::{button, column, container, image, mouse_area, row, text, tooltip, Row, Space, Stack};
use iced::{mouse, Alignment, ContentFit, Element, Font, Length};

use crate::format;
use crate::ui::theme;
use input::CardInput;

/// Card width in the grid
pub const CARD_WIDTH: f32 = 320.0;
/// Height of the photo region (3:2 against the card width)
pub const MEDIA_HEIGHT: f32 = 213.0;

/// Low-level gestures the rendered card can produce.
///
/// The host maps these back into [`Card::interact`]; only `interact`
/// decides whether a gesture becomes a host message.
#[derive(Debug, Clone)]
pub enum Interaction {
    /// The card surface itself was clicked
    Pressed,
    /// A key arrived while the card held keyboard focus
    KeyPressed(keyboard::Key),
    /// The favorite control was clicked
    FavoritePressed,
    NextPhoto,
    PrevPhoto,
}

/// One listing card instance.
///
/// Generic over the host's message type: the optional `on_open` and
/// `on_favorite_toggle` closures translate card intents into host
/// messages. A missing closure removes the matching affordance from the
/// rendered view entirely (it is not merely disabled).
pub struct Card<Message> {
    input: CardInput,
    /// Carousel position, always in `0..input.image_slots()`
    active_index: usize,
    on_open: Option<Box<dyn Fn(String) -> Message>>,
    on_favorite_toggle: Option<Box<dyn Fn(String, bool) -> Message>>,
}

impl<Message> Card<Message> {
    pub fn new(input: CardInput) -> Self {
        Card {
            input,
            active_index: 0,
            on_open: None,
            on_favorite_toggle: None,
        }
    }

    /// Make the card activatable: clicking it (or pressing Enter/Space
    /// while it has focus) produces `f(id)`.
    pub fn on_open(mut self, f: impl Fn(String) -> Message + 'static) -> Self {
        self.on_open = Some(Box::new(f));
        self
    }

    /// Render the favorite control; pressing it produces
    /// `f(id, !is_favorite)`.
    pub fn on_favorite_toggle(mut self, f: impl Fn(String, bool) -> Message + 'static) -> Self {
        self.on_favorite_toggle = Some(Box::new(f));
        self
    }

    pub fn input(&self) -> &CardInput {
        &self.input
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Whether the card participates in the keyboard focus ring
    pub fn is_activatable(&self) -> bool {
        self.on_open.is_some()
    }

    /// Carousel controls only exist with more than one slot
    pub fn has_navigation(&self) -> bool {
        self.input.image_slots() > 1
    }

    /// Replace the props. The carousel resets to the first photo only
    /// when the image list itself changed; otherwise the position is
    /// kept (the old index could be out of range for a new list).
    pub fn set_input(&mut self, input: CardInput) {
        if input.images != self.input.images {
            self.active_index = 0;
        }
        self.input = input;
    }

    pub fn set_favorite(&mut self, favorite: bool) {
        self.input.is_favorite = favorite;
    }

    /// Apply a gesture. Carousel moves mutate local state and report
    /// nothing; open and favorite gestures produce a host message when
    /// the matching capability was supplied. Exactly one message per
    /// qualifying gesture, never two.
    pub fn interact(&mut self, interaction: Interaction) -> Option<Message> {
        match interaction {
            Interaction::Pressed => self.open_intent(),
            Interaction::KeyPressed(key) if is_activation_key(&key) => self.open_intent(),
            Interaction::KeyPressed(_) => None,
            Interaction::FavoritePressed => {
                let next = !self.input.is_favorite;
                self.on_favorite_toggle
                    .as_ref()
                    .map(|f| f(self.input.id.clone(), next))
            }
            Interaction::NextPhoto => {
                let slots = self.input.image_slots();
                if slots > 1 {
                    self.active_index = (self.active_index + 1) % slots;
                }
                None
            }
            Interaction::PrevPhoto => {
                let slots = self.input.image_slots();
                if slots > 1 {
                    self.active_index = (self.active_index + slots - 1) % slots;
                }
                None
            }
        }
    }

    fn open_intent(&self) -> Option<Message> {
        self.on_open.as_ref().map(|f| f(self.input.id.clone()))
    }

    /// Action label for the favorite control, reflecting its effect
    fn favorite_label(&self) -> &'static str {
        if self.input.is_favorite {
            "Remove from wishlist"
        } else {
            "Save to wishlist"
        }
    }

    /// Build the card surface.
    ///
    /// The root is wrapped in a `mouse_area` only when the card is
    /// activatable, so a non-clickable card exposes no interactive
    /// surface at all. Nested controls (favorite, prev/next) capture
    /// their press before the card surface sees it, so pressing them
    /// never also activates the card.
    pub fn view(&self, focused: bool) -> Element<'_, Interaction> {
        let surface = container(column![self.media(), self.body()])
            .width(Length::Fixed(CARD_WIDTH))
            .style(move |_theme| theme::card_surface(focused))
            .id(container::Id::new(format!("card-{}", self.input.id)));

        if self.is_activatable() {
            mouse_area(surface)
                .on_press(Interaction::Pressed)
                .interaction(mouse::Interaction::Pointer)
                .into()
        } else {
            surface.into()
        }
    }

    /// Photo region: active image plus badge, favorite, navigation and
    /// position-dot overlays
    fn media(&self) -> Element<'_, Interaction> {
        let slots = self.input.image_slots();

        // One image is active per pass; empty slots get the built-in
        // "No image" placeholder for visual parity.
        let photo: Element<'_, Interaction> = match self.input.image_at(self.active_index) {
            Some(path) => image(image::Handle::from_path(path))
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(ContentFit::Cover)
                .into(),
            None => container(text("No image").size(20).color(theme::text_muted()))
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .into(),
        };

        let mut layers: Vec<Element<'_, Interaction>> = vec![container(photo)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| theme::media_backdrop())
            .into()];

        if self.input.is_new || self.input.is_superhost || self.input.date_range.is_some() {
            let mut badges = row![].spacing(6);
            if self.input.is_new {
                badges = badges.push(badge("New"));
            }
            if self.input.is_superhost {
                badges = badges.push(badge("Superhost"));
            }
            if let Some(range) = self.input.date_range.as_deref() {
                badges = badges.push(badge(range));
            }
            layers.push(container(badges).padding(8).into());
        }

        if self.on_favorite_toggle.is_some() {
            let glyph = if self.input.is_favorite { "\u{2665}" } else { "\u{2661}" };
            let heart = text(glyph).size(18).color(if self.input.is_favorite {
                theme::favorite_active()
            } else {
                theme::text_primary()
            });
            let control = tooltip(
                button(heart)
                    .on_press(Interaction::FavoritePressed)
                    .padding(8)
                    .style(theme::overlay_button),
                text(self.favorite_label()).size(12),
                Position::Bottom,
            );
            layers.push(
                container(control)
                    .width(Length::Fill)
                    .align_x(Horizontal::Right)
                    .padding(8)
                    .into(),
            );
        }

        if slots > 1 {
            let prev = tooltip(
                button(text("\u{2039}").size(18))
                    .on_press(Interaction::PrevPhoto)
                    .padding([2.0, 10.0])
                    .style(theme::overlay_button),
                text("Previous photo").size(12),
                Position::Bottom,
            );
            let next = tooltip(
                button(text("\u{203a}").size(18))
                    .on_press(Interaction::NextPhoto)
                    .padding([2.0, 10.0])
                    .style(theme::overlay_button),
                text("Next photo").size(12),
                Position::Bottom,
            );
            layers.push(
                container(
                    row![prev, Space::with_width(Length::Fill), next]
                        .width(Length::Fill)
                        .align_y(Alignment::Center),
                )
                .width(Length::Fill)
                .height(Length::Fill)
                .align_y(Vertical::Center)
                .padding(8)
                .into(),
            );

            let dots = Row::with_children(
                (0..slots).map(|slot| dot(slot == self.active_index)),
            )
            .spacing(6);
            layers.push(
                container(dots)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(Horizontal::Center)
                    .align_y(Vertical::Bottom)
                    .padding(8)
                    .into(),
            );
        }

        Stack::with_children(layers)
            .width(Length::Fixed(CARD_WIDTH))
            .height(Length::Fixed(MEDIA_HEIGHT))
            .into()
    }

    /// Text block under the photo: title, rating, location, price
    fn body(&self) -> Element<'_, Interaction> {
        let semibold = Font {
            weight: Weight::Semibold,
            ..Font::DEFAULT
        };

        let header = row![text(&self.input.title)
            .size(16)
            .font(semibold)
            .color(theme::text_primary())
            .width(Length::Fill)]
        .push_maybe(self.rating_block())
        .spacing(8)
        .align_y(Alignment::Center);

        let location_text = format::resolve_location(self.input.location.as_ref());

        let price = row![
            text(format::format_price(
                self.input.price_per_night,
                self.input.currency(),
                None,
            ))
            .size(15)
            .font(Font {
                weight: Weight::Bold,
                ..Font::DEFAULT
            })
            .color(theme::text_primary()),
            text("night").size(15).color(theme::text_secondary()),
        ]
        .spacing(6)
        .align_y(Alignment::Center);

        column![header]
            .push_maybe((!location_text.is_empty()).then(|| {
                text(location_text).size(14).color(theme::text_secondary())
            }))
            .push(price)
            .spacing(6)
            .padding(12)
            .width(Length::Fixed(CARD_WIDTH))
            .into()
    }

    /// Star, rating and optional review count. Gated solely on
    /// `rating`: a review count with no rating renders nothing.
    fn rating_block(&self) -> Option<Element<'_, Interaction>> {
        let rating = self.input.rating?;

        let mut block = row![
            text("\u{2605}").size(14).color(theme::text_primary()),
            text(format::display_rating(rating))
                .size(14)
                .color(theme::text_primary()),
        ]
        .spacing(4)
        .align_y(Alignment::Center);

        if let Some(count) = self.input.review_count {
            block = block.push(
                text(format!("({})", count))
                    .size(14)
                    .color(theme::text_secondary()),
            );
        }

        Some(tooltip(block, text(format::rating_label(rating)).size(12), Position::Top).into())
    }
}

impl<Message> fmt::Debug for Card<Message> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Card")
            .field("id", &self.input.id)
            .field("active_index", &self.active_index)
            .field("activatable", &self.is_activatable())
            .finish()
    }
}

/// Enter and Space activate a focused card, matching button semantics
fn is_activation_key(key: &keyboard::Key) -> bool {
    match key {
        keyboard::Key::Named(key::Named::Enter) | keyboard::Key::Named(key::Named::Space) => true,
        keyboard::Key::Character(c) => c.as_str() == " ",
        _ => false,
    }
}

fn badge(label: &str) -> Element<'_, Interaction> {
    container(text(label).size(12).color(theme::text_primary()))
        .padding([4.0, 8.0])
        .style(|_theme| theme::badge())
        .into()
}

fn dot(active: bool) -> Element<'static, Interaction> {
    container(Space::new(6, 6))
        .style(move |_theme| theme::carousel_dot(active))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::input::Location;

    #[derive(Debug, Clone, PartialEq)]
    enum TestMessage {
        Open(String),
        Favorite(String, bool),
    }

    fn photo_input(count: usize) -> CardInput {
        let mut input = CardInput::new("listing-7", "Seaside Cabin", 120.0);
        input.images = (0..count).map(|i| format!("photos/{}.jpg", i)).collect();
        input
    }

    fn card(count: usize) -> Card<TestMessage> {
        Card::new(photo_input(count))
            .on_open(TestMessage::Open)
            .on_favorite_toggle(TestMessage::Favorite)
    }

    #[test]
    fn test_next_cycles_back_to_start() {
        let mut card = card(4);
        for _ in 0..4 {
            assert_eq!(card.interact(Interaction::NextPhoto), None);
        }
        assert_eq!(card.active_index(), 0);
    }

    #[test]
    fn test_prev_wraps_to_last_photo() {
        let mut card = card(3);
        card.interact(Interaction::PrevPhoto);
        assert_eq!(card.active_index(), 2);
        card.interact(Interaction::PrevPhoto);
        assert_eq!(card.active_index(), 1);
    }

    #[test]
    fn test_empty_images_disable_navigation() {
        let mut card = card(0);
        assert!(!card.has_navigation());
        assert_eq!(card.input().image_slots(), 1);
        card.interact(Interaction::NextPhoto);
        card.interact(Interaction::PrevPhoto);
        assert_eq!(card.active_index(), 0);
    }

    #[test]
    fn test_favorite_press_reports_next_state_only() {
        let mut card = card(1);
        let message = card.interact(Interaction::FavoritePressed);
        // Reports the toggle, and never doubles as an open intent
        assert_eq!(
            message,
            Some(TestMessage::Favorite("listing-7".into(), true))
        );

        card.set_favorite(true);
        assert_eq!(
            card.interact(Interaction::FavoritePressed),
            Some(TestMessage::Favorite("listing-7".into(), false))
        );
    }

    #[test]
    fn test_missing_capabilities_silently_ignore_gestures() {
        let mut bare: Card<TestMessage> = Card::new(photo_input(2));
        assert!(!bare.is_activatable());
        assert_eq!(bare.interact(Interaction::Pressed), None);
        assert_eq!(bare.interact(Interaction::FavoritePressed), None);
        assert_eq!(
            bare.interact(Interaction::KeyPressed(keyboard::Key::Named(
                key::Named::Enter
            ))),
            None
        );
    }

    #[test]
    fn test_keyboard_activation() {
        let mut card = card(1);
        assert_eq!(
            card.interact(Interaction::KeyPressed(keyboard::Key::Named(
                key::Named::Enter
            ))),
            Some(TestMessage::Open("listing-7".into()))
        );
        assert_eq!(
            card.interact(Interaction::KeyPressed(keyboard::Key::Named(
                key::Named::Space
            ))),
            Some(TestMessage::Open("listing-7".into()))
        );
        assert_eq!(
            card.interact(Interaction::KeyPressed(keyboard::Key::Named(
                key::Named::Escape
            ))),
            None
        );
    }

    #[test]
    fn test_pressed_round_trips_the_id() {
        let mut card = card(1);
        assert_eq!(
            card.interact(Interaction::Pressed),
            Some(TestMessage::Open("listing-7".into()))
        );
    }

    #[test]
    fn test_index_resets_only_when_images_change() {
        let mut card = card(3);
        card.interact(Interaction::NextPhoto);
        assert_eq!(card.active_index(), 1);

        // Same image list: position survives a props refresh
        let mut refreshed = photo_input(3);
        refreshed.is_favorite = true;
        card.set_input(refreshed);
        assert_eq!(card.active_index(), 1);

        // New image list: old index may be out of range, reset to 0
        card.set_input(photo_input(2));
        assert_eq!(card.active_index(), 0);
    }

    #[test]
    fn test_review_count_alone_shows_no_rating_block() {
        let mut input = photo_input(1);
        input.rating = None;
        input.review_count = Some(12);
        let card: Card<TestMessage> = Card::new(input);

        // The count must never render on its own
        assert!(card.rating_block().is_none());
        let _ = card.view(false);
    }

    #[test]
    fn test_rating_renders_without_a_review_count() {
        let mut input = photo_input(1);
        input.rating = Some(4.2);
        input.review_count = None;
        let card: Card<TestMessage> = Card::new(input);

        assert!(card.rating_block().is_some());
        let _ = card.view(false);
    }

    #[test]
    fn test_view_builds_for_every_capability_mix() {
        let full = card(3);
        let _ = full.view(true);

        let mut plain: Card<TestMessage> = Card::new(photo_input(0));
        plain.set_input({
            let mut input = photo_input(0);
            input.rating = Some(4.5);
            input.review_count = Some(12);
            input.location = Some(Location::Parts {
                city: Some("Paris".into()),
                region: None,
                country: Some("France".into()),
            });
            input
        });
        let _ = plain.view(false);
    }
}
