use std::collections::HashSet;
use std::time::Instant;

use iced::keyboard::{key, Key, Modifiers};
use iced::widget::container;
use iced::{keyboard, window, Background, Element, Length, Subscription, Task, Theme};

mod card;
mod catalog;
mod constants;
mod format;
mod listing;
mod ui;

use card::{Card, Interaction};
use constants::{PriceRange, SortOption, APP_NAME};
use listing::{FilterOptions, Listing};
use ui::theme;

/// Which page is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Landing,
    Listings,
}

/// Main application state
struct StayFinder {
    screen: Screen,
    /// Catalog records, index-aligned with `cards`
    listings: Vec<Listing>,
    /// One card instance per listing; each owns its carousel position
    cards: Vec<Card<Message>>,
    /// Wishlist membership, owned here and pushed into card props
    favorites: HashSet<String>,
    filter: FilterOptions,
    sort: SortOption,
    /// True until the catalog task reports back; the grid shows
    /// skeletons while set
    loading: bool,
    /// Skeleton shimmer phase in [0, 1)
    shimmer: f32,
    started: Instant,
    /// Keyboard focus within the grid (activatable cards only)
    focused: Option<usize>,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked the landing page call to action
    ExploreListings,
    ShowLanding,
    /// Background catalog load completed
    CatalogLoaded(Result<Vec<Listing>, catalog::CatalogError>),
    /// A gesture inside one card, routed through `Card::interact`
    Card(usize, Interaction),
    /// A card reported its open intent
    OpenListing(String),
    /// A card reported a favorite toggle with the next state
    FavoriteToggled(String, bool),
    SortChanged(SortOption),
    PriceFilterChanged(PriceRange),
    ClearFilters,
    KeyPressed(Key, Modifiers),
    ShimmerTick(Instant),
}

impl StayFinder {
    fn new() -> (Self, Task<Message>) {
        println!("🏠 {} starting, loading the sample catalog", APP_NAME);

        (
            StayFinder {
                screen: Screen::Landing,
                listings: Vec::new(),
                cards: Vec::new(),
                favorites: HashSet::new(),
                filter: FilterOptions::default(),
                sort: SortOption::default(),
                loading: true,
                shimmer: 0.0,
                started: Instant::now(),
                focused: None,
                status: String::from("Loading stays..."),
            },
            Task::perform(catalog::load(), Message::CatalogLoaded),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ExploreListings => {
                self.screen = Screen::Listings;
                Task::none()
            }
            Message::ShowLanding => {
                self.screen = Screen::Landing;
                self.focused = None;
                Task::none()
            }
            Message::CatalogLoaded(Ok(listings)) => {
                println!("✅ Catalog ready with {} listings", listings.len());
                self.listings = listings;
                self.loading = false;
                self.rebuild_cards();
                self.resort();
                self.status = format!("{} stays", self.listings.len());
                Task::none()
            }
            Message::CatalogLoaded(Err(error)) => {
                eprintln!("⚠️  Catalog failed to load: {}", error);
                self.listings.clear();
                self.cards.clear();
                self.loading = false;
                self.status = error.to_string();
                Task::none()
            }
            Message::Card(index, interaction) => {
                if index >= self.cards.len() {
                    return Task::none();
                }
                if matches!(interaction, Interaction::Pressed) {
                    self.focused = Some(index);
                }
                if let Some(follow_up) = self.cards[index].interact(interaction) {
                    return self.update(follow_up);
                }
                Task::none()
            }
            Message::OpenListing(id) => {
                let title = self
                    .listings
                    .iter()
                    .find(|listing| listing.id == id)
                    .map(|listing| listing.title.as_str())
                    .unwrap_or("listing");
                self.status = format!("Opening {}", title);
                println!("🔎 Open requested for {}", id);
                Task::none()
            }
            Message::FavoriteToggled(id, next) => {
                if next {
                    self.favorites.insert(id.clone());
                } else {
                    self.favorites.remove(&id);
                }
                if let Some(card) = self.cards.iter_mut().find(|card| card.input().id == id) {
                    card.set_favorite(next);
                }
                self.status = if next {
                    String::from("Saved to wishlist")
                } else {
                    String::from("Removed from wishlist")
                };
                Task::none()
            }
            Message::SortChanged(sort) => {
                self.sort = sort;
                self.resort();
                Task::none()
            }
            Message::PriceFilterChanged(range) => {
                self.filter = FilterOptions::with_price_range(range);
                self.focused = None;
                Task::none()
            }
            Message::ClearFilters => {
                self.filter = FilterOptions::default();
                self.focused = None;
                Task::none()
            }
            Message::KeyPressed(key, modifiers) => self.handle_key(key, modifiers),
            Message::ShimmerTick(now) => {
                const PERIOD: f32 = 1.4;
                let elapsed = now.duration_since(self.started).as_secs_f32();
                self.shimmer = (elapsed % PERIOD) / PERIOD;
                Task::none()
            }
        }
    }

    /// Grid keyboard support: Tab cycles focus through activatable
    /// cards, Enter/Space activate the focused one, Escape drops focus.
    /// Keys are ignored on the landing page and while loading.
    fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> Task<Message> {
        if self.screen != Screen::Listings || self.loading {
            return Task::none();
        }

        match key {
            Key::Named(key::Named::Tab) => {
                self.cycle_focus(modifiers.shift());
                Task::none()
            }
            Key::Named(key::Named::Escape) => {
                self.focused = None;
                Task::none()
            }
            other => match self.focused {
                Some(index) => self.update(Message::Card(index, Interaction::KeyPressed(other))),
                None => Task::none(),
            },
        }
    }

    fn cycle_focus(&mut self, backwards: bool) {
        let candidates: Vec<usize> = (0..self.cards.len())
            .filter(|&index| {
                self.cards[index].is_activatable() && self.filter.matches(&self.listings[index])
            })
            .collect();

        if candidates.is_empty() {
            self.focused = None;
            return;
        }

        let current = self
            .focused
            .and_then(|focus| candidates.iter().position(|&index| index == focus));
        let next = match (current, backwards) {
            (None, false) => 0,
            (None, true) => candidates.len() - 1,
            (Some(at), false) => (at + 1) % candidates.len(),
            (Some(at), true) => (at + candidates.len() - 1) % candidates.len(),
        };
        self.focused = Some(candidates[next]);
    }

    /// One card per listing, favorite state folded in from the wishlist
    fn rebuild_cards(&mut self) {
        self.cards = self
            .listings
            .iter()
            .map(|listing| {
                Card::new(listing.card_input(self.favorites.contains(&listing.id)))
                    .on_open(Message::OpenListing)
                    .on_favorite_toggle(Message::FavoriteToggled)
            })
            .collect();
    }

    /// Reorder listings and cards together so each carousel position
    /// travels with its card
    fn resort(&mut self) {
        let sort = self.sort;
        let listings = std::mem::take(&mut self.listings);
        let cards = std::mem::take(&mut self.cards);

        let mut pairs: Vec<(Listing, Card<Message>)> = listings.into_iter().zip(cards).collect();
        pairs.sort_by(|a, b| listing::compare(&a.0.sort_key(), &b.0.sort_key(), sort));
        (self.listings, self.cards) = pairs.into_iter().unzip();

        self.focused = None;
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let page = match self.screen {
            Screen::Landing => ui::landing::view(),
            Screen::Listings => ui::listings::view(self),
        };

        container(page)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(Background::Color(theme::page_background())),
                ..container::Style::default()
            })
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        let keys = keyboard::on_key_press(|key, modifiers| {
            Some(Message::KeyPressed(key, modifiers))
        });

        if self.loading {
            Subscription::batch([keys, window::frames().map(Message::ShimmerTick)])
        } else {
            keys
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn main() -> iced::Result {
    iced::application(APP_NAME, StayFinder::update, StayFinder::view)
        .theme(StayFinder::theme)
        .subscription(StayFinder::subscription)
        .centered()
        .run_with(StayFinder::new)
}
