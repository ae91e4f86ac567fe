/// Shared palette and widget styles
///
/// Colors come from the product's gray/blue scale; every style the card,
/// skeleton and pages need lives here so the widgets themselves stay
/// free of raw color values.

use iced::widget::{button, container};
use iced::{Background, Border, Color, Degrees, Gradient, Shadow, Vector};

pub fn text_primary() -> Color {
    Color::from_rgb8(0x11, 0x18, 0x27)
}

pub fn text_secondary() -> Color {
    Color::from_rgb8(0x4b, 0x55, 0x63)
}

pub fn text_muted() -> Color {
    Color::from_rgb8(0x9c, 0xa3, 0xaf)
}

pub fn surface() -> Color {
    Color::WHITE
}

pub fn page_background() -> Color {
    Color::from_rgb8(0xf9, 0xfa, 0xfb)
}

/// Backdrop behind photos and the "No image" placeholder
pub fn media_gray() -> Color {
    Color::from_rgb8(0xf3, 0xf4, 0xf6)
}

/// Shimmer highlight and text-bar gray
pub fn skeleton_gray() -> Color {
    Color::from_rgb8(0xe5, 0xe7, 0xeb)
}

pub fn accent() -> Color {
    Color::from_rgb8(0x25, 0x63, 0xeb)
}

fn accent_dark() -> Color {
    Color::from_rgb8(0x1e, 0x40, 0xaf)
}

pub fn favorite_active() -> Color {
    Color::from_rgb8(0xe1, 0x1d, 0x48)
}

/// Elevated white card with rounded corners; a focused card carries the
/// accent ring so keyboard users can see where they are
pub fn card_surface(focused: bool) -> container::Style {
    let border = if focused {
        Border {
            color: accent(),
            width: 2.0,
            radius: 12.0.into(),
        }
    } else {
        Border {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.04),
            width: 1.0,
            radius: 12.0.into(),
        }
    };

    container::Style {
        background: Some(Background::Color(surface())),
        border,
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.08),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 12.0,
        },
        ..container::Style::default()
    }
}

pub fn media_backdrop() -> container::Style {
    container::Style {
        background: Some(Background::Color(media_gray())),
        ..container::Style::default()
    }
}

/// White pill badge over the photo (New / Superhost / date range)
pub fn badge() -> container::Style {
    container::Style {
        background: Some(Background::Color(surface())),
        border: Border {
            radius: 999.0.into(),
            ..Border::default()
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.08),
            offset: Vector::new(0.0, 1.0),
            blur_radius: 3.0,
        },
        ..container::Style::default()
    }
}

/// Round translucent-white button floating over the photo (favorite,
/// prev/next)
pub fn overlay_button(_theme: &iced::Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => 1.0,
        _ => 0.9,
    };
    button::Style {
        background: Some(Background::Color(Color::from_rgba(1.0, 1.0, 1.0, alpha))),
        text_color: text_primary(),
        border: Border {
            radius: 999.0.into(),
            ..Border::default()
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.12),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 6.0,
        },
    }
}

/// Carousel position dot; the active slot is solid white
pub fn carousel_dot(active: bool) -> container::Style {
    let color = if active {
        Color::WHITE
    } else {
        Color::from_rgba(1.0, 1.0, 1.0, 0.7)
    };
    container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: 3.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Shimmering photo region of the skeleton; `sweep` is 0..1
pub fn skeleton_block(sweep: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(lerp(media_gray(), skeleton_gray(), sweep))),
        ..container::Style::default()
    }
}

/// Shimmering text bar of the skeleton
pub fn skeleton_bar(sweep: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(lerp(
            skeleton_gray(),
            media_gray(),
            sweep * 0.6,
        ))),
        border: Border {
            radius: 6.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Blue gradient backdrop for the landing hero
pub fn hero() -> container::Style {
    container::Style {
        background: Some(Background::Gradient(Gradient::Linear(
            iced::gradient::Linear::new(Degrees(135.0))
                .add_stop(0.0, accent())
                .add_stop(1.0, accent_dark()),
        ))),
        text_color: Some(Color::WHITE),
        ..container::Style::default()
    }
}

/// Prominent white call-to-action button on the hero
pub fn hero_button(_theme: &iced::Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Color::from_rgb8(0xef, 0xf6, 0xff)
        }
        _ => Color::WHITE,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: accent(),
        border: Border {
            radius: 8.0.into(),
            ..Border::default()
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.15),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
    }
}

/// Linear blend between two colors
fn lerp(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    Color {
        r: from.r + (to.r - from.r) * t,
        g: from.g + (to.g - from.g) * t,
        b: from.b + (to.b - from.b) * t,
        a: from.a + (to.a - from.a) * t,
    }
}
