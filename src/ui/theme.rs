//! Theme system for the showcase
//! Near-black canvas, glass cards and violet accents

use iced::color;
use iced::font::Weight;
use iced::widget::{button, container, scrollable};
use iced::{Background, Border, Color, Font, Gradient, Radians, Shadow, Theme, Vector};

use crate::features::Product;

// ============================================================================
// Palette
// ============================================================================

pub const BACKGROUND: Color = color!(0x050505);
pub const PRIMARY: Color = color!(0x8b5cf6);
pub const INDIGO: Color = color!(0x4f46e5);
pub const VIOLET_LIGHT: Color = color!(0xa78bfa);
pub const CARD_BG: Color = Color::from_rgba(20.0 / 255.0, 20.0 / 255.0, 25.0 / 255.0, 0.6);
pub const GLASS_BORDER: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.08);
pub const NAV_BG: Color = Color::from_rgba(10.0 / 255.0, 10.0 / 255.0, 12.0 / 255.0, 0.8);

pub const TEXT_PRIMARY: Color = color!(0xffffff);
pub const TEXT_BODY: Color = color!(0xd1d5db);
pub const TEXT_SECONDARY: Color = color!(0x9ca3af);
pub const TEXT_MUTED: Color = color!(0x6b7280);

pub const BLUE: Color = color!(0x3b82f6);
pub const BLUE_LIGHT: Color = color!(0x93c5fd);
pub const PURPLE: Color = color!(0xa855f7);
pub const PURPLE_LIGHT: Color = color!(0xd8b4fe);
pub const GREEN: Color = color!(0x4ade80);

pub const BOLD_WEIGHT: Weight = Weight::Bold;
pub const HEAVY_WEIGHT: Weight = Weight::ExtraBold;

pub const BOLD: Font = Font {
    weight: BOLD_WEIGHT,
    ..Font::DEFAULT
};

pub const HEAVY: Font = Font {
    weight: HEAVY_WEIGHT,
    ..Font::DEFAULT
};

pub const MONO: Font = Font::MONOSPACE;

/// Accent used for a product's badges, icons and glow
pub fn accent(product: Product) -> Color {
    match product {
        Product::Mallorn => BLUE,
        Product::SkinGenie => PURPLE,
    }
}

/// Lighter accent for text on accent-tinted backgrounds
pub fn accent_text(product: Product) -> Color {
    match product {
        Product::Mallorn => BLUE_LIGHT,
        Product::SkinGenie => PURPLE_LIGHT,
    }
}

pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha.clamp(0.0, 1.0),
        ..color
    }
}

/// Linear blend from `a` to `b`
pub fn mix(a: Color, b: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    Color::from_rgba(
        a.r + (b.r - a.r) * t,
        a.g + (b.g - a.g) * t,
        a.b + (b.b - a.b) * t,
        a.a + (b.a - a.a) * t,
    )
}

fn violet_gradient() -> Background {
    Background::Gradient(Gradient::Linear(
        iced::gradient::Linear::new(Radians(std::f32::consts::FRAC_PI_2))
            .add_stop(0.0, INDIGO)
            .add_stop(1.0, PRIMARY),
    ))
}

// ============================================================================
// Containers
// ============================================================================

pub fn app_background(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(BACKGROUND)),
        text_color: Some(TEXT_PRIMARY),
        ..Default::default()
    }
}

/// Floating navigation pill
pub fn nav_pill(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(NAV_BG)),
        border: Border {
            radius: 999.0.into(),
            width: 1.0,
            color: Color::from_rgba(1.0, 1.0, 1.0, 0.1),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.6),
            offset: Vector::new(0.0, 12.0),
            blur_radius: 32.0,
        },
        ..Default::default()
    }
}

pub fn logo_tile(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(violet_gradient()),
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

pub fn nav_divider(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(1.0, 1.0, 1.0, 0.1))),
        ..Default::default()
    }
}

pub fn footer_rule(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(1.0, 1.0, 1.0, 0.05))),
        ..Default::default()
    }
}

/// Accent-tinted pill (platform tags, module badge, status)
pub fn badge(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(with_alpha(accent, 0.1))),
        border: Border {
            radius: 4.0.into(),
            width: 1.0,
            color: with_alpha(accent, 0.3),
        },
        ..Default::default()
    }
}

/// Rounded square holding a product icon
pub fn icon_tile(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(with_alpha(accent, 0.1))),
        border: Border {
            radius: 12.0.into(),
            width: 1.0,
            color: with_alpha(accent, 0.2),
        },
        ..Default::default()
    }
}

/// Glass product card, lifted and tinted by `hover` (0.0 to 1.0)
pub fn product_card(hover: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(CARD_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: Border {
            radius: 16.0.into(),
            width: 1.0,
            color: mix(GLASS_BORDER, with_alpha(PRIMARY, 0.3), hover),
        },
        shadow: Shadow {
            color: with_alpha(PRIMARY, 0.15 * hover),
            offset: Vector::new(0.0, 20.0 * hover),
            blur_radius: 40.0 * hover,
        },
        ..Default::default()
    }
}

/// Frame around a screenshot, glowing in the product accent
pub fn screenshot_frame(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(BACKGROUND)),
        border: Border {
            radius: 16.0.into(),
            width: 1.0,
            color: Color::from_rgba(1.0, 1.0, 1.0, 0.1),
        },
        shadow: Shadow {
            color: with_alpha(accent, 0.35),
            offset: Vector::ZERO,
            blur_radius: 48.0,
        },
        ..Default::default()
    }
}

pub fn donation_banner(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(1.0, 1.0, 1.0, 0.05))),
        border: Border {
            radius: 16.0.into(),
            width: 1.0,
            color: Color::from_rgba(1.0, 1.0, 1.0, 0.1),
        },
        ..Default::default()
    }
}

pub fn lightbox_backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.9))),
        ..Default::default()
    }
}

// ============================================================================
// Buttons
// ============================================================================

/// Violet gradient call-to-action
pub fn primary_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(violet_gradient()),
        text_color: Color::WHITE,
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            shadow: Shadow {
                color: with_alpha(PRIMARY, 0.4),
                offset: Vector::ZERO,
                blur_radius: 20.0,
            },
            ..base
        },
        _ => base,
    }
}

/// Bordered secondary action
pub fn outline_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Color::from_rgba(1.0, 1.0, 1.0, 0.05)
        }
        _ => Color::TRANSPARENT,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: TEXT_PRIMARY,
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: Color::from_rgba(1.0, 1.0, 1.0, 0.1),
        },
        ..Default::default()
    }
}

/// Borderless button that brightens on hover
pub fn ghost_button(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, text_color) = match status {
        button::Status::Hovered | button::Status::Pressed => {
            (Color::from_rgba(1.0, 1.0, 1.0, 0.05), TEXT_PRIMARY)
        }
        _ => (Color::TRANSPARENT, TEXT_SECONDARY),
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            radius: 999.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Fully transparent wrapper (cards, logo)
pub fn bare_button(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: TEXT_PRIMARY,
        ..Default::default()
    }
}

/// Theme thumbnail, outlined in violet when active
pub fn thumbnail(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);
        let border_color = if active {
            PRIMARY
        } else if hovered {
            Color::from_rgba(1.0, 1.0, 1.0, 0.3)
        } else {
            Color::from_rgba(1.0, 1.0, 1.0, 0.1)
        };
        button::Style {
            background: Some(Background::Color(if active {
                with_alpha(PRIMARY, 0.12)
            } else {
                CARD_BG
            })),
            text_color: if active { TEXT_PRIMARY } else { TEXT_SECONDARY },
            border: Border {
                radius: 10.0.into(),
                width: if active { 2.0 } else { 1.0 },
                color: border_color,
            },
            ..Default::default()
        }
    }
}

/// Text link in the donation banner
pub fn donate_link(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => color!(0x86efac),
        _ => GREEN,
    };
    button::Style {
        background: None,
        text_color,
        ..Default::default()
    }
}

// ============================================================================
// Scrollable
// ============================================================================

/// Page scrollable with a thin dark scroller
pub fn page_scrollable(_theme: &Theme, _status: scrollable::Status) -> scrollable::Style {
    let rail = scrollable::Rail {
        background: Some(Background::Color(Color::BLACK)),
        border: Border::default(),
        scroller: scrollable::Scroller {
            background: Background::Color(color!(0x333333)),
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
        },
    };

    scrollable::Style {
        container: container::Style::default(),
        vertical_rail: rail.clone(),
        horizontal_rail: rail,
        gap: None,
        auto_scroll: scrollable::AutoScroll {
            background: Background::Color(CARD_BG),
            border: Border::default(),
            shadow: Shadow::default(),
            icon: TEXT_MUTED,
        },
    }
}
