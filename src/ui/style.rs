/// Presentation constants: genre decorations and price formatting

use iced::Color;

use crate::state::data::Genre;

/// Decorative look of one genre
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenreStyle {
    pub icon: &'static str,
    /// Gradient start (top of the cover placeholder, badge background)
    pub from: Color,
    /// Gradient end (bottom of the cover placeholder)
    pub to: Color,
}

fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::from_rgb8(r, g, b)
}

pub fn genre_style(genre: Genre) -> GenreStyle {
    let (icon, from, to) = match genre {
        Genre::Fiction => ("📖", rgb(0x66, 0x7e, 0xea), rgb(0x76, 0x4b, 0xa2)),
        Genre::NonFiction => ("📰", rgb(0x43, 0x63, 0x8a), rgb(0x2c, 0x3e, 0x50)),
        Genre::SelfHelp => ("🌱", rgb(0x11, 0x99, 0x8e), rgb(0x38, 0xef, 0x7d)),
        Genre::Science => ("🔬", rgb(0x00, 0x9f, 0xfd), rgb(0x2a, 0x2a, 0x72)),
        Genre::History => ("🏛", rgb(0xb7, 0x79, 0x1f), rgb(0x8e, 0x44, 0x2d)),
        Genre::Biography => ("👤", rgb(0xf0, 0x93, 0xfb), rgb(0xf5, 0x57, 0x6c)),
        Genre::Business => ("💼", rgb(0x4f, 0xac, 0xfe), rgb(0x00, 0xf2, 0xfe)),
        Genre::Technology => ("💻", rgb(0x30, 0xcf, 0xd0), rgb(0x33, 0x08, 0x67)),
        Genre::Other => ("📚", rgb(0x75, 0x75, 0x75), rgb(0x42, 0x42, 0x42)),
    };

    GenreStyle { icon, from, to }
}

/// Format a price in whole Rupiah the way the `id-ID` locale does,
/// with no fractional digits: `120000` becomes `"Rp 120.000"`.
///
/// The separator after `Rp` is a no-break space.
pub fn format_price(price: i64) -> String {
    let digits = price.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    let sign = if price < 0 { "-" } else { "" };
    format!("{sign}Rp\u{a0}{grouped}")
}
