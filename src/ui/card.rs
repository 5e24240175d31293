use iced::widget::text::Shaping;
use iced::widget::{button, column, container, horizontal_space, row, stack, text};
use iced::{Background, Border, Color, Element, Length, Theme};

use crate::state::data::Genre;
use crate::ui::cover;
use crate::ui::style::genre_style;
use crate::ui::surface::CardModel;
use crate::Message;

pub const CARD_WIDTH: f32 = 200.0;
const COVER_HEIGHT: f32 = 270.0;

/// One book card. Pressing anywhere on it opens the detail overlay.
pub fn view(card: &CardModel) -> Element<'_, Message> {
    let cover_area = stack![
        cover::view(&card.cover, card.genre, CARD_WIDTH, COVER_HEIGHT),
        container(row![
            genre_badge(card.genre),
            horizontal_space(),
            rating_badge(card.rating),
        ])
        .width(Length::Fill)
        .padding(8),
    ];

    let info = column![
        text(&card.title).size(16),
        text(format!("by {}", card.author)).size(13),
        row![
            text(format!("📅 {}", card.year)).size(12).shaping(Shaping::Advanced),
            text(format!("📄 {} pages", card.pages)).size(12).shaping(Shaping::Advanced),
        ]
        .spacing(12),
        text(&card.price).size(15),
        text("View details →").size(13),
    ]
    .spacing(6)
    .padding(12);

    button(column![cover_area, info])
        .width(CARD_WIDTH)
        .padding(0)
        .on_press(Message::CardActivated(card.id))
        .style(card_style)
        .into()
}

/// Genre label on the genre's accent color
pub fn genre_badge<'a>(genre: Genre) -> Element<'a, Message> {
    let accent = genre_style(genre).from;

    container(text(genre.as_str()).size(11))
        .padding([2, 8])
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(accent)),
            text_color: Some(Color::WHITE),
            border: Border {
                radius: 8.0.into(),
                ..Border::default()
            },
            ..container::Style::default()
        })
        .into()
}

fn rating_badge<'a>(rating: f32) -> Element<'a, Message> {
    container(text(format!("⭐ {}", rating)).size(11).shaping(Shaping::Advanced))
        .padding([2, 8])
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(Color {
                a: 0.6,
                ..Color::BLACK
            })),
            text_color: Some(Color::WHITE),
            border: Border {
                radius: 8.0.into(),
                ..Border::default()
            },
            ..container::Style::default()
        })
        .into()
}

fn card_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    let (background, border) = match status {
        button::Status::Hovered | button::Status::Pressed => {
            (palette.background.weak.color, palette.primary.base.color)
        }
        _ => (palette.background.base.color, palette.background.strong.color),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette.background.base.text,
        border: Border {
            radius: 12.0.into(),
            width: 1.0,
            color: border,
        },
        ..button::Style::default()
    }
}
