/// Detail overlay
///
/// Layers: catalog → dimmed backdrop → centered detail content.
/// Both upper layers are opaque to mouse input, which also keeps the
/// catalog underneath from scrolling while the overlay is open.
use iced::widget::text::Shaping;
use iced::widget::{
    button, center, column, container, horizontal_space, mouse_area, opaque, row, scrollable,
    stack, text,
};
use iced::{Background, Border, Color, Element, Length, Theme};

use crate::state::controller::HitRegion;
use crate::ui::card::genre_badge;
use crate::ui::cover;
use crate::ui::surface::DetailModel;
use crate::Message;

const DETAIL_WIDTH: f32 = 760.0;
const COVER_WIDTH: f32 = 220.0;
const COVER_HEIGHT: f32 = 320.0;

pub fn overlay<'a>(
    base: impl Into<Element<'a, Message>>,
    detail: &'a DetailModel,
) -> Element<'a, Message> {
    let close = button(text("✕").size(18).shaping(Shaping::Advanced))
        .on_press(Message::CloseDetail)
        .style(button::text);

    let facts = row![
        fact("Year", detail.year.to_string()),
        fact("Pages", detail.pages.to_string()),
        fact("Rating", format!("⭐ {}", detail.rating)),
        fact("Price", detail.price.clone()),
    ]
    .spacing(24);

    let body = column![
        row![genre_badge(detail.genre), horizontal_space(), close],
        text(&detail.title).size(26),
        text(format!("by {}", detail.author)).size(15),
        facts,
        text("Synopsis").size(16),
        scrollable(text(&detail.description).size(14)).height(Length::Fixed(150.0)),
    ]
    .spacing(12)
    .width(Length::Fill);

    let content = container(
        row![
            cover::view(&detail.cover, detail.genre, COVER_WIDTH, COVER_HEIGHT),
            body
        ]
        .spacing(24),
    )
    .width(DETAIL_WIDTH)
    .padding(24)
    .style(content_style);

    // Clicks on the content are reported as such so they never dismiss
    let content = mouse_area(content).on_press(Message::OverlayClicked(HitRegion::Content));

    let backdrop = center(opaque(content)).style(|_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: 0.75,
            ..Color::BLACK
        })),
        ..container::Style::default()
    });

    stack![
        base.into(),
        opaque(mouse_area(backdrop).on_press(Message::OverlayClicked(HitRegion::Backdrop)))
    ]
    .into()
}

fn fact<'a>(label: &'a str, value: String) -> Element<'a, Message> {
    column![
        text(label).size(12),
        text(value).size(15).shaping(Shaping::Advanced),
    ]
    .spacing(2)
    .into()
}

fn content_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        text_color: Some(palette.background.base.text),
        border: Border {
            radius: 16.0.into(),
            width: 1.0,
            color: palette.background.strong.color,
        },
        ..container::Style::default()
    }
}
