/// Scheme cards and the results grid
use iced::widget::{button, column, container, mouse_area, row, text, Column};
use iced::{Alignment, Element, Length};
use iced_aw::Wrap;

use crate::config::{CARD_PREVIEW_HEIGHT, CARD_WIDTH};
use crate::state::data::{ImageRef, Scheme};
use crate::Message;

/// One card: name, subtitle, image area and actions.
/// Pressing anywhere outside the buttons opens the detail dialog.
pub fn scheme_card(scheme: &Scheme) -> Element<'_, Message> {
    let heading = column![
        text(&scheme.name).size(18),
        text(scheme.subtitle()).size(12),
    ]
    .spacing(4);

    let actions = row![
        button("Просмотр")
            .on_press(Message::OpenScheme(scheme.id))
            .style(button::secondary)
            .width(Length::Fill)
            .padding(8),
        button("⬇")
            .on_press(Message::SaveScheme(scheme.id))
            .style(button::secondary)
            .padding(8),
    ]
    .spacing(8);

    let body = column![heading, preview(&scheme.image, CARD_PREVIEW_HEIGHT), actions]
        .spacing(12)
        .padding(16)
        .width(CARD_WIDTH);

    mouse_area(container(body).style(container::rounded_box))
        .on_press(Message::OpenScheme(scheme.id))
        .into()
}

/// Scheme image, or a neutral panel for records without a file
pub fn preview(image: &ImageRef, height: f32) -> Element<'_, Message> {
    match image {
        ImageRef::Local(path) => iced::widget::image(iced::widget::image::Handle::from_path(path.clone()))
            .width(Length::Fill)
            .height(height)
            .into(),
        ImageRef::Placeholder => container(text("🖼").size(height / 4.0))
            .width(Length::Fill)
            .height(height)
            .center_x(Length::Fill)
            .center_y(height)
            .style(container::bordered_box)
            .into(),
    }
}

/// Responsive grid of cards
pub fn scheme_grid<'a>(schemes: Vec<&'a Scheme>) -> Element<'a, Message> {
    let cards = schemes.into_iter().map(scheme_card).collect();

    Wrap::with_elements(cards)
        .spacing(16.0)
        .line_spacing(16.0)
        .into()
}

/// Shown instead of the grid when no scheme passes the filters
pub fn empty_state<'a>() -> Element<'a, Message> {
    let content: Column<Message> = column![
        text("🔍").size(64),
        text("Схемы не найдены").size(20),
        text("Попробуйте изменить параметры фильтрации").size(14),
    ]
    .spacing(8)
    .align_x(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .padding(64)
        .center_x(Length::Fill)
        .style(container::rounded_box)
        .into()
}

/// "1 схема", otherwise "N схем"
pub fn count_label(count: usize) -> String {
    let word = if count == 1 { "схема" } else { "схем" };

    format!("{} {}", count, word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(0), "0 схем");
        assert_eq!(count_label(1), "1 схема");
        assert_eq!(count_label(3), "3 схем");
        assert_eq!(count_label(11), "11 схем");
        assert_eq!(count_label(21), "21 схем");
    }
}
