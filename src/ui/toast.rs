/// Transient notifications stacked in the bottom-right corner
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{column, container, stack, text, Column};
use iced::{Border, Element, Length, Theme};

use crate::config::TOAST_TIMEOUT;
use crate::Message;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub body: String,
}

/// Toasts currently on screen, oldest first
#[derive(Debug, Default)]
pub struct Toasts {
    items: Vec<Toast>,
    next_id: u64,
}

impl Toasts {
    /// Show a toast and return its ID (used to dismiss it later)
    pub fn push(&mut self, kind: ToastKind, title: impl Into<String>, body: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.items.push(Toast {
            id,
            kind,
            title: title.into(),
            body: body.into(),
        });

        id
    }

    /// Remove a toast; unknown IDs are ignored
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter()
    }

    /// Most recent toast
    #[cfg(test)]
    pub fn latest(&self) -> Option<&Toast> {
        self.items.last()
    }
}

/// Resolves with `id` once the toast has been visible long enough
pub async fn expire(id: u64) -> u64 {
    tokio::time::sleep(TOAST_TIMEOUT).await;
    id
}

/// Draw the toast stack on top of `base`
pub fn overlay<'a>(base: Element<'a, Message>, toasts: &'a Toasts) -> Element<'a, Message> {
    if toasts.is_empty() {
        return base;
    }

    let cards = Column::with_children(toasts.iter().map(toast_card))
        .spacing(8)
        .width(320.0);

    stack![
        base,
        container(cards)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(24)
            .align_x(Horizontal::Right)
            .align_y(Vertical::Bottom),
    ]
    .into()
}

fn toast_card(toast: &Toast) -> Element<'_, Message> {
    let kind = toast.kind;

    container(column![text(&toast.title).size(16), text(&toast.body).size(13)].spacing(4))
        .padding(12)
        .width(Length::Fill)
        .style(move |theme: &Theme| {
            let palette = theme.extended_palette();
            let pair = match kind {
                ToastKind::Success => palette.success.weak,
                ToastKind::Error => palette.danger.weak,
            };

            container::Style {
                background: Some(pair.color.into()),
                text_color: Some(pair.text),
                border: Border {
                    radius: 6.0.into(),
                    ..Border::default()
                },
                ..container::Style::default()
            }
        })
        .into()
}
