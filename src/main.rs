use iced::widget::{button, column, container, pick_list, row, scrollable, text, text_input, Column, Space};
use iced::{Alignment, Element, Length, Size, Task, Theme};
use std::path::PathBuf;

mod config;
mod media;
mod state;
mod ui;

use config::{APP_SUBTITLE, APP_TITLE, DETAIL_PREVIEW_HEIGHT, WINDOW_SIZE};
use media::save::SaveError;
use state::catalog::Catalog;
use state::data::Scheme;
use state::filter::FilterState;
use state::upload::UploadDraft;
use state::vehicles;
use ui::toast::{ToastKind, Toasts};

/// Main application state
struct AutoScheme {
    /// Every scheme known to this session
    catalog: Catalog,
    /// Filter panel selections
    filters: FilterState,
    /// Scheme shown in the detail dialog
    selected: Option<u32>,
    /// Whether the upload dialog is open
    upload_open: bool,
    /// Upload form fields
    draft: UploadDraft,
    /// Notifications on screen
    toasts: Toasts,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    FilterBrandSelected(String),
    FilterModelSelected(String),
    FilterYearSelected(String),
    ResetFilters,
    /// User pressed a card or its "view" button
    OpenScheme(u32),
    CloseScheme,
    /// User asked to save a scheme's image to disk
    SaveScheme(u32),
    /// Background copy finished
    SchemeSaved(Result<PathBuf, SaveError>),
    OpenUpload,
    CloseUpload,
    UploadNameChanged(String),
    UploadBrandSelected(String),
    UploadModelSelected(String),
    UploadYearSelected(String),
    /// User clicked the "choose file" button
    PickFile,
    SubmitUpload,
    DismissToast(u64),
}

impl AutoScheme {
    /// Create a new instance of the application
    fn new(catalog: Catalog) -> (Self, Task<Message>) {
        println!("⚡ {} initialized with {} schemes", APP_TITLE, catalog.len());

        (
            AutoScheme {
                catalog,
                filters: FilterState::default(),
                selected: None,
                upload_open: false,
                draft: UploadDraft::default(),
                toasts: Toasts::default(),
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::FilterBrandSelected(brand) => {
                self.filters.set_brand(Some(brand));
                Task::none()
            }
            Message::FilterModelSelected(model) => {
                self.filters.set_model(Some(model));
                Task::none()
            }
            Message::FilterYearSelected(year) => {
                self.filters.set_year(Some(year));
                Task::none()
            }
            Message::ResetFilters => {
                self.filters.reset();
                Task::none()
            }
            Message::OpenScheme(id) => {
                if self.catalog.get(id).is_some() {
                    self.selected = Some(id);
                }
                Task::none()
            }
            Message::CloseScheme => {
                self.selected = None;
                Task::none()
            }
            Message::SaveScheme(id) => {
                let Some(scheme) = self.catalog.get(id) else {
                    return Task::none();
                };

                match media::save::choose_destination(scheme) {
                    Some(destination) => Task::perform(
                        media::save::save_scheme_image(scheme.image.clone(), destination),
                        Message::SchemeSaved,
                    ),
                    None => Task::none(),
                }
            }
            Message::SchemeSaved(result) => match result {
                Ok(_) => self.notify(ToastKind::Success, "Сохранено", "Схема сохранена на устройство"),
                Err(e) => self.notify(ToastKind::Error, "Ошибка", e.to_string()),
            },
            Message::OpenUpload => {
                self.upload_open = true;
                Task::none()
            }
            Message::CloseUpload => {
                // Closing keeps the draft; only a successful upload clears it
                self.upload_open = false;
                Task::none()
            }
            Message::UploadNameChanged(name) => {
                self.draft.name = name;
                Task::none()
            }
            Message::UploadBrandSelected(brand) => {
                self.draft.set_brand(brand);
                Task::none()
            }
            Message::UploadModelSelected(model) => {
                self.draft.model = Some(model);
                Task::none()
            }
            Message::UploadYearSelected(year) => {
                self.draft.year = Some(year);
                Task::none()
            }
            Message::PickFile => {
                if let Some(path) = media::picker::pick_scheme_image() {
                    self.draft.file = Some(path);
                }
                Task::none()
            }
            Message::SubmitUpload => match self.draft.validate() {
                Ok(new_scheme) => {
                    let added = self.catalog.add(new_scheme);
                    println!("✅ Added scheme #{}: {} ({})", added.id, added.name, added.subtitle());

                    self.upload_open = false;
                    self.draft.clear();
                    self.notify(ToastKind::Success, "Успешно", "Схема добавлена")
                }
                Err(e) => {
                    println!("⚠️  Upload rejected: {}", e);
                    self.notify(ToastKind::Error, "Ошибка", e.to_string())
                }
            },
            Message::DismissToast(id) => {
                self.toasts.dismiss(id);
                Task::none()
            }
        }
    }

    /// Show a toast and schedule its removal
    fn notify(&mut self, kind: ToastKind, title: &str, body: impl Into<String>) -> Task<Message> {
        let id = self.toasts.push(kind, title, body);
        Task::perform(ui::toast::expire(id), Message::DismissToast)
    }

    /// Scheme shown in the detail dialog, if any
    fn selected_scheme(&self) -> Option<&Scheme> {
        self.selected.and_then(|id| self.catalog.get(id))
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let page: Column<Message> = column![self.header(), self.filter_panel(), self.results()]
            .spacing(24)
            .padding(24);

        let mut screen: Element<Message> = container(scrollable(page))
            .width(Length::Fill)
            .height(Length::Fill)
            .into();

        if self.upload_open {
            screen = ui::modal::modal(screen, self.upload_dialog(), Message::CloseUpload);
        }

        if let Some(scheme) = self.selected_scheme() {
            screen = ui::modal::modal(screen, detail_dialog(scheme), Message::CloseScheme);
        }

        ui::toast::overlay(screen, &self.toasts)
    }

    fn header(&self) -> Element<Message> {
        let title = column![text(APP_TITLE).size(28), text(APP_SUBTITLE).size(12)].spacing(2);

        row![
            text("⚡").size(32),
            title,
            Space::with_width(Length::Fill),
            button("Загрузить схему")
                .on_press(Message::OpenUpload)
                .padding(10),
        ]
        .spacing(12)
        .align_y(Alignment::Center)
        .into()
    }

    fn filter_panel(&self) -> Element<Message> {
        let brand = pick_list(vehicles::brands(), self.filters.brand.clone(), Message::FilterBrandSelected)
            .placeholder("Все марки")
            .width(Length::Fill);

        // Without a brand the list is empty, which keeps the picker inert
        let model = pick_list(
            self.filters.available_models(),
            self.filters.model.clone(),
            Message::FilterModelSelected,
        )
        .placeholder("Все модели")
        .width(Length::Fill);

        let year = pick_list(vehicles::years(), self.filters.year.clone(), Message::FilterYearSelected)
            .placeholder("Все годы")
            .width(Length::Fill);

        let reset = button(text("✕ Сбросить"))
            .on_press(Message::ResetFilters)
            .style(button::secondary)
            .width(Length::Fill)
            .padding(8);

        let fields = row![
            labeled("Марка", brand),
            labeled("Модель", model),
            labeled("Год", year),
            column![reset].width(Length::Fill),
        ]
        .spacing(16)
        .align_y(Alignment::End);

        let content = column![
            text("Фильтры поиска").size(20),
            text("Выберите параметры для поиска электрических схем").size(13),
            fields,
        ]
        .spacing(12);

        container(content)
            .padding(20)
            .width(Length::Fill)
            .style(container::rounded_box)
            .into()
    }

    fn results(&self) -> Element<Message> {
        let schemes = self.catalog.filtered(&self.filters);

        let heading = column![
            text("Найденные схемы").size(24),
            text(ui::card::count_label(schemes.len())).size(14),
        ]
        .spacing(4);

        let body = if schemes.is_empty() {
            ui::card::empty_state()
        } else {
            ui::card::scheme_grid(schemes)
        };

        column![heading, body].spacing(16).into()
    }

    fn upload_dialog(&self) -> Element<Message> {
        let brand = pick_list(vehicles::brands(), self.draft.brand.clone(), Message::UploadBrandSelected)
            .placeholder("Выберите марку")
            .width(Length::Fill);

        let model = pick_list(
            self.draft.available_models(),
            self.draft.model.clone(),
            Message::UploadModelSelected,
        )
        .placeholder("Выберите модель")
        .width(Length::Fill);

        let year = pick_list(vehicles::years(), self.draft.year.clone(), Message::UploadYearSelected)
            .placeholder("Выберите год")
            .width(Length::Fill);

        let name = text_input("Например: Система зажигания", &self.draft.name)
            .on_input(Message::UploadNameChanged)
            .padding(8);

        let mut file = column![button("Выбрать файл")
            .on_press(Message::PickFile)
            .style(button::secondary)
            .padding(8)]
        .spacing(6);
        if let Some(label) = self.draft.file_label() {
            file = file.push(text(format!("Выбран файл: {}", label)).size(13));
        }

        let actions = row![
            Space::with_width(Length::Fill),
            button("Отмена")
                .on_press(Message::CloseUpload)
                .style(button::secondary)
                .padding(8),
            button("Загрузить").on_press(Message::SubmitUpload).padding(8),
        ]
        .spacing(8);

        let content = column![
            text("Загрузка новой схемы").size(22),
            text("Заполните информацию об электрической схеме").size(13),
            labeled("Марка", brand),
            labeled("Модель", model),
            labeled("Год", year),
            labeled("Название схемы", name),
            labeled("Файл схемы", file),
            actions,
        ]
        .spacing(14);

        container(content)
            .padding(24)
            .width(480.0)
            .style(container::rounded_box)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Detail dialog for one scheme
fn detail_dialog(scheme: &Scheme) -> Element<'_, Message> {
    let actions = row![
        button("Сохранить на устройство")
            .on_press(Message::SaveScheme(scheme.id))
            .width(Length::Fill)
            .padding(10),
        // Printing is not wired up yet, so the button renders disabled
        button("Печать")
            .style(button::secondary)
            .width(Length::Fill)
            .padding(10),
    ]
    .spacing(8);

    let content = column![
        text(&scheme.name).size(24),
        text(scheme.subtitle()).size(14),
        ui::card::preview(&scheme.image, DETAIL_PREVIEW_HEIGHT),
        actions,
    ]
    .spacing(12);

    container(content)
        .padding(24)
        .width(800.0)
        .style(container::rounded_box)
        .into()
}

/// A form field with its caption above it
fn labeled<'a>(label: &'a str, field: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    column![text(label).size(14), field.into()]
        .spacing(6)
        .width(Length::Fill)
        .into()
}

fn main() -> iced::Result {
    // The app cannot function without its catalog
    let catalog = match Catalog::seeded() {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    iced::application(APP_TITLE, AutoScheme::update, AutoScheme::view)
        .theme(AutoScheme::theme)
        .window_size(Size::new(WINDOW_SIZE.0, WINDOW_SIZE.1))
        .centered()
        .run_with(move || AutoScheme::new(catalog))
}
