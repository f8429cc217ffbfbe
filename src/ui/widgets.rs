//! Turns the retained scene into iced widgets.

use iced::widget::{
    button, column, container, horizontal_space, image, mouse_area, row, scrollable, text,
    text_input, Column, Row, TextInput,
};
use iced::{Alignment, Element, Length};

use super::surface::{AdminForm, AdminPanelSurface, DisplaySurface, FormField, Scene, SidebarSurface};
use crate::controller::{ClickTarget, Event};
use crate::Message;

const PHOTO_WIDTH: f32 = 480.0;
const PANEL_WIDTH: f32 = 240.0;

/// Build the whole window from the scene
pub fn scene<'a>(scene: &'a Scene, status: Option<&'a str>) -> Element<'a, Message> {
    let header = row![
        button(text("☰").size(20)).on_press(Event::HamburgerClicked),
        text("Cat Clicker").size(32),
        horizontal_space(),
        button("Admin").on_press(Event::AdminButtonClicked),
    ]
    .spacing(16)
    .align_y(Alignment::Center);

    let body = Row::new()
        .push_maybe(scene.sidebar.visible.then(|| sidebar(&scene.sidebar)))
        .push(display(&scene.display))
        .push_maybe(scene.admin.visible.then(|| admin_panel(&scene.admin)))
        .spacing(20)
        .height(Length::Fill);

    column![header, body]
        .push_maybe(status.map(|status| text(status).size(14)))
        .spacing(20)
        .padding(20)
        .into()
}

/// The selectable list of cats
pub fn sidebar(surface: &SidebarSurface) -> Element<'_, Message> {
    let entries = surface.entries.iter().map(|entry| {
        Element::from(
            button(text(&entry.label))
                .width(Length::Fill)
                .on_press(Event::SidebarEntryClicked(entry.index)),
        )
    });

    container(scrollable(Column::with_children(entries).spacing(6)))
        .width(Length::Fixed(PANEL_WIDTH))
        .padding(10)
        .into()
}

/// Title, photo and counter of the selected cat.
/// Clicks anywhere else in this area close the side panels.
pub fn display(surface: &DisplaySurface) -> Element<'_, Message> {
    let photo = mouse_area(
        image(image::Handle::from_path(&surface.image_source)).width(Length::Fixed(PHOTO_WIDTH)),
    )
    .on_press(Event::ImageClicked(ClickTarget::Image));

    let frame = mouse_area(container(photo).padding(12))
        .on_press(Event::ImageClicked(ClickTarget::Container));

    let content = column![
        text(&surface.title).size(28),
        frame,
        text(format!("Clicks: {}", surface.counter)).size(20),
    ]
    .spacing(10)
    .align_x(Alignment::Center);

    mouse_area(
        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill),
    )
    .on_press(Event::DisplayAreaClicked)
    .into()
}

/// The edit form for the selected cat
pub fn admin_panel(surface: &AdminPanelSurface) -> Element<'_, Message> {
    let form = &surface.form;

    column![
        text("Edit cat").size(20),
        form_input("Name", form, FormField::Name),
        form_input("Image path", form, FormField::ImageSource),
        form_input("Clicks", form, FormField::ClickCount),
        row![
            button("Cancel").on_press(Event::AdminCancel),
            button("Save").on_press(Event::AdminSave),
        ]
        .spacing(10),
    ]
    .spacing(10)
    .padding(10)
    .width(Length::Fixed(PANEL_WIDTH))
    .into()
}

fn form_input<'a>(placeholder: &str, form: &'a AdminForm, field: FormField) -> TextInput<'a, Message> {
    text_input(placeholder, form.field(field))
        .on_input(move |value| Event::FormFieldChanged(field, value))
        .on_submit(Event::AdminSave)
}
