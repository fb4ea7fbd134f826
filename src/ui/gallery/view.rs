// SPDX-License-Identifier: MPL-2.0
//! Rendering of the gallery screen: header, card grid, pagination and the
//! dialogs layered above them.

use super::messages::Message;
use super::state::{Modal, State};
use super::thumbnails::Thumbnail;
use crate::domain::gallery::Photo;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::styles;
use iced::font::Weight;
use iced::widget::{
    button, center, container, image, mouse_area, opaque, responsive, scrollable, text,
    text_input, Column, Container, Row, Space, Stack,
};
use iced::{alignment, ContentFit, Element, Font, Length, Size};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let mut page = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .width(Length::Fill)
        .height(Length::Fill)
        .push(header(state, i18n))
        .push(body(state, i18n));
    if state.shows_pagination() {
        page = page.push(pagination(state, i18n));
    }

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page);

    if let Some(modal) = state.modal() {
        layers = layers.push(overlay(modal_form(modal, i18n), opacity::OVERLAY_MEDIUM, None));
    }
    if let Some(photo) = state.preview() {
        layers = layers.push(overlay(
            preview(state, photo, i18n),
            opacity::OVERLAY_DENSE,
            Some(Message::ClosePreview),
        ));
    }
    if let Some(photo) = state.pending_delete() {
        layers = layers.push(overlay(
            delete_dialog(photo, i18n),
            opacity::OVERLAY_MEDIUM,
            Some(Message::CancelDelete),
        ));
    }

    layers.into()
}

fn header<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let title = text(i18n.tr("gallery-title"))
        .size(typography::TITLE_LG)
        .font(Font {
            weight: Weight::Bold,
            ..Font::default()
        });

    let status: Element<'a, Message> = if state.is_loading() {
        text(i18n.tr("gallery-loading"))
            .size(typography::CAPTION)
            .into()
    } else {
        Space::new().into()
    };

    let search = text_input(&i18n.tr("gallery-search-placeholder"), state.search())
        .on_input(Message::SearchChanged)
        .padding(spacing::XS)
        .width(Length::Fixed(sizing::SEARCH_WIDTH));

    let refresh = button(text(i18n.tr("gallery-refresh")))
        .on_press_maybe((!state.is_loading()).then_some(Message::Refresh))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::secondary);

    let add = button(text(i18n.tr("gallery-add")))
        .on_press(Message::OpenCreate)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);

    Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(title)
        .push(status)
        .push(Space::new().width(Length::Fill))
        .push(search)
        .push(refresh)
        .push(add)
        .into()
}

fn body<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let photos = state.visible_photos();

    if photos.is_empty() {
        let key = if state.is_loading() && state.photos().is_empty() {
            "gallery-loading"
        } else if state.photos().is_empty() {
            "gallery-empty"
        } else {
            "gallery-no-results"
        };
        return center(text(i18n.tr(key)).size(typography::BODY)).into();
    }

    responsive(move |size: Size| {
        let columns = columns_for_width(size.width);
        let rows: Vec<Element<'a, Message>> = photos
            .chunks(columns)
            .map(|chunk| {
                let mut row = Row::new().spacing(spacing::MD);
                for &photo in chunk {
                    row = row.push(card(state, photo, i18n));
                }
                // Keep cards of a short last row the same width as the others.
                for _ in chunk.len()..columns {
                    row = row.push(Space::new().width(Length::FillPortion(1)));
                }
                Element::from(row)
            })
            .collect();

        scrollable(Column::with_children(rows).spacing(spacing::MD))
            .height(Length::Fill)
            .into()
    })
    .into()
}

/// Number of card columns that fit in `width`.
#[must_use]
pub fn columns_for_width(width: f32) -> usize {
    let slot = sizing::CARD_MIN_WIDTH + spacing::MD;
    let fitting = ((width + spacing::MD) / slot).floor();
    if fitting.is_finite() && fitting >= 1.0 {
        (fitting as usize).min(sizing::MAX_COLUMNS)
    } else {
        1
    }
}

fn card<'a>(state: &'a State, photo: &'a Photo, i18n: &'a I18n) -> Element<'a, Message> {
    let mut picture = Stack::new()
        .width(Length::Fill)
        .push(thumbnail(state, &photo.image, i18n, sizing::CARD_IMAGE_HEIGHT));

    if state.is_hovered(&photo.id) {
        let action = |label: &str, message: Message| {
            button(text(i18n.tr(label)).size(typography::CAPTION))
                .on_press(message)
                .padding([spacing::XXS, spacing::XS])
                .style(styles::button::on_photo)
        };
        let actions = Row::new()
            .spacing(spacing::XXS)
            .push(action("card-view", Message::OpenPreview(photo.id.clone())))
            .push(action("card-edit", Message::OpenEdit(photo.id.clone())))
            .push(action("card-delete", Message::RequestDelete(photo.id.clone())));
        picture = picture.push(
            Container::new(actions)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .padding(spacing::XS),
        );
    }

    let details = Column::new()
        .spacing(spacing::XXS)
        .push(text(photo.title.as_str()).size(typography::BODY))
        .push(text(photo.category.as_str()).size(typography::CAPTION));

    let content = Container::new(Column::new().spacing(spacing::XS).push(picture).push(details))
        .padding(spacing::XS)
        .width(Length::FillPortion(1))
        .style(styles::container::card);

    mouse_area(content)
        .on_enter(Message::CardHovered(photo.id.clone()))
        .on_exit(Message::CardLeft(photo.id.clone()))
        .into()
}

fn thumbnail<'a>(state: &'a State, url: &str, i18n: &'a I18n, height: f32) -> Element<'a, Message> {
    match state.thumbnail(url) {
        Some(Thumbnail::Ready(handle)) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .content_fit(ContentFit::Cover)
            .into(),
        other => {
            let key = if matches!(other, Some(Thumbnail::Failed)) {
                "gallery-image-unavailable"
            } else {
                "gallery-image-loading"
            };
            container(text(i18n.tr(key)).size(typography::CAPTION))
                .center_x(Length::Fill)
                .center_y(Length::Fixed(height))
                .style(styles::container::thumbnail_placeholder)
                .into()
        }
    }
}

fn pagination<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let current = state.page().value();
    let total = state.total_pages();
    let (current_text, total_text) = (current.to_string(), total.to_string());
    let indicator = i18n.tr_with_args(
        "gallery-page-indicator",
        &[("current", current_text.as_str()), ("total", total_text.as_str())],
    );

    let previous = button(text(i18n.tr("gallery-previous")))
        .on_press_maybe((current > 1).then_some(Message::PreviousPage))
        .style(styles::button::secondary);
    let next = button(text(i18n.tr("gallery-next")))
        .on_press_maybe((current < total).then_some(Message::NextPage))
        .style(styles::button::secondary);

    Container::new(
        Row::new()
            .spacing(spacing::MD)
            .align_y(alignment::Vertical::Center)
            .push(previous)
            .push(text(indicator).size(typography::BODY_SM))
            .push(next),
    )
    .center_x(Length::Fill)
    .into()
}

fn field<'a>(
    label: String,
    placeholder: String,
    value: &'a str,
    on_input: fn(String) -> Message,
) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(text(label).size(typography::BODY_SM))
        .push(
            text_input(&placeholder, value)
                .on_input(on_input)
                .on_submit(Message::Submit)
                .padding(spacing::XS),
        )
        .into()
}

fn modal_form<'a>(modal: &'a Modal, i18n: &'a I18n) -> Element<'a, Message> {
    let title_key = if modal.is_edit() {
        "modal-edit-title"
    } else {
        "modal-create-title"
    };

    let mut form = Column::new()
        .spacing(spacing::SM)
        .push(text(i18n.tr(title_key)).size(typography::TITLE_MD))
        .push(field(
            i18n.tr("form-image-label"),
            i18n.tr("form-image-placeholder"),
            &modal.form.image,
            Message::ImageChanged,
        ))
        .push(field(
            i18n.tr("form-title-label"),
            i18n.tr("form-title-placeholder"),
            &modal.form.title,
            Message::TitleChanged,
        ))
        .push(field(
            i18n.tr("form-category-label"),
            i18n.tr("form-category-placeholder"),
            &modal.form.category,
            Message::CategoryChanged,
        ))
        .push(field(
            i18n.tr("form-order-label"),
            i18n.tr("form-order-placeholder"),
            &modal.form.order,
            Message::OrderChanged,
        ));

    if let Some(error) = modal.error {
        form = form.push(
            container(text(i18n.tr(error.i18n_key())).size(typography::BODY_SM))
                .style(styles::container::form_error),
        );
    }

    let submit_label = if modal.saving {
        "modal-saving"
    } else if modal.is_edit() {
        "modal-update"
    } else {
        "modal-create"
    };
    let cancel = button(text(i18n.tr("modal-cancel")))
        .on_press_maybe((!modal.saving).then_some(Message::CloseModal))
        .style(styles::button::secondary);
    let submit = button(text(i18n.tr(submit_label)))
        .on_press_maybe((!modal.saving).then_some(Message::Submit))
        .style(styles::button::primary);

    form = form.push(
        Row::new()
            .spacing(spacing::XS)
            .push(Space::new().width(Length::Fill))
            .push(cancel)
            .push(submit),
    );

    dialog_frame(form, sizing::MODAL_WIDTH)
}

fn delete_dialog<'a>(photo: &'a Photo, i18n: &'a I18n) -> Element<'a, Message> {
    let body = i18n.tr_with_args("delete-confirm-body", &[("title", photo.title.as_str())]);

    let content = Column::new()
        .spacing(spacing::MD)
        .push(text(i18n.tr("delete-confirm-title")).size(typography::TITLE_MD))
        .push(text(body).size(typography::BODY))
        .push(
            Row::new()
                .spacing(spacing::XS)
                .push(Space::new().width(Length::Fill))
                .push(
                    button(text(i18n.tr("modal-cancel")))
                        .on_press(Message::CancelDelete)
                        .style(styles::button::secondary),
                )
                .push(
                    button(text(i18n.tr("delete-confirm-action")))
                        .on_press(Message::ConfirmDelete)
                        .style(styles::button::danger),
                ),
        );

    dialog_frame(content, sizing::DIALOG_WIDTH)
}

fn preview<'a>(state: &'a State, photo: &'a Photo, i18n: &'a I18n) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match state.thumbnail(&photo.image) {
        Some(Thumbnail::Ready(handle)) => image(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        _ => text(i18n.tr("gallery-image-unavailable")).into(),
    };

    Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(picture)
        .push(text(photo.title.as_str()).size(typography::TITLE_MD))
        .push(text(photo.image.as_str()).size(typography::CAPTION))
        .push(
            button(text(i18n.tr("preview-close")))
                .on_press(Message::ClosePreview)
                .style(styles::button::on_photo),
        )
        .into()
}

fn dialog_frame<'a>(content: impl Into<Element<'a, Message>>, width: f32) -> Element<'a, Message> {
    Container::new(content)
        .width(Length::Fixed(width))
        .padding(spacing::LG)
        .style(styles::container::dialog)
        .into()
}

/// Dims the screen and centers `content` above it. The layer swallows input
/// so nothing underneath reacts while it is shown.
fn overlay<'a>(
    content: Element<'a, Message>,
    alpha: f32,
    on_backdrop: Option<Message>,
) -> Element<'a, Message> {
    let backdrop = container(Space::new())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::backdrop(alpha));
    let backdrop: Element<'a, Message> = match on_backdrop {
        Some(message) => mouse_area(backdrop).on_press(message).into(),
        None => backdrop.into(),
    };

    opaque(
        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(backdrop)
            .push(center(opaque(content)).padding(spacing::XL)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_windows_get_one_column() {
        assert_eq!(columns_for_width(0.0), 1);
        assert_eq!(columns_for_width(sizing::CARD_MIN_WIDTH - 1.0), 1);
    }

    #[test]
    fn columns_grow_with_width_up_to_the_cap() {
        let two = sizing::CARD_MIN_WIDTH * 2.0 + spacing::MD;
        assert_eq!(columns_for_width(two), 2);
        assert_eq!(columns_for_width(10_000.0), sizing::MAX_COLUMNS);
    }

    #[test]
    fn view_builds_with_every_layer_open() {
        use crate::app::config::Config;
        use crate::domain::gallery::{PhotoId, PhotoPage};

        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        let mut state = State::new();
        state.update(Message::Mounted);
        state.update(Message::PageLoaded {
            seq: 1,
            result: Ok(PhotoPage {
                photos: vec![Photo {
                    id: PhotoId::new("a"),
                    image: "/a.jpg".into(),
                    title: "A".into(),
                    category: "general".into(),
                    order: 0,
                }],
                total_pages: Some(3),
            }),
        });
        state.update(Message::OpenEdit(PhotoId::new("a")));
        state.update(Message::OpenPreview(PhotoId::new("a")));
        state.update(Message::RequestDelete(PhotoId::new("a")));
        state.update(Message::CardHovered(PhotoId::new("a")));

        let _ = view(&state, ViewContext { i18n: &i18n });
    }
}
