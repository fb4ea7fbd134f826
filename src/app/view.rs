// SPDX-License-Identifier: MPL-2.0
//! Root view: a slim toolbar, the gallery screen and the toast layer.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::gallery;
use crate::ui::notifications::{self, Toast};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, text, Column, Container, Row, Space, Stack};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
    pub gallery: &'a gallery::State,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let theme_label = i18n.tr_with_args(
        "toolbar-theme",
        &[("mode", i18n.tr(ctx.theme_mode.i18n_key()).as_str())],
    );
    let toolbar = Row::new()
        .spacing(spacing::XS)
        .padding([spacing::XS, spacing::LG])
        .push(Space::new().width(Length::Fill))
        .push(
            button(text(theme_label).size(typography::CAPTION))
                .on_press(Message::CycleTheme)
                .style(styles::button::secondary),
        )
        .push(
            button(text(i18n.tr("toolbar-language")).size(typography::CAPTION))
                .on_press(Message::CycleLanguage)
                .style(styles::button::secondary),
        );

    let screen = gallery::view(ctx.gallery, gallery::ViewContext { i18n }).map(Message::Gallery);

    let content = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(toolbar)
        .push(Container::new(screen).width(Length::Fill).height(Length::Fill));

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(content)
        .push(Toast::view_overlay(ctx.notifications, i18n).map(Message::Notification))
        .into()
}
