use dash_core::{Message, Notice, NoticeKind};
use dash_theme::Theme;
use iced::{
    border,
    widget::{container, text},
    Background, Element,
};
use std::time::Duration;

/// How long a notice stays on screen.
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

/// Transient status message shown after a user action.
#[derive(Debug, Default)]
pub struct ToastWidget;

impl ToastWidget {
    pub fn new() -> Self {
        Self
    }

    /// Returns `None` when there is nothing to show; callers should skip rendering.
    pub fn view<'a>(
        &'a self,
        notice: Option<&'a Notice>,
        theme: &'a Theme,
    ) -> Option<Element<'a, Message>> {
        let notice = notice?;
        let background = match notice.kind {
            NoticeKind::Success => theme.toast.success,
            NoticeKind::Error   => theme.toast.error,
        }
        .to_iced();
        let foreground = theme.toast.foreground.to_iced();

        Some(
            container(text(notice.text.as_str()).size(theme.font_size))
                .padding([10, 16])
                .style(move |_| container::Style {
                    background: Some(Background::Color(background)),
                    text_color: Some(foreground),
                    border: border::rounded(8.0),
                    ..container::Style::default()
                })
                .into(),
        )
    }
}
