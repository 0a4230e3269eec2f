// Confirm modal - 투표/위임 확인 모달
//
// ┌──────────────────────────────┐
// │                            ✕ │
// │              ▲               │
// │           Vote YES           │
// │  Are you sure you want to…   │
// │                              │
// │     Cancel      Confirm      │
// └──────────────────────────────┘

use super::dialog::render_button;
use super::icons::icon_glyph;
use crate::core::registry::PromptContent;
use crate::models::ModalButton;
use crate::ui::Theme;
use crate::utils::formatter::wrap_to_width;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Widget},
};
use unicode_width::UnicodeWidthStr;

const MODAL_WIDTH: u16 = 46;
const MODAL_HEIGHT: u16 = 11;
const BUTTON_GAP: u16 = 4;

/// 확인 모달 위젯
pub struct ConfirmModal {
    prompt: PromptContent,
    focused: ModalButton,
    bg_color: Color,
    fg_color: Color,
    muted_color: Color,
    border_color: Color,
    button_fg: Color,
    button_bg: Color,
    button_focus_fg: Color,
    button_focus_bg: Color,
}

impl ConfirmModal {
    pub fn new(prompt: PromptContent) -> Self {
        Self {
            prompt,
            focused: ModalButton::default(),
            bg_color: Color::Rgb(37, 37, 38),
            fg_color: Color::Rgb(212, 212, 212),
            muted_color: Color::Rgb(138, 138, 138),
            border_color: Color::Rgb(212, 212, 212),
            button_fg: Color::Rgb(212, 212, 212),
            button_bg: Color::Rgb(60, 60, 60),
            button_focus_fg: Color::White,
            button_focus_bg: Color::Rgb(76, 175, 80),
        }
    }

    /// 포커스된 버튼
    pub fn focused(mut self, button: ModalButton) -> Self {
        self.focused = button;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.modal_bg.to_color();
        self.fg_color = theme.fg_primary.to_color();
        self.muted_color = theme.fg_muted.to_color();
        self.border_color = theme.modal_border.to_color();
        self.button_fg = theme.button_fg.to_color();
        self.button_bg = theme.button_bg.to_color();
        self.button_focus_fg = theme.button_focus_fg.to_color();
        self.button_focus_bg = theme.button_focus_bg.to_color();
        self
    }

    /// 모달 영역 계산 (화면 중앙)
    pub fn calculate_area(screen: Rect) -> Rect {
        let width = MODAL_WIDTH.min(screen.width.saturating_sub(4));
        let height = MODAL_HEIGHT.min(screen.height.saturating_sub(2));
        Rect {
            x: screen.x + screen.width.saturating_sub(width) / 2,
            y: screen.y + screen.height.saturating_sub(height) / 2,
            width,
            height,
        }
    }

    fn centered(buf: &mut Buffer, area: Rect, y: u16, text: &str, style: Style) {
        let x = area.x + area.width.saturating_sub(text.width() as u16) / 2;
        buf.set_string(x, y, text, style);
    }

    fn button_colors(&self, button: ModalButton) -> (Color, Color) {
        if self.focused == button {
            (self.button_focus_fg, self.button_focus_bg)
        } else {
            (self.button_fg, self.button_bg)
        }
    }
}

impl Widget for ConfirmModal {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal = Self::calculate_area(area);
        if modal.width < 4 || modal.height < 4 {
            return;
        }
        Clear.render(modal, buf);

        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border_color))
            .style(Style::default().bg(self.bg_color))
            .render(modal, buf);

        let inner = Rect {
            x: modal.x + 2,
            y: modal.y + 1,
            width: modal.width.saturating_sub(4),
            height: modal.height.saturating_sub(2),
        };
        let bottom = modal.y + modal.height - 1;

        // 닫기 표시
        buf.set_string(
            modal.x + modal.width - 3,
            modal.y + 1,
            "✕",
            Style::default().fg(self.muted_color),
        );

        let mut y = inner.y + 1;
        Self::centered(
            buf,
            inner,
            y,
            icon_glyph(&self.prompt.icon),
            Style::default()
                .fg(self.prompt.icon.color.into())
                .add_modifier(Modifier::BOLD),
        );
        y += 1;

        if !self.prompt.title.is_empty() && y < bottom {
            Self::centered(
                buf,
                inner,
                y,
                self.prompt.title,
                Style::default()
                    .fg(self.fg_color)
                    .add_modifier(Modifier::BOLD),
            );
        }
        y += 1;

        // 버튼 줄 위까지 메시지
        let button_y = bottom.saturating_sub(1);
        let message_rows = button_y.saturating_sub(y + 1) as usize;
        for line in wrap_to_width(self.prompt.message, inner.width as usize, message_rows) {
            if y >= button_y {
                break;
            }
            Self::centered(buf, inner, y, &line, Style::default().fg(self.muted_color));
            y += 1;
        }

        // 버튼 (하단 중앙)
        let cancel_label = "Cancel";
        let confirm_label = "Confirm";
        let buttons_width =
            (cancel_label.width() + confirm_label.width() + 4) as u16 + BUTTON_GAP;
        let x = inner.x + inner.width.saturating_sub(buttons_width) / 2;

        let (fg, bg) = self.button_colors(ModalButton::Cancel);
        let cancel_width = render_button(buf, x, button_y, cancel_label, fg, bg);
        let (fg, bg) = self.button_colors(ModalButton::Confirm);
        render_button(
            buf,
            x + cancel_width + BUTTON_GAP,
            button_y,
            confirm_label,
            fg,
            bg,
        );
    }
}
