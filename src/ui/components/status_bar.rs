// Status bar component - 상태바 컴포넌트
//
// 현재 화면/포커스, 확정된 액션 수, 토스트 메시지, 레이아웃 모드 표시

use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// 상태바 컴포넌트
pub struct StatusBar<'a> {
    /// 화면 이름
    screen: &'a str,
    /// 포커스 설명 (예: "Acts 2/3")
    focus: &'a str,
    /// 확정된 액션 수
    committed: usize,
    /// 토스트 메시지
    toast: Option<&'a str>,
    /// 레이아웃 모드 표시
    layout_mode: &'a str,
    bg_color: Color,
    fg_color: Color,
    toast_color: Color,
    muted_color: Color,
}

impl Default for StatusBar<'_> {
    fn default() -> Self {
        Self {
            screen: "",
            focus: "",
            committed: 0,
            toast: None,
            layout_mode: "COMPACT",
            bg_color: Color::Rgb(0, 122, 204),
            fg_color: Color::White,
            toast_color: Color::Yellow,
            muted_color: Color::Rgb(200, 200, 200),
        }
    }
}

impl<'a> StatusBar<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(mut self, screen: &'a str) -> Self {
        self.screen = screen;
        self
    }

    pub fn focus(mut self, focus: &'a str) -> Self {
        self.focus = focus;
        self
    }

    pub fn committed(mut self, count: usize) -> Self {
        self.committed = count;
        self
    }

    pub fn toast(mut self, toast: Option<&'a str>) -> Self {
        self.toast = toast;
        self
    }

    pub fn layout_mode(mut self, mode: &'a str) -> Self {
        self.layout_mode = mode;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.status_bar_bg.to_color();
        self.fg_color = theme.status_bar_fg.to_color();
        self.toast_color = theme.warning.to_color();
        self.muted_color = theme.status_bar_fg.to_color();
        self
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        let left_info = format!(
            " {} | {} | {} committed",
            self.screen, self.focus, self.committed
        );
        let toast_info = self
            .toast
            .map(|msg| format!(" | {}", msg))
            .unwrap_or_default();
        let right_info = format!("[{}] ", self.layout_mode);

        let used = left_info.width() + toast_info.width() + right_info.width();
        let padding = " ".repeat((area.width as usize).saturating_sub(used));

        let spans = vec![
            Span::styled(left_info, Style::default().fg(self.fg_color)),
            Span::styled(
                toast_info,
                Style::default()
                    .fg(self.toast_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(padding),
            Span::styled(right_info, Style::default().fg(self.muted_color)),
        ];

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_bar_render() {
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        StatusBar::new()
            .screen("Cast Vote")
            .focus("Acts 2/3")
            .committed(1)
            .toast(Some("Vote YES confirmed"))
            .layout_mode("WIDE")
            .render(area, &mut buf);

        let text: String = (0..area.width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect();
        assert!(text.starts_with(" Cast Vote | Acts 2/3 | 1 committed | Vote YES confirmed"));
        assert!(text.ends_with("[WIDE] "));
    }
}
