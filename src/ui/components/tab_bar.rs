// Tab bar component - 상단 화면 탭
//
// 앱 이름과 화면 탭(Cast Vote / Delegate Vote) 표시

use crate::models::ScreenKind;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// 화면 탭바 컴포넌트
pub struct TabBar<'a> {
    app_name: &'a str,
    active: ScreenKind,
    bg_color: Color,
    fg_color: Color,
    selected_bg: Color,
    selected_fg: Color,
}

impl Default for TabBar<'_> {
    fn default() -> Self {
        Self {
            app_name: "BallotDesk",
            active: ScreenKind::default(),
            bg_color: Color::Rgb(45, 45, 48),
            fg_color: Color::Rgb(204, 204, 204),
            selected_bg: Color::Rgb(76, 175, 80),
            selected_fg: Color::White,
        }
    }
}

impl<'a> TabBar<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn app_name(mut self, name: &'a str) -> Self {
        self.app_name = name;
        self
    }

    /// 활성 화면 설정
    pub fn active(mut self, screen: ScreenKind) -> Self {
        self.active = screen;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.tab_bar_bg.to_color();
        self.fg_color = theme.tab_bar_fg.to_color();
        self.selected_bg = theme.tab_active_bg.to_color();
        self.selected_fg = theme.tab_active_fg.to_color();
        self
    }

    /// 탭의 x 위치 계산
    pub fn tab_x_position(&self, screen: ScreenKind) -> u16 {
        let mut x = format!("[{}] ", self.app_name).width() as u16;
        for kind in ScreenKind::ALL {
            if kind == screen {
                break;
            }
            // 양쪽 공백(2) + 제목 + 탭 사이 공백(1)
            x += kind.title().width() as u16 + 3;
        }
        x
    }
}

impl Widget for TabBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        let mut spans = vec![Span::styled(
            format!("[{}] ", self.app_name),
            Style::default()
                .fg(self.fg_color)
                .add_modifier(Modifier::BOLD),
        )];

        for (i, kind) in ScreenKind::ALL.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            let style = if kind == self.active {
                Style::default()
                    .fg(self.selected_fg)
                    .bg(self.selected_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.fg_color)
            };
            spans.push(Span::styled(format!(" {} ", kind.title()), style));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
