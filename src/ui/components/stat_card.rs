// Stat card component - 배경색이 있는 통계 카드
//
//  ★                 ↗
//  18
//  votes in my hand
//  received: 3

use super::icons::glyph;
use crate::models::StatSummary;
use crate::ui::Theme;
use crate::utils::formatter::truncate_to_width;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

/// 카드 높이 (아이콘 줄 + 숫자 + 제목 + 부제 + 여백)
pub const STAT_CARD_HEIGHT: u16 = 5;

/// 통계 카드 위젯
pub struct StatCard<'a> {
    stat: &'a StatSummary,
    fg_color: Color,
    focused: bool,
}

impl<'a> StatCard<'a> {
    pub fn new(stat: &'a StatSummary) -> Self {
        Self {
            stat,
            fg_color: Color::Rgb(46, 0, 94),
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// 테마 적용 (배경색은 데이터가 결정)
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.fg_color = theme.stat_fg.to_color();
        self
    }
}

impl Widget for StatCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height == 0 {
            return;
        }
        let bg: Color = self.stat.background.into();
        let style = Style::default().fg(self.fg_color).bg(bg);
        buf.set_style(area, style);

        let x = area.x + 1;
        let text_width = area.width.saturating_sub(2) as usize;
        let mut rows: Vec<(String, Style)> = vec![
            (glyph(self.stat.icon).to_string(), style),
            (
                self.stat.count.to_string(),
                style.add_modifier(Modifier::BOLD),
            ),
            (
                truncate_to_width(&self.stat.title, text_width),
                if self.focused {
                    style.add_modifier(Modifier::UNDERLINED)
                } else {
                    style
                },
            ),
        ];
        if let Some(subtitle) = &self.stat.subtitle {
            rows.push((
                truncate_to_width(subtitle, text_width),
                style.add_modifier(Modifier::DIM),
            ));
        }

        for (i, (text, row_style)) in rows.into_iter().enumerate() {
            let y = area.y + i as u16;
            if y >= area.bottom() {
                break;
            }
            buf.set_string(x, y, text, row_style);
        }

        // 링크 표시 (우상단, 포커스 시 반전)
        let link_style = if self.focused {
            style.add_modifier(Modifier::REVERSED)
        } else {
            style
        };
        buf.set_string(area.right() - 2, area.y, glyph("link"), link_style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_render_stat_card() {
        let stat = StatSummary::new(18, "votes in my hand", "award", 0xDDF5D8).subtitle("received: 3");
        let area = Rect::new(0, 0, 24, STAT_CARD_HEIGHT);
        let mut buf = Buffer::empty(area);
        StatCard::new(&stat).render(area, &mut buf);

        let header = row(&buf, 0);
        assert!(header.starts_with(" ★"));
        assert_eq!(header.trim_end().chars().last(), Some('↗'));
        assert_eq!(row(&buf, 1).trim_end(), " 18");
        assert_eq!(row(&buf, 2).trim_end(), " votes in my hand");
        assert_eq!(row(&buf, 3).trim_end(), " received: 3");
        assert_eq!(buf[(5, 4)].bg, Color::Rgb(0xDD, 0xF5, 0xD8));
    }

    #[test]
    fn test_focused_card_marks_link() {
        let stat = StatSummary::new(8, "votes delegated", "account-multiple", 0xE3DBF2);
        let area = Rect::new(0, 0, 24, STAT_CARD_HEIGHT);

        let mut plain = Buffer::empty(area);
        StatCard::new(&stat).render(area, &mut plain);
        assert!(!plain[(22, 0)].modifier.contains(Modifier::REVERSED));

        let mut focused = Buffer::empty(area);
        StatCard::new(&stat).focused(true).render(area, &mut focused);
        assert!(focused[(22, 0)].modifier.contains(Modifier::REVERSED));
        assert!(focused[(1, 2)].modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn test_long_title_truncated() {
        let stat = StatSummary::new(24, "votes casted in this session", "clipboard-check", 0xE3DBF2);
        let area = Rect::new(0, 0, 12, STAT_CARD_HEIGHT);
        let mut buf = Buffer::empty(area);
        StatCard::new(&stat).render(area, &mut buf);

        assert_eq!(row(&buf, 2).trim_end(), " votes cas…");
    }
}
