// Ballot card component - 법안 카드 (투표 패널 / 위임 패널 + 법안 제목)
//
// ┌ 国会投票 · 教育 ───────────────────────────┐
// │ ★ 4 votes in my hand │ 義務教育諸学校等の施設 │
// │ x ⊘ Decline          │ 費の国庫負担等に関する │
// │ ...                  │ ...            ↗ o   │
// └──────────────────────────────────────────────┘

use super::icons::{glyph, icon_glyph};
use crate::core::registry::{ActionId, ActionRegistry};
use crate::models::{BallotCard, CardMode};
use crate::ui::Theme;
use crate::utils::formatter::{truncate_to_width, wrap_to_width};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// 카드 최소 높이 (테두리 포함)
pub const BALLOT_CARD_MIN_HEIGHT: u16 = 10;
/// 좌측 패널 최대 폭
const PANEL_MAX_WIDTH: u16 = 24;

/// 법안 카드 위젯
pub struct BallotCardView<'a> {
    card: &'a BallotCard,
    /// 카드가 현재 입력을 받는지
    focused: bool,
    /// 제목 뒤에 붙일 위치 표시 (예: "2/3")
    position: Option<String>,
    fg_color: Color,
    muted_color: Color,
    border_color: Color,
    active_border_color: Color,
    key_color: Color,
    disabled_color: Color,
    bg_color: Color,
}

impl<'a> BallotCardView<'a> {
    pub fn new(card: &'a BallotCard) -> Self {
        Self {
            card,
            focused: false,
            position: None,
            fg_color: Color::Rgb(212, 212, 212),
            muted_color: Color::Rgb(138, 138, 138),
            border_color: Color::Rgb(60, 60, 60),
            active_border_color: Color::Rgb(76, 175, 80),
            key_color: Color::Rgb(76, 175, 80),
            disabled_color: Color::Rgb(90, 90, 90),
            bg_color: Color::Rgb(37, 37, 38),
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn position(mut self, index: usize, total: usize) -> Self {
        self.position = Some(format!("{}/{}", index + 1, total));
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.fg_color = theme.fg_primary.to_color();
        self.muted_color = theme.fg_muted.to_color();
        self.border_color = theme.card_border.to_color();
        self.active_border_color = theme.card_active_border.to_color();
        self.key_color = theme.accent.to_color();
        self.disabled_color = theme.button_disabled.to_color();
        self.bg_color = theme.card_bg.to_color();
        self
    }

    /// 액션 버튼 한 줄: "x ⊘ Decline"
    fn action_line(&self, key: &'static str, action: ActionId, label: &'static str) -> Line<'static> {
        let icon = ActionRegistry::lookup(action).icon;
        let key_style = if self.focused {
            Style::default().fg(self.key_color).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.muted_color)
        };
        Line::from(vec![
            Span::styled(key, key_style),
            Span::raw(" "),
            Span::styled(icon_glyph(&icon), Style::default().fg(icon.color.into())),
            Span::raw(" "),
            Span::styled(label, Style::default().fg(self.fg_color)),
        ])
    }

    /// YES/NO 줄. 위임 카드에서는 항상 비활성
    fn vote_row(&self, enabled: bool, locked: bool) -> Line<'static> {
        let mut spans = Vec::new();
        for (key, action, label) in [("y", ActionId::VoteYes, "YES"), ("n", ActionId::VoteNo, "NO")] {
            if !spans.is_empty() {
                spans.push(Span::raw("   "));
            }
            if enabled {
                spans.extend(self.action_line(key, action, label).spans);
            } else {
                let style = Style::default().fg(self.disabled_color);
                let icon = ActionRegistry::lookup(action).icon;
                spans.push(Span::styled(format!("{} {}", icon_glyph(&icon), label), style));
                if locked {
                    spans.push(Span::styled(" ⊠", style));
                }
            }
        }
        Line::from(spans)
    }

    fn panel_lines(&self, width: usize) -> Vec<Line<'static>> {
        let header_style = Style::default()
            .fg(self.fg_color)
            .add_modifier(Modifier::BOLD);
        let muted = Style::default().fg(self.muted_color);

        match &self.card.mode {
            CardMode::Vote { votes } => vec![
                Line::from(vec![
                    Span::styled(glyph("award"), Style::default().fg(self.key_color)),
                    Span::styled(format!(" {}", votes), header_style),
                    Span::styled(" votes in my hand", muted),
                ]),
                self.action_line("x", ActionId::Decline, "Decline"),
                self.action_line("d", ActionId::Delegate, "Delegate"),
                self.action_line("a", ActionId::AutoDelegate, "Auto Delegate"),
                Line::from(""),
                Line::from(Span::styled("Cast Vote", header_style)),
                self.vote_row(true, false),
            ],
            CardMode::Delegation {
                delegate_name,
                has_voted,
            } => {
                let status = if *has_voted {
                    "has already voted"
                } else {
                    "has not voted yet"
                };
                vec![
                    Line::from(Span::styled("Delegated to:", muted)),
                    Line::from(vec![
                        Span::styled(
                            format!("({}) ", crate::models::ballot::initials(delegate_name)),
                            Style::default().fg(self.key_color),
                        ),
                        Span::styled(
                            truncate_to_width(delegate_name, width.saturating_sub(7)),
                            header_style,
                        ),
                        Span::styled(format!(" {}", glyph("link")), muted),
                    ]),
                    self.action_line("x", ActionId::Decline, "Decline"),
                    self.action_line("s", ActionId::SwitchDelegate, "Switch"),
                    self.action_line("m", ActionId::VoteMyself, "Vote Myself"),
                    Line::from(Span::styled(
                        truncate_to_width(delegate_name, width),
                        header_style,
                    )),
                    Line::from(Span::styled(status, muted)),
                    self.vote_row(false, !has_voted),
                ]
            }
        }
    }
}

impl Widget for BallotCardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_color = if self.focused {
            self.active_border_color
        } else {
            self.border_color
        };
        let title = match &self.position {
            Some(pos) => format!(" 国会投票 · {} ‹{}› ", self.card.category, pos),
            None => format!(" 国会投票 · {} ", self.card.category),
        };
        let block = Block::default()
            .title(title)
            .title_style(Style::default().fg(self.fg_color).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(self.bg_color));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 6 || inner.height == 0 {
            return;
        }

        let panel_width = PANEL_MAX_WIDTH.min(inner.width * 3 / 5);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(panel_width),
                Constraint::Length(1),
                Constraint::Min(1),
            ])
            .split(inner);

        Paragraph::new(self.panel_lines(panel_width as usize)).render(columns[0], buf);

        // 구분선
        for y in columns[1].top()..columns[1].bottom() {
            buf.set_string(columns[1].x, y, "│", Style::default().fg(self.border_color));
        }

        // 법안 제목 (CJK 폭 기준 줄바꿈), 마지막 줄은 링크 표시
        let title_area = Rect {
            x: columns[2].x + 1,
            width: columns[2].width.saturating_sub(1),
            ..columns[2]
        };
        let max_lines = title_area.height.saturating_sub(1) as usize;
        for (i, line) in wrap_to_width(&self.card.act_title, title_area.width as usize, max_lines)
            .into_iter()
            .enumerate()
        {
            buf.set_string(
                title_area.x,
                title_area.y + i as u16,
                line,
                Style::default().fg(self.fg_color),
            );
        }
        if title_area.height > 0 {
            let link = format!("{} o", glyph("link"));
            buf.set_string(
                title_area.right().saturating_sub(4),
                title_area.bottom() - 1,
                link,
                Style::default().fg(self.muted_color),
            );
        }
    }
}

/// 카드 목록 렌더링
///
/// 넓은 화면이면 모든 카드를 나란히, 아니면 선택된 카드만 그립니다.
pub fn render_ballot_row(
    cards: &[BallotCard],
    selected: usize,
    focused: bool,
    wide: bool,
    theme: &Theme,
    area: Rect,
    buf: &mut Buffer,
) {
    if cards.is_empty() {
        buf.set_string(
            area.x + 1,
            area.y,
            "No acts to vote on",
            Style::default().fg(theme.fg_muted.to_color()),
        );
        return;
    }

    if wide {
        let constraints = vec![Constraint::Ratio(1, cards.len() as u32); cards.len()];
        let slots = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(area);
        for (i, (card, slot)) in cards.iter().zip(slots.iter()).enumerate() {
            BallotCardView::new(card)
                .focused(focused && i == selected)
                .theme(theme)
                .render(*slot, buf);
        }
    } else if let Some(card) = cards.get(selected) {
        BallotCardView::new(card)
            .focused(focused)
            .position(selected, cards.len())
            .theme(theme)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::ballot_cards;

    fn rendered(buf: &Buffer) -> String {
        let mut text = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                text.push_str(buf[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_vote_card_lists_vote_actions() {
        let cards = ballot_cards();
        let area = Rect::new(0, 0, 60, BALLOT_CARD_MIN_HEIGHT);
        let mut buf = Buffer::empty(area);
        BallotCardView::new(&cards[0]).focused(true).render(area, &mut buf);

        let text = rendered(&buf);
        assert!(text.contains("4 votes in my hand"));
        assert!(text.contains("Decline"));
        assert!(text.contains("Auto Delegate"));
        assert!(text.contains("YES"));
        assert!(!text.contains("Vote Myself"));
        assert_eq!(buf[(0, 0)].fg, Color::Rgb(76, 175, 80));
    }

    #[test]
    fn test_delegation_card_shows_locked_votes() {
        let cards = ballot_cards();
        let area = Rect::new(0, 0, 60, 12);
        let mut buf = Buffer::empty(area);
        BallotCardView::new(&cards[2]).render(area, &mut buf);

        let text = rendered(&buf);
        assert!(text.contains("Delegated to:"));
        assert!(text.contains("(JD) John Doe"));
        assert!(text.contains("Switch"));
        assert!(text.contains("Vote Myself"));
        assert!(text.contains("has not voted yet"));
        assert!(text.contains("YES ⊠"));
        assert_eq!(buf[(0, 0)].fg, Color::Rgb(60, 60, 60));
    }

    #[test]
    fn test_compact_row_shows_selected_card_position() {
        let cards = ballot_cards();
        let area = Rect::new(0, 0, 70, BALLOT_CARD_MIN_HEIGHT);
        let mut buf = Buffer::empty(area);
        render_ballot_row(&cards, 1, true, false, &Theme::dark(), area, &mut buf);

        let text = rendered(&buf);
        assert!(text.contains("‹2/3›"));
        assert!(text.contains("2 votes in my hand"));
    }

    #[test]
    fn test_empty_row() {
        let area = Rect::new(0, 0, 40, 3);
        let mut buf = Buffer::empty(area);
        render_ballot_row(&[], 0, true, true, &Theme::dark(), area, &mut buf);
        assert!(rendered(&buf).contains("No acts to vote on"));
    }
}
