// Cast Vote 화면 - 통계 카드 + 법안 카드

use super::ballot_card::render_ballot_row;
use super::stat_card::{StatCard, STAT_CARD_HEIGHT};
use crate::models::{ScreenState, Section, StatSummary};
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Widget,
};

/// 투표 화면 위젯
pub struct VoteView<'a> {
    screen: &'a ScreenState,
    stats: &'a [StatSummary],
    theme: &'a Theme,
    wide: bool,
}

impl<'a> VoteView<'a> {
    pub fn new(screen: &'a ScreenState, stats: &'a [StatSummary], theme: &'a Theme) -> Self {
        Self {
            screen,
            stats,
            theme,
            wide: false,
        }
    }

    pub fn wide(mut self, wide: bool) -> Self {
        self.wide = wide;
        self
    }
}

/// 통계 카드 나란히 그리기 (투표/위임 화면 공용)
pub(crate) fn render_stats_row(
    stats: &[StatSummary],
    focused: Option<usize>,
    theme: &Theme,
    area: Rect,
    buf: &mut Buffer,
) {
    if stats.is_empty() {
        return;
    }
    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(2)
        .constraints(vec![Constraint::Ratio(1, stats.len() as u32); stats.len()])
        .split(area);
    for (i, (stat, slot)) in stats.iter().zip(slots.iter()).enumerate() {
        StatCard::new(stat)
            .theme(theme)
            .focused(focused == Some(i))
            .render(*slot, buf);
    }
}

impl Widget for VoteView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, ratatui::style::Style::default().bg(self.theme.bg_primary.to_color()));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(STAT_CARD_HEIGHT),
                Constraint::Length(1),
                Constraint::Min(4),
            ])
            .split(area);

        let focused_stat =
            (self.screen.section == Section::Stats).then_some(self.screen.selected_stat);
        render_stats_row(self.stats, focused_stat, self.theme, chunks[0], buf);
        render_ballot_row(
            &self.screen.cards,
            self.screen.selected_card,
            self.screen.section == Section::Ballots,
            self.wide,
            self.theme,
            chunks[2],
            buf,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::{ballot_cards, cast_vote_stats};
    use crate::models::ScreenKind;

    #[test]
    fn test_vote_view_renders_stats_and_cards() {
        let screen = ScreenState::new(ScreenKind::CastVote, ballot_cards());
        let stats = cast_vote_stats();
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 120, 22);
        let mut buf = Buffer::empty(area);
        VoteView::new(&screen, &stats, &theme)
            .wide(true)
            .render(area, &mut buf);

        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                text.push_str(buf[(x, y)].symbol());
            }
        }
        assert!(text.contains("votes to cast"));
        assert!(text.contains("received: 3"));
        assert!(text.contains("votes casted"));
        assert!(text.contains("4 votes in my hand"));
        assert!(text.contains("2 votes in my hand"));
        assert!(text.contains("Delegated to:"));
    }
}
