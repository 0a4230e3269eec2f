// Delegate Vote 화면
//
// 인사말 / Incoming Delegation 배너 / 통계 카드 / 카테고리 탭 /
// 자동 위임 대상 / 위임받은 사람 / 법안 카드

use super::ballot_card::render_ballot_row;
use super::icons::{glyph, icon_glyph};
use super::stat_card::STAT_CARD_HEIGHT;
use super::vote_view::render_stats_row;
use crate::core::registry::{ActionId, ActionRegistry};
use crate::models::ballot::initials;
use crate::models::{DelegationOverview, ScreenState, Section};
use crate::ui::Theme;
use crate::utils::formatter::{format_time_ago, pluralize, truncate_to_width};
use chrono::{DateTime, Local};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// 통계 카드를 함께 그릴 최소 본문 높이
const STATS_MIN_BODY_HEIGHT: u16 = 26;

/// 위임 화면 위젯
pub struct DelegateView<'a> {
    screen: &'a ScreenState,
    overview: &'a DelegationOverview,
    theme: &'a Theme,
    now: DateTime<Local>,
    wide: bool,
}

impl<'a> DelegateView<'a> {
    pub fn new(
        screen: &'a ScreenState,
        overview: &'a DelegationOverview,
        theme: &'a Theme,
        now: DateTime<Local>,
    ) -> Self {
        Self {
            screen,
            overview,
            theme,
            now,
            wide: false,
        }
    }

    pub fn wide(mut self, wide: bool) -> Self {
        self.wide = wide;
        self
    }

    fn key_span(&self, key: &'static str, focused: bool) -> Span<'static> {
        if focused {
            Span::styled(
                key,
                Style::default()
                    .fg(self.theme.accent.to_color())
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(key, Style::default().fg(self.theme.fg_muted.to_color()))
        }
    }

    fn action_spans(&self, key: &'static str, action: ActionId, label: &'static str, focused: bool) -> Vec<Span<'static>> {
        let icon = ActionRegistry::lookup(action).icon;
        vec![
            self.key_span(key, focused),
            Span::raw(" "),
            Span::styled(icon_glyph(&icon), Style::default().fg(icon.color.into())),
            Span::raw(" "),
            Span::styled(label, Style::default().fg(self.theme.fg_primary.to_color())),
        ]
    }

    fn render_greeting(&self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled(
                format!("({}) ", initials(&self.overview.user_name)),
                Style::default().fg(self.theme.accent.to_color()),
            ),
            Span::styled(
                format!("Hello, {}", self.overview.user_name),
                Style::default()
                    .fg(self.theme.fg_primary.to_color())
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        Paragraph::new(line).render(area, buf);
    }

    fn render_banner(&self, area: Rect, buf: &mut Buffer) {
        let style = Style::default()
            .fg(self.theme.banner_fg.to_color())
            .bg(self.theme.banner_bg.to_color());
        buf.set_style(area, style);

        let lines = vec![
            Line::from(vec![
                Span::styled(" Incoming Delegation!", style.add_modifier(Modifier::BOLD)),
                Span::styled("   [c] Claim Now", style),
            ]),
            Line::from(Span::styled(
                format!(
                    " There are {} to delegate votes to you.",
                    pluralize(self.overview.incoming_requests as usize, "request", "requests")
                ),
                style,
            )),
        ];
        Paragraph::new(lines).render(area, buf);
    }

    fn render_categories(&self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        for (i, category) in self.overview.categories.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            let style = if i == self.screen.category_index {
                Style::default()
                    .fg(self.theme.tab_active_fg.to_color())
                    .bg(self.theme.tab_active_bg.to_color())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.theme.fg_muted.to_color())
            };
            spans.push(Span::styled(format!(" {} ", category), style));
        }
        spans.push(Span::styled(
            "  [ ]",
            Style::default().fg(self.theme.fg_muted.to_color()),
        ));
        Paragraph::new(Line::from(spans)).render(area, buf);
    }

    fn render_auto_delegate(&self, area: Rect, buf: &mut Buffer) {
        let focused = self.screen.section == Section::AutoDelegate;
        let border = if focused {
            self.theme.card_active_border.to_color()
        } else {
            self.theme.card_border.to_color()
        };
        let block = Block::default()
            .title(" Auto Delegated to: ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(self.theme.card_bg.to_color()));
        let inner = block.inner(area);
        block.render(area, buf);

        let profile = &self.overview.auto_delegate_to;
        let muted = Style::default().fg(self.theme.fg_muted.to_color());
        let details = format!(
            "{} · {} · {}",
            profile.role,
            profile.category,
            format_time_ago(profile.last_active, self.now)
        );

        let mut spans = vec![
            Span::styled(
                format!("({}) ", initials(&profile.name)),
                Style::default().fg(self.theme.accent.to_color()),
            ),
            Span::styled(
                profile.name.clone(),
                Style::default()
                    .fg(self.theme.fg_primary.to_color())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {}  ", glyph("link")), muted),
            Span::styled(truncate_to_width(&details, 40), muted),
            Span::raw("    "),
        ];
        spans.extend(self.action_spans("s", ActionId::SwitchDelegate, "Switch", focused));
        spans.push(Span::raw("  "));
        spans.extend(self.action_spans("m", ActionId::VoteMyself, "Vote Myself", focused));

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }

    fn render_received_from(&self, area: Rect, buf: &mut Buffer) {
        let focused = self.screen.section == Section::ReceivedFrom;
        let marker = if focused { "▸ " } else { "  " };
        let name = &self.overview.received_from;

        let mut spans = vec![
            Span::styled(marker, Style::default().fg(self.theme.accent.to_color())),
            Span::styled(
                "Received from: ",
                Style::default().fg(self.theme.fg_muted.to_color()),
            ),
            Span::styled(
                format!("({}) ", initials(name)),
                Style::default().fg(self.theme.accent.to_color()),
            ),
            Span::styled(
                name.clone(),
                Style::default()
                    .fg(self.theme.fg_primary.to_color())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            self.key_span("o", focused),
            Span::styled(
                " View more",
                Style::default().fg(self.theme.fg_muted.to_color()),
            ),
            Span::raw("    "),
        ];
        spans.extend(self.action_spans("x", ActionId::Decline, "Decline", focused));
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

impl Widget for DelegateView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.theme.bg_primary.to_color()));

        let stats_focused = self.screen.section == Section::Stats;
        let stats_height = if area.height >= STATS_MIN_BODY_HEIGHT || stats_focused {
            STAT_CARD_HEIGHT
        } else {
            0
        };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(1)
            .constraints([
                Constraint::Length(1),            // 인사말
                Constraint::Length(2),            // 배너
                Constraint::Length(stats_height), // 통계
                Constraint::Length(1),            // 카테고리
                Constraint::Length(3),            // 자동 위임 대상
                Constraint::Length(1),            // 위임받은 사람
                Constraint::Min(4),               // 법안 카드
            ])
            .split(area);

        self.render_greeting(chunks[0], buf);
        self.render_banner(chunks[1], buf);
        if stats_height > 0 {
            let focused_stat = stats_focused.then_some(self.screen.selected_stat);
            render_stats_row(&self.overview.stats, focused_stat, self.theme, chunks[2], buf);
        }
        self.render_categories(chunks[3], buf);
        self.render_auto_delegate(chunks[4], buf);
        self.render_received_from(chunks[5], buf);
        render_ballot_row(
            &self.screen.cards,
            self.screen.selected_card,
            self.screen.section == Section::Ballots,
            self.wide,
            self.theme,
            chunks[6],
            buf,
        );
    }
}
