use super::DialogKind;
use crate::core::actions::generate_help_entries;
use crate::core::registry::ActionRegistry;
use crate::models::CommittedAction;
use crate::ui::Theme;
use crate::utils::formatter::{format_clock, truncate_to_width};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

/// 다이얼로그 내부 좌우 여백
const DIALOG_H_PADDING: u16 = 2;
/// 다이얼로그 내부 상하 여백
const DIALOG_V_PADDING: u16 = 1;

/// 버튼 렌더링 헬퍼 (확인 모달과 공용)
///
/// 반환: 그려진 버튼 폭
pub(crate) fn render_button(
    buf: &mut Buffer,
    x: u16,
    y: u16,
    label: &str,
    fg: Color,
    bg: Color,
) -> u16 {
    let padded_label = format!(" {} ", label);
    let width = padded_label.width() as u16;
    buf.set_string(x, y, &padded_label, Style::default().fg(fg).bg(bg));

    // wide character continuation cell의 배경색 보정
    for i in 0..width {
        if let Some(cell) = buf.cell_mut((x + i, y)) {
            cell.set_bg(bg);
        }
    }
    width
}

/// 도움말 행 목록 (is_header, key, description)
fn help_rows() -> Vec<(bool, &'static str, &'static str)> {
    let mut rows = Vec::new();
    for (category, items) in generate_help_entries() {
        rows.push((true, category, ""));
        for (key, desc) in items {
            rows.push((false, key, desc));
        }
        rows.push((false, "", ""));
    }
    // 확인 모달 키는 레지스트리 밖에서 처리
    rows.push((true, "Confirmation", ""));
    rows.push((false, "Tab / ← →", "Move button focus"));
    rows.push((false, "Enter", "Activate focused button"));
    rows.push((false, "y", "Confirm"));
    rows.push((false, "n / Esc / q", "Cancel"));
    rows
}

/// 화면 크기 기준 최대 스크롤 오프셋 (내용 행 수 - 보이는 행 수)
pub fn max_scroll_offset(kind: &DialogKind, screen: Rect) -> usize {
    let total = match kind {
        DialogKind::Help { .. } => help_rows().len(),
        DialogKind::Activity { entries, .. } => entries.len(),
        DialogKind::Message { .. } => return 0,
    };
    let area = Dialog::new(kind).calculate_area(screen);
    let visible = Dialog::inner(area).height as usize;
    total.saturating_sub(visible)
}

/// 다이얼로그 위젯
pub struct Dialog<'a> {
    kind: &'a DialogKind,
    bg_color: Color,
    fg_color: Color,
    muted_color: Color,
    border_color: Color,
    title_color: Color,
    key_color: Color,
    button_selected_bg: Color,
    button_selected_fg: Color,
}

impl<'a> Dialog<'a> {
    pub fn new(kind: &'a DialogKind) -> Self {
        Self {
            kind,
            bg_color: Color::Rgb(37, 37, 38),
            fg_color: Color::Rgb(212, 212, 212),
            muted_color: Color::Rgb(128, 128, 128),
            border_color: Color::Rgb(212, 212, 212),
            title_color: Color::Rgb(76, 175, 80),
            key_color: Color::Rgb(86, 156, 214),
            button_selected_bg: Color::Rgb(76, 175, 80),
            button_selected_fg: Color::White,
        }
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.modal_bg.to_color();
        self.fg_color = theme.fg_primary.to_color();
        self.muted_color = theme.fg_muted.to_color();
        self.border_color = theme.modal_border.to_color();
        self.title_color = theme.accent.to_color();
        self.key_color = theme.accent.to_color();
        self.button_selected_bg = theme.button_focus_bg.to_color();
        self.button_selected_fg = theme.button_focus_fg.to_color();
        self
    }

    /// 다이얼로그 영역 계산 (화면 중앙, 반응형)
    fn calculate_area(&self, screen: Rect) -> Rect {
        let sw = screen.width;
        let sh = screen.height;

        let (width, height) = match self.kind {
            DialogKind::Message { message, .. } => {
                let lines = message.lines().count().max(1) as u16;
                (50u16.max(30), (6 + lines).max(6))
            }
            DialogKind::Help { .. } => (60, sh.saturating_sub(6).max(15)),
            DialogKind::Activity { entries, .. } => {
                let rows = entries.len().clamp(1, 12) as u16;
                (64, 5 + rows)
            }
        };

        let width = width.min(sw.saturating_sub(4));
        let height = height.min(sh.saturating_sub(4));

        Rect {
            x: screen.x + sw.saturating_sub(width) / 2,
            y: screen.y + sh.saturating_sub(height) / 2,
            width,
            height,
        }
    }

    fn frame(&self, buf: &mut Buffer, area: Rect, title: &str) {
        Block::default()
            .title(format!(" {} ", title))
            .title_style(
                Style::default()
                    .fg(self.title_color)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border_color))
            .style(Style::default().bg(self.bg_color))
            .render(area, buf);
    }

    fn inner(area: Rect) -> Rect {
        Rect {
            x: area.x + DIALOG_H_PADDING,
            y: area.y + DIALOG_V_PADDING,
            width: area.width.saturating_sub(DIALOG_H_PADDING * 2),
            height: area.height.saturating_sub(3),
        }
    }

    fn render_hint(&self, buf: &mut Buffer, area: Rect, hint: &str) {
        let x = area.x + area.width.saturating_sub(hint.width() as u16) / 2;
        let y = area.y + area.height.saturating_sub(2);
        buf.set_string(x, y, hint, Style::default().fg(self.muted_color));
    }

    /// 스크롤바 (내용이 화면보다 많을 때만)
    fn render_scrollbar(&self, buf: &mut Buffer, area: Rect, inner: Rect, total: usize, scroll: usize) {
        let visible = inner.height as usize;
        if total <= visible || visible == 0 {
            return;
        }
        let max_scroll = total - visible;
        let thumb_height = (visible * visible / total).max(1);
        let thumb_pos = scroll.min(max_scroll) * visible.saturating_sub(thumb_height) / max_scroll;

        let x = area.x + area.width - 2;
        for i in 0..visible {
            let (symbol, color) = if i >= thumb_pos && i < thumb_pos + thumb_height {
                ("┃", self.fg_color)
            } else {
                ("│", self.muted_color)
            };
            buf.set_string(x, inner.y + i as u16, symbol, Style::default().fg(color));
        }
    }

    fn render_help(&self, buf: &mut Buffer, area: Rect, scroll_offset: usize) {
        self.frame(buf, area, "Keyboard Shortcuts");
        let inner = Self::inner(area);

        let header_style = Style::default()
            .fg(self.title_color)
            .add_modifier(Modifier::BOLD);
        let key_style = Style::default().fg(self.key_color);
        let desc_style = Style::default().fg(self.fg_color);

        let rows = help_rows();
        let visible = inner.height as usize;
        let scroll = scroll_offset.min(rows.len().saturating_sub(visible));
        let key_col_width = 16u16;

        for (i, (is_header, col1, col2)) in rows.iter().skip(scroll).take(visible).enumerate() {
            let y = inner.y + i as u16;
            if *is_header {
                buf.set_string(inner.x, y, col1, header_style);
            } else if !col1.is_empty() {
                buf.set_string(inner.x + 2, y, col1, key_style);
                buf.set_string(inner.x + key_col_width, y, col2, desc_style);
            }
        }

        self.render_scrollbar(buf, area, inner, rows.len(), scroll);
        self.render_hint(buf, area, "Esc/?:Close  j/k:Scroll");
    }

    fn render_activity(
        &self,
        buf: &mut Buffer,
        area: Rect,
        entries: &[CommittedAction],
        scroll_offset: usize,
    ) {
        self.frame(buf, area, "Committed Actions");
        let inner = Self::inner(area);

        if entries.is_empty() {
            buf.set_string(
                inner.x,
                inner.y,
                "Nothing confirmed yet",
                Style::default().fg(self.muted_color),
            );
        } else {
            let visible = inner.height as usize;
            let scroll = scroll_offset.min(entries.len().saturating_sub(visible));
            for (i, entry) in entries.iter().skip(scroll).take(visible).enumerate() {
                let y = inner.y + i as u16;
                let clock = format_clock(entry.committed_at);
                buf.set_string(inner.x, y, &clock, Style::default().fg(self.muted_color));

                let detail = format!(
                    "{:<13} #{}  {}",
                    entry.screen.title(),
                    entry.item_index + 1,
                    ActionRegistry::lookup(entry.action).title
                );
                let detail_width = inner.width.saturating_sub(10) as usize;
                buf.set_string(
                    inner.x + 10,
                    y,
                    truncate_to_width(&detail, detail_width),
                    Style::default().fg(self.fg_color),
                );
            }
            self.render_scrollbar(buf, area, inner, entries.len(), scroll);
        }

        self.render_hint(buf, area, "Esc/L:Close  j/k:Scroll");
    }

    fn render_message(&self, buf: &mut Buffer, area: Rect, title: &str, message: &str) {
        self.frame(buf, area, title);

        let inner = Rect {
            height: area.height.saturating_sub(DIALOG_V_PADDING + 3),
            ..Self::inner(area)
        };
        Paragraph::new(message)
            .style(Style::default().fg(self.fg_color))
            .wrap(Wrap { trim: true })
            .render(inner, buf);

        let button_y = area.y + area.height.saturating_sub(2);
        let button_x = area.x + area.width.saturating_sub(4) / 2;
        render_button(
            buf,
            button_x,
            button_y,
            "OK",
            self.button_selected_fg,
            self.button_selected_bg,
        );
    }
}

impl Widget for Dialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dialog_area = self.calculate_area(area);
        Clear.render(dialog_area, buf);

        match self.kind {
            DialogKind::Message { title, message } => {
                self.render_message(buf, dialog_area, title, message);
            }
            DialogKind::Help { scroll_offset } => {
                self.render_help(buf, dialog_area, *scroll_offset);
            }
            DialogKind::Activity {
                entries,
                scroll_offset,
            } => {
                self.render_activity(buf, dialog_area, entries, *scroll_offset);
            }
        }
    }
}
