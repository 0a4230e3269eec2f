// Layout system - 반응형 레이아웃 시스템
//
// 터미널 크기에 따른 레이아웃 모드:
// - 100+ cols: 법안 카드를 가로로 나란히 표시
// - 60-99 cols: 선택된 카드 하나만 표시 (h/l로 이동)
// - <60 cols 또는 <20 rows: 경고 메시지 표시

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// 최소 터미널 크기 상수
pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 20;
pub const WIDE_MIN_WIDTH: u16 = 100;

/// 레이아웃 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// 카드 나란히 표시 (100+ cols)
    Wide,
    /// 카드 하나씩 표시 (60-99 cols)
    Compact,
    /// 경고 모드 (터미널이 너무 작음)
    TooSmall,
}

impl LayoutMode {
    /// 상태바 표시용 문자열
    pub fn label(self) -> &'static str {
        match self {
            LayoutMode::Wide => "WIDE",
            LayoutMode::Compact => "COMPACT",
            LayoutMode::TooSmall => "WARN",
        }
    }
}

/// 레이아웃 영역
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutAreas {
    /// 상단 화면 탭 영역
    pub tab_bar: Rect,
    /// 화면 본문 영역
    pub body: Rect,
    /// 상태바 영역
    pub status_bar: Rect,
    /// 하단 커맨드 바 영역
    pub command_bar: Rect,
    /// 경고 메시지 영역 (TooSmall 모드에서 사용)
    pub warning: Rect,
}

/// 레이아웃 매니저
#[derive(Debug)]
pub struct LayoutManager {
    mode: LayoutMode,
    terminal_size: (u16, u16),
    areas: LayoutAreas,
}

impl Default for LayoutManager {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutManager {
    pub fn new() -> Self {
        Self {
            mode: LayoutMode::Compact,
            terminal_size: (80, 24),
            areas: LayoutAreas::default(),
        }
    }

    /// 터미널 크기에 따라 레이아웃 모드 결정
    fn determine_mode(width: u16, height: u16) -> LayoutMode {
        if width < MIN_WIDTH || height < MIN_HEIGHT {
            LayoutMode::TooSmall
        } else if width < WIDE_MIN_WIDTH {
            LayoutMode::Compact
        } else {
            LayoutMode::Wide
        }
    }

    /// 터미널 크기 업데이트 및 레이아웃 재계산
    pub fn update(&mut self, area: Rect) {
        self.terminal_size = (area.width, area.height);
        self.mode = Self::determine_mode(area.width, area.height);
        self.areas = self.calculate_areas(area);
    }

    fn calculate_areas(&self, area: Rect) -> LayoutAreas {
        if self.mode == LayoutMode::TooSmall {
            return LayoutAreas {
                warning: area,
                ..Default::default()
            };
        }

        // 탭바 | 본문 | 상태바 | 커맨드바
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(10),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        LayoutAreas {
            tab_bar: chunks[0],
            body: chunks[1],
            status_bar: chunks[2],
            command_bar: chunks[3],
            warning: Rect::default(),
        }
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn areas(&self) -> &LayoutAreas {
        &self.areas
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    pub fn is_too_small(&self) -> bool {
        self.mode == LayoutMode::TooSmall
    }

    pub fn is_wide(&self) -> bool {
        self.mode == LayoutMode::Wide
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determine_mode() {
        assert_eq!(LayoutManager::determine_mode(100, 24), LayoutMode::Wide);
        assert_eq!(LayoutManager::determine_mode(160, 50), LayoutMode::Wide);

        assert_eq!(LayoutManager::determine_mode(99, 24), LayoutMode::Compact);
        assert_eq!(LayoutManager::determine_mode(60, 20), LayoutMode::Compact);

        assert_eq!(LayoutManager::determine_mode(59, 24), LayoutMode::TooSmall);
        assert_eq!(LayoutManager::determine_mode(120, 19), LayoutMode::TooSmall);
    }

    #[test]
    fn test_update_computes_areas() {
        let mut manager = LayoutManager::new();
        manager.update(Rect::new(0, 0, 120, 30));

        let areas = manager.areas();
        assert!(manager.is_wide());
        assert_eq!(areas.tab_bar, Rect::new(0, 0, 120, 1));
        assert_eq!(areas.body.height, 27);
        assert_eq!(areas.status_bar.y, 28);
        assert_eq!(areas.command_bar.y, 29);
        assert_eq!(areas.warning, Rect::default());
    }

    #[test]
    fn test_too_small_uses_warning_area() {
        let mut manager = LayoutManager::new();
        manager.update(Rect::new(0, 0, 40, 10));

        assert!(manager.is_too_small());
        assert_eq!(manager.areas().warning, Rect::new(0, 0, 40, 10));
        assert_eq!(manager.areas().body, Rect::default());
        assert_eq!(manager.terminal_size(), (40, 10));
    }
}
