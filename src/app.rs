use crate::models::fixtures::{
    ballot_cards, cast_vote_stats, delegation_overview, DEFAULT_CATEGORY_INDEX,
};
use crate::models::{DelegationOverview, ScreenKind, ScreenState, Section, StatSummary};
use crate::ui::{DialogKind, LayoutManager, LayoutMode, ThemeManager};
use crate::utils::error::{BallotDeskError, Result};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

mod controllers;
mod dialogs;
mod navigation;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedAppState {
    version: u32,
    theme: String,
    last_screen: String,
}

/// 앱 상태
pub struct App {
    /// 종료 플래그
    pub should_quit: bool,
    /// 레이아웃 매니저
    pub layout: LayoutManager,
    /// 테마 관리자
    pub theme_manager: ThemeManager,
    /// 현재 화면
    pub current_screen: ScreenKind,
    /// Cast Vote 화면 상태
    pub vote_screen: ScreenState,
    /// Delegate Vote 화면 상태
    pub delegate_screen: ScreenState,
    /// Cast Vote 통계 카드
    pub vote_stats: Vec<StatSummary>,
    /// Delegate Vote 요약
    pub overview: DelegationOverview,
    /// 현재 표시 중인 정보 다이얼로그
    pub dialog: Option<DialogKind>,
    /// 토스트 메시지 (3초 후 자동 소멸)
    pub toast_message: Option<(String, Instant)>,
    /// 테스트에서 설정 저장 경로를 격리하기 위한 override
    state_store_override: Option<PathBuf>,
}

impl App {
    const APP_STATE_VERSION: u32 = 1;

    pub fn new() -> Result<Self> {
        let mut theme_manager = ThemeManager::new();
        match theme_manager.load_themes_from_config_dir() {
            Ok(0) => {}
            Ok(count) => log::info!("loaded {} custom theme(s)", count),
            Err(e) => log::warn!("failed to load custom themes: {:#}", e),
        }

        let mut app = Self::with_parts(theme_manager, None);
        app.load_persisted_state();
        log::info!(
            "started on {} screen with theme {}",
            app.current_screen.id(),
            app.current_theme_name()
        );
        Ok(app)
    }

    #[cfg(test)]
    pub(crate) fn new_for_test() -> Self {
        use std::sync::atomic::{AtomicUsize, Ordering};

        static TEST_APP_COUNTER: AtomicUsize = AtomicUsize::new(0);
        let suffix = TEST_APP_COUNTER.fetch_add(1, Ordering::Relaxed);
        let state_store_override = std::env::temp_dir().join(format!(
            "ballotdesk-test-settings-{}-{}.toml",
            std::process::id(),
            suffix
        ));

        Self::with_parts(ThemeManager::new(), Some(state_store_override))
    }

    fn with_parts(theme_manager: ThemeManager, state_store_override: Option<PathBuf>) -> Self {
        let started_at = Local::now();
        let vote_stats = cast_vote_stats();
        let overview = delegation_overview(started_at);

        let mut delegate_screen = ScreenState::new(ScreenKind::DelegateVote, ballot_cards())
            .with_stats(overview.stats.len());
        delegate_screen.section = Section::AutoDelegate;
        delegate_screen.category_index = DEFAULT_CATEGORY_INDEX;

        Self {
            should_quit: false,
            layout: LayoutManager::new(),
            theme_manager,
            current_screen: ScreenKind::default(),
            vote_screen: ScreenState::new(ScreenKind::CastVote, ballot_cards())
                .with_stats(vote_stats.len()),
            delegate_screen,
            vote_stats,
            overview,
            dialog: None,
            toast_message: None,
            state_store_override,
        }
    }

    /// 종료
    pub fn quit(&mut self) {
        if let Err(e) = self.save_persisted_state() {
            log::warn!("failed to save settings: {}", e);
        }
        self.should_quit = true;
    }

    fn state_store_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.state_store_override {
            return Some(path.clone());
        }
        if let Ok(custom) = env::var("BALLOTDESK_SETTINGS_FILE") {
            let trimmed = custom.trim();
            if !trimmed.is_empty() {
                return Some(PathBuf::from(trimmed));
            }
        }
        dirs::home_dir().map(|home| home.join(".ballotdesk").join("settings.toml"))
    }

    fn encode_app_state(&self) -> Result<String> {
        let payload = PersistedAppState {
            version: Self::APP_STATE_VERSION,
            theme: self.current_theme_name().to_string(),
            last_screen: self.current_screen.id().to_string(),
        };
        Ok(toml::to_string_pretty(&payload)?)
    }

    fn decode_app_state(data: &str) -> Result<PersistedAppState> {
        let parsed: PersistedAppState = toml::from_str(data)?;
        if parsed.version != Self::APP_STATE_VERSION {
            return Err(BallotDeskError::Config(format!(
                "settings version {} (expected {})",
                parsed.version,
                Self::APP_STATE_VERSION
            )));
        }
        if parsed.theme.trim().is_empty() {
            return Err(BallotDeskError::Config("settings theme is empty".to_string()));
        }
        Ok(parsed)
    }

    fn save_persisted_state(&self) -> Result<()> {
        let Some(path) = self.state_store_path() else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = self.encode_app_state()?;
        fs::write(&path, data)?;
        log::debug!("settings saved to {}", path.display());
        Ok(())
    }

    fn load_persisted_state(&mut self) {
        let Some(path) = self.state_store_path() else {
            return;
        };
        let Ok(data) = fs::read_to_string(&path) else {
            return;
        };
        let state = match Self::decode_app_state(&data) {
            Ok(state) => state,
            Err(e) => {
                log::warn!("ignoring settings at {}: {}", path.display(), e);
                return;
            }
        };

        if let Err(e) = self.theme_manager.switch_theme(&state.theme) {
            log::warn!("{}", e);
        }
        if let Some(screen) = ScreenKind::from_id(&state.last_screen) {
            self.current_screen = screen;
        }
    }

    fn current_theme_name(&self) -> &str {
        self.theme_manager.current_name()
    }

    fn cycle_theme_and_save(&mut self) {
        self.theme_manager.cycle_theme();
        let name = self.current_theme_name().to_string();
        if let Err(e) = self.save_persisted_state() {
            log::warn!("failed to save settings: {}", e);
        }
        self.set_toast(&format!("Theme: {}", name));
    }

    /// 종료 상태 확인
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// 현재 화면 상태
    pub fn active_screen(&self) -> &ScreenState {
        match self.current_screen {
            ScreenKind::CastVote => &self.vote_screen,
            ScreenKind::DelegateVote => &self.delegate_screen,
        }
    }

    /// 현재 화면 상태 (mutable)
    pub fn active_screen_mut(&mut self) -> &mut ScreenState {
        match self.current_screen {
            ScreenKind::CastVote => &mut self.vote_screen,
            ScreenKind::DelegateVote => &mut self.delegate_screen,
        }
    }

    /// 현재 화면의 확인 모달이 열려 있는지
    pub fn is_confirming(&self) -> bool {
        self.active_screen().confirmation.is_visible()
    }

    /// 두 화면에서 확정된 액션 수
    pub fn committed_count(&self) -> usize {
        self.vote_screen.confirmation.sink().len() + self.delegate_screen.confirmation.sink().len()
    }

    /// 상태바용 포커스 설명
    pub fn focus_label(&self) -> String {
        let screen = self.active_screen();
        match screen.section {
            Section::Ballots => match screen.selected() {
                Some(card) => format!(
                    "Act {}/{} · {}",
                    screen.selected_card + 1,
                    screen.cards.len(),
                    card.category
                ),
                None => "No acts".to_string(),
            },
            Section::Stats => format!(
                "Stat {}/{}",
                screen.selected_stat + 1,
                screen.stat_count
            ),
            section => section.title().to_string(),
        }
    }

    /// 현재 화면의 통계 카드
    pub fn active_stats(&self) -> &[StatSummary] {
        match self.current_screen {
            ScreenKind::CastVote => &self.vote_stats,
            ScreenKind::DelegateVote => &self.overview.stats,
        }
    }

    /// 레이아웃 모드 반환
    pub fn layout_mode(&self) -> LayoutMode {
        self.layout.mode()
    }

    /// 레이아웃 모드 문자열 반환
    pub fn layout_mode_str(&self) -> &'static str {
        self.layout.mode().label()
    }

    /// 커맨드바 항목 (현재 포커스 기준 활성 표시)
    pub fn command_items(&self) -> Vec<crate::ui::CommandItem> {
        crate::core::actions::generate_command_bar_items(self.active_screen().available_actions())
    }
}

#[cfg(test)]
mod tests;
