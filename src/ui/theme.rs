use crate::core::registry::RgbColor;
use crate::utils::error::BallotDeskError;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 색상 테마 시스템
///
/// 애플리케이션 전체의 색상 테마를 관리합니다.
/// TOML 파일에서 테마를 로드하거나 미리 정의된 테마를 사용할 수 있습니다.
/// 통계 카드 배경과 확인 모달 아이콘 색은 데이터에 들어 있으므로 테마와 무관합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    // 배경/전경
    pub bg_primary: ColorDef,
    pub fg_primary: ColorDef,
    pub fg_muted: ColorDef,

    // 카드
    pub card_border: ColorDef,
    pub card_active_border: ColorDef,
    pub card_bg: ColorDef,
    pub stat_fg: ColorDef,

    // 배너 (Incoming Delegation)
    pub banner_bg: ColorDef,
    pub banner_fg: ColorDef,

    // 버튼
    pub button_fg: ColorDef,
    pub button_bg: ColorDef,
    pub button_focus_fg: ColorDef,
    pub button_focus_bg: ColorDef,
    pub button_disabled: ColorDef,

    // UI 컴포넌트
    pub tab_bar_bg: ColorDef,
    pub tab_bar_fg: ColorDef,
    pub tab_active_bg: ColorDef,
    pub tab_active_fg: ColorDef,
    pub status_bar_bg: ColorDef,
    pub status_bar_fg: ColorDef,
    pub command_bar_bg: ColorDef,
    pub command_bar_fg: ColorDef,
    pub modal_bg: ColorDef,
    pub modal_border: ColorDef,

    // 강조
    pub accent: ColorDef,
    pub warning: ColorDef,
    pub error: ColorDef,
    pub success: ColorDef,
}

/// 색상 정의 (TOML 직렬화/역직렬화 지원)
///
/// Hex 문자열("#1e1e1e") 또는 색상 이름("Red")을 지원합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorDef {
    Hex(String),
    Named(String),
}

impl ColorDef {
    /// ColorDef를 ratatui의 Color로 변환
    pub fn to_color(&self) -> Color {
        match self {
            ColorDef::Hex(hex) => parse_hex_color(hex),
            ColorDef::Named(name) => parse_named_color(name),
        }
    }
}

impl From<&str> for ColorDef {
    fn from(s: &str) -> Self {
        if s.starts_with('#') {
            ColorDef::Hex(s.to_string())
        } else {
            ColorDef::Named(s.to_string())
        }
    }
}

impl From<RgbColor> for Color {
    fn from(rgb: RgbColor) -> Self {
        Color::Rgb(rgb.r, rgb.g, rgb.b)
    }
}

/// Hex 색상 문자열을 Color로 파싱 (형식이 틀리면 Reset)
fn parse_hex_color(hex: &str) -> Color {
    RgbColor::parse_hex(hex)
        .map(Color::from)
        .unwrap_or(Color::Reset)
}

/// 색상 이름을 Color로 파싱
fn parse_named_color(name: &str) -> Color {
    match name.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        "lightred" => Color::LightRed,
        "lightgreen" => Color::LightGreen,
        "lightyellow" => Color::LightYellow,
        "lightblue" => Color::LightBlue,
        "lightmagenta" => Color::LightMagenta,
        "lightcyan" => Color::LightCyan,
        "white" => Color::White,
        _ => Color::Reset,
    }
}

impl Theme {
    /// Dark 테마 (기본)
    pub fn dark() -> Self {
        Theme {
            bg_primary: "#1e1e1e".into(),
            fg_primary: "#d4d4d4".into(),
            fg_muted: "#8a8a8a".into(),

            card_border: "#3c3c3c".into(),
            card_active_border: "#4caf50".into(),
            card_bg: "#252526".into(),
            stat_fg: "#1e1e1e".into(),

            banner_bg: "#2e7d32".into(),
            banner_fg: "#ffffff".into(),

            button_fg: "#d4d4d4".into(),
            button_bg: "#3c3c3c".into(),
            button_focus_fg: "#ffffff".into(),
            button_focus_bg: "#4caf50".into(),
            button_disabled: "#5a5a5a".into(),

            tab_bar_bg: "#2d2d30".into(),
            tab_bar_fg: "#cccccc".into(),
            tab_active_bg: "#4caf50".into(),
            tab_active_fg: "#ffffff".into(),
            status_bar_bg: "#007acc".into(),
            status_bar_fg: "#ffffff".into(),
            command_bar_bg: "#2d2d30".into(),
            command_bar_fg: "#cccccc".into(),
            modal_bg: "#252526".into(),
            modal_border: "#d4d4d4".into(),

            accent: "#4caf50".into(),
            warning: "#ffa500".into(),
            error: "#f44747".into(),
            success: "#4ec9b0".into(),
        }
    }

    /// Light 테마
    pub fn light() -> Self {
        Theme {
            bg_primary: "#ffffff".into(),
            fg_primary: "#1e1e1e".into(),
            fg_muted: "#6e6e6e".into(),

            card_border: "#cccccc".into(),
            card_active_border: "#2e7d32".into(),
            card_bg: "#ffffff".into(),
            stat_fg: "#1e1e1e".into(),

            banner_bg: "#4caf50".into(),
            banner_fg: "#ffffff".into(),

            button_fg: "#1e1e1e".into(),
            button_bg: "#e0e0e0".into(),
            button_focus_fg: "#ffffff".into(),
            button_focus_bg: "#2e7d32".into(),
            button_disabled: "#b0b0b0".into(),

            tab_bar_bg: "#f3f3f3".into(),
            tab_bar_fg: "#1e1e1e".into(),
            tab_active_bg: "#2e7d32".into(),
            tab_active_fg: "#ffffff".into(),
            status_bar_bg: "#0078d4".into(),
            status_bar_fg: "#ffffff".into(),
            command_bar_bg: "#f3f3f3".into(),
            command_bar_fg: "#1e1e1e".into(),
            modal_bg: "#ffffff".into(),
            modal_border: "#1e1e1e".into(),

            accent: "#2e7d32".into(),
            warning: "#ff8c00".into(),
            error: "#e51400".into(),
            success: "#107c10".into(),
        }
    }

    /// High Contrast 테마
    pub fn high_contrast() -> Self {
        Theme {
            bg_primary: "#000000".into(),
            fg_primary: "#ffffff".into(),
            fg_muted: "#c0c0c0".into(),

            card_border: "#808080".into(),
            card_active_border: "#00ff00".into(),
            card_bg: "#000000".into(),
            stat_fg: "#000000".into(),

            banner_bg: "#00ff00".into(),
            banner_fg: "#000000".into(),

            button_fg: "#ffffff".into(),
            button_bg: "#000000".into(),
            button_focus_fg: "#000000".into(),
            button_focus_bg: "#00ff00".into(),
            button_disabled: "#808080".into(),

            tab_bar_bg: "#000000".into(),
            tab_bar_fg: "#ffffff".into(),
            tab_active_bg: "#00ff00".into(),
            tab_active_fg: "#000000".into(),
            status_bar_bg: "#000000".into(),
            status_bar_fg: "#00ff00".into(),
            command_bar_bg: "#000000".into(),
            command_bar_fg: "#ffffff".into(),
            modal_bg: "#000000".into(),
            modal_border: "#ffffff".into(),

            accent: "#00ff00".into(),
            warning: "#ffff00".into(),
            error: "#ff0000".into(),
            success: "#00ff00".into(),
        }
    }

    /// TOML 파일에서 테마 로드
    pub fn from_file(path: &Path) -> Result<Self, anyhow::Error> {
        let content = fs::read_to_string(path)?;
        let theme: Theme = toml::from_str(&content)?;
        Ok(theme)
    }

    /// 테마를 TOML 파일로 저장
    pub fn save_to_file(&self, path: &Path) -> Result<(), anyhow::Error> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// 테마 관리자
///
/// 현재 활성 테마를 관리하고 런타임에 테마를 전환합니다.
pub struct ThemeManager {
    current_index: usize,
    available_themes: Vec<(String, Theme)>,
}

impl ThemeManager {
    /// 기본 테마 관리자 생성 (Dark 테마)
    pub fn new() -> Self {
        Self {
            current_index: 0,
            available_themes: vec![
                ("dark".to_string(), Theme::dark()),
                ("light".to_string(), Theme::light()),
                ("high_contrast".to_string(), Theme::high_contrast()),
            ],
        }
    }

    /// 현재 테마 반환
    pub fn current(&self) -> &Theme {
        &self.available_themes[self.current_index].1
    }

    /// 현재 테마 이름
    pub fn current_name(&self) -> &str {
        &self.available_themes[self.current_index].0
    }

    /// 테마 전환 (이름으로)
    pub fn switch_theme(&mut self, name: &str) -> Result<(), BallotDeskError> {
        match self.available_themes.iter().position(|(n, _)| n == name) {
            Some(index) => {
                self.current_index = index;
                Ok(())
            }
            None => Err(BallotDeskError::Config(format!("unknown theme: {}", name))),
        }
    }

    /// 다음 테마로 순환
    pub fn cycle_theme(&mut self) {
        self.current_index = (self.current_index + 1) % self.available_themes.len();
    }

    /// 사용 가능한 테마 목록 반환
    pub fn available_themes(&self) -> Vec<String> {
        self.available_themes
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// 커스텀 테마 추가 (같은 이름이면 교체)
    pub fn add_theme(&mut self, name: String, theme: Theme) {
        if let Some(slot) = self.available_themes.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = theme;
        } else {
            self.available_themes.push((name, theme));
        }
    }

    /// 설정 디렉토리(`<config>/ballotdesk/themes`)에서 테마 파일 로드
    pub fn load_themes_from_config_dir(&mut self) -> Result<usize, anyhow::Error> {
        match dirs::config_dir() {
            Some(config_dir) => self.load_themes_from_dir(&config_dir.join("ballotdesk").join("themes")),
            None => Ok(0),
        }
    }

    /// 디렉토리의 `*.toml` 테마를 모두 로드하고 로드된 개수를 반환
    ///
    /// 파싱에 실패한 파일은 경고 로그만 남기고 건너뜁니다.
    pub fn load_themes_from_dir(&mut self, themes_dir: &Path) -> Result<usize, anyhow::Error> {
        if !themes_dir.exists() {
            return Ok(0);
        }

        let mut paths: Vec<PathBuf> = fs::read_dir(themes_dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("toml"))
            .collect();
        paths.sort();

        let mut loaded = 0;
        for path in paths {
            match Theme::from_file(&path) {
                Ok(theme) => {
                    let name = path
                        .file_stem()
                        .and_then(|s| s.to_str())
                        .unwrap_or("custom")
                        .to_string();
                    log::info!("loaded theme '{}' from {}", name, path.display());
                    self.add_theme(name, theme);
                    loaded += 1;
                }
                Err(e) => log::warn!("skipping theme {}: {}", path.display(), e),
            }
        }
        Ok(loaded)
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}
