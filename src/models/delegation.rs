use crate::core::registry::RgbColor;
use chrono::{DateTime, Local};

/// 통계 카드 데이터
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatSummary {
    pub count: u32,
    pub title: String,
    pub subtitle: Option<String>,
    /// 아이콘 이름 (award, clipboard-check, ...)
    pub icon: &'static str,
    pub background: RgbColor,
}

impl StatSummary {
    pub fn new(count: u32, title: impl Into<String>, icon: &'static str, background: u32) -> Self {
        Self {
            count,
            title: title.into(),
            subtitle: None,
            icon,
            background: RgbColor::from_u32(background),
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }
}

/// 자동 위임 대상 프로필
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelegateProfile {
    pub name: String,
    pub role: String,
    pub category: String,
    pub last_active: DateTime<Local>,
}

/// 위임 화면 요약 정보
#[derive(Debug, Clone)]
pub struct DelegationOverview {
    pub user_name: String,
    /// 나에게 들어온 위임 요청 수
    pub incoming_requests: u32,
    pub stats: Vec<StatSummary>,
    pub categories: Vec<String>,
    pub auto_delegate_to: DelegateProfile,
    /// 나에게 표를 위임한 사람
    pub received_from: String,
}
