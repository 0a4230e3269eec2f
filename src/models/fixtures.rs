// Sample data - 화면에 표시할 고정 샘플 데이터
//
// 서버 연동이 없으므로 모든 화면은 이 데이터로 그려집니다.

use super::ballot::BallotCard;
use super::delegation::{DelegateProfile, DelegationOverview, StatSummary};
use chrono::{DateTime, Duration, Local};

/// 위임 화면 카테고리 탭
pub const CATEGORIES: [&str; 3] = ["GENERAL", "EDUCATION", "TECHNOLOGY"];
/// 초기 선택 카테고리 (EDUCATION)
pub const DEFAULT_CATEGORY_INDEX: usize = 1;

/// 법안 카드 목록 (투표/위임 화면 공용)
pub fn ballot_cards() -> Vec<BallotCard> {
    vec![
        BallotCard::vote(
            "教育",
            "義務教育諸学校等の施設費の国庫負担等に関する法律の一部を改正する法律案",
            4,
        ),
        BallotCard::vote(
            "地方創生",
            "地域人口の急減に対処するための特定地域づくり事業の推進に関する法律の一部を改正する法律案",
            2,
        ),
        BallotCard::delegation(
            "安全保障",
            "サイバー安全保障を確保するための能動的サイバー防御等に係る態勢の整備の推進に関する法律案",
            "John Doe",
            false,
        ),
    ]
}

/// 투표 화면 통계 카드
pub fn cast_vote_stats() -> Vec<StatSummary> {
    vec![
        StatSummary::new(5, "votes to cast", "award", 0xDDF5D8).subtitle("received: 3"),
        StatSummary::new(24, "votes casted", "clipboard-check", 0xE3DBF2),
    ]
}

/// 위임 화면 요약 (기준 시각 `now`)
pub fn delegation_overview(now: DateTime<Local>) -> DelegationOverview {
    DelegationOverview {
        user_name: "Jane Doe".to_string(),
        incoming_requests: 10,
        stats: vec![
            StatSummary::new(18, "votes in my hand", "award", 0xDDF5D8).subtitle("received: 3"),
            StatSummary::new(8, "votes delegated", "account-multiple", 0xE3DBF2),
        ],
        categories: CATEGORIES.iter().map(|c| c.to_string()).collect(),
        auto_delegate_to: DelegateProfile {
            name: "John Doe".to_string(),
            role: "Professor".to_string(),
            category: "Education".to_string(),
            last_active: now - Duration::minutes(41),
        },
        received_from: "John Smith".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ballot_cards_modes() {
        let cards = ballot_cards();
        assert_eq!(cards.len(), 3);
        assert!(!cards[0].is_delegation());
        assert!(!cards[1].is_delegation());
        assert!(cards[2].is_delegation());
    }

    #[test]
    fn test_delegation_overview_defaults() {
        let now = Local::now();
        let overview = delegation_overview(now);
        assert_eq!(overview.incoming_requests, 10);
        assert_eq!(overview.categories[DEFAULT_CATEGORY_INDEX], "EDUCATION");
        assert_eq!(
            now - overview.auto_delegate_to.last_active,
            Duration::minutes(41)
        );
    }
}
