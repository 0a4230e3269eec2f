// Formatters - 상대 시간, 복수형, 표시 폭 기반 자르기/줄바꿈

use chrono::{DateTime, Local};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 두 시각의 차이를 "N minutes ago" 형식으로 포맷팅
///
/// `then`이 `now`보다 미래면 "just now"로 취급합니다.
///
/// # Examples
/// ```
/// use chrono::{Duration, Local};
/// use ballotdesk::utils::formatter::format_time_ago;
///
/// let now = Local::now();
/// assert_eq!(format_time_ago(now - Duration::minutes(41), now), "41 minutes ago");
/// assert_eq!(format_time_ago(now - Duration::hours(1), now), "1 hour ago");
/// ```
pub fn format_time_ago(then: DateTime<Local>, now: DateTime<Local>) -> String {
    let elapsed = now.signed_duration_since(then);
    let seconds = elapsed.num_seconds();

    if seconds < 60 {
        return "just now".to_string();
    }
    let minutes = elapsed.num_minutes();
    if minutes < 60 {
        return format!("{} ago", pluralize(minutes as usize, "minute", "minutes"));
    }
    let hours = elapsed.num_hours();
    if hours < 24 {
        return format!("{} ago", pluralize(hours as usize, "hour", "hours"));
    }
    format!(
        "{} ago",
        pluralize(elapsed.num_days() as usize, "day", "days")
    )
}

/// 로그 다이얼로그용 시각 포맷 ("HH:MM:SS", 8자 고정)
pub fn format_clock(time: DateTime<Local>) -> String {
    time.format("%H:%M:%S").to_string()
}

/// 개수에 따라 단수/복수형 반환
///
/// # Examples
/// ```
/// use ballotdesk::utils::formatter::pluralize;
///
/// assert_eq!(pluralize(1, "vote", "votes"), "1 vote");
/// assert_eq!(pluralize(3, "vote", "votes"), "3 votes");
/// assert_eq!(pluralize(0, "request", "requests"), "0 requests");
/// ```
pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

/// 표시 폭(터미널 셀 수) 기준으로 문자열 자르기
///
/// 잘리는 경우 마지막에 "…"를 붙이며, 결과 폭은 `max_width`를 넘지 않습니다.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut result = String::new();
    let mut width = 0;
    for c in text.chars() {
        let cw = c.width().unwrap_or(0);
        // "…" 자리(1칸) 확보
        if width + cw > max_width - 1 {
            break;
        }
        result.push(c);
        width += cw;
    }
    result.push('…');
    result
}

/// 표시 폭 기준 줄바꿈 (CJK 문자열처럼 공백이 없는 텍스트도 처리)
///
/// 최대 `max_lines`줄까지 만들고, 넘치면 마지막 줄을 "…"로 자릅니다.
pub fn wrap_to_width(text: &str, max_width: usize, max_lines: usize) -> Vec<String> {
    if max_width == 0 || max_lines == 0 {
        return Vec::new();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut width = 0;

    for c in text.chars() {
        let cw = c.width().unwrap_or(0);
        if width + cw > max_width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            width = 0;
        }
        current.push(c);
        width += cw;
    }
    if !current.is_empty() {
        lines.push(current);
    }

    if lines.len() > max_lines {
        let rest: String = lines[max_lines - 1..].concat();
        lines.truncate(max_lines - 1);
        lines.push(truncate_to_width(&rest, max_width));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_format_time_ago_minutes() {
        let now = Local::now();
        assert_eq!(
            format_time_ago(now - Duration::minutes(41), now),
            "41 minutes ago"
        );
        assert_eq!(
            format_time_ago(now - Duration::minutes(1), now),
            "1 minute ago"
        );
    }

    #[test]
    fn test_format_time_ago_just_now_and_future() {
        let now = Local::now();
        assert_eq!(format_time_ago(now - Duration::seconds(5), now), "just now");
        assert_eq!(format_time_ago(now + Duration::minutes(3), now), "just now");
    }

    #[test]
    fn test_format_time_ago_hours_and_days() {
        let now = Local::now();
        assert_eq!(format_time_ago(now - Duration::hours(5), now), "5 hours ago");
        assert_eq!(format_time_ago(now - Duration::days(1), now), "1 day ago");
        assert_eq!(format_time_ago(now - Duration::days(9), now), "9 days ago");
    }

    #[test]
    fn test_format_clock() {
        let formatted = format_clock(Local::now());
        assert_eq!(formatted.len(), 8);
        assert_eq!(formatted.matches(':').count(), 2);
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(0, "vote", "votes"), "0 votes");
        assert_eq!(pluralize(1, "vote", "votes"), "1 vote");
        assert_eq!(pluralize(10, "request", "requests"), "10 requests");
    }

    #[test]
    fn test_truncate_to_width_ascii() {
        assert_eq!(truncate_to_width("Professor", 20), "Professor");
        assert_eq!(truncate_to_width("Professor", 5), "Prof…");
        assert_eq!(truncate_to_width("Professor", 0), "");
    }

    #[test]
    fn test_truncate_to_width_wide_chars() {
        // 한 글자 = 2칸
        let truncated = truncate_to_width("安全保障", 5);
        assert_eq!(truncated, "安全…");
        assert!(truncated.width() <= 5);
    }

    #[test]
    fn test_wrap_to_width_wide_chars() {
        let lines = wrap_to_width("教育教育教育", 4, 5);
        assert_eq!(lines, vec!["教育", "教育", "教育"]);
    }

    #[test]
    fn test_wrap_to_width_limits_lines() {
        let lines = wrap_to_width("abcdefghij", 3, 2);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "abc");
        assert_eq!(lines[1], "de…");
    }

    #[test]
    fn test_wrap_to_width_glyph_wider_than_line() {
        // 2칸 문자가 1칸 폭보다 넓어도 빈 줄 없이 한 글자씩
        let lines = wrap_to_width("教育", 1, 5);
        assert_eq!(lines, vec!["教", "育"]);
    }

    #[test]
    fn test_wrap_to_width_zero() {
        assert!(wrap_to_width("abc", 0, 3).is_empty());
        assert!(wrap_to_width("abc", 3, 0).is_empty());
    }
}
