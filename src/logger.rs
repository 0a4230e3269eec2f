//! 파일 기반 로깅 (simplelog)
//!
//! TUI가 화면 전체를 쓰므로 로그는 파일로만 남깁니다.
//! - 위치: 캐시 디렉토리 (`~/.cache/ballotdesk/` on Linux)
//! - `BALLOTDESK_LOG_DIR` 환경변수로 위치 변경 가능
//! - 레벨: `RUST_LOG` (기본 info)

use crate::utils::error::{BallotDeskError, Result};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::env;
use std::fs::{self, File};
use std::path::PathBuf;

const LOG_DIR_ENV: &str = "BALLOTDESK_LOG_DIR";

fn log_dir() -> PathBuf {
    if let Ok(custom) = env::var(LOG_DIR_ENV) {
        let trimmed = custom.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }
    dirs::cache_dir()
        .map(|dir| dir.join("ballotdesk"))
        .unwrap_or_else(env::temp_dir)
}

/// 타임스탬프가 붙은 로그 파일 경로
fn log_file_path() -> PathBuf {
    let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    log_dir().join(format!("ballotdesk-{}.log", timestamp))
}

/// RUST_LOG 값을 레벨로 변환 (알 수 없는 값은 info)
fn parse_level(value: Option<&str>) -> LevelFilter {
    match value.map(|v| v.trim().to_lowercase()).as_deref() {
        Some("off") => LevelFilter::Off,
        Some("error") => LevelFilter::Error,
        Some("warn") => LevelFilter::Warn,
        Some("debug") => LevelFilter::Debug,
        Some("trace") => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

/// 파일 로거 초기화
///
/// 생성된 로그 파일 경로를 반환합니다.
pub fn init() -> Result<PathBuf> {
    let log_file = log_file_path();
    if let Some(parent) = log_file.parent() {
        fs::create_dir_all(parent)?;
    }

    let level = parse_level(env::var("RUST_LOG").ok().as_deref());

    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_time_offset_to_local()
        .unwrap_or_else(|c| c)
        .build();

    let file = File::create(&log_file)?;
    WriteLogger::init(level, config, file)
        .map_err(|e| BallotDeskError::Config(format!("logger: {}", e)))?;

    Ok(log_file)
}
