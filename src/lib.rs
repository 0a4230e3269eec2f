//! BallotDesk - 법안 투표와 표 위임을 위한 터미널 클라이언트

pub mod app;
pub mod core;
pub mod logger;
pub mod models;
pub mod ui;
pub mod utils;
