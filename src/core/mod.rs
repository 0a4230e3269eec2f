// Core - 키 바인딩 레지스트리와 액션 확인 흐름
pub mod actions;
pub mod confirm;
pub mod pending;
pub mod registry;
