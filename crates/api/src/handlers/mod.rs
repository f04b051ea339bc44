/// Inbound chat webhook orchestration
pub mod webhook;
