/// Admin service for score table maintenance.
pub mod admin_service;
/// OpenAPI documentation generation.
pub mod documentation;
/// Core move handling tying sessions, rules, scoring, and persistence.
pub mod game_service;
/// Health check service.
pub mod health_service;
/// Leaderboard read service.
pub mod score_service;
/// Storage connection supervisor with reconnect and degraded mode.
pub mod storage_supervisor;
