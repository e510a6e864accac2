//! Orchestration layer between routes and storage.

/// OpenAPI documentation generation.
pub mod documentation;
/// Game scheduling pass-through.
pub mod game_service;
/// Health check service.
pub mod health_service;
/// News pass-through.
pub mod news_service;
/// Player registration and roster auto-assignment.
pub mod player_service;
/// Dashboard statistics aggregation.
pub mod stats_service;
/// Storage persistence lifecycle supervisor.
pub mod storage_supervisor;
/// Team management pass-through.
pub mod team_service;
