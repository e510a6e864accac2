use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the club backend.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::players::register_player,
        crate::routes::players::list_players,
        crate::routes::players::get_player,
        crate::routes::teams::create_team,
        crate::routes::teams::list_teams,
        crate::routes::teams::get_team,
        crate::routes::teams::get_team_players,
        crate::routes::games::create_game,
        crate::routes::games::list_games,
        crate::routes::games::get_game,
        crate::routes::news::create_news,
        crate::routes::news::list_news,
        crate::routes::stats::get_stats,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::player::RegisterPlayerRequest,
            crate::dto::player::PlayerResponse,
            crate::dto::team::CreateTeamRequest,
            crate::dto::team::TeamResponse,
            crate::dto::game::CreateGameRequest,
            crate::dto::game::GameResponse,
            crate::dto::news::CreateNewsRequest,
            crate::dto::news::NewsResponse,
            crate::dto::stats::StatsResponse,
            crate::dao::models::AgeGroup,
            crate::dao::models::GameStatus,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "players", description = "Player registration and roster assignment"),
        (name = "teams", description = "Team management"),
        (name = "games", description = "Game scheduling"),
        (name = "news", description = "Club news"),
        (name = "stats", description = "Dashboard statistics"),
    )
)]
pub struct ApiDoc;
