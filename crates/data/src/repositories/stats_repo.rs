//! Stats repository.
//!
//! Reads the precomputed per-game and per-season stat tables. Nothing here
//! derives an aggregate; averages and percentages come from the store as-is.

use hoops_core::models::{
    BoxScoreLine, LeaderStat, PlayerGameStats, PlayerSeasonStats, StatsLeader,
};
use hoops_core::{StoreError, StoreResult};
use sqlx::PgPool;

use crate::models::{
    map_rows, BoxScoreLineRow, PlayerGameStatsRow, PlayerSeasonStatsRow, StatsLeaderRow,
};

const GAME_STATS_COLUMNS: &str = "pgs.statid AS id, pgs.playerid AS player_id, \
     pgs.gameid AS game_id, pgs.teamid AS team_id, \
     pgs.minutesplayed::int AS minutes_played, pgs.points::int AS points, \
     pgs.rebounds::int AS rebounds, pgs.assists::int AS assists, \
     pgs.steals::int AS steals, pgs.blocks::int AS blocks, \
     pgs.turnovers::int AS turnovers, \
     pgs.fieldgoalsmade::int AS field_goals_made, \
     pgs.fieldgoalsattempted::int AS field_goals_attempted, \
     pgs.threepointersmade::int AS three_pointers_made, \
     pgs.threepointersattempted::int AS three_pointers_attempted, \
     pgs.freethrowsmade::int AS free_throws_made, \
     pgs.freethrowsattempted::int AS free_throws_attempted";

const SEASON_STATS_COLUMNS: &str = "pss.playerid AS player_id, pss.season, \
     pss.teamid AS team_id, pss.gamesplayed::int AS games_played, \
     pss.avgpoints::numeric AS avg_points, pss.avgrebounds::numeric AS avg_rebounds, \
     pss.avgassists::numeric AS avg_assists, pss.avgsteals::numeric AS avg_steals, \
     pss.avgblocks::numeric AS avg_blocks, \
     pss.fieldgoalpercentage::numeric AS field_goal_percentage, \
     pss.threepointpercentage::numeric AS three_point_percentage, \
     pss.freethrowpercentage::numeric AS free_throw_percentage";

/// Season-stats column backing a leaderboard.
fn leader_column(stat: LeaderStat) -> &'static str {
    match stat {
        LeaderStat::Points => "pss.avgpoints",
        LeaderStat::Rebounds => "pss.avgrebounds",
        LeaderStat::Assists => "pss.avgassists",
    }
}

/// Repository for stat reads.
#[derive(Debug, Clone)]
pub struct StatsRepository {
    pool: PgPool,
}

impl StatsRepository {
    /// Creates a new repository instance.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// A player's aggregate line for one season, if recorded.
    ///
    /// # Errors
    /// Returns an error if the database query fails.
    pub async fn player_season(
        &self,
        player_id: i32,
        season: &str,
    ) -> StoreResult<Option<PlayerSeasonStats>> {
        let sql = format!(
            "SELECT {SEASON_STATS_COLUMNS} FROM PlayerSeasonStats pss \
             WHERE pss.playerid = $1 AND pss.season = $2"
        );
        let row = sqlx::query_as::<_, PlayerSeasonStatsRow>(&sql)
            .bind(player_id)
            .bind(season)
            .fetch_optional(&self.pool)
            .await
            .map_err(StoreError::unavailable)?;

        Ok(row.map(Into::into))
    }

    /// Every season line for a player, newest season first.
    ///
    /// # Errors
    /// Returns an error if the database query fails.
    pub async fn player_all_seasons(&self, player_id: i32) -> StoreResult<Vec<PlayerSeasonStats>> {
        let sql = format!(
            "SELECT {SEASON_STATS_COLUMNS} FROM PlayerSeasonStats pss \
             WHERE pss.playerid = $1 ORDER BY pss.season DESC"
        );
        let rows = sqlx::query_as::<_, PlayerSeasonStatsRow>(&sql)
            .bind(player_id)
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::unavailable)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// A player's most recent game lines.
    ///
    /// # Errors
    /// Returns an error if the database query fails.
    pub async fn player_games(&self, player_id: i32, limit: i64) -> StoreResult<Vec<PlayerGameStats>> {
        let sql = format!(
            r#"
            SELECT {GAME_STATS_COLUMNS}
            FROM PlayerGameStats pgs
            JOIN Games g ON pgs.gameid = g.gameid
            WHERE pgs.playerid = $1
            ORDER BY g.gamedate DESC, g.gameid DESC
            LIMIT $2
            "#
        );
        let rows = sqlx::query_as::<_, PlayerGameStatsRow>(&sql)
            .bind(player_id)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::unavailable)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Every stat line of a game, highest scorer first.
    ///
    /// # Errors
    /// Returns an error if the database query fails.
    pub async fn box_score(&self, game_id: i32) -> StoreResult<Vec<PlayerGameStats>> {
        let sql = format!(
            "SELECT {GAME_STATS_COLUMNS} FROM PlayerGameStats pgs \
             WHERE pgs.gameid = $1 ORDER BY pgs.points DESC, pgs.statid"
        );
        let rows = sqlx::query_as::<_, PlayerGameStatsRow>(&sql)
            .bind(game_id)
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::unavailable)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Box score lines with player names, grouped by team.
    ///
    /// # Errors
    /// Returns an error if the database query fails.
    pub async fn box_score_lines(&self, game_id: i32) -> StoreResult<Vec<BoxScoreLine>> {
        let sql = format!(
            r#"
            SELECT {GAME_STATS_COLUMNS},
                   p.firstname AS first_name,
                   p.lastname AS last_name,
                   p.position::text AS position
            FROM PlayerGameStats pgs
            JOIN Players p ON pgs.playerid = p.playerid
            WHERE pgs.gameid = $1
            ORDER BY pgs.teamid, pgs.points DESC, pgs.statid
            "#
        );
        let rows = sqlx::query_as::<_, BoxScoreLineRow>(&sql)
            .bind(game_id)
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::unavailable)?;

        map_rows(rows)
    }

    /// Top players of a season by one per-game average.
    ///
    /// # Errors
    /// Returns an error if the database query fails.
    pub async fn leaders(
        &self,
        season: &str,
        stat: LeaderStat,
        limit: i64,
    ) -> StoreResult<Vec<StatsLeader>> {
        let column = leader_column(stat);
        let sql = format!(
            r#"
            SELECT
                p.playerid AS player_id,
                p.firstname AS first_name,
                p.lastname AS last_name,
                t.teamname AS team_name,
                {column}::numeric AS value
            FROM PlayerSeasonStats pss
            JOIN Players p ON pss.playerid = p.playerid
            LEFT JOIN Teams t ON pss.teamid = t.teamid
            WHERE pss.season = $1
            ORDER BY {column} DESC NULLS LAST, p.playerid
            LIMIT $2
            "#
        );
        let rows = sqlx::query_as::<_, StatsLeaderRow>(&sql)
            .bind(season)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::unavailable)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
