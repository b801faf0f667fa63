#![allow(clippy::format_push_string)]

use crate::format;
use crate::models::{Conference, EntityCounts, LeaderStat, StatsLeader, TeamStanding};

const RULE_HEAVY: &str = "═══════════════════════════════════════════════════════════════\n";
const RULE_LIGHT: &str = "───────────────────────────────────────────────────────────────\n";

pub struct ReportFormatter;

impl ReportFormatter {
    /// Renders a standings table. Rows are printed in the order given.
    #[must_use]
    pub fn standings(
        season: &str,
        conference: Option<Conference>,
        standings: &[TeamStanding],
    ) -> String {
        let mut output = String::new();
        let heading = conference.map_or("League", |c| c.label());

        output.push('\n');
        output.push_str(RULE_HEAVY);
        output.push_str(&format!("  STANDINGS • {heading} • {season}\n"));
        output.push_str(RULE_HEAVY);
        output.push_str(&format!(
            "{:>3}  {:<32} {:>4} {:>4} {:>6} {:>6}\n",
            "#", "Team", "W", "L", "Win%", "PPG"
        ));
        output.push_str(RULE_LIGHT);

        if standings.is_empty() {
            output.push_str("No standings data available\n");
        }

        for (index, team) in standings.iter().enumerate() {
            let name = format!("{} {}", team.city, team.team_name);
            output.push_str(&format!(
                "{:>3}  {:<32} {:>4} {:>4} {:>6} {:>6}\n",
                index + 1,
                name,
                team.wins,
                team.losses,
                format::win_percentage(team.win_percentage),
                format::per_game(team.points_per_game),
            ));
        }

        output.push_str(RULE_HEAVY);
        output
    }

    /// Renders a single-stat leaderboard.
    #[must_use]
    pub fn leaders(season: &str, stat: LeaderStat, leaders: &[StatsLeader]) -> String {
        let mut output = String::new();

        output.push('\n');
        output.push_str(RULE_HEAVY);
        output.push_str(&format!(
            "  {} LEADERS • {season}\n",
            stat.as_str().to_uppercase()
        ));
        output.push_str(RULE_HEAVY);

        if leaders.is_empty() {
            output.push_str("No leaders for this season\n");
        }

        for (index, leader) in leaders.iter().enumerate() {
            let name = format!("{} {}", leader.first_name, leader.last_name);
            let team = leader.team_name.as_deref().unwrap_or("Free Agent");
            output.push_str(&format!(
                "{:>3}  {:<26} {:<16} {:>6} {}\n",
                index + 1,
                name,
                team,
                format::per_game(leader.value),
                stat.unit(),
            ));
        }

        output.push_str(RULE_HEAVY);
        output
    }

    /// Renders row totals and the seasons present in the store.
    #[must_use]
    pub fn data_status(counts: &EntityCounts, seasons: &[String]) -> String {
        let mut output = String::new();

        output.push('\n');
        output.push_str(RULE_HEAVY);
        output.push_str("  DATA STATUS\n");
        output.push_str(RULE_HEAVY);
        output.push_str(&format!("Teams:                 {}\n", counts.teams));
        output.push_str(&format!("Players:               {}\n", counts.players));
        output.push_str(&format!("Games:                 {}\n", counts.games));
        output.push_str(RULE_LIGHT);

        if seasons.is_empty() {
            output.push_str("Seasons:               none\n");
        } else {
            output.push_str(&format!("Seasons:               {}\n", seasons.join(", ")));
        }

        output.push_str(RULE_HEAVY);
        output
    }
}
