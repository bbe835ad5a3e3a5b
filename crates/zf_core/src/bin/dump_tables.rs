// Dump the geometry tables behind the shot model as JSON on stdout.
// Run with: cargo run --bin dump_tables

use serde_json::json;

use zf_core::engine::geometry;
use zf_core::engine::pitch_constants::rates;
use zf_core::{RateEvaluator, TeamSide};

fn main() {
    let eval = RateEvaluator::default();
    let grid = eval.rules().grid;

    let mut teams = Vec::new();
    for team in [TeamSide::Home, TeamSide::Away] {
        let zones: Vec<_> = grid
            .zones()
            .map(|zone| {
                let d = eval.distance_to_goal_m(team, zone);
                json!({
                    "zone": [zone.x, zone.y],
                    "center_m": geometry::zone_center_m(&grid, zone),
                    "goal_distance_m": d,
                    "expected_goal": eval.expected_goal(d),
                    "shoot_success_rate": eval.shoot_success_rate(team, zone),
                    "shoot_fail_rate": eval.shoot_fail_rate(team, zone),
                })
            })
            .collect();
        teams.push(json!({ "team": team.id(), "zones": zones }));
    }

    let doc = json!({
        "grid": { "cols": grid.cols, "rows": grid.rows },
        "scale": rates::SCALE,
        "teams": teams,
    });
    println!("{}", serde_json::to_string_pretty(&doc).expect("serialize tables"));
}
