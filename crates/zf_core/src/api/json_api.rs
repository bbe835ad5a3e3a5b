//! JSON evaluation surface
//!
//! String-in/string-out mirror of the integer host API for tooling and
//! debugging: one request carries the full host snapshot plus a (team,
//! zone) query, the response carries every legality verdict and rate the
//! host would otherwise collect across a dozen integer calls. Unlike the
//! integer surface, malformed input is reported as a typed error instead
//! of failing closed.

use serde::{Deserialize, Serialize};

use super::DEFAULT_EVALUATOR;
use crate::engine::geometry::PassClass;
use crate::engine::{legality, recovery, PitchState, RateEvaluator, Ruleset, TeamSide};
use crate::error::{EvalError, Result};

#[derive(Debug, Deserialize)]
pub struct EvalRequest {
    pub schema_version: u8,
    /// Queried team id (0 or 1)
    pub team: i32,
    /// Queried zone [x, y]
    pub zone: [i32; 2],
    /// Team id currently in possession
    pub possession: i32,
    /// Ball zone [x, y]
    pub ball: [i32; 2],
    /// Flat per-zone player counts, `x * rows + y` layout
    pub home_counts: Vec<i32>,
    pub away_counts: Vec<i32>,
    /// Optional ruleset override; defaults to the strict variant
    #[serde(default)]
    pub ruleset: Option<Ruleset>,
}

#[derive(Debug, Serialize)]
pub struct ActionEval {
    pub legal: bool,
    pub action_rate: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_rate: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fail_rate: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct PassTargetEval {
    pub zone: [i32; 2],
    pub class: PassClass,
    pub success_rate: i32,
    pub fail_rate: i32,
}

#[derive(Debug, Serialize)]
pub struct PassEval {
    pub legal: bool,
    pub action_rate: i32,
    pub targets: Vec<PassTargetEval>,
}

#[derive(Debug, Serialize)]
pub struct EvalResponse {
    pub schema_version: u8,
    pub can_act: bool,
    pub shoot: ActionEval,
    pub dribble: ActionEval,
    pub run: ActionEval,
    pub pass: PassEval,
    /// Where the queried team would pick up a lost ball; present only
    /// when the queried team is not in possession
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recovery_target: Option<[i32; 2]>,
}

/// Evaluate one (team, zone) query against a full host snapshot.
pub fn evaluate_zone(req: &EvalRequest) -> Result<EvalResponse> {
    if req.schema_version != crate::SCHEMA_VERSION {
        return Err(EvalError::SchemaVersion {
            found: req.schema_version,
            expected: crate::SCHEMA_VERSION,
        });
    }

    let custom = req.ruleset.map(RateEvaluator::new);
    let eval: &RateEvaluator = custom.as_ref().unwrap_or(&*DEFAULT_EVALUATOR);
    let rules = eval.rules();
    let grid = rules.grid;

    let team = TeamSide::from_id(req.team).ok_or(EvalError::UnknownTeam(req.team))?;
    let possession =
        TeamSide::from_id(req.possession).ok_or(EvalError::UnknownTeam(req.possession))?;
    let zone = grid
        .zone(req.zone[0], req.zone[1])
        .ok_or(EvalError::ZoneOutOfBounds { x: req.zone[0], y: req.zone[1] })?;
    let ball = grid
        .zone(req.ball[0], req.ball[1])
        .ok_or(EvalError::ZoneOutOfBounds { x: req.ball[0], y: req.ball[1] })?;
    for counts in [&req.home_counts, &req.away_counts] {
        if counts.len() != grid.zone_count() {
            return Err(EvalError::CountLength {
                expected: grid.zone_count(),
                found: counts.len(),
            });
        }
    }

    let state = PitchState::new(possession, ball, &req.home_counts, &req.away_counts);

    let shoot_legal = legality::can_shoot(rules, &state, team, zone);
    let dribble_legal = legality::can_dribble(rules, &state, team, zone);
    let run_legal = legality::can_run(rules, &state, team, zone);
    let targets = legality::pass_targets(rules, &state, team, zone);

    let pass = PassEval {
        legal: !targets.is_empty(),
        action_rate: eval.pass_action_rate(&state, team, zone),
        targets: targets
            .into_iter()
            .map(|to| PassTargetEval {
                zone: [to.x as i32, to.y as i32],
                class: crate::engine::geometry::classify_pass(&grid, team, zone, to),
                success_rate: eval.pass_success_rate(&state, team, zone, to),
                fail_rate: eval.pass_fail_rate(&state, team, zone, to),
            })
            .collect(),
    };

    // With two teams, the queried team is the taker whenever it is not in
    // possession.
    let recovery_target = if team != possession {
        recovery::find_nearest_opponent(&grid, possession, &req.home_counts, &req.away_counts)
            .map(|z| [z.x as i32, z.y as i32])
    } else {
        None
    };

    Ok(EvalResponse {
        schema_version: crate::SCHEMA_VERSION,
        can_act: legality::can_team_act(rules, &state, team, zone),
        shoot: ActionEval {
            legal: shoot_legal,
            action_rate: eval.shoot_action_rate(&state, team, zone),
            success_rate: Some(eval.shoot_success_rate(team, zone)),
            fail_rate: Some(eval.shoot_fail_rate(team, zone)),
        },
        dribble: ActionEval {
            legal: dribble_legal,
            action_rate: eval.dribble_action_rate(&state, team, zone),
            success_rate: Some(eval.dribble_success_rate(&state, team, zone)),
            fail_rate: Some(eval.dribble_fail_rate(&state, team, zone)),
        },
        run: ActionEval {
            legal: run_legal,
            action_rate: eval.run_action_rate(&state, team, zone),
            success_rate: None,
            fail_rate: None,
        },
        pass,
        recovery_target,
    })
}

/// JSON wrapper around [`evaluate_zone`].
pub fn evaluate_zone_json(request_json: &str) -> Result<String> {
    let req: EvalRequest = serde_json::from_str(request_json)?;
    let resp = evaluate_zone(&req)?;
    Ok(serde_json::to_string(&resp)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base_request() -> serde_json::Value {
        let mut home = vec![0; 15];
        let mut away = vec![0; 15];
        home[3 * 3 + 1] = 2; // (3,1)
        home[4 * 3 + 1] = 1; // (4,1)
        away[4 * 3 + 1] = 1; // (4,1)
        json!({
            "schema_version": 1,
            "team": 0,
            "zone": [3, 1],
            "possession": 0,
            "ball": [3, 1],
            "home_counts": home,
            "away_counts": away,
        })
    }

    #[test]
    fn test_evaluate_full_snapshot() {
        let result = evaluate_zone_json(&base_request().to_string()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();

        assert_eq!(parsed["schema_version"], 1);
        assert_eq!(parsed["can_act"], true);
        assert_eq!(parsed["shoot"]["legal"], true);
        assert_eq!(parsed["shoot"]["action_rate"], 96);
        assert_eq!(parsed["pass"]["legal"], true);

        // Single forward target (4,1): short pass into an occupied zone
        let targets = parsed["pass"]["targets"].as_array().unwrap();
        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0]["zone"], json!([4, 1]));
        assert_eq!(targets[0]["class"], "Short");
        assert_eq!(targets[0]["success_rate"], 5_599);

        // In possession: no recovery target serialized
        assert!(parsed.get("recovery_target").is_none());
    }

    #[test]
    fn test_recovery_target_for_defending_team() {
        let mut req = base_request();
        req["team"] = json!(1);
        req["zone"] = json!([4, 1]);
        let result = evaluate_zone_json(&req.to_string()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();

        // Home would lose the ball; Away's furthest-forward player is at (4,1)
        assert_eq!(parsed["recovery_target"], json!([4, 1]));
        assert_eq!(parsed["shoot"]["legal"], false);
    }

    #[test]
    fn test_determinism() {
        let req = base_request().to_string();
        let a = evaluate_zone_json(&req).unwrap();
        let b = evaluate_zone_json(&req).unwrap();
        assert_eq!(a, b, "same request must produce byte-identical responses");
    }

    #[test]
    fn test_schema_version_rejected() {
        let mut req = base_request();
        req["schema_version"] = json!(9);
        let err = evaluate_zone_json(&req.to_string()).unwrap_err();
        assert!(matches!(err, EvalError::SchemaVersion { found: 9, expected: 1 }));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = evaluate_zone_json("{not json").unwrap_err();
        assert!(matches!(err, EvalError::MalformedRequest(_)));
    }

    #[test]
    fn test_count_length_rejected() {
        let mut req = base_request();
        req["home_counts"] = json!([0, 0, 0]);
        let err = evaluate_zone_json(&req.to_string()).unwrap_err();
        assert!(matches!(err, EvalError::CountLength { expected: 15, found: 3 }));
    }

    #[test]
    fn test_bad_team_and_zone_rejected() {
        let mut req = base_request();
        req["team"] = json!(3);
        assert!(matches!(
            evaluate_zone_json(&req.to_string()).unwrap_err(),
            EvalError::UnknownTeam(3)
        ));

        let mut req = base_request();
        req["zone"] = json!([5, 0]);
        assert!(matches!(
            evaluate_zone_json(&req.to_string()).unwrap_err(),
            EvalError::ZoneOutOfBounds { x: 5, y: 0 }
        ));
    }

    #[test]
    fn test_ruleset_override_allows_own_half_shot() {
        let mut home = vec![0; 15];
        home[4] = 1; // (1,1), own half for Home
        let away = vec![0; 15];
        let req = json!({
            "schema_version": 1,
            "team": 0,
            "zone": [1, 1],
            "possession": 0,
            "ball": [1, 1],
            "home_counts": home,
            "away_counts": away,
            "ruleset": {
                "grid": { "cols": 5, "rows": 3 },
                "shots_need_opponent_half": false,
                "forward_passes_only": true,
                "keeper_rule": true,
            },
        });
        let result = evaluate_zone_json(&req.to_string()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(parsed["shoot"]["legal"], true, "own-half shot under relaxed ruleset");
    }
}
