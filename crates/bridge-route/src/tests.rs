//! Unit tests for bridge-route.
//!
//! The reference inventory is loaded through `bridge-clean` so these tests
//! exercise the same records the demo driver sees.

use std::io::Cursor;

use bridge_core::{Bridge, BridgeId, ConditionHistory, GeoPoint, MISSING_BCI};

// ── Helpers ───────────────────────────────────────────────────────────────────

const REFERENCE_CSV: &str = include_str!("../../../testdata/reference_bridges.csv");

/// Bridges 1 and 2 near Brantford, bridge 3 near Owen Sound.
fn reference() -> Vec<Bridge> {
    bridge_clean::load_bridges_reader(Cursor::new(REFERENCE_CSV)).unwrap()
}

fn ids(raw: &[u32]) -> Vec<BridgeId> {
    raw.iter().copied().map(BridgeId).collect()
}

/// Minimal bridge with a single-year history (`score` may be `MISSING_BCI`).
fn scored(id: u32, lat: f64, lon: f64, score: f64) -> Bridge {
    Bridge {
        id:               BridgeId(id),
        name:             format!("bridge {id}"),
        highway:          "6".into(),
        location:         GeoPoint::new(lat, lon),
        year_built:       None,
        last_major_rehab: None,
        last_minor_rehab: None,
        span_count:       1,
        span_lengths:     vec![10.0],
        deck_length:      10.0,
        last_inspected:   "01/01/2020".into(),
        history:          ConditionHistory::from_start_year(2020, vec![score]),
    }
}

// ── Condition lookup ──────────────────────────────────────────────────────────

#[cfg(test)]
mod condition {
    use super::*;
    use crate::{RouteError, calculate_average_condition, find_worst_bci, get_bridge_condition};

    #[test]
    fn most_recent_score() {
        let bridges = reference();
        assert_eq!(get_bridge_condition(&bridges, BridgeId(1)), 72.3);
        assert_eq!(get_bridge_condition(&bridges, BridgeId(3)), 85.1);
    }

    #[test]
    fn missing_bridge_or_scores_give_sentinel() {
        let bridges = vec![scored(1, 0.0, 0.0, MISSING_BCI)];
        assert_eq!(get_bridge_condition(&bridges, BridgeId(1)), MISSING_BCI);
        assert_eq!(get_bridge_condition(&reference(), BridgeId(4)), MISSING_BCI);
    }

    #[test]
    fn worst_of_candidates() {
        let bridges = reference();
        assert_eq!(find_worst_bci(&bridges, &ids(&[1, 2])).unwrap(), BridgeId(2));
        assert_eq!(find_worst_bci(&bridges, &ids(&[1, 3])).unwrap(), BridgeId(1));
        assert_eq!(find_worst_bci(&bridges, &ids(&[3])).unwrap(), BridgeId(3));
    }

    #[test]
    fn tie_goes_to_smaller_id_regardless_of_order() {
        let bridges = vec![
            scored(7, 0.0, 0.0, 50.0),
            scored(3, 0.0, 0.0, 50.0),
            scored(5, 0.0, 0.0, 60.0),
        ];
        for order in [[7, 3, 5], [3, 5, 7], [5, 7, 3]] {
            assert_eq!(find_worst_bci(&bridges, &ids(&order)).unwrap(), BridgeId(3));
        }
    }

    #[test]
    fn signed_zero_scores_tie() {
        let mut bridges = vec![scored(1, 0.0, 0.0, 0.0), scored(2, 0.0, 0.0, MISSING_BCI)];
        bridge_core::inspect_bridge(&mut bridges, BridgeId(2), "01/01/2020", -0.0).unwrap();
        assert_eq!(find_worst_bci(&bridges, &ids(&[1, 2])).unwrap(), BridgeId(1));
        assert_eq!(find_worst_bci(&bridges, &ids(&[2, 1])).unwrap(), BridgeId(1));
    }

    #[test]
    fn only_first_recorded_score_counts() {
        // Bridge 1's latest score is 80 though it once scored 10.
        let mut old_low = scored(1, 0.0, 0.0, 0.0);
        old_low.history = ConditionHistory::from_start_year(2020, vec![MISSING_BCI, 80.0, 10.0]);
        let bridges = vec![old_low, scored(2, 0.0, 0.0, 70.0)];
        assert_eq!(find_worst_bci(&bridges, &ids(&[1, 2])).unwrap(), BridgeId(2));
    }

    #[test]
    fn precondition_violations_are_errors() {
        let mut bridges = reference();
        assert!(matches!(find_worst_bci(&bridges, &[]), Err(RouteError::EmptyCandidates)));
        assert!(matches!(
            find_worst_bci(&bridges, &ids(&[1, 9])),
            Err(RouteError::UnknownBridge(BridgeId(9)))
        ));

        bridges.push(scored(4, 0.0, 0.0, MISSING_BCI));
        assert!(matches!(
            find_worst_bci(&bridges, &ids(&[1, 4])),
            Err(RouteError::NoCondition(BridgeId(4)))
        ));
    }

    #[test]
    fn average_over_inclusive_window() {
        let bridges = reference();
        let avg = calculate_average_condition(&bridges[0], 2005, 2013).unwrap();
        assert!((avg - 70.525).abs() < 1e-9, "got {avg}");
        let avg = calculate_average_condition(&bridges[1], 2005, 2013).unwrap();
        assert!((avg - 69.5).abs() < 1e-9, "got {avg}");
        let avg = calculate_average_condition(&bridges[2], 2000, 2013).unwrap();
        assert!((avg - 74.4).abs() < 1e-9, "got {avg}");
    }

    #[test]
    fn average_without_data_is_zero() {
        let bridges = reference();
        assert_eq!(calculate_average_condition(&bridges[0], 2013, 2024).unwrap(), 0.0);
        assert_eq!(calculate_average_condition(&bridges[0], 2005, 2005).unwrap(), 0.0);
    }

    #[test]
    fn reversed_window_rejected() {
        let bridges = reference();
        assert!(matches!(
            calculate_average_condition(&bridges[0], 2013, 2005),
            Err(RouteError::InvalidWindow { start: 2013, stop: 2005 })
        ));
    }
}

// ── Route planning ────────────────────────────────────────────────────────────

#[cfg(test)]
mod planner {
    use bridge_core::BridgeIdSet;
    use bridge_spatial::{BridgeIndex, LinearScan};

    use super::*;
    use crate::{GreedyPlanner, RouteConfig, RouteError, RoutePlanner, map_route};

    #[test]
    fn reference_route() {
        let route = map_route(&reference(), GeoPoint::new(43.10, -80.15), 3, 50.0).unwrap();
        assert_eq!(route, ids(&[2, 1]));
    }

    #[test]
    fn nothing_in_range_gives_empty_route() {
        let route = map_route(&reference(), GeoPoint::new(43.1, -80.5), 30, 10.0).unwrap();
        assert!(route.is_empty());
    }

    #[test]
    fn wide_radius_reaches_every_bridge() {
        let route = map_route(&reference(), GeoPoint::new(45.0, -81.3), 5, 300.0).unwrap();
        assert_eq!(route, ids(&[2, 1, 3]));
    }

    #[test]
    fn max_bridges_caps_route() {
        let bridges = reference();
        assert_eq!(map_route(&bridges, GeoPoint::new(43.10, -80.15), 1, 50.0).unwrap(), ids(&[2]));
        assert!(map_route(&bridges, GeoPoint::new(43.10, -80.15), 0, 50.0).unwrap().is_empty());
    }

    #[test]
    fn radius_measured_from_previous_stop() {
        // A chain of bridges 40 km apart, each in better condition than the
        // last: every stop is reachable only from its predecessor.
        let bridges: Vec<Bridge> = (0..5)
            .map(|i| scored(i + 1, 0.36 * i as f64, 0.0, 50.0 + i as f64))
            .collect();
        let planner = GreedyPlanner::new(LinearScan::new(&bridges));
        let route = planner
            .plan(&bridges, GeoPoint::new(0.0, 0.0), &RouteConfig::new(10, 45.0))
            .unwrap();

        assert_eq!(route.bridges, ids(&[1, 2, 3, 4, 5]));
        assert_eq!(route.legs_km[0], 0.0);
        for (i, leg) in route.legs_km.iter().enumerate().skip(1) {
            assert!(*leg <= 45.0, "leg {i} is {leg} km");
        }
        assert!(bridges[4].distance_km(GeoPoint::new(0.0, 0.0)) > 45.0);
        assert!((route.total_km() - route.legs_km.iter().sum::<f64>()).abs() < 1e-12);
    }

    #[test]
    fn route_ids_unique_and_bounded() {
        let bridges: Vec<Bridge> = (0..30)
            .map(|i| {
                let lat = 43.0 + (i % 6) as f64 * 0.05;
                let lon = -80.0 + (i / 6) as f64 * 0.05;
                scored(i + 1, lat, lon, 40.0 + ((i * 17) % 23) as f64)
            })
            .collect();

        for max in [0, 1, 7, 30, 100] {
            let route = map_route(&bridges, GeoPoint::new(43.1, -79.9), max, 12.0).unwrap();
            assert!(route.len() <= max);
            let unique: BridgeIdSet = route.iter().copied().collect();
            assert_eq!(unique.len(), route.len());
        }
    }

    #[test]
    fn deterministic() {
        let bridges = reference();
        let a = map_route(&bridges, GeoPoint::new(45.0, -81.3), 5, 300.0).unwrap();
        let b = map_route(&bridges, GeoPoint::new(45.0, -81.3), 5, 300.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn indexed_planner_matches_linear() {
        let bridges: Vec<Bridge> = (0..60)
            .map(|i| {
                let lat = 42.5 + (i % 10) as f64 * 0.21;
                let lon = -81.0 + (i / 10) as f64 * 0.33;
                scored(i + 1, lat, lon, 30.0 + ((i * 13) % 41) as f64)
            })
            .collect();
        let config = RouteConfig::new(25, 40.0);
        let start = GeoPoint::new(43.0, -80.5);

        let linear = GreedyPlanner::new(LinearScan::new(&bridges))
            .plan(&bridges, start, &config)
            .unwrap();
        let indexed = GreedyPlanner::new(BridgeIndex::build(&bridges))
            .plan(&bridges, start, &config)
            .unwrap();

        assert!(!linear.is_empty());
        assert_eq!(linear, indexed);
    }

    #[test]
    fn stale_index_rejected() {
        let mut bridges = reference();
        let planner = GreedyPlanner::new(BridgeIndex::build(&bridges));
        bridges.pop();

        let err = planner
            .plan(&bridges, GeoPoint::new(43.10, -80.15), &RouteConfig::default())
            .unwrap_err();
        assert!(matches!(err, RouteError::QueryMismatch { indexed: 3, bridges: 2 }));
    }

    #[test]
    fn unscored_candidate_is_an_error() {
        let bridges = vec![scored(1, 0.0, 0.0, MISSING_BCI)];
        let err = map_route(&bridges, GeoPoint::new(0.0, 0.0), 3, 10.0).unwrap_err();
        assert!(matches!(err, RouteError::NoCondition(BridgeId(1))));
    }

    #[test]
    fn invalid_radius_rejected() {
        let err = map_route(&reference(), GeoPoint::new(0.0, 0.0), 3, 0.0).unwrap_err();
        assert!(matches!(err, RouteError::Config(_)));
        assert!(RouteConfig::default().validate().is_ok());
    }
}
