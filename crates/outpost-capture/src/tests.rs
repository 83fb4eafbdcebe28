#[cfg(test)]
mod tests {
    use outpost_core::constants::CAPTURE_RADIUS;
    use outpost_core::faction::FactionId;
    use outpost_core::types::Position;

    use crate::resolver::{resolve, ContestOutcome};
    use crate::scanner::{in_capture_range, scan, UnitSample};
    use crate::tracker::{evaluate, CaptureContext, CaptureStep};

    const A: FactionId = FactionId::new(1);
    const B: FactionId = FactionId::new(2);
    const C: FactionId = FactionId::new(3);

    fn center() -> Position {
        Position::new(1000.0, 1000.0)
    }

    fn unit_at_range(faction: FactionId, range: f64) -> UnitSample {
        UnitSample::new(faction, 1000.0 + range, 1000.0)
    }

    fn dead(mut unit: UnitSample) -> UnitSample {
        unit.alive = false;
        unit
    }

    fn ctx(owner: Option<FactionId>, percent: f64, outcome: ContestOutcome, rate: f64) -> CaptureContext {
        CaptureContext {
            owner,
            convert_percent: percent,
            outcome,
            capture_rate: rate,
        }
    }

    fn single(faction: FactionId, magnitude: u32) -> ContestOutcome {
        ContestOutcome::Single { faction, magnitude }
    }

    // ---- Scanner ----

    #[test]
    fn test_scanner_radius_is_strict() {
        let c = center();
        assert!(in_capture_range(&unit_at_range(A, 383.999), &c, CAPTURE_RADIUS));
        assert!(!in_capture_range(&unit_at_range(A, 384.0), &c, CAPTURE_RADIUS));
        assert!(!in_capture_range(&unit_at_range(A, 500.0), &c, CAPTURE_RADIUS));
    }

    #[test]
    fn test_scanner_diagonal_distance() {
        // (300, 300) offset is ~424 away: outside despite each axis being inside.
        let unit = UnitSample::new(A, 1300.0, 1300.0);
        assert!(!in_capture_range(&unit, &center(), CAPTURE_RADIUS));
        let unit = UnitSample::new(A, 1200.0, 1200.0);
        assert!(in_capture_range(&unit, &center(), CAPTURE_RADIUS));
    }

    #[test]
    fn test_scanner_excludes_dead_units() {
        let unit = dead(unit_at_range(A, 0.0));
        assert!(!in_capture_range(&unit, &center(), CAPTURE_RADIUS));
    }

    #[test]
    fn test_scan_preserves_unit_order() {
        let units = vec![
            unit_at_range(B, 10.0),
            unit_at_range(A, 1000.0),
            dead(unit_at_range(C, 5.0)),
            unit_at_range(A, 20.0),
        ];
        let factions: Vec<FactionId> = scan(&units, center(), CAPTURE_RADIUS).collect();
        assert_eq!(factions, vec![B, A]);
    }

    #[test]
    fn test_scan_empty_registry() {
        assert_eq!(scan(&[], center(), CAPTURE_RADIUS).count(), 0);
    }

    // ---- Resolver ----

    #[test]
    fn test_resolve_empty() {
        assert_eq!(resolve(Vec::new()), ContestOutcome::Empty);
        assert_eq!(ContestOutcome::Empty.attempted_owner(), None);
    }

    #[test]
    fn test_resolve_single_counts_magnitude() {
        assert_eq!(resolve(vec![A]), single(A, 1));
        assert_eq!(resolve(vec![B, B, B]), single(B, 3));
        assert_eq!(single(B, 3).attempted_owner(), Some(B));
    }

    #[test]
    fn test_resolve_two_factions_is_contested() {
        let outcome = resolve(vec![A, B]);
        assert!(outcome.is_contested());
        assert_eq!(outcome.attempted_owner(), None);
    }

    /// A 5-to-1 majority still loses to the first divergence.
    #[test]
    fn test_resolve_first_divergence_beats_majority() {
        assert_eq!(resolve(vec![A, A, A, A, A, B]), ContestOutcome::Contested);
        assert_eq!(resolve(vec![B, A, A, A, A, A]), ContestOutcome::Contested);
    }

    #[test]
    fn test_resolve_stops_at_first_divergence() {
        let mut seen = 0;
        let factions = [A, A, B, C, A].into_iter().inspect(|_| seen += 1);
        assert_eq!(resolve(factions), ContestOutcome::Contested);
        assert_eq!(seen, 3, "resolver should not read past the diverging unit");
    }

    #[test]
    fn test_scan_and_resolve_ignore_out_of_range_enemies() {
        let units = vec![
            unit_at_range(A, 50.0),
            unit_at_range(B, 400.0),
            unit_at_range(A, 100.0),
        ];
        assert_eq!(resolve(scan(&units, center(), CAPTURE_RADIUS)), single(A, 2));
    }

    // ---- Tracker ----

    #[test]
    fn test_tracker_contested_freezes() {
        let update = evaluate(&ctx(Some(A), 42.0, ContestOutcome::Contested, 10.0));
        assert_eq!(update.step, CaptureStep::Contested);
        assert_eq!(update.convert_percent, 42.0);
        assert_eq!(update.owner, Some(A));
    }

    #[test]
    fn test_tracker_empty_resets() {
        let update = evaluate(&ctx(Some(A), 40.0, ContestOutcome::Empty, 10.0));
        assert_eq!(update.step, CaptureStep::Reset);
        assert_eq!(update.convert_percent, 0.0);
        assert_eq!(update.owner, Some(A));
    }

    #[test]
    fn test_tracker_owner_presence_resets() {
        let update = evaluate(&ctx(Some(A), 60.0, single(A, 2), 10.0));
        assert_eq!(update.step, CaptureStep::Reset);
        assert_eq!(update.convert_percent, 0.0);
    }

    #[test]
    fn test_tracker_unowned_point_is_captured_by_any_faction() {
        let update = evaluate(&ctx(None, 0.0, single(B, 1), 10.0));
        assert_eq!(update.step, CaptureStep::Advanced { attempted: B });
        assert_eq!(update.convert_percent, 10.0);
        assert_eq!(update.owner, None);
    }

    #[test]
    fn test_tracker_rate_scales_with_magnitude() {
        let update = evaluate(&ctx(Some(A), 10.0, single(B, 3), 2.5));
        assert!((update.convert_percent - 17.5).abs() < 1e-12);
    }

    /// 85 → 95 (no flip) → 115 (flip, stored unclamped).
    #[test]
    fn test_tracker_overshoot_scenario() {
        let first = evaluate(&ctx(Some(A), 85.0, single(B, 1), 10.0));
        assert_eq!(first.convert_percent, 95.0);
        assert_eq!(first.owner, Some(A));
        assert!(!first.owner_changed());

        let second = evaluate(&ctx(first.owner, first.convert_percent, single(B, 2), 10.0));
        assert_eq!(second.convert_percent, 115.0);
        assert_eq!(second.owner, Some(B));
        assert_eq!(
            second.step,
            CaptureStep::Captured {
                attempted: B,
                previous: Some(A)
            }
        );
    }

    #[test]
    fn test_tracker_exactly_one_hundred_captures() {
        let update = evaluate(&ctx(None, 90.0, single(C, 1), 10.0));
        assert_eq!(update.convert_percent, 100.0);
        assert_eq!(update.owner, Some(C));
    }

    #[test]
    fn test_tracker_saturated_above_one_hundred() {
        // New owner B holds 115; a third faction arrives before B's units do.
        let update = evaluate(&ctx(Some(B), 115.0, single(C, 1), 10.0));
        assert_eq!(update.step, CaptureStep::Saturated { attempted: C });
        assert_eq!(update.convert_percent, 115.0);
        assert_eq!(update.owner, Some(B));
    }

    #[test]
    fn test_tracker_overshoot_cleared_by_new_owner_presence() {
        let update = evaluate(&ctx(Some(B), 115.0, single(B, 2), 10.0));
        assert_eq!(update.step, CaptureStep::Reset);
        assert_eq!(update.convert_percent, 0.0);
    }

    #[test]
    fn test_tracker_ratchet_flips_once() {
        let rate = 7.0;
        let mut owner = Some(A);
        let mut percent = 0.0;
        let mut flips = 0;
        let mut ticks = 0;

        while owner == Some(A) {
            let update = evaluate(&ctx(owner, percent, single(B, 2), rate));
            if update.owner_changed() {
                flips += 1;
            } else {
                assert!((update.convert_percent - percent - 14.0).abs() < 1e-9);
            }
            owner = update.owner;
            percent = update.convert_percent;
            ticks += 1;
        }

        assert_eq!(flips, 1);
        assert_eq!(ticks, 8, "ceil(100 / 14) ticks to capture");
        assert_eq!(owner, Some(B));
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "convert percent out of bounds")]
    fn test_tracker_negative_percent_asserts() {
        let _ = evaluate(&ctx(None, -1.0, single(A, 1), 1.0));
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "single-faction outcome with no units")]
    fn test_tracker_zero_magnitude_asserts() {
        let _ = evaluate(&ctx(None, 0.0, single(A, 0), 1.0));
    }

    #[cfg(not(debug_assertions))]
    #[test]
    fn test_tracker_negative_percent_clamped_in_release() {
        let update = evaluate(&ctx(None, -5.0, ContestOutcome::Contested, 1.0));
        assert_eq!(update.convert_percent, 0.0);
    }

    // ---- Properties ----

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn faction() -> impl Strategy<Value = FactionId> {
            (1u32..4).prop_map(FactionId::new)
        }

        fn outcome() -> impl Strategy<Value = ContestOutcome> {
            prop_oneof![
                Just(ContestOutcome::Empty),
                Just(ContestOutcome::Contested),
                (faction(), 1u32..6).prop_map(|(faction, magnitude)| ContestOutcome::Single {
                    faction,
                    magnitude
                }),
            ]
        }

        proptest! {
            /// Percent never goes negative and never exceeds 100 unless the
            /// tick that produced it flipped ownership (or it was already
            /// above 100).
            #[test]
            fn prop_percent_bounded_except_on_capture(
                owner in proptest::option::of(faction()),
                percent in 0.0f64..=100.0,
                outcome in outcome(),
                rate in 0.01f64..20.0,
            ) {
                let update = evaluate(&ctx(owner, percent, outcome, rate));
                prop_assert!(update.convert_percent >= 0.0);
                if update.convert_percent > 100.0 {
                    prop_assert!(update.owner_changed());
                }
            }

            /// Ownership only ever moves to the faction that filled the meter.
            #[test]
            fn prop_owner_changes_only_to_attempted(
                owner in proptest::option::of(faction()),
                percent in 0.0f64..=100.0,
                outcome in outcome(),
                rate in 0.01f64..20.0,
            ) {
                let update = evaluate(&ctx(owner, percent, outcome, rate));
                if update.owner != owner {
                    prop_assert_eq!(update.owner, outcome.attempted_owner());
                    prop_assert!(update.convert_percent >= 100.0);
                }
            }

            /// Owner presence is idempotent: always zero, never a flip.
            #[test]
            fn prop_owner_presence_idempotent(
                owner in faction(),
                percent in 0.0f64..150.0,
                magnitude in 1u32..10,
                rate in 0.01f64..20.0,
            ) {
                let first = evaluate(&ctx(Some(owner), percent, single(owner, magnitude), rate));
                let second = evaluate(&ctx(first.owner, first.convert_percent, single(owner, magnitude), rate));
                prop_assert_eq!(first.convert_percent, 0.0);
                prop_assert_eq!(second.convert_percent, 0.0);
                prop_assert_eq!(second.owner, Some(owner));
            }

            /// Any divergence in scan order yields Contested; otherwise the
            /// magnitude equals the number of units.
            #[test]
            fn prop_resolver_single_iff_homogeneous(
                factions in proptest::collection::vec(faction(), 0..12),
            ) {
                let outcome = resolve(factions.clone());
                match factions.first() {
                    None => prop_assert_eq!(outcome, ContestOutcome::Empty),
                    Some(first) if factions.iter().all(|f| f == first) => {
                        prop_assert_eq!(outcome, single(*first, factions.len() as u32));
                    }
                    Some(_) => prop_assert_eq!(outcome, ContestOutcome::Contested),
                }
            }
        }
    }
}
