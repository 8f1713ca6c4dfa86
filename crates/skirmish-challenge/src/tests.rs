#[cfg(test)]
mod tests {
    use skirmish_core::constants::PLAYER_TANK_NAME;
    use skirmish_core::errors::BattleError;
    use skirmish_core::sources::AiSource;
    use skirmish_test_utils::{battle_result, RecordingFactory};

    use crate::cache::AiDefinitionCache;
    use crate::controller::ChallengeController;
    use crate::policy::{is_winning_result, ChallengeOutcome, RestartPolicy};
    use crate::scenario::{builtin_challenges, find_challenge, ChallengeScenario};

    fn duel_sources() -> Vec<AiSource> {
        vec![AiSource::file("a"), AiSource::code("b", "x")]
    }

    fn controller_for(
        id: &str,
        policy: RestartPolicy,
    ) -> ChallengeController<RecordingFactory> {
        ChallengeController::new(find_challenge(id).unwrap(), policy)
    }

    // --- Cache ---

    /// Same input twice: the second call serves the cached sequence with
    /// zero factory dispatches.
    #[test]
    fn test_cache_hit_skips_rebuild() {
        let factory = RecordingFactory::new();
        let mut cache = AiDefinitionCache::new();
        let sources = duel_sources();

        cache.get_or_build(&factory, &sources).unwrap();
        assert_eq!(factory.call_count(), 2);

        let definitions = cache.get_or_build(&factory, &sources).unwrap();
        assert_eq!(factory.call_count(), 2);
        assert_eq!(definitions.len(), 2);
    }

    /// Changing one field anywhere forces a full rebuild.
    #[test]
    fn test_cache_rebuilds_on_any_field_change() {
        let factory = RecordingFactory::new();
        let mut cache = AiDefinitionCache::new();

        cache.get_or_build(&factory, &duel_sources()).unwrap();
        let changed = vec![AiSource::file("a"), AiSource::code("b", "y")];
        cache.get_or_build(&factory, &changed).unwrap();

        // Both entries rebuilt, not just the changed one
        assert_eq!(factory.call_count(), 4);
    }

    /// File and code sources dispatch to the matching constructor, in
    /// input order.
    #[test]
    fn test_cache_dispatch_order() {
        let factory = RecordingFactory::new();
        let mut cache = AiDefinitionCache::new();

        let definitions = cache.get_or_build(&factory, &duel_sources()).unwrap();
        assert_eq!(factory.calls(), vec!["file:a", "code:b"]);
        assert_eq!(definitions[0].origin, "file");
        assert_eq!(definitions[1].origin, "code");
    }

    /// Factory failures propagate, and the previous entry stays usable.
    #[test]
    fn test_cache_failed_rebuild_keeps_previous_entry() {
        let factory = RecordingFactory::new();
        let mut cache = AiDefinitionCache::new();
        let sources = duel_sources();
        cache.get_or_build(&factory, &sources).unwrap();

        let failing = RecordingFactory::failing_on("c");
        let broken = vec![AiSource::file("a"), AiSource::file("c")];
        assert!(matches!(
            cache.get_or_build(&failing, &broken),
            Err(BattleError::DefinitionRejected(_))
        ));

        // Old input still hits without a rebuild
        let factory_after = RecordingFactory::new();
        let definitions = cache.get_or_build(&factory_after, &sources).unwrap();
        assert_eq!(factory_after.call_count(), 0);
        assert_eq!(definitions.len(), 2);
    }

    #[test]
    fn test_cache_invalidate_forces_rebuild() {
        let factory = RecordingFactory::new();
        let mut cache = AiDefinitionCache::new();
        let sources = duel_sources();

        cache.get_or_build(&factory, &sources).unwrap();
        cache.invalidate();
        assert!(cache.is_empty());
        cache.get_or_build(&factory, &sources).unwrap();
        assert_eq!(factory.call_count(), 4);
    }

    // --- Win / restart policy ---

    #[test]
    fn test_win_requires_sole_surviving_player() {
        // Player alone alive: win
        assert!(is_winning_result(
            &battle_result(&[("Player", 5.0), ("Enemy", 0.0)]),
            PLAYER_TANK_NAME
        ));
        // Two alive: restart
        assert!(!is_winning_result(
            &battle_result(&[("Player", 5.0), ("Enemy", 3.0)]),
            PLAYER_TANK_NAME
        ));
        // Player dead, enemy alive: restart
        assert!(!is_winning_result(
            &battle_result(&[("Enemy", 5.0)]),
            PLAYER_TANK_NAME
        ));
        // Everyone dead: restart
        assert!(!is_winning_result(
            &battle_result(&[("Player", 0.0), ("Enemy", 0.0)]),
            PLAYER_TANK_NAME
        ));
    }

    #[test]
    fn test_win_name_comparison_is_case_insensitive() {
        assert!(is_winning_result(
            &battle_result(&[("PLAYER", 1.0)]),
            PLAYER_TANK_NAME
        ));
        assert!(is_winning_result(
            &battle_result(&[("player", 1.0)]),
            PLAYER_TANK_NAME
        ));
        assert!(!is_winning_result(
            &battle_result(&[("Player2", 1.0)]),
            PLAYER_TANK_NAME
        ));
    }

    #[test]
    fn test_unbounded_policy_always_restarts() {
        let policy = RestartPolicy::unbounded();
        for restarts in [0, 1, 1000, u32::MAX - 1] {
            assert!(policy.allows_restart(restarts));
        }
    }

    #[test]
    fn test_capped_policy_exhausts() {
        let policy = RestartPolicy::capped(2);
        assert!(policy.allows_restart(0));
        assert!(policy.allows_restart(1));
        assert!(!policy.allows_restart(2));
    }

    // --- Challenge controller ---

    #[test]
    fn test_controller_composes_sources_opponents_then_player() {
        let controller = controller_for("crossfire", RestartPolicy::unbounded());
        let sources = controller.sources("// my tank").unwrap();
        assert_eq!(
            sources,
            vec![
                AiSource::file("crawler"),
                AiSource::file("sniper"),
                AiSource::code(PLAYER_TANK_NAME, "// my tank"),
            ]
        );
        assert_eq!(controller.roster(), vec!["crawler", "sniper", "Player"]);
    }

    #[test]
    fn test_controller_caches_until_player_code_changes() {
        let mut controller = controller_for("first-shot", RestartPolicy::unbounded());
        let factory = RecordingFactory::new();

        controller.ai_definitions(&factory, "// v1").unwrap();
        assert_eq!(factory.calls(), vec!["file:dummy", "code:Player"]);

        // Same code: re-render serves the cache
        controller.ai_definitions(&factory, "// v1").unwrap();
        assert_eq!(factory.call_count(), 2);

        // Edited code: full rebuild
        controller.ai_definitions(&factory, "// v2").unwrap();
        assert_eq!(factory.call_count(), 4);
    }

    #[test]
    fn test_controller_rejects_unknown_opponent_kind() {
        let mut scenario = find_challenge("first-shot").unwrap();
        scenario.ai_def_list[0].source = "remote".to_string();
        let controller: ChallengeController<RecordingFactory> =
            ChallengeController::new(scenario, RestartPolicy::unbounded());

        assert!(matches!(
            controller.sources("// code"),
            Err(BattleError::UnknownScriptSource { .. })
        ));
    }

    #[test]
    fn test_controller_win_reports_and_sticks() {
        let mut controller = controller_for("first-shot", RestartPolicy::unbounded());
        let result = battle_result(&[("Player", 20.0), ("dummy", 0.0)]);

        assert_eq!(controller.handle_finish(&result), ChallengeOutcome::Won);
        assert!(controller.has_won());
        assert_eq!(controller.restarts(), 0);
    }

    #[test]
    fn test_controller_restarts_unbounded_on_loss() {
        let mut controller = controller_for("first-shot", RestartPolicy::unbounded());
        let loss = battle_result(&[("Player", 0.0), ("dummy", 10.0)]);

        for expected_restarts in 1..=50 {
            assert_eq!(controller.handle_finish(&loss), ChallengeOutcome::Restart);
            assert_eq!(controller.restarts(), expected_restarts);
        }
        assert!(!controller.has_won());
    }

    #[test]
    fn test_controller_capped_policy_exhausts() {
        let mut controller = controller_for("first-shot", RestartPolicy::capped(2));
        // Draw counts as a loss: two survivors
        let draw = battle_result(&[("Player", 5.0), ("dummy", 5.0)]);

        assert_eq!(controller.handle_finish(&draw), ChallengeOutcome::Restart);
        assert_eq!(controller.handle_finish(&draw), ChallengeOutcome::Restart);
        assert_eq!(
            controller.handle_finish(&draw),
            ChallengeOutcome::RetriesExhausted
        );
        assert_eq!(controller.restarts(), 2);
    }

    // --- Scenarios ---

    #[test]
    fn test_builtin_ladder_is_ordered_and_file_sourced() {
        let challenges = builtin_challenges();
        assert!(!challenges.is_empty());
        for (index, challenge) in challenges.iter().enumerate() {
            assert_eq!(challenge.level as usize, index + 1);
            assert!(!challenge.ai_def_list.is_empty());
            for opponent in &challenge.ai_def_list {
                assert_eq!(opponent.source, "file");
                // The player slot is appended by the controller, never listed
                assert!(!opponent.name.eq_ignore_ascii_case(PLAYER_TANK_NAME));
            }
        }
    }

    #[test]
    fn test_find_challenge() {
        assert!(find_challenge("moving-target").is_some());
        assert!(find_challenge("nonexistent").is_none());
    }

    #[test]
    fn test_scenario_serde_round_trip() {
        for challenge in builtin_challenges() {
            let json = serde_json::to_string(&challenge).unwrap();
            let back: ChallengeScenario = serde_json::from_str(&json).unwrap();
            assert_eq!(challenge, back);
        }
    }
}
