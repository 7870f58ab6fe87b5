mod test {
    use crate::core::*;
    use crate::results::format_results;
    use crate::session::{Session, SessionEnd};
    use crate::test::test_util::{RecordingRenderer, ScriptedInput, quiet_spawner, roster};

    #[test]
    fn odd_or_empty_rosters_are_refused() {
        assert!(matches!(Session::new(roster(3), 4), Err(GameError::OddPlayerCount(3))));
        assert!(matches!(Session::new(Vec::new(), 4), Err(GameError::OddPlayerCount(0))));
        assert!(matches!(Session::new(roster(2), 1), Err(GameError::InvalidSize(1))));
    }

    #[test]
    fn single_duel_capture_is_recorded() {
        let mut session = Session::new(roster(2), 2).unwrap();
        let mut input = ScriptedInput::new("w");
        let mut renderer = RecordingRenderer::default();

        let end = session.run(&mut quiet_spawner(), &mut input, &mut renderer).unwrap();

        assert_eq!(end, SessionEnd::Completed);
        assert_eq!(session.results().len(), 1);
        let result = &session.results()[0];
        assert_eq!(result.outcome, Outcome::Player1WinByCapture);
        assert_eq!(result.move_counts, [1, 0]);
        assert_eq!(result.winner_index(), Some(0));
        assert_eq!(input.waits, 1);

        // before the move, after it, and the result
        assert_eq!(renderer.frames.len(), 3);
        assert_eq!(renderer.frames[0].board, "|_|X|\n|O|_|\n");
        assert_eq!(renderer.frames[0].status, "3 tours restants | C'est à alice de jouer");
        assert_eq!(renderer.frames[1].board, "|_|_|\n|X|_|\n");
        assert_eq!(renderer.frames[2].board, "|_|_|\n|X|_|\n");
        assert!(renderer.frames[2].status.starts_with("alice gagne en 1 tours avec 0 points."));
    }

    #[test]
    fn invalid_keys_are_reported_and_asked_again() {
        let mut session = Session::new(roster(2), 2).unwrap();
        let mut input = ScriptedInput::new("z?w");
        let mut renderer = RecordingRenderer::default();

        session.run(&mut quiet_spawner(), &mut input, &mut renderer).unwrap();

        assert_eq!(input.requests, 3);
        let errors: Vec<_> = renderer.frames.iter().filter_map(|f| f.error).collect();
        assert_eq!(errors, vec!["Déplacement impossible.", "Saisie incorrecte."]);
        // rejected keys leave the board as it was
        assert_eq!(renderer.frames[1].board, renderer.frames[0].board);
        assert_eq!(session.results()[0].outcome, Outcome::Player1WinByCapture);
        assert_eq!(session.results()[0].move_counts, [1, 0]);
    }

    #[test]
    fn multiplayer_plays_each_pair_in_order() {
        let mut session = Session::new(roster(4), 2).unwrap();
        let mut input = ScriptedInput::new("wqz");
        let mut renderer = RecordingRenderer::default();

        let end = session.run(&mut quiet_spawner(), &mut input, &mut renderer).unwrap();

        assert_eq!(end, SessionEnd::Completed);
        let outcomes: Vec<_> = session.results().iter().map(|r| r.outcome).collect();
        assert_eq!(outcomes, vec![Outcome::Player1WinByCapture, Outcome::Player2WinByCapture]);
        assert_eq!(session.results()[1].players, [2, 3]);
        assert_eq!(input.waits, 2);

        let summary = session.summary();
        let winners: Vec<_> = summary.winners.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(winners, vec!["alice", "dave"]);
        assert!(summary.multiplayer);

        // the board is reset between duels
        let second_duel_start = renderer.frames.iter().position(|f| f.status.contains("carol")).unwrap();
        assert_eq!(renderer.frames[second_duel_start].board, "|_|X|\n|O|_|\n");
    }

    #[test]
    fn quitting_mid_duel_abandons_the_session() {
        let mut session = Session::new(roster(4), 3).unwrap();
        let mut input = ScriptedInput::new("x");
        let mut renderer = RecordingRenderer::default();

        let end = session.run(&mut quiet_spawner(), &mut input, &mut renderer).unwrap();

        assert_eq!(end, SessionEnd::Abandoned);
        assert!(session.results().is_empty());
        assert_eq!(input.waits, 0);
    }

    #[test]
    fn failed_render_leaves_the_session_playable() {
        let mut session = Session::new(roster(2), 2).unwrap();
        let mut input = ScriptedInput::new("w");
        let mut broken = RecordingRenderer {
            fail_at: Some(1),
            ..Default::default()
        };

        // fails right after the first move is drawn
        assert!(session.run(&mut quiet_spawner(), &mut input, &mut broken).is_err());
        assert!(session.results().is_empty());
        assert_eq!(session.scores(), &[0, 0]);

        let mut input = ScriptedInput::new("w");
        let mut renderer = RecordingRenderer::default();
        let end = session.run(&mut quiet_spawner(), &mut input, &mut renderer).unwrap();

        assert_eq!(end, SessionEnd::Completed);
        assert_eq!(renderer.frames[0].board, "|_|X|\n|O|_|\n");
        assert_eq!(session.results()[0].outcome, Outcome::Player1WinByCapture);
    }

    #[test]
    fn result_screen_failure_commits_nothing() {
        let mut spawner = BonusSpawner::new(21, 0, 100).unwrap();
        let mut session = Session::new(roster(2), 3).unwrap();
        let mut input = ScriptedInput::new("we");
        // turn start, move, turn start, move, then the result screen
        let mut broken = RecordingRenderer {
            fail_at: Some(4),
            ..Default::default()
        };

        assert!(session.run(&mut spawner, &mut input, &mut broken).is_err());
        assert_eq!(broken.frames.len(), 4);
        assert_eq!(session.scores(), &[0, 0]);
        assert!(session.results().is_empty());
    }

    #[test]
    fn coin_points_carry_into_the_results() {
        // on a 3x3 board the only admissible bonus cell at the start is the centre
        let mut spawner = BonusSpawner::new(21, 0, 100).unwrap();
        let mut session = Session::new(roster(2), 3).unwrap();
        let mut input = ScriptedInput::new("we");
        let mut renderer = RecordingRenderer::default();

        session.run(&mut spawner, &mut input, &mut renderer).unwrap();

        assert_eq!(renderer.frames[0].board, "|_|_|X|\n|_|+|_|\n|O|_|_|\n");
        assert_eq!(renderer.frames[1].scores, [1, 0]);
        // Player2's turn spawns at row 0, column 2
        assert_eq!(renderer.frames[2].board, "|_|_|+|\n|_|X|_|\n|O|_|_|\n");

        let result = &session.results()[0];
        assert_eq!(result.outcome, Outcome::Player2WinByCapture);
        assert_eq!(result.scores, [1, 0]);
        assert_eq!(session.scores(), &[1, 0]);
        assert_eq!(
            format_results(session.roster(), session.results()),
            "Liste des gagnants :\nalice vs. bob : bob a gagné avec 0 points\n\n"
        );
    }

    #[test]
    fn draw_after_exhaustion_has_no_winner() {
        let mut session = Session::new(roster(2), 2).unwrap();
        let mut input = ScriptedInput::new("xzzxxz");
        let mut renderer = RecordingRenderer::default();

        session.run(&mut quiet_spawner(), &mut input, &mut renderer).unwrap();

        let result = &session.results()[0];
        assert_eq!(result.outcome, Outcome::Draw);
        assert_eq!(result.winner_index(), None);
        assert!(session.summary().winners.is_empty());
        assert_eq!(session.summary().draws, 1);
        let last = renderer.frames.last().unwrap();
        assert!(last.status.starts_with("Match nul !"));
    }
}
