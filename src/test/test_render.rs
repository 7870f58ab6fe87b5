mod test {
    use crate::console_interface::{render_grid_to_string, status_text, summary_lines, turns_left_text};
    use crate::core::*;
    use crate::models::{DuelResult, GameRenderState, Player, PlayerColor, RenderStatus, SummaryRenderState};
    use crate::test::test_util::roster;

    fn state<'a>(grid: &'a Grid, players: [&'a Player; 2], status: RenderStatus<'a>) -> GameRenderState<'a> {
        GameRenderState {
            grid,
            players,
            scores: [2, 5],
            duel_index: 0,
            remaining_turns: 4,
            status,
            error: None,
        }
    }

    fn line_text(line: &ratatui::text::Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn board_uses_each_players_own_token() {
        let first = Player::new("ana", PlayerColor::Cyan, '@');
        let second = Player::new("ben", PlayerColor::Yellow, '%');
        let mut grid = Grid::new(3).unwrap();
        grid.set(&Position::new(0, 2), Cell::Player1Token);
        grid.set(&Position::new(2, 0), Cell::Player2Token);
        grid.set(&Position::new(1, 1), Cell::RedSquare);
        grid.set(&Position::new(1, 2), Cell::Coin);

        crate::assert_eq_text!(
            &render_grid_to_string(&grid, [&first, &second]),
            "|_|_|@|\n|_|#|+|\n|%|_|_|\n"
        );
    }

    #[test]
    fn remaining_turns_are_pluralised() {
        assert_eq!(turns_left_text(1), "1 tour restant");
        assert_eq!(turns_left_text(0), "0 tours restants");
        assert_eq!(turns_left_text(7), "7 tours restants");
    }

    #[test]
    fn turn_status_names_the_player_and_any_error() {
        let players = roster(2);
        let grid = Grid::new(2).unwrap();
        let mut render = state(&grid, [&players[0], &players[1]], RenderStatus::Turn(PlayerSlot::Player2));
        assert_eq!(status_text(&render), "4 tours restants | C'est à bob de jouer");

        render.error = Some("Saisie incorrecte.");
        assert_eq!(
            status_text(&render),
            "4 tours restants | C'est à bob de jouer | Saisie incorrecte."
        );
    }

    #[test]
    fn finished_status_describes_the_outcome() {
        let players = roster(2);
        let grid = Grid::new(2).unwrap();
        let mut result = DuelResult {
            players: [0, 1],
            outcome: Outcome::Player2WinByRedSquare,
            scores: [2, 5],
            move_counts: [3, 3],
        };

        let render = state(&grid, [&players[0], &players[1]], RenderStatus::Finished(&result));
        assert_eq!(
            status_text(&render),
            "bob gagne en 3 tours avec 5 points. | Appuyez sur une touche pour continuer"
        );

        result.outcome = Outcome::Player1WinByScore;
        let render = state(&grid, [&players[0], &players[1]], RenderStatus::Finished(&result));
        assert!(status_text(&render).starts_with("alice gagne grâce à ses 2 points."));

        result.outcome = Outcome::Draw;
        let render = state(&grid, [&players[0], &players[1]], RenderStatus::Finished(&result));
        assert!(status_text(&render).starts_with("Match nul ! |"));
    }

    #[test]
    fn summary_lists_winners_and_draws() {
        let players = roster(6);
        let summary = SummaryRenderState {
            winners: vec![&players[0], &players[3]],
            draws: 1,
            multiplayer: true,
        };
        let lines: Vec<String> = summary_lines(&summary).iter().map(line_text).collect();

        assert_eq!(lines[0], "Les vainqueurs ont été :");
        assert_eq!(lines[2], "alice");
        assert_eq!(lines[3], "dave");
        assert_eq!(lines[4], "Matchs nuls : 1");
        assert!(lines.last().unwrap().contains("('o' ou 'n')"));
    }

    #[test]
    fn single_duel_summary_uses_the_singular_title() {
        let players = roster(2);
        let summary = SummaryRenderState {
            winners: vec![&players[1]],
            draws: 0,
            multiplayer: false,
        };
        let lines: Vec<String> = summary_lines(&summary).iter().map(line_text).collect();

        assert_eq!(lines[0], "Le vainqueur a été :");
        assert!(!lines.iter().any(|l| l.starts_with("Matchs nuls")));
    }
}
