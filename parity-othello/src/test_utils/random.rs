use crate::{Action, BoardError, Game, Location};
use rand::seq::SliceRandom;
use rand::Rng;

/// Play up to `plies` uniformly random actions from the starting position,
/// stopping early if the game ends. Passes count as plies.
pub fn random_game<R: Rng + ?Sized>(
    rng: &mut R,
    cols: usize,
    rows: usize,
    plies: usize,
) -> Result<Game, BoardError> {
    let mut game = Game::starting(cols, rows)?;

    for _ in 0..plies {
        if game.is_finished() {
            break;
        }

        let moves: Vec<Location> = game.get_moves().into();
        let action = match moves.choose(rng) {
            Some(&loc) => Action::Play(loc),
            None => Action::Pass,
        };
        game.act(action)?;
    }

    Ok(game)
}
