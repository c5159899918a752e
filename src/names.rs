// Game rule constants

/// Cards generated per game at creation time.
pub const DECK_SIZE: i64 = 100;

/// Minimum number of players required to start a game.
pub const MIN_PLAYERS: usize = 2;

/// Fixed penalty applied when a player refuses their card, regardless of tier.
pub const REFUSAL_PENALTY: i64 = -5;

/// The three difficulty tiers, in card slot order.
pub const TIERS: [i64; 3] = [1, 2, 3];

pub const STATUS_ACTIVE: &str = "active";
pub const STATUS_FINISHED: &str = "finished";

pub const ACTION_REFUSED: &str = "refused";

/// Point value for a difficulty tier. `None` for anything outside 1-3.
pub fn points_for_tier(difficulty: i64) -> Option<i64> {
    match difficulty {
        1 => Some(1),
        2 => Some(3),
        3 => Some(5),
        _ => None,
    }
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
