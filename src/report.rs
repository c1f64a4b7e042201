use std::io::Write;

/// Counted (non-draw) rounds in a match.
pub const MAXIMUM_ROUNDS: u32 = 3;
pub const WINS_NEEDED: u32 = 2;

pub fn summary(player_wins: u32) -> String {
    let losses = MAXIMUM_ROUNDS.saturating_sub(player_wins);
    if player_wins >= WINS_NEEDED {
        format!("You won the game! Score: {}-{}", player_wins, losses)
    } else {
        format!("You lost the game! Score: {}-{}", losses, player_wins)
    }
}

pub fn report<W: Write>(out: &mut W, player_wins: u32) -> std::io::Result<()> {
    writeln!(out, "{}", summary(player_wins))?;
    writeln!(out, "Thanks for playing!")
}
