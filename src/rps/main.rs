use rock_paper_scissors::{play, Choice, Result};

fn main() -> Result<()> {
    rock_paper_scissors::init_logging();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    let result = play(&mut stdin.lock(), &mut stdout.lock(), Choice::random)?;
    log::info!(
        "match finished: {} won, {} lost",
        result.player_wins,
        result.losses()
    );

    Ok(())
}
