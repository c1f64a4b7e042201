use rock_paper_scissors::{play_once, Choice, Result};

fn main() -> Result<()> {
    rock_paper_scissors::init_logging();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    let outcome = play_once(&mut stdin.lock(), &mut stdout.lock(), Choice::random)?;
    log::debug!("single round outcome: {:?}", outcome);

    Ok(())
}
