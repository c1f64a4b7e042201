//! End-to-end matches driven by scripted input and a scripted opponent

use rock_paper_scissors::{play, Choice, Match};

fn scripted(draws: &[Choice]) -> impl FnMut() -> Choice + '_ {
    let mut draws = draws.iter();
    move || *draws.next().expect("opponent ran out of scripted draws")
}

fn run(input: &[u8], draws: &[Choice]) -> (Match, String) {
    let mut input = input;
    let mut out = Vec::new();
    let result = play(&mut input, &mut out, scripted(draws)).unwrap();
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn test_clean_sweep() {
    let (result, out) = run(
        b"R\nS\nP\n",
        &[Choice::Scissors, Choice::Paper, Choice::Rock],
    );

    assert_eq!(
        result,
        Match {
            rounds_played: 3,
            player_wins: 3
        }
    );
    assert!(out.starts_with("Welcome to Rock Paper Scissors!\nPick one: R, P, S\n"));
    assert!(out.contains("Your Rock beats the opponent's Scissors!"));
    assert!(out.contains("Your Scissors beats the opponent's Paper!"));
    assert!(out.contains("Your Paper beats the opponent's Rock!"));
    assert!(out.ends_with("You won the game! Score: 3-0\nThanks for playing!\n"));
}

#[test]
fn test_draw_is_replayed() {
    let (result, out) = run(
        b"R\nR\nP\nS\n",
        &[Choice::Rock, Choice::Scissors, Choice::Scissors, Choice::Rock],
    );

    assert_eq!(result.rounds_played, 3);
    assert_eq!(result.player_wins, 1);
    assert_eq!(out.matches("It's a draw!").count(), 1);
    assert_eq!(out.matches("Pick one: R, P, S").count(), 4);
    assert!(out.contains("The opponent's Scissors beats your Paper!"));
    assert!(out.ends_with("You lost the game! Score: 2-1\nThanks for playing!\n"));
}

#[test]
fn test_invalid_input_consumes_no_round() {
    let (result, out) = run(
        b"Q\nP\nrock\n\nr\ns\n",
        &[Choice::Rock, Choice::Scissors, Choice::Rock],
    );

    assert_eq!(result.rounds_played, 3);
    assert_eq!(result.player_wins, 2);
    assert_eq!(out.matches("Pick one: R, P, S").count(), 6);
    assert!(!out.contains("Invalid"));
    assert!(out.contains("You picked Paper\nOpponent picked Rock\n"));
    assert!(out.ends_with("You won the game! Score: 2-1\nThanks for playing!\n"));
}

#[test]
fn test_undecodable_input_is_skipped() {
    let (result, out) = run(
        b"\xff\nS\nS\nS\n",
        &[Choice::Rock, Choice::Rock, Choice::Rock],
    );

    assert_eq!(result.player_wins, 0);
    assert_eq!(out.matches("Could not get string from data.").count(), 1);
    assert!(out.ends_with("You lost the game! Score: 3-0\nThanks for playing!\n"));
}

#[test]
fn test_random_opponent_always_finishes() {
    let input = "p\nr\ns\n".repeat(20);
    let mut input = input.as_bytes();
    let mut out = Vec::new();

    let result = play(&mut input, &mut out, Choice::random).unwrap();

    assert!(result.is_over());
    assert!(result.player_wins <= 3);
}
