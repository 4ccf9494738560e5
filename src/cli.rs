//! Interactive text interface.
//!
//! The loop reads from any [`BufRead`] and writes to any [`Write`], so it can
//! be driven from stdin/stdout or from a scripted buffer.

use std::io::{BufRead, Write};

use tracing::{info, warn};

use crate::error::TrainerError;
use crate::options::{DEFAULT_DECKS, TrainerOptions, parse_decks};
use crate::session::Session;
use crate::stats::PlayerStats;
use crate::strategy::Action;

/// Who is speaking on a line of output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The player.
    You,
    /// The dealer.
    Dealer,
}

impl Role {
    /// Returns the line prefix for this role.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::You => "[YOU]",
            Self::Dealer => "[DEALER]",
        }
    }
}

/// Writes one line prefixed with the speaker's label.
///
/// # Errors
///
/// Returns any error from the underlying writer.
///
/// # Example
///
/// ```
/// use bjtrainer::cli::{Role, say};
///
/// let mut out = Vec::new();
/// say(&mut out, Role::Dealer, "Hello").unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "[DEALER] Hello\n");
/// ```
pub fn say(out: &mut dyn Write, role: Role, message: &str) -> std::io::Result<()> {
    writeln!(out, "{} {message}", role.label())
}

/// Maps a typed decision to an action.
///
/// Accepts `H`, `S` or `D` in either case, ignoring surrounding whitespace.
///
/// # Example
///
/// ```
/// use bjtrainer::Action;
/// use bjtrainer::cli::parse_decision;
///
/// assert_eq!(parse_decision(" d "), Some(Action::DoubleDown));
/// assert_eq!(parse_decision("hit"), None);
/// ```
#[must_use]
pub fn parse_decision(input: &str) -> Option<Action> {
    match input.trim().to_uppercase().as_str() {
        "H" => Some(Action::Hit),
        "S" => Some(Action::Stand),
        "D" => Some(Action::DoubleDown),
        _ => None,
    }
}

fn prompt(input: &mut dyn BufRead, out: &mut dyn Write) -> Result<Option<String>, TrainerError> {
    write!(out, "{} ", Role::You.label())?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(out)?;
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn announce_shoe(out: &mut dyn Write, decks: u8) -> Result<(), TrainerError> {
    say(
        out,
        Role::Dealer,
        &format!("We are out of cards, I am filling up a new shoe with {decks} decks of cards."),
    )?;
    say(out, Role::Dealer, "I am shuffling the shoe.")?;
    say(out, Role::Dealer, "The shoe is ready to be used.")?;
    Ok(())
}

fn prompt_decks(input: &mut dyn BufRead, out: &mut dyn Write) -> Result<u8, TrainerError> {
    say(out, Role::Dealer, "How many decks do you want me to use? (1-8)")?;
    let answer = prompt(input, out)?;

    if let Some(decks) = answer.as_deref().and_then(parse_decks) {
        return Ok(decks);
    }

    warn!(answer = ?answer, "invalid deck count, using default");
    say(
        out,
        Role::Dealer,
        &format!("That's not a valid number of decks, I'll use {DEFAULT_DECKS} decks."),
    )?;
    Ok(DEFAULT_DECKS)
}

fn print_final_stats(out: &mut dyn Write, stats: PlayerStats) -> Result<(), TrainerError> {
    writeln!(out, "\n--- Final Stats ---")?;
    say(
        out,
        Role::Dealer,
        &format!(
            "Final stats: You played {} hands of which {} correctly.",
            stats.played, stats.correct
        ),
    )?;
    say(
        out,
        Role::Dealer,
        &format!(
            "Your final accuracy percentage is: {:.2}%",
            stats.percentage()
        ),
    )?;
    writeln!(out, "------------------")?;
    Ok(())
}

/// Runs an interactive training session until the player stops.
///
/// When `ask_decks` is set the dealer prompts for the deck count and the
/// value in `options` is only the fallback. Input ending early closes the
/// session as if the player had declined another hand.
///
/// Returns the player's final stats.
///
/// # Errors
///
/// Returns an error on I/O failure, on invalid options, or if a round cannot
/// be dealt or judged.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// use bjtrainer::TrainerOptions;
/// use bjtrainer::cli::run_session;
///
/// let options = TrainerOptions::default().with_seed(Some(3));
/// let mut input = Cursor::new("s\nn\n");
/// let mut out = Vec::new();
/// let stats = run_session(options, false, &mut input, &mut out).unwrap();
/// assert_eq!(stats.played, 1);
/// ```
pub fn run_session(
    options: TrainerOptions,
    ask_decks: bool,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<PlayerStats, TrainerError> {
    writeln!(out, "Welcome to Blackjack training!")?;
    writeln!(out, "This is a text-based version of the game.")?;

    let options = if ask_decks {
        options.with_decks(prompt_decks(input, out)?)
    } else {
        options
    };

    let mut session = Session::new(options)?;
    announce_shoe(out, session.dealer().decks)?;

    loop {
        let round = session.deal_round()?;
        if round.refilled {
            announce_shoe(out, session.dealer().decks)?;
        }

        writeln!(out, "\n--- New Hand ---")?;
        say(out, Role::Dealer, &format!("Your hand: {}", round.player))?;
        if let Some(up_card) = round.dealer.up_card() {
            say(
                out,
                Role::Dealer,
                &format!("My hand: {up_card} and a face down card."),
            )?;
        }

        say(
            out,
            Role::Dealer,
            "Do you want to hit (H), stand (S), or double down (D)?",
        )?;
        let Some(choice) = prompt(input, out)? else {
            info!("input closed before a decision");
            break;
        };

        let declared = if let Some(action) = parse_decision(&choice) {
            action
        } else {
            say(out, Role::Dealer, "I did not understand you so you will stand.")?;
            Action::Stand
        };

        let judgement = session.judge(&round, declared)?;
        if judgement.accurate {
            say(out, Role::Dealer, "Good job! You made the right choice.")?;
        } else {
            say(out, Role::Dealer, "Oops! You made the wrong choice.")?;
            say(
                out,
                Role::Dealer,
                &format!("Basic strategy says you should {}.", judgement.prescribed),
            )?;
        }

        let stats = session.stats();
        say(
            out,
            Role::Dealer,
            &format!(
                "You have played {} hands of which {} correctly.",
                stats.played, stats.correct
            ),
        )?;
        say(
            out,
            Role::Dealer,
            &format!("Your accuracy percentage is: {:.2}%", stats.percentage()),
        )?;

        say(out, Role::Dealer, "Do you want to play again? (Y/N)")?;
        let again = prompt(input, out)?;
        if again.is_some_and(|answer| answer.eq_ignore_ascii_case("y")) {
            say(out, Role::Dealer, "Great! Let's play again.")?;
        } else {
            break;
        }
    }

    let stats = session.stats();
    info!(played = stats.played, correct = stats.correct, "session finished");
    say(out, Role::Dealer, "Get out of this place!")?;
    print_final_stats(out, stats)?;
    Ok(stats)
}

/// Writes a session failure as one `error:` line and returns the exit code.
///
/// Returns `0` on success and `1` on failure.
///
/// # Example
///
/// ```
/// use bjtrainer::cli::report;
/// use bjtrainer::{OptionsError, TrainerError};
///
/// let mut err = Vec::new();
/// let code = report(&Err(TrainerError::Options(OptionsError::InvalidDecks(9))), &mut err);
/// assert_eq!(code, 1);
/// ```
pub fn report(result: &Result<PlayerStats, TrainerError>, err: &mut dyn Write) -> u8 {
    match result {
        Ok(_) => 0,
        Err(error) => {
            let _ = writeln!(err, "error: {error}");
            1
        }
    }
}
