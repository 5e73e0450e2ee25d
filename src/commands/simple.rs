//! Simple interactive CLI mode
//!
//! Line-based session: enter a rack to query, then narrow the cached results
//! with refinement commands.

use crate::core::{ConstraintError, Rack, RackError};
use crate::engine::Session;
use crate::output::print_results;
use colored::Colorize;
use std::io::{self, Write};
use thiserror::Error;

/// Error type for session command input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error(transparent)]
    Rack(#[from] RackError),
    #[error(transparent)]
    Constraint(#[from] ConstraintError),
    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),
    #[error("invalid position '{0}'")]
    InvalidPosition(String),
    #[error("unknown command '/{0}', type /help for a list")]
    UnknownCommand(String),
}

/// A parsed line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Query a new rack, keeping constraints and filter
    Query(Rack),
    StartsWith(String),
    EndsWith(String),
    Contains(String),
    ClearFilter,
    /// Require a letter at a 1-indexed position and re-run the query
    Constrain(usize, char),
    /// Drop the constraint at a position and re-run the query
    Unconstrain(usize),
    /// Deal a random rack and query it
    Deal,
    Reset,
    Show,
    Help,
    Quit,
}

/// Whether the session loop keeps going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Prefix that marks a line as a command rather than a rack
pub const COMMAND_PREFIX: char = '/';

/// Parse one line of session input
///
/// Lines starting with `/` are commands; anything else is a rack, so a rack
/// spelling a command word (`DEAL`, `QUIT`) is still queried. An empty line
/// shows the current results again.
///
/// # Errors
/// Returns an error if a command is unknown or missing its argument, or the
/// rack or constraint is invalid.
pub fn parse_command(line: &str) -> Result<SessionCommand, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(SessionCommand::Show);
    }
    let Some(command) = line.strip_prefix(COMMAND_PREFIX) else {
        return Ok(SessionCommand::Query(Rack::parse(line)?));
    };

    let (head, rest) = command
        .split_once(char::is_whitespace)
        .map_or((command, ""), |(head, rest)| (head, rest.trim()));

    let argument = |name: &'static str| -> Result<String, CommandError> {
        if rest.is_empty() {
            Err(CommandError::MissingArgument(name))
        } else {
            Ok(rest.to_string())
        }
    };

    let command = match head.to_lowercase().as_str() {
        "start" | "starts" | "prefix" => SessionCommand::StartsWith(argument("start")?),
        "end" | "ends" | "suffix" => SessionCommand::EndsWith(argument("end")?),
        "contains" | "has" => SessionCommand::Contains(argument("contains")?),
        "clear" => SessionCommand::ClearFilter,
        "at" => {
            let (position, letter) = argument("at")?
                .split_once(char::is_whitespace)
                .map(|(p, l)| (p.to_string(), l.trim().to_string()))
                .ok_or(CommandError::MissingArgument("at"))?;
            let pair = format!("{position}={letter}");
            let constraints = crate::core::PositionConstraints::parse_all([pair.as_str()])?;
            let (position, letter) = constraints
                .iter()
                .next()
                .ok_or(CommandError::MissingArgument("at"))?;
            SessionCommand::Constrain(position, letter as char)
        }
        "unset" => {
            let position = argument("unset")?;
            let position = position
                .parse()
                .map_err(|_| CommandError::InvalidPosition(position.clone()))?;
            SessionCommand::Unconstrain(position)
        }
        "deal" => SessionCommand::Deal,
        "reset" => SessionCommand::Reset,
        "show" => SessionCommand::Show,
        "help" | "h" => SessionCommand::Help,
        "quit" | "q" | "exit" => SessionCommand::Quit,
        other => return Err(CommandError::UnknownCommand(other.to_string())),
    };

    Ok(command)
}

/// Session state of the simple mode
pub struct SimpleSession<'d, W> {
    pub session: Session,
    dictionary: &'d [W],
    rack_size: usize,
}

impl<'d, W> SimpleSession<'d, W>
where
    W: AsRef<str> + Sync,
{
    #[must_use]
    pub const fn new(session: Session, dictionary: &'d [W], rack_size: usize) -> Self {
        Self {
            session,
            dictionary,
            rack_size,
        }
    }

    /// Apply one command to the session
    pub fn apply(&mut self, command: SessionCommand) -> Flow {
        match command {
            SessionCommand::Query(rack) => self.query(rack),
            SessionCommand::StartsWith(prefix) => self.session.filter_mut().set_starts_with(&prefix),
            SessionCommand::EndsWith(suffix) => self.session.filter_mut().set_ends_with(&suffix),
            SessionCommand::Contains(fragment) => self.session.filter_mut().set_contains(&fragment),
            SessionCommand::ClearFilter => self.session.clear_filter(),
            SessionCommand::Constrain(position, letter) => {
                let mut constraints = self.session.constraints().clone();
                // Parsed input is already validated
                if constraints.insert(position, letter).is_ok() {
                    self.rerun(constraints);
                }
            }
            SessionCommand::Unconstrain(position) => {
                let mut constraints = self.session.constraints().clone();
                constraints.remove(position);
                self.rerun(constraints);
            }
            SessionCommand::Deal => {
                let rack = Rack::deal(&mut rand::rng(), self.rack_size);
                self.query(rack);
            }
            SessionCommand::Reset => self.session.reset(),
            SessionCommand::Show | SessionCommand::Help => {}
            SessionCommand::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    fn query(&mut self, rack: Rack) {
        let constraints = self.session.constraints().clone();
        self.session.run_query(self.dictionary, rack, constraints);
    }

    fn rerun(&mut self, constraints: crate::core::PositionConstraints) {
        let rack = self.session.rack().clone();
        self.session.run_query(self.dictionary, rack, constraints);
    }
}

fn print_help() {
    println!("Type letters to query a rack ('*' for a wildcard). Commands start with '/':");
    println!("  {}    keep words starting with X", "/start X".bright_white());
    println!("  {}      keep words ending with X", "/end X".bright_white());
    println!("  {} keep words containing X", "/contains X".bright_white());
    println!("  {}        drop the start/end/contains filters", "/clear".bright_white());
    println!("  {}   require letter L at position N (1-based)", "/at N L".bright_white());
    println!("  {}    drop the constraint at position N", "/unset N".bright_white());
    println!("  {}         deal a random rack", "/deal".bright_white());
    println!("  {}        clear rack, constraints and filters", "/reset".bright_white());
    println!("  {}         show the current results", "/show".bright_white());
    println!("  {}         exit\n", "/quit".bright_white());
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<W>(session: Session, dictionary: &[W], rack_size: usize) -> Result<(), String>
where
    W: AsRef<str> + Sync,
{
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Wordrack - Interactive Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    if dictionary.is_empty() {
        println!("{}", "⚠ No dictionary loaded; every query will come back empty.".yellow());
    }
    print_help();

    let mut simple = SimpleSession::new(session, dictionary, rack_size);

    loop {
        let input = get_user_input("rack or command")?;

        let command = match parse_command(&input) {
            Ok(command) => command,
            Err(e) => {
                println!("{} {e}\n", "❌".red());
                continue;
            }
        };

        let show_help = command == SessionCommand::Help;
        if simple.apply(command) == Flow::Quit {
            println!("\n👋 Bye!\n");
            return Ok(());
        }

        if show_help {
            print_help();
            continue;
        }

        let session = &simple.session;
        print_results(&session.view(), session.rack(), session.constraints(), session.filter());
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    // End of input behaves like quit
    if read == 0 {
        return Ok(format!("{COMMAND_PREFIX}quit"));
    }

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::RefineFilter;

    fn setup_dictionary() -> Vec<&'static str> {
        vec!["CATS", "ACTS", "CAST", "COATS", "COAST", "DOGS"]
    }

    fn words<W: AsRef<str> + Sync>(simple: &SimpleSession<'_, W>) -> Vec<String> {
        simple.session.view().iter().map(|e| e.word.clone()).collect()
    }

    #[test]
    fn parse_rack_line() {
        assert_eq!(
            parse_command("c a t s").unwrap(),
            SessionCommand::Query(Rack::parse("CATS").unwrap())
        );
    }

    #[test]
    fn parse_filter_commands() {
        assert_eq!(
            parse_command("/start ca").unwrap(),
            SessionCommand::StartsWith("ca".to_string())
        );
        assert_eq!(
            parse_command("/END s").unwrap(),
            SessionCommand::EndsWith("s".to_string())
        );
        assert_eq!(
            parse_command("/contains oa").unwrap(),
            SessionCommand::Contains("oa".to_string())
        );
        assert_eq!(parse_command("/clear").unwrap(), SessionCommand::ClearFilter);
    }

    #[test]
    fn parse_constraint_commands() {
        assert_eq!(parse_command("/at 1 c").unwrap(), SessionCommand::Constrain(1, 'C'));
        assert_eq!(parse_command("/unset 3").unwrap(), SessionCommand::Unconstrain(3));
        assert!(matches!(
            parse_command("/at 0 c"),
            Err(CommandError::Constraint(_))
        ));
        assert!(matches!(
            parse_command("/unset x"),
            Err(CommandError::InvalidPosition(_))
        ));
    }

    #[test]
    fn parse_missing_argument() {
        assert_eq!(
            parse_command("/start"),
            Err(CommandError::MissingArgument("start"))
        );
        assert_eq!(parse_command("/at 2"), Err(CommandError::MissingArgument("at")));
    }

    #[test]
    fn bare_command_words_are_racks() {
        for word in ["deal", "quit", "exit", "show", "help", "reset"] {
            assert_eq!(
                parse_command(word).unwrap(),
                SessionCommand::Query(Rack::parse(word).unwrap()),
                "{word} should be read as a rack"
            );
        }
        assert_eq!(
            parse_command("end s").unwrap(),
            SessionCommand::Query(Rack::parse("ENDS").unwrap())
        );
    }

    #[test]
    fn parse_unknown_command() {
        assert_eq!(
            parse_command("/bogus"),
            Err(CommandError::UnknownCommand("bogus".to_string()))
        );
    }

    #[test]
    fn rack_spelling_a_command_is_queried() {
        let dictionary = ["DEAL", "LEAD"];
        let mut simple = SimpleSession::new(Session::default(), &dictionary, 7);

        assert_eq!(simple.apply(parse_command("deal").unwrap()), Flow::Continue);
        assert_eq!(simple.session.rack().to_string(), "DEAL");
        assert_eq!(words(&simple), vec!["DEAL", "LEAD"]);

        assert_eq!(simple.apply(parse_command("quit").unwrap()), Flow::Continue);
        assert_eq!(simple.session.rack().to_string(), "QUIT");
    }

    #[test]
    fn parse_invalid_rack() {
        assert!(matches!(parse_command("ca7s"), Err(CommandError::Rack(_))));
    }

    #[test]
    fn parse_misc_commands() {
        assert_eq!(parse_command("").unwrap(), SessionCommand::Show);
        assert_eq!(parse_command("/q").unwrap(), SessionCommand::Quit);
        assert_eq!(parse_command("/reset").unwrap(), SessionCommand::Reset);
        assert_eq!(parse_command("/deal").unwrap(), SessionCommand::Deal);
    }

    #[test]
    fn session_query_and_refine() {
        let dictionary = setup_dictionary();
        let mut simple = SimpleSession::new(Session::default(), &dictionary, 7);

        simple.apply(parse_command("catso").unwrap());
        assert_eq!(words(&simple), vec!["COAST", "COATS", "ACTS", "CAST", "CATS"]);

        simple.apply(parse_command("/start co").unwrap());
        assert_eq!(words(&simple), vec!["COAST", "COATS"]);

        simple.apply(parse_command("/clear").unwrap());
        assert_eq!(simple.session.view().len(), 5);
    }

    #[test]
    fn session_constraints_rerun_query() {
        let dictionary = setup_dictionary();
        let mut simple = SimpleSession::new(Session::default(), &dictionary, 7);

        simple.apply(parse_command("catso").unwrap());
        simple.apply(parse_command("/at 2 a").unwrap());
        assert_eq!(words(&simple), vec!["CAST", "CATS"]);

        simple.apply(parse_command("/unset 2").unwrap());
        assert_eq!(simple.session.view().len(), 5);
    }

    #[test]
    fn filter_survives_new_rack() {
        let dictionary = setup_dictionary();
        let mut simple = SimpleSession::new(Session::default(), &dictionary, 7);

        simple.apply(parse_command("/end s").unwrap());
        simple.apply(parse_command("catso").unwrap());
        assert_eq!(words(&simple), vec!["COATS", "ACTS", "CATS"]);
        assert_eq!(simple.session.filter(), &RefineFilter::new().ends_with("S"));
    }

    #[test]
    fn deal_queries_random_rack() {
        let dictionary = setup_dictionary();
        let mut simple = SimpleSession::new(Session::default(), &dictionary, 9);

        simple.apply(SessionCommand::Deal);
        assert_eq!(simple.session.rack().len(), 9);
    }

    #[test]
    fn reset_and_quit() {
        let dictionary = setup_dictionary();
        let mut simple = SimpleSession::new(Session::default(), &dictionary, 7);

        simple.apply(parse_command("catso").unwrap());
        assert_eq!(simple.apply(SessionCommand::Reset), Flow::Continue);
        assert!(simple.session.results().is_empty());
        assert_eq!(simple.apply(SessionCommand::Quit), Flow::Quit);
    }
}
