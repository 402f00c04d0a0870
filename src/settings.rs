//! Launch options
//!
//! Every option is a boolean command-line flag. Arguments that are not one of
//! the known flags are dropped before parsing, so typos never stop the game.

use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_FONT_PATH, FONT_ENV_VAR};
use crate::sim::PaddleControl;

/// Key bindings, printed after the flag list
pub const CONTROLS: &str = "\
Controls:

  F1      Shows this message
  F2      Decreases ball speed multiplier
  F3      Increases ball speed multiplier
  W       Moves player 1 up (if enabled)
  S       Moves player 1 down (if enabled)
  Up      Moves player 2 up (if enabled)
  Down    Moves player 2 down (if enabled)
  Space   Starts the round
  Escape  Quits";

/// Flags the parser understands; anything else on the command line is ignored
const KNOWN_FLAGS: [&str; 9] = [
    "--no-text",
    "--resizable",
    "--no-vsync",
    "--render-collisions",
    "--no-player1",
    "--no-player2",
    "--mouse-player1",
    "--mouse-player2",
    "--help",
];

/// Options chosen on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq, Parser, Serialize, Deserialize)]
#[command(
    name = "pong",
    about = "Classic two-paddle Pong",
    disable_help_flag = true,
    args_override_self = true,
    after_help = CONTROLS
)]
pub struct LaunchOptions {
    /// No text rendering
    #[arg(long = "no-text")]
    pub no_text: bool,

    /// Makes the game window resizable
    #[arg(long)]
    pub resizable: bool,

    /// Disables VSync
    #[arg(long = "no-vsync")]
    pub no_vsync: bool,

    /// Enables the rendering of the collision boxes
    #[arg(long = "render-collisions")]
    pub render_collisions: bool,

    /// Makes player 1 a computer
    #[arg(long = "no-player1")]
    pub no_player1: bool,

    /// Makes player 2 a computer
    #[arg(long = "no-player2")]
    pub no_player2: bool,

    /// Makes player 1 move with the mouse
    #[arg(long = "mouse-player1")]
    pub mouse_player1: bool,

    /// Makes player 2 move with the mouse
    #[arg(long = "mouse-player2")]
    pub mouse_player2: bool,

    /// Prints this message and exits
    #[arg(long)]
    pub help: bool,
}

impl LaunchOptions {
    /// Parse `args` (program name first), ignoring unknown arguments
    ///
    /// Only the known boolean flags reach clap, and repeats override each other,
    /// so parsing cannot fail.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);
        let program = args.next().unwrap_or_else(|| "pong".to_string());
        let known = args.filter(|arg| KNOWN_FLAGS.contains(&arg.as_str()));

        Self::parse_from(std::iter::once(program).chain(known))
    }

    /// Control type for paddle 0 (left) and paddle 1 (right)
    pub fn lineup(&self) -> [PaddleControl; 2] {
        let control = |computer: bool, mouse: bool| {
            if computer {
                PaddleControl::Computer
            } else {
                PaddleControl::Human { mouse }
            }
        };
        [
            control(self.no_player1, self.mouse_player1),
            control(self.no_player2, self.mouse_player2),
        ]
    }

    pub fn text_enabled(&self) -> bool {
        !self.no_text
    }

    pub fn vsync(&self) -> bool {
        !self.no_vsync
    }

    /// Usage text with the flag list and the controls table
    pub fn help_text() -> String {
        Self::command().render_help().to_string()
    }

    /// Log which features are on, one line each
    pub fn log_summary(&self) {
        let ed = |on: bool| if on { "enabled" } else { "disabled" };
        let movement = |mouse: bool| if mouse { "mouse" } else { "keys" };
        log::info!("Text rendering: {}", ed(self.text_enabled()));
        log::info!("Resizable window: {}", ed(self.resizable));
        log::info!("Collision rendering: {}", ed(self.render_collisions));
        log::info!("VSync: {}", ed(self.vsync()));
        log::info!(
            "Player 1: {} (movement: {})",
            ed(!self.no_player1),
            movement(self.mouse_player1)
        );
        log::info!(
            "Player 2: {} (movement: {})",
            ed(!self.no_player2),
            movement(self.mouse_player2)
        );
        if let Ok(json) = serde_json::to_string(self) {
            log::debug!("Launch options: {}", json);
        }
    }
}

/// Font used for the score text: `$PONG_FONT`, else the system Hack font
pub fn font_path() -> PathBuf {
    std::env::var_os(FONT_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_FONT_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> LaunchOptions {
        LaunchOptions::from_args(std::iter::once("pong").chain(args.iter().copied()))
    }

    #[test]
    fn test_no_flags_is_default() {
        assert_eq!(parse(&[]), LaunchOptions::default());
        assert!(parse(&[]).text_enabled());
        assert!(parse(&[]).vsync());
    }

    #[test]
    fn test_all_flags() {
        let opts = parse(&[
            "--no-text",
            "--resizable",
            "--no-vsync",
            "--render-collisions",
            "--no-player1",
            "--no-player2",
            "--mouse-player1",
            "--mouse-player2",
        ]);
        assert!(!opts.text_enabled());
        assert!(opts.resizable);
        assert!(!opts.vsync());
        assert!(opts.render_collisions);
        assert!(opts.no_player1 && opts.no_player2);
        assert!(opts.mouse_player1 && opts.mouse_player2);
        assert!(!opts.help);
    }

    #[test]
    fn test_unknown_flags_are_ignored() {
        let opts = parse(&["--turbo", "--resizable", "stray", "-x", "--no-text=1"]);
        assert!(opts.resizable);
        assert!(opts.text_enabled());
        assert!(!opts.help);
    }

    #[test]
    fn test_repeated_flag_is_accepted() {
        let opts = parse(&["--no-vsync", "--no-vsync"]);
        assert!(!opts.vsync());
    }

    #[test]
    fn test_known_flags_always_parse() {
        for flag in KNOWN_FLAGS {
            let args = ["pong", flag, flag];
            assert!(LaunchOptions::try_parse_from(args).is_ok(), "{flag} rejected");
        }
        let every: Vec<&str> = std::iter::once("pong")
            .chain(KNOWN_FLAGS)
            .chain(KNOWN_FLAGS)
            .collect();
        assert!(LaunchOptions::try_parse_from(every).is_ok());
    }

    #[test]
    fn test_help_flag() {
        assert!(parse(&["--resizable", "--help"]).help);
    }

    #[test]
    fn test_lineup() {
        let opts = parse(&["--no-player1", "--mouse-player2"]);
        assert_eq!(
            opts.lineup(),
            [PaddleControl::Computer, PaddleControl::Human { mouse: true }]
        );

        // Computer wins over mouse for the same player
        let opts = parse(&["--no-player1", "--mouse-player1"]);
        assert_eq!(opts.lineup()[0], PaddleControl::Computer);
    }

    #[test]
    fn test_help_text_lists_flags_and_controls() {
        let help = LaunchOptions::help_text();
        for flag in KNOWN_FLAGS {
            assert!(help.contains(flag), "missing {flag}");
        }
        assert!(help.contains("Controls:"));
    }
}
