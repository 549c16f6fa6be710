//! Command-line interface

use clap::{Parser, ValueEnum};

use crate::board::Player;
use crate::config::MatchConfig;
use crate::error::Result;
use crate::rules::WinMode;

#[derive(Parser, Debug)]
#[command(name = "nim", about = "Red-Blue Nim against a minimax opponent", allow_negative_numbers = true)]
pub struct Cli {
    /// Number of red marbles
    pub num_red: i64,

    /// Number of blue marbles
    pub num_blue: i64,

    /// Win condition
    #[arg(long, visible_alias = "version", value_enum, default_value_t = ModeArg::Standard)]
    pub mode: ModeArg,

    /// Who plays first
    #[arg(long, value_enum, default_value_t = FirstPlayerArg::Computer)]
    pub first_player: FirstPlayerArg,

    /// Computer search depth
    #[arg(long, short = 'd', default_value_t = 5)]
    pub depth: i32,

    /// Play in the terminal instead of opening a window
    #[arg(long)]
    pub console: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Standard,
    Misere,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FirstPlayerArg {
    Human,
    Computer,
}

impl From<ModeArg> for WinMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Standard => WinMode::Standard,
            ModeArg::Misere => WinMode::Misere,
        }
    }
}

impl From<FirstPlayerArg> for Player {
    fn from(arg: FirstPlayerArg) -> Self {
        match arg {
            FirstPlayerArg::Human => Player::Human,
            FirstPlayerArg::Computer => Player::Computer,
        }
    }
}

impl Cli {
    /// Validate the parsed arguments into a match configuration
    pub fn match_config(&self) -> Result<MatchConfig> {
        MatchConfig::new(
            self.num_red,
            self.num_blue,
            self.mode.into(),
            self.first_player.into(),
            self.depth,
        )
    }
}
