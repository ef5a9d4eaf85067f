use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod clans;
pub mod leaderboards;
pub mod maps;
pub mod mapsets;
pub mod modifiers;
pub mod multiplayer;
pub mod playlists;
pub mod scores;
pub mod server_stats;
pub mod users;

#[repr(u8)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub enum GameMode {
    #[default]
    Keys4 = 1,
    Keys7 = 2,
}

impl From<i64> for GameMode {
    fn from(value: i64) -> Self {
        match value {
            2 => GameMode::Keys7,
            _ => GameMode::Keys4,
        }
    }
}

impl From<GameMode> for u8 {
    fn from(value: GameMode) -> Self {
        value as u8
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as u8)
    }
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "1" | "4k" | "keys4" => Ok(GameMode::Keys4),
            "2" | "7k" | "keys7" => Ok(GameMode::Keys7),
            _ => Err(format!("unknown game mode: {s}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    X,
    SS,
    S,
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Grade::X => "X",
            Grade::SS => "SS",
            Grade::S => "S",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "X" => Ok(Grade::X),
            "SS" => Ok(Grade::SS),
            "S" => Ok(Grade::S),
            "A" => Ok(Grade::A),
            "B" => Ok(Grade::B),
            "C" => Ok(Grade::C),
            "D" => Ok(Grade::D),
            "F" => Ok(Grade::F),
            _ => Err(format!("unknown grade: {s}")),
        }
    }
}

#[repr(i8)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i8")]
pub enum RankedStatus {
    #[default]
    NotSubmitted = 0,
    Unranked = 1,
    Ranked = 2,
    DanCourse = 3,
}

impl From<i64> for RankedStatus {
    fn from(value: i64) -> Self {
        match value {
            1 => Self::Unranked,
            2 => Self::Ranked,
            3 => Self::DanCourse,
            _ => Self::NotSubmitted,
        }
    }
}

impl From<RankedStatus> for i8 {
    fn from(value: RankedStatus) -> Self {
        value as i8
    }
}
