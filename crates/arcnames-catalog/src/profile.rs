//! Per-game archive layouts

use crate::source::SourceKind;
use arcnames_formats::tab::TabFormat;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A directory of TAB/ARC pairs relative to the game root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchiveDirectory {
    /// Path relative to the game root, `/`-separated
    pub path: &'static str,
    /// Precedence category of every archive in the directory
    pub kind: SourceKind,
}

const fn dir(path: &'static str, kind: SourceKind) -> ArchiveDirectory {
    ArchiveDirectory { path, kind }
}

/// Supported games
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Game {
    /// Just Cause 3: legacy TAB layout
    Jc3,
    /// Just Cause 4: extended TAB layout
    Jc4,
}

/// Error returned for an unknown game name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown game '{0}' (expected jc3 or jc4)")]
pub struct ParseGameError(String);

impl Game {
    /// All supported games
    pub const ALL: [Self; 2] = [Self::Jc3, Self::Jc4];

    /// Short name used on the command line and in output paths
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jc3 => "jc3",
            Self::Jc4 => "jc4",
        }
    }

    /// Archive layout of the game
    pub fn profile(self) -> &'static GameProfile {
        match self {
            Self::Jc3 => &JC3,
            Self::Jc4 => &JC4,
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Game {
    type Err = ParseGameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|game| game.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseGameError(s.to_string()))
    }
}

/// Where a game keeps its archives and how to read them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameProfile {
    /// Game this profile describes
    pub game: Game,
    /// TAB layout used by every archive of the game
    pub format: TabFormat,
    /// Archive directories in scan order
    pub directories: &'static [ArchiveDirectory],
}

static JC3: GameProfile = GameProfile {
    game: Game::Jc3,
    format: TabFormat::Legacy,
    directories: &[
        dir("archives_win64", SourceKind::Base),
        dir("patch_win64", SourceKind::Patch),
        dir("dlc_win64/bavarium_sea_heist", SourceKind::Dlc),
        dir("dlc_win64/bavarium_sea_heist/arc", SourceKind::Dlc),
        dir("dlc_win64/mech_land_assault", SourceKind::Dlc),
        dir("dlc_win64/mech_land_assault/arc", SourceKind::Dlc),
        dir("dlc_win64/skin_flame", SourceKind::Dlc),
        dir("dlc_win64/sky_fortress", SourceKind::Dlc),
        dir("dlc_win64/v0300_preorder", SourceKind::Dlc),
        dir("dlc_win64/v0604_preorder", SourceKind::Dlc),
        dir("dlc_win64/v0805_sportmech", SourceKind::Dlc),
        dir("dlc_win64/v0805_sportmech/arc", SourceKind::Dlc),
        dir("dlc_win64/v1401_preorder", SourceKind::Dlc),
        dir("dlc_win64/w142_preorder", SourceKind::Dlc),
        dir("dlc_win64/w163_preorder", SourceKind::Dlc),
        dir("dlc_win64/w901_scorpiongun", SourceKind::Dlc),
        dir("dlc_win64/w901_scorpiongun/arc", SourceKind::Dlc),
    ],
};

static JC4: GameProfile = GameProfile {
    game: Game::Jc4,
    format: TabFormat::Extended,
    directories: &[
        dir("archives_win64/boot", SourceKind::Base),
        dir("archives_win64/boot/hires", SourceKind::Base),
        dir("archives_win64/boot_patch", SourceKind::Patch),
        dir("archives_win64/cp_deathstalker", SourceKind::Base),
        dir("archives_win64/main", SourceKind::Base),
        dir("archives_win64/main/ara", SourceKind::Base),
        dir("archives_win64/main/bra", SourceKind::Base),
        dir("archives_win64/main/eng", SourceKind::Base),
        dir("archives_win64/main/fre", SourceKind::Base),
        dir("archives_win64/main/ger", SourceKind::Base),
        dir("archives_win64/main/hires", SourceKind::Base),
        dir("archives_win64/main/ita", SourceKind::Base),
        dir("archives_win64/main/mex", SourceKind::Base),
        dir("archives_win64/main/rus", SourceKind::Base),
        dir("archives_win64/main/spa", SourceKind::Base),
        dir("archives_win64/main_patch", SourceKind::Patch),
        dir("archives_win64/main_patch/ara", SourceKind::Patch),
        dir("archives_win64/main_patch/bra", SourceKind::Patch),
        dir("archives_win64/main_patch/eng", SourceKind::Patch),
        dir("archives_win64/main_patch/ger", SourceKind::Patch),
        dir("archives_win64/main_patch/hires", SourceKind::Patch),
        dir("archives_win64/main_patch/ita", SourceKind::Patch),
        dir("archives_win64/main_patch/rus", SourceKind::Patch),
    ],
};

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_game() {
        assert_eq!("jc3".parse::<Game>().unwrap(), Game::Jc3);
        assert_eq!("JC4".parse::<Game>().unwrap(), Game::Jc4);
        assert!("jc2".parse::<Game>().is_err());
    }

    #[test]
    fn test_layouts() {
        assert_eq!(Game::Jc3.profile().format, TabFormat::Legacy);
        assert_eq!(Game::Jc4.profile().format, TabFormat::Extended);
        assert_eq!(Game::Jc3.profile().directories.len(), 17);
        assert_eq!(Game::Jc4.profile().directories.len(), 23);
    }

    #[test]
    fn test_jc4_patch_directories() {
        for d in Game::Jc4.profile().directories {
            let is_patch = d.path.split('/').any(|part| part.ends_with("_patch"));
            assert_eq!(d.kind == SourceKind::Patch, is_patch, "{}", d.path);
        }
    }
}
