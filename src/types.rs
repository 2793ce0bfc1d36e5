/// Match display state and related types
///
/// These are plain values supplied by the host on every render request.
/// Nothing here validates tennis scoring; a new `MatchDisplayState`
/// simply replaces the previous one.
use serde::Deserialize;
use std::fmt;

/// Which player (if any) is currently serving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServingPlayer {
    #[serde(alias = "PLAYER1", alias = "Player1")]
    Player1,
    #[serde(alias = "PLAYER2", alias = "Player2")]
    Player2,
    /// Nobody is serving (e.g. between games). Unknown tags land here too.
    #[default]
    #[serde(other)]
    None,
}

impl ServingPlayer {
    /// Next server in the operator cycle: Player1 -> Player2 -> None -> Player1
    pub fn cycle(self) -> Self {
        match self {
            ServingPlayer::Player1 => ServingPlayer::Player2,
            ServingPlayer::Player2 => ServingPlayer::None,
            ServingPlayer::None => ServingPlayer::Player1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ServingPlayer::Player1 => "player1",
            ServingPlayer::Player2 => "player2",
            ServingPlayer::None => "none",
        }
    }
}

/// One of the two score rows on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerSlot {
    Player1,
    Player2,
}

impl PlayerSlot {
    pub const ALL: [PlayerSlot; 2] = [PlayerSlot::Player1, PlayerSlot::Player2];

    pub fn index(self) -> usize {
        match self {
            PlayerSlot::Player1 => 0,
            PlayerSlot::Player2 => 1,
        }
    }
}

/// Opaque logo identifier or URI, passed through to the renderer untouched
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(transparent)]
pub struct AssetRef(pub String);

impl AssetRef {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sponsor, federation and tournament logos shown on the board
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogoAssets {
    pub sponsor: AssetRef,
    pub federation: AssetRef,
    pub tournament: AssetRef,
}

impl Default for LogoAssets {
    fn default() -> Self {
        Self {
            sponsor: AssetRef::new("sponsor_logo.png"),
            federation: AssetRef::new("federation_logo.png"),
            tournament: AssetRef::new("tournament_logo.png"),
        }
    }
}

/// Everything the board displays for one moment of a match
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MatchDisplayState {
    pub player1: String,
    pub player2: String,
    #[serde(default)]
    pub set_scores1: Vec<i32>,
    #[serde(default)]
    pub set_scores2: Vec<i32>,
    #[serde(default)]
    pub current_points1: i32,
    #[serde(default)]
    pub current_points2: i32,
    #[serde(default, alias = "serving_player")]
    pub serving: ServingPlayer,
    #[serde(default)]
    pub tournament_name: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub logos: LogoAssets,
}

impl MatchDisplayState {
    /// A fresh match between two players: no sets, no points, nobody serving
    pub fn new(player1: impl Into<String>, player2: impl Into<String>) -> Self {
        Self {
            player1: player1.into(),
            player2: player2.into(),
            set_scores1: Vec::new(),
            set_scores2: Vec::new(),
            current_points1: 0,
            current_points2: 0,
            serving: ServingPlayer::None,
            tournament_name: String::new(),
            year: None,
            logos: LogoAssets::default(),
        }
    }

    pub fn with_sets(mut self, set_scores1: Vec<i32>, set_scores2: Vec<i32>) -> Self {
        self.set_scores1 = set_scores1;
        self.set_scores2 = set_scores2;
        self
    }

    pub fn with_points(mut self, current_points1: i32, current_points2: i32) -> Self {
        self.current_points1 = current_points1;
        self.current_points2 = current_points2;
        self
    }

    pub fn with_serving(mut self, serving: ServingPlayer) -> Self {
        self.serving = serving;
        self
    }

    pub fn with_tournament(mut self, name: impl Into<String>, year: Option<i32>) -> Self {
        self.tournament_name = name.into();
        self.year = year;
        self
    }

    pub fn name(&self, slot: PlayerSlot) -> &str {
        match slot {
            PlayerSlot::Player1 => &self.player1,
            PlayerSlot::Player2 => &self.player2,
        }
    }

    pub fn set_scores(&self, slot: PlayerSlot) -> &[i32] {
        match slot {
            PlayerSlot::Player1 => &self.set_scores1,
            PlayerSlot::Player2 => &self.set_scores2,
        }
    }

    pub fn current_points(&self, slot: PlayerSlot) -> i32 {
        match slot {
            PlayerSlot::Player1 => self.current_points1,
            PlayerSlot::Player2 => self.current_points2,
        }
    }

    pub fn set_scores_mut(&mut self, slot: PlayerSlot) -> &mut Vec<i32> {
        match slot {
            PlayerSlot::Player1 => &mut self.set_scores1,
            PlayerSlot::Player2 => &mut self.set_scores2,
        }
    }

    pub fn current_points_mut(&mut self, slot: PlayerSlot) -> &mut i32 {
        match slot {
            PlayerSlot::Player1 => &mut self.current_points1,
            PlayerSlot::Player2 => &mut self.current_points2,
        }
    }

    /// Tournament caption, e.g. "Billie Jean King Cup 2024"
    pub fn tournament_label(&self) -> String {
        match self.year {
            Some(year) if self.tournament_name.is_empty() => year.to_string(),
            Some(year) => format!("{} {}", self.tournament_name, year),
            None => self.tournament_name.clone(),
        }
    }
}

impl Default for MatchDisplayState {
    /// Demo match shown when the host has no state file
    fn default() -> Self {
        MatchDisplayState::new("E. MORGAN", "R. BIRIA")
            .with_sets(vec![0, 0, 0], vec![0, 0, 0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serving_cycle() {
        assert_eq!(ServingPlayer::Player1.cycle(), ServingPlayer::Player2);
        assert_eq!(ServingPlayer::Player2.cycle(), ServingPlayer::None);
        assert_eq!(ServingPlayer::None.cycle(), ServingPlayer::Player1);
    }

    #[test]
    fn test_accessors_by_slot() {
        let state = MatchDisplayState::new("A", "B")
            .with_sets(vec![6], vec![4, 2])
            .with_points(30, 15);
        assert_eq!(state.name(PlayerSlot::Player1), "A");
        assert_eq!(state.name(PlayerSlot::Player2), "B");
        assert_eq!(state.set_scores(PlayerSlot::Player2), &[4, 2]);
        assert_eq!(state.current_points(PlayerSlot::Player1), 30);
        assert_eq!(PlayerSlot::Player2.index(), 1);
    }

    #[test]
    fn test_tournament_label() {
        let state = MatchDisplayState::new("A", "B");
        assert_eq!(state.tournament_label(), "");
        assert_eq!(
            state.clone().with_tournament("BJK Cup", Some(2024)).tournament_label(),
            "BJK Cup 2024"
        );
        assert_eq!(state.clone().with_tournament("", Some(2024)).tournament_label(), "2024");
        assert_eq!(state.with_tournament("BJK Cup", None).tournament_label(), "BJK Cup");
    }

    #[test]
    fn test_default_is_demo_match() {
        let state = MatchDisplayState::default();
        assert_eq!(state.player1, "E. MORGAN");
        assert_eq!(state.player2, "R. BIRIA");
        assert_eq!(state.serving, ServingPlayer::None);
    }

    #[test]
    fn test_unknown_serving_tag_is_none() {
        let state: MatchDisplayState = toml::from_str(
            r#"
player1 = "A"
player2 = "B"
serving = "umpire"
            "#,
        )
        .unwrap();
        assert_eq!(state.serving, ServingPlayer::None);
    }

    #[test]
    fn test_uppercase_serving_tags() {
        let serving = |tag: &str| -> ServingPlayer {
            let doc = format!("player1 = \"A\"\nplayer2 = \"B\"\nserving = \"{}\"\n", tag);
            toml::from_str::<MatchDisplayState>(&doc).unwrap().serving
        };
        assert_eq!(serving("PLAYER1"), ServingPlayer::Player1);
        assert_eq!(serving("PLAYER2"), ServingPlayer::Player2);
        assert_eq!(serving("Player2"), ServingPlayer::Player2);
        assert_eq!(serving("player1"), ServingPlayer::Player1);
        assert_eq!(serving("NONE"), ServingPlayer::None);
    }

    #[test]
    fn test_deserialize_minimal_state() {
        let state: MatchDisplayState = toml::from_str("player1 = \"A\"\nplayer2 = \"B\"\n").unwrap();
        assert!(state.set_scores1.is_empty());
        assert_eq!(state.current_points2, 0);
        assert_eq!(state.logos, LogoAssets::default());
    }
}
