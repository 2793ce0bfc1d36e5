pub mod commands;
pub mod config;
pub mod error;
pub mod formatting;
pub mod layout;
pub mod layout_constants;
pub mod normalize;
pub mod scale;
pub mod serve;
pub mod state_file;
pub mod tui;
pub mod types;

pub use error::{ConfigError, LayoutError, StateFileError};
pub use layout::{PlayerRowLayout, PxRect, Scoreboard, ScoreboardLayout};
pub use normalize::{normalize, NormalizedScoreRow};
pub use scale::{compute_scale, DesignSize, ScaleResult, ViewportSize};
pub use serve::{render_indicator, IndicatorState};
pub use types::{AssetRef, LogoAssets, MatchDisplayState, PlayerSlot, ServingPlayer};
