#![no_std]
pub mod builder;
pub mod context;
pub mod frame;
pub mod game;
pub mod link;
pub mod map;
pub mod melody;
pub mod player;
pub mod signal;
pub mod sprite;
pub mod tick;

#[cfg(feature = "embedded-graphics")]
pub use embedded_graphics;

pub use builder::Builder;
pub use context::{GameContext, LinkContext};
pub use game::{Game, GameConfig, Outcome};
pub use link::{Link, LinkConfig};
pub use melody::{Mood, Note};
pub use player::InputSample;
pub use signal::{LineSet, RelayLine, StatusLine};
