//! Domain entities - Core business objects with identity

mod character;
mod plot_beat;
mod setting;
mod story;
mod story_outline;
mod theme;

pub use character::{find_antagonist, find_protagonist, Character};
pub use plot_beat::PlotBeat;
pub use setting::Setting;
pub use story::{Chapter, Story};
pub use story_outline::StoryOutline;
pub use theme::Theme;
