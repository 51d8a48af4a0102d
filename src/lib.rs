pub mod button;
pub mod collision;
pub mod compute;
pub mod entities;
pub mod fleet;
pub mod input;
pub mod scoreboard;
pub mod settings;
