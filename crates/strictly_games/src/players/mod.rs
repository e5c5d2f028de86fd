//! Console-backed players.

mod human;

pub use human::ConsoleHuman;
