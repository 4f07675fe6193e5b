pub mod benchmark;
pub mod bots;
pub mod game;
pub mod runner;
