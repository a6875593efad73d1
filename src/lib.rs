pub mod cards;
pub mod cli;
pub mod display;
pub mod error;
pub mod hand;
pub mod journal;
pub mod logging;
pub mod math_engine;
pub mod play;
pub mod preflop;
pub mod ranges;
