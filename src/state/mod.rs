pub mod pull;

pub use pull::{PullCommand, PullConfig, PullEvent, PullMachine, PullPhase};
