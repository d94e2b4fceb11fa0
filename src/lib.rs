pub mod error;
pub mod game;
pub mod output;
pub mod run;
pub mod scenario;

pub use error::{SimError, SimResult};

#[cfg(test)]
mod test;
