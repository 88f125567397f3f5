//! Test cases, the in-memory store that holds them, and the sequential
//! "run all" driver.

pub mod case;
pub mod sequencer;
pub mod store;

pub use case::{Outcome, TestCase, TestResult};
pub use sequencer::{Progress, RunSummary, Sequencer};
pub use store::TestStore;
