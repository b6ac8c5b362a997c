//! Headless driver for the incremental game simulation.
//!
//! The binary boots a [`runtime::Runtime`] over bundled or on-disk content,
//! performs a script of player actions and reports what happened. Encounters
//! started by an action are left to the runtime's timer; the script resumes
//! once the encounter (and anything it chained into) has resolved.

pub mod cli;
pub mod session;

pub use cli::Cli;
pub use session::{Script, StepReport, run_script};
