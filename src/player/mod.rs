mod plan_player;
mod protocol;
mod session;

pub use plan_player::{PlanPlayer, TurnOutcome};
pub use protocol::{Command, Event, ExternalPosition, Runner, RunnerState};
pub use session::Session;
