//! Combinators for jointly handling two independent optional values.
//!
//! An [OptionPair] holds a left and a right [Option] and replaces the
//! four-way `match` over their presence with filters, reductions, mappings,
//! gated side effects and [Task]-producing combinations.

mod combine;
mod reduce;

// public: commandline parser
pub mod cli;
// public: error types
pub mod error;
// public: the pair type
pub mod pair;
// public: presence states and gates
pub mod presence;
// public: completed-or-scheduled work
pub mod task;

pub use error::{PairError, TaskError};
pub use pair::{Empty, OptionPair, Slots};
pub use presence::{Gate, Presence, Side};
pub use task::{Schedule, Task};
