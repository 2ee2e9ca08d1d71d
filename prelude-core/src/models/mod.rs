//! Data-transfer types for the `/detect` API.
//!
//! Nothing here is cached or mutated after construction; every value lives
//! for a single request/response exchange.

mod activity;
mod endpoint;
mod observation;
mod queue;
mod record;

pub use activity::{AccountActivity, ActivityCounts, ActivityPercentages};
pub use endpoint::EndpointRegistration;
pub use observation::Observation;
pub use queue::{EnableTest, RunCode};
pub use record::{Probe, QueueEntry, Stats};
