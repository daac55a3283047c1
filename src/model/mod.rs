mod envelope;
mod story;

pub use envelope::{Envelope, EnvelopeData};
pub use story::{Story, StoryId};
