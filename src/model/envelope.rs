use serde::{Deserialize, Serialize};

use super::Story;

// The shape the data source resolves with: `{ data: { stories: [...] } }`.
// The core only ever consumes the unwrapped story list from the success path.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Envelope {
    pub data: EnvelopeData,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct EnvelopeData {
    pub stories: Vec<Story>,
}

impl Envelope {
    pub fn new(stories: Vec<Story>) -> Self {
        Self {
            data: EnvelopeData { stories },
        }
    }
}
