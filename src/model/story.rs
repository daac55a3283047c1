use serde::{Deserialize, Serialize};

// The unique identifier of a story record.
pub type StoryId = u64;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Story {
    // The display title of the story. The search filter matches against this
    // field only.
    pub title: String,
    pub url: String,
    pub author: String,
    pub num_comments: usize,
    pub points: usize,
    // The identity of the record; unique within a list. Records are never
    // mutated after construction.
    #[serde(rename = "objectID")]
    pub object_id: StoryId,
}
