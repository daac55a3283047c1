use std::time::Duration;

use async_trait::async_trait;
use log::debug;

use crate::model::{Envelope, Story};
use crate::Result;

// Seam over the asynchronous story collaborator. The controller only consumes
// the success path; there is no retry or timeout on top of it.
#[async_trait]
pub trait StorySource {
    async fn fetch(&self) -> Result<Envelope>;
}

// Simulated data source: resolves with a fixed story list after a fixed
// delay, and never fails.
pub struct MockSource {
    delay: Duration,
    stories: Vec<Story>,
}

impl MockSource {
    pub fn new(delay: Duration) -> Self {
        Self::with_stories(delay, seed_stories())
    }

    pub fn with_stories(delay: Duration, stories: Vec<Story>) -> Self {
        Self { delay, stories }
    }
}

#[async_trait]
impl StorySource for MockSource {
    async fn fetch(&self) -> Result<Envelope> {
        debug!("Resolving mock fetch after {:?}", self.delay);
        tokio::time::sleep(self.delay).await;
        Ok(Envelope::new(self.stories.clone()))
    }
}

// The records the simulated source resolves with.
pub fn seed_stories() -> Vec<Story> {
    vec![
        Story {
            title: "React".to_string(),
            url: "https://reactjs.org/".to_string(),
            author: "Jordan Walke".to_string(),
            num_comments: 3,
            points: 4,
            object_id: 0,
        },
        Story {
            title: "Redux".to_string(),
            url: "https://redux.js.org/".to_string(),
            author: "Dan Abramov, Andrew Clark".to_string(),
            num_comments: 2,
            points: 5,
            object_id: 1,
        },
    ]
}
