use log::{debug, error, info};

use crate::model::Story;
use crate::search;
use crate::state::StateStore;
use crate::store::{reduce, StoryAction};
use crate::Result;

// Events flowing into the controller. Every state transition in the system
// happens inside `handle_event`, one event at a time.
#[derive(Clone, Debug)]
pub enum AppEvent {
    // The single startup fetch resolved with a story list.
    StoriesLoaded(Vec<Story>),
    // The user edited the search input; carries the full new term.
    SearchTermChanged(String),
    // The user dismissed one record.
    RemoveStory(Story),
}

// Flags describing the outstanding fetch, tracked alongside the story list
// rather than inside the reducer. `is_error` has no reachable transition to
// `true`: the mock source never fails, and there is deliberately no recovery
// path to pair it with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadState {
    pub is_loading: bool,
    pub is_error: bool,
}

// Single owner of all mutable state: the story list, the load flags and the
// search term. Nothing else in the crate holds state, so no locking is
// needed anywhere.
pub struct App {
    stories: Vec<Story>,
    load_state: LoadState,
    search_term: String,
    search_key: String,
    state_store: StateStore,
}

impl App {
    // Restores the persisted search term (or falls back to `default_term`)
    // and marks the initial fetch as outstanding.
    pub fn new(state_store: StateStore, search_key: String, default_term: &str) -> Result<Self> {
        let search_term = state_store.get_search_term(search_key.as_str(), default_term)?;
        debug!("Restored search term: {:?}", search_term);

        Ok(Self {
            stories: Vec::new(),
            load_state: LoadState {
                is_loading: true,
                is_error: false,
            },
            search_term,
            search_key,
            state_store,
        })
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::StoriesLoaded(stories) => {
                info!("Loaded {} stories", stories.len());

                // The list update happens before the loading flag clears.
                self.stories = reduce(&self.stories, &StoryAction::SetStories(stories));
                self.load_state.is_loading = false;
            }
            AppEvent::SearchTermChanged(term) => {
                debug!("Search term changed: {:?}", term);

                if let Err(e) = self
                    .state_store
                    .store_search_term(self.search_key.as_str(), term.as_str())
                {
                    error!("Error persisting search term: {}", e);
                }
                self.search_term = term;
            }
            AppEvent::RemoveStory(story) => {
                debug!("Dismissing story {} ({:?})", story.object_id, story.title);

                self.stories = reduce(&self.stories, &StoryAction::RemoveStory(story));
            }
        }
    }

    // The displayed list: the filter applied to the full list on demand.
    pub fn visible(&self) -> Vec<Story> {
        search::filter(&self.stories, self.search_term.as_str())
    }

    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }
}
