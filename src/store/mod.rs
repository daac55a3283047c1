use crate::model::Story;

// The actions the story store understands. The set is closed: matching is
// exhaustive, so an unrecognized action cannot be constructed, let alone
// dispatched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoryAction {
    // Replace the current list wholesale with the payload.
    SetStories(Vec<Story>),
    // Exclude every record whose `object_id` matches the payload's.
    RemoveStory(Story),
}

// Pure state transition for the story list. Deterministic: the same
// `(current, action)` pair always yields the same result, and `current` is
// never mutated in place.
pub fn reduce(current: &[Story], action: &StoryAction) -> Vec<Story> {
    match action {
        StoryAction::SetStories(stories) => stories.clone(),
        StoryAction::RemoveStory(story) => current
            .iter()
            .filter(|s| s.object_id != story.object_id)
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StoryId;

    #[test]
    fn set_replaces_unconditionally() {
        let incoming = vec![story("React", 0), story("Redux", 1)];

        // Regardless of the prior contents, the result is the payload.
        let from_empty = reduce(&[], &StoryAction::SetStories(incoming.clone()));
        assert_eq!(from_empty, incoming);

        let prior = vec![story("Vue", 7), story("Svelte", 8), story("Ember", 9)];
        let from_populated = reduce(&prior, &StoryAction::SetStories(incoming.clone()));
        assert_eq!(from_populated, incoming);
    }

    #[test]
    fn set_empty_clears() {
        let prior = vec![story("React", 0)];
        let result = reduce(&prior, &StoryAction::SetStories(Vec::new()));
        assert!(result.is_empty());
    }

    #[test]
    fn remove_excludes_matching_id_only() {
        let list = vec![story("React", 0), story("Redux", 1), story("Vue", 2)];

        let result = reduce(&list, &StoryAction::RemoveStory(story("Redux", 1)));

        assert_eq!(result, vec![story("React", 0), story("Vue", 2)]);
    }

    #[test]
    fn remove_matches_on_id_not_contents() {
        let list = vec![story("React", 0), story("Redux", 1)];

        // The payload's other fields are irrelevant; identity is object_id.
        let impostor = Story {
            title: "Something else".to_string(),
            ..story("React", 0)
        };
        let result = reduce(&list, &StoryAction::RemoveStory(impostor));

        assert_eq!(result, vec![story("Redux", 1)]);
    }

    #[test]
    fn remove_excludes_every_matching_record() {
        // A list violating the uniqueness invariant still reduces sanely:
        // every record carrying the id goes.
        let list = vec![story("React", 0), story("Redux", 1), story("React 2", 0)];

        let result = reduce(&list, &StoryAction::RemoveStory(story("React", 0)));

        assert_eq!(result, vec![story("Redux", 1)]);
    }

    #[test]
    fn remove_absent_id_is_noop() {
        let list = vec![story("React", 0), story("Redux", 1)];

        let result = reduce(&list, &StoryAction::RemoveStory(story("Vue", 99)));

        assert_eq!(result, list);
    }

    #[test]
    fn remove_preserves_relative_order() {
        let list: Vec<Story> = (0..10).map(|id| story("Story", id)).collect();

        let result = reduce(&list, &StoryAction::RemoveStory(story("Story", 4)));

        let expected: Vec<StoryId> = vec![0, 1, 2, 3, 5, 6, 7, 8, 9];
        let ids: Vec<StoryId> = result.iter().map(|s| s.object_id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn reduce_is_deterministic() {
        let list = vec![story("React", 0), story("Redux", 1)];
        let action = StoryAction::RemoveStory(story("React", 0));

        assert_eq!(reduce(&list, &action), reduce(&list, &action));
    }

    fn story(title: &str, object_id: StoryId) -> Story {
        Story {
            title: title.to_string(),
            url: format!("https://example.org/{object_id}"),
            author: "Author".to_string(),
            num_comments: 3,
            points: 4,
            object_id,
        }
    }
}
