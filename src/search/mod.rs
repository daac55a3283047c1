use crate::model::Story;

// Pure projection from (full list, search term) to the displayed list:
// case-insensitive substring match on the title. An empty term is a substring
// of everything, so it matches every record. The input is never mutated and
// the relative order of matches is preserved.
pub fn filter(list: &[Story], term: &str) -> Vec<Story> {
    let needle = term.to_lowercase();
    list.iter()
        .filter(|story| story.title.to_lowercase().contains(needle.as_str()))
        .cloned()
        .collect()
}
