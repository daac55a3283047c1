use hacker_stories::controller::{App, AppEvent};
use hacker_stories::model::{Story, StoryId};
use hacker_stories::source::{MockSource, StorySource};
use hacker_stories::state::StateStore;
use hacker_stories::{Config, Result};
use log::{error, info, warn};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

// Inputs to the main loop: the fetch resolution plus raw lines from the
// interaction surface. Lines are translated into controller events where the
// current list is in scope.
enum Input {
    Fetched(Vec<Story>),
    Line(String),
}

#[tokio::main(flavor = "current_thread")]
pub async fn main() -> Result<()> {
    pretty_env_logger::formatted_builder()
        .filter_module("hacker_stories", log::LevelFilter::Info)
        .init();

    let config = Config::load("config.toml").await?;
    info!("Loaded config");

    let db = Arc::new(sled::open(config.state_db_path.as_str())?);
    let state_store = StateStore::new(Arc::clone(&db));

    let mut app = App::new(
        state_store,
        config.search.key.clone(),
        config.search.default_term.as_str(),
    )?;

    let (tx, mut rx) = mpsc::unbounded_channel();

    // Issue the single fetch of the process lifetime; its resolution enters
    // the loop like any other event.
    let delay = config.source.delay()?;
    let fetch_tx = tx.clone();
    tokio::spawn(async move {
        let source = MockSource::new(delay);
        match source.fetch().await {
            Ok(envelope) => {
                if fetch_tx.send(Input::Fetched(envelope.data.stories)).is_err() {
                    warn!("Event channel closed before the fetch resolved");
                }
            }
            Err(e) => error!("Fetch failed: {}", e),
        }
    });

    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    if tx.send(Input::Line(line)).is_err() {
                        break;
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    error!("Error reading stdin: {}", e);
                    break;
                }
            }
        }
    });

    println!("My Hacker Stories");
    println!("Commands: <term> to search, `dismiss <id>` to remove, `quit` to exit.");
    render(&app);

    loop {
        match rx.recv().await {
            Some(Input::Fetched(stories)) => {
                app.handle_event(AppEvent::StoriesLoaded(stories));
            }
            Some(Input::Line(line)) => {
                let line = line.trim();
                if line == "quit" {
                    break;
                }

                if let Some(arg) = line.strip_prefix("dismiss ") {
                    dismiss(&mut app, arg.trim());
                } else {
                    app.handle_event(AppEvent::SearchTermChanged(line.to_string()));
                }
            }
            None => {
                warn!("Event channel closed, leaving loop.");
                break;
            }
        }

        render(&app);
    }

    db.flush_async().await?;

    Ok(())
}

fn dismiss(app: &mut App, arg: &str) {
    let id = match arg.parse::<StoryId>() {
        Ok(id) => id,
        Err(_) => {
            warn!("Not a story id: {:?}", arg);
            return;
        }
    };

    let story = app.stories().iter().find(|s| s.object_id == id).cloned();
    match story {
        Some(story) => app.handle_event(AppEvent::RemoveStory(story)),
        None => warn!("No story with id {}", id),
    }
}

fn render(app: &App) {
    if app.load_state().is_loading {
        println!("Loading...");
        return;
    }

    if app.load_state().is_error {
        println!("Something went wrong.");
        return;
    }

    println!("Search: {:?}", app.search_term());
    for story in app.visible() {
        println!(
            "  [{}] {} ({}) by {} - {} comments, {} points",
            story.object_id,
            story.title,
            story.url,
            story.author,
            story.num_comments,
            story.points
        );
    }
}
