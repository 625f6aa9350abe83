mod app;
mod config;
mod error;
mod event;
mod github;
mod search;
#[cfg(test)]
mod test_utils;
mod ui;

use app::{App, SearchRequest};
use clap::Parser;
use config::Config;
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use event::AppEvent;
use futures::StreamExt;
use github::client::SearchClient;
use tokio::sync::mpsc;

#[derive(Parser)]
#[command(name = "repoglass", about = "TUI GitHub repository search")]
struct Cli {
    #[arg(help = "Run this search on startup")]
    query: Option<String>,
}

// All state lives on one logical thread; the network call is the only
// suspension point, so a current_thread runtime is enough.
#[tokio::main(flavor = "current_thread")]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = Config::load();

    let client = SearchClient::new(&config.api_base, &config.user_agent)?;
    let mut app = App::new(config);

    // Install panic hook before entering raw mode so terminal is restored on panic
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let (tx, mut rx) = mpsc::unbounded_channel::<AppEvent>();

    if let Some(query) = cli.query {
        app.query = query;
        if let Some(request) = app.submit() {
            spawn_search(&client, &tx, request);
        }
    }

    let input_tx = tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            let app_event = match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
                Event::Resize(_, _) => Some(AppEvent::Resize),
                _ => None,
            };
            if let Some(e) = app_event {
                if input_tx.send(e).is_err() {
                    break;
                }
            }
        }
    });

    loop {
        terminal.draw(|f| app.render(f))?;

        let first = match rx.recv().await {
            Some(e) => e,
            None => break,
        };

        process_event(&mut app, first, &client, &tx);
        while let Ok(pending) = rx.try_recv() {
            process_event(&mut app, pending, &client, &tx);
        }

        if app.should_quit {
            break;
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

fn process_event(
    app: &mut App,
    event: AppEvent,
    client: &SearchClient,
    tx: &mpsc::UnboundedSender<AppEvent>,
) {
    if let Some(request) = app.handle_event(event) {
        spawn_search(client, tx, request);
    }
}

fn spawn_search(
    client: &SearchClient,
    tx: &mpsc::UnboundedSender<AppEvent>,
    request: SearchRequest,
) {
    let client = client.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let SearchRequest { generation, query } = request;
        let result = client.search(&query).await;
        let _ = tx.send(AppEvent::SearchCompleted { generation, result });
    });
}
