use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use settei::app::{self, App};
use settei::config::AppConfig;
use settei::render;

#[derive(Parser, Debug)]
#[command(name = "settei")]
#[command(version = "0.1.0")]
#[command(about = "A terminal demo of binding sectioned settings data to table views")]
struct Args {
    /// Print the screen model as JSON and exit
    #[arg(short, long)]
    dump: bool,

    /// Force plain-ascii icons (no Nerd Font glyphs)
    #[arg(short, long)]
    ascii: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut config = AppConfig::load().unwrap_or_default();
    if args.ascii {
        config.ascii_icons = true;
    }

    // Handle CLI-only commands
    if args.dump {
        return print_model(&config);
    }

    run_tui(config).await
}

fn print_model(config: &AppConfig) -> Result<()> {
    let sections = app::screen_sections(config);
    println!("{}", serde_json::to_string_pretty(&sections)?);
    Ok(())
}

async fn run_tui(config: AppConfig) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state: the section list is emitted and bound here, once
    let mut app = App::new(config).await?;

    // Main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| render::draw(f, app))?;

        if event::poll(std::time::Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                        KeyCode::Char('c')
                            if key.modifiers.contains(event::KeyModifiers::CONTROL) =>
                        {
                            return Ok(())
                        }
                        _ => app.handle_key(key),
                    }
                }
            }
        }
    }
}
