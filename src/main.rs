mod app;
mod event;
mod ui;

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use tunequest::config::Config;
use tunequest::engine::ScreenId;
use tunequest::session::lesson::GuitarString;

use app::{Action, App};
use event::{AppEvent, EventHandler};
use ui::components::action_list::{ActionList, ActionRow};
use ui::components::progress_bar::ProgressBar;
use ui::layout::{AppLayout, centered_rect, pack_hint_lines};
use ui::theme::Theme;

#[derive(Parser)]
#[command(
    name = "tunequest",
    version,
    about = "Terminal showcase of an instrument-learning app"
)]
struct Cli {
    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(long, help = "Probability (0-1) that a gated screen shows an ad first")]
    ad_chance: Option<f64>,

    #[arg(long, help = "Start with premium already active")]
    premium: bool,

    #[arg(long, help = "Seed for the ad gate, for reproducible sessions")]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_path = init_logging()?;
    eprintln!("tunequest log: {}", log_path.display());

    let mut config = Config::load().unwrap_or_else(|err| {
        tracing::warn!(%err, "config unreadable, using defaults");
        Config::default()
    });
    if let Some(chance) = cli.ad_chance {
        config.ad_chance = chance;
    }
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }
    config.normalize();

    let theme = Theme::load(&config.theme).unwrap_or_default();
    let theme: &'static Theme = Box::leak(Box::new(theme));

    let mut app = App::new(&config, theme, cli.seed);
    if cli.premium {
        app.nav.set_premium(true);
    }
    tracing::info!(ad_chance = config.ad_chance, premium = cli.premium, "session started");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(Duration::from_millis(100));

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        tracing::error!("session ended with error: {err:?}");
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

/// The terminal belongs to the UI, so logs go to a file.
fn init_logging() -> Result<PathBuf> {
    let dir = dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tunequest");
    std::fs::create_dir_all(&dir)?;
    let log_path = dir.join("tunequest.log");

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_env_filter(log_filter.as_str())
        .with_ansi(false)
        .init();

    Ok(log_path)
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => handle_key(app, key),
            AppEvent::Tick(now) => app.tick(now),
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    if app.nav.current_screen().is_lesson() {
        match key.code {
            KeyCode::Char(ch @ '1'..='6') => {
                let index = ch as usize - '0' as usize;
                if let Some(target) = GuitarString::from_index(index) {
                    app.perform(Action::Hit(target));
                }
                return;
            }
            KeyCode::Char('r') => {
                app.perform(Action::ResetLesson);
                return;
            }
            _ => {}
        }
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Enter | KeyCode::Char(' ') => app.activate(),
        KeyCode::Esc | KeyCode::Backspace => app.perform(Action::Back),
        _ => {}
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;
    let shell = app.shell();

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    let layout = AppLayout::new(area, shell.active.is_lesson());

    // Header: title, coins, premium badge
    let mut header_spans = vec![
        Span::styled(
            format!(" {} ", shell.title),
            Style::default()
                .fg(colors.header_fg())
                .bg(colors.header_bg())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} coins ", shell.coins),
            Style::default().fg(colors.coins()).bg(colors.header_bg()),
        ),
    ];
    if app.nav.is_premium() {
        header_spans.push(Span::styled(
            " PREMIUM ",
            Style::default()
                .fg(colors.premium())
                .bg(colors.header_bg())
                .add_modifier(Modifier::BOLD),
        ));
    }
    let header = Paragraph::new(Line::from(header_spans))
        .block(Block::bordered().border_style(Style::default().fg(colors.border())))
        .style(Style::default().bg(colors.header_bg()));
    frame.render_widget(header, layout.header);

    let heading = screen_heading(shell.active);
    let list = ActionList {
        heading,
        rows: app
            .actions()
            .into_iter()
            .map(|item| ActionRow {
                label: item.label,
                description: item.description.to_string(),
                marked: item.marked,
            })
            .collect(),
        selected: app.selected,
        theme: app.theme,
    };
    frame.render_widget(&list, centered_rect(60, layout.main));

    if let Some(progress_area) = layout.progress {
        let bar = ProgressBar::new("Lesson progress", shell.progress, app.theme);
        frame.render_widget(bar, progress_area);
    }

    // Footer: the toast replaces the key hints while it is visible
    let footer_lines: Vec<Line> = match shell.toast.visible() {
        Some(message) => vec![Line::from(Span::styled(
            format!(" {message} "),
            Style::default()
                .fg(colors.success())
                .bg(colors.toast_bg())
                .add_modifier(Modifier::BOLD),
        ))],
        None => {
            let hints: &[&str] = if shell.active.is_lesson() {
                &["[1-6] Strum", "[r] Reset", "[Esc] Back", "[q] Quit"]
            } else {
                &["[↑/↓] Move", "[Enter] Select", "[Esc] Back", "[q] Quit"]
            };
            pack_hint_lines(hints, layout.footer.width.saturating_sub(2) as usize)
                .into_iter()
                .map(|line| Line::from(Span::styled(line, Style::default().fg(colors.muted()))))
                .collect()
        }
    };
    let footer = Paragraph::new(footer_lines)
        .block(Block::bordered().border_style(Style::default().fg(colors.border())));
    frame.render_widget(footer, layout.footer);
}

fn screen_heading(screen: ScreenId) -> &'static str {
    match screen {
        ScreenId::Instrument => "What do you want to learn?",
        ScreenId::Login => "Welcome back",
        ScreenId::Home => "Keep your streak going",
        ScreenId::SkillTree => "Pick a lesson",
        ScreenId::LessonGuitar(_) => "Strum every string once",
        ScreenId::DailyQuests => "Today's quests",
        ScreenId::Leaderboard => "This week's league",
        ScreenId::Premium => "Learn without ads",
        ScreenId::PaymentForPremium => "Confirm purchase",
        ScreenId::AdInterstitial => "A word from our sponsors",
    }
}
