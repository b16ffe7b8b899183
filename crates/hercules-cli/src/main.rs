use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use hercules_config::Config;
use hercules_engine::views::{RecordingSink, ViewCommand, ViewId};
use hercules_engine::{
    IoError, PageDocument, PageList, PageStyle, Reconciliation, SearchProvider, Session, ViewSink,
    highlight_list, io,
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::{env, io::stdout, path::PathBuf, process};

/// Used when `RUST_LOG` is unset; skipped navigations log at `warn`.
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;

struct App {
    document_path: PathBuf,
    session: Session<RecordingSink>,
    selected: usize,
    status: String,
}

impl App {
    fn new(document_path: PathBuf, provider: SearchProvider) -> Result<Self> {
        let (document, status) = match io::read_document(&document_path) {
            Ok(document) => (document, format!("Opened {}", document_path.display())),
            Err(IoError::NotFound(_)) => (
                PageDocument::default(),
                format!("New document {}", document_path.display()),
            ),
            Err(e) => return Err(e.into()),
        };

        let mut session =
            Session::with_document(document, RecordingSink::new()).with_search_provider(provider);
        session.reconcile();

        Ok(Self {
            document_path,
            session,
            selected: 0,
            status,
        })
    }

    fn pages(&self) -> &PageList {
        self.session.document().pages()
    }

    fn next_page(&mut self) {
        let len = self.pages().len();
        self.selected = (self.selected + 1) % len.max(1);
    }

    fn previous_page(&mut self) {
        let len = self.pages().len();
        self.selected = if self.selected == 0 {
            len.saturating_sub(1)
        } else {
            self.selected - 1
        };
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.pages().len().saturating_sub(1));
    }

    fn commit_searches(&mut self) {
        let result = self.session.commit_searches();
        self.status = format!("Committed searches: {}", summarize(&result));
        self.clamp_selection();
    }

    fn add_page(&mut self) {
        let result = self.session.add_page();
        self.status = format!("Added page: {}", summarize(&result));
        self.selected = self.session.views().len().saturating_sub(1);
    }

    /// Re-reads the document from disk, discarding unsaved edits.
    fn reload(&mut self) -> Result<()> {
        let text = io::read_text(&self.document_path)?;
        let result = self.session.load_text(&text);
        self.status = format!(
            "Reloaded {}: {}",
            self.document_path.display(),
            summarize(&result)
        );
        self.clamp_selection();
        Ok(())
    }

    fn save(&mut self) -> Result<()> {
        io::write_document(&self.document_path, self.session.document_mut())?;
        self.status = format!("Saved {}", self.document_path.display());
        Ok(())
    }

    /// Describes the view showing the selected page.
    fn view_details(&self) -> Vec<Line<'static>> {
        let Some(page) = self.pages().get(self.selected) else {
            return vec![];
        };
        let mut lines = vec![
            Line::from(format!("Page {}: {}", self.selected + 1, page.kind_name())),
            Line::from(page.canonical_text().to_string()),
            Line::from(""),
        ];

        let views = self.session.views();
        let Some(handle) = views.handle(self.selected) else {
            lines.push(Line::from("No view (trailing blank page)"));
            return lines;
        };
        let command = match views.last_command(self.selected) {
            Some(ViewCommand::Navigate(address)) => format!("navigate to {address}"),
            Some(ViewCommand::RenderDocument(html)) if html.is_empty() => "cleared".to_string(),
            Some(ViewCommand::RenderDocument(html)) => {
                format!("inline document ({} bytes)", html.len())
            }
            None => "nothing (address not navigable)".to_string(),
        };
        lines.push(Line::from(format!("View {}: {command}", view_label(handle))));
        if let Some(address) = self.session.sink().current_address(handle) {
            lines.push(Line::from(format!("Showing {address}")));
        }
        lines
    }
}

fn view_label(id: &ViewId) -> String {
    format!("#{}", id.0)
}

fn summarize(result: &Reconciliation) -> String {
    format!(
        "{} added, {} changed, {} unchanged, {} removed",
        result.added.len(),
        result.changed.len(),
        result.unchanged.len(),
        result.removed.len()
    )
}

fn style_for(style: PageStyle) -> Style {
    match style {
        PageStyle::Plain => Style::default(),
        PageStyle::Blue => Style::default().fg(Color::Blue),
        PageStyle::Magenta => Style::default().fg(Color::Magenta),
        PageStyle::Green => Style::default().fg(Color::Green),
    }
}

/// Splits highlighted spans into one ratatui line per page.
fn styled_lines(list: &PageList, selected: usize) -> Vec<Line<'static>> {
    let mut lines = vec![Line::default()];
    for span in highlight_list(list) {
        if span.text == "\n" {
            lines.push(Line::default());
        } else if let Some(line) = lines.last_mut() {
            line.push_span(Span::styled(span.text, style_for(span.style)));
        }
    }
    if let Some(line) = lines.get_mut(selected) {
        *line = std::mem::take(line).patch_style(Style::default().add_modifier(Modifier::REVERSED));
    }
    lines
}

fn print_reconciliation(app: &App) {
    for (index, entry) in app.pages().entries().iter().enumerate() {
        println!("{index:>3} {:<16} {}", entry.page.kind_name(), entry.source);
    }
    for command in app.session.sink().commands() {
        println!("{command:?}");
    }
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(DEFAULT_LOG_LEVEL)
        .parse_default_env()
        .init();

    let mut args: Vec<String> = env::args().collect();
    let print_only = if let Some(pos) = args.iter().position(|a| a == "--print") {
        args.remove(pos);
        true
    } else {
        false
    };
    let config_path = Config::config_path();

    let config = match Config::load() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let document_path = if args.len() == 2 {
        PathBuf::from(&args[1])
    } else if args.len() == 1 {
        match config.document_path.clone() {
            Some(path) => path,
            None => {
                eprintln!("Error: No document path provided and none set in config");
                eprintln!("Usage: {} [--print] <document-path>", args[0]);
                eprintln!("Or set document_path in {}", config_path.display());
                process::exit(1);
            }
        }
    } else {
        eprintln!("Usage: {} [--print] [document-path]", args[0]);
        process::exit(1);
    };

    let provider = match SearchProvider::from_base(&config.search_provider) {
        Ok(provider) => provider,
        Err(e) => {
            eprintln!(
                "Error: search_provider '{}' in {} is not a valid address: {e}",
                config.search_provider,
                config_path.display()
            );
            process::exit(1);
        }
    };

    let mut app = App::new(document_path, provider)?;

    if print_only {
        print_reconciliation(&app);
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_page(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_page(),
                KeyCode::Char('c') => app.commit_searches(),
                KeyCode::Char('a') => app.add_page(),
                KeyCode::Char('s') => {
                    if let Err(e) = app.save() {
                        app.status = format!("Save failed: {e}");
                    }
                }
                KeyCode::Char('r') => {
                    if let Err(e) = app.reload() {
                        app.status = format!("Reload failed: {e}");
                    }
                }
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)].as_ref())
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)].as_ref())
        .split(rows[0]);

    let dirty = if app.session.document().is_dirty() {
        " [modified]"
    } else {
        ""
    };
    let pages = Paragraph::new(styled_lines(app.pages(), app.selected)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Pages{dirty}")),
    );
    f.render_widget(pages, chunks[0]);

    let details = Paragraph::new(app.view_details())
        .block(Block::default().borders(Borders::ALL).title("View"))
        .wrap(Wrap { trim: true });
    f.render_widget(details, chunks[1]);

    let help = Paragraph::new(vec![
        Line::from(app.status.clone()),
        Line::from(vec![
            Span::raw("q: Quit | "),
            Span::raw("↑/k ↓/j: Select | "),
            Span::raw("c: Commit searches | a: Add page | s: Save | r: Reload"),
        ]),
    ])
    .block(Block::default());
    f.render_widget(help, rows[1]);
}
