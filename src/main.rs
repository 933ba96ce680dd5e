mod app;
mod cli;
mod error;
mod event;
mod input_state;
mod logging;
mod model;
mod storage;
mod theme;
mod ui;
mod ui_state;

use std::io;
use std::panic;
use std::path::PathBuf;

use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use app::App;
use cli::{Cli, Commands};
use storage::config::{self as config_store, Config};
use theme::Theme;

/// 启动 TUI 界面
fn run_tui(config_path: PathBuf, theme_override: Option<Theme>) -> io::Result<()> {
    // 配置加载先于日志初始化，错误稍后再记录
    let (mut config, load_error) = match config_store::load_config_from(&config_path) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    let log_path = logging::log_path();
    if let Err(e) = logging::init(&config.log, &log_path) {
        eprintln!("Logging disabled: {}", e);
    }
    if let Some(e) = load_error {
        tracing::warn!(error = %e, path = %config_path.display(), "failed to load config, using defaults");
    }
    if let Some(theme) = theme_override {
        config.theme.name = theme.label().to_string();
    }
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        theme = %config.theme.name,
        "starting taskman"
    );

    // 初始化终端
    let mut terminal = ratatui::init();
    execute!(io::stdout(), EnableMouseCapture)?;

    // --theme 只影响本次会话，主题选择器里的修改才写回配置
    let persist_path = theme_override.is_none().then_some(config_path);
    let mut app = App::new(config, persist_path);

    let result = run(&mut terminal, &mut app);

    // 恢复终端
    execute!(io::stdout(), DisableMouseCapture)?;
    ratatui::restore();

    tracing::info!(tasks = app.tasks.all().len(), "taskman exited");
    result
}

fn main() -> io::Result<()> {
    // 发生 panic 时先恢复终端状态
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(io::stdout(), DisableMouseCapture);
        ratatui::restore();
        original_hook(panic_info);
    }));

    let cli = Cli::parse();
    let config_path = cli.config.unwrap_or_else(config_store::config_path);

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => run_tui(config_path, cli.theme)?,
        Commands::Config => cli::config::execute(&config_path),
    }

    Ok(())
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> io::Result<()> {
    loop {
        // 渲染界面
        app.ui.click_areas.reset();
        terminal.draw(|frame| ui::task_view::render(frame, app))?;

        // 处理事件
        if !event::handle_events(app)? {
            break;
        }
    }

    Ok(())
}
