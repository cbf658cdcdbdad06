//! Command runners

use std::io::{self, IsTerminal, Stdout};
use std::panic;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use keycalc::presentation::TokenGrid;
use keycalc::tui::{render, CalculatorApp, CalculatorLayout, InputAction, InputHandler};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Terminal,
};
use tracing::{debug, info};

use crate::commands::{EvalArgs, GridArgs, TuiArgs};
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::logging::{init_logging, LogTarget};
use crate::output::{
    render_eval_json, render_eval_text, render_grid_json, render_grid_text, EvalReport,
    OutputFormat,
};

/// Output of the `eval` command
pub fn eval_output(config: &CliConfig, args: &EvalArgs) -> CliResult<String> {
    let report = EvalReport::run(&args.tokens, args.steps)?;
    info!(tokens = report.tokens.len(), display = %report.display, "evaluated");
    match args.format {
        OutputFormat::Text => Ok(render_eval_text(&report, config.use_color())),
        OutputFormat::Json => render_eval_json(&report),
    }
}

/// Output of the `grid` command
pub fn grid_output(args: &GridArgs) -> CliResult<String> {
    let grid = TokenGrid::new();
    match args.format {
        OutputFormat::Text => Ok(render_grid_text(&grid)),
        OutputFormat::Json => render_grid_json(&grid),
    }
}

/// Runs the interactive calculator until the user quits
pub fn run_tui(config: &CliConfig, args: &TuiArgs) -> CliResult<()> {
    let target = args
        .log_file
        .clone()
        .map_or(LogTarget::Off, LogTarget::File);
    init_logging(config.verbosity, &target)?;

    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        return Err(CliError::terminal(
            "keycalc tui requires an interactive terminal",
        ));
    }

    install_panic_hook();
    let mut terminal = setup_terminal()?;
    info!("terminal ready");

    let result = run_app(&mut terminal);

    restore_terminal(&mut terminal)?;
    info!("terminal restored");
    result
}

fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal before printing panic
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

fn setup_terminal() -> CliResult<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.clear()?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> CliResult<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>) -> CliResult<()> {
    let mut app = CalculatorApp::new();
    let handler = InputHandler::new();

    while !app.should_quit() {
        let keypad_area = draw(terminal, &app)?;
        let event = event::read()?;
        handle_event(&mut app, &handler, &event, keypad_area);
    }
    Ok(())
}

/// Draws one frame and returns the keypad area used for hit-testing
pub fn draw<B: Backend>(terminal: &mut Terminal<B>, app: &CalculatorApp) -> CliResult<Rect> {
    let mut keypad_area = Rect::default();
    terminal.draw(|frame| {
        keypad_area = CalculatorLayout::new(frame.area()).keypad;
        render(app, frame);
    })?;
    Ok(keypad_area)
}

/// Applies one terminal event to the app
pub fn handle_event(
    app: &mut CalculatorApp,
    handler: &InputHandler,
    event: &Event,
    keypad_area: Rect,
) {
    let action = handler.handle_event(event, app.keypad(), keypad_area);
    if let InputAction::Press(index) = action {
        if let Some(button) = app.keypad().grid().get(index) {
            debug!(index, label = %button.label(), "button clicked");
        }
    }
    app.handle_action(action);
}
