//! Console Front End
//!
//! Line-oriented stand-in for the workbench window. Reads commands from
//! stdin and prints the rendered views to stdout.
//!
//! Analysis commands are spawned as tasks, so a second analysis can start
//! while the first is still in flight; each completion re-renders the views.

use std::path::PathBuf;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use analysis_workbench_core::AnalysisKind;

use crate::commands;
use crate::models::session::ViewTab;
use crate::services::presentation::PresentationController;
use crate::state::AppState;
use crate::utils::error::AppResult;

/// Line that ends `edit` input.
pub const EDIT_TERMINATOR: &str = ".";

pub const HELP: &str = "\
Commands:
  lex | parse | sem | full     run an analysis over the editor buffer
  load <path>                  load a source file into the editor
  example [name]               load a sample program (default: valid)
  samples                      list the sample programs
  edit                         type a new buffer, end with a line containing only '.'
  tab <tokens|errors|tree>     bring a view to the front
  show                         print the active view
  status                       print the status line
  health                       check the analysis provider
  clear                        reset the session
  help                         show this help
  quit                         exit";

/// One parsed console line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Analyze(AnalysisKind),
    Load(PathBuf),
    Example(Option<String>),
    Samples,
    Edit,
    Tab(ViewTab),
    Show,
    Status,
    Health,
    Clear,
    Help,
    Quit,
}

impl std::str::FromStr for ConsoleCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "" => Err("Empty command".to_string()),
            "load" | "open" if rest.is_empty() => Err("Usage: load <path>".to_string()),
            "load" | "open" => Ok(ConsoleCommand::Load(PathBuf::from(rest))),
            "example" if rest.is_empty() => Ok(ConsoleCommand::Example(None)),
            "example" => Ok(ConsoleCommand::Example(Some(rest.to_string()))),
            "samples" => Ok(ConsoleCommand::Samples),
            "edit" => Ok(ConsoleCommand::Edit),
            "tab" => rest.parse().map(ConsoleCommand::Tab),
            "show" => Ok(ConsoleCommand::Show),
            "status" => Ok(ConsoleCommand::Status),
            "health" => Ok(ConsoleCommand::Health),
            "clear" => Ok(ConsoleCommand::Clear),
            "help" | "?" => Ok(ConsoleCommand::Help),
            "quit" | "exit" => Ok(ConsoleCommand::Quit),
            other => other
                .parse()
                .map(ConsoleCommand::Analyze)
                .map_err(|_| format!("Unknown command: {} (try 'help')", word)),
        }
    }
}

async fn render(state: &AppState) -> String {
    let session = state.session().read().await;
    let controller = PresentationController::new();
    controller.render_text(&controller.render(&session))
}

/// Execute a command that completes immediately and return its output.
///
/// `Analyze` spawns the run and returns the loading status; `Edit` and
/// `Quit` are handled by the read loop.
pub async fn execute(state: &AppState, command: ConsoleCommand) -> String {
    match command {
        ConsoleCommand::Analyze(kind) => {
            let task_state = state.clone();
            tokio::spawn(async move {
                let response = commands::run_analysis(&task_state, kind).await;
                debug!("[Console] {} analysis finished: success={}", kind, response.success);
                println!("{}", render(&task_state).await);
            });
            // Give the dispatcher a chance to mark the run as started.
            tokio::task::yield_now().await;
            state.session().read().await.status().to_string()
        }
        ConsoleCommand::Load(path) => {
            commands::load_source_file(state, &path).await;
            state.session().read().await.status().to_string()
        }
        ConsoleCommand::Example(name) => {
            let response = commands::load_sample(state, name.as_deref()).await;
            match response.error {
                Some(error) => error,
                None => state.session().read().await.status().to_string(),
            }
        }
        ConsoleCommand::Samples => {
            let samples = commands::list_samples().data.unwrap_or_default();
            samples
                .iter()
                .map(|s| format!("{:<16} {}", s.name, s.description))
                .collect::<Vec<_>>()
                .join("\n")
        }
        ConsoleCommand::Tab(tab) => {
            commands::select_tab(state, tab).await;
            render(state).await
        }
        ConsoleCommand::Show => render(state).await,
        ConsoleCommand::Status => {
            let session = state.session().read().await;
            let mut out = session.status().to_string();
            out.push_str(&format!(
                "\nMode: {} | Source: {} ({} lines)",
                session.mode(),
                session.source_name().unwrap_or("untitled"),
                session.line_count()
            ));
            if let (Some(result), Some(at)) = (session.last_result(), session.last_result_at()) {
                let counts: Vec<String> = result
                    .category_counts()
                    .iter()
                    .map(|(category, count)| format!("{} {}", category, count))
                    .collect();
                out.push_str(&format!(
                    "\nLast result: {} | {}",
                    at.format("%H:%M:%S"),
                    counts.join(", ")
                ));
            }
            out
        }
        ConsoleCommand::Health => {
            let response = commands::get_health(state).await;
            match response.data {
                Some(health) => {
                    let mut out = format!(
                        "{} | mode: {} | provider: {}",
                        health.status, health.mode, health.provider
                    );
                    if let Some(error) = health.provider_error {
                        out.push_str(&format!("\n{}", error));
                    }
                    out
                }
                None => response.error.unwrap_or_default(),
            }
        }
        ConsoleCommand::Clear => {
            commands::clear_session(state).await;
            render(state).await
        }
        ConsoleCommand::Help => HELP.to_string(),
        ConsoleCommand::Edit | ConsoleCommand::Quit => String::new(),
    }
}

/// Read lines up to the terminator and return them as the new buffer.
async fn read_edit_buffer<R>(lines: &mut tokio::io::Lines<R>) -> AppResult<String>
where
    R: AsyncBufRead + Unpin,
{
    let mut buffer = String::new();
    while let Some(line) = lines.next_line().await? {
        if line.trim_end() == EDIT_TERMINATOR {
            break;
        }
        buffer.push_str(&line);
        buffer.push('\n');
    }
    Ok(buffer)
}

/// Drive the console from `input` until `quit` or end of input.
pub async fn run_with<R>(state: AppState, input: R) -> AppResult<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let command = match line.parse::<ConsoleCommand>() {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match command {
            ConsoleCommand::Quit => break,
            ConsoleCommand::Edit => {
                println!("Enter source, finish with a line containing only '{}'", EDIT_TERMINATOR);
                let text = read_edit_buffer(&mut lines).await?;
                let info = commands::set_source_text(&state, text).await;
                if let Some(info) = info.data {
                    println!("{} lines in editor", info.line_count);
                }
            }
            other => println!("{}", execute(&state, other).await),
        }
    }
    info!("[Console] Session closed");
    Ok(())
}

/// Run the console on stdin.
pub async fn run_console(state: AppState) -> AppResult<()> {
    println!(
        "Analysis workbench ({} mode). Type 'help' for commands.",
        state.dispatcher().mode()
    );
    run_with(state, BufReader::new(tokio::io::stdin())).await
}
