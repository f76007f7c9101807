//! CLI smoke entry point.
//!
//! # Responsibility
//! - Build one board, run the create/drag/drop scenario and print the lanes.
//! - Optional: `taskboard_cli <absolute-log-dir>` enables file logging.

use std::path::PathBuf;
use std::process::ExitCode;
use taskboard_core::{
    core_version, init_from_config, BoardConfig, LoggingConfig, MoveOutcome, ProjectStatus,
    TaskBoard,
};

fn main() -> ExitCode {
    let config = BoardConfig {
        logging: LoggingConfig {
            log_dir: std::env::args_os().nth(1).map(PathBuf::from),
            ..LoggingConfig::default()
        },
        ..BoardConfig::default()
    };
    if let Err(err) = init_from_config(&config.logging) {
        eprintln!("taskboard_core logging disabled: {err}");
    }

    println!("taskboard_core version={}", core_version());
    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: BoardConfig) -> Result<(), String> {
    let mut board = TaskBoard::new(config).map_err(|err| err.to_string())?;
    let id = board
        .submit_project("Site", "Build site", "3")
        .map_err(|err| err.to_string())?;
    println!("{}\n", board.render());

    let mut event = board
        .start_drag(id)
        .ok_or_else(|| format!("project {id} vanished before drag"))?;
    board.drag_over(ProjectStatus::Finished, &mut event);
    let outcome = board.drop_on(ProjectStatus::Finished, &event);
    board.end_drag(id, &event);
    log::info!("event=cli_scenario module=cli status=ok outcome={outcome:?}");
    if outcome != MoveOutcome::Moved {
        return Err(format!("unexpected drop outcome: {outcome:?}"));
    }
    println!("{}", board.render());
    Ok(())
}
