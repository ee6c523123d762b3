use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use log::warn;
use paycmd_cli::console::TermConsole;
use paycmd_cli::{commands, program};
use paycmd_core::arguments::ArgumentVector;
use paycmd_core::config;
use paycmd_core::console::Console;
use paycmd_core::exit_codes;
use paycmd_core::registry::CommandRegistry;
use paycmd_core::toggles::WaitMode;

fn main() {
    env_logger::init();

    let mut registry = CommandRegistry::new();
    if let Err(e) = commands::register_defaults(&mut registry) {
        eprintln!("{e}");
        std::process::exit(exit_codes::FAILED_COMMAND);
    }

    let console = TermConsole::new();

    // A broken config file should not take the console down; commands that
    // need the backend report the missing connection themselves.
    let config_path = config::get_config_path(&None);
    let connection = match config::load_config(&config_path) {
        Ok(config) => config::resolve_connection(&config),
        Err(e) => {
            warn!("{e}");
            None
        }
    };

    let args = ArgumentVector::from_env();
    let exit_code = program::run(&registry, &console, connection.as_ref(), &args);

    wait_before_exit(&console, exit_code);
    std::process::exit(exit_code);
}

/// Honors the wait mode left behind by the run.
fn wait_before_exit(console: &TermConsole, exit_code: i32) {
    let wait = match console.wait_mode() {
        WaitMode::Wait => true,
        WaitMode::WaitError => exit_code != exit_codes::SUCCESS,
        WaitMode::NoWait => false,
    };
    if !wait {
        return;
    }

    println!("Press any key to continue...");
    if enable_raw_mode().is_ok() {
        let _ = crossterm::event::read();
        let _ = disable_raw_mode();
    }
}
