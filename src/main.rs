use std::env;
use std::path::{Path, PathBuf};

use dotenvy::dotenv;
use log::error;

use app_window_launcher::Logger;

#[cfg(windows)]
use app_window_launcher::{
    launcher, platform::windows::Win32Api, process::SystemProcesses, Config,
};

fn main() {
    dotenv().ok();

    let base_dir = exe_dir();
    Logger::initialize(&base_dir.join("app_window_launcher.log"));

    if let Err(err) = run(&base_dir) {
        error!("{:#}", err);
        std::process::exit(1);
    }
}

/// The directory holding the running executable; the config file and the
/// release log file live next to it.
fn exe_dir() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|path| path.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(windows)]
fn run(base_dir: &Path) -> anyhow::Result<()> {
    let config = Config::load(&base_dir.join("config.json"))?;
    launcher::run(&config, &Win32Api, &SystemProcesses)?;
    Ok(())
}

#[cfg(not(windows))]
fn run(_base_dir: &Path) -> anyhow::Result<()> {
    anyhow::bail!("This program is only supported on Windows.")
}
