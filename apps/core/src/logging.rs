use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use std::time::{SystemTime, UNIX_EPOCH};

const LOG_FILE_NAME: &str = "geofind.log";
const ARCHIVE_PREFIX: &str = "geofind-";
const MAX_LOG_BYTES: u64 = 1_000_000;
const MAX_ARCHIVES: usize = 5;

static LOGGER: OnceLock<Mutex<File>> = OnceLock::new();
static PANIC_HOOK_INSTALLED: OnceLock<()> = OnceLock::new();

#[derive(Debug, Clone, Copy)]
enum Level {
    Info,
    Warn,
    Error,
}

impl Level {
    fn label(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }
}

pub fn logs_dir() -> PathBuf {
    crate::config::stable_app_data_dir().join("logs")
}

pub fn init() -> Result<(), std::io::Error> {
    let dir = logs_dir();
    fs::create_dir_all(&dir)?;

    let active = dir.join(LOG_FILE_NAME);
    let size = fs::metadata(&active).map(|meta| meta.len()).unwrap_or(0);
    if size >= MAX_LOG_BYTES {
        let archived = dir.join(format!("{ARCHIVE_PREFIX}{}.log", epoch_secs()));
        fs::rename(&active, archived)?;
        prune_archives()?;
    }

    let file = OpenOptions::new().create(true).append(true).open(&active)?;
    let _ = LOGGER.set(Mutex::new(file));

    install_panic_hook();
    Ok(())
}

pub fn info(message: &str) {
    write_line(Level::Info, message);
}

pub fn warn(message: &str) {
    write_line(Level::Warn, message);
}

pub fn error(message: &str) {
    write_line(Level::Error, message);
}

fn write_line(level: Level, message: &str) {
    let Some(file) = LOGGER.get() else {
        return;
    };
    let Ok(mut file) = file.lock() else {
        return;
    };

    let line = format!("[{}] [{}] {message}\n", epoch_secs(), level.label());
    let _ = file.write_all(line.as_bytes());
    let _ = file.flush();
}

fn epoch_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

fn prune_archives() -> Result<(), std::io::Error> {
    let mut archives: Vec<PathBuf> = fs::read_dir(logs_dir())?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .map(|name| name.starts_with(ARCHIVE_PREFIX) && name.ends_with(".log"))
                .unwrap_or(false)
        })
        .collect();

    archives.sort();
    while archives.len() > MAX_ARCHIVES {
        let oldest = archives.remove(0);
        let _ = fs::remove_file(oldest);
    }
    Ok(())
}

fn install_panic_hook() {
    let _ = PANIC_HOOK_INSTALLED.get_or_init(|| {
        let prior = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let location = panic_info
                .location()
                .map(|l| format!("{}:{}", l.file(), l.line()))
                .unwrap_or_else(|| "unknown".to_string());
            error(&format!("panic at {location}"));
            prior(panic_info);
        }));
    });
}
