use std::io::{self, BufRead};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::config::{self, ConfigError};
use crate::control::{ControlEvent, GeocoderControl, Key};
use crate::geocoding::mapsco::MapsCoClient;
use crate::geocoding::{GeocodingClient, MockGeocodingClient, SearchRequest};
use crate::language::EnvLocaleProvider;
use crate::logging;
use crate::marker::LoggingMapHost;

#[derive(Debug)]
pub enum RuntimeError {
    Config(ConfigError),
    Io(std::io::Error),
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(error) => write!(f, "config error: {error}"),
            Self::Io(error) => write!(f, "io error: {error}"),
        }
    }
}

impl std::error::Error for RuntimeError {}

impl From<ConfigError> for RuntimeError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<std::io::Error> for RuntimeError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RuntimeOptions {
    pub config_path: Option<PathBuf>,
}

pub fn parse_cli_args(args: &[String]) -> Result<RuntimeOptions, String> {
    let mut options = RuntimeOptions::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let path = iter
                    .next()
                    .ok_or_else(|| "--config requires a path".to_string())?;
                options.config_path = Some(PathBuf::from(path));
            }
            other => {
                return Err(format!("unknown argument: {other} (usage: geofind-core [--config <path>])"));
            }
        }
    }
    Ok(options)
}

// Line-oriented interactive loop: each line is an edit of the search
// field, `=text` submits immediately, `:clear`/`:esc`/`:quit` map to
// the matching control operations.
pub fn run_with_options(options: RuntimeOptions) -> Result<(), RuntimeError> {
    let config = config::load(options.config_path.as_deref())?;
    if let Err(error) = logging::init() {
        eprintln!("[geofind-core] logging unavailable: {error}");
    }

    println!(
        "[geofind-core] startup endpoint={} limit={} debounce_ms={}",
        config.endpoint, config.limit, config.debounce_ms,
    );

    let mut client: Box<dyn GeocodingClient> = if config.api_key.is_empty() {
        println!("[geofind-core] no api_key configured; running offline (queries resolve empty)");
        Box::new(MockGeocodingClient::default())
    } else {
        Box::new(MapsCoClient::new(&config.endpoint, &config.api_key))
    };

    let debounce = Duration::from_millis(config.debounce_ms);
    let mut control = GeocoderControl::new(
        config,
        &EnvLocaleProvider,
        Box::new(LoggingMapHost::default()),
    )?;
    println!(
        "[geofind-core] language={} placeholder='{}'",
        control.language().as_query_value(),
        control.placeholder(),
    );
    logging::info(&format!(
        "runtime started language={}",
        control.language().as_query_value()
    ));
    control.on_focus();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();
        match input {
            ":quit" | ":q" => break,
            ":clear" => control.clear(),
            ":esc" => control.on_key_down(Key::Escape),
            "" => control.on_text_changed("", Instant::now()),
            _ => {
                if let Some(text) = input.strip_prefix('=') {
                    let request = control.query(text);
                    dispatch(&mut control, client.as_mut(), request);
                } else {
                    control.on_key_down(Key::Other);
                    control.on_text_changed(input, Instant::now());
                    std::thread::sleep(debounce);
                    if let Some(request) = control.poll(Instant::now()) {
                        dispatch(&mut control, client.as_mut(), request);
                    }
                }
            }
        }
        render_events(&mut control);
    }

    logging::info("runtime stopped");
    Ok(())
}

fn dispatch(
    control: &mut GeocoderControl,
    client: &mut dyn GeocodingClient,
    request: SearchRequest,
) {
    logging::info(&format!(
        "dispatch sequence={} query='{}'",
        request.sequence, request.query
    ));
    let outcome = client.search(&request);
    if let Err(error) = &outcome {
        logging::warn(&format!("search failed: {error}"));
    }
    control.handle_response(request.sequence, outcome);
}

fn render_events(control: &mut GeocoderControl) {
    for event in control.drain_events() {
        match event {
            ControlEvent::Loading { query } => {
                println!("[geofind-core] loading query='{query}'");
            }
            ControlEvent::Results { features } => {
                println!("[geofind-core] {} candidate(s)", features.len());
                for (index, feature) in features.iter().enumerate() {
                    println!("  {index}. {}", feature.place_name);
                }
            }
            ControlEvent::Result { result } => {
                println!(
                    "[geofind-core] selected '{}' at {},{}",
                    result.place_name, result.center.lng, result.center.lat,
                );
            }
            ControlEvent::Error { error } => {
                println!("[geofind-core] search error: {error}");
            }
            ControlEvent::Clear => {
                println!("[geofind-core] cleared");
            }
        }
    }
}
