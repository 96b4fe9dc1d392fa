//! CLI command implementations
//!
//! `screen` opens a screen once and prints its rows. `session` keeps one
//! screen open and answers JSON-lines requests on stdin:
//!
//! ```text
//! {"command":"start"}
//! {"command":"resume"}
//! {"command":"click","key":"build_number","at_ms":1000}
//! {"command":"rename","name":"Living room TV"}
//! {"command":"stop"}
//! ```

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::{json, Value};

use crate::about::AboutScreen;
use crate::config::DeviceProfile;
use crate::device_name::DeviceNameBus;
use crate::observability::Logger;
use crate::platform::{Clock, ManualClock, MemoryPlatform, MonotonicClock};
use crate::preference::PreferenceScreen;
use crate::vendor::ResetOptionsScreen;

use super::args::{Command, ScreenKind};
use super::errors::{CliError, CliResult};
use super::io::{read_requests, write_error, write_response};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
///
/// Stdout carries only responses; log lines go to stderr.
pub fn run_command(cmd: Command) -> CliResult<()> {
    Logger::reserve_stdout();
    match cmd {
        Command::Screen { config, screen } => show_screen(&config, screen),
        Command::Session {
            config,
            screen,
            real_clock,
        } => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            session(&config, screen, real_clock, stdin.lock(), &mut stdout)
        }
    }
}

/// Print the rows of a freshly opened screen
pub fn show_screen(config_path: &Path, kind: ScreenKind) -> CliResult<()> {
    let profile = DeviceProfile::load(config_path)?;
    let mut session = Session::open(profile, kind, false)?;
    session.start();
    session.resume();
    write_response(&mut io::stdout(), session.rows())
}

/// Run a request loop over `input`, answering on `output`
pub fn session<R: BufRead, W: Write>(
    config_path: &Path,
    kind: ScreenKind,
    real_clock: bool,
    input: R,
    output: &mut W,
) -> CliResult<()> {
    let profile = DeviceProfile::load(config_path)?;
    let mut session = Session::open(profile, kind, real_clock)?;
    serve(&mut session, input, output)
}

/// Answer every request; I/O failures end the loop, bad requests do not
pub fn serve<R: BufRead, W: Write>(session: &mut Session, input: R, output: &mut W) -> CliResult<()> {
    for request in read_requests(input) {
        let outcome = request.and_then(|value| {
            let request: SessionRequest = serde_json::from_value(value)
                .map_err(|e| CliError::bad_request(e.to_string()))?;
            session.handle(request)
        });

        match outcome {
            Ok(data) => write_response(output, data)?,
            Err(e) if e.code() == super::errors::CliErrorCode::BadRequest => {
                write_error(output, e.code_str(), e.message())?;
            }
            Err(e) => {
                write_error(output, e.code_str(), e.message())?;
                return Err(e);
            }
        }
    }
    Ok(())
}

/// A session request
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum SessionRequest {
    Start,
    Resume,
    Stop,
    /// Tap a row; `at_ms` sets the manual clock first
    Click {
        key: String,
        #[serde(default)]
        at_ms: Option<u64>,
    },
    /// Rename the device and notify subscribed screens
    Rename { name: String },
    /// Show the current rows without changing anything
    Rows,
}

enum OpenScreen {
    About(Box<AboutScreen>),
    ResetOptions(ResetOptionsScreen),
}

/// One open screen and the emulated device behind it
pub struct Session {
    platform: MemoryPlatform,
    manual_clock: Option<ManualClock>,
    device_names: Arc<DeviceNameBus>,
    screen: OpenScreen,
}

impl Session {
    pub fn open(profile: DeviceProfile, kind: ScreenKind, real_clock: bool) -> CliResult<Self> {
        let flavor = profile.flavor;
        let platform = MemoryPlatform::new(profile);
        let device_names = Arc::new(DeviceNameBus::new());

        let (clock, manual_clock): (Arc<dyn Clock>, Option<ManualClock>) = if real_clock {
            (Arc::new(MonotonicClock::new()), None)
        } else {
            let manual = ManualClock::new(0);
            (Arc::new(manual.clone()), Some(manual))
        };

        let screen = match kind {
            ScreenKind::About => OpenScreen::About(Box::new(AboutScreen::new(
                flavor,
                Arc::new(platform.clone()),
                clock,
                Arc::clone(&device_names),
            )?)),
            ScreenKind::ResetOptions => OpenScreen::ResetOptions(ResetOptionsScreen::new()),
        };

        Ok(Self {
            platform,
            manual_clock,
            device_names,
            screen,
        })
    }

    pub fn platform(&self) -> &MemoryPlatform {
        &self.platform
    }

    pub fn start(&mut self) {
        if let OpenScreen::About(ref mut about) = self.screen {
            about.on_start();
        }
    }

    pub fn resume(&mut self) {
        if let OpenScreen::About(ref mut about) = self.screen {
            about.on_resume();
        }
    }

    pub fn stop(&mut self) {
        if let OpenScreen::About(ref mut about) = self.screen {
            about.on_stop();
        }
    }

    /// Handle one request and build its response data
    pub fn handle(&mut self, request: SessionRequest) -> CliResult<Value> {
        match request {
            SessionRequest::Start => {
                self.start();
                Ok(self.rows())
            }
            SessionRequest::Resume => {
                self.resume();
                Ok(self.rows())
            }
            SessionRequest::Stop => {
                self.stop();
                Ok(self.rows())
            }
            SessionRequest::Rows => Ok(self.rows()),
            SessionRequest::Click { key, at_ms } => self.click(&key, at_ms),
            SessionRequest::Rename { name } => {
                if name.trim().is_empty() {
                    return Err(CliError::bad_request("Device name must not be empty"));
                }
                self.platform.set_device_name(name);
                let notified = self.device_names.publish();
                let refreshed = match self.screen {
                    OpenScreen::About(ref mut about) => about.poll_device_name_updates(),
                    OpenScreen::ResetOptions(_) => false,
                };
                Ok(json!({
                    "notified": notified,
                    "refreshed": refreshed,
                    "rows": self.visible_rows(),
                }))
            }
        }
    }

    fn click(&mut self, key: &str, at_ms: Option<u64>) -> CliResult<Value> {
        if let Some(at) = at_ms {
            let Some(ref clock) = self.manual_clock else {
                return Err(CliError::bad_request(
                    "at_ms is not accepted when the session uses the real clock",
                ));
            };
            let now = clock.uptime_millis();
            if at < now {
                return Err(CliError::bad_request(format!(
                    "at_ms {} is earlier than the session clock ({} ms)",
                    at, now
                )));
            }
            clock.set(at);
        }

        let (result, unlock_state) = match self.screen {
            OpenScreen::About(ref mut about) => {
                let result = about.on_preference_click(key);
                (result, Some(about.unlock_state()))
            }
            OpenScreen::ResetOptions(ref mut reset) => (reset.on_preference_click(key), None),
        };

        let mut data = json!({
            "result": serde_json::to_value(&result)?,
            "messages": self.platform.visible_messages(),
            "effects": serde_json::to_value(self.platform.take_records())?,
        });
        if let Some(state) = unlock_state {
            data["unlock"] = serde_json::to_value(state)?;
        }
        Ok(data)
    }

    fn preference_screen(&self) -> &PreferenceScreen {
        match self.screen {
            OpenScreen::About(ref about) => about.screen(),
            OpenScreen::ResetOptions(ref reset) => reset.screen(),
        }
    }

    fn visible_rows(&self) -> Value {
        let rows: Vec<_> = self.preference_screen().visible_rows().collect();
        json!(rows)
    }

    /// Layout name and visible rows
    pub fn rows(&self) -> Value {
        json!({
            "layout": self.preference_screen().layout(),
            "rows": self.visible_rows(),
        })
    }
}
