//! TUI application state and event handling.
//!
//! The `App` struct owns the whole form state and runs the main event loop
//! via `run()`. Behavior follows the conversion pipeline's contracts:
//!
//! - Enter runs a conversion; success shows the result and records it into
//!   the session history, failure shows a single human-readable message.
//! - Most validation failures hide any previously shown result. The one
//!   exception is a bad UTM zone, which keeps the prior result on screen
//!   while the zone is corrected.
//! - Switching modes always resets the displayed result and error.
//! - The converted position is kept as WGS84 degrees for the copy/share
//!   actions, whichever direction produced it.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;

use super::events::{Action, poll_event};
use super::rendering::{RenderState, render_ui};
use super::theme::Palette;
use crate::clipboard::copy_to_clipboard;
use crate::converter::{ConvertError, convert};
use crate::history::HistoryLog;
use crate::models::{Conversion, ConversionMode, Hemisphere, UtmInput};
use crate::share;
use crate::storage::{self, Preferences};

/// Duration for success status messages (milliseconds)
const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
/// Duration for error status messages (milliseconds)
const STATUS_ERROR_DURATION_MS: u64 = 5000;
/// Input length cap per field
const MAX_FIELD_LEN: usize = 24;

/// Type of status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

/// Focusable form fields. Zone and Hemisphere only exist for UTM modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Input1,
    Input2,
    Zone,
    Hemisphere,
}

pub struct App {
    mode: ConversionMode,
    input1: String,
    input2: String,
    zone: String,
    hemisphere: Hemisphere,
    focus: Field,
    /// Displayed result; `None` means the result panel shows nothing
    result: Option<Conversion>,
    /// Displayed validation/projection message
    error: Option<String>,
    /// Last successfully converted WGS84 position, kept across failures
    position: Option<(f64, f64)>,
    history: HistoryLog,
    history_path: PathBuf,
    prefs: Preferences,
    prefs_path: PathBuf,
    status_message: Option<StatusMessage>,
    should_quit: bool,
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl App {
    /// Create the app against the default storage locations
    pub fn new() -> Self {
        Self::with_paths(storage::history_path(), storage::prefs_path())
    }

    /// Create the app with explicit storage paths (tests use temp dirs)
    pub fn with_paths(history_path: PathBuf, prefs_path: PathBuf) -> Self {
        let history = storage::load_history(&history_path);
        let mut prefs = storage::load_prefs(&prefs_path);
        prefs.visits += 1;

        let mut app = Self {
            mode: ConversionMode::DltmToGps,
            input1: String::new(),
            input2: String::new(),
            zone: String::new(),
            hemisphere: Hemisphere::North,
            focus: Field::Input1,
            result: None,
            error: None,
            position: None,
            history,
            history_path,
            prefs,
            prefs_path,
            status_message: None,
            should_quit: false,
            needs_redraw: true, // Initial draw needed
            last_draw_time: Instant::now(),
        };

        if let Err(err) = storage::save_prefs(&app.prefs_path, &app.prefs) {
            app.set_status(
                format!("✗ Could not save preferences: {err}"),
                MessageType::Error,
                STATUS_ERROR_DURATION_MS,
            );
        }

        app
    }

    /// Set a transient status message with automatic expiry
    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType, duration_ms: u64) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    /// Check and clear expired status messages
    fn check_and_clear_expired_status(&mut self) {
        let expired = self
            .status_message
            .as_ref()
            .map(|msg| Instant::now() >= msg.expires_at)
            .unwrap_or(false);
        if expired {
            self.status_message = None;
            self.needs_redraw = true;
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            self.check_and_clear_expired_status();

            // Draw if dirty or if it's been >100ms (for terminal resize handling)
            let now = Instant::now();
            let elapsed = now.duration_since(self.last_draw_time);
            if self.needs_redraw || elapsed >= Duration::from_millis(100) {
                let palette = Palette::for_preference(self.prefs.theme);
                terminal.draw(|f| {
                    let state = RenderState {
                        mode: self.mode,
                        input1: &self.input1,
                        input2: &self.input2,
                        zone: &self.zone,
                        hemisphere: self.hemisphere,
                        focus: self.focus,
                        result: self.result.as_ref(),
                        error: self.error.as_deref(),
                        history: &self.history,
                        status_message: self.status_message.as_ref(),
                        visits: self.prefs.visits,
                        palette: &palette,
                    };
                    render_ui(f, &state);
                })?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            let action = poll_event(Duration::from_millis(100))?;
            self.handle_action(action);
        }

        Ok(())
    }

    /// Handle a user action (extracted for testing)
    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::NextMode => self.switch_mode(self.mode.next()),
            Action::PrevMode => self.switch_mode(self.mode.prev()),
            Action::FocusNext => self.move_focus(1),
            Action::FocusPrev => self.move_focus(-1),
            Action::Input(c) => self.input_char(c),
            Action::DeleteChar => self.delete_char(),
            Action::Convert => self.run_conversion(),
            Action::CopyResult => self.copy_result(),
            Action::CopyMapLink => self.copy_map_link(),
            Action::CopyShareLink => self.copy_share_link(),
            Action::ClearHistory => self.clear_history(),
            Action::ToggleTheme => self.toggle_theme(),
            Action::None => {}
        }
    }

    /// Fields reachable by Tab in the current mode
    fn fields(&self) -> &'static [Field] {
        if self.mode.uses_utm() {
            &[Field::Input1, Field::Input2, Field::Zone, Field::Hemisphere]
        } else {
            &[Field::Input1, Field::Input2]
        }
    }

    fn move_focus(&mut self, delta: isize) {
        let fields = self.fields();
        let idx = fields.iter().position(|f| *f == self.focus).unwrap_or(0) as isize;
        let len = fields.len() as isize;
        self.focus = fields[((idx + delta).rem_euclid(len)) as usize];
        self.needs_redraw = true;
    }

    fn switch_mode(&mut self, mode: ConversionMode) {
        self.mode = mode;
        // Mode switch resets displayed output and any active error
        self.result = None;
        self.error = None;
        if !mode.uses_utm() && matches!(self.focus, Field::Zone | Field::Hemisphere) {
            self.focus = Field::Input1;
        }
        self.needs_redraw = true;
    }

    fn input_char(&mut self, c: char) {
        match self.focus {
            Field::Input1 => self.needs_redraw |= push_limited(&mut self.input1, c),
            Field::Input2 => self.needs_redraw |= push_limited(&mut self.input2, c),
            Field::Zone => self.needs_redraw |= push_limited(&mut self.zone, c),
            Field::Hemisphere => {
                let selected = match c {
                    ' ' => self.hemisphere.toggle(),
                    'n' | 'N' => Hemisphere::North,
                    's' | 'S' => Hemisphere::South,
                    _ => return,
                };
                self.hemisphere = selected;
                self.needs_redraw = true;
            }
        }
    }

    fn delete_char(&mut self) {
        let popped = match self.focus {
            Field::Input1 => self.input1.pop(),
            Field::Input2 => self.input2.pop(),
            Field::Zone => self.zone.pop(),
            Field::Hemisphere => None,
        };
        if popped.is_some() {
            self.needs_redraw = true;
        }
    }

    fn run_conversion(&mut self) {
        let utm = self
            .mode
            .uses_utm()
            .then(|| UtmInput::new(self.zone.clone(), self.hemisphere));

        match convert(self.mode, &self.input1, &self.input2, utm.as_ref()) {
            Ok(conversion) => {
                self.position = Some((conversion.latitude, conversion.longitude));
                self.error = None;
                self.history.record(
                    self.mode,
                    format!("{}, {}", self.input1.trim(), self.input2.trim()),
                    conversion.output_text(),
                );
                if let Err(err) = storage::save_history(&self.history_path, &self.history) {
                    self.set_status(
                        format!("✗ Could not save history: {err}"),
                        MessageType::Error,
                        STATUS_ERROR_DURATION_MS,
                    );
                }
                self.result = Some(conversion);
            }
            Err(err) => {
                // A bad UTM zone keeps the previous result visible so the
                // user can fix the zone in place; every other failure hides it
                if !matches!(err, ConvertError::InvalidUtmZone) {
                    self.result = None;
                }
                self.error = Some(err.to_string());
            }
        }
        self.needs_redraw = true;
    }

    fn copy_result(&mut self) {
        match &self.result {
            Some(conversion) => self.copy_payload(conversion.output_text(), "result"),
            None => self.set_status(
                "✗ Run a conversion first",
                MessageType::Error,
                STATUS_ERROR_DURATION_MS,
            ),
        }
    }

    fn copy_map_link(&mut self) {
        match self.share_position() {
            Some((lat, lon)) => self.copy_payload(share::maps_url(lat, lon), "map link"),
            None => self.set_status(
                "✗ Run a conversion first",
                MessageType::Error,
                STATUS_ERROR_DURATION_MS,
            ),
        }
    }

    fn copy_share_link(&mut self) {
        match self.share_position() {
            Some((lat, lon)) => self.copy_payload(share::whatsapp_url(lat, lon), "WhatsApp link"),
            None => self.set_status(
                "✗ Run a conversion first",
                MessageType::Error,
                STATUS_ERROR_DURATION_MS,
            ),
        }
    }

    /// Position for the share actions: only offered while a result is shown,
    /// mirroring the disabled share buttons of a hidden result
    fn share_position(&self) -> Option<(f64, f64)> {
        if self.result.is_some() { self.position } else { None }
    }

    fn copy_payload(&mut self, payload: String, what: &str) {
        match copy_to_clipboard(&payload) {
            Ok(()) => self.set_status(
                format!("✓ Copied {what} to clipboard"),
                MessageType::Success,
                STATUS_SUCCESS_DURATION_MS,
            ),
            Err(err) => self.set_status(
                format!("✗ Clipboard error: {err}"),
                MessageType::Error,
                STATUS_ERROR_DURATION_MS,
            ),
        }
    }

    fn clear_history(&mut self) {
        self.history.clear();
        match storage::save_history(&self.history_path, &self.history) {
            Ok(()) => self.set_status(
                "✓ History cleared",
                MessageType::Success,
                STATUS_SUCCESS_DURATION_MS,
            ),
            Err(err) => self.set_status(
                format!("✗ Could not save history: {err}"),
                MessageType::Error,
                STATUS_ERROR_DURATION_MS,
            ),
        }
    }

    fn toggle_theme(&mut self) {
        self.prefs.theme = self.prefs.theme.toggle();
        if let Err(err) = storage::save_prefs(&self.prefs_path, &self.prefs) {
            self.set_status(
                format!("✗ Could not save preferences: {err}"),
                MessageType::Error,
                STATUS_ERROR_DURATION_MS,
            );
        }
        self.needs_redraw = true;
    }
}

fn push_limited(field: &mut String, c: char) -> bool {
    if field.len() < MAX_FIELD_LEN {
        field.push(c);
        true
    } else {
        false
    }
}
