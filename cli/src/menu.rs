//! Interactive numbered menu driving the zone store

use std::io::{BufRead, Write};

use chrono::Utc;
use shared::{
    assess_all, concentration_range, ClimateReading, Pollutant, ZoneId, ZoneStore,
    HUMIDITY_RANGE, TEMPERATURE_RANGE, WIND_SPEED_RANGE,
};

use crate::config::Config;
use crate::console::Console;
use crate::error::{AppError, AppResult};
use crate::services::reporting::{render_summary, render_zone_overview};
use crate::services::{PersistenceService, ReportingService};

/// Menu entries in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ShowZones,
    EditClimate,
    EnterReading,
    ShowSummary,
    Save,
    ExportReport,
    Exit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 7] = [
        MenuAction::ShowZones,
        MenuAction::EditClimate,
        MenuAction::EnterReading,
        MenuAction::ShowSummary,
        MenuAction::Save,
        MenuAction::ExportReport,
        MenuAction::Exit,
    ];

    /// Map a 1-based menu number to its action
    pub fn from_choice(choice: usize) -> Option<Self> {
        choice.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::ShowZones => "Show zones",
            MenuAction::EditClimate => "Edit climate for a zone",
            MenuAction::EnterReading => "Enter current reading for a zone",
            MenuAction::ShowSummary => "Compute and show summary",
            MenuAction::Save => "Save data",
            MenuAction::ExportReport => "Export report",
            MenuAction::Exit => "Exit",
        }
    }
}

/// Interactive session state
pub struct App<R, W> {
    console: Console<R, W>,
    store: ZoneStore,
    persistence: PersistenceService,
    reporting: ReportingService,
    window_days: usize,
    autosave_on_exit: bool,
    /// Unsaved history or climate edits
    dirty: bool,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(console: Console<R, W>, store: ZoneStore, config: &Config) -> Self {
        Self {
            console,
            store,
            persistence: PersistenceService::new(&config.data.path),
            reporting: ReportingService::new(
                &config.report.path,
                config.report.format,
                config.prediction.window_days,
            ),
            window_days: config.prediction.window_days,
            autosave_on_exit: config.data.autosave_on_exit,
            dirty: false,
        }
    }

    pub fn store(&self) -> &ZoneStore {
        &self.store
    }

    pub fn console(&self) -> &Console<R, W> {
        &self.console
    }

    /// Run until Exit is chosen or input ends
    ///
    /// Pending changes are handled by `finish` even when the console fails.
    pub fn run(&mut self) -> AppResult<()> {
        let outcome = loop {
            match self.step() {
                Ok(true) => continue,
                Ok(false) => break Ok(()),
                Err(AppError::InputClosed) => {
                    tracing::info!("Input closed, leaving menu");
                    break Ok(());
                }
                Err(e) => {
                    tracing::error!(code = e.code(), error = %e, "Console failed, leaving menu");
                    break Err(e);
                }
            }
        };
        let finished = self.finish();
        outcome.and(finished)
    }

    /// Show the menu and handle one choice; false once the user exits
    fn step(&mut self) -> AppResult<bool> {
        self.print_menu()?;
        let choice = self
            .console
            .prompt_choice("Option", 1, MenuAction::ALL.len())?;
        let Some(action) = MenuAction::from_choice(choice) else {
            return Ok(true);
        };

        match action {
            MenuAction::ShowZones => self.show_zones()?,
            MenuAction::EditClimate => self.edit_climate()?,
            MenuAction::EnterReading => self.enter_reading()?,
            MenuAction::ShowSummary => self.show_summary()?,
            MenuAction::Save => {
                let outcome = self.save();
                self.report_outcome(outcome)?;
            }
            MenuAction::ExportReport => {
                let outcome = self.export_report();
                self.report_outcome(outcome)?;
            }
            MenuAction::Exit => return Ok(false),
        }
        Ok(true)
    }

    fn print_menu(&mut self) -> AppResult<()> {
        self.console.println("")?;
        self.console.println("AIR QUALITY MONITOR")?;
        for (index, action) in MenuAction::ALL.iter().enumerate() {
            self.console
                .println(&format!("  {}. {}", index + 1, action.label()))?;
        }
        Ok(())
    }

    /// Pick a zone by its number or by name, ignoring case
    fn select_zone(&mut self) -> AppResult<ZoneId> {
        for (index, zone) in ZoneId::ALL.iter().enumerate() {
            self.console.println(&format!("  {}. {}", index + 1, zone))?;
        }
        loop {
            self.console
                .print(&format!("Zone [1-{} or name]: ", ZoneId::ALL.len()))?;
            let answer = self.console.read_line()?;
            let by_number = answer
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| ZoneId::ALL.get(i).copied());
            match by_number.or_else(|| ZoneId::from_name_ignore_case(&answer)) {
                Some(zone) => return Ok(zone),
                None => self.console.println(&format!("Unknown zone: {}", answer))?,
            }
        }
    }

    fn show_zones(&mut self) -> AppResult<()> {
        let overview = render_zone_overview(&self.store);
        self.console.print(&overview)
    }

    fn edit_climate(&mut self) -> AppResult<()> {
        let zone = self.select_zone()?;
        let temperature = self
            .console
            .prompt_decimal("Temperature (°C)", TEMPERATURE_RANGE)?;
        let wind_speed = self
            .console
            .prompt_decimal("Wind speed (m/s)", WIND_SPEED_RANGE)?;
        let humidity = self.console.prompt_decimal("Humidity (%)", HUMIDITY_RANGE)?;

        self.store
            .set_climate(zone, ClimateReading::new(temperature, wind_speed, humidity));
        self.dirty = true;
        tracing::info!(zone = %zone, %temperature, %wind_speed, %humidity, "Climate updated");
        self.console.println(&format!("Climate for {} updated.", zone))
    }

    fn enter_reading(&mut self) -> AppResult<()> {
        let zone = self.select_zone()?;
        for pollutant in Pollutant::ALL {
            let prompt = format!("{} ({})", pollutant.label(), pollutant.unit());
            let value = self
                .console
                .prompt_decimal(&prompt, concentration_range(pollutant))?;
            self.store.set_current_reading(zone, pollutant, value);
            tracing::debug!(zone = %zone, pollutant = %pollutant, %value, "Current reading set");
        }
        self.dirty = true;
        tracing::info!(zone = %zone, "Current readings updated");
        self.console
            .println(&format!("Current readings for {} updated.", zone))
    }

    fn show_summary(&mut self) -> AppResult<()> {
        self.refresh();
        let summary = render_summary(&assess_all(&self.store));
        self.console.print(&summary)
    }

    fn save(&mut self) -> AppResult<String> {
        let rows = self.persistence.save(&self.store)?;
        self.dirty = false;
        Ok(format!(
            "Saved {} rows to {}.",
            rows,
            self.persistence.path().display()
        ))
    }

    fn export_report(&mut self) -> AppResult<String> {
        self.refresh();
        let assessments = assess_all(&self.store);
        let path = self.reporting.export(&assessments, Utc::now())?;
        Ok(format!("Report written to {}.", path.display()))
    }

    /// Print a success message or a non-fatal error; closed input still propagates
    fn report_outcome(&mut self, outcome: AppResult<String>) -> AppResult<()> {
        match outcome {
            Ok(message) => self.console.println(&message),
            Err(AppError::InputClosed) => Err(AppError::InputClosed),
            Err(e) => {
                tracing::warn!(code = e.code(), error = %e, "Operation failed");
                self.console.println(&format!("Error [{}]: {}", e.code(), e))
            }
        }
    }

    fn refresh(&mut self) {
        self.store.recompute_all(self.window_days);
        tracing::debug!(window_days = self.window_days, "Derived figures recomputed");
    }

    fn finish(&mut self) -> AppResult<()> {
        if !self.dirty {
            return self.console.println("Goodbye.");
        }
        if self.autosave_on_exit {
            let outcome = self.save();
            self.report_outcome(outcome)?;
        } else {
            self.console
                .println("Warning: unsaved changes were discarded.")?;
        }
        self.console.println("Goodbye.")
    }
}
