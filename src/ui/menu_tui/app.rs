use std::io;

use anyhow::{Context, Result};
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};

use crate::core::config::Config;
use crate::core::system_info::{CpuLoadSource, MetricSnapshot, MetricsProvider, SysinfoProvider};
use crate::core::system_monitor::{sample_until, SamplerConfig};
use crate::error::{Result as MenuResult, SysMenuError};

use super::event_handler::{CrosstermKeys, KeySource, MenuAction, MenuInput};
use super::render::Content;
use super::session::TerminalSession;
use super::viewport::Viewport;

/// Drives the menu: one provider call and one screen per selection
pub struct MenuController<P, B: Backend, K: KeySource> {
    provider: P,
    viewport: Viewport<B, K>,
    sampler: SamplerConfig,
}

impl<P, B, K> MenuController<P, B, K>
where
    P: MetricsProvider + CpuLoadSource,
    B: Backend,
    K: KeySource,
{
    pub fn new(provider: P, viewport: Viewport<B, K>, sampler: SamplerConfig) -> Self {
        Self {
            provider,
            viewport,
            sampler,
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn viewport(&self) -> &Viewport<B, K> {
        &self.viewport
    }

    /// Loop until the quit key or Ctrl-C is pressed
    pub fn run(&mut self) -> MenuResult<()> {
        loop {
            self.viewport.show_menu(self.sampler.duration.as_secs())?;

            let key = match self.viewport.next_input()? {
                MenuInput::Key(key) => key,
                MenuInput::Resize => continue,
                MenuInput::Interrupt => {
                    log::info!("Interrupted at the menu");
                    return Ok(());
                }
            };

            match MenuAction::from_key(key) {
                MenuAction::Quit => {
                    log::info!("Quit selected");
                    return Ok(());
                }
                MenuAction::None => continue,
                action => {
                    log::debug!("Dispatching {:?}", action);
                    match self.dispatch(action) {
                        Err(SysMenuError::Interrupted) => {
                            log::info!("Interrupted during {:?}", action);
                            return Ok(());
                        }
                        other => other?,
                    }
                }
            }
        }
    }

    /// Run one selection: query, render, wait for acknowledgment
    pub fn dispatch(&mut self, action: MenuAction) -> MenuResult<()> {
        match action {
            MenuAction::SystemIdentity => {
                let snapshot = self.provider.system_identity();
                self.present_snapshot("System Information", snapshot)
            }
            MenuAction::CpuInfo => {
                let snapshot = self.provider.cpu_info();
                self.present_snapshot("CPU Information", snapshot)
            }
            MenuAction::MemoryInfo => {
                let snapshot = self.provider.memory_info();
                self.present_snapshot("Memory Information", snapshot)
            }
            MenuAction::DiskInfo => match self.provider.disks() {
                Ok(disks) => self
                    .viewport
                    .present("Disk Information", Content::Disks(&disks)),
                Err(e) => self.present_unavailable("Disk Information", e),
            },
            MenuAction::NetworkInfo => {
                let snapshot = self.provider.network_info();
                self.present_snapshot("Network Information", snapshot)
            }
            MenuAction::CpuPlot => self.plot_cpu_usage(),
            MenuAction::ProcessList => match self.provider.processes() {
                Ok(processes) => self
                    .viewport
                    .present("Running Processes", Content::Processes(&processes)),
                Err(e) => self.present_unavailable("Running Processes", e),
            },
            MenuAction::Uptime => {
                let snapshot = self.provider.uptime();
                self.present_snapshot("System Uptime", snapshot)
            }
            MenuAction::DiskIo => {
                let snapshot = self.provider.disk_io();
                self.present_snapshot("Disk Performance", snapshot)
            }
            MenuAction::Quit | MenuAction::None => Ok(()),
        }
    }

    fn plot_cpu_usage(&mut self) -> MenuResult<()> {
        const TITLE: &str = "CPU Usage Over Time";

        self.viewport.show_notice(
            TITLE,
            &format!(
                "Sampling CPU usage for {} seconds, please wait...",
                self.sampler.duration.as_secs()
            ),
        )?;

        let viewport = &mut self.viewport;
        match sample_until(
            &mut self.provider,
            self.sampler.interval,
            self.sampler.duration,
            || viewport.interrupt_pending(),
        ) {
            Ok(log) => self.viewport.present_plot(TITLE, &log),
            Err(SysMenuError::Interrupted) => Err(SysMenuError::Interrupted),
            Err(e) => self.present_unavailable(TITLE, e),
        }
    }

    fn present_snapshot(
        &mut self,
        title: &str,
        snapshot: MenuResult<MetricSnapshot>,
    ) -> MenuResult<()> {
        match snapshot {
            Ok(snapshot) => self.viewport.present(title, Content::Record(&snapshot)),
            Err(e) => self.present_unavailable(title, e),
        }
    }

    fn present_unavailable(&mut self, title: &str, error: SysMenuError) -> MenuResult<()> {
        log::warn!("{}: {}", title, error);
        let reason = error.to_string();
        self.viewport.present(title, Content::Unavailable(&reason))
    }
}

/// Run the interactive menu on the real terminal
pub fn run_menu_app(config: &Config) -> Result<()> {
    let session = TerminalSession::acquire().context("Failed to initialize terminal")?;

    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    let viewport = Viewport::new(terminal, CrosstermKeys);

    let mut controller =
        MenuController::new(SysinfoProvider::new(), viewport, config.sampler_config());

    let outcome = controller.run().context("Menu loop failed");

    // Restore the terminal before the caller reports any error
    drop(controller);
    drop(session);

    outcome
}
