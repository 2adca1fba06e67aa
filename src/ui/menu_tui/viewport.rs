use ratatui::{
    backend::Backend,
    layout::{Constraint, Layout},
    widgets::Paragraph,
    Terminal,
};

use super::event_handler::{KeySource, MenuInput};
use super::render::{plan_menu, plan_notice, plan_screen, render_plan, Content, ScreenPlan, FOOTER};
use super::widgets::cpu_usage_chart;
use crate::core::system_monitor::SampleLog;
use crate::error::{Result, SysMenuError};

fn tui_error(e: impl std::fmt::Display) -> SysMenuError {
    SysMenuError::tui(e.to_string())
}

/// The bounded drawing surface plus the keyboard that dismisses it
///
/// Owns the terminal for the whole session; only one screen is shown at a
/// time and every detail screen blocks until a key is pressed.
pub struct Viewport<B: Backend, K: KeySource> {
    terminal: Terminal<B>,
    keys: K,
}

impl<B: Backend, K: KeySource> Viewport<B, K> {
    pub fn new(terminal: Terminal<B>, keys: K) -> Self {
        Self { terminal, keys }
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn keys(&self) -> &K {
        &self.keys
    }

    /// Block until the next key, resize or interrupt
    pub fn next_input(&mut self) -> Result<MenuInput> {
        self.keys.next_input()
    }

    /// True when Ctrl-C was typed since the last screen was dismissed
    pub fn interrupt_pending(&mut self) -> bool {
        self.keys.interrupt_pending().unwrap_or_else(|e| {
            log::warn!("Could not poll for interrupt: {}", e);
            false
        })
    }

    pub fn show_menu(&mut self, plot_secs: u64) -> Result<()> {
        self.clear()?;
        self.draw_plan(|width, height| plan_menu(plot_secs, width, height))
    }

    /// Draw a notice without waiting for acknowledgment
    pub fn show_notice(&mut self, title: &str, message: &str) -> Result<()> {
        self.clear()?;
        self.draw_plan(|width, height| plan_notice(title, message, width, height))
    }

    /// Render one detail screen and block until any key dismisses it.
    ///
    /// A resize lays the screen out again for the new size.
    pub fn present(&mut self, title: &str, content: Content<'_>) -> Result<()> {
        loop {
            self.clear()?;
            self.draw_plan(|width, height| plan_screen(title, content, width, height))?;
            if self.dismissed()? {
                return Ok(());
            }
        }
    }

    /// Chart a finished sample log and block until any key dismisses it
    pub fn present_plot(&mut self, title: &str, log: &SampleLog) -> Result<()> {
        if log.is_empty() {
            return self.present(title, Content::Unavailable("no samples were collected"));
        }

        let points = log.points();
        loop {
            self.clear()?;
            self.terminal
                .draw(|frame| {
                    let [chart_area, footer_area] =
                        Layout::vertical([Constraint::Min(0), Constraint::Length(1)])
                            .areas(frame.area());

                    frame.render_widget(cpu_usage_chart(title, &points, log), chart_area);
                    frame.render_widget(Paragraph::new(FOOTER), footer_area);
                })
                .map_err(tui_error)?;

            if self.dismissed()? {
                return Ok(());
            }
        }
    }

    fn draw_plan<F>(&mut self, layout: F) -> Result<()>
    where
        F: FnOnce(u16, u16) -> ScreenPlan,
    {
        self.terminal
            .draw(|frame| {
                let area = frame.area();
                let plan = layout(area.width, area.height);
                render_plan(frame, &plan);
            })
            .map_err(tui_error)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.terminal.clear().map_err(tui_error)
    }

    /// Wait on a shown screen: `Ok(false)` means redraw and keep waiting
    fn dismissed(&mut self) -> Result<bool> {
        match self.next_input()? {
            MenuInput::Key(key) => {
                log::trace!("Screen dismissed with {:?}", key);
                Ok(true)
            }
            MenuInput::Resize => {
                log::debug!("Viewport resized, redrawing");
                Ok(false)
            }
            MenuInput::Interrupt => Err(SysMenuError::Interrupted),
        }
    }
}
