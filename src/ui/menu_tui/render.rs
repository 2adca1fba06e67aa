//! Row-addressed screen layouts.
//!
//! Every screen is first laid out as a `ScreenPlan` of (row, text) pairs for a
//! known viewport size, then painted in one frame. Laying out is pure, so the
//! truncation rules can be checked without a terminal.

use ratatui::{prelude::*, widgets::Paragraph};

use crate::core::system_info::{DiskRecord, MetricSnapshot, ProcessRecord};
use crate::error::{Result, SysMenuError};
use crate::ui::formatters::{fit_to_width, format_disk_value, format_record_value};

/// First row of content; row 0 holds the title and row 1 stays blank
pub const FIRST_ROW: u16 = 2;
pub const TRUNCATION_NOTICE: &str = "Press any key to exit...";
pub const FOOTER: &str = "Press any key to return to the menu...";
pub const MENU_TITLE: &str = "System Information Menu";
pub const MENU_PROMPT: &str = "Make a selection (0-9):";
const SEPARATOR_WIDTH: usize = 40;

/// What a detail screen shows under its title
#[derive(Debug, Clone, Copy)]
pub enum Content<'a> {
    Record(&'a MetricSnapshot),
    Disks(&'a [DiskRecord]),
    Processes(&'a [ProcessRecord]),
    /// Placeholder for a query that failed
    Unavailable(&'a str),
}

/// A single line of text at a fixed row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawOp {
    pub row: u16,
    pub text: String,
    pub bold: bool,
}

/// Lines queued for one frame of a `width` x `height` viewport
#[derive(Debug, Clone)]
pub struct ScreenPlan {
    width: u16,
    height: u16,
    ops: Vec<DrawOp>,
}

impl ScreenPlan {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Text drawn last at `row`, if any
    pub fn text_at(&self, row: u16) -> Option<&str> {
        self.ops
            .iter()
            .rev()
            .find(|op| op.row == row)
            .map(|op| op.text.as_str())
    }

    pub fn contains(&self, text: &str) -> bool {
        self.ops.iter().any(|op| op.text.contains(text))
    }

    /// Queue `text` at `row`; rows past the bottom edge are refused.
    pub fn put(&mut self, row: u16, text: impl AsRef<str>) -> Result<()> {
        self.push(row, text.as_ref(), false)
    }

    pub fn put_bold(&mut self, row: u16, text: impl AsRef<str>) -> Result<()> {
        self.push(row, text.as_ref(), true)
    }

    fn push(&mut self, row: u16, text: &str, bold: bool) -> Result<()> {
        if row >= self.height {
            return Err(SysMenuError::ViewportTooSmall {
                row,
                height: self.height,
            });
        }

        self.ops.push(DrawOp {
            row,
            text: fit_to_width(text, self.width as usize),
            bold,
        });
        Ok(())
    }

    /// Rows at or past this index are replaced by the truncation notice
    fn row_limit(&self) -> u16 {
        self.height.saturating_sub(2)
    }

    fn truncate(&mut self) -> Result<()> {
        let last = self.height.saturating_sub(1);
        self.put(last, TRUNCATION_NOTICE)
    }
}

/// Lay out a detail screen. Drawing stops silently at the viewport edge.
pub fn plan_screen(title: &str, content: Content<'_>, width: u16, height: u16) -> ScreenPlan {
    let mut plan = ScreenPlan::new(width, height);

    let drawn = match content {
        Content::Record(snapshot) => lay_out_record(&mut plan, title, snapshot),
        Content::Disks(disks) => lay_out_disks(&mut plan, title, disks),
        Content::Processes(processes) => lay_out_processes(&mut plan, title, processes),
        Content::Unavailable(reason) => lay_out_unavailable(&mut plan, title, reason),
    };

    if let Err(e) = drawn {
        log::trace!("Stopped drawing '{}': {}", title, e);
    }

    plan
}

/// Lay out the main menu
pub fn plan_menu(plot_secs: u64, width: u16, height: u16) -> ScreenPlan {
    let mut plan = ScreenPlan::new(width, height);

    let items = [
        "1. Show System Information".to_string(),
        "2. Show CPU Information".to_string(),
        "3. Show Memory Information".to_string(),
        "4. Show Disk Information".to_string(),
        "5. Show Network Information".to_string(),
        format!("6. CPU Usage Plot (samples for {} seconds)", plot_secs),
        "7. Show Running Processes".to_string(),
        "8. System Uptime".to_string(),
        "9. Disk Performance".to_string(),
        "0. Exit".to_string(),
    ];

    if let Err(e) = lay_out_menu(&mut plan, &items) {
        log::trace!("Menu clipped: {}", e);
    }

    plan
}

/// Lay out a one-line notice, used while a long measurement runs
pub fn plan_notice(title: &str, message: &str, width: u16, height: u16) -> ScreenPlan {
    let mut plan = ScreenPlan::new(width, height);
    if plan.put_bold(0, title).is_ok() {
        let _ = plan.put(FIRST_ROW, message);
    }
    plan
}

fn lay_out_menu(plan: &mut ScreenPlan, items: &[String]) -> Result<()> {
    plan.put_bold(0, MENU_TITLE)?;

    let mut row = FIRST_ROW;
    for item in items {
        plan.put(row, item)?;
        row += 1;
    }

    plan.put(row + 1, MENU_PROMPT)
}

fn lay_out_record(plan: &mut ScreenPlan, title: &str, snapshot: &MetricSnapshot) -> Result<()> {
    plan.put_bold(0, title)?;

    let mut row = FIRST_ROW;
    for (label, value) in snapshot.iter() {
        if row >= plan.row_limit() {
            return plan.truncate();
        }
        plan.put(row, format!("{}: {}", label, format_record_value(label, value)))?;
        row += 1;
    }

    plan.put(row + 1, FOOTER)
}

fn lay_out_disks(plan: &mut ScreenPlan, title: &str, disks: &[DiskRecord]) -> Result<()> {
    plan.put_bold(0, title)?;

    let mut row = FIRST_ROW;
    for disk in disks {
        for (label, value) in disk.fields() {
            if row >= plan.row_limit() {
                return plan.truncate();
            }
            plan.put(row, format!("{}: {}", label, format_disk_value(&value)))?;
            row += 1;
        }
        plan.put(row, "-".repeat(SEPARATOR_WIDTH))?;
        row += 1;
    }

    plan.put(row + 1, FOOTER)
}

fn lay_out_processes(
    plan: &mut ScreenPlan,
    title: &str,
    processes: &[ProcessRecord],
) -> Result<()> {
    plan.put_bold(0, title)?;

    let mut row = FIRST_ROW;
    for process in processes {
        if row >= plan.row_limit() {
            return plan.truncate();
        }
        plan.put(
            row,
            format!(
                "PID: {} - Name: {} - User: {}",
                process.pid,
                process.name,
                process.user.as_deref().unwrap_or("-")
            ),
        )?;
        row += 1;
    }

    plan.put(row + 1, FOOTER)
}

fn lay_out_unavailable(plan: &mut ScreenPlan, title: &str, reason: &str) -> Result<()> {
    plan.put_bold(0, title)?;
    plan.put(FIRST_ROW, format!("Unavailable: {}", reason))?;
    plan.put(FIRST_ROW + 2, FOOTER)
}

/// Paint a plan into the frame, one paragraph per line
pub fn render_plan(frame: &mut Frame, plan: &ScreenPlan) {
    let area = frame.area();

    for op in plan.ops() {
        if op.row >= area.height {
            continue;
        }

        let style = if op.bold {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let line_area = Rect::new(area.x, area.y + op.row, area.width, 1);
        frame.render_widget(
            Paragraph::new(Line::styled(op.text.clone(), style)),
            line_area,
        );
    }
}
