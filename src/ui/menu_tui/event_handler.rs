use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::Result;

/// Actions selectable from the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    SystemIdentity,
    CpuInfo,
    MemoryInfo,
    DiskInfo,
    NetworkInfo,
    CpuPlot,
    ProcessList,
    Uptime,
    DiskIo,
    /// Leave the program
    Quit,
    /// Unrecognized key: redraw the menu
    None,
}

impl MenuAction {
    pub fn from_key(code: KeyCode) -> Self {
        match code {
            KeyCode::Char('1') => MenuAction::SystemIdentity,
            KeyCode::Char('2') => MenuAction::CpuInfo,
            KeyCode::Char('3') => MenuAction::MemoryInfo,
            KeyCode::Char('4') => MenuAction::DiskInfo,
            KeyCode::Char('5') => MenuAction::NetworkInfo,
            KeyCode::Char('6') => MenuAction::CpuPlot,
            KeyCode::Char('7') => MenuAction::ProcessList,
            KeyCode::Char('8') => MenuAction::Uptime,
            KeyCode::Char('9') => MenuAction::DiskIo,
            KeyCode::Char('0') => MenuAction::Quit,
            _ => MenuAction::None,
        }
    }
}

/// What the terminal reported while a screen was waiting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuInput {
    Key(KeyCode),
    /// The viewport changed size; the current screen must be laid out again
    Resize,
    /// Ctrl-C: leave the program from wherever it is
    Interrupt,
}

impl MenuInput {
    /// Translate a terminal event; `None` for events the menu ignores
    pub fn from_event(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(if is_interrupt(&key) {
                MenuInput::Interrupt
            } else {
                MenuInput::Key(key.code)
            }),
            Event::Resize(_, _) => Some(MenuInput::Resize),
            _ => None,
        }
    }
}

fn is_interrupt(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
}

/// Blocking source of key presses and terminal notifications
pub trait KeySource {
    /// Block until the next input the menu reacts to.
    fn next_input(&mut self) -> Result<MenuInput>;

    /// Non-blocking check for an interrupt typed while no screen was waiting.
    fn interrupt_pending(&mut self) -> Result<bool> {
        Ok(false)
    }
}

/// Reads key presses from the terminal through crossterm
#[derive(Debug, Default)]
pub struct CrosstermKeys;

impl KeySource for CrosstermKeys {
    fn next_input(&mut self) -> Result<MenuInput> {
        loop {
            // Release and repeat events are reported on some platforms
            if let Some(input) = MenuInput::from_event(event::read()?) {
                return Ok(input);
            }
        }
    }

    // Keys typed during a long measurement are dropped, except Ctrl-C
    fn interrupt_pending(&mut self) -> Result<bool> {
        while event::poll(Duration::ZERO)? {
            if MenuInput::from_event(event::read()?) == Some(MenuInput::Interrupt) {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
