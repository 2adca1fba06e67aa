//! Terminal User Interface for the system information menu.
//!
//! A blocking, single-threaded loop: draw the menu, wait for one key, show one
//! screen, wait for one key, repeat.

mod app;
mod event_handler;
mod render;
mod session;
mod viewport;
mod widgets;

pub use app::{run_menu_app, MenuController};
pub use event_handler::{CrosstermKeys, KeySource, MenuAction, MenuInput};
pub use render::{
    plan_menu, plan_notice, plan_screen, Content, DrawOp, ScreenPlan, FOOTER, MENU_PROMPT,
    MENU_TITLE, TRUNCATION_NOTICE,
};
pub use session::TerminalSession;
pub use viewport::Viewport;
