use std::time::Duration;

use sysmenu::core::system_monitor::SamplerConfig;
use sysmenu::ui::menu_tui::{MenuAction, MenuController, MenuInput, MENU_TITLE};

use super::support::{
    key, screen_lines, scripted_viewport, test_viewport, RecordingProvider, ScriptedKeys,
};

fn instant_sampler() -> SamplerConfig {
    SamplerConfig {
        interval: Duration::ZERO,
        duration: Duration::ZERO,
    }
}

fn run_with_keys(
    provider: RecordingProvider,
    keys: &[char],
) -> MenuController<RecordingProvider, ratatui::backend::TestBackend, super::support::ScriptedKeys>
{
    let viewport = test_viewport(80, 24, keys);
    let mut controller = MenuController::new(provider, viewport, instant_sampler());
    controller.run().expect("menu loop should exit on '0'");
    controller
}

#[test]
fn test_each_selection_queries_once_and_returns_to_menu() {
    let expected = [
        ('1', "system_identity"),
        ('2', "cpu_info"),
        ('3', "memory_info"),
        ('4', "disks"),
        ('5', "network_info"),
        ('7', "processes"),
        ('8', "uptime"),
        ('9', "disk_io"),
    ];

    for (key, call) in expected {
        // select, dismiss the screen, quit
        let controller = run_with_keys(RecordingProvider::default(), &[key, ' ', '0']);

        assert_eq!(controller.provider().calls, vec![call], "key {}", key);
        assert_eq!(controller.viewport().keys().remaining(), 0);
        assert_eq!(screen_lines(controller.viewport())[0], MENU_TITLE);
    }
}

#[test]
fn test_plot_selection_samples_then_waits() {
    let controller = run_with_keys(RecordingProvider::default(), &['6', ' ', '0']);

    assert_eq!(controller.provider().calls, vec!["measure_cpu_load"]);
    assert_eq!(controller.viewport().keys().remaining(), 0);
}

#[test]
fn test_quit_key_exits_immediately() {
    let controller = run_with_keys(RecordingProvider::default(), &['0', '1']);

    assert!(controller.provider().calls.is_empty());
    assert_eq!(controller.viewport().keys().remaining(), 1);
}

#[test]
fn test_unrecognized_keys_only_redraw() {
    let controller = run_with_keys(RecordingProvider::default(), &['x', 'q', '?', '0']);

    assert!(controller.provider().calls.is_empty());
    assert_eq!(screen_lines(controller.viewport())[0], MENU_TITLE);
}

#[test]
fn test_failed_query_shows_placeholder() {
    let provider = RecordingProvider {
        fail_disk_io: true,
        ..Default::default()
    };
    let viewport = test_viewport(80, 24, &[' ']);
    let mut controller = MenuController::new(provider, viewport, instant_sampler());

    controller
        .dispatch(MenuAction::DiskIo)
        .expect("unavailable metrics must not abort the loop");

    let lines = screen_lines(controller.viewport());
    assert_eq!(lines[0], "Disk Performance");
    assert!(lines[2].starts_with("Unavailable: Metrics unavailable: diskstats missing"));
}

#[test]
fn test_detail_screen_renders_unit_converted_values() {
    let viewport = test_viewport(80, 24, &[' ']);
    let mut controller =
        MenuController::new(RecordingProvider::default(), viewport, instant_sampler());

    controller.dispatch(MenuAction::MemoryInfo).unwrap();

    let lines = screen_lines(controller.viewport());
    assert_eq!(lines[0], "Memory Information");
    assert_eq!(lines[2], "Query: memory_info");
    assert_eq!(lines[3], "Total Memory: 1.00 GB");
}

#[test]
fn test_key_source_failure_propagates() {
    // No dismissal key scripted
    let viewport = test_viewport(80, 24, &['1']);
    let mut controller =
        MenuController::new(RecordingProvider::default(), viewport, instant_sampler());

    assert!(controller.run().is_err());
}

#[test]
fn test_resize_at_menu_redraws_without_dispatch() {
    let keys = ScriptedKeys::from_inputs([MenuInput::Resize, MenuInput::Resize, key('0')]);
    let viewport = scripted_viewport(80, 24, keys);
    let mut controller =
        MenuController::new(RecordingProvider::default(), viewport, instant_sampler());

    controller.run().unwrap();

    assert!(controller.provider().calls.is_empty());
    assert_eq!(controller.viewport().keys().remaining(), 0);
    assert_eq!(screen_lines(controller.viewport())[0], MENU_TITLE);
}

#[test]
fn test_resize_on_detail_screen_keeps_it_open() {
    // The resize redraws the record; only the following key returns to the menu
    let keys = ScriptedKeys::from_inputs([key('3'), MenuInput::Resize, key(' '), key('0')]);
    let viewport = scripted_viewport(80, 24, keys);
    let mut controller =
        MenuController::new(RecordingProvider::default(), viewport, instant_sampler());

    controller.run().unwrap();

    assert_eq!(controller.provider().calls, vec!["memory_info"]);
    assert_eq!(controller.viewport().keys().remaining(), 0);
}

#[test]
fn test_ctrl_c_at_menu_quits() {
    let keys = ScriptedKeys::from_inputs([MenuInput::Interrupt, key('1')]);
    let viewport = scripted_viewport(80, 24, keys);
    let mut controller =
        MenuController::new(RecordingProvider::default(), viewport, instant_sampler());

    controller.run().unwrap();

    assert!(controller.provider().calls.is_empty());
    assert_eq!(controller.viewport().keys().remaining(), 1);
}

#[test]
fn test_ctrl_c_on_detail_screen_quits() {
    let keys = ScriptedKeys::from_inputs([key('8'), MenuInput::Interrupt, key('1')]);
    let viewport = scripted_viewport(80, 24, keys);
    let mut controller =
        MenuController::new(RecordingProvider::default(), viewport, instant_sampler());

    controller.run().unwrap();

    assert_eq!(controller.provider().calls, vec!["uptime"]);
    assert_eq!(controller.viewport().keys().remaining(), 1);
}

#[test]
fn test_ctrl_c_during_sampling_quits() {
    let mut keys = ScriptedKeys::from_inputs([key('6'), key('1')]);
    keys.pending_interrupt = true;
    let viewport = scripted_viewport(80, 24, keys);
    let sampler = SamplerConfig {
        interval: Duration::ZERO,
        duration: Duration::from_secs(60),
    };
    let mut controller = MenuController::new(RecordingProvider::default(), viewport, sampler);

    controller.run().unwrap();

    // One sample is taken before the interrupt is noticed; the plot is never shown
    assert_eq!(controller.provider().calls, vec!["measure_cpu_load"]);
    assert_eq!(controller.viewport().keys().remaining(), 1);
}
