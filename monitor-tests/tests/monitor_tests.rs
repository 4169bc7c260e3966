//! Integration Tests für Taster, Temperatur und Seiten-Rendering
//!
//! Diese Tests laufen auf dem Host (x86_64) und nutzen MockButton / MockAdc

mod common;

use common::{MockAdc, MockButton, TestBoard};
use monitor_core::{
    ButtonChannel, ChannelId, Page, StatusSnapshot, StatusText, TemperatureCalibration,
    TemperatureSampler, Transition, render_page,
};

// ============================================================================
// Tests: Taster-Überwachung
// ============================================================================

#[test]
fn test_identical_reads_change_text_only_once() {
    let board = TestBoard::new();
    let mut channel = ButtonChannel::new(
        ChannelId::BUTTON_1,
        MockButton::scripted(&[true, true, true, true, true]),
    );

    let transitions: Vec<_> = (0..5).map(|_| channel.poll_channel(&board)).collect();

    assert_eq!(
        transitions,
        vec![Some(Transition::Pressed), None, None, None, None]
    );
    assert_eq!(
        board.snapshot().buttons[0].as_str(),
        "Taster 1 wurde gedrückt!"
    );
}

#[test]
fn test_text_stable_between_transitions() {
    let board = TestBoard::new();
    let mut channel = ButtonChannel::new(
        ChannelId::BUTTON_2,
        MockButton::scripted(&[false, true, true, false, false]),
    );

    let mut texts = Vec::new();
    for _ in 0..5 {
        channel.poll_channel(&board);
        texts.push(board.snapshot().buttons[1].clone());
    }

    assert_eq!(texts[0].as_str(), "Kein Ereignis an Taster 2");
    assert_eq!(texts[1].as_str(), "Taster 2 wurde gedrückt!");
    assert_eq!(texts[1], texts[2]);
    assert_eq!(texts[3].as_str(), "Taster 2 wurde losgelassen!");
    assert_eq!(texts[3], texts[4]);
}

#[test]
fn test_bounce_is_not_filtered() {
    // Jede Pegeländerung ist eine Flanke, auch wenn sie nur ein Poll dauert
    let board = TestBoard::new();
    let mut channel = ButtonChannel::new(
        ChannelId::BUTTON_1,
        MockButton::scripted(&[true, false, true, false]),
    );

    let edges = (0..4)
        .filter_map(|_| channel.poll_channel(&board))
        .count();
    assert_eq!(edges, 4);
}

#[test]
fn test_press_on_channel_a_leaves_channel_b_untouched() {
    let board = TestBoard::new();
    let mut button_a = ButtonChannel::new(ChannelId::BUTTON_1, MockButton::scripted(&[false, true]));
    let mut button_b = ButtonChannel::new(ChannelId::BUTTON_2, MockButton::released());

    // Iteration 1: beide losgelassen
    assert_eq!(button_a.poll_channel(&board), None);
    assert_eq!(button_b.poll_channel(&board), None);

    // Iteration 2: A gedrückt
    assert_eq!(button_a.poll_channel(&board), Some(Transition::Pressed));
    assert_eq!(button_b.poll_channel(&board), None);

    let snapshot = board.snapshot();
    assert_eq!(snapshot.buttons[0].as_str(), "Taster 1 wurde gedrückt!");
    assert_eq!(snapshot.buttons[1].as_str(), "Kein Ereignis an Taster 2");
}

// ============================================================================
// Tests: Temperatur
// ============================================================================

#[test]
fn test_mid_scale_matches_linear_formula() {
    let board = TestBoard::new();
    let mut sampler = TemperatureSampler::new(MockAdc::constant(2048));

    let celsius = sampler.sample_temperature(&board);

    let voltage = 2048.0_f64 * (3.3 / 4096.0);
    let expected = 27.0 - (voltage - 0.706) / 0.001721;
    assert!((f64::from(celsius) - expected).abs() < 1e-3);
    assert_eq!(board.snapshot().temperature.as_str(), "-521.52 °C");
}

#[test]
fn test_room_temperature_reading() {
    let board = TestBoard::new();
    let mut sampler = TemperatureSampler::new(MockAdc::constant(876));

    sampler.sample_temperature(&board);

    assert_eq!(board.snapshot().temperature.as_str(), "27.14 °C");
}

#[test]
fn test_previous_reading_has_no_influence() {
    let board_a = TestBoard::new();
    let board_b = TestBoard::new();
    let mut sampler_a = TemperatureSampler::new(MockAdc::scripted(&[100, 900]));
    let mut sampler_b = TemperatureSampler::new(MockAdc::scripted(&[3000, 900]));

    sampler_a.sample_temperature(&board_a);
    sampler_b.sample_temperature(&board_b);
    assert_ne!(board_a.snapshot().temperature, board_b.snapshot().temperature);

    sampler_a.sample_temperature(&board_a);
    sampler_b.sample_temperature(&board_b);
    assert_eq!(board_a.snapshot().temperature, board_b.snapshot().temperature);
}

#[test]
fn test_out_of_range_code_still_formats() {
    let board = TestBoard::new();
    let mut sampler = TemperatureSampler::new(MockAdc::constant(u16::MAX));

    let celsius = sampler.sample_temperature(&board);

    assert!(celsius < -30000.0);
    assert!(board.snapshot().temperature.as_str().ends_with(" °C"));
}

#[test]
fn test_custom_calibration() {
    let board = TestBoard::new();
    let calibration = TemperatureCalibration {
        t0: 25.0,
        ..TemperatureCalibration::DEFAULT
    };
    let mut sampler = TemperatureSampler::with_calibration(MockAdc::constant(876), calibration);

    let celsius = sampler.sample_temperature(&board);

    assert!((celsius - 25.138).abs() < 0.01);
    assert_eq!(sampler.calibration(), calibration);
}

// ============================================================================
// Tests: Rendering
// ============================================================================

fn text(s: &str) -> StatusText {
    let mut t = StatusText::new();
    t.push_str(s).unwrap();
    t
}

#[test]
fn test_render_is_byte_identical_for_same_texts() {
    let snapshot = StatusSnapshot {
        buttons: [text("A"), text("B")],
        temperature: text("21.00 °C"),
    };
    let mut first = Page::new();
    let mut second = Page::new();

    render_page(&snapshot, &mut first);
    render_page(&snapshot, &mut second);
    render_page(&snapshot, &mut second);

    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[test]
fn test_render_embeds_texts_verbatim() {
    // Kein HTML-Escaping
    let snapshot = StatusSnapshot {
        buttons: [text("<b>fett</b>"), text("a & b")],
        temperature: text("\"x\""),
    };
    let mut page = Page::new();

    render_page(&snapshot, &mut page);

    assert!(page.contains("<p>Taster 1: <b>fett</b></p>"));
    assert!(page.contains("<p>Taster 2: a & b</p>"));
    assert!(page.contains("<p>Temperatur: \"x\"</p>"));
}

#[test]
fn test_render_with_full_length_texts_fits() {
    let long = "x".repeat(monitor_core::STATUS_TEXT_CAPACITY);
    let snapshot = StatusSnapshot {
        buttons: [text(&long), text(&long)],
        temperature: text(&long),
    };
    let mut page = Page::new();

    let truncated = render_page(&snapshot, &mut page);

    assert!(!truncated);
    assert!(page.ends_with("</html>\r\n"));
    assert!(page.len() <= monitor_core::PAGE_CAPACITY);
}

#[test]
fn test_render_has_auto_refresh() {
    let board = TestBoard::new();
    let mut page = Page::new();

    render_page(&board.snapshot(), &mut page);

    assert!(page.contains("location.reload();"));
    assert!(page.contains(&format!("}},{});", monitor_core::REFRESH_INTERVAL_MS)));
}
