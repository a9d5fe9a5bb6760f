// SPDX-License-Identifier: MPL-2.0
use iced::futures::channel::mpsc;
use iced::futures::StreamExt;
use iced::{Point, Size};
use nightread::app::config::{self, Config, DEFAULT_COFFEE, DEFAULT_DARKNESS};
use nightread::document::render::{self, FilterRevision, RenderEvent};
use nightread::document::{
    Candidate, DecodedDocument, DocumentEngine, DropOutcome, Gate, MediaType, PageBitmap,
};
use nightread::domain::{
    background_color, coffee_filter, combined_filter, FilterFunction, FilterSettings, Level, Rgb,
};
use nightread::error::DocumentError;
use nightread::i18n::fluent::I18n;
use nightread::ui::panel::{self, PanelLayout, PanelVisibility};
use nightread::ui::viewer;
use std::ops::ControlFlow;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tempfile::tempdir;

// =============================================================================
// Filter composition
// =============================================================================

#[test]
fn background_darkens_monotonically_between_white_and_near_black() {
    let mut previous = background_color(Level::MIN);
    assert_eq!(previous, Rgb::new(255, 255, 255));

    for darkness in 1..=100 {
        let current = background_color(Level::new(darkness));
        assert!(current.r <= previous.r && current.g <= previous.g && current.b <= previous.b);
        previous = current;
    }
    assert_eq!(previous, Rgb::new(18, 18, 18));
}

#[test]
fn coffee_components_stay_in_range_and_move_together() {
    let mut last: Option<(f64, f64, f64)> = None;
    for coffee in 0..=100 {
        let spec = coffee_filter(Level::new(coffee));
        let [FilterFunction::Sepia(sepia), FilterFunction::HueRotate(hue), FilterFunction::Brightness(brightness)] =
            spec.functions()
        else {
            panic!("unexpected coffee chain: {spec}");
        };
        assert!((0.0..=0.8).contains(sepia));
        assert!((-20.0..=0.0).contains(hue));
        assert!((0.92..=1.0).contains(brightness));
        if let Some((last_sepia, last_hue, last_brightness)) = last {
            assert!(*sepia > last_sepia, "sepia must grow at coffee {coffee}");
            assert!(*hue < last_hue, "hue must turn further at coffee {coffee}");
            assert!(
                *brightness < last_brightness,
                "brightness must drop at coffee {coffee}"
            );
        }
        last = Some((*sepia, *hue, *brightness));
    }
    let (sepia, hue, brightness) = last.expect("coffee range is not empty");
    assert!((sepia - 0.8).abs() < 1e-9);
    assert!((hue + 20.0).abs() < 1e-9);
    assert!((brightness - 0.92).abs() < 1e-9);
}

#[test]
fn combined_filter_is_pure() {
    let first = combined_filter(Level::new(37), Level::new(64));
    let second = combined_filter(Level::new(37), Level::new(64));
    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.to_string());
}

#[test]
fn extremes_match_expected_filter_text() {
    let light = FilterSettings::new(Level::MIN, Level::MIN);
    assert_eq!(light.background(), Rgb::new(255, 255, 255));
    assert_eq!(light.filter().inversion(), 0.0);
    assert_eq!(light.filter().sepia(), 0.0);
    assert!(light.filter().preserves_greys());

    let dark = FilterSettings::new(Level::MAX, Level::MAX);
    assert_eq!(dark.background(), Rgb::new(18, 18, 18));
    assert_eq!(
        dark.filter().to_string(),
        "invert(1) hue-rotate(180deg) sepia(0.8) hue-rotate(-20deg) brightness(0.92)"
    );
}

#[test]
fn out_of_range_levels_are_clamped() {
    assert_eq!(Level::new(-5), Level::MIN);
    assert_eq!(Level::new(250), Level::MAX);
    assert_eq!(Level::from_slider(49.6).value(), 50);
}

// =============================================================================
// Gate and tokens
// =============================================================================

#[test]
fn pdf_drop_is_admitted_and_text_drop_is_ignored() {
    let mut gate = Gate::new();

    let outcome = gate.admit(Candidate::with_media_type("notes.txt", MediaType::PlainText));
    assert_eq!(
        outcome,
        DropOutcome::Rejected {
            media_type: MediaType::PlainText
        }
    );
    assert!(outcome.admitted().is_none());

    let outcome = gate.admit(Candidate::with_media_type("paper", MediaType::Pdf));
    let document = outcome.admitted().expect("PDF should be admitted");
    assert_eq!(document.path(), Path::new("paper"));
}

#[test]
fn rejected_drop_keeps_the_current_document() {
    let mut gate = Gate::new();
    let mut viewer = viewer::State::new();
    let first = gate.admit(Candidate::from_path("book.pdf"));
    let document = first.admitted().cloned().expect("PDF should be admitted");
    viewer.begin(document.clone());

    let outcome = gate.admit(Candidate::from_path("cover.png"));
    assert!(outcome.admitted().is_none());
    assert_eq!(viewer.document(), Some(&document));
}

#[test]
fn every_admission_gets_a_newer_token() {
    let mut gate = Gate::new();
    let a = gate.admit(Candidate::from_path("same.pdf"));
    let b = gate.admit(Candidate::from_path("same.pdf"));
    let (Some(a), Some(b)) = (a.admitted(), b.admitted()) else {
        panic!("both drops should be admitted");
    };
    assert!(b.token() > a.token());
}

// =============================================================================
// Panel visibility
// =============================================================================

#[test]
fn toggle_then_outside_press_closes_panel() {
    let window = Size::new(1200.0, 900.0);
    let mut state = panel::State::new(FilterSettings::default(), window);

    state.update(panel::Message::TogglePressed);
    assert_eq!(state.visibility(), PanelVisibility::Visible);

    state.update(panel::Message::CursorMoved(Point::new(100.0, 100.0)));
    state.update(panel::Message::PointerPressed);
    assert_eq!(state.visibility(), PanelVisibility::Hidden);
}

#[test]
fn press_on_slider_area_keeps_panel_open() {
    let window = Size::new(1200.0, 900.0);
    let layout = PanelLayout::for_window(window);
    let mut state = panel::State::new(FilterSettings::default(), window);

    state.update(panel::Message::TogglePressed);
    state.update(panel::Message::CursorMoved(layout.panel.center()));
    state.update(panel::Message::PointerPressed);
    assert!(state.visibility().is_visible());
}

// =============================================================================
// Rendering delegate
// =============================================================================

struct RecordingEngine {
    page_count: u32,
    requests: Mutex<Vec<u32>>,
}

impl DocumentEngine for RecordingEngine {
    fn decode(&self, _path: &Path) -> Result<DecodedDocument, DocumentError> {
        Ok(DecodedDocument {
            page_count: self.page_count,
        })
    }

    fn render_page(
        &self,
        _path: &Path,
        page_number: u32,
        _scale: f32,
    ) -> Result<PageBitmap, DocumentError> {
        self.requests.lock().unwrap().push(page_number);
        Ok(PageBitmap::new(page_number, 1, 1, vec![255, 255, 255, 255]))
    }
}

#[test]
fn three_page_document_renders_pages_in_order_with_current_filter() {
    let engine = RecordingEngine {
        page_count: 3,
        requests: Mutex::new(Vec::new()),
    };
    let mut gate = Gate::new();
    let document = gate
        .admit(Candidate::from_path("three.pdf"))
        .admitted()
        .cloned()
        .unwrap();
    let settings = FilterSettings::new(Level::MAX, Level::MIN);
    let mut pages = Vec::new();

    render::run(
        &engine,
        &document,
        &settings.filter(),
        FilterRevision::default(),
        1.0,
        |event| {
            if let RenderEvent::Page(page) = event {
                assert_eq!(page.token, document.token());
                pages.push(page);
            }
            ControlFlow::Continue(())
        },
    );

    assert_eq!(*engine.requests.lock().unwrap(), vec![1, 2, 3]);
    let numbers: Vec<u32> = pages.iter().map(|page| page.page_number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
    for page in &pages {
        let images = page.result.as_ref().unwrap();
        assert_eq!(images.filtered.rgba[..3], [0, 0, 0]);
    }
}

/// Runs a render on a blocking worker and streams its events through a channel.
async fn render_through_channel(
    engine: Arc<RecordingEngine>,
    drop_receiver_first: bool,
) -> Vec<RenderEvent> {
    let document = Gate::new()
        .admit(Candidate::from_path("channel.pdf"))
        .admitted()
        .cloned()
        .unwrap();
    let (sender, receiver) = mpsc::unbounded::<RenderEvent>();
    let receiver = if drop_receiver_first {
        drop(receiver);
        None
    } else {
        Some(receiver)
    };

    tokio::task::spawn_blocking(move || {
        render::run(
            engine.as_ref(),
            &document,
            &FilterSettings::default().filter(),
            FilterRevision::default(),
            1.0,
            |event| match sender.unbounded_send(event) {
                Ok(()) => ControlFlow::Continue(()),
                Err(_) => ControlFlow::Break(()),
            },
        );
    })
    .await
    .expect("render worker panicked");

    match receiver {
        Some(receiver) => receiver.collect().await,
        None => Vec::new(),
    }
}

#[tokio::test]
async fn channel_delivers_decode_before_pages() {
    let engine = Arc::new(RecordingEngine {
        page_count: 2,
        requests: Mutex::new(Vec::new()),
    });
    let events = render_through_channel(engine, false).await;

    assert_eq!(events.len(), 3);
    assert!(matches!(
        &events[0],
        RenderEvent::Decoded { result: Ok(decoded), .. } if decoded.page_count == 2
    ));
    assert!(matches!(&events[2], RenderEvent::Page(page) if page.page_number == 2));
}

#[tokio::test]
async fn closed_receiver_stops_worker_before_any_page_request() {
    let engine = Arc::new(RecordingEngine {
        page_count: 40,
        requests: Mutex::new(Vec::new()),
    });
    render_through_channel(Arc::clone(&engine), true).await;
    assert!(engine.requests.lock().unwrap().is_empty());
}

// =============================================================================
// Configuration and localisation
// =============================================================================

#[test]
fn reading_levels_round_trip_through_settings_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.reading.set_levels(FilterSettings::new(Level::new(40), Level::new(75)));
    config.general.language = Some("fr".to_string());
    config::save_to_path(&config, &path).expect("Failed to write config");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded, config);
    assert_eq!(
        loaded.reading.levels(),
        FilterSettings::new(Level::new(40), Level::new(75))
    );

    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("panel-darkness"), "Obscurité");
}

#[test]
fn default_levels_match_initial_reading_state() {
    let levels = Config::default().reading.levels();
    assert_eq!(levels.darkness.value(), DEFAULT_DARKNESS);
    assert_eq!(levels.coffee.value(), DEFAULT_COFFEE);
}

#[test]
fn cli_language_overrides_config() {
    let mut config = Config::default();
    config.general.language = Some("fr".to_string());
    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.tr("viewer-open-button"), "Open PDF…");
}
