//! Tests for the blank classifier and the health state machine.

use std::time::{Duration, Instant};

use super::*;

fn report(text: usize, markup: usize, background: &str) -> PageReport {
    PageReport {
        text_length: text,
        markup_length: markup,
        background: background.into(),
        href: Some("https://clock.example.com/".into()),
    }
}

fn monitor() -> HealthMonitor {
    HealthMonitor::new(
        true,
        BlankThresholds::default(),
        vec![Duration::from_millis(250), Duration::from_millis(1500)],
    )
}

fn raw_report(text: usize, markup: usize, background: &str) -> String {
    // Shaped like webview output: the script's JSON string, JSON-encoded again.
    let inner = format!(
        r#"{{"textLength":{text},"markupLength":{markup},"background":"{background}","href":"https://clock.example.com/"}}"#
    );
    serde_json::to_string(&inner).unwrap()
}

// -- Classifier --

#[test]
fn empty_white_page_is_blank() {
    let r = report(0, 0, "rgb(255, 255, 255)");
    assert_eq!(classify(Some(&r), BlankThresholds::default()), Verdict::Blank);
}

#[test]
fn empty_transparent_page_is_blank() {
    let r = report(2, 40, "rgba(0, 0, 0, 0)");
    assert_eq!(classify(Some(&r), BlankThresholds::default()), Verdict::Blank);
}

#[test]
fn long_text_is_never_blank() {
    for bg in ["rgb(255, 255, 255)", "rgba(0, 0, 0, 0)", "rgb(0, 0, 0)", ""] {
        let r = report(200, 10, bg);
        assert_eq!(
            classify(Some(&r), BlankThresholds::default()),
            Verdict::Content,
            "background {bg:?}"
        );
    }
}

#[test]
fn heavy_markup_is_not_blank() {
    let r = report(0, 500, "rgb(255, 255, 255)");
    assert_eq!(classify(Some(&r), BlankThresholds::default()), Verdict::Content);
}

#[test]
fn dark_background_is_not_blank() {
    let r = report(0, 0, "rgb(20, 20, 20)");
    assert_eq!(classify(Some(&r), BlankThresholds::default()), Verdict::Content);
}

#[test]
fn unparseable_background_is_not_blank() {
    let r = report(0, 0, "color(display-p3 1 1 1)");
    assert_eq!(classify(Some(&r), BlankThresholds::default()), Verdict::Content);
}

#[test]
fn thresholds_are_exclusive() {
    let r = report(5, 79, "white");
    assert_eq!(classify(Some(&r), BlankThresholds::default()), Verdict::Content);
    let r = report(4, 80, "white");
    assert_eq!(classify(Some(&r), BlankThresholds::default()), Verdict::Content);
    let r = report(4, 79, "white");
    assert_eq!(classify(Some(&r), BlankThresholds::default()), Verdict::Blank);
}

#[test]
fn missing_report_is_inconclusive() {
    let verdict = classify(None, BlankThresholds::default());
    assert_eq!(verdict, Verdict::Inconclusive);
    assert!(!verdict.wants_overlay());
}

#[test]
fn error_document_detected() {
    let mut r = report(300, 5000, "rgb(255, 255, 255)");
    r.href = Some("chrome-error://chromewebdata/".into());
    assert_eq!(
        classify(Some(&r), BlankThresholds::default()),
        Verdict::ErrorDocument
    );
    assert!(is_error_document("about:neterror?e=dnsNotFound"));
    assert!(!is_error_document("https://chrome-error.example.com/"));
}

// -- Report parsing --

#[test]
fn parses_double_encoded_report() {
    let parsed = PageReport::parse(&raw_report(3, 12, "rgb(255, 255, 255)")).unwrap();
    assert_eq!(parsed.text_length, 3);
    assert_eq!(parsed.markup_length, 12);
    assert_eq!(parsed.background, "rgb(255, 255, 255)");
}

#[test]
fn parses_plain_object_report() {
    let parsed = PageReport::parse(r#"{"textLength":1,"markupLength":2}"#).unwrap();
    assert_eq!(parsed.text_length, 1);
    assert_eq!(parsed.background, "");
    assert!(parsed.href.is_none());
}

#[test]
fn null_and_garbage_reports_are_none() {
    assert!(PageReport::parse("null").is_none());
    assert!(PageReport::parse("").is_none());
    assert!(PageReport::parse("undefined").is_none());
    assert!(PageReport::parse("\"not json\"").is_none());
    assert!(PageReport::parse("42").is_none());
}

// -- State machine --

#[test]
fn starts_idle_and_hidden() {
    let m = monitor();
    assert_eq!(m.state(), LoadState::Idle);
    assert!(!m.overlay_visible());
    assert_eq!(m.pending_checks(), 0);
    assert!(m.next_deadline().is_none());
}

#[test]
fn finish_schedules_two_checks() {
    let mut m = monitor();
    let t0 = Instant::now();
    m.on_load_started("https://clock.example.com/");
    m.on_load_finished("https://clock.example.com/", t0);

    assert_eq!(m.state(), LoadState::Finished);
    assert_eq!(m.pending_checks(), 2);
    assert_eq!(m.next_deadline(), Some(t0 + Duration::from_millis(250)));

    assert!(m.take_due(t0 + Duration::from_millis(100)).is_empty());
    let first = m.take_due(t0 + Duration::from_millis(300));
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].index, 0);
    let second = m.take_due(t0 + Duration::from_millis(1500));
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].index, 1);
    assert_eq!(m.pending_checks(), 0);
}

#[test]
fn blank_result_shows_overlay_and_content_hides_it() {
    let mut m = monitor();
    let t0 = Instant::now();
    m.on_load_started("https://clock.example.com/");
    m.on_load_finished("https://clock.example.com/", t0);

    let tickets = m.take_due(t0 + Duration::from_secs(2));
    let blank = raw_report(0, 0, "rgb(255, 255, 255)");
    assert_eq!(m.on_inspection(tickets[0], Some(&blank)), Some(Verdict::Blank));
    assert!(m.overlay_visible());

    let content = raw_report(200, 4000, "rgb(255, 255, 255)");
    assert_eq!(m.on_inspection(tickets[1], Some(&content)), Some(Verdict::Content));
    assert!(!m.overlay_visible());
}

#[test]
fn start_loading_hides_overlay_and_cancels_checks() {
    let mut m = monitor();
    let t0 = Instant::now();
    m.on_load_started("https://clock.example.com/");
    m.on_load_finished("https://clock.example.com/", t0);
    let early = m.take_due(t0 + Duration::from_millis(250));
    m.on_inspection(early[0], Some(&raw_report(0, 0, "white")));
    assert!(m.overlay_visible());
    assert_eq!(m.pending_checks(), 1);

    m.on_load_started("https://clock.example.com/next");

    assert!(!m.overlay_visible());
    assert_eq!(m.pending_checks(), 0);
    assert!(m.next_deadline().is_none());
    assert!(m.take_due(t0 + Duration::from_secs(60)).is_empty());
}

#[test]
fn stale_inspection_result_is_dropped() {
    let mut m = monitor();
    let t0 = Instant::now();
    m.on_load_started("https://a.example.com/");
    m.on_load_finished("https://a.example.com/", t0);
    let old = m.take_due(t0 + Duration::from_secs(2));

    m.on_load_started("https://b.example.com/");
    m.on_load_finished("https://b.example.com/", t0);

    assert_eq!(m.on_inspection(old[0], Some(&raw_report(0, 0, "white"))), None);
    assert!(!m.overlay_visible());
}

#[test]
fn failure_shows_overlay_immediately() {
    let mut m = monitor();
    m.on_load_started("https://clock.example.com/");
    m.on_load_failed("https://clock.example.com/", "connection refused");

    assert_eq!(m.state(), LoadState::Failed);
    assert!(m.overlay_visible());
    assert_eq!(m.pending_checks(), 0);
}

#[test]
fn finish_after_failure_keeps_failure() {
    let mut m = monitor();
    let t0 = Instant::now();
    m.on_load_started("https://clock.example.com/");
    m.on_load_failed("https://clock.example.com/", "dns");
    m.on_load_finished("https://clock.example.com/", t0);

    assert_eq!(m.state(), LoadState::Failed);
    assert!(m.overlay_visible());
    assert_eq!(m.pending_checks(), 0);
}

#[test]
fn failure_state_resets_on_next_navigation() {
    let mut m = monitor();
    m.on_load_started("https://clock.example.com/");
    m.on_load_failed("https://clock.example.com/", "timeout");
    m.on_load_started("https://clock.example.com/");

    assert_eq!(m.state(), LoadState::Loading);
    assert!(!m.overlay_visible());
}

#[test]
fn inspection_failure_fails_open() {
    let mut m = monitor();
    let t0 = Instant::now();
    m.on_load_started("https://clock.example.com/");
    m.on_load_finished("https://clock.example.com/", t0);
    let tickets = m.take_due(t0 + Duration::from_secs(2));

    assert_eq!(m.on_inspection(tickets[0], None), Some(Verdict::Inconclusive));
    assert!(!m.overlay_visible());
    assert_eq!(m.on_inspection(tickets[1], Some("null")), Some(Verdict::Inconclusive));
    assert!(!m.overlay_visible());
}

#[test]
fn error_document_report_marks_failure() {
    let mut m = monitor();
    let t0 = Instant::now();
    m.on_load_started("https://clock.example.com/");
    m.on_load_finished("https://clock.example.com/", t0);
    let tickets = m.take_due(t0 + Duration::from_secs(2));

    let raw = serde_json::to_string(
        r#"{"textLength":900,"markupLength":9000,"background":"white","href":"chrome-error://chromewebdata/"}"#,
    )
    .unwrap();
    assert_eq!(m.on_inspection(tickets[0], Some(&raw)), Some(Verdict::ErrorDocument));
    assert_eq!(m.state(), LoadState::Failed);
    assert!(m.overlay_visible());

    // The second check of the same navigation cannot hide it again.
    assert_eq!(m.on_inspection(tickets[1], Some(&raw_report(300, 900, "white"))), None);
    assert!(m.overlay_visible());
}

#[test]
fn disabled_monitor_schedules_nothing() {
    let mut m = HealthMonitor::new(false, BlankThresholds::default(), vec![Duration::ZERO]);
    m.on_load_started("https://clock.example.com/");
    m.on_load_finished("https://clock.example.com/", Instant::now());
    assert_eq!(m.pending_checks(), 0);
    assert_eq!(m.state(), LoadState::Finished);
}

#[test]
fn generation_increments_per_navigation() {
    let mut m = monitor();
    assert_eq!(m.generation(), 0);
    m.on_load_started("https://a.example.com/");
    m.on_load_started("https://b.example.com/");
    assert_eq!(m.generation(), 2);
}

#[test]
fn from_config_uses_configured_delays() {
    let config = kiosk_config::schema::HealthConfig {
        check_delays_ms: vec![10, 20, 30],
        ..Default::default()
    };
    let mut m = HealthMonitor::from_config(&config);
    m.on_load_started("https://clock.example.com/");
    m.on_load_finished("https://clock.example.com/", Instant::now());
    assert_eq!(m.pending_checks(), 3);
}

#[test]
fn cancel_pending_drops_checks_and_in_flight_results() {
    let mut m = monitor();
    let t0 = Instant::now();
    m.on_load_started("https://clock.example.com/");
    m.on_load_finished("https://clock.example.com/", t0);
    let due = m.take_due(t0 + Duration::from_millis(300));
    assert_eq!(due.len(), 1);

    m.cancel_pending();
    assert_eq!(m.pending_checks(), 0);
    assert!(m.next_deadline().is_none());
    let raw = raw_report(0, 10, "rgb(255, 255, 255)");
    assert_eq!(m.on_inspection(due[0], Some(&raw)), None);
    assert!(!m.overlay_visible());
}
