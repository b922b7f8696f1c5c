//! Phone dispatch protocol against a recording host.
//!
//! The clock is paused, so `sleep` in a test advances virtual time and the
//! overlay task runs exactly when its delay elapses.

use crate::common::{HostEvent, RecordingHost};
use civic_core::SiteConfig;
use civic_core::config::DispatchSection;
use civic_render::dispatch::{
    ActionOutcome, CallAction, Capabilities, DEFAULT_OVERLAY_DELAY, DispatchOutcome,
    PhoneDispatcher,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

const WHITE_HOUSE: &str = "(202) 456-1111";
const WHITE_HOUSE_URI: &str = "tel:+12024561111";
const SENATE: &str = "(202) 224-3521";

fn desktop(host: &Arc<RecordingHost>) -> PhoneDispatcher<RecordingHost> {
    PhoneDispatcher::new(Arc::clone(host), Capabilities::new(true, true))
}

async fn open_overlay(host: &Arc<RecordingHost>) -> PhoneDispatcher<RecordingHost> {
    let dispatcher = desktop(host);
    dispatcher.dispatch(WHITE_HOUSE).await;
    sleep(Duration::from_millis(600)).await;
    assert!(dispatcher.is_overlay_open().await);
    dispatcher
}

// ============================================================================
// Dispatch
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_desktop_navigates_then_shows_overlay_after_delay() {
    let host = Arc::new(RecordingHost::new());
    let dispatcher = desktop(&host);

    let outcome = dispatcher.dispatch(WHITE_HOUSE).await;
    assert_eq!(
        outcome,
        DispatchOutcome::OverlayScheduled {
            uri: WHITE_HOUSE_URI.to_string()
        }
    );
    assert_eq!(host.navigations(), vec![WHITE_HOUSE_URI]);
    assert!(dispatcher.is_overlay_pending().await);

    sleep(Duration::from_millis(499)).await;
    assert!(!dispatcher.is_overlay_open().await);
    assert!(host.presented().is_empty());

    sleep(Duration::from_millis(2)).await;
    assert!(dispatcher.is_overlay_open().await);
    assert!(!dispatcher.is_overlay_pending().await);
    assert_eq!(host.presented(), vec![WHITE_HOUSE]);
    assert_eq!(
        host.events(),
        vec![
            HostEvent::Navigate(WHITE_HOUSE_URI.to_string()),
            HostEvent::Present(WHITE_HOUSE.to_string()),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_open_overlay_offers_three_actions() {
    let host = Arc::new(RecordingHost::new());
    let dispatcher = open_overlay(&host).await;

    let overlay = dispatcher.open_overlay().await.unwrap();
    assert_eq!(overlay.number().formatted(), WHITE_HOUSE);
    let node = overlay.to_node();
    let element = node.as_element().unwrap();
    let actions: Vec<&str> = element
        .find_all_by_tag("button")
        .into_iter()
        .filter_map(|button| button.attr("data-action"))
        .collect();
    assert_eq!(actions, vec!["retry", "copy", "dismiss"]);
}

#[tokio::test(start_paused = true)]
async fn test_non_desktop_never_shows_overlay() {
    let host = Arc::new(RecordingHost::new());
    let dispatcher = PhoneDispatcher::new(Arc::clone(&host), Capabilities::new(false, true));

    let outcome = dispatcher.dispatch(WHITE_HOUSE).await;
    assert_eq!(
        outcome,
        DispatchOutcome::Dialed {
            uri: WHITE_HOUSE_URI.to_string()
        }
    );

    sleep(Duration::from_secs(2)).await;
    assert!(!dispatcher.is_overlay_open().await);
    assert!(host.presented().is_empty());
    assert_eq!(
        dispatcher.handle_action(CallAction::CopyNumber).await,
        ActionOutcome::NoOverlay
    );
}

#[tokio::test(start_paused = true)]
async fn test_custom_overlay_delay() {
    let host = Arc::new(RecordingHost::new());
    let dispatcher = desktop(&host).with_overlay_delay(Duration::from_millis(50));

    dispatcher.dispatch(WHITE_HOUSE).await;
    sleep(Duration::from_millis(60)).await;
    assert!(dispatcher.is_overlay_open().await);
}

#[tokio::test(start_paused = true)]
async fn test_overlay_delay_from_config() {
    let host = Arc::new(RecordingHost::new());
    let mut config = SiteConfig::default();
    config.dispatch.overlay_delay_ms = 1500;
    let dispatcher = PhoneDispatcher::from_config(
        Arc::clone(&host),
        Capabilities::new(true, true),
        &config.dispatch,
    );
    assert_eq!(dispatcher.overlay_delay(), Duration::from_millis(1500));

    dispatcher.dispatch(WHITE_HOUSE).await;
    sleep(Duration::from_millis(1000)).await;
    assert!(!dispatcher.is_overlay_open().await);

    sleep(Duration::from_millis(600)).await;
    assert!(dispatcher.is_overlay_open().await);
}

#[tokio::test]
async fn test_default_config_delay_matches_default() {
    let host = Arc::new(RecordingHost::new());
    let dispatcher = PhoneDispatcher::from_config(
        host,
        Capabilities::default(),
        &DispatchSection::default(),
    );
    assert_eq!(dispatcher.overlay_delay(), DEFAULT_OVERLAY_DELAY);
}

#[tokio::test(start_paused = true)]
async fn test_vanity_number_dials_digits_only() {
    let host = Arc::new(RecordingHost::new());
    let dispatcher = PhoneDispatcher::new(Arc::clone(&host), Capabilities::default());

    let outcome = dispatcher.dispatch("1-800-USA-LEARN").await;
    assert_eq!(outcome.uri(), "tel:+11800");
}

#[tokio::test(start_paused = true)]
async fn test_second_dispatch_cancels_pending_overlay() {
    let host = Arc::new(RecordingHost::new());
    let dispatcher = desktop(&host);

    dispatcher.dispatch(WHITE_HOUSE).await;
    sleep(Duration::from_millis(300)).await;
    dispatcher.dispatch(SENATE).await;

    // The first overlay would have appeared at 500ms.
    sleep(Duration::from_millis(300)).await;
    assert!(!dispatcher.is_overlay_open().await);
    assert!(host.presented().is_empty());

    sleep(Duration::from_millis(300)).await;
    assert_eq!(host.presented(), vec![SENATE]);
    assert_eq!(host.navigations().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_newer_overlay_replaces_open_one() {
    let host = Arc::new(RecordingHost::new());
    let dispatcher = open_overlay(&host).await;

    dispatcher.dispatch(SENATE).await;
    sleep(Duration::from_millis(600)).await;

    let overlay = dispatcher.open_overlay().await.unwrap();
    assert_eq!(overlay.number().formatted(), SENATE);

    let events = host.events();
    let dismiss_at = events.iter().position(|e| *e == HostEvent::Dismiss).unwrap();
    let second_present = events
        .iter()
        .rposition(|e| matches!(e, HostEvent::Present(_)))
        .unwrap();
    assert!(dismiss_at < second_present);

    let presents = host.presented().len();
    let dismissals = events.iter().filter(|e| **e == HostEvent::Dismiss).count();
    assert_eq!(presents - dismissals, 1);
}

// ============================================================================
// Actions
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_copy_success_closes_overlay() {
    let host = Arc::new(RecordingHost::new());
    let dispatcher = open_overlay(&host).await;

    let outcome = dispatcher.handle_action(CallAction::CopyNumber).await;
    assert_eq!(outcome, ActionOutcome::Copied);
    assert_eq!(host.clipboard().as_deref(), Some(WHITE_HOUSE));
    assert_eq!(
        host.notices(),
        vec![format!("Phone number copied: {WHITE_HOUSE}")]
    );
    assert!(!dispatcher.is_overlay_open().await);
    assert_eq!(host.events().last(), Some(&HostEvent::Dismiss));
}

#[tokio::test(start_paused = true)]
async fn test_copy_failure_keeps_overlay_open() {
    let host = Arc::new(RecordingHost::with_failing_clipboard());
    let dispatcher = open_overlay(&host).await;

    let outcome = dispatcher.handle_action(CallAction::CopyNumber).await;
    assert_eq!(outcome, ActionOutcome::CopyFailed);
    assert_eq!(
        host.notices(),
        vec![format!(
            "Copy failed. Please select and copy manually: {WHITE_HOUSE}"
        )]
    );
    assert!(dispatcher.is_overlay_open().await);
}

#[tokio::test(start_paused = true)]
async fn test_copy_without_clipboard_capability() {
    let host = Arc::new(RecordingHost::new());
    let dispatcher = PhoneDispatcher::new(Arc::clone(&host), Capabilities::new(true, false));
    dispatcher.dispatch(WHITE_HOUSE).await;
    sleep(Duration::from_millis(600)).await;

    let outcome = dispatcher.handle_action(CallAction::CopyNumber).await;
    assert_eq!(outcome, ActionOutcome::CopyFailed);
    assert!(host.clipboard().is_none());
    assert_eq!(host.notices().len(), 1);
    assert!(host.notices()[0].starts_with("Copy failed."));
}

#[tokio::test(start_paused = true)]
async fn test_retry_redials_and_closes() {
    let host = Arc::new(RecordingHost::new());
    let dispatcher = open_overlay(&host).await;

    let outcome = dispatcher.handle_action(CallAction::Retry).await;
    assert_eq!(
        outcome,
        ActionOutcome::Redialed {
            uri: WHITE_HOUSE_URI.to_string()
        }
    );
    assert_eq!(host.navigations(), vec![WHITE_HOUSE_URI, WHITE_HOUSE_URI]);
    assert!(!dispatcher.is_overlay_open().await);
}

#[tokio::test(start_paused = true)]
async fn test_dismiss_then_no_overlay() {
    let host = Arc::new(RecordingHost::new());
    let dispatcher = open_overlay(&host).await;

    assert_eq!(
        dispatcher.handle_action(CallAction::Dismiss).await,
        ActionOutcome::Dismissed
    );
    assert!(!dispatcher.is_overlay_open().await);
    assert_eq!(
        dispatcher.handle_action(CallAction::Dismiss).await,
        ActionOutcome::NoOverlay
    );
    assert!(host.notices().is_empty());
}
