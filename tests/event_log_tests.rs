#![allow(missing_docs)]

use taxi_rush::simulation::event_log::{EventColor, EventLog, TICKER_LIFETIME};

#[test]
fn test_oldest_message_is_evicted() {
    let mut log = EventLog::new(2);

    log.log(1, "picked up", EventColor::Trip);
    log.log(2, "rain", EventColor::Weather);
    log.log(3, "coin", EventColor::Power);

    let frames: Vec<u32> = log.events().iter().map(|e| e.frame).collect();
    assert_eq!(frames, vec![3, 2]);
}

#[test]
fn test_recent_hides_stale_messages() {
    let mut log = EventLog::default();
    log.log(0, "wreck", EventColor::Wreck);
    log.log(TICKER_LIFETIME, "dropped off", EventColor::Trip);

    let recent: Vec<_> = log.recent(TICKER_LIFETIME + 1).collect();

    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].description, "dropped off");
    assert_eq!(log.events().len(), 2);
}
