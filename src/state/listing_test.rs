use super::*;

fn loaded(items: Vec<u64>) -> Listing<u64> {
    let mut listing = Listing::default();
    let ticket = listing.begin_load();
    assert!(listing.finish_load(ticket, Ok(items)));
    listing
}

// =============================================================
// Load lifecycle
// =============================================================

#[test]
fn default_listing_starts_loading() {
    let listing: Listing<u64> = Listing::default();
    assert_eq!(listing.view(), ListView::Loading);
}

#[test]
fn finish_load_selects_empty_or_populated() {
    assert_eq!(loaded(vec![]).view(), ListView::Empty);
    assert_eq!(loaded(vec![1, 2]).view(), ListView::Populated);
}

#[test]
fn failed_load_shows_error_view() {
    let mut listing: Listing<u64> = Listing::default();
    let ticket = listing.begin_load();
    listing.finish_load(ticket, Err("Failed to load: boom".to_owned()));
    assert_eq!(listing.view(), ListView::Error);
    assert_eq!(listing.load_error.as_deref(), Some("Failed to load: boom"));

    let ticket = listing.begin_load();
    assert_eq!(listing.load_error, None);
    listing.finish_load(ticket, Ok(vec![3]));
    assert_eq!(listing.view(), ListView::Populated);
}

#[test]
fn stale_ticket_is_discarded() {
    let mut listing: Listing<u64> = Listing::default();
    let first = listing.begin_load();
    let second = listing.begin_load();
    assert!(listing.finish_load(second, Ok(vec![2])));
    assert!(!listing.finish_load(first, Ok(vec![1])));
    assert_eq!(listing.items, vec![2]);
    assert!(!listing.loading);
}

#[test]
fn stale_failure_does_not_mask_fresh_data() {
    let mut listing: Listing<u64> = Listing::default();
    let first = listing.begin_load();
    let second = listing.begin_load();
    listing.finish_load(second, Ok(vec![2]));
    listing.finish_load(first, Err("late".to_owned()));
    assert_eq!(listing.view(), ListView::Populated);
}

#[test]
fn reloading_same_data_is_idempotent() {
    let mut listing = loaded(vec![1, 2, 3]);
    let before = listing.items.clone();
    let ticket = listing.begin_load();
    listing.finish_load(ticket, Ok(vec![1, 2, 3]));
    assert_eq!(listing.items, before);
}

// =============================================================
// Actions
// =============================================================

#[test]
fn only_acted_upon_item_is_in_flight() {
    let mut listing = loaded(vec![1, 2, 3]);
    assert!(listing.begin_action(2u64));
    assert!(listing.is_in_flight(2u64));
    assert!(!listing.is_in_flight(1u64));
    assert!(!listing.is_in_flight(3u64));
}

#[test]
fn duplicate_action_on_same_item_is_refused() {
    let mut listing = loaded(vec![1]);
    assert!(listing.begin_action(1u64));
    assert!(!listing.begin_action(1u64));
}

#[test]
fn overlapping_actions_stay_in_flight_independently() {
    let mut listing = loaded(vec![1, 2]);
    assert!(listing.begin_action(1u64));
    assert!(listing.begin_action(2u64));
    assert!(listing.is_in_flight(1u64));
    assert!(!listing.begin_action(1u64));

    listing.finish_action(2u64, Ok("done".to_owned()));
    assert!(listing.is_in_flight(1u64));
    assert!(!listing.is_in_flight(2u64));
    assert!(!listing.begin_action(1u64));

    listing.finish_action(1u64, Ok("done".to_owned()));
    assert!(listing.in_flight.is_empty());
}

#[test]
fn create_stays_in_flight_while_an_item_action_runs() {
    let mut listing = loaded(vec![9]);
    assert!(listing.begin_action(ActionKey::Create));
    assert!(listing.begin_action(9u64));
    assert!(listing.is_in_flight(ActionKey::Create));
    assert!(!listing.begin_action(ActionKey::Create));

    listing.finish_action(9u64, Err("nope".to_owned()));
    assert!(listing.is_in_flight(ActionKey::Create));
}

#[test]
fn finish_action_sets_notice_or_error() {
    let mut listing = loaded(vec![1]);
    listing.begin_action(1u64);
    listing.finish_action(1u64, Ok("copied".to_owned()));
    assert!(listing.in_flight.is_empty());
    assert_eq!(listing.notice.as_deref(), Some("copied"));

    listing.begin_action(1u64);
    assert_eq!(listing.notice, None);
    listing.finish_action(1u64, Err("nope".to_owned()));
    assert_eq!(listing.error.as_deref(), Some("nope"));
    assert_eq!(listing.notice, None);
}

#[test]
fn create_action_is_tracked_separately_from_items() {
    let mut listing = loaded(vec![1]);
    assert!(listing.begin_action(ActionKey::Create));
    assert!(listing.is_in_flight(ActionKey::Create));
    assert!(!listing.is_in_flight(1u64));
    listing.finish_action(ActionKey::Create, Ok("created".to_owned()));
    assert!(!listing.is_in_flight(ActionKey::Create));
}

#[test]
fn reject_sets_error_without_touching_items() {
    let mut listing = loaded(vec![1]);
    listing.reject("Select a destination project.");
    assert_eq!(listing.error.as_deref(), Some("Select a destination project."));
    assert_eq!(listing.items, vec![1]);
    assert_eq!(listing.view(), ListView::Populated);
}

#[test]
fn dismiss_notice_ignores_replaced_banner() {
    let mut listing = loaded(vec![1]);
    listing.finish_action(1u64, Ok("first".to_owned()));
    listing.finish_action(1u64, Ok("second".to_owned()));
    listing.dismiss_notice("first");
    assert_eq!(listing.notice.as_deref(), Some("second"));
    listing.dismiss_notice("second");
    assert_eq!(listing.notice, None);
}
