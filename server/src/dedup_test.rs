use super::*;

const WINDOW: Duration = Duration::from_secs(600);

#[test]
fn fresh_key_is_claimed_then_in_flight() {
    let cache = IdempotencyCache::new(WINDOW);
    let first = cache.claim("k1");
    assert!(matches!(first, Claim::Fresh(_)));
    assert!(matches!(cache.claim("k1"), Claim::InFlight));
    drop(first);
}

#[test]
fn completed_key_replays_card_id() {
    let cache = IdempotencyCache::new(WINDOW);
    let Claim::Fresh(reservation) = cache.claim("k1") else {
        panic!("expected fresh claim");
    };
    reservation.complete("card-1".into());

    match cache.claim("k1") {
        Claim::Completed(id) => assert_eq!(id, "card-1"),
        other => panic!("expected replay, got {other:?}"),
    }
}

#[test]
fn dropped_reservation_frees_key() {
    let cache = IdempotencyCache::new(WINDOW);
    let Claim::Fresh(reservation) = cache.claim("k1") else {
        panic!("expected fresh claim");
    };
    drop(reservation);
    assert_eq!(cache.len(), 0);
    assert!(matches!(cache.claim("k1"), Claim::Fresh(_)));
}

#[test]
fn distinct_keys_are_independent() {
    let cache = IdempotencyCache::new(WINDOW);
    let _a = cache.claim("a");
    assert!(matches!(cache.claim("b"), Claim::Fresh(_)));
}

#[test]
fn entries_expire_after_window() {
    let cache = IdempotencyCache::new(Duration::from_secs(10));
    let start = Instant::now();
    let Claim::Fresh(reservation) = cache.claim_at("k1", start) else {
        panic!("expected fresh claim");
    };
    reservation.complete("card-1".into());

    assert!(matches!(cache.claim_at("k1", start + Duration::from_secs(5)), Claim::Completed(_)));
    assert!(matches!(cache.claim_at("k1", start + Duration::from_secs(30)), Claim::Fresh(_)));
}

#[test]
fn in_flight_entry_outlives_window() {
    let cache = IdempotencyCache::new(Duration::from_secs(10));
    let start = Instant::now();
    let held = cache.claim_at("k1", start);
    assert!(matches!(held, Claim::Fresh(_)));

    assert!(matches!(cache.claim_at("k1", start + Duration::from_secs(11)), Claim::InFlight));
    assert!(matches!(cache.claim_at("k1", start + Duration::from_secs(3600)), Claim::InFlight));

    drop(held);
    assert!(matches!(cache.claim_at("k1", start + Duration::from_secs(3601)), Claim::Fresh(_)));
}

#[test]
fn zero_window_still_blocks_in_flight_duplicate() {
    let cache = IdempotencyCache::new(Duration::ZERO);
    let start = Instant::now();
    let Claim::Fresh(reservation) = cache.claim_at("k1", start) else {
        panic!("expected fresh claim");
    };
    assert!(matches!(cache.claim_at("k1", start), Claim::InFlight));

    reservation.complete("card-1".into());
    assert!(matches!(cache.claim_at("k1", start + Duration::from_secs(1)), Claim::Fresh(_)));
}

#[test]
fn clones_share_state() {
    let cache = IdempotencyCache::new(WINDOW);
    let other = cache.clone();
    let _held = cache.claim("k1");
    assert!(matches!(other.claim("k1"), Claim::InFlight));
}
