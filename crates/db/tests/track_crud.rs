//! Integration tests for the track repository against a real database.

use chrono::NaiveDate;
use melodex_core::track::{NewTrack, TrackPatch};
use melodex_db::repositories::TrackRepo;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_track(name: &str, artists: &[&str]) -> NewTrack {
    NewTrack {
        name: name.to_string(),
        artist_names: artists.iter().map(|s| s.to_string()).collect(),
        duration_ms: 300_000,
        isrc: "USABC1234567".to_string(),
        release_date: NaiveDate::from_ymd_opt(2021, 1, 1).expect("valid date"),
    }
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_then_get_round_trips_all_fields(pool: PgPool) {
    let input = new_track("Test Track", &["Artist1", "Artist2"]);
    let created = TrackRepo::create(&pool, &input).await.unwrap();

    let fetched = TrackRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("created track must be readable");

    assert_eq!(fetched.name, input.name);
    assert_eq!(fetched.artist_names, input.artist_names);
    assert_eq!(fetched.duration_ms, input.duration_ms);
    assert_eq!(fetched.isrc, input.isrc);
    assert_eq!(fetched.release_date, input.release_date);
    assert_eq!(fetched, created);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_returns_all_in_insertion_order(pool: PgPool) {
    let a = TrackRepo::create(&pool, &new_track("First Song", &["Artist1"]))
        .await
        .unwrap();
    let b = TrackRepo::create(&pool, &new_track("Second Song", &["Artist2"]))
        .await
        .unwrap();

    let tracks = TrackRepo::list(&pool).await.unwrap();
    assert_eq!(
        tracks.iter().map(|t| t.id).collect::<Vec<_>>(),
        vec![a.id, b.id]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn partial_update_leaves_other_fields_untouched(pool: PgPool) {
    let created = TrackRepo::create(&pool, &new_track("Test Track", &["Artist1"]))
        .await
        .unwrap();

    let patch = TrackPatch {
        duration_ms: Some(123_456),
        ..Default::default()
    };
    let updated = TrackRepo::update(&pool, created.id, &patch)
        .await
        .unwrap()
        .expect("existing row must update");

    assert_eq!(updated.duration_ms, 123_456);
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.artist_names, created.artist_names);
    assert_eq!(updated.isrc, created.isrc);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_missing_id_returns_none(pool: PgPool) {
    let patch = TrackPatch {
        name: Some("Renamed".to_string()),
        ..Default::default()
    };
    let result = TrackRepo::update(&pool, 9999, &patch).await.unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_is_idempotent(pool: PgPool) {
    let created = TrackRepo::create(&pool, &new_track("Test Track", &["Artist1"]))
        .await
        .unwrap();

    assert!(TrackRepo::delete(&pool, created.id).await.unwrap());
    assert!(!TrackRepo::delete(&pool, created.id).await.unwrap());
    assert!(!TrackRepo::delete(&pool, created.id).await.unwrap());
}

// ---------------------------------------------------------------------------
// Fuzzy lookup
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn lookup_matches_name_substring_case_insensitively(pool: PgPool) {
    let created = TrackRepo::create(&pool, &new_track("Test Track", &["Artist1"]))
        .await
        .unwrap();

    let found = TrackRepo::find_by_name_and_artists(
        &pool,
        "test tr",
        &["Artist1".to_string()],
    )
    .await
    .unwrap()
    .expect("substring of the stored name must match");
    assert_eq!(found.id, created.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn lookup_matches_artist_substring(pool: PgPool) {
    let created = TrackRepo::create(&pool, &new_track("Test Track", &["Artist2"]))
        .await
        .unwrap();

    // Queried artist is a prefix of the stored credit.
    let found = TrackRepo::find_by_name_and_artists(&pool, "Test Track", &["Art".to_string()])
        .await
        .unwrap()
        .expect("artist substring must match");
    assert_eq!(found.id, created.id);

    // And the reverse direction: stored credit inside the queried name.
    let found = TrackRepo::find_by_name_and_artists(
        &pool,
        "Test Track",
        &["Artist2 Orchestra".to_string()],
    )
    .await
    .unwrap()
    .expect("stored name inside queried name must match");
    assert_eq!(found.id, created.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn lookup_requires_an_artist_overlap(pool: PgPool) {
    TrackRepo::create(&pool, &new_track("Test Track", &["Artist2"]))
        .await
        .unwrap();

    let found = TrackRepo::find_by_name_and_artists(&pool, "Test Track", &["Band".to_string()])
        .await
        .unwrap();
    assert!(found.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn lookup_returns_first_match_in_store_order(pool: PgPool) {
    let first = TrackRepo::create(&pool, &new_track("Test Track", &["Artist1"]))
        .await
        .unwrap();
    TrackRepo::create(&pool, &new_track("Test Track (Remix)", &["Artist1"]))
        .await
        .unwrap();

    let found = TrackRepo::find_by_name_and_artists(&pool, "Test Track", &["Artist1".to_string()])
        .await
        .unwrap()
        .expect("must find a match");
    assert_eq!(found.id, first.id);
}
