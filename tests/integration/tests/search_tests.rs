//! Search integration tests
//!
//! Run the directory cast through the index: the exact-substring quick
//! filter, fuzzy ranking over partial input, redaction guarantees, and
//! locale-stable matching of accented names.
//!
//! Run with: cargo test -p integration-tests --test search_tests

use integration_tests::{
    fixtures::{directory_cast, unique_user, user_record},
    index_directory, init_tracing,
};
use messenger_core::User;
use messenger_search::{FuzzyKeys, Query, SearchOptions, UserIndex};

// ============================================================================
// Quick Filter Tests
// ============================================================================

#[test]
fn test_filter_matches_fts_substrings() {
    init_tracing();
    let index = index_directory(directory_cast());

    // Usernames, emails and IDs are all part of the index string
    assert_eq!(index.filter("martha").len(), 1);
    assert_eq!(index.filter("ophelia.payne").len(), 1);
    assert_eq!(index.filter("2005").len(), 1);
    assert!(index.filter("nobody-here").is_empty());
}

#[test]
fn test_filter_finds_username_the_fuzzy_path_cannot() {
    let index = index_directory(directory_cast());

    // The redacted user still has a username in the quick-filter string,
    // but no name or handle to build fuzzy keys from
    let filtered = index.filter("ali");
    assert!(filtered.iter().any(|u| u.user_id == "2004"));

    assert!(!index
        .search("ali")
        .iter()
        .any(|h| h.user.user_id == "2004"));
}

// ============================================================================
// Fuzzy Search Tests
// ============================================================================

#[test]
fn test_search_ranks_tight_matches_first() {
    init_tracing();
    let index = index_directory(directory_cast());

    let hits = index.search("martha");
    assert!(!hits.is_empty());
    assert_eq!(hits[0].user.user_id, "2001");
}

#[test]
fn test_partial_input_matches_subsequences() {
    let index = index_directory(directory_cast());

    let ids: Vec<_> = index.search("mrt").iter().map(|h| h.user.user_id.clone()).collect();
    assert!(ids.contains(&"2001".to_string()));
    assert!(ids.contains(&"2002".to_string()));
}

#[test]
fn test_empty_query_yields_no_hits() {
    let index = index_directory(directory_cast());
    assert!(index.search("").is_empty());
    // The quick filter keeps the substring convention instead
    assert_eq!(index.filter("").len(), index.len());
}

#[test]
fn test_redacted_content_is_unsearchable() {
    let index = index_directory(directory_cast());
    assert!(index.search("redacted").is_empty());
    assert!(index.filter("redacted").is_empty());
}

#[test]
fn test_email_only_user_found_by_local_part() {
    let index = index_directory(directory_cast());

    let hits = index.search("ophelia");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].user.user_id, "2003");

    // That user's keys are the email fallback
    let user = index.get("2003").unwrap();
    assert!(FuzzyKeys::for_user(user).is_email_fallback());
}

#[test]
fn test_accented_name_matches_plain_and_accented_queries() {
    let index = index_directory(directory_cast());

    for query in ["jozef", "j\u{f3}zef", "wybicki"] {
        assert!(
            index.search(query).iter().any(|h| h.user.user_id == "2005"),
            "query {query:?} should reach the accented profile"
        );
    }
}

#[test]
fn test_scoring_is_stable_across_composition_forms() {
    // The same name prepared from precomposed and decomposed input must
    // score identically against any query
    let precomposed = User::from(user_record("a1", "", "", "J\u{f3}zef", ""));
    let decomposed = User::from(user_record("a2", "", "", "Jo\u{301}zef", ""));

    let query = Query::new("joz");
    assert_eq!(
        FuzzyKeys::for_user(&precomposed).score(&query),
        FuzzyKeys::for_user(&decomposed).score(&query)
    );
}

// ============================================================================
// Index Maintenance Tests
// ============================================================================

#[test]
fn test_upsert_rename_reindexes() {
    let mut index = index_directory(directory_cast());

    index.upsert(User::from(user_record(
        "2002",
        "marty",
        "marty",
        "Martin Renamed",
        "marty@example.org",
    )));

    assert_eq!(index.len(), 5);
    assert!(index
        .search("renamed")
        .iter()
        .any(|h| h.user.user_id == "2002"));
}

#[test]
fn test_remove_forgets_user() {
    let mut index = index_directory(directory_cast());
    let removed = index.remove("2001").unwrap();
    assert_eq!(removed.username, "martha");
    assert!(index.search("martha stewart").is_empty());
}

#[test]
fn test_options_bound_the_result_set() {
    let mut index = UserIndex::with_options(SearchOptions {
        limit: Some(3),
        threshold: 0,
    });
    for _ in 0..10 {
        index.upsert(User::from(unique_user()));
    }

    assert_eq!(index.len(), 10);
    assert_eq!(index.search("test user").len(), 3);
}

#[test]
fn test_threshold_drops_weak_hits() {
    let mut strict = UserIndex::with_options(SearchOptions {
        limit: None,
        threshold: i64::MAX,
    });
    for record in directory_cast() {
        strict.upsert(User::from(record));
    }
    assert!(strict.search("martha").is_empty());
}
