// tests/runner.rs
//
// The runner never lets a failure escape: it reports and returns a default.
//
use std::net::TcpListener;
use std::time::Duration;

use movie_sampler::config::FetchOptions;
use movie_sampler::data::{ManualFields, PopulationRecord, ScrapedFields};
use movie_sampler::report::Collected;
use movie_sampler::runner::{Runner, fetch_reported};
use movie_sampler::store::{MemoryConnector, MemoryDb, RecordStore, UpsertOutcome};

fn runner_over(db: &MemoryDb) -> Runner<MemoryConnector, Collected> {
    Runner::new(RecordStore::new(db.connector()), Collected::default())
}

fn seeded(n: i64) -> MemoryDb {
    MemoryDb::with_population((1..=n).map(|id| PopulationRecord::new(id, format!("Title {id}"))))
}

#[test]
fn ping_reports_health() {
    let db = seeded(1);
    let mut runner = runner_over(&db);
    assert!(runner.ping());
    assert!(runner.report().failures.is_empty());
    assert_eq!(runner.report().infos, vec!["Connection OK (ping passed).".to_string()]);

    db.set_offline(true);
    runner.refresh();
    assert!(!runner.ping());
    assert_eq!(runner.report().failures.len(), 1);
    assert_eq!(runner.report().failures[0].0, "ping");
}

#[test]
fn offline_backend_yields_safe_defaults() {
    let db = seeded(5);
    db.set_offline(true);
    let mut runner = runner_over(&db);

    assert!(runner.list_population().is_empty());
    assert_eq!(runner.delete_by_id(1), 0);
    assert_eq!(runner.delete_by_ids(&[1, 2]), 0);
    assert!(runner.sample_random(2).is_empty());
    assert_eq!(runner.available(2), None);
    assert!(runner.dataset().is_empty());
    let drawn = runner.draw_and_delete(2, |_| true);
    assert!(!drawn.confirmed);
    assert_eq!(drawn.deleted, 0);
    assert_eq!(runner.save(Some("u"), ManualFields::default(), None), None);

    let ops: Vec<&str> = runner.report().failures.iter().map(|(op, _)| op.as_str()).collect();
    assert_eq!(
        ops,
        vec![
            "list population",
            "delete",
            "bulk delete",
            "sample",
            "availability check",
            "read Data-Set",
            "draw and delete",
            "save",
        ]
    );
    assert!(runner.report().failures.iter().all(|(_, msg)| msg.contains("unavailable")));
    assert_eq!(db.population_ids().len(), 5);
}

#[test]
fn oversized_availability_check_is_reported() {
    let db = seeded(2);
    let mut runner = runner_over(&db);
    assert_eq!(runner.available(2), Some(2));
    assert_eq!(runner.available(3), None);
    assert!(runner.report().failures[0].1.contains("Not enough movies"));
}

#[test]
fn save_inserts_then_updates() {
    let db = MemoryDb::new();
    let mut runner = runner_over(&db);
    let scraped = ScrapedFields {
        url: "https://www.imdb.com/title/tt0000001/".into(),
        year: Some(1999),
        imdb_rating: Some(7.1),
        number_of_votes: Some(1200),
        runtime: Some(101),
    };
    let manual = || ManualFields::from_text("Solas", "Drama", "Benito Zambrano", "", "Spain", 0);

    assert_eq!(
        runner.save(Some(&scraped.url), manual(), Some(&scraped)),
        Some(UpsertOutcome::Inserted)
    );
    assert_eq!(
        runner.save(Some(&scraped.url), manual(), Some(&scraped)),
        Some(UpsertOutcome::Updated)
    );

    let stored = runner.dataset();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].year, Some(1999));
    assert_eq!(stored[0].director, vec!["Benito Zambrano".to_string()]);
    assert!(stored[0].writer.is_empty());
    assert_eq!(stored[0].gross_profit, None);
    assert!(runner.report().failures.is_empty());
}

#[test]
fn fetch_failure_returns_none() {
    let db = MemoryDb::new();
    let mut runner = runner_over(&db);
    assert_eq!(runner.fetch("not a url"), None);
    assert_eq!(runner.report().failures.len(), 1);
    assert_eq!(runner.report().failures[0].0, "fetch");
    assert_eq!(db.round_trips(), 0, "fetching never touches the backend");
}

#[test]
fn draw_and_delete_reports_count() {
    let db = seeded(5);
    let mut runner = runner_over(&db);
    let out = runner.draw_and_delete(2, |_| true);
    assert_eq!(out.deleted, 2);
    assert_eq!(runner.list_population().len(), 3);
    assert!(runner.report().infos.contains(&"Deleted 2 movies.".to_string()));
}

#[test]
fn standalone_fetch_failure_is_reported_not_raised() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let opts = FetchOptions { timeout: Duration::from_secs(2), ..FetchOptions::default() };
    let mut report = Collected::default();

    let out = fetch_reported(&format!("http://127.0.0.1:{port}/title/"), &opts, &mut report);
    assert_eq!(out, None);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].0, "fetch");
    assert!(report.failures[0].1.contains("fetch failed"));
    assert!(report.infos.is_empty());
}
