// tests/sampler.rs
use movie_sampler::data::PopulationRecord;
use movie_sampler::sampler::{check_available, draw, draw_and_delete};
use movie_sampler::store::{MemoryConnector, MemoryDb, RecordStore};
use movie_sampler::Error;

fn seeded(n: i64) -> (MemoryDb, RecordStore<MemoryConnector>) {
    let db = MemoryDb::with_population((1..=n).map(|id| PopulationRecord::new(id, format!("Film {id}"))));
    let store = RecordStore::new(db.connector());
    (db, store)
}

#[test]
fn draw_is_sorted_and_deletes_nothing() {
    let (db, mut store) = seeded(12);
    let picked = draw(&mut store, 5).unwrap();
    assert_eq!(picked.len(), 5);
    assert!(picked.windows(2).all(|w| w[0].id < w[1].id));
    assert_eq!(db.population_ids().len(), 12);
}

#[test]
fn confirmed_draw_removes_exactly_the_sample() {
    let (db, mut store) = seeded(10);
    let out = draw_and_delete(&mut store, 4, |shown| {
        assert_eq!(shown.len(), 4);
        true
    })
    .unwrap();

    assert!(out.confirmed);
    assert_eq!(out.deleted, 4);

    let left = db.population_ids();
    assert_eq!(left.len(), 6);
    for r in &out.sampled {
        assert!(!left.contains(&r.id), "sampled id {} still present", r.id);
    }

    // listing after the draw reflects the deletion, not a stale cache
    assert_eq!(store.list_population().unwrap().len(), 6);
}

#[test]
fn declined_draw_deletes_nothing() {
    let (db, mut store) = seeded(6);
    let out = draw_and_delete(&mut store, 3, |_| false).unwrap();
    assert!(!out.confirmed);
    assert_eq!(out.deleted, 0);
    assert_eq!(out.sampled.len(), 3);
    assert_eq!(db.population_ids().len(), 6);
}

#[test]
fn drawing_the_whole_population_empties_it() {
    let (db, mut store) = seeded(3);
    let out = draw_and_delete(&mut store, 3, |_| true).unwrap();
    assert_eq!(out.deleted, 3);
    assert!(db.population_ids().is_empty());
}

#[test]
fn concurrent_delete_between_sample_and_delete_is_tolerated() {
    let (db, mut store) = seeded(8);
    let mut other = RecordStore::new(db.connector());

    let out = draw_and_delete(&mut store, 3, |shown| {
        // a second client removes one of the drawn movies first
        assert_eq!(other.delete_by_id(shown[0].id).unwrap(), 1);
        true
    })
    .unwrap();

    assert!(out.confirmed);
    assert_eq!(out.sampled.len(), 3);
    assert_eq!(out.deleted, 2);
    assert_eq!(db.population_ids().len(), 5);
}

#[test]
fn availability_is_checked_before_drawing() {
    let (_db, mut store) = seeded(4);
    assert_eq!(check_available(&mut store, 4).unwrap(), 4);
    assert!(matches!(check_available(&mut store, 5), Err(Error::Validation(_))));
    assert!(matches!(check_available(&mut store, 0), Err(Error::Validation(_))));
}

#[test]
fn zero_draw_is_empty_and_unconfirmed() {
    let (db, mut store) = seeded(4);
    let out = draw_and_delete(&mut store, 0, |_| panic!("nothing to confirm")).unwrap();
    assert!(out.sampled.is_empty());
    assert!(!out.confirmed);
    assert_eq!(db.population_ids().len(), 4);
}

#[test]
fn offline_backend_surfaces_as_unavailable() {
    let (db, mut store) = seeded(4);
    db.set_offline(true);
    let err = draw_and_delete(&mut store, 2, |_| true).unwrap_err();
    assert!(err.is_unavailable());
    db.set_offline(false);
    assert_eq!(db.population_ids().len(), 4);
}
