#![cfg(test)]
use std::time::{Duration, Instant};

use shipbox_common::shipping::country::Country;
use shipbox_core::app::App;
use shipbox_core::listing::{CountryFilter, SortField, SortOrder};
use shipbox_core::router::Route;
use shipbox_core::storage::FileStorage;
use shipbox_core::store::BoxStore;

fn submit(app: &mut App<FileStorage>, name: &str, weight: &str, color: &str, country: Country) {
    app.form.set_receiver_name(name);
    app.form.set_weight(weight);
    app.form.set_box_color(color);
    app.form.set_destination_country(country);
    app.submit_form().expect("valid form");
}

#[test]
fn form_to_list_session() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = App::new(
        BoxStore::open(FileStorage::new(dir.path())),
        Duration::from_millis(300),
    );

    submit(&mut app, "Charlie", "3", "#ff0000", Country::Brazil);
    submit(&mut app, "alice", "10", "#00ff00", Country::China);
    submit(&mut app, "Bob", "2", "#0000ff", Country::Australia);
    assert_eq!(app.router.current(), Route::BoxList);

    app.list.activate_sort(SortField::Name);
    let names: Vec<&str> = app.projection().rows.iter().map(|b| b.receiver_name.as_str()).collect();
    assert_eq!(names, ["alice", "Bob", "Charlie"]);

    app.list.activate_sort(SortField::Cost);
    app.list.activate_sort(SortField::Cost);
    assert_eq!(app.list.query().sort.order, SortOrder::Desc);
    let costs: Vec<f64> = app.projection().rows.iter().map(|b| b.shipping_cost).collect();
    assert_eq!(costs, [115.3, 100.18, 46.89]);

    app.list.set_country_filter(CountryFilter::Only(Country::Brazil));
    let projection = app.projection();
    assert_eq!(projection.rows.len(), 1);
    assert_eq!(projection.rows[0].box_color, "255, 0, 0");
    assert!((projection.total_cost - 262.37).abs() < 1e-9);
}

#[test]
fn session_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut app = App::new(BoxStore::open(FileStorage::new(dir.path())), Duration::ZERO);
        submit(&mut app, "Ada", "1.234", "#000000", Country::Sweden);
    }

    let mut app = App::new(BoxStore::open(FileStorage::new(dir.path())), Duration::ZERO);
    assert_eq!(app.store().len(), 1);
    assert_eq!(app.store().boxes()[0].shipping_cost, 9.07);

    app.list.type_search("ADA", Instant::now());
    assert!(app.list.tick(Instant::now()));
    assert_eq!(app.projection().rows.len(), 1);

    let id = app.store().boxes()[0].id.clone();
    assert!(app.delete_box(&id));
    assert!(app.projection().is_empty());
}
