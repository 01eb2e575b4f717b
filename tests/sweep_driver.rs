use clean_sweep::agent::Cleaner;
use clean_sweep::config::{CleanerConfig, FailedMovePolicy};
use clean_sweep::context::Context;
use clean_sweep::floor::parse_layout;
use clean_sweep::ledger::{InMemoryLedger, PowerEvent, PowerLedger};
use clean_sweep::model::{Heading, Position};
use clean_sweep::protocol::{Route, run_route};
use std::cell::RefCell;
use std::rc::Rc;

const LAYOUT: &str = "
C  B1 L2
B1 #  H3
";

#[test]
fn sweeps_a_layout_along_a_json_route() {
    let floor = parse_layout(LAYOUT).unwrap();
    let start = floor.tile_at(Position::new(0, 0)).unwrap();
    let route = Route::from_json(
        r#"{ "route": [
            { "type": "face", "heading": "E" },
            { "type": "move", "direction": "ahead" },
            { "type": "clean" },
            { "type": "move", "direction": "ahead" },
            { "type": "clean" },
            { "type": "clean" },
            { "type": "move", "direction": "right" },
            { "type": "clean" },
            { "type": "move", "direction": "right" },
            { "type": "move", "direction": "back" }
        ] }"#,
    )
    .unwrap();

    let mut cleaner = Cleaner::new(Context::new(floor), start);
    let report = run_route(&mut cleaner, &route);

    assert_eq!(report.commands_run, 10);
    assert_eq!(report.moves_attempted, 5);
    // (2,1) -> west is the obstacle at (1,1); back from there is east with no tile.
    assert_eq!(report.moves_made, 3);
    assert_eq!(report.units_cleaned, 4);
    assert_eq!(cleaner.heading(), Heading::East);
    assert_eq!(cleaner.current_tile_snapshot().position, Position::new(2, 1));
    assert_eq!(cleaner.floor().total_dirt(), 1 + 2);

    // Moves: (0,0)->(1,0) 1.0, (1,0)->(2,0) 1.5, (2,0)->(2,1) 2.5.
    // Cleaning: 1 + 2 + 2 + 3.
    let ledger = cleaner.ledger();
    assert_eq!(ledger.total(PowerEvent::Movement), 5.0);
    assert_eq!(ledger.total(PowerEvent::Cleaning), 8.0);
    assert_eq!(report.battery, 250.0 - 13.0);
    assert_eq!(cleaner.visited().len(), 4);
    assert_eq!(cleaner.history().len(), 3);
}

#[test]
fn returning_to_the_station_recharges() {
    let floor = parse_layout("C B5").unwrap();
    let start = floor.tile_at(Position::new(1, 0)).unwrap();
    let config = CleanerConfig::new().with_max_battery(40.0);
    let mut cleaner = Cleaner::with_config(config, 40.0, Context::new(floor), Some(start)).unwrap();

    for _ in 0..5 {
        assert!(cleaner.clean_current());
    }
    assert_eq!(cleaner.battery(), 35.0);

    cleaner.change_heading(Heading::West);
    assert!(cleaner.move_ahead());
    assert_eq!(cleaner.battery(), 40.0);

    let records = cleaner.ledger().records();
    let kinds: Vec<_> = records.iter().map(|r| r.event).collect();
    assert_eq!(
        kinds,
        vec![
            PowerEvent::Cleaning,
            PowerEvent::Cleaning,
            PowerEvent::Cleaning,
            PowerEvent::Cleaning,
            PowerEvent::Cleaning,
            PowerEvent::Movement,
            PowerEvent::Charging,
        ]
    );
    assert_eq!(records[6].battery_before, 34.0);
}

#[test]
fn compatibility_policy_recharges_while_parked() {
    let floor = parse_layout("C").unwrap();
    let start = floor.tile_at(Position::new(0, 0)).unwrap();
    let config = CleanerConfig::new().with_failed_move_policy(FailedMovePolicy::Charged);
    let mut cleaner = Cleaner::with_config(config, 10.0, Context::new(floor), Some(start)).unwrap();

    assert!(!cleaner.move_ahead());
    assert_eq!(cleaner.battery(), 250.0);
    assert_eq!(cleaner.ledger().count(PowerEvent::Charging), 1);
}

#[test]
fn cleaners_share_one_ledger() {
    let shared = Rc::new(RefCell::new(InMemoryLedger::new()));

    let floor_a = parse_layout("B2 B2").unwrap();
    let start_a = floor_a.tile_at(Position::new(0, 0)).unwrap();
    let mut a = Cleaner::new(Context::new(floor_a).with_ledger(Rc::clone(&shared)), start_a);

    let floor_b = parse_layout("L1\nL1").unwrap();
    let start_b = floor_b.tile_at(Position::new(0, 1)).unwrap();
    let mut b = Cleaner::new(Context::new(floor_b).with_ledger(Rc::clone(&shared)), start_b);

    assert!(a.clean_current());
    assert!(b.move_ahead());
    assert!(a.move_right());

    let events: Vec<_> = shared.borrow().records().iter().map(|r| r.event).collect();
    assert_eq!(
        events,
        vec![PowerEvent::Cleaning, PowerEvent::Movement, PowerEvent::Movement]
    );
    assert_eq!(shared.borrow().total(PowerEvent::Movement), 2.0 + 1.0);
}
