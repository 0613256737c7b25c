// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use common::{conn, sample_orders};
use orderdesk::models::OrderStatus;
use orderdesk::store::OrderStore;
use orderdesk::{cli, commands::orders, utils};

#[test]
fn all_returns_newest_first_and_upsert_replaces() {
    let conn = conn();
    let store = OrderStore::new(&conn);
    for o in sample_orders() {
        store.upsert(&o).unwrap();
    }
    let mut changed = sample_orders().remove(0);
    changed.customer.name = "Johnny Doe".into();
    store.upsert(&changed).unwrap();

    let all = store.all().unwrap();
    let ids: Vec<&str> = all.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, ["ORD-004", "ORD-003", "ORD-002", "ORD-001"]);
    assert_eq!(all[3].customer.name, "Johnny Doe");
    assert!(store.get("ORD-999").unwrap().is_none());
    assert!(store.require("ORD-999").is_err());
}

#[test]
fn status_changes_persist_and_closed_orders_stay_closed() {
    let conn = conn();
    let store = OrderStore::new(&conn);
    for o in sample_orders() {
        store.upsert(&o).unwrap();
    }
    let o = store.set_status("ORD-003", OrderStatus::Shipped).unwrap();
    assert_eq!(o.status, OrderStatus::Shipped);
    assert_eq!(
        store.require("ORD-003").unwrap().status,
        OrderStatus::Shipped
    );
    let status_col: String = conn
        .query_row("SELECT status FROM orders WHERE id='ORD-003'", [], |r| {
            r.get(0)
        })
        .unwrap();
    assert_eq!(status_col, "Shipped");

    assert!(store.set_status("ORD-001", OrderStatus::Cancelled).is_err());
    assert_eq!(
        store.require("ORD-001").unwrap().status,
        OrderStatus::Delivered
    );
}

#[test]
fn list_flags_become_filter_criteria() {
    let conn = conn();
    let store = OrderStore::new(&conn);
    for o in sample_orders() {
        store.upsert(&o).unwrap();
    }
    let matches = cli::build_cli().get_matches_from([
        "orderdesk",
        "order",
        "list",
        "--status",
        "processing,pending",
        "--status",
        "delivered",
        "-q",
        "  o  ",
    ]);
    if let Some(("order", order_m)) = matches.subcommand() {
        if let Some(("list", list_m)) = order_m.subcommand() {
            let rows = orders::query_orders(&conn, list_m).unwrap();
            let ids: Vec<&str> = rows.iter().map(|o| o.id.as_str()).collect();
            assert_eq!(ids, ["ORD-004", "ORD-003", "ORD-001"]);
        } else {
            panic!("no list subcommand");
        }
    } else {
        panic!("no order subcommand");
    }
}

#[test]
fn unknown_status_flag_is_an_error() {
    let conn = conn();
    let matches =
        cli::build_cli().get_matches_from(["orderdesk", "order", "list", "--status", "lost"]);
    let (_, order_m) = matches.subcommand().unwrap();
    let (_, list_m) = order_m.subcommand().unwrap();
    assert!(orders::query_orders(&conn, list_m).is_err());
}

#[test]
fn settings_fall_back_to_defaults() {
    let conn = conn();
    assert_eq!(utils::get_currency(&conn).unwrap(), "INR");
    assert_eq!(utils::get_sales_window(&conn).unwrap(), 7);

    utils::set_setting(&conn, "sales_window", "14").unwrap();
    utils::set_setting(&conn, "currency", "USD").unwrap();
    assert_eq!(utils::get_sales_window(&conn).unwrap(), 14);
    assert_eq!(utils::get_currency(&conn).unwrap(), "USD");

    assert!(utils::set_setting(&conn, "sales_window", "0").is_err());
    assert!(utils::set_setting(&conn, "theme", "dark").is_err());
    assert_eq!(utils::get_sales_window(&conn).unwrap(), 14);
}

#[test]
fn money_is_rounded_not_truncated() {
    let amount = |s: &str| utils::fmt_money(&common::dec(s), "INR");
    assert_eq!(amount("150.255"), "INR 150.26");
    assert_eq!(amount("0.129"), "INR 0.13");
    assert_eq!(amount("-2.345"), "INR -2.35");
    assert_eq!(amount("800.5"), "INR 800.50");
}
