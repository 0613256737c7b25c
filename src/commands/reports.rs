// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::sales::{aggregate_sales, summarize};
use crate::store::OrderStore;
use crate::utils::{fmt_money, get_currency, get_sales_window, maybe_print_json, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("sales", sub)) => sales(conn, sub)?,
        Some(("summary", sub)) => summary(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn sales(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let days = match sub.get_one::<usize>("days") {
        Some(d) => *d,
        None => get_sales_window(conn)?,
    };
    let orders = OrderStore::new(conn).all()?;
    let buckets = aggregate_sales(&orders, days);
    if !maybe_print_json(json_flag, jsonl_flag, &buckets)? {
        let ccy = get_currency(conn)?;
        let data = buckets
            .iter()
            .map(|b| vec![b.label.clone(), b.date.to_string(), fmt_money(&b.total, &ccy)])
            .collect();
        println!("{}", pretty_table(&["Day", "Date", "Gross sales"], data));
    }
    Ok(())
}

fn summary(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let orders = OrderStore::new(conn).all()?;
    let s = summarize(&orders);
    if maybe_print_json(sub.get_flag("json"), false, &s)? {
        return Ok(());
    }
    let ccy = get_currency(conn)?;
    let mut data = vec![
        vec!["Orders".to_string(), s.orders.to_string()],
        vec!["Gross sales".to_string(), fmt_money(&s.gross_sales, &ccy)],
        vec![
            "Realized revenue (delivered)".to_string(),
            fmt_money(&s.realized_revenue, &ccy),
        ],
        vec!["Paid".to_string(), s.paid.to_string()],
        vec!["Payment pending".to_string(), s.payment_pending.to_string()],
    ];
    for (status, n) in &s.by_status {
        data.push(vec![format!("Status: {}", status), n.to_string()]);
    }
    println!("{}", pretty_table(&["Metric", "Value"], data));
    Ok(())
}
