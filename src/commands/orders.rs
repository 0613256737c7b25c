// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::filter::{DateRange, FilterCriteria, filter_orders};
use crate::models::{Order, OrderStatus};
use crate::store::OrderStore;
use crate::utils::{fmt_money, get_currency, maybe_print_json, parse_date, pretty_table};
use anyhow::Result;
use rusqlite::Connection;
use std::collections::BTreeSet;
use std::str::FromStr;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(conn, sub)?,
        Some(("show", sub)) => show(conn, sub)?,
        Some(("status", sub)) => set_status(conn, sub)?,
        _ => {}
    }
    Ok(())
}

/// Builds filter criteria from the shared `--query/--from/--to/--status/...` flags.
pub fn criteria_from_matches(sub: &clap::ArgMatches) -> Result<FilterCriteria> {
    let query = sub
        .get_one::<String>("query")
        .map(|s| s.trim().to_string())
        .unwrap_or_default();
    let start = sub.get_one::<String>("from").map(|s| parse_date(s)).transpose()?;
    let end = sub.get_one::<String>("to").map(|s| parse_date(s)).transpose()?;
    let criteria = FilterCriteria {
        query,
        date_range: DateRange::new(start, end),
        statuses: parse_set(sub, "status")?,
        payment_statuses: parse_set(sub, "payment-status")?,
        payment_methods: parse_set(sub, "payment-method")?,
    };
    if criteria.date_range.is_inverted() {
        tracing::warn!(?start, ?end, "date range starts after it ends; nothing will match");
    }
    Ok(criteria)
}

fn parse_set<T>(sub: &clap::ArgMatches, id: &str) -> Result<BTreeSet<T>>
where
    T: FromStr + Ord,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let mut out = BTreeSet::new();
    for raw in sub.get_many::<String>(id).into_iter().flatten() {
        out.insert(raw.parse::<T>()?);
    }
    Ok(out)
}

/// Orders from the store that pass the filter flags on `sub`.
pub fn query_orders(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<Order>> {
    let criteria = criteria_from_matches(sub)?;
    let orders = OrderStore::new(conn).all()?;
    if criteria.is_empty() {
        return Ok(orders);
    }
    let hits = filter_orders(&orders, &criteria);
    tracing::debug!(matched = hits.len(), of = orders.len(), "filtered orders");
    Ok(hits)
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_orders(conn, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let ccy = get_currency(conn)?;
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|o| {
                vec![
                    o.id.clone(),
                    o.customer.name.clone(),
                    o.date.to_string(),
                    o.status.to_string(),
                    fmt_money(&o.total, &ccy),
                    o.payment_method.to_string(),
                    o.payment_status.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Order ID", "Customer", "Date", "Status", "Total", "Method", "Payment"],
                rows,
            )
        );
        println!("{} order(s)", data.len());
    }
    Ok(())
}

fn show(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap().trim();
    let order = OrderStore::new(conn).require(id)?;
    if maybe_print_json(sub.get_flag("json"), false, &order)? {
        return Ok(());
    }
    let ccy = get_currency(conn)?;
    let addr = &order.shipping_address;
    println!("Order {} ({}) placed {}", order.id, order.status, order.date);
    println!("Customer: {} <{}>", order.customer.name, order.customer.email);
    match &addr.region {
        Some(region) => println!(
            "Ship to:  {}, {}, {}, {} {}",
            addr.street, addr.city, region, addr.country, addr.postal_code
        ),
        None => println!(
            "Ship to:  {}, {}, {} {}",
            addr.street, addr.city, addr.country, addr.postal_code
        ),
    }
    println!("Payment:  {} ({})", order.payment_method, order.payment_status);
    let rows: Vec<Vec<String>> = order
        .items
        .iter()
        .map(|i| {
            vec![
                i.name.clone(),
                i.quantity.to_string(),
                fmt_money(&i.price, &ccy),
                fmt_money(&i.line_total(), &ccy),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Product", "Quantity", "Price", "Total"], rows)
    );
    println!("Total: {}", fmt_money(&order.total, &ccy));
    Ok(())
}

fn set_status(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap().trim();
    let status: OrderStatus = sub.get_one::<String>("status").unwrap().parse()?;
    let order = OrderStore::new(conn).set_status(id, status)?;
    println!("Order {} is now {}", order.id, order.status);
    Ok(())
}
