// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::orders::query_orders;
use crate::models::Order;
use crate::utils::round_money;
use anyhow::{Context, Result, anyhow, bail};
use rusqlite::Connection;

pub const CSV_HEADER: [&str; 7] = [
    "Order ID",
    "Customer",
    "Date",
    "Status",
    "Total",
    "Payment Method",
    "Payment Status",
];

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("orders", sub)) => export_orders(conn, sub),
        _ => Ok(()),
    }
}

/// One row per order, header first, totals with two decimals.
pub fn orders_to_csv(orders: &[Order]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(CSV_HEADER)?;
    for o in orders {
        let date = o.date.format("%Y-%m-%d").to_string();
        let total = format!("{:.2}", round_money(o.total));
        wtr.write_record([
            o.id.as_str(),
            o.customer.name.as_str(),
            date.as_str(),
            o.status.as_str(),
            total.as_str(),
            o.payment_method.as_str(),
            o.payment_status.as_str(),
        ])?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| anyhow!("Flush CSV buffer: {}", e.error()))?;
    Ok(String::from_utf8(bytes)?)
}

pub fn orders_to_json(orders: &[Order]) -> Result<String> {
    Ok(serde_json::to_string_pretty(orders)?)
}

fn export_orders(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap().trim();

    let orders = query_orders(conn, sub)?;
    let rendered = match fmt.as_str() {
        "csv" => orders_to_csv(&orders)?,
        "json" => orders_to_json(&orders)?,
        _ => bail!("Unknown format: {} (use csv|json)", fmt),
    };
    std::fs::write(out, rendered).with_context(|| format!("Write {}", out))?;
    tracing::info!(count = orders.len(), format = %fmt, path = out, "exported orders");
    println!("Exported {} order(s) to {}", orders.len(), out);
    Ok(())
}
