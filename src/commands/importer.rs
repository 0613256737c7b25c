// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Order, Product};
use crate::store::{OrderStore, ProductStore};
use anyhow::{Context, Result};
use rusqlite::Connection;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub fn handle(conn: &mut Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("orders", sub)) => import_orders(conn, sub),
        Some(("products", sub)) => import_products(conn, sub),
        _ => Ok(()),
    }
}

/// Reads a JSON array of documents, naming the offending entry on failure.
fn read_documents<T: DeserializeOwned>(path: &str) -> Result<Vec<T>> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("Open JSON {}", path))?;
    let values: Vec<Value> = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a JSON array of documents", path))?;
    values
        .into_iter()
        .enumerate()
        .map(|(i, v)| {
            let id = v
                .get("id")
                .and_then(Value::as_str)
                .unwrap_or("?")
                .to_string();
            serde_json::from_value(v)
                .with_context(|| format!("Invalid document #{} (id '{}')", i + 1, id))
        })
        .collect()
}

fn import_orders(conn: &mut Connection, sub: &clap::ArgMatches) -> Result<()> {
    let path = sub.get_one::<String>("path").unwrap().trim();
    let orders: Vec<Order> = read_documents(path)?;

    let tx = conn.transaction()?;
    {
        let store = OrderStore::new(&tx);
        for order in &orders {
            order.validate()?;
            store.upsert(order)?;
        }
    }
    tx.commit()?;
    tracing::info!(count = orders.len(), path, "imported orders");
    println!("Imported {} order(s) from {}", orders.len(), path);
    Ok(())
}

fn import_products(conn: &mut Connection, sub: &clap::ArgMatches) -> Result<()> {
    let path = sub.get_one::<String>("path").unwrap().trim();
    let products: Vec<Product> = read_documents(path)?;

    let tx = conn.transaction()?;
    {
        let store = ProductStore::new(&tx);
        for p in &products {
            p.validate()?;
            store.upsert(p)?;
        }
    }
    tx.commit()?;
    tracing::info!(count = products.len(), path, "imported products");
    println!("Imported {} product(s) from {}", products.len(), path);
    Ok(())
}
