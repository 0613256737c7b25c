// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Order, OrderStatus, Product};
use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension, params};

pub struct OrderStore<'c> {
    conn: &'c Connection,
}

impl<'c> OrderStore<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    /// Newest first.
    pub fn all(&self) -> Result<Vec<Order>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, body FROM orders ORDER BY date DESC, id DESC")?;
        let rows = stmt.query_map([], |r| Ok((r.get::<_, String>(0)?, r.get::<_, String>(1)?)))?;
        let mut data = Vec::new();
        for row in rows {
            let (id, body) = row?;
            data.push(decode(&id, &body)?);
        }
        tracing::debug!(count = data.len(), "loaded orders");
        Ok(data)
    }

    pub fn get(&self, id: &str) -> Result<Option<Order>> {
        let body: Option<String> = self
            .conn
            .query_row("SELECT body FROM orders WHERE id=?1", params![id], |r| {
                r.get(0)
            })
            .optional()?;
        body.map(|b| decode(id, &b)).transpose()
    }

    pub fn require(&self, id: &str) -> Result<Order> {
        self.get(id)?
            .with_context(|| format!("Order '{}' not found", id))
    }

    pub fn upsert(&self, order: &Order) -> Result<()> {
        let body = serde_json::to_string(order)?;
        self.conn.execute(
            "INSERT INTO orders(id, date, status, body) VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(id) DO UPDATE SET
                date=excluded.date, status=excluded.status, body=excluded.body,
                updated_at=datetime('now')",
            params![order.id, order.date.to_string(), order.status.as_str(), body],
        )?;
        Ok(())
    }

    pub fn set_status(&self, id: &str, status: OrderStatus) -> Result<Order> {
        let mut order = self.require(id)?;
        let from = order.status;
        if order.transition(status)? {
            self.upsert(&order)?;
            tracing::info!(order = id, %from, to = %status, "order status changed");
        }
        Ok(order)
    }
}

pub struct ProductStore<'c> {
    conn: &'c Connection,
}

impl<'c> ProductStore<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    /// Catalog order, i.e. first insertion first.
    pub fn all(&self) -> Result<Vec<Product>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, body FROM products ORDER BY rowid")?;
        let rows = stmt.query_map([], |r| Ok((r.get::<_, String>(0)?, r.get::<_, String>(1)?)))?;
        let mut data = Vec::new();
        for row in rows {
            let (id, body) = row?;
            data.push(decode(&id, &body)?);
        }
        Ok(data)
    }

    pub fn by_slug(&self, slug: &str) -> Result<Product> {
        let (id, body): (String, String) = self
            .conn
            .query_row(
                "SELECT id, body FROM products WHERE slug=?1",
                params![slug],
                |r| Ok((r.get(0)?, r.get(1)?)),
            )
            .with_context(|| format!("Product '{}' not found", slug))?;
        decode(&id, &body)
    }

    pub fn upsert(&self, product: &Product) -> Result<()> {
        let body = serde_json::to_string(product)?;
        self.conn
            .execute(
                "INSERT INTO products(id, slug, category, body) VALUES (?1, ?2, ?3, ?4)
                 ON CONFLICT(id) DO UPDATE SET
                    slug=excluded.slug, category=excluded.category, body=excluded.body,
                    updated_at=datetime('now')",
                params![product.id, product.slug, product.category, body],
            )
            .with_context(|| format!("Save product '{}'", product.slug))?;
        Ok(())
    }
}

fn decode<T: serde::de::DeserializeOwned>(id: &str, body: &str) -> Result<T> {
    serde_json::from_str(body).with_context(|| format!("Corrupt stored document '{}'", id))
}
