// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Order, OrderStatus, PaymentStatus, Product};
use crate::store::{OrderStore, ProductStore};
use crate::utils::pretty_table;
use anyhow::Result;
use rusqlite::Connection;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub kind: &'static str,
    pub detail: String,
}

pub fn diagnose(orders: &[Order], products: &[Product]) -> Vec<Issue> {
    let mut issues = Vec::new();
    for o in orders {
        if o.items.is_empty() {
            issues.push(Issue {
                kind: "empty_order",
                detail: o.id.clone(),
            });
        } else if o.items_total() != o.total {
            issues.push(Issue {
                kind: "total_mismatch",
                detail: format!("{} total {} vs items {}", o.id, o.total, o.items_total()),
            });
        }
        if o.status == OrderStatus::Delivered && o.payment_status == PaymentStatus::Pending {
            issues.push(Issue {
                kind: "delivered_unpaid",
                detail: format!("{} ({})", o.id, o.payment_method),
            });
        }
    }
    for p in products {
        if p.variants.is_empty() {
            issues.push(Issue {
                kind: "product_without_variants",
                detail: p.slug.clone(),
            });
        }
    }
    issues
}

pub fn handle(conn: &Connection) -> Result<()> {
    let orders = OrderStore::new(conn).all()?;
    let products = ProductStore::new(conn).all()?;
    let issues = diagnose(&orders, &products);

    if issues.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        let rows = issues
            .into_iter()
            .map(|i| vec![i.kind.to_string(), i.detail])
            .collect();
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
