// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Order, OrderStatus, PaymentStatus};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

/// One calendar date of booked sales.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalesBucket {
    pub date: NaiveDate,
    pub label: String,
    pub total: Decimal,
}

/// "Nov 20", "Dec 5".
pub fn bucket_label(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// Gross sales per order date, ascending, keeping only the most recent
/// `max_buckets` dates. Every order counts, whatever its status.
pub fn aggregate_sales(orders: &[Order], max_buckets: usize) -> Vec<SalesBucket> {
    let mut by_day: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for o in orders {
        *by_day.entry(o.date).or_insert(Decimal::ZERO) += o.total;
    }
    let skip = by_day.len().saturating_sub(max_buckets.max(1));
    by_day
        .into_iter()
        .skip(skip)
        .map(|(date, total)| SalesBucket {
            date,
            label: bucket_label(date),
            total,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalesSummary {
    pub orders: usize,
    /// All orders, cancelled included.
    pub gross_sales: Decimal,
    /// Delivered orders only.
    pub realized_revenue: Decimal,
    pub by_status: BTreeMap<OrderStatus, usize>,
    pub paid: usize,
    pub payment_pending: usize,
}

pub fn summarize(orders: &[Order]) -> SalesSummary {
    let mut by_status: BTreeMap<OrderStatus, usize> =
        OrderStatus::ALL.iter().map(|s| (*s, 0)).collect();
    let mut gross_sales = Decimal::ZERO;
    let mut realized_revenue = Decimal::ZERO;
    let mut paid = 0;
    for o in orders {
        gross_sales += o.total;
        if o.status == OrderStatus::Delivered {
            realized_revenue += o.total;
        }
        *by_status.entry(o.status).or_insert(0) += 1;
        if o.payment_status == PaymentStatus::Paid {
            paid += 1;
        }
    }
    SalesSummary {
        orders: orders.len(),
        gross_sales,
        realized_revenue,
        by_status,
        paid,
        payment_pending: orders.len() - paid,
    }
}
