// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Order table filtering: free-text search, inclusive date range and
//! status / payment facets, all combined with AND.

use crate::models::{Order, OrderStatus, PaymentMethod, PaymentStatus};
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Inclusive on both ends; a missing bound is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// True when both bounds are set and the start is after the end.
    pub fn is_inverted(&self) -> bool {
        matches!((self.start, self.end), (Some(s), Some(e)) if s > e)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|s| date >= s) && self.end.is_none_or(|e| date <= e)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub query: String,
    pub date_range: DateRange,
    pub statuses: BTreeSet<OrderStatus>,
    pub payment_statuses: BTreeSet<PaymentStatus>,
    pub payment_methods: BTreeSet<PaymentMethod>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty()
            && self.date_range.is_unbounded()
            && self.statuses.is_empty()
            && self.payment_statuses.is_empty()
            && self.payment_methods.is_empty()
    }

    pub fn matches(&self, order: &Order) -> bool {
        self.matcher().matches(order)
    }

    fn matcher(&self) -> Matcher<'_> {
        Matcher {
            needle: self.query.trim().to_lowercase(),
            criteria: self,
        }
    }
}

// Holds the query lowercased once per pass.
struct Matcher<'a> {
    needle: String,
    criteria: &'a FilterCriteria,
}

impl Matcher<'_> {
    fn matches(&self, order: &Order) -> bool {
        let c = self.criteria;
        (self.needle.is_empty()
            || order.id.to_lowercase().contains(&self.needle)
            || order.customer.name.to_lowercase().contains(&self.needle))
            && c.date_range.contains(order.date)
            && (c.statuses.is_empty() || c.statuses.contains(&order.status))
            && (c.payment_statuses.is_empty() || c.payment_statuses.contains(&order.payment_status))
            && (c.payment_methods.is_empty() || c.payment_methods.contains(&order.payment_method))
    }
}

/// Keeps the orders matching every active predicate, in their input order.
pub fn filter_orders(orders: &[Order], criteria: &FilterCriteria) -> Vec<Order> {
    let m = criteria.matcher();
    orders.iter().filter(|o| m.matches(o)).cloned().collect()
}
