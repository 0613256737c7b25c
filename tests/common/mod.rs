// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

#![allow(dead_code)]

use orderdesk::models::{
    Customer, LineItem, Order, OrderStatus, PaymentMethod, PaymentStatus, ShippingAddress,
};
use rusqlite::Connection;
use rust_decimal::Decimal;

pub fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

pub fn date(s: &str) -> chrono::NaiveDate {
    chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn order(
    id: &str,
    customer: &str,
    day: &str,
    status: OrderStatus,
    total: &str,
    method: PaymentMethod,
    payment: PaymentStatus,
) -> Order {
    Order {
        id: id.into(),
        customer: Customer {
            name: customer.into(),
            email: format!("{}@example.com", customer.to_lowercase().replace(' ', ".")),
        },
        date: date(day),
        status,
        total: dec(total),
        payment_method: method,
        payment_status: payment,
        items: vec![LineItem {
            id: "1".into(),
            name: "Item".into(),
            quantity: 1,
            price: dec(total),
        }],
        shipping_address: ShippingAddress {
            street: "123 Farm Lane".into(),
            city: "Greenville".into(),
            region: None,
            country: "India".into(),
            postal_code: "12345".into(),
        },
    }
}

/// The four orders of the admin order table.
pub fn sample_orders() -> Vec<Order> {
    use OrderStatus::*;
    use PaymentMethod::*;
    vec![
        order("ORD-001", "John Doe", "2023-11-20", Delivered, "310.00", Razorpay, PaymentStatus::Paid),
        order("ORD-002", "Jane Smith", "2023-11-21", Shipped, "800.50", Stripe, PaymentStatus::Paid),
        order("ORD-003", "Bob Johnson", "2023-11-22", Processing, "120.00", Razorpay, PaymentStatus::Pending),
        order("ORD-004", "Alice Williams", "2023-11-23", Pending, "450.75", Stripe, PaymentStatus::Paid),
    ]
}

pub fn conn() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    orderdesk::db::init_schema(&conn).unwrap();
    conn
}
