// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use common::{date, dec, sample_orders};
use orderdesk::models::{
    ModelError, Order, OrderStatus, PaymentMethod, PaymentStatus, Product, parse_order_date,
};
use serde_json::json;

#[test]
fn order_documents_from_the_admin_table_parse() {
    let doc = json!({
        "id": "ORD-001",
        "customer": { "name": "John Doe", "email": "john.d@example.com" },
        "date": "2023-11-20",
        "status": "Delivered",
        "total": 310.00,
        "paymentMethod": "Razorpay",
        "paymentStatus": "Paid",
        "items": [
            { "id": "1", "name": "Yellow Maize (Feed Grade)", "quantity": 1, "price": 250 },
            { "id": "2", "name": "Fresh Cow Milk (Skimmed)", "quantity": 1, "price": 60 }
        ],
        "shippingAddress": {
            "address": "123 Farm Lane",
            "city": "Greenville",
            "country": "India",
            "zip": "12345"
        }
    });
    let order: Order = serde_json::from_value(doc).unwrap();
    assert_eq!(order.date, date("2023-11-20"));
    assert_eq!(order.status, OrderStatus::Delivered);
    assert_eq!(order.payment_method, PaymentMethod::Razorpay);
    assert_eq!(order.shipping_address.street, "123 Farm Lane");
    assert_eq!(order.shipping_address.postal_code, "12345");
    assert_eq!(order.items_total(), dec("310"));
    order.validate().unwrap();
}

#[test]
fn stored_form_reads_back() {
    let order = sample_orders().remove(1);
    let body = serde_json::to_string(&order).unwrap();
    assert!(body.contains("\"date\":\"2023-11-21\""));
    assert!(body.contains("\"postalCode\""));
    let back: Order = serde_json::from_str(&body).unwrap();
    assert_eq!(back, order);
}

#[test]
fn timestamps_keep_their_own_calendar_date() {
    assert_eq!(
        parse_order_date("2023-10-26T10:00:00Z").unwrap(),
        date("2023-10-26")
    );
    assert_eq!(
        parse_order_date("2023-11-20T23:30:00-05:00").unwrap(),
        date("2023-11-20")
    );
    assert_eq!(
        parse_order_date("20/11/2023"),
        Err(ModelError::InvalidDate("20/11/2023".into()))
    );
}

#[test]
fn created_at_alias_and_bad_dates() {
    let mut doc = serde_json::to_value(&sample_orders()[0]).unwrap();
    let obj = doc.as_object_mut().unwrap();
    obj.remove("date");
    obj.insert("createdAt".into(), json!("2023-10-28T14:30:00Z"));
    let order: Order = serde_json::from_value(doc.clone()).unwrap();
    assert_eq!(order.date, date("2023-10-28"));

    doc["createdAt"] = json!("yesterday");
    assert!(serde_json::from_value::<Order>(doc).is_err());
}

#[test]
fn validation_rejects_bad_documents() {
    let mut o = sample_orders().remove(0);
    o.items[0].quantity = 0;
    assert!(matches!(o.validate(), Err(ModelError::InvalidOrder { .. })));

    let mut o = sample_orders().remove(0);
    o.total = dec("-1");
    assert!(o.validate().is_err());

    let mut o = sample_orders().remove(0);
    o.shipping_address.city = "  ".into();
    let err = o.validate().unwrap_err().to_string();
    assert!(err.contains("city"), "{}", err);
}

#[test]
fn product_validation_names_the_product() {
    let doc = json!({
        "id": "p7", "name": "Red Onion", "slug": "red-onion", "category": "vegetables",
        "variants": [ { "id": "v1", "name": "1kg", "price": 40 } ]
    });
    let p: Product = serde_json::from_value(doc).unwrap();
    assert!(p.validate().is_ok());

    let mut blank = p.clone();
    blank.name = " ".into();
    assert!(matches!(
        blank.validate(),
        Err(ModelError::InvalidProduct { ref product, .. }) if product == "p7"
    ));

    let mut cheap = p.clone();
    cheap.variants[0].price = dec("-0.01");
    let err = cheap.validate().unwrap_err().to_string();
    assert_eq!(err, "Product p7: variant '1kg' has negative price -0.01");
}

#[test]
fn closed_orders_cannot_change_status() {
    let mut o = sample_orders().remove(2);
    assert_eq!(o.status, OrderStatus::Processing);
    assert!(o.transition(OrderStatus::Shipped).unwrap());
    assert!(!o.transition(OrderStatus::Shipped).unwrap());
    assert!(o.transition(OrderStatus::Delivered).unwrap());
    assert!(!o.transition(OrderStatus::Delivered).unwrap());
    assert_eq!(
        o.transition(OrderStatus::Cancelled),
        Err(ModelError::IllegalTransition {
            order: "ORD-003".into(),
            from: OrderStatus::Delivered,
        })
    );
}

#[test]
fn enum_text_is_case_insensitive() {
    assert_eq!("SHIPPED".parse::<OrderStatus>().unwrap(), OrderStatus::Shipped);
    assert_eq!("canceled".parse::<OrderStatus>().unwrap(), OrderStatus::Cancelled);
    assert_eq!("stripe".parse::<PaymentMethod>().unwrap(), PaymentMethod::Stripe);
    assert_eq!(" paid ".parse::<PaymentStatus>().unwrap(), PaymentStatus::Paid);
    assert!("paypal".parse::<PaymentMethod>().is_err());
}
