// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use common::{dec, sample_orders};
use orderdesk::catalog::recommend_by_category;
use orderdesk::commands::doctor::diagnose;
use orderdesk::models::{OrderStatus, PaymentStatus, Product, ProductStatus, ProductVariant};

fn product(id: &str, category: &str) -> Product {
    Product {
        id: id.into(),
        name: format!("Product {}", id),
        slug: format!("product-{}", id),
        description: String::new(),
        category: category.into(),
        variants: vec![ProductVariant {
            id: "v1".into(),
            name: "Default".into(),
            price: dec("10"),
        }],
        featured: false,
        status: ProductStatus::Active,
    }
}

#[test]
fn recommends_same_category_excluding_current() {
    let mut catalog = vec![
        product("1", "fruits"),
        product("2", "grains"),
        product("3", "fruits"),
        product("4", "fruits"),
        product("5", "fruits"),
        product("6", "fruits"),
    ];
    catalog[3].status = ProductStatus::Inactive;

    let picks = recommend_by_category(&catalog, &catalog[0], 3);
    let ids: Vec<&str> = picks.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["3", "5", "6"]);

    assert!(recommend_by_category(&catalog, &catalog[1], 3).is_empty());
    assert_eq!(recommend_by_category(&catalog, &catalog[0], 1).len(), 1);
}

#[test]
fn doctor_flags_inconsistent_records() {
    let mut orders = sample_orders();
    orders[0].total = dec("300.00");
    orders[0].payment_status = PaymentStatus::Pending;
    orders[1].items.clear();
    orders[2].status = OrderStatus::Delivered;

    let mut bare = product("9", "misc");
    bare.variants.clear();

    let issues = diagnose(&orders, &[product("1", "fruits"), bare]);
    let kinds: Vec<(&str, &str)> = issues
        .iter()
        .map(|i| (i.kind, i.detail.as_str()))
        .collect();
    assert_eq!(
        kinds,
        [
            ("total_mismatch", "ORD-001 total 300.00 vs items 310.00"),
            ("delivered_unpaid", "ORD-001 (Razorpay)"),
            ("empty_order", "ORD-002"),
            ("delivered_unpaid", "ORD-003 (Razorpay)"),
            ("product_without_variants", "product-9"),
        ]
    );
    assert!(diagnose(&sample_orders(), &[]).is_empty());
}

#[test]
fn doctor_reports_mismatches_below_a_cent() {
    let mut orders = sample_orders();
    orders.truncate(1);
    orders[0].total = dec("310.004");

    let issues = diagnose(&orders, &[]);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].detail, "ORD-001 total 310.004 vs items 310.00");
}
