// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::catalog::{DEFAULT_RECOMMENDATIONS, recommend_by_category};
use crate::models::{Product, ProductVariant};
use crate::store::ProductStore;
use crate::utils::{fmt_money, get_currency, maybe_print_json, parse_decimal, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("recommend", sub)) => recommend(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap().trim().to_string();
    let slug = sub.get_one::<String>("slug").unwrap().trim().to_string();
    let category = sub.get_one::<String>("category").unwrap().trim().to_string();
    let price = parse_decimal(sub.get_one::<String>("price").unwrap())?;
    let id = sub
        .get_one::<String>("id")
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| slug.clone());
    let product = Product {
        variants: vec![ProductVariant {
            id: format!("{}-default", id),
            name: "Default".into(),
            price,
        }],
        id,
        name,
        slug,
        description: sub
            .get_one::<String>("description")
            .cloned()
            .unwrap_or_default(),
        category,
        featured: sub.get_flag("featured"),
        status: Default::default(),
    };
    product.validate()?;
    ProductStore::new(conn).upsert(&product)?;
    println!("Added product '{}' in {}", product.slug, product.category);
    Ok(())
}

fn print_products(conn: &Connection, products: &[Product]) -> Result<()> {
    let ccy = get_currency(conn)?;
    let rows = products
        .iter()
        .map(|p| {
            vec![
                p.slug.clone(),
                p.name.clone(),
                p.category.clone(),
                p.starting_price()
                    .map(|d| fmt_money(&d, &ccy))
                    .unwrap_or_else(|| "-".into()),
                (if p.featured { "yes" } else { "" }).to_string(),
                (if p.is_active() { "active" } else { "inactive" }).to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Slug", "Name", "Category", "From", "Featured", "Status"],
            rows
        )
    );
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let mut data = ProductStore::new(conn).all()?;
    if let Some(cat) = sub.get_one::<String>("category") {
        data.retain(|p| p.category == *cat);
    }
    if !maybe_print_json(sub.get_flag("json"), false, &data)? {
        print_products(conn, &data)?;
    }
    Ok(())
}

fn recommend(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let slug = sub.get_one::<String>("slug").unwrap().trim();
    let limit = sub
        .get_one::<usize>("limit")
        .copied()
        .unwrap_or(DEFAULT_RECOMMENDATIONS);
    let store = ProductStore::new(conn);
    let current = store.by_slug(slug)?;
    let picks = recommend_by_category(&store.all()?, &current, limit);
    if !maybe_print_json(sub.get_flag("json"), false, &picks)? {
        if picks.is_empty() {
            println!("No other products in '{}'", current.category);
        } else {
            print_products(conn, &picks)?;
        }
    }
    Ok(())
}
