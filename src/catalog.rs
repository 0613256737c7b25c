// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Product;

pub const DEFAULT_RECOMMENDATIONS: usize = 3;

/// Other active products from the same category, in catalog order.
pub fn recommend_by_category(products: &[Product], current: &Product, limit: usize) -> Vec<Product> {
    products
        .iter()
        .filter(|p| p.category == current.category && p.id != current.id && p.is_active())
        .take(limit)
        .cloned()
        .collect()
}
