// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod db;
pub mod filter;
pub mod models;
pub mod sales;
pub mod store;
pub mod utils;
