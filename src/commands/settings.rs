// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::utils::{SETTING_KEYS, get_currency, get_sales_window, set_setting};
use anyhow::{Result, bail};
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("get", sub)) => {
            let key = sub.get_one::<String>("key").unwrap().trim();
            let value = match key {
                "currency" => get_currency(conn)?,
                "sales_window" => get_sales_window(conn)?.to_string(),
                _ => bail!("Unknown setting '{}' (use {})", key, SETTING_KEYS.join("|")),
            };
            println!("{} = {}", key, value);
        }
        Some(("set", sub)) => {
            let key = sub.get_one::<String>("key").unwrap().trim();
            let mut value = sub.get_one::<String>("value").unwrap().trim().to_string();
            if key == "currency" {
                value = value.to_uppercase();
            }
            set_setting(conn, key, &value)?;
            tracing::info!(key, value = %value, "setting updated");
            println!("{} = {}", key, value);
        }
        _ => {}
    }
    Ok(())
}
