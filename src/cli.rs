// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_flag() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print pretty JSON")
}

fn jsonl_flag() -> Arg {
    Arg::new("jsonl")
        .long("jsonl")
        .action(ArgAction::SetTrue)
        .conflicts_with("json")
        .help("Print one JSON document per line")
}

fn facet(id: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .long(id)
        .value_delimiter(',')
        .action(ArgAction::Append)
        .help(help)
}

/// Flags understood by `criteria_from_matches`.
fn filter_args() -> [Arg; 6] {
    [
        Arg::new("query")
            .short('q')
            .long("query")
            .help("Case-insensitive search over order id and customer name"),
        Arg::new("from")
            .long("from")
            .help("First order date to include (YYYY-MM-DD)"),
        Arg::new("to")
            .long("to")
            .help("Last order date to include (YYYY-MM-DD)"),
        facet("status", "Order status, repeatable or comma separated"),
        facet("payment-status", "Payment status: paid|pending"),
        facet("payment-method", "Payment method: stripe|razorpay"),
    ]
}

pub fn build_cli() -> Command {
    Command::new("orderdesk")
        .version(clap::crate_version!())
        .about("Storefront back office: orders, sales reports, exports, catalog")
        .subcommand(Command::new("init").about("Create the local database"))
        .subcommand(
            Command::new("order")
                .about("Browse and update orders")
                .subcommand_required(true)
                .subcommand(
                    Command::new("list")
                        .about("List orders, newest first")
                        .args(filter_args())
                        .arg(json_flag())
                        .arg(jsonl_flag()),
                )
                .subcommand(
                    Command::new("show")
                        .about("Show one order with its items")
                        .arg(Arg::new("id").required(true))
                        .arg(json_flag()),
                )
                .subcommand(
                    Command::new("status")
                        .about("Move an open order to a new status")
                        .arg(Arg::new("id").required(true))
                        .arg(Arg::new("status").required(true)),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Dashboard reports")
                .subcommand_required(true)
                .subcommand(
                    Command::new("sales")
                        .about("Gross sales per day for the most recent order dates")
                        .arg(
                            Arg::new("days")
                                .long("days")
                                .value_parser(value_parser!(usize))
                                .help("Number of order dates to show (default: sales_window setting)"),
                        )
                        .arg(json_flag())
                        .arg(jsonl_flag()),
                )
                .subcommand(
                    Command::new("summary")
                        .about("Order counts, gross sales and realized revenue")
                        .arg(json_flag()),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Export data")
                .subcommand_required(true)
                .subcommand(
                    Command::new("orders")
                        .about("Export filtered orders as CSV or JSON")
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .default_value("csv")
                                .help("csv|json"),
                        )
                        .arg(Arg::new("out").long("out").required(true))
                        .args(filter_args()),
                ),
        )
        .subcommand(
            Command::new("import")
                .about("Import JSON documents")
                .subcommand_required(true)
                .subcommand(
                    Command::new("orders")
                        .about("Import a JSON array of orders")
                        .arg(Arg::new("path").required(true)),
                )
                .subcommand(
                    Command::new("products")
                        .about("Import a JSON array of products")
                        .arg(Arg::new("path").required(true)),
                ),
        )
        .subcommand(
            Command::new("product")
                .about("Catalog products")
                .subcommand_required(true)
                .subcommand(
                    Command::new("add")
                        .about("Add or replace a single-variant product")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("slug").long("slug").required(true))
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(Arg::new("price").long("price").required(true))
                        .arg(Arg::new("id").long("id"))
                        .arg(Arg::new("description").long("description"))
                        .arg(
                            Arg::new("featured")
                                .long("featured")
                                .action(ArgAction::SetTrue),
                        ),
                )
                .subcommand(
                    Command::new("list")
                        .about("List products in catalog order")
                        .arg(Arg::new("category").long("category"))
                        .arg(json_flag()),
                )
                .subcommand(
                    Command::new("recommend")
                        .about("Other products from the same category")
                        .arg(Arg::new("slug").required(true))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        )
                        .arg(json_flag()),
                ),
        )
        .subcommand(
            Command::new("settings")
                .about("Read or change settings (currency, sales_window)")
                .subcommand_required(true)
                .subcommand(Command::new("get").arg(Arg::new("key").required(true)))
                .subcommand(
                    Command::new("set")
                        .arg(Arg::new("key").required(true))
                        .arg(Arg::new("value").required(true)),
                ),
        )
        .subcommand(Command::new("doctor").about("Check stored data for inconsistencies"))
}
