//! Urnkit CLI: the `urnkit` command.

mod cli;
mod commands;
mod support;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Count { kind, n, k, json } => commands::count::run(kind.into(), n, k, json),

        Commands::Unrank {
            ordinal,
            kind,
            n,
            k,
            json,
        } => commands::unrank::run(ordinal, kind.into(), n, k, json),

        Commands::List {
            kind,
            n,
            k,
            limit,
            rev,
            json,
        } => commands::list::run(kind.into(), n, k, limit, rev, json),

        Commands::Next {
            draw,
            kind,
            n,
            k,
            json,
        } => commands::next::run(draw, kind.into(), n, k, json),

        Commands::Back {
            draw,
            kind,
            n,
            k,
            json,
        } => commands::back::run(draw, kind.into(), n, k, json),

        Commands::Contains {
            draw,
            kind,
            n,
            k,
            json,
        } => commands::contains::run(draw, kind.into(), n, k, json),
    }
}
