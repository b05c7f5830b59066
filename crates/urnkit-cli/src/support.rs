//! Shared helpers for the subcommands.

use urnkit_kernel::{Urn, UrnError, UrnKind};

/// Build the model or exit with the configuration error.
pub fn build_urn_or_exit(kind: UrnKind, n: u32, k: u32) -> Urn {
    match Urn::new(n, k, kind) {
        Ok(urn) => urn,
        Err(err) => fail(err),
    }
}

/// Parse a comma-separated draw, e.g. `0,2,1`.
pub fn parse_draw_or_exit(text: &str) -> Vec<u32> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split(',')
        .map(|part| match part.trim().parse::<u32>() {
            Ok(digit) => digit,
            Err(_) => {
                eprintln!("urnkit: invalid draw digit: {part:?}");
                std::process::exit(1);
            }
        })
        .collect()
}

pub fn format_draw(draw: &[u32]) -> String {
    draw.iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

pub fn fail(err: UrnError) -> ! {
    eprintln!("urnkit: {err}");
    std::process::exit(1);
}
