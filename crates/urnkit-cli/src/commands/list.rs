use crate::support::{build_urn_or_exit, format_draw};
use serde_json::json;
use urnkit_kernel::UrnKind;

pub fn run(kind: UrnKind, n: u32, k: u32, limit: Option<u64>, rev: bool, json_output: bool) {
    let urn = build_urn_or_exit(kind, n, k);
    let limit = limit.unwrap_or(u64::MAX) as usize;

    // Stream lazily in both plain and JSON modes; the sequence can be
    // far too large to collect.
    let draws: Box<dyn Iterator<Item = Vec<u32>>> = if rev {
        Box::new(urn.iter().rev())
    } else {
        Box::new(urn.iter())
    };

    if json_output {
        for (offset, draw) in draws.take(limit).enumerate() {
            let ordinal = if rev {
                urn.count() as i64 - 1 - offset as i64
            } else {
                offset as i64
            };
            let payload = json!({ "ordinal": ordinal, "draw": draw });
            println!(
                "{}",
                serde_json::to_string(&payload).expect("json serialization")
            );
        }
    } else {
        for draw in draws.take(limit) {
            println!("{}", format_draw(&draw));
        }
    }
}
