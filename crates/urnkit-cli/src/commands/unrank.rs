use crate::support::{build_urn_or_exit, fail, format_draw};
use serde_json::json;
use urnkit_kernel::UrnKind;

pub fn run(ordinal: i64, kind: UrnKind, n: u32, k: u32, json_output: bool) {
    let urn = build_urn_or_exit(kind, n, k);

    let draw = match urn.unrank(ordinal) {
        Ok(draw) => draw,
        Err(err) => fail(err),
    };

    if json_output {
        let payload = json!({
            "kind": kind,
            "n": n,
            "k": k,
            "ordinal": ordinal,
            "draw": draw,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).expect("json serialization")
        );
    } else {
        println!("{}", format_draw(&draw));
    }
}
