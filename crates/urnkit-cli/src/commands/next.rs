use crate::support::{build_urn_or_exit, fail, format_draw, parse_draw_or_exit};
use serde_json::json;
use urnkit_kernel::UrnKind;

pub fn run(draw: String, kind: UrnKind, n: u32, k: u32, json_output: bool) {
    let urn = build_urn_or_exit(kind, n, k);
    let input = parse_draw_or_exit(&draw);

    let next = match urn.successor(&input) {
        Ok(next) => next,
        Err(err) => fail(err),
    };

    if json_output {
        let payload = json!({
            "kind": kind,
            "draw": input,
            "next": next,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).expect("json serialization")
        );
    } else {
        println!("{}", format_draw(&next));
    }
}
