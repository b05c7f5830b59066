use crate::support::{build_urn_or_exit, parse_draw_or_exit};
use serde_json::json;
use urnkit_kernel::UrnKind;

pub fn run(draw: String, kind: UrnKind, n: u32, k: u32, json_output: bool) {
    let urn = build_urn_or_exit(kind, n, k);
    let input = parse_draw_or_exit(&draw);
    let accepted = urn.is_accepted(&input);

    if json_output {
        let payload = json!({
            "kind": kind,
            "draw": input,
            "accepted": accepted,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).expect("json serialization")
        );
    } else {
        println!("{}", if accepted { "yes" } else { "no" });
    }

    if !accepted {
        std::process::exit(1);
    }
}
