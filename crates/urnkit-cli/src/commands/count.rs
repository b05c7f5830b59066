use crate::support::build_urn_or_exit;
use serde_json::json;
use urnkit_kernel::UrnKind;

pub fn run(kind: UrnKind, n: u32, k: u32, json_output: bool) {
    let urn = build_urn_or_exit(kind, n, k);

    if json_output {
        let payload = json!({
            "kind": kind,
            "n": n,
            "k": k,
            "count": urn.count(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).expect("json serialization")
        );
    } else {
        println!("{}", urn.count());
    }
}
