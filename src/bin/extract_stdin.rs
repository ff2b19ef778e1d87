//! Simple CLI that reads a search page from stdin and outputs the ad records
//! as JSON to stdout. The keyword is the first argument.

use naver_ad_parser::parse_html_bytes;
use serde::Serialize;
use std::env;
use std::io::{self, Read};

#[derive(Serialize)]
struct Output {
    keyword: String,
    candidate_blocks: usize,
    records: Vec<naver_ad_parser::AdRecord>,
    warnings: Vec<String>,
}

fn main() {
    let keyword = env::args().nth(1).unwrap_or_default();

    let mut html = Vec::new();
    if io::stdin().read_to_end(&mut html).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    let parsed = parse_html_bytes(&html, &keyword);
    let output = Output {
        keyword,
        candidate_blocks: parsed.candidate_blocks,
        records: parsed.records,
        warnings: parsed.warnings,
    };

    match serde_json::to_string(&output) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("Failed to serialize output: {err}");
            std::process::exit(1);
        }
    }
}
