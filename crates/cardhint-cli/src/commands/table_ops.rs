use std::fs;

use cardhint_core::romanize::{self, Romanizer};

pub fn romanize_cmd(ipa: &[String], table: Option<&str>) {
    let custom = table.map(|file| {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(romanize::parse_table_toml(&content), "Error: {}")
    });
    let romanizer = custom.as_ref().unwrap_or_else(|| Romanizer::global());
    for s in ipa {
        println!("{s}\t{}", romanizer.romanize(s));
    }
}

pub fn table_export() {
    print!("{}", romanize::default_toml());
}

pub fn table_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let romanizer = die!(romanize::parse_table_toml(&content), "Error: {}");
    println!("OK: {} rules", romanizer.rule_count());
}
