fn main() {
    // Validate embedded TOML files at compile time.
    validate_toml(
        "src/romanize/default_ipa.toml",
        include_str!("src/romanize/default_ipa.toml"),
    );
}

fn validate_toml(path: &str, content: &str) {
    if content.parse::<toml::Value>().is_err() {
        panic!("{path} contains invalid TOML");
    }
}
