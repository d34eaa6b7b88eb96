//! Banner and usage shown when `harx` is run without an input file.

pub const BANNER: &str = "HAR Extractor";

pub fn usage_text() -> String {
    format!("{BANNER}\n\nUsage: harx <FILE.har> [--output-dir DIR] [--config FILE]\n")
}

pub fn print_usage() {
    println!("{}", usage_text());
    eprintln!("ERROR: No input file was given.");
}
