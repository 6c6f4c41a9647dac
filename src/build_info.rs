pub fn print_report(name: &str) {
    println!("{{");
    println!("  \"name\": \"{}\",", name);
    println!("  \"package\": \"{}\",", env!("CARGO_PKG_NAME"));
    println!("  \"version\": \"{}\"", env!("CARGO_PKG_VERSION"));
    println!("}}");
}
