// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_reply(size: usize) -> String {
    let base = "# Title\n\nSummary:\n\nParagraph with **bold**, *italic*, `code` and a [link](https://example.com).\n\n- Bullet point with __strong__ text\n* Another item\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_styled_line(spans: usize) -> String {
    let mut line = String::new();
    for i in 0..spans {
        line.push_str(&format!("word{i} **bold{i}** then *it{i}* and `c{i}` "));
    }
    line
}
