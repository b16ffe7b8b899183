// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_pages_text(repeats: usize) -> String {
    let base = "https://example.com/docs\n\nrust borrow checker\n{ viewer { login } }\n# Reading *list*\n  spaced query\nhttp://localhost:8080/\n";
    base.repeat(repeats)
}
