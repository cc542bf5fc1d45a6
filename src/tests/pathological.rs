use ntest::timeout;

use crate::{markdown_to_html, Options};

// input: python3 -c 'n = 50000; print("*a_ " * n)'
#[test]
#[timeout(4000)]
fn pathological_emphasis() {
    let input = "*a_ ".repeat(50_000);
    let output = markdown_to_html(&input, &Options::default());
    assert!(!output.is_empty());
}

// input: python3 -c 'n = 10000; print("|" + "x|" * n + "\n|" + "-|" * n)'
#[test]
#[timeout(4000)]
fn pathological_table_columns() {
    let input = format!("|{}\n|{}\n", "x|".repeat(10_000), "-|".repeat(10_000));
    let output = markdown_to_html(&input, &Options::default());
    assert!(!output.is_empty());
}

#[test]
#[timeout(4000)]
fn pathological_code_fences() {
    let input = "```\nx\n```\n".repeat(5_000);
    let output = markdown_to_html(&input, &Options::default());
    assert!(!output.is_empty());
}
