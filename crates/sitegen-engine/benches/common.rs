// Benchmark helpers live in their own module; not every bench uses all of them
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, *italic* and `code`.\nA [link](https://example.com) and ![alt](img.png).\n\n* Bullet point\n* Another item\n\n1. First\n2. Second\n\n> quoted\n> text\n\n```\nfn example() {}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_inline_heavy_line(spans: usize) -> String {
    (0..spans)
        .map(|i| match i % 5 {
            0 => format!("word{i} "),
            1 => format!("**bold{i}** "),
            2 => format!("*italic{i}* "),
            3 => format!("`code{i}` "),
            _ => format!("[link{i}](https://example.com/{i}) "),
        })
        .collect()
}
