use larder::{NodeSummary, ParseResultVerbose};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            self.paint(s, BOLD)
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            self.paint(s, DIM)
        }
    }
}

/// Print the parse tree, resulting fragments and timings for one line.
pub fn print_run(input: &str, run: &ParseResultVerbose, color: bool) {
    let palette = ansi::Palette::new(color);
    let details = &run.details;
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Parsing: \"{}\"", input), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Parse tree ━━━", ansi::GRAY));
    if details.over_limit {
        println!("{}", palette.dim("  Input exceeds --max-input-len; grammar not run"));
    } else {
        for node in &details.nodes {
            println!("  {}", fmt_node(node, &palette));
        }
    }

    println!("\n{}", palette.paint("━━━ Result ━━━", ansi::GRAY));
    if run.result.quantity.is_empty() {
        println!("{}", palette.dim("  No quantity"));
    }
    for (idx, fragment) in run.result.quantity.iter().enumerate() {
        let unit = match (&fragment.unit, fragment.unit_type) {
            (Some(unit), Some(unit_type)) => {
                format!("{} {}", palette.paint(unit, ansi::BLUE), palette.dim(format!("({unit_type})")))
            }
            _ => palette.dim("no unit"),
        };
        println!(
            "  {} {} {} {}",
            palette.paint(format!("[{}]", idx), ansi::GRAY),
            palette.bold(palette.paint(fragment.amount.to_string(), ansi::GREEN)),
            palette.dim("│"),
            unit,
        );
    }
    let ingredient = palette.paint(format!("{:?}", run.result.ingredient), ansi::YELLOW);
    println!("  {} {}", palette.dim("ingredient:"), ingredient);

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!(
        "  Total: {}  │  Matching: {}  │  Evaluation: {}  │  Rule attempts: {}  │  Depth: {}",
        palette.paint(format!("{:?}", details.total), ansi::GREEN),
        palette.paint(format!("{:?}", details.matching), ansi::CYAN),
        palette.dim(format!("{:?}", details.evaluation)),
        palette.paint(details.rule_attempts.to_string(), ansi::YELLOW),
        palette.paint(details.deepest.to_string(), ansi::YELLOW),
    );
    println!();
}

fn fmt_node(node: &NodeSummary, palette: &ansi::Palette) -> String {
    format!(
        "{}{} {} {}",
        "  ".repeat(node.depth),
        palette.paint(&node.rule, ansi::BLUE),
        palette.paint(format!("{}..{}", node.start, node.end), ansi::YELLOW),
        palette.dim(format!("{:?}", node.preview))
    )
}
