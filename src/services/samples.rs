//! Built-in sample programs offered by the `example` menu action.

use serde::Serialize;

/// A named example program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Sample {
    pub name: &'static str,
    pub description: &'static str,
    pub source: &'static str,
}

/// Sample loaded when `example` is given no name.
pub const DEFAULT_SAMPLE: &str = "valid";

const SAMPLES: &[Sample] = &[
    Sample {
        name: "valid",
        description: "Well-formed program with functions, loops and a struct",
        source: r#"struct Point {
    x: i32,
    y: i32,
}

fn distance_sq(a: &Point, b: &Point) -> i32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

fn main() {
    let origin = Point { x: 0, y: 0 };
    let target = Point { x: 3, y: 4 };
    let mut total = 0;
    for i in 0..3 {
        total += i;
    }
    println!("{} {}", distance_sq(&origin, &target), total);
}
"#,
    },
    Sample {
        name: "lexical-errors",
        description: "Program containing symbols the lexer rejects",
        source: r#"fn main() {
    let price = 10 @ 2;
    let tag = $label;
    let name = "unterminated;
    println!("{}", price);
}
"#,
    },
    Sample {
        name: "semantic-errors",
        description: "Parses cleanly but uses undeclared names and mismatched types",
        source: r#"fn add(a: i32, b: i32) -> i32 {
    a + b
}

fn main() {
    let count: i32 = "three";
    let sum = add(count, missing);
    let flag: bool = 1;
    undefined_call(sum);
}
"#,
    },
    Sample {
        name: "main",
        description: "Minimal main function",
        source: "fn main() {\n    let x = 5;\n}\n",
    },
];

/// Every sample, in menu order.
pub fn all() -> &'static [Sample] {
    SAMPLES
}

/// Look a sample up by name (case-insensitive).
pub fn find(name: &str) -> Option<&'static Sample> {
    let name = name.trim();
    SAMPLES.iter().find(|s| s.name.eq_ignore_ascii_case(name))
}
