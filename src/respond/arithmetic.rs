//! Binary arithmetic expression scanning and evaluation.
//!
//! Finds the first `<integer> <op> <integer>` sequence anywhere in the
//! input, with optional whitespace around the operator. Anything more
//! elaborate is out of scope and falls through to other rules.

/// A parsed `lhs op rhs` expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BinaryExpr {
    pub lhs: i64,
    pub op: char,
    pub rhs: i64,
}

/// Scan for the first binary integer expression in the text.
///
/// Returns `None` when no complete expression is present, including when
/// an operand would overflow `i64`.
pub(crate) fn find_expression(text: &str) -> Option<BinaryExpr> {
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();
    let mut i = 0;

    while i < len {
        if !chars[i].is_ascii_digit() {
            i += 1;
            continue;
        }

        let lhs_start = i;
        while i < len && chars[i].is_ascii_digit() {
            i += 1;
        }
        let lhs: Option<i64> = chars[lhs_start..i].iter().collect::<String>().parse().ok();

        let mut j = i;
        while j < len && chars[j].is_whitespace() {
            j += 1;
        }

        let Some(lhs) = lhs else { continue };
        if j >= len || !matches!(chars[j], '+' | '-' | '*' | '/') {
            continue;
        }
        let op = chars[j];
        j += 1;

        while j < len && chars[j].is_whitespace() {
            j += 1;
        }
        if j >= len || !chars[j].is_ascii_digit() {
            continue;
        }

        let rhs_start = j;
        while j < len && chars[j].is_ascii_digit() {
            j += 1;
        }
        if let Ok(rhs) = chars[rhs_start..j].iter().collect::<String>().parse() {
            return Some(BinaryExpr { lhs, op, rhs });
        }
        i = j;
    }

    None
}

/// Evaluate an expression into a reply string.
///
/// Division by zero is a domain message, not an error.
pub(crate) fn evaluate(expr: &BinaryExpr) -> String {
    let lhs = expr.lhs as f64;
    let rhs = expr.rhs as f64;

    let result = match expr.op {
        '+' => lhs + rhs,
        '-' => lhs - rhs,
        '*' => lhs * rhs,
        '/' => {
            if expr.rhs == 0 {
                return "I cannot divide by zero!".to_string();
            }
            lhs / rhs
        }
        _ => return "I can only handle +, -, * and /.".to_string(),
    };

    format!(
        "The result of {} {} {} is {:.2}",
        expr.lhs, expr.op, expr.rhs, result
    )
}
