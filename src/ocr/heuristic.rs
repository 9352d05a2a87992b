//! Code detection heuristic for OCR output.

/// Texts shorter than this (trimmed) are never classified as code.
const MIN_CODE_LENGTH: usize = 20;

/// Substrings that suggest source code. Matched case-insensitively.
const CODE_PATTERNS: &[&str] = &[
    "def ", "class ", "import ", "from ", "if ", "else:", "elif ", "for ", "while ", "try:",
    "except:", "finally:", "with ", "return ", "yield ", "lambda ", "async ", "await ",
    "__init__", "__main__", "self.", "print(", "len(", "==", "!=", "<=", ">=", "->", "=>",
    "{}", "[]", "    ", "\t",
];

/// Operators that mutate or compare, a strong structural signal.
const OPERATORS: &[&str] = &["==", "!=", "<=", ">=", "+=", "-="];

/// Decide whether recovered text looks like source code.
///
/// Pure function over the text: counts keyword and operator indicators,
/// then requires either three of them, or one combined with bracket pairs
/// and indentation or a mutating operator.
pub fn looks_like_code(text: &str) -> bool {
    if text.trim().len() < MIN_CODE_LENGTH {
        return false;
    }

    let lower = text.to_lowercase();
    let indicator_count = CODE_PATTERNS.iter().filter(|p| lower.contains(*p)).count();

    let has_brackets = (text.contains('(') && text.contains(')'))
        || (text.contains('{') && text.contains('}'));
    let has_indentation = text.contains("    ") || text.contains('\t');
    let has_operators = OPERATORS.iter().any(|op| text.contains(op));

    indicator_count >= 3 || (indicator_count >= 1 && has_brackets && (has_indentation || has_operators))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_python_snippet_is_code() {
        assert!(looks_like_code("def foo():\n    return self.x == None"));
    }

    #[test]
    fn test_prose_is_not_code() {
        assert!(!looks_like_code("The quick brown fox jumps."));
    }

    #[test]
    fn test_short_text_is_never_code() {
        assert!(!looks_like_code("def f():"));
        assert!(!looks_like_code(""));
    }

    #[test]
    fn test_single_indicator_with_structure() {
        // one keyword, brackets, and indentation
        assert!(looks_like_code("result = compute(value)\n    and_then(result)"));
    }

    #[test]
    fn test_prose_with_parentheses() {
        assert!(!looks_like_code(
            "The meeting (originally planned for Monday) was moved."
        ));
    }

    #[test]
    fn test_rust_snippet_is_code() {
        assert!(looks_like_code(
            "fn main() {\n    let x = 1;\n    if x != 2 { panic!() }\n}"
        ));
    }
}
