//! Header scanning pipeline.

use crate::header::extract::extract_signature;
use crate::header::strip::strip_comments;
use crate::header::types::FunctionDecl;

/// Split stripped source into candidate statements.
///
/// A bare split on `;` with the delimiter discarded. There is no brace or
/// parenthesis balancing, so a semicolon inside a nested struct body or an
/// initializer still splits there; such candidates mis-segment and usually
/// fail extraction. Empty candidates pass through and are rejected
/// downstream.
pub fn split_statements(stripped: &str) -> impl Iterator<Item = &str> {
    stripped.split(';')
}

/// Extract every function declaration from raw header text, in source order.
pub fn scan_header(source: &str) -> Vec<FunctionDecl> {
    let stripped = strip_comments(source);
    split_statements(&stripped)
        .filter_map(extract_signature)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_order_preserved() {
        let decls = scan_header("void foo(void); int bar(int x);");
        let names: Vec<_> = decls.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["foo", "bar"]);
    }

    #[test]
    fn test_non_functions_skipped_silently() {
        let decls = scan_header("int x; typedef int myint; void foo(void);");
        let names: Vec<_> = decls.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["foo"]);
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        assert!(scan_header("").is_empty());
        assert!(scan_header(";;;").is_empty());
    }

    #[test]
    fn test_prose_in_comments_does_not_become_a_function() {
        // "lower will(generally)" scans as a declaration when left in place,
        // which is exactly why comments are stripped first.
        let decls = scan_header("// lower will(generally);\nvoid real_fn(void);");
        let names: Vec<_> = decls.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["real_fn"]);
    }

    #[test]
    fn test_commented_out_declaration_ignored() {
        let decls = scan_header("/* int hidden(void); */\nint shown(void);");
        let names: Vec<_> = decls.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["shown"]);
    }

    #[test]
    fn test_declaration_spanning_joined_lines() {
        // The line comment eats its newline, joining the type and the name.
        let decls = scan_header("int// width\n next(void);");
        assert_eq!(decls.len(), 1);
        assert_eq!(decls[0].return_type, "int");
        assert_eq!(decls[0].name, "next");
    }

    #[test]
    fn test_duplicate_names_kept() {
        let decls = scan_header("void f(void); void f(int x);");
        assert_eq!(decls.len(), 2);
        assert_eq!(decls[0].args_text, "(void)");
        assert_eq!(decls[1].args_text, "(int x)");
    }
}
