//! Renders extracted declarations into a dynamic-loading shim.
//!
//! For each declaration the shim carries a function-pointer typedef, a
//! global pointer variable, and a macro redirecting ordinary calls to that
//! pointer. A single loader function resolves every symbol through a
//! caller-supplied `dlsym`/`GetProcAddress`-style callback.

use std::path::Path;

use anyhow::Result;

use crate::header::FunctionDecl;
use crate::util::fs;

/// Generator for dynamic-loading shim headers.
pub struct ShimGenerator {
    /// Name of the emitted loader function
    load_fn: String,
}

impl ShimGenerator {
    /// Create a generator whose loader function has the given name.
    pub fn new(load_fn: impl Into<String>) -> Self {
        ShimGenerator {
            load_fn: load_fn.into(),
        }
    }

    /// Render the shim for the given declarations.
    ///
    /// Four blocks, each iterating the declarations in the order given:
    /// typedefs, pointer variables, call-redirect macros, and the loader
    /// function. Duplicate names are emitted as-is, duplicates and all.
    pub fn generate(&self, decls: &[FunctionDecl]) -> String {
        let mut out = String::new();

        // C function pointer syntax: [return type](*[name])[arguments]
        for decl in decls {
            out.push_str(&format!(
                "typedef {}(*PFN_{}){};\n",
                decl.return_type, decl.name, decl.args_text
            ));
        }

        for decl in decls {
            out.push_str(&format!("PFN_{} src_{};\n", decl.name, decl.name));
        }

        for decl in decls {
            out.push_str(&format!("#define {} src_{}\n", decl.name, decl.name));
        }

        out.push_str(&format!(
            "void {}(void *(*load_fn)(const char* name)) {{\n",
            self.load_fn
        ));
        for decl in decls {
            out.push_str(&format!(
                "    src_{} = (PFN_{})load_fn(\"{}\");\n",
                decl.name, decl.name, decl.name
            ));
        }
        out.push('}');

        out
    }

    /// Render the shim and write it to `path`.
    pub fn generate_to_file(&self, decls: &[FunctionDecl], path: &Path) -> Result<()> {
        fs::write_string(path, &self.generate(decls))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decls() -> Vec<FunctionDecl> {
        vec![
            FunctionDecl::new("void", "foo", "(void)"),
            FunctionDecl::new("int", "bar", "(int x)"),
        ]
    }

    #[test]
    fn test_emits_four_blocks_in_source_order() {
        let shim = ShimGenerator::new("load_lib").generate(&decls());
        let expected = concat!(
            "typedef void(*PFN_foo)(void);\n",
            "typedef int(*PFN_bar)(int x);\n",
            "PFN_foo src_foo;\n",
            "PFN_bar src_bar;\n",
            "#define foo src_foo\n",
            "#define bar src_bar\n",
            "void load_lib(void *(*load_fn)(const char* name)) {\n",
            "    src_foo = (PFN_foo)load_fn(\"foo\");\n",
            "    src_bar = (PFN_bar)load_fn(\"bar\");\n",
            "}",
        );
        assert_eq!(shim, expected);
    }

    #[test]
    fn test_no_trailing_newline_after_loader() {
        let shim = ShimGenerator::new("load").generate(&decls());
        assert!(shim.ends_with('}'));
        assert!(!shim.ends_with("}\n"));
    }

    #[test]
    fn test_empty_input_emits_empty_loader() {
        let shim = ShimGenerator::new("load_none").generate(&[]);
        assert_eq!(
            shim,
            "void load_none(void *(*load_fn)(const char* name)) {\n}"
        );
    }

    #[test]
    fn test_pointer_return_type_keeps_its_stars() {
        let decls = [FunctionDecl::new("char*", "get_string", "(void)")];
        let shim = ShimGenerator::new("load").generate(&decls);
        assert!(shim.contains("typedef char*(*PFN_get_string)(void);"));
    }

    #[test]
    fn test_duplicate_names_emitted_as_is() {
        let decls = [
            FunctionDecl::new("void", "f", "(void)"),
            FunctionDecl::new("void", "f", "(int x)"),
        ];
        let shim = ShimGenerator::new("load").generate(&decls);
        assert_eq!(shim.matches("#define f src_f\n").count(), 2);
    }
}
