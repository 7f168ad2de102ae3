//! Type definitions for extracted declarations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A C function declaration extracted from a header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDecl {
    /// Return type, with any pointer stars folded onto the end
    pub return_type: String,

    /// Function name
    pub name: String,

    /// Argument list text, parentheses included
    pub args_text: String,
}

impl FunctionDecl {
    /// Create a new declaration.
    pub fn new(
        return_type: impl Into<String>,
        name: impl Into<String>,
        args_text: impl Into<String>,
    ) -> Self {
        FunctionDecl {
            return_type: return_type.into(),
            name: name.into(),
            args_text: args_text.into(),
        }
    }
}

/// Renders the declaration back as a single C statement.
impl fmt::Display for FunctionDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}{};", self.return_type, self.name, self.args_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_a_c_declaration() {
        let decl = FunctionDecl::new("int*", "next_item", "(void *cursor)");
        assert_eq!(decl.to_string(), "int* next_item(void *cursor);");
    }
}
