//! Field decomposition of a single declaration

use std::error::Error;
use std::fmt;

/// The six fields of a C variable declaration, in source order.
///
/// Fields that are absent on a given line hold the empty string, so a
/// bare `int x;` has empty `equals` and `assignment`. An absent
/// initializer is told apart from a present-but-empty one (`int x =`)
/// through [`DeclarationFields::has_initializer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationFields {
    /// Everything before the pointer and name, words joined by single
    /// spaces (`"static const unsigned long"`).
    pub type_spec: String,
    /// The `*` run between type and name, or empty.
    pub pointer: String,
    /// The declared identifier.
    pub name: String,
    /// `"="` when the declaration carries an initializer, else empty.
    pub equals: String,
    /// Initializer expression text, words joined by single spaces.
    pub assignment: String,
    /// `";"` when the line ends in a semicolon, else empty.
    pub terminator: String,
}

impl DeclarationFields {
    /// True when the declaration has an `=` and therefore occupies the
    /// initializer columns of an alignment plan.
    pub fn has_initializer(&self) -> bool {
        self.equals == "="
    }
}

/// A line that tokenized like a declaration but has no name in front of
/// its split point, such as `= 5;` or a bare `;`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedDeclaration {
    /// The offending line, verbatim.
    pub content: String,
    /// The delimiter the split was attempted on (`"="` or `";"`).
    pub split_token: String,
    /// 1-based character column of that delimiter.
    pub column: usize,
}

impl fmt::Display for MalformedDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "malformed declaration: no name before '{}' at column {} in \"{}\"",
            self.split_token, self.column, self.content
        )
    }
}

impl Error for MalformedDeclaration {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_initializer() {
        let mut fields = DeclarationFields {
            type_spec: String::from("int"),
            pointer: String::new(),
            name: String::from("x"),
            equals: String::from("="),
            assignment: String::from("5"),
            terminator: String::from(";"),
        };
        assert!(fields.has_initializer());

        fields.equals.clear();
        fields.assignment.clear();
        assert!(!fields.has_initializer());
    }

    #[test]
    fn test_malformed_display() {
        let err = MalformedDeclaration {
            content: String::from("= 5;"),
            split_token: String::from("="),
            column: 1,
        };
        assert_eq!(
            err.to_string(),
            "malformed declaration: no name before '=' at column 1 in \"= 5;\""
        );
    }
}
