//! Splitting a tokenized line into declaration fields
//!
//! The split point is the first `=` delimiter, falling back to the first
//! `;`. The word just before the split point is the name, a pointer run
//! just before that is the pointer, and everything earlier is the type.
//! Lines with no split point at all are not declarations and come back as
//! `Ok(None)`; lines where the split point sits at the very start have no
//! name to align and are malformed.

use crate::decl::fields::{DeclarationFields, MalformedDeclaration};
use crate::decl::token::{scan_line, Token};

/// Decompose one line into its declaration fields.
///
/// Returns `Ok(None)` for lines that do not look like declarations, which
/// callers skip rather than treat as errors.
pub fn split_declaration(line: &str) -> Result<Option<DeclarationFields>, MalformedDeclaration> {
    let tokens = scan_line(line);
    let split = match find_split_point(&tokens) {
        Some(index) => index,
        None => return Ok(None),
    };

    if split == 0 {
        return Err(MalformedDeclaration {
            content: line.to_string(),
            split_token: tokens[0].text.clone(),
            column: tokens[0].column,
        });
    }

    // Runs are maximal, so the token ahead of a delimiter is always a word.
    let name = tokens[split - 1].text.clone();
    let (type_spec, pointer) = if split >= 2 && tokens[split - 2].is_pointer_run() {
        (
            join_tokens(&tokens[..split - 2]),
            tokens[split - 2].text.clone(),
        )
    } else {
        (join_tokens(&tokens[..split - 1]), String::new())
    };

    let semicolon = tokens.iter().position(|t| t.is_delimiter(";"));
    let (equals, assignment) = if tokens[split].is_delimiter("=") {
        // Without a terminator the initializer ends before the last
        // token, so `int x = 5` keeps an empty assignment field.
        let end = semicolon.unwrap_or(tokens.len() - 1);
        let assignment = if end > split + 1 {
            join_tokens(&tokens[split + 1..end])
        } else {
            String::new()
        };
        (String::from("="), assignment)
    } else {
        (String::new(), String::new())
    };
    let terminator = if semicolon.is_some() {
        String::from(";")
    } else {
        String::new()
    };

    Ok(Some(DeclarationFields {
        type_spec,
        pointer,
        name,
        equals,
        assignment,
        terminator,
    }))
}

fn find_split_point(tokens: &[Token]) -> Option<usize> {
    tokens
        .iter()
        .position(|t| t.is_delimiter("="))
        .or_else(|| tokens.iter().position(|t| t.is_delimiter(";")))
}

fn join_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(line: &str) -> DeclarationFields {
        split_declaration(line)
            .expect("line should not be malformed")
            .expect("line should be a declaration")
    }

    #[test]
    fn test_initialized_declaration() {
        let fields = split("int x = 5;");
        assert_eq!(fields.type_spec, "int");
        assert_eq!(fields.pointer, "");
        assert_eq!(fields.name, "x");
        assert_eq!(fields.equals, "=");
        assert_eq!(fields.assignment, "5");
        assert_eq!(fields.terminator, ";");
    }

    #[test]
    fn test_uninitialized_declaration() {
        let fields = split("unsigned long count;");
        assert_eq!(fields.type_spec, "unsigned long");
        assert_eq!(fields.name, "count");
        assert_eq!(fields.equals, "");
        assert_eq!(fields.assignment, "");
        assert_eq!(fields.terminator, ";");
        assert!(!fields.has_initializer());
    }

    #[test]
    fn test_pointer_declaration() {
        let fields = split("char *name = \"abc\";");
        assert_eq!(fields.type_spec, "char");
        assert_eq!(fields.pointer, "*");
        assert_eq!(fields.name, "name");
        assert_eq!(fields.assignment, "\"abc\"");
    }

    #[test]
    fn test_double_pointer_with_spaces() {
        let fields = split("char * * argv;");
        assert_eq!(fields.type_spec, "char");
        assert_eq!(fields.pointer, "**");
        assert_eq!(fields.name, "argv");
    }

    #[test]
    fn test_multi_word_initializer() {
        let fields = split("int total = a + b;");
        assert_eq!(fields.assignment, "a + b");
    }

    #[test]
    fn test_missing_type_is_not_malformed() {
        let fields = split("x = 5;");
        assert_eq!(fields.type_spec, "");
        assert_eq!(fields.name, "x");
        assert_eq!(fields.assignment, "5");
    }

    #[test]
    fn test_non_declaration_lines() {
        assert_eq!(split_declaration(""), Ok(None));
        assert_eq!(split_declaration("    "), Ok(None));
        assert_eq!(split_declaration("// a comment"), Ok(None));
        assert_eq!(split_declaration("return x"), Ok(None));
        assert_eq!(split_declaration("{"), Ok(None));
    }

    #[test]
    fn test_glued_delimiters_are_not_a_split_point() {
        // "=;" is one delimiter token and matches neither "=" nor ";".
        assert_eq!(split_declaration("int x = ;"), Ok(None));
    }

    #[test]
    fn test_no_name_before_equals() {
        let err = split_declaration("= 5;").unwrap_err();
        assert_eq!(err.split_token, "=");
        assert_eq!(err.column, 1);
        assert_eq!(err.content, "= 5;");
    }

    #[test]
    fn test_bare_semicolon_is_malformed() {
        let err = split_declaration("   ;").unwrap_err();
        assert_eq!(err.split_token, ";");
        assert_eq!(err.column, 4);
    }

    #[test]
    fn test_quoted_delimiters_stay_in_initializer() {
        let fields = split("char *sep = \"; = *\";");
        assert_eq!(fields.name, "sep");
        assert_eq!(fields.assignment, "\"; = *\"");
        assert_eq!(fields.terminator, ";");
    }

    #[test]
    fn test_space_before_terminator() {
        let fields = split("int x = 5 ;");
        assert_eq!(fields.assignment, "5");
        assert_eq!(fields.terminator, ";");
    }

    #[test]
    fn test_unterminated_initializer_excludes_last_token() {
        let fields = split("int x = a + b");
        assert_eq!(fields.equals, "=");
        assert_eq!(fields.assignment, "a +");
        assert_eq!(fields.terminator, "");
    }
}
