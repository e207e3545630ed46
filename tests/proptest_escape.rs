//! Property checks for literal escaping over arbitrary strings.

use proptest::prelude::*;
use tabula_env::db::field_equals;
use tabula_env::escape_value;

proptest! {
    /// Strings without a single quote come back unchanged
    #[test]
    fn quote_free_strings_are_unchanged(s in "[^']*") {
        prop_assert_eq!(escape_value(s.as_str()), Some(s));
    }

    /// Quote count doubles and every other character keeps its order
    #[test]
    fn quotes_double_and_nothing_else_moves(s in any::<String>()) {
        let out = escape_value(s.as_str()).unwrap();
        prop_assert_eq!(out.matches('\'').count(), s.matches('\'').count() * 2);
        prop_assert_eq!(out.replace('\'', ""), s.replace('\'', ""));
        prop_assert_eq!(out.replace("''", "'"), s);
    }

    /// An escaped value cannot close the literal it is placed in
    #[test]
    fn clause_body_has_only_paired_quotes(s in any::<String>()) {
        let clause = field_equals("Field", s.as_str()).unwrap();
        let body = &clause["{Field}='".len()..clause.len() - 1];
        prop_assert!(!body.replace("''", "").contains('\''));
    }
}
