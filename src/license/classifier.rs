use std::sync::LazyLock;

use regex::Regex;

use crate::error::{LicenseError, Result};
use crate::license::identifier::{
    AGPL_3_0, APACHE_2_0, CDDL_1_0, EPL_1_0, FREE_BSD, GPL_2_0, GPL_3_0, ISC, LGPL_2_1, LGPL_3_0,
    MIT, MPL_2_0, NEW_BSD, UNLICENSE,
};

static NEWLINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r\n|\n").expect("newline regex must compile"));
// ASCII whitespace only; NBSP and other Unicode spaces are left as they are.
static SPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\t\n\x0C\r ]{2,}").expect("space regex must compile"));

/// Phrases a rule looks for in normalized text.
#[derive(Debug)]
pub enum Signature {
    /// At least one phrase must be present.
    AnyOf(&'static [&'static str]),
    /// Every phrase must be present, in any position.
    AllOf(&'static [&'static str]),
}

impl Signature {
    fn matches(&self, text: &str) -> bool {
        match self {
            Signature::AnyOf(phrases) => phrases.iter().any(|p| text.contains(p)),
            Signature::AllOf(phrases) => phrases.iter().all(|p| text.contains(p)),
        }
    }
}

/// What a matching rule resolves to.
#[derive(Debug)]
pub enum Outcome {
    Is(&'static str),
    /// Chooses between two identifiers on the presence of a further phrase.
    Split {
        phrase: &'static str,
        present: &'static str,
        absent: &'static str,
    },
}

#[derive(Debug)]
pub struct Rule {
    pub signature: Signature,
    pub outcome: Outcome,
}

impl Rule {
    pub fn matches(&self, normalized: &str) -> bool {
        self.signature.matches(normalized)
    }

    fn resolve(&self, normalized: &str) -> &'static str {
        match self.outcome {
            Outcome::Is(id) => id,
            Outcome::Split {
                phrase,
                present,
                absent,
            } => {
                if normalized.contains(phrase) {
                    present
                } else {
                    absent
                }
            }
        }
    }
}

/// The classification cascade. Evaluated top to bottom; the first rule whose
/// signature matches decides the license. Order is significant.
pub static RULES: &[Rule] = &[
    Rule {
        signature: Signature::AnyOf(&[
            "permission is hereby granted, free of charge, to any person obtaining a copy of this software",
        ]),
        outcome: Outcome::Is(MIT),
    },
    Rule {
        signature: Signature::AnyOf(&[
            "permission to use, copy, modify, and/or distribute this software for any",
        ]),
        outcome: Outcome::Is(ISC),
    },
    Rule {
        signature: Signature::AnyOf(&[
            "apache license version 2.0, january 2004",
            "http://www.apache.org/licenses/license-2.0",
        ]),
        outcome: Outcome::Is(APACHE_2_0),
    },
    Rule {
        signature: Signature::AnyOf(&["gnu general public license version 2, june 1991"]),
        outcome: Outcome::Is(GPL_2_0),
    },
    Rule {
        signature: Signature::AnyOf(&["gnu general public license version 3, 29 june 2007"]),
        outcome: Outcome::Is(GPL_3_0),
    },
    Rule {
        signature: Signature::AnyOf(&[
            "gnu lesser general public license version 2.1, february 1999",
        ]),
        outcome: Outcome::Is(LGPL_2_1),
    },
    Rule {
        signature: Signature::AnyOf(&[
            "gnu lesser general public license version 3, 29 june 2007",
        ]),
        outcome: Outcome::Is(LGPL_3_0),
    },
    Rule {
        signature: Signature::AnyOf(&[
            "gnu affero general public license version 3, 19 november 2007",
        ]),
        outcome: Outcome::Is(AGPL_3_0),
    },
    Rule {
        signature: Signature::AllOf(&["mozilla public license", "version 2.0"]),
        outcome: Outcome::Is(MPL_2_0),
    },
    // Only the "neither the name of" endorsement clause tells the 3-clause
    // variant apart; a reworded clause falls through to FreeBSD.
    Rule {
        signature: Signature::AnyOf(&["redistribution and use in source and binary forms"]),
        outcome: Outcome::Split {
            phrase: "neither the name of",
            present: NEW_BSD,
            absent: FREE_BSD,
        },
    },
    Rule {
        signature: Signature::AnyOf(&[
            "common development and distribution license (cddl) version 1.0",
        ]),
        outcome: Outcome::Is(CDDL_1_0),
    },
    Rule {
        signature: Signature::AnyOf(&["eclipse public license - v 1.0"]),
        outcome: Outcome::Is(EPL_1_0),
    },
    Rule {
        signature: Signature::AnyOf(&[
            "this is free and unencumbered software released into the public domain",
        ]),
        outcome: Outcome::Is(UNLICENSE),
    },
];

/// Fold license text into the form the rule phrases are written in.
///
/// Lowercases, turns every line ending into a space, then collapses any run
/// of two or more ASCII whitespace characters (space, tab, CR, LF, form
/// feed) into one space.
pub fn normalize(text: &str) -> String {
    let lower = text.to_lowercase();
    let joined = NEWLINE_RE.replace_all(&lower, " ");
    SPACE_RE.replace_all(&joined, " ").into_owned()
}

/// Index into [`RULES`] of the first rule matching `text`, if any.
pub fn matching_rule(text: &str) -> Option<usize> {
    let normalized = normalize(text);
    RULES.iter().position(|rule| rule.matches(&normalized))
}

/// Guess which license `text` is.
///
/// This is a literal phrase scan, not a similarity measure: it looks for the
/// boilerplate that stays fixed across copies of a license and ignores the
/// rest of the document.
pub fn guess_type(text: &str) -> Result<&'static str> {
    let normalized = normalize(text);
    let rule = RULES
        .iter()
        .enumerate()
        .find(|(_, rule)| rule.matches(&normalized));

    match rule {
        Some((index, rule)) => {
            let id = rule.resolve(&normalized);
            log::debug!("license rule {} matched: {}", index, id);
            Ok(id)
        }
        None => Err(LicenseError::UnrecognizedLicense),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIT_TEXT: &str = "Permission is hereby granted, free of charge, to any person obtaining a copy\nof this software and associated documentation files";

    const BSD_TEXT: &str = "Redistribution and use in source and binary forms, with or without\nmodification, are permitted provided that the following conditions are met:";

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("Hello\r\nWorld"), "hello world");
        assert_eq!(normalize("A\n\n\nB"), "a b");
        assert_eq!(normalize("   Indented    text\t\tand tabs"), " indented text and tabs");
        assert_eq!(normalize("single space kept"), "single space kept");
    }

    #[test]
    fn test_normalize_leaves_unicode_spaces() {
        assert_eq!(normalize("a\u{00A0}\u{00A0}b"), "a\u{00A0}\u{00A0}b");
        assert_eq!(normalize("a\x0B\x0Bb"), "a\x0B\x0Bb");

        let nbsp = MIT_TEXT.replace("free of charge", "free\u{00A0}\u{00A0}of charge");
        assert!(matches!(
            guess_type(&nbsp),
            Err(LicenseError::UnrecognizedLicense)
        ));
    }

    #[test]
    fn test_mit() {
        assert_eq!(guess_type(MIT_TEXT).unwrap(), MIT);
    }

    #[test]
    fn test_isc() {
        let text = "Permission to use, copy, modify, and/or distribute this software for any\npurpose with or without fee is hereby granted";
        assert_eq!(guess_type(text).unwrap(), ISC);
    }

    #[test]
    fn test_apache_header_and_url() {
        let header = "                                 Apache License\n                           Version 2.0, January 2004";
        assert_eq!(guess_type(header).unwrap(), APACHE_2_0);
        assert_eq!(
            guess_type("http://www.apache.org/licenses/LICENSE-2.0").unwrap(),
            APACHE_2_0
        );
    }

    #[test]
    fn test_gnu_family() {
        let cases = [
            ("GNU GENERAL PUBLIC LICENSE\n Version 2, June 1991", GPL_2_0),
            ("GNU GENERAL PUBLIC LICENSE\n Version 3, 29 June 2007", GPL_3_0),
            ("GNU LESSER GENERAL PUBLIC LICENSE\n Version 2.1, February 1999", LGPL_2_1),
            ("GNU LESSER GENERAL PUBLIC LICENSE\n Version 3, 29 June 2007", LGPL_3_0),
            ("GNU AFFERO GENERAL PUBLIC LICENSE\n Version 3, 19 November 2007", AGPL_3_0),
        ];
        for (text, expected) in cases {
            assert_eq!(guess_type(text).unwrap(), expected, "text: {text}");
        }
    }

    #[test]
    fn test_mpl_needs_both_phrases() {
        assert_eq!(
            guess_type("Mozilla Public License Version 2.0\n==================").unwrap(),
            MPL_2_0
        );
        // Phrases may appear anywhere, in either order.
        assert_eq!(
            guess_type("This is version 2.0 of the Mozilla Public License.").unwrap(),
            MPL_2_0
        );
        assert!(matches!(
            guess_type("Mozilla Public License Version 1.1"),
            Err(LicenseError::UnrecognizedLicense)
        ));
    }

    #[test]
    fn test_bsd_split() {
        assert_eq!(guess_type(BSD_TEXT).unwrap(), FREE_BSD);

        let new_bsd = format!(
            "{BSD_TEXT}\n* Neither the name of the copyright holder nor the names of its contributors"
        );
        assert_eq!(guess_type(&new_bsd).unwrap(), NEW_BSD);
    }

    #[test]
    fn test_cddl_epl_unlicense() {
        assert_eq!(
            guess_type("COMMON DEVELOPMENT AND DISTRIBUTION LICENSE (CDDL)\nVersion 1.0").unwrap(),
            CDDL_1_0
        );
        assert_eq!(
            guess_type("Eclipse Public License - v 1.0").unwrap(),
            EPL_1_0
        );
        assert_eq!(
            guess_type("This is free and unencumbered software released into the public domain.")
                .unwrap(),
            UNLICENSE
        );
    }

    #[test]
    fn test_first_rule_wins() {
        // MIT precedes the BSD rule even when both phrases are present.
        let text = format!("{BSD_TEXT}\n\n{MIT_TEXT}");
        assert_eq!(guess_type(&text).unwrap(), MIT);
        assert_eq!(matching_rule(&text), Some(0));
    }

    #[test]
    fn test_case_and_line_endings_do_not_matter() {
        let crlf = MIT_TEXT.replace('\n', "\r\n\r\n\r\n");
        assert_eq!(guess_type(&crlf).unwrap(), MIT);
        assert_eq!(guess_type(&MIT_TEXT.to_uppercase()).unwrap(), MIT);
    }

    #[test]
    fn test_unrecognized() {
        assert!(matches!(
            guess_type("No license data"),
            Err(LicenseError::UnrecognizedLicense)
        ));
        assert!(matches!(guess_type(""), Err(LicenseError::UnrecognizedLicense)));
        assert_eq!(matching_rule("No license data"), None);
    }

    #[test]
    fn test_rule_indices_follow_precedence() {
        assert_eq!(RULES.len(), 13);
        assert_eq!(matching_rule("Eclipse Public License - v 1.0"), Some(11));
        assert_eq!(matching_rule(BSD_TEXT), Some(9));
    }
}
