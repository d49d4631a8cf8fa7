//! Keyword heuristics for naming a license from its text.
//!
//! Each rule is anchored on the phrase that titles its license. Full license
//! texts quote each other (GPL-3.0 names the Affero GPL, MPL-2.0 lists the GNU
//! licenses as secondary licenses), so the rule whose anchor appears earliest
//! in the text decides the family. The text following the anchor then picks
//! the edition.

struct Rule {
    anchor: &'static str,
    edition: Edition,
}

enum Edition {
    /// The anchor alone names the license.
    Fixed(&'static str),
    /// The first version marker after the anchor wins; ties go to the earlier
    /// entry, so `version 2.1` must precede `version 2`.
    Versioned(&'static [(&'static str, &'static str)]),
    /// `with` when any of the clauses is present after the anchor, else `without`.
    Clauses {
        clauses: &'static [&'static str],
        with: &'static str,
        without: &'static str,
    },
}

const RULES: &[Rule] = &[
    Rule {
        anchor: "gnu affero general public license",
        edition: Edition::Versioned(&[("version 3", "AGPL-3.0")]),
    },
    Rule {
        anchor: "gnu lesser general public license",
        edition: Edition::Versioned(&[("version 2.1", "LGPL-2.1"), ("version 3", "LGPL-3.0")]),
    },
    Rule {
        anchor: "gnu library general public license",
        edition: Edition::Versioned(&[("version 2", "LGPL-2.0")]),
    },
    Rule {
        anchor: "gnu general public license",
        edition: Edition::Versioned(&[("version 3", "GPL-3.0"), ("version 2", "GPL-2.0")]),
    },
    Rule {
        anchor: "mozilla public license",
        edition: Edition::Versioned(&[("2.0", "MPL-2.0"), ("1.1", "MPL-1.1")]),
    },
    Rule {
        anchor: "apache license",
        edition: Edition::Versioned(&[("version 2.0", "Apache-2.0")]),
    },
    Rule {
        anchor: "eclipse public license",
        edition: Edition::Versioned(&[("1.0", "EPL-1.0"), ("2.0", "EPL-2.0")]),
    },
    Rule {
        anchor: "common development and distribution license",
        edition: Edition::Versioned(&[("1.0", "CDDL-1.0"), ("1.1", "CDDL-1.1")]),
    },
    Rule {
        anchor: "this is free and unencumbered software released into the public domain",
        edition: Edition::Fixed("Unlicense"),
    },
    Rule {
        anchor: "permission to use, copy, modify, and/or distribute this software for any purpose",
        edition: Edition::Fixed("ISC"),
    },
    Rule {
        anchor: "permission is hereby granted, free of charge, to any person obtaining a copy",
        edition: Edition::Fixed("MIT"),
    },
    Rule {
        anchor: "redistribution and use in source and binary forms",
        edition: Edition::Clauses {
            clauses: &["neither the name of", "names of its contributors"],
            with: "BSD-3-Clause",
            without: "BSD-2-Clause",
        },
    },
];

/// Guess the license identifier for a license text, or `None` if no rule
/// recognizes it.
///
/// A text whose leading family can't be pinned to an edition is `None`
/// rather than falling through to a license it merely mentions.
pub fn guess_license(text: &str) -> Option<&'static str> {
    let normalized = normalize_text(text);

    let (rule, at) = RULES
        .iter()
        .filter_map(|rule| normalized.find(rule.anchor).map(|at| (rule, at)))
        .min_by_key(|(_, at)| *at)?;

    let rest = &normalized[at + rule.anchor.len()..];
    match &rule.edition {
        Edition::Fixed(id) => Some(*id),
        Edition::Versioned(markers) => markers
            .iter()
            .enumerate()
            .filter_map(|(order, (marker, id))| rest.find(marker).map(|at| (at, order, *id)))
            .min()
            .map(|(_, _, id)| id),
        Edition::Clauses {
            clauses,
            with,
            without,
        } => {
            if clauses.iter().any(|clause| rest.contains(clause)) {
                Some(*with)
            } else {
                Some(*without)
            }
        }
    }
}

/// Lowercase and collapse every whitespace run to one space, so phrases
/// wrapped across lines still match.
fn normalize_text(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}
