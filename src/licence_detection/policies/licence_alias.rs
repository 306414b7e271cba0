/// LicenceAlias policy for normalizing licence identifiers
///
/// Rules, overrides and classifiers do not agree on how to spell a
/// licence ("Apache-2.0", "Apache License 2.0", "ASL 2.0"). The rule
/// engine compares canonical SPDX short identifiers only, and this table
/// is where the spellings are folded together.
pub struct LicenceAlias;

/// Canonical SPDX identifier and the spellings that mean the same licence
const ALIASES: &[(&str, &[&str])] = &[
    (
        "Apache-2.0",
        &[
            "Apache 2",
            "Apache 2.0",
            "Apache2",
            "Apache License 2.0",
            "Apache License, Version 2.0",
            "Apache License Version 2.0",
            "Apache Software License",
            "Apache Software License 2.0",
            "ASL 2.0",
        ],
    ),
    ("MIT", &["MIT License", "The MIT License", "Expat"]),
    (
        "BSD-2-Clause",
        &[
            "BSD 2-Clause",
            "BSD 2-Clause License",
            "2-Clause BSD",
            "Simplified BSD",
            "FreeBSD",
        ],
    ),
    (
        "BSD-3-Clause",
        &[
            "BSD 3-Clause",
            "BSD 3-Clause License",
            "3-Clause BSD",
            "New BSD",
            "Modified BSD",
            "Revised BSD",
        ],
    ),
    ("ISC", &["ISC License"]),
    (
        "MPL-2.0",
        &["MPL 2.0", "MPL2", "Mozilla Public License 2.0"],
    ),
    (
        "GPL-2.0",
        &["GPL-2.0-only", "GPLv2", "GPL v2", "GPL 2.0", "GNU GPL v2"],
    ),
    (
        "GPL-3.0",
        &["GPL-3.0-only", "GPLv3", "GPL v3", "GPL 3.0", "GNU GPL v3"],
    ),
    ("LGPL-2.1", &["LGPL-2.1-only", "LGPLv2.1", "LGPL 2.1"]),
    ("LGPL-3.0", &["LGPL-3.0-only", "LGPLv3", "LGPL 3.0"]),
    ("AGPL-3.0", &["AGPL-3.0-only", "AGPLv3", "AGPL 3.0"]),
    ("EPL-1.0", &["EPL 1.0", "Eclipse Public License 1.0"]),
    ("EPL-2.0", &["EPL 2.0", "Eclipse Public License 2.0"]),
    ("CC0-1.0", &["CC0", "CC0 1.0"]),
    ("Unlicense", &["The Unlicense"]),
    ("Zlib", &["zlib License"]),
    ("BSL-1.0", &["Boost Software License 1.0", "Boost"]),
];

impl LicenceAlias {
    /// Returns the canonical identifier for `licence`
    ///
    /// Unrecognized identifiers come back trimmed but otherwise untouched,
    /// so they can still be matched exactly by a rule.
    pub fn canonicalize(licence: &str) -> String {
        let key = Self::comparison_key(licence);
        ALIASES
            .iter()
            .find(|(canonical, aliases)| {
                Self::comparison_key(canonical) == key
                    || aliases.iter().any(|alias| Self::comparison_key(alias) == key)
            })
            .map(|(canonical, _)| canonical.to_string())
            .unwrap_or_else(|| licence.trim().to_string())
    }

    /// Whether two spellings name the same licence
    pub fn same_licence(a: &str, b: &str) -> bool {
        Self::comparison_key(&Self::canonicalize(a)) == Self::comparison_key(&Self::canonicalize(b))
    }

    /// Lowercases and folds every run of separators into a single '-'
    fn comparison_key(licence: &str) -> String {
        let mut key = String::with_capacity(licence.len());
        for c in licence.trim().chars() {
            if c.is_alphanumeric() || c == '.' || c == '+' {
                key.extend(c.to_lowercase());
            } else if !key.ends_with('-') {
                key.push('-');
            }
        }
        key.trim_matches('-').to_string()
    }
}
