use crate::ports::outbound::LicenceClassifier;
use crate::shared::error::DetectorError;
use crate::shared::security::read_text_file;
use crate::shared::Result;
use askalono::{Store, TextData};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

const SPDX_TAG: &str = "spdx-license-identifier:";

/// Minimum askalono score for a match to be reported
const CONFIDENCE_THRESHOLD: f32 = 0.8;

/// Reference texts scored against, keyed by SPDX identifier
const TEMPLATES: &[(&str, &str)] = &[
    ("Apache-2.0", include_str!("../../../../assets/licences/Apache-2.0.txt")),
    ("BSD-2-Clause", include_str!("../../../../assets/licences/BSD-2-Clause.txt")),
    ("BSD-3-Clause", include_str!("../../../../assets/licences/BSD-3-Clause.txt")),
    ("BSL-1.0", include_str!("../../../../assets/licences/BSL-1.0.txt")),
    ("CC0-1.0", include_str!("../../../../assets/licences/CC0-1.0.txt")),
    ("GPL-2.0", include_str!("../../../../assets/licences/GPL-2.0.txt")),
    ("GPL-3.0", include_str!("../../../../assets/licences/GPL-3.0.txt")),
    ("ISC", include_str!("../../../../assets/licences/ISC.txt")),
    ("LGPL-2.1", include_str!("../../../../assets/licences/LGPL-2.1.txt")),
    ("LGPL-3.0", include_str!("../../../../assets/licences/LGPL-3.0.txt")),
    ("MIT", include_str!("../../../../assets/licences/MIT.txt")),
    ("MPL-2.0", include_str!("../../../../assets/licences/MPL-2.0.txt")),
    ("Unlicense", include_str!("../../../../assets/licences/Unlicense.txt")),
    ("Zlib", include_str!("../../../../assets/licences/Zlib.txt")),
];

/// Near-identical licences told apart by their title
///
/// (scored licence, title phrase, reported licence). The AGPL shares all
/// but one section with the GPL-3.0 text.
const TITLE_REFINEMENTS: &[(&str, &str, &str)] =
    &[("GPL-3.0", "gnu affero general public license", "AGPL-3.0")];

/// Non-blank lines at the top of a text that make up its title
const TITLE_LINES: usize = 3;

/// TextLicenceClassifier adapter identifying licences from their text
///
/// An `SPDX-License-Identifier:` line wins when present. Otherwise the text
/// is scored with askalono against the bundled reference texts and the best
/// match is kept if it clears [`CONFIDENCE_THRESHOLD`].
pub struct TextLicenceClassifier {
    store: Store,
}

impl TextLicenceClassifier {
    pub fn new() -> Self {
        let mut store = Store::new();
        for (name, text) in TEMPLATES {
            store.add_license(name.to_string(), TextData::from(*text));
        }
        Self { store }
    }

    /// Classifies licence text that has already been read
    pub fn classify_text(&self, text: &str) -> Option<String> {
        if let Some(id) = Self::spdx_identifier(text) {
            return Some(id);
        }
        if text.trim().is_empty() {
            return None;
        }

        let matched = self.store.analyze(&TextData::from(text));
        if matched.score < CONFIDENCE_THRESHOLD {
            return None;
        }
        Some(Self::refine_by_title(matched.name, text))
    }

    fn spdx_identifier(text: &str) -> Option<String> {
        text.lines().find_map(|line| {
            let lower = line.to_ascii_lowercase();
            let start = lower.find(SPDX_TAG)? + SPDX_TAG.len();
            let id = line[start..].trim().trim_end_matches("*/").trim();
            (!id.is_empty()).then(|| id.to_string())
        })
    }

    fn refine_by_title(licence: &str, text: &str) -> String {
        let title = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .take(TITLE_LINES)
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();

        TITLE_REFINEMENTS
            .iter()
            .find(|(scored, phrase, _)| *scored == licence && title.contains(phrase))
            .map_or(licence, |(_, _, refined)| refined)
            .to_string()
    }
}

impl Default for TextLicenceClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl LicenceClassifier for TextLicenceClassifier {
    fn classify(&self, licence_file: &Path) -> Result<Option<String>> {
        if licence_file.as_os_str().is_empty() {
            return Ok(None);
        }

        match fs::symlink_metadata(licence_file) {
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(DetectorError::ClassificationIoFailure {
                    module: String::new(),
                    path: licence_file.to_path_buf(),
                    details: e.to_string(),
                }
                .into())
            }
            Ok(_) => {}
        }

        let text = read_text_file(licence_file, "licence file").map_err(|e| {
            DetectorError::ClassificationIoFailure {
                module: String::new(),
                path: licence_file.to_path_buf(),
                details: e.to_string(),
            }
        })?;

        Ok(self.classify_text(&text))
    }
}
