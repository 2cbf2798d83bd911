//! Image URL extraction over raw text.
//!
//! Matching is plain regex over the source buffer, no HTML parsing. A
//! candidate is any `https://` run of characters other than quotes, `>` and
//! whitespace that ends in an image extension. Candidates are kept when they
//! contain one of [`ALLOWED_SUBSTRINGS`] anywhere, deduplicated by exact string
//! equality in first-seen order, and the scan stops once the profile limit is
//! reached.

use crate::domain::model::{Harvest, HarvestOrigin, Profile};
use crate::utils::error::Result;
use regex::{Matches, Regex};

/// Host fragments a URL must contain to be accepted. Containment is not
/// host-boundary aware: a fragment anywhere in the path also qualifies.
pub const ALLOWED_SUBSTRINGS: [&str; 3] = ["carwow", "caranddriver", "hips.hearstapps.com"];

pub const STANDARD_PATTERN: &str = r#"https://[^"'>\s]+\.(?:jpg|jpeg|png)"#;
pub const STRICT_PATTERN: &str = r#"https://[^"'>\s]+\.(?:jpg|jpeg)"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileRules {
    pub pattern: &'static str,
    pub excluded: &'static [&'static str],
    pub limit: usize,
    /// When set and nothing is accepted, emit up to this many raw candidates.
    pub fallback_limit: Option<usize>,
}

impl ProfileRules {
    pub fn for_profile(profile: Profile) -> Self {
        match profile {
            Profile::Standard => Self {
                pattern: STANDARD_PATTERN,
                excluded: &[],
                limit: 10,
                fallback_limit: None,
            },
            Profile::Strict => Self {
                pattern: STRICT_PATTERN,
                excluded: &["headshots", "wheel"],
                limit: 5,
                fallback_limit: Some(20),
            },
        }
    }

    pub fn qualifies(&self, url: &str) -> bool {
        ALLOWED_SUBSTRINGS.iter().any(|allowed| url.contains(allowed))
            && !self.excluded.iter().any(|excluded| url.contains(excluded))
    }
}

#[derive(Debug, Clone)]
pub struct Extractor {
    pattern: Regex,
    rules: ProfileRules,
}

impl Extractor {
    pub fn new(profile: Profile) -> Result<Self> {
        let rules = ProfileRules::for_profile(profile);
        let pattern = Regex::new(rules.pattern)?;
        Ok(Self { pattern, rules })
    }

    pub fn rules(&self) -> &ProfileRules {
        &self.rules
    }

    /// Every non-overlapping pattern match, before any filtering.
    pub fn candidates<'e, 't>(&'e self, text: &'t str) -> impl Iterator<Item = &'t str> + 'e
    where
        't: 'e,
    {
        self.pattern.find_iter(text).map(|m| m.as_str())
    }

    /// Lazily yields accepted URLs; never more than the profile limit.
    pub fn accepted<'e, 't>(&'e self, text: &'t str) -> AcceptedUrls<'e, 't> {
        AcceptedUrls {
            matches: self.pattern.find_iter(text),
            rules: &self.rules,
            seen: Vec::with_capacity(self.rules.limit),
            examined: 0,
        }
    }

    /// Runs a full scan, applying the profile fallback when nothing is accepted.
    pub fn harvest(&self, text: &str) -> Harvest {
        let mut accepted = self.accepted(text);
        let urls: Vec<String> = accepted.by_ref().map(str::to_string).collect();
        let candidates_examined = accepted.examined();

        if urls.is_empty() {
            if let Some(limit) = self.rules.fallback_limit {
                let mut fallback: Vec<String> = Vec::with_capacity(limit);
                for candidate in self.candidates(text) {
                    if fallback.len() >= limit {
                        break;
                    }
                    if !fallback.iter().any(|seen| seen == candidate) {
                        fallback.push(candidate.to_string());
                    }
                }
                if !fallback.is_empty() {
                    tracing::debug!(
                        "No URL passed the host filter, using {} raw candidates",
                        fallback.len()
                    );
                    return Harvest {
                        urls: fallback,
                        origin: HarvestOrigin::Fallback,
                        candidates_examined,
                    };
                }
            }
        }

        Harvest {
            urls,
            origin: HarvestOrigin::Filtered,
            candidates_examined,
        }
    }
}

/// Iterator returned by [`Extractor::accepted`].
pub struct AcceptedUrls<'e, 't> {
    matches: Matches<'e, 't>,
    rules: &'e ProfileRules,
    seen: Vec<&'t str>,
    examined: usize,
}

impl<'e, 't> AcceptedUrls<'e, 't> {
    /// Number of pattern matches looked at so far.
    pub fn examined(&self) -> usize {
        self.examined
    }
}

impl<'e, 't> Iterator for AcceptedUrls<'e, 't> {
    type Item = &'t str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.seen.len() >= self.rules.limit {
            return None;
        }

        for m in self.matches.by_ref() {
            self.examined += 1;
            let url = m.as_str();
            if !self.rules.qualifies(url) || self.seen.contains(&url) {
                continue;
            }
            self.seen.push(url);
            return Some(url);
        }

        None
    }
}
