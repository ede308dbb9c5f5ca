//! Content kinds and read scopes exposed by the content provider.
//!
//! DESIGN
//! ======
//! A section binds to exactly one `ContentQuery`: the kind of record it shows
//! and how much of it (all rows, the featured subset, or the newest N). The
//! same value produces the HTTP path on the client and is parsed back out of
//! the path on the server.

#[cfg(test)]
#[path = "kind_test.rs"]
mod kind_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of records returned by a `latest` read when no limit is given.
pub const DEFAULT_LATEST_LIMIT: u32 = 3;
/// Upper bound for a `latest` read.
pub const MAX_LATEST_LIMIT: u32 = 50;

/// Record families served by the content provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentKind {
    Destinations,
    Packages,
    BlogPosts,
    Faqs,
}

impl ContentKind {
    pub const ALL: [Self; 4] = [Self::Destinations, Self::Packages, Self::BlogPosts, Self::Faqs];

    /// Path segment used under `/api/content/`.
    #[must_use]
    pub fn as_path(self) -> &'static str {
        match self {
            Self::Destinations => "destinations",
            Self::Packages => "packages",
            Self::BlogPosts => "blog-posts",
            Self::Faqs => "faqs",
        }
    }

    /// Parse a path segment back into a kind.
    #[must_use]
    pub fn from_path(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_path() == segment)
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path())
    }
}

/// Which slice of a kind a section wants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ContentScope {
    #[default]
    All,
    /// Flag-filtered subset: `featured` for destinations and packages,
    /// `published` for blog posts, `active` for FAQs.
    Featured,
    /// Most recent N by creation time.
    Latest(u32),
}

/// One section's read request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ContentQuery {
    pub kind: ContentKind,
    pub scope: ContentScope,
}

impl ContentQuery {
    #[must_use]
    pub fn all(kind: ContentKind) -> Self {
        Self { kind, scope: ContentScope::All }
    }

    #[must_use]
    pub fn featured(kind: ContentKind) -> Self {
        Self { kind, scope: ContentScope::Featured }
    }

    #[must_use]
    pub fn latest(kind: ContentKind, count: u32) -> Self {
        Self { kind, scope: ContentScope::Latest(clamp_latest_limit(Some(count))) }
    }

    /// Relative URL for this query on the content provider.
    #[must_use]
    pub fn endpoint(&self) -> String {
        let base = format!("/api/content/{}", self.kind.as_path());
        match self.scope {
            ContentScope::All => base,
            ContentScope::Featured => format!("{base}/featured"),
            ContentScope::Latest(n) => format!("{base}/latest?limit={n}"),
        }
    }
}

/// Clamp a requested `latest` limit into `1..=MAX_LATEST_LIMIT`.
#[must_use]
pub fn clamp_latest_limit(requested: Option<u32>) -> u32 {
    requested.unwrap_or(DEFAULT_LATEST_LIMIT).clamp(1, MAX_LATEST_LIMIT)
}
