//! Content provider queries.
//!
//! SYSTEM CONTEXT
//! ==============
//! Backs the read-only `/api/content/*`, `/api/blog-posts/{slug}` and
//! `/api/search` endpoints. Rows are mapped into the shared display records
//! from `eexplo-content`, so the wire shape is owned by that crate.
//!
//! DESIGN
//! ======
//! - `All` keeps insertion order (`created_at` ascending), `Latest` is newest
//!   first. FAQs always sort by `display_order`.
//! - `Featured` means `featured` for destinations and packages, `published`
//!   for blog posts and `active` for FAQs.
//! - Unpublished posts and inactive FAQs are never returned by any scope.

use eexplo_content::{BlogPost, ContentKind, ContentQuery, ContentScope, Destination, Faq, SearchResults, TourPackage};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::PgPool;
use time::OffsetDateTime;

/// Maximum rows of each kind returned by a search.
pub const SEARCH_LIMIT: i64 = 20;

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("unknown content kind: {0}")]
    UnknownKind(String),
    #[error("content not found")]
    NotFound,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// A list response for one content kind; serializes as a bare JSON array.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ContentItems {
    Destinations(Vec<Destination>),
    Packages(Vec<TourPackage>),
    BlogPosts(Vec<BlogPost>),
    Faqs(Vec<Faq>),
}

impl ContentItems {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Destinations(v) => v.len(),
            Self::Packages(v) => v.len(),
            Self::BlogPosts(v) => v.len(),
            Self::Faqs(v) => v.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Resolve a `{kind}` path segment.
///
/// # Errors
///
/// Returns [`ContentError::UnknownKind`] for anything but the four known kinds.
pub fn parse_kind(segment: &str) -> Result<ContentKind, ContentError> {
    ContentKind::from_path(segment).ok_or_else(|| ContentError::UnknownKind(segment.to_owned()))
}

// =============================================================================
// ROWS
// =============================================================================

#[derive(sqlx::FromRow)]
struct DestinationRow {
    id: String,
    name: String,
    country: String,
    tour_count: i32,
    image_url: String,
    description: String,
    featured: bool,
    created_at: OffsetDateTime,
}

impl From<DestinationRow> for Destination {
    fn from(row: DestinationRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            country: row.country,
            tour_count: row.tour_count,
            image_url: row.image_url,
            description: row.description,
            featured: row.featured,
            created_at: row.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct PackageRow {
    id: String,
    destination_id: Option<String>,
    name: String,
    duration: String,
    price: Decimal,
    description: String,
    image_url: String,
    featured: bool,
    created_at: OffsetDateTime,
}

impl From<PackageRow> for TourPackage {
    fn from(row: PackageRow) -> Self {
        Self {
            id: row.id,
            destination_id: row.destination_id,
            name: row.name,
            duration: row.duration,
            price: row.price,
            description: row.description,
            image_url: row.image_url,
            featured: row.featured,
            created_at: row.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct BlogPostRow {
    id: String,
    title: String,
    slug: String,
    excerpt: String,
    content: String,
    image_url: String,
    read_time: i32,
    category: String,
    published: bool,
    created_at: OffsetDateTime,
}

impl From<BlogPostRow> for BlogPost {
    fn from(row: BlogPostRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            slug: row.slug,
            excerpt: row.excerpt,
            content: row.content,
            image_url: row.image_url,
            read_time: row.read_time,
            category: row.category,
            published: row.published,
            created_at: row.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct FaqRow {
    id: String,
    question: String,
    answer: String,
    display_order: i32,
    active: bool,
}

impl From<FaqRow> for Faq {
    fn from(row: FaqRow) -> Self {
        Self { id: row.id, question: row.question, answer: row.answer, order: row.display_order, active: row.active }
    }
}

// =============================================================================
// SQL
// =============================================================================

const DESTINATION_SELECT: &str = r"SELECT id::text AS id, name, country, tour_count, image_url, description, featured, created_at
  FROM destinations";

const PACKAGE_SELECT: &str = r"SELECT id::text AS id, destination_id::text AS destination_id, name, duration, price,
       description, image_url, featured, created_at
  FROM tour_packages";

const BLOG_POST_SELECT: &str = r"SELECT id::text AS id, title, slug, excerpt, content, image_url, read_time, category,
       published, created_at
  FROM blog_posts";

const FAQ_SELECT: &str = r"SELECT id::text AS id, question, answer, display_order, active
  FROM faqs";

/// WHERE + ORDER BY + LIMIT tail for a scope. `featured_column` is the flag
/// checked by `Featured`; `visible` is always applied when present.
fn scope_clause(scope: ContentScope, featured_column: &str, visible: Option<&str>, order_column: &str) -> String {
    let mut filters: Vec<&str> = visible.into_iter().collect();
    if scope == ContentScope::Featured && visible != Some(featured_column) {
        filters.push(featured_column);
    }
    let where_clause = if filters.is_empty() { String::new() } else { format!(" WHERE {}", filters.join(" AND ")) };

    match scope {
        ContentScope::All | ContentScope::Featured => format!("{where_clause} ORDER BY {order_column}, id"),
        ContentScope::Latest(limit) if order_column == "display_order" => {
            format!("{where_clause} ORDER BY display_order, id LIMIT {limit}")
        }
        ContentScope::Latest(limit) => format!("{where_clause} ORDER BY {order_column} DESC, id LIMIT {limit}"),
    }
}

fn list_sql(query: ContentQuery) -> String {
    let scope = match query.scope {
        ContentScope::Latest(n) => ContentScope::Latest(eexplo_content::clamp_latest_limit(Some(n))),
        other => other,
    };
    match query.kind {
        ContentKind::Destinations => {
            format!("{DESTINATION_SELECT}{}", scope_clause(scope, "featured", None, "created_at"))
        }
        ContentKind::Packages => format!("{PACKAGE_SELECT}{}", scope_clause(scope, "featured", None, "created_at")),
        ContentKind::BlogPosts => {
            format!("{BLOG_POST_SELECT}{}", scope_clause(scope, "published", Some("published"), "created_at"))
        }
        ContentKind::Faqs => format!("{FAQ_SELECT}{}", scope_clause(scope, "active", Some("active"), "display_order")),
    }
}

// =============================================================================
// QUERIES
// =============================================================================

/// Fetch one kind of content in the requested scope.
///
/// # Errors
///
/// Returns [`ContentError::Database`] if the query fails.
pub async fn list(pool: &PgPool, query: ContentQuery) -> Result<ContentItems, ContentError> {
    let sql = list_sql(query);
    let items = match query.kind {
        ContentKind::Destinations => ContentItems::Destinations(
            sqlx::query_as::<_, DestinationRow>(&sql)
                .fetch_all(pool)
                .await?
                .into_iter()
                .map(Into::into)
                .collect(),
        ),
        ContentKind::Packages => ContentItems::Packages(
            sqlx::query_as::<_, PackageRow>(&sql)
                .fetch_all(pool)
                .await?
                .into_iter()
                .map(Into::into)
                .collect(),
        ),
        ContentKind::BlogPosts => ContentItems::BlogPosts(
            sqlx::query_as::<_, BlogPostRow>(&sql)
                .fetch_all(pool)
                .await?
                .into_iter()
                .map(Into::into)
                .collect(),
        ),
        ContentKind::Faqs => ContentItems::Faqs(
            sqlx::query_as::<_, FaqRow>(&sql)
                .fetch_all(pool)
                .await?
                .into_iter()
                .map(Into::into)
                .collect(),
        ),
    };
    Ok(items)
}

/// Fetch a single published blog post.
///
/// # Errors
///
/// Returns [`ContentError::NotFound`] if no published post has `slug`.
pub async fn blog_post_by_slug(pool: &PgPool, slug: &str) -> Result<BlogPost, ContentError> {
    let sql = format!("{BLOG_POST_SELECT} WHERE published AND slug = $1");
    sqlx::query_as::<_, BlogPostRow>(&sql)
        .bind(slug)
        .fetch_optional(pool)
        .await?
        .map(Into::into)
        .ok_or(ContentError::NotFound)
}

/// Escape `LIKE` wildcards so the query matches literally.
fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

/// Case-insensitive substring search over destinations and packages.
///
/// A blank term returns empty results without touching the database.
///
/// # Errors
///
/// Returns [`ContentError::Database`] if either query fails.
pub async fn search(pool: &PgPool, term: &str) -> Result<SearchResults, ContentError> {
    let term = term.trim();
    if term.is_empty() {
        return Ok(SearchResults::default());
    }
    let pattern = like_pattern(term);

    let destination_sql = format!(
        "{DESTINATION_SELECT} WHERE name ILIKE $1 OR country ILIKE $1 OR description ILIKE $1 \
         ORDER BY featured DESC, name LIMIT $2"
    );
    let destinations = sqlx::query_as::<_, DestinationRow>(&destination_sql)
        .bind(&pattern)
        .bind(SEARCH_LIMIT)
        .fetch_all(pool)
        .await?;

    let package_sql = format!(
        "{PACKAGE_SELECT} WHERE name ILIKE $1 OR description ILIKE $1 OR duration ILIKE $1 \
         ORDER BY featured DESC, name LIMIT $2"
    );
    let packages = sqlx::query_as::<_, PackageRow>(&package_sql)
        .bind(&pattern)
        .bind(SEARCH_LIMIT)
        .fetch_all(pool)
        .await?;

    Ok(SearchResults {
        destinations: destinations.into_iter().map(Into::into).collect(),
        packages: packages.into_iter().map(Into::into).collect(),
    })
}

#[cfg(test)]
#[path = "content_test.rs"]
mod tests;
