use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One article as written by the model.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GeneratedArticle {
    /// Headline, no trailing punctuation
    pub title: String,
    /// URL slug suggestion
    pub slug: String,
    /// SEO description, at most 160 characters
    pub meta_description: String,
    /// Full article body in Markdown
    pub body_markdown: String,
    /// 3-8 search keywords
    pub keywords: Vec<String>,
}

/// Structured output envelope (OpenAI requires an object at the root).
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ArticleBatch {
    pub articles: Vec<GeneratedArticle>,
}

/// Article as returned to API callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PublishedArticle {
    pub title: String,
    pub slug: String,
    pub meta_description: String,
    pub body_markdown: String,
    pub keywords: Vec<String>,
    pub source_url: String,
}

impl PublishedArticle {
    /// Tidy a generated article and attribute it to `source_url`.
    ///
    /// The slug is regenerated from the model's suggestion, falling back to
    /// the title when the suggestion has no usable characters.
    pub fn from_generated(article: GeneratedArticle, source_url: &str) -> Self {
        let slug = match slugify(&article.slug) {
            s if s.is_empty() => slugify(&article.title),
            s => s,
        };

        let keywords = article
            .keywords
            .into_iter()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .collect();

        Self {
            title: article.title.trim().to_string(),
            slug,
            meta_description: article.meta_description.trim().to_string(),
            body_markdown: article.body_markdown.trim().to_string(),
            keywords,
            source_url: source_url.to_string(),
        }
    }
}

/// Lowercase ASCII, hyphen-separated slug. Accents are folded where common.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for c in text.chars().flat_map(char::to_lowercase) {
        let c = fold_accent(c);
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(c);
            pending_dash = false;
        } else {
            pending_dash = true;
        }
    }

    slug
}

fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ñ' => 'n',
        'ç' => 'c',
        other => other,
    }
}
