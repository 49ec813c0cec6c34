use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::GenError;
use crate::prompt::{self, Marker};
use crate::wire::{ContentRequest, ContentResult, Variant};

pub const BODY_FALLBACK: &str = "Failed to generate content";

/// Per-variant fallbacks substituted when a field cannot be extracted.
pub struct Defaults {
    pub estimate: &'static str,
    pub sections: &'static [&'static str],
    pub keywords: &'static [&'static str],
    pub tips: &'static [&'static str],
}

const ACADEMIC_DEFAULTS: Defaults = Defaults {
    estimate: "Comprehensive content",
    sections: &["Introduction", "Main Content", "Conclusion"],
    keywords: &["Research", "Study", "Project"],
    tips: &["Plan thoroughly", "Stay organized", "Seek feedback"],
};

const SOCIAL_DEFAULTS: Defaults = Defaults {
    estimate: "Estimated reach unavailable",
    sections: &["Introduction", "Main Content", "Conclusion"],
    keywords: &["Viral", "Trending", "Social Media"],
    tips: &["Post at peak hours", "Reply to comments", "Use a strong hook"],
};

pub fn defaults(variant: Variant) -> &'static Defaults {
    match variant {
        Variant::Academic => &ACADEMIC_DEFAULTS,
        Variant::Social => &SOCIAL_DEFAULTS,
    }
}

static BLOCKS: Lazy<Result<Vec<(Marker, Regex)>, regex::Error>> = Lazy::new(|| {
    prompt::ALL_MARKERS
        .iter()
        .map(|m| -> Result<(Marker, Regex), regex::Error> { Ok((*m, compile_block(m)?)) })
        .collect()
});

static BULLET: Lazy<Result<Regex, regex::Error>> = Lazy::new(|| Regex::new(r"^[-•]\s*"));

static TOPIC_PREFIX: Lazy<Result<Regex, regex::Error>> =
    Lazy::new(|| Regex::new(r"^(\d+[.)]|[-•])\s*"));

fn compile_block(m: &Marker) -> Result<Regex, regex::Error> {
    Regex::new(&format!(
        r"(?s){}\s*(.*?)\s*{}",
        regex::escape(m.start),
        regex::escape(m.end)
    ))
}

fn cached(re: &'static Lazy<Result<Regex, regex::Error>>) -> Result<&'static Regex, regex::Error> {
    Lazy::force(re).as_ref().map_err(Clone::clone)
}

/// Trimmed text between the first START/END pair, if both are present.
pub fn extract_block(text: &str, m: &Marker) -> Result<Option<String>, regex::Error> {
    let blocks = Lazy::force(&BLOCKS).as_ref().map_err(Clone::clone)?;
    let capture = |re: &Regex| {
        re.captures(text)
            .and_then(|c| c.get(1))
            .map(|g| g.as_str().trim().to_string())
    };
    match blocks.iter().find(|(known, _)| known == m) {
        Some((_, re)) => Ok(capture(re)),
        None => Ok(capture(&compile_block(m)?)),
    }
}

/// Split a block into display lines: trimmed, leading bullet dropped,
/// empties skipped, order kept.
pub fn split_list(block: &str, prefix: &Regex) -> Vec<String> {
    block
        .lines()
        .map(|l| prefix.replace(l.trim(), "").trim().to_string())
        .filter(|l| !l.is_empty())
        .collect()
}

fn or_default(items: Vec<String>, fallback: &[&str]) -> Vec<String> {
    if items.is_empty() {
        fallback.iter().map(|s| s.to_string()).collect()
    } else {
        items
    }
}

fn parse_fields(content_text: &str, keyword_text: &str, req: &ContentRequest) -> Result<ContentResult, regex::Error> {
    let variant = req.variant();
    let d = defaults(variant);
    let [title_m, body_m, sections_m, tips_m, estimate_m] = prompt::contract(variant);
    let bullet = cached(&BULLET)?;

    let list = |text: &str, m: &Marker| -> Result<Vec<String>, regex::Error> {
        Ok(extract_block(text, m)?
            .map(|b| split_list(&b, bullet))
            .unwrap_or_default())
    };

    let title = extract_block(content_text, &title_m)?
        .unwrap_or_else(|| format!("{} Title", req.content_type));
    let content = extract_block(content_text, &body_m)?
        .unwrap_or_else(|| BODY_FALLBACK.to_string());
    let estimate = extract_block(content_text, &estimate_m)?
        .unwrap_or_else(|| d.estimate.to_string());

    Ok(ContentResult {
        content_type: req.content_type,
        title,
        content,
        sections: or_default(list(content_text, &sections_m)?, d.sections),
        keywords: or_default(list(keyword_text, &prompt::KEYWORDS)?, d.keywords),
        tips: or_default(list(content_text, &tips_m)?, d.tips),
        estimate,
    })
}

/// Build a result from the two raw replies. Missing fields fall back to
/// the variant defaults; only a regex failure is an error.
pub fn parse_response(
    content_text: &str,
    keyword_text: &str,
    req: &ContentRequest,
) -> Result<ContentResult, GenError> {
    parse_fields(content_text, keyword_text, req).map_err(|e| {
        tracing::error!("error parsing response: {e}");
        GenError::ParseFailed
    })
}

/// Newline-delimited topic list, with `1.`-style numbering and bullets removed.
pub fn parse_topic_list(text: &str, limit: usize) -> Vec<String> {
    let Ok(prefix) = cached(&TOPIC_PREFIX) else {
        return Vec::new();
    };
    let mut out = split_list(text, prefix);
    out.truncate(limit);
    out
}
