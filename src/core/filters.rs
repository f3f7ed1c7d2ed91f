use crate::models::Stipend;

/// Location values that denote no fixed work site
const REMOTE_MARKERS: &[&str] = &["work from home", "remote", "wfh", "online", "virtual"];

/// Preferences that accept any location
const FLEXIBLE_PREFERENCES: &[&str] = &["any", "anywhere", "all", "no preference"];

/// Words too common in degree names to signal relevance
const EDUCATION_STOPWORDS: &[&str] = &["and", "the", "for", "with", "from", "degree", "year"];

/// Lowercase, trim and de-duplicate candidate skills, preserving first occurrence order
pub fn normalize_skills(skills: &[String]) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::with_capacity(skills.len());
    for skill in skills {
        let skill = skill.trim().to_lowercase();
        if !skill.is_empty() && !normalized.contains(&skill) {
            normalized.push(skill);
        }
    }
    normalized
}

/// Candidate skills that appear as a case-insensitive substring of the title
///
/// `skills` must already be normalized.
#[inline]
pub fn matched_skills(skills: &[String], title: &str) -> Vec<String> {
    let title = title.to_lowercase();
    skills
        .iter()
        .filter(|skill| title.contains(skill.as_str()))
        .cloned()
        .collect()
}

pub fn is_remote(location: &str) -> bool {
    let location = location.to_lowercase();
    REMOTE_MARKERS.iter().any(|marker| location.contains(marker))
}

/// Check whether a listing location satisfies the candidate's preference
///
/// Matches on case-insensitive equality or containment in either direction,
/// and treats any two remote indicators as equivalent.
#[inline]
pub fn location_matches(preference: &str, location: &str) -> bool {
    let preference = preference.trim().to_lowercase();
    let location = location.trim().to_lowercase();

    if preference.is_empty() {
        return false;
    }
    if FLEXIBLE_PREFERENCES.contains(&preference.as_str()) {
        return true;
    }
    if location.is_empty() {
        return false;
    }
    if location == preference || location.contains(&preference) || preference.contains(&location) {
        return true;
    }

    is_remote(&preference) && is_remote(&location)
}

/// A stipend is acceptable when no minimum is set or its monthly lower bound
/// reaches the minimum. Unpaid and unparseable stipends count as zero.
#[inline]
pub fn stipend_acceptable(stipend: &Stipend, min_stipend: f64) -> bool {
    min_stipend <= 0.0 || stipend.monthly_minimum() >= min_stipend
}

/// Split an education string into lowercase terms worth matching on
pub fn education_terms(education: &str) -> Vec<String> {
    let mut terms: Vec<String> = Vec::new();
    for term in education
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().count() >= 3)
        .map(str::to_lowercase)
    {
        if !EDUCATION_STOPWORDS.contains(&term.as_str()) && !terms.contains(&term) {
            terms.push(term);
        }
    }
    terms
}

/// Fraction (0-1) of education terms found in the listing's title or company
#[inline]
pub fn education_overlap(terms: &[String], title: &str, company: &str) -> f64 {
    if terms.is_empty() {
        return 0.0;
    }
    let haystack = format!("{} {}", title, company).to_lowercase();
    let found = terms.iter().filter(|term| haystack.contains(term.as_str())).count();
    found as f64 / terms.len() as f64
}
