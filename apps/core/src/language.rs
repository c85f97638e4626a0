pub const DEFAULT_LANGUAGE: &str = "en-US";

// Locale signals come through a provider rather than straight from the
// process environment, so tests can pin them deterministically.
pub trait LocaleProvider {
    fn preferred_tags(&self) -> Vec<String>;
}

#[derive(Default)]
pub struct EnvLocaleProvider;

impl LocaleProvider for EnvLocaleProvider {
    fn preferred_tags(&self) -> Vec<String> {
        ["LC_ALL", "LC_MESSAGES", "LANG"]
            .iter()
            .filter_map(|name| std::env::var(name).ok())
            .filter(|value| !value.is_empty())
            .collect()
    }
}

pub struct StaticLocaleProvider {
    tags: Vec<String>,
}

impl StaticLocaleProvider {
    pub fn new(tags: &[&str]) -> Self {
        Self {
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
        }
    }
}

impl LocaleProvider for StaticLocaleProvider {
    fn preferred_tags(&self) -> Vec<String> {
        self.tags.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageList {
    tags: Vec<String>,
}

impl LanguageList {
    pub fn primary(&self) -> &str {
        &self.tags[0]
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn as_query_value(&self) -> String {
        self.tags.join(",")
    }
}

// Explicit option first, then the host environment, then the default.
// The result is never empty.
pub fn resolve(explicit: Option<&str>, provider: &dyn LocaleProvider) -> LanguageList {
    if let Some(raw) = explicit {
        let tags: Vec<String> = raw
            .split(',')
            .filter_map(|part| usable_tag(part.trim()))
            .collect();
        if !tags.is_empty() {
            return LanguageList { tags };
        }
    }

    for raw in provider.preferred_tags() {
        if let Some(tag) = usable_tag(&raw) {
            return LanguageList { tags: vec![tag] };
        }
    }

    LanguageList {
        tags: vec![DEFAULT_LANGUAGE.to_string()],
    }
}

// Accepts both IETF tags ("de-DE") and POSIX locale names
// ("de_DE.UTF-8"), normalizing to <primary>-<SUBTAG>.
fn usable_tag(raw: &str) -> Option<String> {
    let base = raw
        .split(|c| c == '.' || c == '@')
        .next()
        .unwrap_or_default()
        .replace('_', "-");
    if base.is_empty() || base == "C" || base == "POSIX" {
        return None;
    }

    let mut parts = base.split('-');
    let primary = parts.next().unwrap_or_default();
    if primary.is_empty() || primary.len() > 3 || !primary.chars().all(|c| c.is_ascii_alphabetic())
    {
        return None;
    }

    let mut tag = primary.to_ascii_lowercase();
    if let Some(region) = parts.next() {
        if region.len() == 2 && region.chars().all(|c| c.is_ascii_alphabetic()) {
            tag.push('-');
            tag.push_str(&region.to_ascii_uppercase());
        }
    }
    Some(tag)
}
