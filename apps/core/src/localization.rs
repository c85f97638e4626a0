use crate::language::LanguageList;

pub const DEFAULT_PLACEHOLDER: &str = "Search";

// Placeholder lookup tries the full primary tag, then its language
// subtag, then the default text. A missing table entry is never an
// error.
pub fn placeholder(language: &LanguageList) -> &'static str {
    let primary = language.primary();
    if let Some(text) = table_entry(primary) {
        return text;
    }
    let subtag = primary.split('-').next().unwrap_or(primary);
    table_entry(subtag).unwrap_or(DEFAULT_PLACEHOLDER)
}

fn table_entry(tag: &str) -> Option<&'static str> {
    let text = match tag.to_ascii_lowercase().as_str() {
        "ar" => "البحث",
        "ca" => "Cerca",
        "cs" => "Vyhledávání",
        "da" => "Søg",
        "de" => "Suche",
        "en" => "Search",
        "es" => "Búsqueda",
        "fi" => "Hae",
        "fr" => "Rechercher",
        "he" => "חיפוש",
        "hu" => "Keresés",
        "is" => "Leita",
        "it" => "Ricerca",
        "ja" => "検索",
        "ka" => "ძიება",
        "ko" => "검색",
        "lv" => "Meklēt",
        "nb" => "Søk",
        "nl" => "Zoeken",
        "pl" => "Szukaj",
        "pt" => "Busca",
        "ru" => "Поиск",
        "sk" => "Vyhľadávanie",
        "sl" => "Iskanje",
        "sv" => "Sök",
        "th" => "ค้นหา",
        "zh" => "搜索",
        _ => return None,
    };
    Some(text)
}
