/// Returns true if any of the `keywords` shows up in any of the `texts`,
/// ignoring case. Texts that are [`None`] never match.
pub fn contains_any_keyword<T, K>(texts: &[Option<T>], keywords: &[K]) -> bool
where
    T: AsRef<str>,
    K: AsRef<str>,
{
    // Lowercase everything once instead of per pair.
    let texts: Vec<String> = texts
        .iter()
        .flatten()
        .map(|x| x.as_ref().to_lowercase())
        .collect();

    keywords.iter().any(|keyword| {
        let keyword = keyword.as_ref().to_lowercase();
        texts.iter().any(|text| text.contains(&keyword))
    })
}
