/// Parse the comma-separated tag field from the post form.
///
/// Every space is removed before splitting, so `"new york, art"` yields
/// `["newyork", "art"]`. Empty entries are dropped.
pub fn parse_tags(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    raw.replace(' ', "")
        .split(',')
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}
