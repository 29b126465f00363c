/// Escape HTML special characters
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Escape HTML attribute values
pub fn escape_attr(text: &str) -> String {
    escape_html(text)
}

/// Href of an entry's view page
pub fn entry_href(title: &str) -> String {
    format!("/wiki/{}/", urlencoding::encode(title))
}

/// Href of an entry's edit form
pub fn edit_href(title: &str) -> String {
    format!("/edit/{}", urlencoding::encode(title))
}

/// Case-insensitive title comparison used for existence checks
pub fn titles_match(a: &str, b: &str) -> bool {
    a.to_uppercase() == b.to_uppercase()
}

/// Suffix appended to a title to form its file name
pub const ENTRY_FILE_SUFFIX: &str = ".md";

/// Longest file name, in bytes, accepted by common filesystems
pub const MAX_FILE_NAME_BYTES: usize = 255;

/// Whether `<title>.md` stays within the file name length limit
pub fn fits_file_name(title: &str) -> bool {
    title.len() + ENTRY_FILE_SUFFIX.len() <= MAX_FILE_NAME_BYTES
}

/// Whether a title can be used as a file name inside the entries directory
pub fn is_storable_title(title: &str) -> bool {
    !title.is_empty()
        && title != "."
        && title != ".."
        && !title.contains(['/', '\\', '\0'])
        && fits_file_name(title)
}
