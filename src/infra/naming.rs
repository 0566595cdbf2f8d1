//! Output directory naming for notebooks and notes.

use crate::domain::NoteMeta;

/// Makes a display name safe to use as a single directory component.
///
/// Path separators would nest the output tree, so every `/` becomes a `:`.
/// Nothing else is altered; Quiver names are otherwise ordinary filenames.
///
/// # Examples
///
/// ```
/// use qvhtml::infra::sanitize_component;
///
/// assert_eq!(sanitize_component("Recipes/Soup"), "Recipes:Soup");
/// assert_eq!(sanitize_component("Inbox"), "Inbox");
/// ```
pub fn sanitize_component(name: &str) -> String {
    name.replace('/', ":")
}

/// Derives the output directory name for a note.
///
/// Uses the title (identifier when the title is missing or empty) with path
/// separators substituted. A leading `.` would make the directory hidden on
/// unix-likes, so such names get a `Note:` prefix.
pub fn note_dir_name(meta: &NoteMeta) -> String {
    let name = sanitize_component(meta.display_title());
    if name.starts_with('.') {
        format!("Note:{name}")
    } else {
        name
    }
}
