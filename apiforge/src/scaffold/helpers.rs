//! Naming helpers for artifact resolution

use inflector::Inflector;

/// Upper-case the first character of a name, leaving the rest untouched.
///
/// This is deliberately not Pascal-casing: `blog_posts` becomes
/// `Blog_posts`, matching how default artifact names are derived from the
/// module argument.
///
/// # Examples
///
/// ```
/// # use apiforge::scaffold::helpers::capitalize_first;
/// assert_eq!(capitalize_first("blog"), "Blog");
/// assert_eq!(capitalize_first("Blog"), "Blog");
/// ```
#[must_use]
pub fn capitalize_first(input: &str) -> String {
    let mut chars = input.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}

/// Singularize a noun-like identifier.
///
/// A no-op on already-singular words.
///
/// # Examples
///
/// ```
/// # use apiforge::scaffold::helpers::singularize;
/// assert_eq!(singularize("Posts"), "Post");
/// assert_eq!(singularize("Categories"), "Category");
/// assert_eq!(singularize("Blog"), "Blog");
/// ```
///
/// # Note
///
/// The inflector library has known limitations with some irregular
/// singulars. This is acceptable for code generation as module names are
/// typically regular words.
#[must_use]
pub fn singularize(input: &str) -> String {
    input.to_singular()
}

/// Singularize every `/`-separated segment of a directory path.
///
/// # Examples
///
/// ```
/// # use apiforge::scaffold::helpers::singularize_segments;
/// assert_eq!(singularize_segments("Blogs/Posts"), "Blog/Post");
/// assert_eq!(singularize_segments("Blog"), "Blog");
/// assert_eq!(singularize_segments(""), "");
/// ```
#[must_use]
pub fn singularize_segments(path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }
    path.split('/')
        .map(singularize)
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_only_the_first_character() {
        assert_eq!(capitalize_first("blog"), "Blog");
        assert_eq!(capitalize_first("blog_posts"), "Blog_posts");
        assert_eq!(capitalize_first("Blog"), "Blog");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn singularizes_regular_plurals() {
        assert_eq!(singularize("Posts"), "Post");
        assert_eq!(singularize("Categories"), "Category");
        assert_eq!(singularize("users"), "user");
    }

    #[test]
    fn singular_words_pass_through() {
        assert_eq!(singularize("Post"), "Post");
        assert_eq!(singularize("Blog"), "Blog");
    }

    #[test]
    fn singularizes_each_path_segment() {
        assert_eq!(singularize_segments("Blogs/Posts"), "Blog/Post");
        assert_eq!(singularize_segments("Shop/Items"), "Shop/Item");
        assert_eq!(singularize_segments(""), "");
    }
}
