//! Path template helpers.
//!
//! Templates use `{param}` placeholders, e.g. `/projects/{project_id}/logs`.

/// Extracts placeholder names from a path template, in order of appearance.
///
/// ## Examples
///
/// ```
/// use harbor_define::extract_path_params;
///
/// assert_eq!(extract_path_params("/statistics"), Vec::<&str>::new());
/// assert_eq!(
///     extract_path_params("/repositories/{repo_name}/tags/{tag}"),
///     vec!["repo_name", "tag"]
/// );
/// ```
pub fn extract_path_params(path: &str) -> Vec<&str> {
    let mut params = Vec::new();
    let mut start = None;

    for (idx, c) in path.char_indices() {
        match c {
            '{' => start = Some(idx + 1),
            '}' => {
                if let Some(from) = start.take() {
                    let name = &path[from..idx];
                    if !name.is_empty() {
                        params.push(name);
                    }
                }
            }
            _ => {}
        }
    }

    params
}

/// Substitutes placeholders with their values.
///
/// Values are inserted as-is. Repository names such as `library/nginx`
/// keep their `/` so they address nested paths on the server. The template
/// is scanned once, left to right, so braces inside an inserted value are
/// never treated as placeholders. Placeholders without a value are kept.
///
/// ## Examples
///
/// ```
/// use harbor_define::substitute_path_params;
///
/// let path = substitute_path_params(
///     "/repositories/{repo_name}/tags/{tag}",
///     &[("repo_name", "library/nginx"), ("tag", "1.25")],
/// );
/// assert_eq!(path, "/repositories/library/nginx/tags/1.25");
/// ```
pub fn substitute_path_params(path: &str, params: &[(&str, &str)]) -> String {
    let mut result = String::with_capacity(path.len());
    let mut copied = 0;
    let mut start = None;

    for (idx, c) in path.char_indices() {
        match c {
            '{' => start = Some(idx),
            '}' => {
                let Some(open) = start.take() else {
                    continue;
                };
                let name = &path[open + 1..idx];
                if let Some((_, value)) = params.iter().find(|(n, _)| *n == name) {
                    result.push_str(&path[copied..open]);
                    result.push_str(value);
                    copied = idx + 1;
                }
            }
            _ => {}
        }
    }

    result.push_str(&path[copied..]);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_no_params() {
        assert_eq!(extract_path_params("/projects"), Vec::<&str>::new());
        assert_eq!(extract_path_params("/"), Vec::<&str>::new());
    }

    #[test]
    fn extract_keeps_template_order() {
        assert_eq!(
            extract_path_params("/projects/{project_id}/members/{user_id}"),
            vec!["project_id", "user_id"]
        );
    }

    #[test]
    fn extract_with_trailing_slash() {
        assert_eq!(
            extract_path_params("/targets/{id}/policies/"),
            vec!["id"]
        );
    }

    #[test]
    fn extract_ignores_empty_and_unclosed_braces() {
        assert_eq!(extract_path_params("/a/{}/b"), Vec::<&str>::new());
        assert_eq!(extract_path_params("/a/{open"), Vec::<&str>::new());
        assert_eq!(extract_path_params("/a/}x{y}"), vec!["y"]);
    }

    #[test]
    fn substitute_multiple_params() {
        assert_eq!(
            substitute_path_params(
                "/projects/{project_id}/metadatas/{meta_name}",
                &[("project_id", "7"), ("meta_name", "public")]
            ),
            "/projects/7/metadatas/public"
        );
    }

    #[test]
    fn substitute_leaves_unknown_placeholders() {
        assert_eq!(
            substitute_path_params("/targets/{id}", &[("other", "1")]),
            "/targets/{id}"
        );
    }

    #[test]
    fn substitute_does_not_escape_values() {
        assert_eq!(
            substitute_path_params("/repositories/{repo_name}", &[("repo_name", "a/b/c")]),
            "/repositories/a/b/c"
        );
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        assert_eq!(
            substitute_path_params(
                "/repositories/{repo_name}/tags/{tag}",
                &[("repo_name", "lib/{tag}"), ("tag", "v1")]
            ),
            "/repositories/lib/{tag}/tags/v1"
        );
        assert_eq!(
            substitute_path_params("/targets/{id}", &[("id", "{id}")]),
            "/targets/{id}"
        );
    }

    #[test]
    fn substitute_repeated_placeholder() {
        assert_eq!(
            substitute_path_params("/{a}/x/{a}", &[("a", "1")]),
            "/1/x/1"
        );
    }
}
