//! Copy-as-markdown page export.

/// Format a page title and body into the single text blob written to the
/// clipboard: `# <title>` followed by a blank line and the body.
pub fn page_export(title: &str, body: &str) -> String {
    format!("# {}\n\n{}", title, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn formats_title_and_body() {
        let blob = page_export("Web.Request", "Builders for the request side.");

        assert_eq!(blob, "# Web.Request\n\nBuilders for the request side.");
    }

    #[test]
    fn empty_body_keeps_the_separator() {
        assert_eq!(page_export("Home", ""), "# Home\n\n");
    }
}
