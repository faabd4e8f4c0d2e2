//! Internet shortcut (`.url`) files.

/// Render the contents of a `.url` shortcut pointing at `url`.
pub fn render_url_shortcut(url: &str) -> String {
    format!("[InternetShortcut]\nURL={}", url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_url_shortcut() {
        assert_eq!(
            render_url_shortcut("https://example.com"),
            "[InternetShortcut]\nURL=https://example.com"
        );
    }
}
