//! Asset pipeline for the generated site.

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// Generate the main CSS file.
    pub fn generate_css() -> String {
        DEFAULT_CSS.to_string()
    }

    /// Generate the main JavaScript file.
    ///
    /// The script re-implements the same transitions the Rust state
    /// machines define: set-toggle filtering recomputed from data-kind
    /// attributes, independent expand flags, the showcase timer with its
    /// pause cooldown, and the copy-as-markdown button.
    pub fn generate_js() -> String {
        DEFAULT_JS.to_string()
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }
}

const DEFAULT_CSS: &str = r#"/* marquee site theme */

:root {
  --background: #ffffff;
  --foreground: #1a1a1a;
  --muted: #f4f4f5;
  --muted-foreground: #6b7280;
  --border: #e5e7eb;
  --primary: #2563eb;
  --content-max-width: 860px;
  --radius: 0.5rem;
}

@media (prefers-color-scheme: dark) {
  :root {
    --background: #0b0b0d;
    --foreground: #ededf0;
    --muted: #18181b;
    --muted-foreground: #9ca3af;
    --border: #27272a;
    --primary: #60a5fa;
  }
}

* {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: system-ui, -apple-system, sans-serif;
  background: var(--background);
  color: var(--foreground);
  line-height: 1.6;
}

code, pre {
  font-family: "Fira Code", ui-monospace, monospace;
}

.site-header {
  border-bottom: 1px solid var(--border);
  padding: 0.75rem 1.5rem;
}

.site-logo {
  font-weight: 700;
  color: var(--foreground);
  text-decoration: none;
}

.main {
  max-width: var(--content-max-width);
  margin: 0 auto;
  padding: 2rem 1.5rem;
}

/* Landing */
.hero {
  text-align: center;
  padding: 3rem 0 2rem;
}

.hero h1 {
  font-size: 2.75rem;
}

.tagline {
  color: var(--muted-foreground);
  font-size: 1.15rem;
}

.showcase-tabs {
  display: flex;
  gap: 0.5rem;
  margin-bottom: 0.75rem;
}

.showcase-tab {
  padding: 0.4rem 0.9rem;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  background: var(--muted);
  color: var(--muted-foreground);
  cursor: pointer;
}

.showcase-tab.active {
  background: var(--primary);
  color: #fff;
  border-color: var(--primary);
}

.showcase-panel {
  display: none;
}

.showcase-panel.active {
  display: block;
}

.sample-description {
  color: var(--muted-foreground);
  margin-bottom: 0.5rem;
  font-size: 0.9rem;
}

.code-sample {
  background: var(--muted);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 1rem;
  overflow-x: auto;
  font-size: 0.85rem;
  min-height: 420px;
}

.showcase-dots {
  display: flex;
  justify-content: center;
  gap: 0.5rem;
  margin-top: 1rem;
}

.showcase-dot {
  width: 0.5rem;
  height: 0.5rem;
  border-radius: 50%;
  border: none;
  background: var(--border);
  cursor: pointer;
}

.showcase-dot.active {
  background: var(--primary);
}

/* Reference entries */
.reference-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: 1rem;
}

.copy-markdown {
  font-size: 0.75rem;
  padding: 0.35rem 0.75rem;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  background: var(--muted);
  color: var(--muted-foreground);
  cursor: pointer;
}

.filter-bar {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  gap: 0.5rem;
  padding: 0.75rem;
  background: var(--muted);
  border-radius: var(--radius);
  margin-bottom: 1rem;
}

.filter-label {
  font-size: 0.75rem;
  color: var(--muted-foreground);
}

.filter-button {
  padding: 0.3rem 0.75rem;
  border: none;
  border-radius: 999px;
  font-size: 0.75rem;
  background: var(--background);
  color: var(--muted-foreground);
  cursor: pointer;
}

.filter-button.active {
  outline: 2px solid currentColor;
}

.filter-clear {
  border: none;
  background: none;
  font-size: 0.75rem;
  color: var(--muted-foreground);
  cursor: pointer;
}

.entry {
  border: 1px solid var(--border);
  border-radius: var(--radius);
  margin-bottom: 0.5rem;
  overflow: hidden;
}

.entry-row {
  display: grid;
  grid-template-columns: 4.5rem 1fr auto;
  align-items: center;
  gap: 0.75rem;
  padding: 0.75rem;
}

.signature {
  font-size: 0.8rem;
  overflow-x: auto;
  white-space: pre;
}

.kind-badge {
  display: inline-block;
  padding: 0.1rem 0.5rem;
  border-radius: 0.25rem;
  font-size: 0.7rem;
  font-weight: 500;
  text-align: center;
}

/* Kind badge palette */
.kind-value    { background: rgba(16, 185, 129, 0.15); color: #059669; }
.kind-function { background: rgba(59, 130, 246, 0.15); color: #2563eb; }
.kind-type     { background: rgba(168, 85, 247, 0.15); color: #9333ea; }
.kind-newtype  { background: rgba(139, 92, 246, 0.15); color: #7c3aed; }
.kind-data     { background: rgba(245, 158, 11, 0.15); color: #d97706; }
.kind-class    { background: rgba(244, 63, 94, 0.15); color: #e11d48; }

.badge {
  padding: 0.1rem 0.4rem;
  border-radius: 0.25rem;
  font-size: 0.7rem;
  background: var(--muted);
  color: var(--muted-foreground);
}

.badge-warning { background: rgba(234, 179, 8, 0.15); color: #ca8a04; }
.badge-info    { background: rgba(59, 130, 246, 0.15); color: #2563eb; }

.entry-expand {
  width: 100%;
  padding: 0.5rem 0.75rem;
  border: none;
  border-top: 1px solid var(--border);
  background: none;
  color: var(--muted-foreground);
  font-size: 0.8rem;
  text-align: left;
  cursor: pointer;
}

.entry-details {
  border-top: 1px solid var(--border);
  padding: 1rem;
  display: grid;
  gap: 1rem;
}

.detail-label {
  font-size: 0.7rem;
  color: var(--muted-foreground);
  margin-bottom: 0.25rem;
}

.constructor, .method {
  background: var(--muted);
  border-radius: 0.25rem;
  padding: 0.5rem;
  margin-bottom: 0.5rem;
}

.fields {
  padding-left: 1rem;
  font-size: 0.8rem;
}

.field-name { color: var(--muted-foreground); }

.method-signature, .instance {
  display: block;
  font-size: 0.8rem;
  margin-top: 0.25rem;
  white-space: pre;
}

.method-description {
  font-size: 0.85rem;
  margin-top: 0.25rem;
}

.laws {
  list-style: disc inside;
  font-size: 0.85rem;
}

.example {
  background: var(--muted);
  border-radius: 0.25rem;
  padding: 0.5rem;
  overflow-x: auto;
  font-size: 0.8rem;
}

/* Token palette */
.tok-keyword  { color: #ec4899; }
.tok-operator { color: #06b6d4; }
.tok-type     { color: #f59e0b; }
.tok-literal  { color: #22c55e; }
.tok-plain    { color: inherit; }

.page-list {
  margin-top: 3rem;
}

.page-list ul {
  list-style: none;
}

.page-list a {
  color: var(--primary);
  text-decoration: none;
}
"#;

const DEFAULT_JS: &str = r#"(function () {
  'use strict';

  // Rotating showcase: auto-advance with a manual-selection cooldown.
  var showcase = document.querySelector('.showcase');
  if (showcase) {
    var interval = parseInt(showcase.dataset.interval, 10) || 3000;
    var cooldown = parseInt(showcase.dataset.cooldown, 10) || 5000;
    var panels = showcase.querySelectorAll('.showcase-panel');
    var active = 0;
    var pausedUntil = 0;

    function show(index) {
      active = index;
      ['.showcase-panel', '.showcase-tab', '.showcase-dot'].forEach(function (sel) {
        showcase.querySelectorAll(sel).forEach(function (el, i) {
          el.classList.toggle('active', i === index);
        });
      });
    }

    function tick() {
      if (Date.now() < pausedUntil) return;
      pausedUntil = 0;
      if (panels.length > 0) show((active + 1) % panels.length);
    }

    function select(index) {
      show(index);
      pausedUntil = Date.now() + cooldown;
    }

    showcase.querySelectorAll('.showcase-tab, .showcase-dot').forEach(function (el) {
      el.addEventListener('click', function () {
        select(parseInt(el.dataset.index, 10) || 0);
      });
    });

    var timer = setInterval(tick, interval);
    window.addEventListener('pagehide', function () {
      clearInterval(timer);
    });
  }

  // Kind filter bar: toggle membership in the active set, then recompute
  // visibility from the full list. Empty set means show all.
  var filterBar = document.querySelector('.filter-bar');
  if (filterBar) {
    var activeKinds = new Set();
    var clearButton = filterBar.querySelector('.filter-clear');

    function applyFilters() {
      document.querySelectorAll('.entry').forEach(function (entry) {
        var visible = activeKinds.size === 0 || activeKinds.has(entry.dataset.kind);
        entry.hidden = !visible;
      });
      filterBar.querySelectorAll('.filter-button').forEach(function (button) {
        button.classList.toggle('active', activeKinds.has(button.dataset.kind));
      });
      clearButton.hidden = activeKinds.size === 0;
    }

    filterBar.querySelectorAll('.filter-button').forEach(function (button) {
      button.addEventListener('click', function () {
        var kind = button.dataset.kind;
        if (!activeKinds.delete(kind)) activeKinds.add(kind);
        applyFilters();
      });
    });

    clearButton.addEventListener('click', function () {
      activeKinds.clear();
      applyFilters();
    });
  }

  // Expand/collapse: one independent flag per entry.
  document.querySelectorAll('.entry-expand').forEach(function (button) {
    button.addEventListener('click', function () {
      var details = button.nextElementSibling;
      details.hidden = !details.hidden;
      button.textContent = details.hidden ? 'Expand' : 'Collapse';
    });
  });

  // Copy page as markdown.
  var copyButton = document.querySelector('.copy-markdown');
  if (copyButton) {
    copyButton.addEventListener('click', function () {
      fetch(copyButton.dataset.export)
        .then(function (res) { return res.text(); })
        .then(function (text) { return navigator.clipboard.writeText(text); })
        .then(function () {
          var label = copyButton.textContent;
          copyButton.textContent = 'Copied!';
          setTimeout(function () { copyButton.textContent = label; }, 1500);
        });
    });
  }
})();
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_covers_every_token_class() {
        let css = AssetPipeline::generate_css();

        for class in [
            ".tok-keyword",
            ".tok-operator",
            ".tok-type",
            ".tok-literal",
            ".tok-plain",
        ] {
            assert!(css.contains(class), "missing {}", class);
        }
    }

    #[test]
    fn css_covers_every_kind_badge() {
        let css = AssetPipeline::generate_css();

        for class in [
            ".kind-value",
            ".kind-function",
            ".kind-type",
            ".kind-newtype",
            ".kind-data",
            ".kind-class",
        ] {
            assert!(css.contains(class), "missing {}", class);
        }
    }

    #[test]
    fn minifies_generated_css() {
        let css = AssetPipeline::generate_css();

        let minified = AssetPipeline::minify_css(&css).unwrap();

        assert!(minified.len() < css.len());
        assert!(minified.contains(".tok-keyword"));
    }

    #[test]
    fn js_wires_the_interactive_widgets() {
        let js = AssetPipeline::generate_js();

        assert!(js.contains("dataset.interval"));
        assert!(js.contains("pausedUntil"));
        assert!(js.contains("filter-button"));
        assert!(js.contains("entry-expand"));
        assert!(js.contains("navigator.clipboard"));
    }
}
