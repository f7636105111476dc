//! Template engine and rendering contexts.

use minijinja::{context, Environment};
use serde::Serialize;

use marquee_ref::Entry;
use marquee_syntax::tokenize;
use marquee_widgets::ShowcaseTab;

/// A highlighted span ready for templating.
#[derive(Debug, Clone, Serialize)]
pub struct Span {
    /// CSS class for the span kind
    pub class: &'static str,
    /// Exact span text (escaped by the template engine)
    pub text: String,
}

/// Tokenize a snippet into template-ready spans.
pub fn highlight(source: &str) -> Vec<Span> {
    tokenize(source)
        .into_iter()
        .map(|t| Span {
            class: t.kind.css_class(),
            text: t.text,
        })
        .collect()
}

/// A record field of a constructor.
#[derive(Debug, Clone, Serialize)]
pub struct FieldCtx {
    pub name: String,
    pub ty: String,
}

/// A constructor of a data entry.
#[derive(Debug, Clone, Serialize)]
pub struct ConstructorCtx {
    pub name: String,
    pub fields: Vec<FieldCtx>,
    pub args: Vec<String>,
}

/// A typeclass method.
#[derive(Debug, Clone, Serialize)]
pub struct MethodCtx {
    pub name: String,
    pub signature: Vec<Span>,
    pub description: Option<String>,
    pub default: bool,
}

/// One rendered reference entry.
#[derive(Debug, Clone, Serialize)]
pub struct EntryCtx {
    /// Kind badge label ("value", "data", ...)
    pub kind: &'static str,
    pub name: String,
    /// Highlighted display signature
    pub signature: Vec<Span>,
    /// Whether an expand affordance is rendered at all
    pub has_details: bool,
    /// Whether the entry starts expanded
    pub expanded: bool,
    pub module: Option<String>,
    /// Description rendered to HTML
    pub description_html: Option<String>,
    pub since: Option<String>,
    pub deprecated: Option<String>,
    pub example: Option<String>,
    pub constructors: Vec<ConstructorCtx>,
    /// Highlighted instance declaration lines
    pub instances: Vec<Vec<Span>>,
    pub methods: Vec<MethodCtx>,
    pub laws: Vec<String>,
}

impl EntryCtx {
    /// Build the rendering context for one entry.
    ///
    /// `expanded` is the entry's initial expand flag from view state.
    pub fn new(entry: &Entry, expanded: bool) -> Self {
        let meta = entry.meta();

        let mut ctx = Self {
            kind: entry.kind().as_str(),
            name: meta.name.clone(),
            signature: highlight(&entry.signature()),
            has_details: entry.has_details(),
            expanded,
            module: meta.module.clone(),
            description_html: meta.description.as_deref().map(markdown_to_html),
            since: meta.since.clone(),
            deprecated: meta.deprecated.clone(),
            example: meta.example.clone(),
            constructors: Vec::new(),
            instances: Vec::new(),
            methods: Vec::new(),
            laws: Vec::new(),
        };

        match entry {
            Entry::Value(_) | Entry::Function(_) => {}

            Entry::Type(t) | Entry::Newtype(t) | Entry::Data(t) => {
                ctx.constructors = t
                    .constructors
                    .iter()
                    .map(|c| ConstructorCtx {
                        name: c.name.clone(),
                        fields: c
                            .fields
                            .iter()
                            .map(|f| FieldCtx {
                                name: f.name.clone(),
                                ty: f.ty.clone(),
                            })
                            .collect(),
                        args: c.args.clone(),
                    })
                    .collect();
                ctx.instances = t.instances.iter().map(|i| highlight(i)).collect();
            }

            Entry::Class(c) => {
                ctx.methods = c
                    .methods
                    .iter()
                    .map(|m| MethodCtx {
                        name: m.name.clone(),
                        signature: highlight(&m.signature),
                        description: m.description.clone(),
                        default: m.default,
                    })
                    .collect();
                ctx.laws = c.laws.clone();
            }
        }

        ctx
    }
}

/// One filter-bar button.
#[derive(Debug, Clone, Serialize)]
pub struct FilterCtx {
    pub kind: &'static str,
    pub count: usize,
    pub active: bool,
}

/// One showcase sample on the landing page.
#[derive(Debug, Clone, Serialize)]
pub struct SampleCtx {
    pub id: String,
    pub label: String,
    pub description: String,
    pub code: Vec<Span>,
    pub active: bool,
}

impl SampleCtx {
    pub fn new(tab: &ShowcaseTab, active: bool) -> Self {
        Self {
            id: tab.id.clone(),
            label: tab.label.clone(),
            description: tab.description.clone(),
            code: highlight(&tab.code),
            active,
        }
    }
}

/// A link to a built reference page.
#[derive(Debug, Clone, Serialize)]
pub struct PageLink {
    pub title: String,
    pub path: String,
}

/// Render markdown free text to HTML.
pub fn markdown_to_html(source: &str) -> String {
    use pulldown_cmark::{html, Options, Parser};

    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
    let parser = Parser::new_ext(source, options);

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Template engine with the embedded site templates.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create an engine with the built-in templates registered.
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_template("base.html", BASE_TEMPLATE)
            .expect("Failed to add base template");
        env.add_template("home.html", HOME_TEMPLATE)
            .expect("Failed to add home template");
        env.add_template("reference.html", REFERENCE_TEMPLATE)
            .expect("Failed to add reference template");

        Self { env }
    }

    /// Render the landing page.
    pub fn render_home(
        &self,
        site_title: &str,
        tagline: &str,
        base_url: &str,
        samples: &[SampleCtx],
        interval_ms: u64,
        cooldown_ms: u64,
        pages: &[PageLink],
    ) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("home.html")?;

        tmpl.render(context! {
            title => site_title,
            site_title => site_title,
            tagline => tagline,
            base_url => base_url,
            samples => samples,
            interval_ms => interval_ms,
            cooldown_ms => cooldown_ms,
            pages => pages,
        })
    }

    /// Render a reference page.
    #[allow(clippy::too_many_arguments)]
    pub fn render_reference(
        &self,
        site_title: &str,
        title: &str,
        base_url: &str,
        intro_html: Option<&str>,
        filters: &[FilterCtx],
        entries: &[EntryCtx],
        export_path: &str,
    ) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("reference.html")?;

        // the filter bar only renders for more than one kind
        let filters: &[FilterCtx] = if filters.len() > 1 { filters } else { &[] };

        tmpl.render(context! {
            title => title,
            site_title => site_title,
            base_url => base_url,
            intro_html => intro_html,
            filters => filters,
            entries => entries,
            export_path => export_path,
        })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-kind filter contexts in a stable order.
pub fn filter_contexts(entries: &[Entry], state: &marquee_ref::FilterState) -> Vec<FilterCtx> {
    marquee_ref::kind_counts(entries)
        .into_iter()
        .map(|(kind, count)| FilterCtx {
            kind: kind.as_str(),
            count,
            active: state.is_active(kind),
        })
        .collect()
}

const BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ title }} - {{ site_title }}</title>
  <link rel="stylesheet" href="{{ base_url }}assets/main.css">
</head>
<body>
  <header class="site-header">
    <a href="{{ base_url }}" class="site-logo">{{ site_title }}</a>
  </header>
  <main class="main">
    {% block content %}{% endblock %}
  </main>
  <script src="{{ base_url }}assets/main.js"></script>
</body>
</html>"##;

const HOME_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
<section class="hero">
  <h1>{{ site_title }}</h1>
  <p class="tagline">{{ tagline }}</p>
</section>

<section class="showcase" data-interval="{{ interval_ms }}" data-cooldown="{{ cooldown_ms }}">
  <div class="showcase-tabs" role="tablist">
  {% for sample in samples %}
    <button class="showcase-tab{% if sample.active %} active{% endif %}" data-index="{{ loop.index0 }}" role="tab">{{ sample.label }}</button>
  {% endfor %}
  </div>
  <div class="showcase-panels">
  {% for sample in samples %}
    <div class="showcase-panel{% if sample.active %} active{% endif %}" data-index="{{ loop.index0 }}">
      <p class="sample-description">{{ sample.description }}</p>
      <pre class="code-sample"><code>{% for s in sample.code %}<span class="{{ s.class }}">{{ s.text }}</span>{% endfor %}</code></pre>
    </div>
  {% endfor %}
  </div>
  <div class="showcase-dots">
  {% for sample in samples %}
    <button class="showcase-dot{% if sample.active %} active{% endif %}" data-index="{{ loop.index0 }}" aria-label="Go to {{ sample.label }} example"></button>
  {% endfor %}
  </div>
</section>

{% if pages %}
<section class="page-list">
  <h2>Reference</h2>
  <ul>
  {% for page in pages %}
    <li><a href="{{ page.path }}">{{ page.title }}</a></li>
  {% endfor %}
  </ul>
</section>
{% endif %}
{% endblock %}"##;

const REFERENCE_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
<article class="reference">
  <div class="reference-header">
    <h1>{{ title }}</h1>
    <button class="copy-markdown" data-export="{{ export_path }}" title="Copy page as markdown">Copy as Markdown</button>
  </div>

  {% if intro_html %}
  <div class="intro">{{ intro_html | safe }}</div>
  {% endif %}

  {% if filters %}
  <div class="filter-bar">
    <span class="filter-label">Filter:</span>
    {% for f in filters %}
    <button class="filter-button{% if f.active %} active{% endif %}" data-kind="{{ f.kind }}">{{ f.kind }} <span class="count">({{ f.count }})</span></button>
    {% endfor %}
    <button class="filter-clear" hidden>Clear</button>
  </div>
  {% endif %}

  <div class="entry-list">
  {% for entry in entries %}
    <article class="entry" data-kind="{{ entry.kind }}">
      <div class="entry-row">
        <span class="kind-badge kind-{{ entry.kind }}">{{ entry.kind }}</span>
        <code class="signature">{% for s in entry.signature %}<span class="{{ s.class }}">{{ s.text }}</span>{% endfor %}</code>
        <span class="entry-badges">
          {% if entry.deprecated %}<span class="badge badge-warning">deprecated</span>{% endif %}
          {% if entry.since %}<span class="badge badge-info">{{ entry.since }}</span>{% endif %}
        </span>
      </div>

      {% if entry.has_details %}
      <button class="entry-expand">{% if entry.expanded %}Collapse{% else %}Expand{% endif %}</button>
      <div class="entry-details"{% if not entry.expanded %} hidden{% endif %}>
        {% if entry.module %}
        <div class="detail"><div class="detail-label">Module</div><code>{{ entry.module }}</code></div>
        {% endif %}
        {% if entry.description_html %}
        <div class="detail"><div class="detail-label">Description</div><div class="detail-body">{{ entry.description_html | safe }}</div></div>
        {% endif %}
        {% if entry.constructors %}
        <div class="detail"><div class="detail-label">Constructors</div>
          {% for ctor in entry.constructors %}
          <div class="constructor">
            <code class="constructor-name">{{ ctor.name }}</code>
            {% if ctor.fields %}
            <div class="fields">
              {% for field in ctor.fields %}
              <div class="field"><span class="field-name">{{ field.name }}</span><span class="tok-operator"> :: </span><span class="tok-type">{{ field.ty }}</span></div>
              {% endfor %}
            </div>
            {% endif %}
            {% if ctor.args %}<span class="constructor-args">{{ ctor.args | join(" ") }}</span>{% endif %}
          </div>
          {% endfor %}
        </div>
        {% endif %}
        {% if entry.instances %}
        <div class="detail"><div class="detail-label">Instances</div>
          {% for inst in entry.instances %}
          <code class="instance">{% for s in inst %}<span class="{{ s.class }}">{{ s.text }}</span>{% endfor %}</code>
          {% endfor %}
        </div>
        {% endif %}
        {% if entry.methods %}
        <div class="detail"><div class="detail-label">Methods</div>
          {% for method in entry.methods %}
          <div class="method">
            <div class="method-header"><code class="method-name">{{ method.name }}</code>{% if method.default %}<span class="badge">default</span>{% endif %}</div>
            <code class="method-signature">{% for s in method.signature %}<span class="{{ s.class }}">{{ s.text }}</span>{% endfor %}</code>
            {% if method.description %}<p class="method-description">{{ method.description }}</p>{% endif %}
          </div>
          {% endfor %}
        </div>
        {% endif %}
        {% if entry.laws %}
        <div class="detail"><div class="detail-label">Laws</div>
          <ul class="laws">{% for law in entry.laws %}<li><code>{{ law }}</code></li>{% endfor %}</ul>
        </div>
        {% endif %}
        {% if entry.example %}
        <div class="detail"><div class="detail-label">Example</div><pre class="example"><code>{{ entry.example }}</code></pre></div>
        {% endif %}
      </div>
      {% endif %}
    </article>
  {% endfor %}
  </div>
</article>
{% endblock %}"##;
