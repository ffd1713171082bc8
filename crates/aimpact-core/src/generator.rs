//! Template-based content generation.
//!
//! Generation picks a pre-written template and applies one substitution:
//! every `AI` in the template stays `AI` when the prompt mentions `AI`, and
//! becomes `Technology` otherwise. Both checks are case-sensitive and
//! unanchored, so the `AI` inside a word like `FAIR` is replaced too.
//!
//! Built-in templates cover the four [`ContentType`]s. Configured templates
//! extend them; a configured template with a built-in name replaces it.

use std::collections::{BTreeMap, HashMap};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{ContentError, ContentResult};

const SUBJECT_MARKER: &str = "AI";
const FALLBACK_SUBJECT: &str = "Technology";

const BLOG_TEMPLATE: &str = "# The Future of Artificial Intelligence

Artificial Intelligence is revolutionizing the way we work, live, and interact with technology. From machine learning algorithms that can predict market trends to natural language processing systems that understand human speech, AI is becoming an integral part of our daily lives.

## Key Benefits of AI Integration

1. **Increased Efficiency**: AI can automate repetitive tasks, allowing humans to focus on more creative and strategic work.

2. **Better Decision Making**: With access to vast amounts of data, AI can provide insights that help make more informed decisions.

3. **Personalized Experiences**: AI can tailor experiences to individual preferences and behaviors.

## Looking Ahead

As we continue to advance in AI technology, we can expect to see even more innovative applications that will transform industries and improve quality of life for people around the world.";

const EMAIL_TEMPLATE: &str = "Subject: Exciting Partnership Opportunity

Dear [Name],

I hope this email finds you well. I'm reaching out to discuss a potential partnership opportunity that could be mutually beneficial for both our organizations.

Our AI-powered platform has been helping businesses increase their efficiency by up to 40%, and I believe your company could see similar results. We've worked with companies in your industry and have consistently delivered exceptional outcomes.

Would you be available for a brief 15-minute call next week to discuss how we might collaborate? I'm confident we can create significant value together.

Best regards,
[Your Name]";

const SOCIAL_TEMPLATE: &str = "\u{1f680} Just discovered the power of AI integration in business!

The results are mind-blowing:
\u{2705} 40% increase in productivity
\u{2705} 60% reduction in manual tasks\x20\x20
\u{2705} 90% improvement in accuracy

The future is here, and it's powered by artificial intelligence!

#AI #Technology #Innovation #BusinessGrowth #FutureOfWork";

const PRODUCT_TEMPLATE: &str = "## Premium AI-Powered Analytics Dashboard

Transform your data into actionable insights with our cutting-edge analytics platform.

**Key Features:**
- Real-time data visualization
- Predictive analytics powered by machine learning
- Customizable dashboards and reports
- Seamless integration with existing tools
- Enterprise-grade security

**Perfect for:**
- Data analysts and scientists
- Business intelligence teams
- C-level executives
- Marketing professionals

**Pricing:** Starting at $99/month

Experience the power of AI-driven analytics. Start your free trial today!";

/// Kinds of content with a built-in template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// Engaging blog content.
    Blog,
    /// Professional emails.
    Email,
    /// Social media posts.
    Social,
    /// Product details.
    Product,
}

impl ContentType {
    /// Every built-in content type, in display order.
    pub const ALL: [Self; 4] = [Self::Blog, Self::Email, Self::Social, Self::Product];

    /// Template name, as used by [`TemplateSet::get`].
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Blog => "blog",
            Self::Email => "email",
            Self::Social => "social",
            Self::Product => "product",
        }
    }

    /// Human-readable name.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Blog => "Blog Post",
            Self::Email => "Email",
            Self::Social => "Social Media",
            Self::Product => "Product Description",
        }
    }

    /// One-line description.
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Blog => "Engaging blog content",
            Self::Email => "Professional emails",
            Self::Social => "Social media posts",
            Self::Product => "Product details",
        }
    }

    /// The built-in template body.
    pub const fn template(&self) -> &'static str {
        match self {
            Self::Blog => BLOG_TEMPLATE,
            Self::Email => EMAIL_TEMPLATE,
            Self::Social => SOCIAL_TEMPLATE,
            Self::Product => PRODUCT_TEMPLATE,
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of [`TemplateSet::generate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GeneratedContent {
    /// Name of the template used.
    pub template: String,
    /// The generated text.
    pub content: String,
}

/// Named templates available for generation.
#[derive(Debug, Clone)]
pub struct TemplateSet {
    templates: BTreeMap<String, String>,
}

impl Default for TemplateSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TemplateSet {
    /// Only the built-in templates.
    pub fn builtin() -> Self {
        let templates = ContentType::ALL
            .iter()
            .map(|ct| (ct.as_str().to_string(), ct.template().to_string()))
            .collect();
        Self { templates }
    }

    /// Built-in templates extended by `custom`; custom names win on collision.
    pub fn with_custom(custom: Option<&HashMap<String, String>>) -> Self {
        let mut set = Self::builtin();
        if let Some(custom) = custom {
            for (name, body) in custom {
                set.templates.insert(name.clone(), body.clone());
            }
        }
        set
    }

    /// Template names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    /// Look up a template body by name.
    pub fn get(&self, name: &str) -> ContentResult<&str> {
        self.templates
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| ContentError::UnknownTemplate {
                name: name.to_string(),
                available: self.names().collect::<Vec<_>>().join(", "),
            })
    }

    /// Generate content for `prompt` from the named template.
    #[tracing::instrument(skip(self, prompt), fields(prompt_len = prompt.len()))]
    pub fn generate(&self, prompt: &str, template: &str) -> ContentResult<GeneratedContent> {
        if prompt.trim().is_empty() {
            return Err(ContentError::EmptyPrompt);
        }
        let body = self.get(template)?;
        let content = substitute_subject(body, prompt);
        tracing::debug!(chars = content.len(), "content generated");
        Ok(GeneratedContent {
            template: template.to_string(),
            content,
        })
    }
}

/// Apply the `AI` substitution to `body` for the given prompt.
pub fn substitute_subject(body: &str, prompt: &str) -> String {
    let subject = if prompt.contains(SUBJECT_MARKER) {
        SUBJECT_MARKER
    } else {
        FALLBACK_SUBJECT
    };
    body.replace(SUBJECT_MARKER, subject)
}
