//! Rendering configuration.

use std::env;

/// Layout of the rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStyle {
    /// Single line, tokens separated by one space.
    #[default]
    Compact,
    /// One selection per line, nested selections indented.
    Pretty,
}

impl RenderStyle {
    /// Get style from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "compact" => Some(Self::Compact),
            "pretty" => Some(Self::Pretty),
            _ => None,
        }
    }
}

/// Document rendering configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Output layout.
    pub style: RenderStyle,
    /// Indentation unit used by [`RenderStyle::Pretty`].
    pub indent: String,
    /// Treat plain string arguments that match a declared parameter name
    /// as variable references.
    pub implicit_variables: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            style: RenderStyle::Compact,
            indent: "\t".to_string(),
            implicit_variables: false,
        }
    }
}

impl RenderConfig {
    /// Create a new configuration builder.
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder::default()
    }

    /// Compact single-line output.
    pub fn compact() -> Self {
        Self::default()
    }

    /// Indented multi-line output.
    pub fn pretty() -> Self {
        Self {
            style: RenderStyle::Pretty,
            ..Default::default()
        }
    }

    /// Create config from environment variables.
    ///
    /// - `FLUENTQL_RENDER_STYLE=compact|pretty`
    /// - `FLUENTQL_INDENT=<indent unit>`
    /// - `FLUENTQL_IMPLICIT_VARIABLES=1|true`
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let style = env::var("FLUENTQL_RENDER_STYLE")
            .ok()
            .and_then(|s| RenderStyle::parse(&s))
            .unwrap_or(defaults.style);

        let indent = env::var("FLUENTQL_INDENT")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.indent);

        let implicit_variables = env::var("FLUENTQL_IMPLICIT_VARIABLES")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(defaults.implicit_variables);

        Self {
            style,
            indent,
            implicit_variables,
        }
    }
}

/// Builder for render configuration.
#[derive(Debug, Default)]
pub struct RenderConfigBuilder {
    config: RenderConfig,
}

impl RenderConfigBuilder {
    /// Set the output layout.
    pub fn style(mut self, style: RenderStyle) -> Self {
        self.config.style = style;
        self
    }

    /// Switch to indented multi-line output.
    pub fn pretty(self) -> Self {
        self.style(RenderStyle::Pretty)
    }

    /// Set the indentation unit.
    pub fn indent(mut self, indent: impl Into<String>) -> Self {
        self.config.indent = indent.into();
        self
    }

    /// Enable or disable implicit variable references.
    pub fn implicit_variables(mut self, enabled: bool) -> Self {
        self.config.implicit_variables = enabled;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> RenderConfig {
        self.config
    }
}
