use inksac::prelude::*;

/// Colours diagnostics written to stderr. Plain text unless stderr is a
/// terminal that supports colour.
#[derive(Debug, Clone, Copy)]
pub struct Highlighter {
    color_support: ColorSupport,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    pub fn new() -> Self {
        // SAFETY: isatty only inspects the descriptor.
        let on_terminal = unsafe { libc::isatty(libc::STDERR_FILENO) } == 1;
        let support = if on_terminal {
            check_color_support().unwrap_or(ColorSupport::NoColor)
        } else {
            ColorSupport::NoColor
        };
        Self {
            color_support: support,
        }
    }

    pub fn plain() -> Self {
        Self {
            color_support: ColorSupport::NoColor,
        }
    }

    pub fn highlight_error(&self, error: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return error.to_string();
        }

        let error_style = Style::builder().foreground(Color::Red).bold().build();
        error.style(error_style).to_string()
    }

    pub fn highlight_warning(&self, warning: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return warning.to_string();
        }

        let warning_style = Style::builder().foreground(Color::Yellow).build();
        warning.style(warning_style).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_passthrough() {
        let highlighter = Highlighter::plain();
        assert_eq!(
            highlighter.highlight_error("foo: command not found"),
            "foo: command not found"
        );
        assert_eq!(highlighter.highlight_warning("careful"), "careful");
    }
}
