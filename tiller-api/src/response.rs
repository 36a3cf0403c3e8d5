//! User-facing response templates.
//!
//! The console emits exactly two templated messages of its own: one for an
//! unknown top-level keyword and one for an empty input line. Hosts can
//! replace either by supplying their own `Responses`.

/// Customizable console responses.
pub trait Responses: Send + Sync {
    /// Template for an unknown command. `{0}` is replaced with the offending
    /// input token.
    fn unknown_command(&self) -> &str;

    /// Message for an empty input line.
    fn nothing_entered(&self) -> &str;
}

/// The stock responses.
pub struct DefaultResponses;

impl Responses for DefaultResponses {
    fn unknown_command(&self) -> &str {
        "No command called '{0}' found!"
    }

    fn nothing_entered(&self) -> &str {
        "For help with commands type '?' or 'help'"
    }
}

/// Substitute the `{0}` placeholder in a response template.
pub fn expand_template(template: &str, arg: &str) -> String {
    template.replace("{0}", arg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_template() {
        assert_eq!(
            expand_template("No command called '{0}' found!", "foo"),
            "No command called 'foo' found!"
        );
    }

    #[test]
    fn test_expand_template_without_placeholder() {
        assert_eq!(expand_template("nothing here", "foo"), "nothing here");
    }

    #[test]
    fn test_expand_template_repeated_placeholder() {
        assert_eq!(expand_template("{0} and {0}", "x"), "x and x");
    }
}
