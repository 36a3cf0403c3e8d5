//! Tiller Kernel - The command console core.
//!
//! This crate contains the console dispatch pipeline, including:
//! - Tokenizer (quote-aware line splitting)
//! - Parameter coercion engine (typed validation and access)
//! - Action registry (group and sub-action lookup with aliases)
//! - Dispatcher (resolution, invocation, help fallback)
//! - Help renderer (derived purely from registration metadata)
//! - Runner (blocking read-and-dispatch worker thread)

pub mod dispatch;
pub mod help;
pub mod params;
pub mod registry;
pub mod runner;
pub mod tokenizer;

mod command;
mod error;

pub use command::{ActionFn, ActionSpec, ExecutedCommand, GroupSpec};
pub use error::{ParamError, RegistryError};
pub use params::{ParamType, Parameters};
pub use registry::{Action, Group, Registry};
pub use runner::Runner;
pub use tiller_api::{
    BufferPrint, DefaultResponses, ParamValue, Print, Responses, StdoutPrint,
};

use command::Handler;

/// The command console - owns the frozen registry, the response templates,
/// and the output sink.
///
/// Built once with [`Console::builder`]; immutable and safe to share across
/// threads afterward. Dispatch of one line fully completes before the next
/// begins (the [`Runner`] is strictly sequential), but nothing prevents a
/// host from dispatching from several threads against the frozen registry.
pub struct Console {
    registry: Registry,
    responses: Box<dyn Responses>,
    out: Box<dyn Print>,
}

impl std::fmt::Debug for Console {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Console").finish_non_exhaustive()
    }
}

impl Console {
    pub fn builder() -> ConsoleBuilder {
        ConsoleBuilder::new()
    }

    /// Tokenize, resolve, and run one input line.
    pub fn dispatch(&self, line: &str) {
        dispatch::dispatch(&self.registry, self.responses.as_ref(), self.out.as_ref(), line);
    }

    /// The frozen registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The output sink.
    pub fn out(&self) -> &dyn Print {
        self.out.as_ref()
    }
}

/// Builder for [`Console`]: the registration phase.
///
/// Groups are collected in order and validated all at once by
/// [`ConsoleBuilder::build`], which also injects the reserved `help` group
/// (alias `?`) whose root action renders the global listing. Registering a
/// host group under the `help` keyword therefore fails with
/// [`RegistryError::DuplicateGroup`].
pub struct ConsoleBuilder {
    groups: Vec<GroupSpec>,
    responses: Box<dyn Responses>,
    out: Box<dyn Print>,
}

impl ConsoleBuilder {
    fn new() -> Self {
        Self {
            groups: Vec::new(),
            responses: Box::new(DefaultResponses),
            out: Box::new(StdoutPrint),
        }
    }

    /// Declare a command group.
    pub fn group(mut self, spec: GroupSpec) -> Self {
        self.groups.push(spec);
        self
    }

    /// Replace the stock response templates.
    pub fn responses(mut self, responses: impl Responses + 'static) -> Self {
        self.responses = Box::new(responses);
        self
    }

    /// Replace the stdout sink.
    pub fn output(mut self, out: impl Print + 'static) -> Self {
        self.out = Box::new(out);
        self
    }

    /// Validate every declared group and freeze the console.
    pub fn build(self) -> Result<Console, RegistryError> {
        let mut registry = Registry::new();
        registry.register(help_group())?;
        for spec in self.groups {
            registry.register(spec)?;
        }
        Ok(Console {
            registry,
            responses: self.responses,
            out: self.out,
        })
    }
}

/// The reserved global-help group, always registered first.
fn help_group() -> GroupSpec {
    let mut root = ActionSpec::root().name("Help").description("Displays help");
    root.handler = Handler::GlobalHelp;
    GroupSpec::new("help").alias("?").action(root)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_injects_help_group() {
        let console = Console::builder().build().unwrap();
        let group = console.registry().lookup_group("help").unwrap();
        assert_eq!(group.root().name(), "Help");
        assert_eq!(console.registry().lookup_group("?").unwrap().keyword(), "help");
    }

    #[test]
    fn test_registering_help_keyword_collides() {
        let err = Console::builder()
            .group(GroupSpec::new("help").action(ActionSpec::root()))
            .build()
            .unwrap_err();
        assert_eq!(err, RegistryError::DuplicateGroup("help".into()));
    }

    #[test]
    fn test_question_mark_renders_global_help() {
        let out = BufferPrint::new();
        let console = Console::builder()
            .group(
                GroupSpec::new("client").action(
                    ActionSpec::root()
                        .name("List")
                        .description("List clients."),
                ),
            )
            .output(out.clone())
            .build()
            .unwrap();

        console.dispatch("?");
        let text = out.text();
        assert!(text.contains("[ Help ]"));
        assert!(text.contains("help"));
        assert!(text.contains("client"));
        assert!(text.contains("List clients."));
    }

    #[test]
    fn test_custom_responses() {
        struct Terse;
        impl Responses for Terse {
            fn unknown_command(&self) -> &str {
                "?{0}?"
            }
            fn nothing_entered(&self) -> &str {
                "say something"
            }
        }

        let out = BufferPrint::new();
        let console = Console::builder()
            .responses(Terse)
            .output(out.clone())
            .build()
            .unwrap();

        console.dispatch("bogus");
        console.dispatch("   ");
        assert_eq!(
            out.lines(),
            vec!["?bogus?".to_string(), "say something".to_string()]
        );
    }

    #[test]
    fn test_console_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Console>();
    }

    #[test]
    fn test_registration_errors_surface_at_build() {
        let err = Console::builder()
            .group(GroupSpec::new("broken").action(ActionSpec::new("sub")))
            .build()
            .unwrap_err();
        assert_eq!(err, RegistryError::MissingRoot("broken".into()));
    }
}
