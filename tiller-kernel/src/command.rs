//! Registration specs and the per-invocation command context.
//!
//! Hosts declare their command surface with [`GroupSpec`] and [`ActionSpec`]
//! builders; the console validates and freezes them into the registry at
//! build time. Bound logic receives an [`ExecutedCommand`] carrying the
//! coerced parameters and the output sink.

use tiller_api::Print;

use crate::params::{ParamType, Parameters};

/// Host logic bound to an action.
pub type ActionFn = Box<dyn Fn(&mut ExecutedCommand<'_>) -> anyhow::Result<()> + Send + Sync>;

/// What runs when an action is invoked.
pub(crate) enum Handler {
    /// The reserved global-help renderer.
    GlobalHelp,
    /// Host-supplied logic.
    Host(ActionFn),
}

/// Declaration of one action within a group.
///
/// An action built with [`ActionSpec::root`] is the group's root action: the
/// one invoked when the group is addressed with no sub-action keyword.
pub struct ActionSpec {
    pub(crate) keyword: String,
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) aliases: Vec<String>,
    pub(crate) param_types: Vec<ParamType>,
    pub(crate) param_aliases: Vec<String>,
    pub(crate) param_descriptions: Vec<String>,
    pub(crate) hidden: bool,
    pub(crate) handler: Handler,
}

impl ActionSpec {
    /// A sub-action addressed by the given keyword.
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            name: String::new(),
            description: String::new(),
            aliases: Vec::new(),
            param_types: Vec::new(),
            param_aliases: Vec::new(),
            param_descriptions: Vec::new(),
            hidden: false,
            handler: Handler::Host(Box::new(|_| Ok(()))),
        }
    }

    /// The group's root action (empty keyword sentinel).
    pub fn root() -> Self {
        Self::new("")
    }

    /// Display name shown in help output.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// An alternate keyword resolving to this action.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Ordered parameter types, positionally aligned with any aliases and
    /// descriptions.
    pub fn param_types<I>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = ParamType>,
    {
        self.param_types = types.into_iter().collect();
        self
    }

    /// Ordered parameter aliases; each is an alternate key for the
    /// identically-indexed value.
    pub fn param_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.param_aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    /// Ordered parameter descriptions for help output.
    pub fn param_descriptions<I, S>(mut self, descriptions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.param_descriptions = descriptions.into_iter().map(Into::into).collect();
        self
    }

    /// Exclude this action from the global help listing. It still appears in
    /// its group's help.
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Bind the host logic to run on invocation.
    pub fn run<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut ExecutedCommand<'_>) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.handler = Handler::Host(Box::new(f));
        self
    }

    /// Whether this spec declares the group's root action: no keyword and no
    /// real aliases.
    pub(crate) fn is_root(&self) -> bool {
        self.keyword.is_empty()
            && (self.aliases.is_empty()
                || (self.aliases.len() == 1 && self.aliases[0].is_empty()))
    }
}

/// Declaration of a command group: a keyword, optional aliases, and the
/// actions it owns (exactly one of which must be the root).
pub struct GroupSpec {
    pub(crate) keyword: String,
    pub(crate) aliases: Vec<String>,
    pub(crate) actions: Vec<ActionSpec>,
}

impl GroupSpec {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            aliases: Vec::new(),
            actions: Vec::new(),
        }
    }

    /// An alternate keyword resolving to this group.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Add an action to this group.
    pub fn action(mut self, action: ActionSpec) -> Self {
        self.actions.push(action);
        self
    }
}

/// The context handed to an action's bound logic for one invocation.
pub struct ExecutedCommand<'a> {
    out: &'a dyn Print,
    /// The coerced invocation arguments.
    pub params: Parameters,
    display_help: bool,
}

impl<'a> ExecutedCommand<'a> {
    pub(crate) fn new(out: &'a dyn Print, params: Parameters) -> Self {
        Self {
            out,
            params,
            display_help: false,
        }
    }

    /// The console's output sink.
    pub fn out(&self) -> &dyn Print {
        self.out
    }

    pub fn print(&self, text: &str) {
        self.out.print(text);
    }

    pub fn println(&self, line: &str) {
        self.out.println(line);
    }

    /// Ask the console to render this action's help after the logic returns,
    /// instead of treating the invocation as completed.
    pub fn request_help(&mut self) {
        self.display_help = true;
    }

    pub(crate) fn help_requested(&self) -> bool {
        self.display_help
    }
}
