//! The frozen action registry: two-level keyword-and-alias lookup.

use std::collections::HashMap;

use crate::command::{ActionSpec, GroupSpec, Handler};
use crate::error::RegistryError;
use crate::params::ParamType;

/// A registered action, frozen at build time.
pub struct Action {
    keyword: String,
    name: String,
    description: String,
    aliases: Vec<String>,
    param_types: Vec<ParamType>,
    param_aliases: Vec<String>,
    param_descriptions: Vec<String>,
    hidden: bool,
    handler: Handler,
}

impl Action {
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn param_types(&self) -> &[ParamType] {
        &self.param_types
    }

    pub fn param_aliases(&self) -> &[String] {
        &self.param_aliases
    }

    pub fn param_descriptions(&self) -> &[String] {
        &self.param_descriptions
    }

    pub fn hidden(&self) -> bool {
        self.hidden
    }

    /// Whether this is its group's root action.
    pub fn is_root(&self) -> bool {
        self.keyword.is_empty()
    }

    pub(crate) fn handler(&self) -> &Handler {
        &self.handler
    }
}

/// A registered group, frozen at build time.
pub struct Group {
    keyword: String,
    aliases: Vec<String>,
    /// All actions in declaration order, root included.
    actions: Vec<Action>,
    root: usize,
    /// Sub-action keyword -> position in `actions`.
    index: HashMap<String, usize>,
}

impl Group {
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// The action invoked when the group is addressed without a sub-keyword.
    pub fn root(&self) -> &Action {
        &self.actions[self.root]
    }

    /// All actions in declaration order, root included.
    pub fn actions(&self) -> impl Iterator<Item = &Action> {
        self.actions.iter()
    }

    /// Named sub-actions in declaration order.
    pub fn sub_actions(&self) -> impl Iterator<Item = &Action> {
        self.actions.iter().filter(|a| !a.is_root())
    }

    /// Resolve a sub-action: exact keyword match first, then a scan of the
    /// sub-actions' alias lists in declaration order. The root action never
    /// matches.
    pub fn action(&self, keyword: &str) -> Option<&Action> {
        if let Some(&i) = self.index.get(keyword) {
            return Some(&self.actions[i]);
        }
        self.sub_actions()
            .find(|a| a.aliases.iter().any(|alias| alias == keyword))
    }
}

/// Registry of all registered command groups.
///
/// Populated through [`Registry::register`] during the build phase and
/// read-only thereafter. Groups are kept in registration order so alias
/// scans resolve deterministically: first registered wins.
pub struct Registry {
    groups: Vec<Group>,
    index: HashMap<String, usize>,
}

impl Registry {
    pub(crate) fn new() -> Self {
        Self {
            groups: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Validate and register a group.
    pub(crate) fn register(&mut self, spec: GroupSpec) -> Result<(), RegistryError> {
        if spec.keyword.is_empty() {
            return Err(RegistryError::EmptyGroupKeyword);
        }
        if self.index.contains_key(&spec.keyword) {
            return Err(RegistryError::DuplicateGroup(spec.keyword));
        }

        let mut actions = Vec::with_capacity(spec.actions.len());
        let mut action_index = HashMap::new();
        let mut root = None;

        for action_spec in spec.actions {
            let position = actions.len();
            if action_spec.is_root() {
                if root.is_some() {
                    return Err(RegistryError::DuplicateRoot(spec.keyword));
                }
                root = Some(position);
            } else if action_index
                .insert(action_spec.keyword.clone(), position)
                .is_some()
            {
                return Err(RegistryError::DuplicateAction(
                    spec.keyword,
                    action_spec.keyword,
                ));
            }
            actions.push(freeze(action_spec));
        }

        let Some(root) = root else {
            return Err(RegistryError::MissingRoot(spec.keyword));
        };

        self.index.insert(spec.keyword.clone(), self.groups.len());
        self.groups.push(Group {
            keyword: spec.keyword,
            aliases: spec.aliases,
            actions,
            root,
            index: action_index,
        });
        Ok(())
    }

    /// Resolve a group: exact keyword match first, then a scan of the
    /// groups' alias lists in registration order.
    pub fn lookup_group(&self, keyword: &str) -> Option<&Group> {
        if let Some(&i) = self.index.get(keyword) {
            return Some(&self.groups[i]);
        }
        self.groups
            .iter()
            .find(|g| g.aliases.iter().any(|alias| alias == keyword))
    }

    /// Resolve a sub-action within a group.
    pub fn lookup_action<'a>(&self, group: &'a Group, keyword: &str) -> Option<&'a Action> {
        group.action(keyword)
    }

    /// All groups in registration order.
    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.groups.iter()
    }

    /// Whether a group is registered under the exact keyword.
    pub fn contains(&self, keyword: &str) -> bool {
        self.index.contains_key(keyword)
    }
}

fn freeze(spec: ActionSpec) -> Action {
    Action {
        keyword: spec.keyword,
        name: spec.name,
        description: spec.description,
        aliases: spec.aliases,
        param_types: spec.param_types,
        param_aliases: spec.param_aliases,
        param_descriptions: spec.param_descriptions,
        hidden: spec.hidden,
        handler: spec.handler,
    }
}
