//! Help rendering.
//!
//! All three renderings are pure functions of registry metadata: they never
//! invoke actions or mutate the registry.

use tiller_api::Print;

use crate::registry::{Action, Group, Registry};

const COMMAND_HELP_TITLE: &str = " [ Command Help ] ";
const GLOBAL_HELP_TITLE: &str = " [ Help ] ";

/// The rendered invocation pattern for an action.
///
/// Placeholders use the declared parameter alias where one exists, the
/// positional index otherwise; the declared arity is the longest of the type
/// and alias lists. The empty root keyword is omitted.
pub fn usage(group: &Group, action: &Action) -> String {
    let mut rendered = group.keyword().to_string();
    if !action.keyword().is_empty() {
        rendered.push(' ');
        rendered.push_str(action.keyword());
    }
    let arity = action.param_types().len().max(action.param_aliases().len());
    for i in 0..arity {
        rendered.push_str(&format!(" <{}>", placeholder(action, i)));
    }
    rendered
}

fn placeholder(action: &Action, index: usize) -> String {
    action
        .param_aliases()
        .get(index)
        .cloned()
        .unwrap_or_else(|| index.to_string())
}

/// Render the global listing: one aligned row per non-hidden action across
/// all registered groups.
pub fn global_help(out: &dyn Print, registry: &Registry) {
    let mut usage_width = 0;
    let mut desc_width = 0;
    for (group, action) in visible_actions(registry) {
        usage_width = usage_width.max(usage(group, action).len());
        desc_width = desc_width.max(action.description().len());
    }
    usage_width += 2;

    let total_width = usage_width + desc_width + 5;
    out.println(&banner(GLOBAL_HELP_TITLE, total_width));

    for (group, action) in visible_actions(registry) {
        out.println(&format!(
            " {:<width$} - {}",
            usage(group, action),
            action.description(),
            width = usage_width
        ));
    }
}

fn visible_actions(registry: &Registry) -> impl Iterator<Item = (&Group, &Action)> {
    registry
        .groups()
        .flat_map(|g| g.actions().map(move |a| (g, a)))
        .filter(|(_, a)| !a.hidden())
}

/// Render a group's help: identity lines from its root action's metadata,
/// then one usage line per named sub-action.
pub fn group_help(out: &dyn Print, group: &Group) {
    let root = group.root();
    let aliases = group.aliases().join(",");

    let mut lines = vec![
        format!("Name: {}", root.name()),
        format!("Description: {}", root.description()),
        format!("Keyword: {}", group.keyword()),
        format!("Aliases: {}", aliases),
        String::new(),
        "Sub-commands:".to_string(),
    ];
    for action in group.sub_actions() {
        lines.push(format!("  - {}", usage(group, action)));
    }

    print_boxed(out, COMMAND_HELP_TITLE, &lines);
}

/// Render a single action's help: identity, usage, and one line per declared
/// parameter description.
pub fn action_help(out: &dyn Print, group: &Group, action: &Action) {
    let mut lines = vec![
        format!("Name: {}", action.name()),
        format!("Description: {}", action.description()),
        format!("Keyword: {}", action.keyword()),
        format!("Aliases: {}", action.aliases().join(",")),
        format!("Usage: {}", usage(group, action)),
    ];
    if !action.param_descriptions().is_empty() {
        lines.push("Parameters:".to_string());
        for (i, description) in action.param_descriptions().iter().enumerate() {
            lines.push(format!("  <{}> - {}", placeholder(action, i), description));
        }
    }

    print_boxed(out, COMMAND_HELP_TITLE, &lines);
}

/// Print a dash banner sized to the longest line, then the lines.
fn print_boxed(out: &dyn Print, title: &str, lines: &[String]) {
    let width = lines.iter().map(String::len).max().unwrap_or(0) + 2;
    out.println(&banner(title, width));
    for line in lines {
        out.println(line);
    }
}

fn banner(title: &str, width: usize) -> String {
    let side = (width / 2).saturating_sub(title.len() / 2);
    let dashes = "-".repeat(side);
    format!("{}{}{}", dashes, title, dashes)
}
