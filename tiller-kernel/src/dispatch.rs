//! The dispatch pipeline: tokenize, resolve, validate, coerce, invoke.

use tiller_api::{Print, Responses, expand_template};

use crate::command::{ExecutedCommand, Handler};
use crate::registry::{Action, Group, Registry};
use crate::{help, params, tokenizer};

/// Resolve and run one input line against the registry.
///
/// Resolution walks the tokens: the first selects a group, the second (when
/// present) a sub-action, with `?` at either level rendering help instead of
/// invoking. A second token that resolves to no sub-action falls back to the
/// group's root action with the remaining tokens as its arguments. Failed
/// argument validation renders the nearest resolved action's help. Host
/// logic faults are contained here; dispatch always returns to the caller.
pub fn dispatch(registry: &Registry, responses: &dyn Responses, out: &dyn Print, line: &str) {
    let tokens = tokenizer::split(line);

    let Some(first) = tokens.first() else {
        out.println(responses.nothing_entered());
        return;
    };

    let Some(group) = registry.lookup_group(first) else {
        out.println(&expand_template(responses.unknown_command(), first));
        return;
    };

    match tokens.get(1).map(String::as_str) {
        None => {
            if !invoke(registry, out, group, group.root(), &tokens[1..]) {
                help::group_help(out, group);
            }
        }
        Some("?") => help::group_help(out, group),
        Some(sub) => {
            if let Some(action) = group.action(sub) {
                if tokens.get(2).map(String::as_str) == Some("?") {
                    help::action_help(out, group, action);
                } else if !invoke(registry, out, group, action, &tokens[2..]) {
                    help::action_help(out, group, action);
                }
            } else if !invoke(registry, out, group, group.root(), &tokens[1..]) {
                // Unresolved sub-keywords become root-action arguments; a
                // validation miss there shows the whole group.
                help::group_help(out, group);
            }
        }
    }
}

/// Validate, coerce, and run an action. Returns false when the caller should
/// render help instead of treating the invocation as completed.
fn invoke(
    registry: &Registry,
    out: &dyn Print,
    group: &Group,
    action: &Action,
    args: &[String],
) -> bool {
    if !params::check(args, action.param_types()) {
        return false;
    }

    match action.handler() {
        Handler::GlobalHelp => {
            help::global_help(out, registry);
            true
        }
        Handler::Host(logic) => {
            let parsed = params::parse(args, action.param_types(), action.param_aliases());
            let mut cmd = ExecutedCommand::new(out, parsed);
            if let Err(err) = logic(&mut cmd) {
                tracing::error!(
                    group = group.keyword(),
                    action = action.keyword(),
                    "command handler failed: {:#}",
                    err
                );
                return true;
            }
            !cmd.help_requested()
        }
    }
}
