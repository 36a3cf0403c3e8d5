//! Interactive demo: a small printer-fleet console on stdin.
//!
//! Try:
//!   ?
//!   client ?
//!   client status detailed
//!   client select 3
//!   client print "benchy v2.gcode"

use std::sync::{Arc, Mutex};

use tiller_kernel::{ActionSpec, Console, GroupSpec, ParamType, Runner};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let selected: Arc<Mutex<Option<i32>>> = Arc::default();

    let console = Console::builder()
        .group(
            GroupSpec::new("client")
                .alias("clients")
                .action(
                    ActionSpec::root()
                        .name("List")
                        .description("Display a list of clients connected.")
                        .run(|cmd| {
                            cmd.println("2 clients connected:");
                            cmd.println("  1  ender-3    idle");
                            cmd.println("  3  voron-2.4  printing");
                            Ok(())
                        }),
                )
                .action(
                    ActionSpec::new("status")
                        .alias("info")
                        .name("Status")
                        .description("Displays the client printer status.")
                        .param_types([ParamType::symbols(["MINIMAL", "NORMAL", "DETAILED"])])
                        .param_aliases(["level"])
                        .param_descriptions(["The status level."])
                        .run(|cmd| {
                            let level = cmd.params.get_symbol("level")?.to_string();
                            cmd.println(&format!("status ({level}): all printers nominal"));
                            Ok(())
                        }),
                )
                .action(
                    ActionSpec::new("select")
                        .name("Select")
                        .description("Select a printer.")
                        .param_types([ParamType::Int])
                        .param_aliases(["id"])
                        .param_descriptions(["The id of the client."])
                        .run({
                            let selected = Arc::clone(&selected);
                            move |cmd| {
                                let id = cmd.params.get_int("id")?;
                                *selected.lock().unwrap() = Some(id);
                                cmd.println(&format!("selected printer {id}"));
                                Ok(())
                            }
                        }),
                )
                .action(
                    ActionSpec::new("print")
                        .name("Print")
                        .description("Print the given gcode file with the selected printer.")
                        .param_types([ParamType::Str])
                        .param_aliases(["file"])
                        .param_descriptions(["The gcode file to print."])
                        .run({
                            let selected = Arc::clone(&selected);
                            move |cmd| {
                                let file = cmd.params.get_str("file")?.to_string();
                                match *selected.lock().unwrap() {
                                    Some(id) => {
                                        cmd.println(&format!("printing {file} on printer {id}"))
                                    }
                                    None => cmd.println("no printer selected (client select <id>)"),
                                }
                                Ok(())
                            }
                        }),
                ),
        )
        .build()?;

    let console = Arc::new(console);
    console.dispatch("?");

    let runner = Runner::spawn_stdin(Arc::clone(&console))?;
    runner.join().expect("console thread panicked");
    Ok(())
}
