//! Interactive console
//!
//! Main menu -> environment submenu (single-select) or build submenu
//! (multi-select), plus app launch. Leaf actions optionally wait for Enter so
//! their output stays on screen before the menu is redrawn.

use devconsole_build_engine::BuildTarget;
use devconsole_menu::{MenuBuilder, MenuError, MenuRunner, Picker};
use dialoguer::console::Term;
use tracing::{debug, error, info};

use crate::Session;

/// Wrap `action` so it waits for Enter after running when `pause` is set
fn with_pause<'a>(pause: bool, action: impl Fn() + 'a) -> impl Fn() + 'a {
    move || {
        action();
        if pause {
            await_enter();
        }
    }
}

fn await_enter() {
    println!("\nPress Enter to continue...");
    if let Err(e) = Term::stdout().read_line() {
        debug!("Could not wait for Enter: {}", e);
    }
}

fn report_submenu_failure(title: &str, result: Result<(), MenuError>) {
    if let Err(e) = result {
        error!("{} menu ended: {}", title, e);
        println!("\n❌ {}", e);
    }
}

/// Run the main menu until the user exits
pub fn run(session: &Session, picker: &dyn Picker) -> Result<(), MenuError> {
    let runner = MenuRunner::new(picker);
    let pause = session.config().ui.pause_after_action;
    let builds = session.build_runner();

    let env_menu = MenuBuilder::new("environment setup")
        .add_call(
            "Validate environment",
            with_pause(pause, || {
                session.orchestrator().validate();
            }),
        )
        .add_call(
            "Set up environment",
            with_pause(pause, || {
                session.orchestrator().set_up();
            }),
        )
        .add_terminal("Back")
        .build()?;

    let builds = &builds;
    let build_menu = BuildTarget::all()
        .into_iter()
        .fold(MenuBuilder::new("build"), |menu, target| {
            menu.add_call(
                builds.label(target),
                with_pause(pause, move || {
                    builds.run(target);
                }),
            )
        })
        .build()?;

    let main_menu = MenuBuilder::new("main menu")
        .add_call("Environment Setup", || {
            report_submenu_failure("Environment", runner.run_single(&env_menu))
        })
        .add_call("Build", || {
            report_submenu_failure("Build", runner.run_multi(&build_menu))
        })
        .add_call(
            "Run Android App",
            with_pause(pause, || {
                builds.run_app();
            }),
        )
        .add_terminal("Exit")
        .build()?;

    info!("Console started in {:?}", session.root());
    runner.run_single(&main_menu)
}
