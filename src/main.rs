use clap::Parser;

mod android_keys;
mod check;
mod keymap;

/// Diagnostic front-end for the Android-keycode to mpv key-name table.
///
/// The table itself is consumed in-process by the key-event handler; this
/// binary only exists to inspect it from the command line.
#[derive(Parser, Debug)]
#[command(version, about = "Resolve Android key-codes to mpv key names")]
struct Cli {
    /// Android key-codes to resolve
    #[arg(value_name = "KEYCODE")]
    keycodes: Vec<i32>,

    /// Print every binding in the table
    #[arg(long)]
    list: bool,

    /// Validate the table invariants and print a full report
    #[arg(long)]
    check: bool,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if cli.check {
        check::run_check();
        // run_check exits the process
    }

    if cli.list {
        log::info!("Listing {} key bindings.", keymap::BINDINGS.len());
        for &(code, name) in keymap::BINDINGS {
            println!("{} -> {}", code, name);
        }
        return;
    }

    if cli.keycodes.is_empty() {
        eprintln!("No key-codes given. Try '--list', '--check', or pass key-codes to resolve.");
        std::process::exit(2);
    }

    for code in cli.keycodes {
        match keymap::lookup(code) {
            Some(name) => println!("{} -> {}", code, name),
            // Absence is not an error: these keys stay with the platform.
            None => println!("{} -> (unmapped, left to the platform)", code),
        }
    }
}
