//! Terminal presentation of install plans

use console::Style;

use crate::manifest::InstallArgument;
use crate::snap::SnapState;

macro_rules! push_flag {
    ($parts:expr, $flag:expr, $label:expr) => {
        if $flag {
            $parts.push($label.to_string());
        }
    };
}

/// One-line description of an install argument
pub fn describe(argument: &InstallArgument) -> String {
    let name = Style::new().bold().apply_to(argument.name());
    let mut parts = Vec::new();

    match argument {
        InstallArgument::Store(store) => {
            parts.push(format!("{name} from store, channel {}", store.channel));
            if store.state == SnapState::Absent {
                parts.push("(remove)".to_string());
            }
            push_flag!(parts, store.classic, "--classic");
            if let Some(cohort) = &store.cohort {
                parts.push(format!("--cohort={cohort}"));
            }
        }
        InstallArgument::File(file) => {
            parts.push(format!("{name} from file {}", file.filename.display()));
            push_flag!(parts, file.classic, "--classic");
            push_flag!(parts, file.dangerous, "--dangerous");
            push_flag!(parts, file.devmode, "--devmode");
        }
    }

    parts.join(" ")
}

/// Print a numbered list of install arguments under a header
pub fn print_arguments(header: &str, arguments: &[InstallArgument]) {
    println!("{}", Style::new().green().bold().apply_to(header));
    for (index, argument) in arguments.iter().enumerate() {
        println!("  {}. {}", index + 1, describe(argument));
    }
}
