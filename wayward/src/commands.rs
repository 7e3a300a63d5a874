use crate::CLAP_STYLING;
use clap::{arg, command};

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("wayward")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("wayward")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
        .subcommand_required(false)
        .subcommand(
            command!("check")
                .about(
                    "Validate a declared navigation graph: reachability, orphans, dead ends, \
                journeys, and a composite health score.",
                )
                .arg(
                    arg!(-r --"routes" <PATH>)
                        .required(true)
                        .help("Path to the normalized route manifest (JSON)")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                )
                .arg(
                    arg!(-j --"journeys" <PATH>)
                        .required(false)
                        .help("Path to the journey registry (JSON)")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                )
                .arg(
                    arg!(-e --"entry" <PATH>)
                        .required(false)
                        .help("Entry point route; repeatable. Overrides the manifest's entry_points")
                        .action(clap::ArgAction::Append),
                )
                .arg(
                    arg!(-T --"terminal" <PATH>)
                        .required(false)
                        .help(
                            "Route allowed to have no outbound links; repeatable. Overrides the \
                        manifest's allowed_terminals",
                        )
                        .action(clap::ArgAction::Append),
                )
                .arg(
                    arg!(-f --"format" <FORMAT>)
                        .required(false)
                        .help("Report format: text, json, markdown")
                        .value_parser(["text", "json", "markdown", "md"])
                        .default_value("text"),
                )
                .arg(
                    arg!(-o --"output" <PATH>)
                        .required(false)
                        .help("Save report to file (default: display to screen)")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                ),
        )
        .subcommand(
            command!("journeys")
                .about(
                    "Validate declared journeys only: per-journey coverage and the links each \
                one is missing.",
                )
                .arg(
                    arg!(-r --"routes" <PATH>)
                        .required(true)
                        .help("Path to the normalized route manifest (JSON)")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                )
                .arg(
                    arg!(-j --"journeys" <PATH>)
                        .required(true)
                        .help("Path to the journey registry (JSON)")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                ),
        )
}
