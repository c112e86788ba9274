//! Read-only listings.

use crate::build_info;
use crate::level::Level;
use crate::logger::Builtin;
use std::process::ExitCode;

#[must_use]
pub fn cmd_backends() -> ExitCode {
    for name in Builtin::NAMES {
        let family = Builtin::from_name(name).unwrap_or(Builtin::DEFAULT);
        if family.as_str() == name {
            println!("{name}");
        } else {
            println!("{name} (alias of {})", family.as_str());
        }
    }
    println!("(unknown names fall back to {})", Builtin::DEFAULT.as_str());
    ExitCode::SUCCESS
}

#[must_use]
pub fn cmd_levels() -> ExitCode {
    for level in Level::all() {
        println!("{level}");
    }
    ExitCode::SUCCESS
}

#[must_use]
pub fn cmd_version() -> ExitCode {
    println!("{}", build_info::summary());
    ExitCode::SUCCESS
}
