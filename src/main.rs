use std::process::ExitCode;

fn main() -> ExitCode {
    dealsheet_lib::run()
}
