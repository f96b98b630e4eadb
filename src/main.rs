use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    md_to_mdx::cli::run_cli(std::env::args_os().skip(1))
}
