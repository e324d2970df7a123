// main.rs
//
// Command line front end: parse flags, build the bowl, write every file.

use bowlgen::BowlParameters;
use bowlgen::cli::{self, Command, USAGE};
use bowlgen::emit::{self, OutputLayout};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        },
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = match cli::parse(std::env::args().skip(1)) {
        Ok(Command::Help) => {
            print!("{USAGE}");
            return Ok(());
        },
        Ok(Command::Generate(args)) => args,
        Err(err) => return Err(format!("{err}\n\n{USAGE}").into()),
    };

    let params = BowlParameters::new(
        args.model_name,
        args.num_division,
        args.radius_bottom,
        args.radius_top,
        args.height,
        args.thickness,
    )?;

    let mut layout = OutputLayout::new(params.model_name.clone(), args.out_dir);
    if let Some(mjcf_dir) = args.mjcf_dir {
        layout = layout.with_mjcf_dir(mjcf_dir);
    }

    let written = emit::emit(&params, &layout, args.encoding)?;
    log::info!(
        "generated `{}`: {} files, {} fragments",
        params.model_name,
        written.len(),
        params.num_division
    );
    Ok(())
}
