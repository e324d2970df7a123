//! Command line parsing for the `bowlgen` binary.

use crate::bowl::{DEFAULT_MODEL_NAME, DEFAULT_NUM_DIVISION};
use crate::emit::StlEncoding;
use crate::float_types::Real;
use std::path::PathBuf;
use std::str::FromStr;

pub const USAGE: &str = r#"bowlgen

Generate a bowl as STL meshes plus SDF (and optionally MJCF) descriptions.

USAGE:
  bowlgen --radius_bottom <r> --radius_top <r> --height <h> --thickness <t> -o <dir> [options]

REQUIRED:
  --radius_bottom <float>   inner radius at the bottom of the wall
  --radius_top <float>      inner radius at the top of the wall
  --height <float>          height of the wall
  --thickness <float>       thickness of the bottom plate and the wall
  -o, --out_dir <dir>       model directory (meshes/, model.config, model.sdf)

OPTIONS:
  -n, --num_division <int>  number of angular divisions [default: 16]
  --model_name <name>       model and file name prefix [default: bowl]
  --mjcf_dir <dir>          also write <model_name>.xml for MuJoCo here
  --ascii                   write ASCII STL instead of binary
  -h, --help                show this help
"#;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CliError {
    #[error("missing value for {0}")]
    MissingValue(String),
    #[error("missing required flag {0}")]
    MissingFlag(&'static str),
    #[error("unknown option `{0}`")]
    UnknownFlag(String),
    #[error("invalid value `{value}` for {flag}")]
    InvalidValue { flag: String, value: String },
}

/// Parsed command line, before geometric validation.
#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    pub model_name: String,
    pub num_division: usize,
    pub radius_bottom: Real,
    pub radius_top: Real,
    pub height: Real,
    pub thickness: Real,
    pub out_dir: PathBuf,
    pub mjcf_dir: Option<PathBuf>,
    pub encoding: StlEncoding,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Generate(CliArgs),
}

struct Args {
    args: Vec<String>,
    pos: usize,
}

impl Args {
    const fn new(args: Vec<String>) -> Self {
        Self { args, pos: 0 }
    }

    fn next(&mut self) -> Option<String> {
        let arg = self.args.get(self.pos)?.clone();
        self.pos += 1;
        Some(arg)
    }

    fn value(&mut self, flag: &str) -> Result<String, CliError> {
        self.next()
            .ok_or_else(|| CliError::MissingValue(flag.to_string()))
    }
}

fn parse_value<T: FromStr>(flag: &str, value: String) -> Result<T, CliError> {
    value.parse().map_err(|_| CliError::InvalidValue {
        flag: flag.to_string(),
        value,
    })
}

/// Parse the arguments following the program name.
///
/// Accepts both `--flag value` and `--flag=value`; switches take no value.
pub fn parse(args: impl IntoIterator<Item = String>) -> Result<Command, CliError> {
    let mut args = Args::new(args.into_iter().collect());

    let mut model_name = DEFAULT_MODEL_NAME.to_string();
    let mut num_division = DEFAULT_NUM_DIVISION;
    let mut radius_bottom: Option<Real> = None;
    let mut radius_top: Option<Real> = None;
    let mut height: Option<Real> = None;
    let mut thickness: Option<Real> = None;
    let mut out_dir: Option<PathBuf> = None;
    let mut mjcf_dir: Option<PathBuf> = None;
    let mut encoding = StlEncoding::Binary;

    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with('-') => {
                (flag.to_string(), Some(value.to_string()))
            },
            _ => (arg, None),
        };
        let value = |args: &mut Args| match inline.clone() {
            Some(value) => Ok(value),
            None => args.value(&flag),
        };

        let switch = || match &inline {
            Some(value) => Err(CliError::InvalidValue {
                flag: flag.clone(),
                value: value.clone(),
            }),
            None => Ok(()),
        };

        match flag.as_str() {
            "-h" | "--help" => {
                switch()?;
                return Ok(Command::Help);
            },
            "--ascii" => {
                switch()?;
                encoding = StlEncoding::Ascii;
            },
            "--model_name" => model_name = value(&mut args)?,
            "-n" | "--num_division" => num_division = parse_value(&flag, value(&mut args)?)?,
            "--radius_bottom" => radius_bottom = Some(parse_value(&flag, value(&mut args)?)?),
            "--radius_top" => radius_top = Some(parse_value(&flag, value(&mut args)?)?),
            "--height" => height = Some(parse_value(&flag, value(&mut args)?)?),
            "--thickness" => thickness = Some(parse_value(&flag, value(&mut args)?)?),
            "-o" | "--out_dir" => out_dir = Some(PathBuf::from(value(&mut args)?)),
            "--mjcf_dir" => mjcf_dir = Some(PathBuf::from(value(&mut args)?)),
            _ => return Err(CliError::UnknownFlag(flag.clone())),
        }
    }

    Ok(Command::Generate(CliArgs {
        model_name,
        num_division,
        radius_bottom: radius_bottom.ok_or(CliError::MissingFlag("--radius_bottom"))?,
        radius_top: radius_top.ok_or(CliError::MissingFlag("--radius_top"))?,
        height: height.ok_or(CliError::MissingFlag("--height"))?,
        thickness: thickness.ok_or(CliError::MissingFlag("--thickness"))?,
        out_dir: out_dir.ok_or(CliError::MissingFlag("--out_dir"))?,
        mjcf_dir,
        encoding,
    }))
}
