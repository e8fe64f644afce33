use std::{
    fs::OpenOptions,
    io::{stdin, Read, Write},
};

use clap::{builder::PossibleValue, value_parser, Arg, ArgAction, Command, ValueEnum};

use cssift::{
    from_path, from_string, Options, OutputStyle, DEFAULT_DERIVED_CLASS, DEFAULT_TARGET_CLASS,
};

// the defaults mirror the deployment this tool was originally written for:
// the stylesheet lives several directories up and the subset is generated
// next to the invocation
const DEFAULT_INPUT: &str = "../../../../style.css";
const DEFAULT_OUTPUT: &str = "ils_mes_text.css";

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum Style {
    Expanded,
    Compressed,
}

impl ValueEnum for Style {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Expanded, Self::Compressed]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::Expanded => PossibleValue::new("expanded"),
            Self::Compressed => PossibleValue::new("compressed"),
        })
    }
}

fn cli() -> Command {
    Command::new("cssift")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extract and rename the rules for a single class from a CSS stylesheet")
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .action(ArgAction::Version)
                .long("version")
                .short('v')
                .global(true),
        )
        .arg(
            Arg::new("STDIN")
                .action(ArgAction::SetTrue)
                .long("stdin")
                .help("Read the stylesheet from stdin"),
        )
        .arg(
            Arg::new("CLASS")
                .short('c')
                .long("class")
                .help("Class token to extract, including its leading dot")
                .default_value(DEFAULT_TARGET_CLASS)
                .num_args(1),
        )
        .arg(
            Arg::new("RENAME")
                .short('r')
                .long("rename-to")
                .help("Replacement for every occurrence of the extracted class token")
                .default_value(DEFAULT_DERIVED_CLASS)
                .num_args(1),
        )
        .arg(
            Arg::new("STYLE")
                .short('s')
                .long("style")
                .help("Minified or expanded output")
                .default_value("expanded")
                .ignore_case(true)
                .num_args(1)
                .value_parser(value_parser!(Style)),
        )
        .arg(
            Arg::new("QUIET")
                .action(ArgAction::SetTrue)
                .short('q')
                .long("quiet")
                .help("Don't print warnings."),
        )
        .arg(
            Arg::new("INPUT")
                .value_parser(value_parser!(String))
                .default_value(DEFAULT_INPUT)
                .help("CSS file to extract from"),
        )
        .arg(
            Arg::new("OUTPUT")
                .default_value(DEFAULT_OUTPUT)
                .help("Output CSS file"),
        )
}

fn main() -> std::io::Result<()> {
    let matches = cli().get_matches();

    let style = match matches.get_one::<Style>("STYLE").unwrap() {
        Style::Expanded => OutputStyle::Expanded,
        Style::Compressed => OutputStyle::Compressed,
    };

    let options = Options::default()
        .style(style)
        .quiet(matches.get_flag("QUIET"))
        .target_class(matches.get_one::<String>("CLASS").unwrap().as_str())
        .derived_class(matches.get_one::<String>("RENAME").unwrap().as_str());

    let input = matches.get_one::<String>("INPUT").unwrap();
    let output = matches.get_one::<String>("OUTPUT").unwrap();

    let (css, source) = if matches.get_flag("STDIN") {
        let mut buffer = String::new();
        stdin().read_to_string(&mut buffer)?;
        (from_string(buffer, &options), "stdin")
    } else {
        (from_path(input, &options), input.as_str())
    };

    let css = css.unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1)
    });

    let mut out = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(output)?;
    out.write_all(css.as_bytes())?;

    println!("Generated {} from {}", output, source);
    Ok(())
}
