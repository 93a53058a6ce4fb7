use scenefield::{
    Catalog, Context, FieldAttrs, IdCheck, Paste, PathFlavor, Verdict, check_date, extract_id, manual_id,
    normalize_releaser, sanitize_path, valid_bounded_id, valid_day, valid_month, valid_year, valid_youtube_id,
};
use std::io::{self, Read};

const DEFAULT_CEILING: i64 = 1_000_000;

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    match run(&config) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(2);
        }
    }
}

struct CliConfig {
    kind: String,
    values: Vec<String>,
    ceiling: i64,
}

fn run(config: &CliConfig) -> Result<bool, String> {
    let ctx = Context::default();
    let value = config.values.join(" ");

    match config.kind.as_str() {
        "year" => Ok(report_bool(valid_year(&value, &ctx), &value)),
        "month" => Ok(report_bool(valid_month(&value), &value)),
        "day" => Ok(report_bool(valid_day(&value), &value)),
        "youtube" => Ok(report_bool(valid_youtube_id(&value), &value)),
        "id" => {
            let ok = valid_bounded_id(&value, config.ceiling).map_err(|e| e.to_string())?;
            Ok(report_bool(ok, &value))
        }
        "date" => {
            let [year, month, day] = &config.values[..] else {
                return Err("kind `date` expects exactly three values: <year> <month> <day>".to_string());
            };
            let report = check_date(year, month, day, &ctx);
            println!("year={} month={} day={} flagged={:?}", report.year, report.month, report.day, report.flagged);
            Ok(report.ok())
        }
        "releaser" => {
            let out = normalize_releaser(&value, &FieldAttrs::required(1, 100)).map_err(|e| e.to_string())?;
            println!("{:?}: {}", out.verdict, out.value);
            Ok(out.verdict != Verdict::Invalid)
        }
        "path" | "branch" => {
            let flavor = if config.kind == "branch" { PathFlavor::GitBranch } else { PathFlavor::Generic };
            let out = sanitize_path(&value, flavor, &FieldAttrs::optional(0, 255)).map_err(|e| e.to_string())?;
            println!("{:?}: {}", out.verdict, out.value);
            Ok(out.verdict != Verdict::Invalid)
        }
        "demozoo" | "pouet" => {
            let catalog = if config.kind == "demozoo" { Catalog::Demozoo } else { Catalog::Pouet };
            match extract_id(catalog, &value) {
                Paste::Id(id) => {
                    println!("Valid: {id}");
                    Ok(true)
                }
                Paste::Rejected => {
                    println!("Invalid: {value}");
                    Ok(false)
                }
                Paste::Ignored => match manual_id(catalog, &value) {
                    IdCheck::Ok(id) => {
                        println!("Valid: {id}");
                        Ok(true)
                    }
                    IdCheck::Unset => {
                        println!("Valid: (empty)");
                        Ok(true)
                    }
                    IdCheck::Clear => {
                        println!("Valid: (cleared)");
                        Ok(true)
                    }
                    IdCheck::Rejected => {
                        println!("Invalid: {value}");
                        Ok(false)
                    }
                },
            }
        }
        other => Err(format!("unknown kind `{other}`\n\n{}", help_text())),
    }
}

fn report_bool(ok: bool, value: &str) -> bool {
    if ok {
        println!("Valid: {value}");
    } else {
        println!("Invalid: {value}");
    }
    ok
}

fn parse_args() -> Result<CliConfig, String> {
    let mut kind: Option<String> = None;
    let mut ceiling = DEFAULT_CEILING;
    let mut values: Vec<String> = Vec::new();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                println!("{}", help_text());
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("scenefield {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--kind" | "-k" => {
                let value = args.next().ok_or_else(|| "error: --kind expects a value".to_string())?;
                kind = Some(value);
            }
            "--ceiling" => {
                let value = args.next().ok_or_else(|| "error: --ceiling expects a value".to_string())?;
                ceiling = value.parse().map_err(|_| format!("error: invalid --ceiling '{value}'"))?;
            }
            "--" => {
                values.extend(args);
                break;
            }
            _ if arg.starts_with("--kind=") => {
                kind = Some(arg.trim_start_matches("--kind=").to_string());
            }
            _ if arg.starts_with('-') && arg.len() > 1 => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => values.push(arg),
        }
    }

    let kind = kind.ok_or_else(|| format!("error: --kind is required\n\n{}", help_text()))?;

    if values.is_empty() {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|err| format!("error: failed to read stdin: {err}"))?;
        values = buffer.split_whitespace().map(str::to_string).collect();
    }

    Ok(CliConfig { kind, values, ceiling })
}

fn help_text() -> String {
    format!(
        "scenefield {version}

Validate one artifact metadata field value.

Usage:
  scenefield --kind <kind> [OPTIONS] [--] <value...>

Kinds:
  year, month, day           Numeric range checks (empty is valid).
  date                       Composite check; expects <year> <month> <day>.
  releaser                   Normalize a releaser/group name.
  path, branch               Sanitize a repository path / branch name.
  id                         Bounded integer check (see --ceiling).
  demozoo, pouet             Catalog URL or ID check.
  youtube                    YouTube video ID check.

Options:
  -k, --kind <kind>          Field kind to validate (required).
  --ceiling <n>              Sanity ceiling for --kind id. Default: {ceiling}.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Exit codes:
  0  Value is valid.
  1  Value is invalid.
  2  Invalid arguments or configuration.
",
        version = env!("CARGO_PKG_VERSION"),
        ceiling = DEFAULT_CEILING
    )
}
