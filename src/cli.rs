use crate::{Options, RepairError, reconstruct, repair_with_log};
use std::env;
use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

fn print_help(program: &str) {
    eprintln!(
        "Usage: {prog} [OPTIONS] [INPUT]\n\
         \n\
         INPUT: optional input file. When omitted, reads from stdin.\n\
         \n\
         Options:\n\
           -o, --output FILE    Write the repaired JSON to FILE (default stdout)\n\
               --dump FILE      Where to save the best-effort text when repair fails\n\
                                (default INPUT.partial, or jsonmend.partial for stdin)\n\
               --fallback       Skip line repair and reconstruct records directly\n\
               --auto-fallback  Retry with record reconstruction when line repair fails\n\
               --root-label L   Root label used when the input never names one\n\
               --context N      Context lines shown around a failure (default 2)\n\
               --log            Print repair log entries to stderr as JSON lines\n\
           -h, --help           Show this help\n",
        prog = program
    );
}

struct CliMode {
    input: Option<String>,
    output: Option<String>,
    dump: Option<String>,
    fallback: bool,
    auto_fallback: bool,
    show_log: bool,
}

fn parse_args() -> (Options, CliMode) {
    let mut args: Vec<String> = env::args().collect();
    let program = args
        .first()
        .cloned()
        .unwrap_or_else(|| "jsonmend".to_string());
    args.remove(0);

    let mut opts = Options::default();
    let mut mode = CliMode {
        input: None,
        output: None,
        dump: None,
        fallback: false,
        auto_fallback: false,
        show_log: false,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help(&program);
                std::process::exit(0);
            }
            "-o" | "--output" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Missing FILE for --output");
                    std::process::exit(2);
                }
                mode.output = Some(args[i].clone());
            }
            "--dump" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Missing FILE for --dump");
                    std::process::exit(2);
                }
                mode.dump = Some(args[i].clone());
            }
            "--fallback" => {
                mode.fallback = true;
            }
            "--auto-fallback" => {
                mode.auto_fallback = true;
            }
            "--root-label" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Missing LABEL for --root-label");
                    std::process::exit(2);
                }
                opts.root_label = Some(args[i].clone());
            }
            "--context" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Missing N for --context");
                    std::process::exit(2);
                }
                opts.context_lines = args[i].parse().unwrap_or(2);
            }
            "--log" => {
                opts.logging = true;
                mode.show_log = true;
            }
            s if s.starts_with('-') => {
                eprintln!("Unknown option: {}", s);
                std::process::exit(2);
            }
            path => {
                mode.input = Some(path.to_string());
            }
        }
        i += 1;
    }

    (opts, mode)
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (opts, mode) = parse_args();

    let content = match &mode.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut s = String::new();
            io::stdin().read_to_string(&mut s)?;
            s
        }
    };

    let result = if mode.fallback {
        reconstruct(&content, &opts).map(|doc| (doc, Vec::new()))
    } else {
        match repair_with_log(&content, &opts) {
            Err(err) if mode.auto_fallback => {
                eprintln!("line repair failed: {err}");
                report_failure(&err, &mode)?;
                eprintln!("retrying with record reconstruction");
                reconstruct(&content, &opts).map(|doc| (doc, Vec::new()))
            }
            other => other,
        }
    };

    match result {
        Ok((doc, log)) => {
            if mode.show_log {
                for entry in &log {
                    eprintln!("{}", serde_json::to_string(entry)?);
                }
            }
            let pretty = doc.to_pretty_string()?;
            match &mode.output {
                Some(path) => {
                    let mut w = BufWriter::new(File::create(path)?);
                    w.write_all(pretty.as_bytes())?;
                    w.write_all(b"\n")?;
                    w.flush()?;
                }
                None => {
                    let stdout = io::stdout();
                    let mut w = stdout.lock();
                    w.write_all(pretty.as_bytes())?;
                    w.write_all(b"\n")?;
                    w.flush()?;
                }
            }
            eprintln!("{}: {} records", doc.label, doc.records.len());
            Ok(())
        }
        Err(err) => {
            report_failure(&err, &mode)?;
            Err(Box::new(err))
        }
    }
}

/// Console context plus the best-effort artifact; the error line itself is
/// printed by the caller.
fn report_failure(err: &RepairError, mode: &CliMode) -> io::Result<()> {
    if !err.context.is_empty() {
        eprint!("{}", err.context);
    }
    if let Some(partial) = &err.partial {
        let path = dump_path(mode);
        fs::write(&path, partial)?;
        eprintln!("saved best-effort text to {}", path.display());
    }
    Ok(())
}

fn dump_path(mode: &CliMode) -> PathBuf {
    if let Some(d) = &mode.dump {
        return PathBuf::from(d);
    }
    match &mode.input {
        Some(p) => PathBuf::from(format!("{p}.partial")),
        None => PathBuf::from("jsonmend.partial"),
    }
}
