//! modtool - C++20 module build tooling.
//!
//! Commands:
//!   gen-modmap <ddi> <registry> <output> <compiler>  Write the modmap for one unit
//!   agg-ddi -d <ddi> <path> ... -o <output>          Aggregate ddis into a registry
//!   help                                             Show help
//!   version                                          Show version

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;

use modtool_core::{render, resolve, Compiler, ModuleDep, ModulesInfo, ToolError, ToolResult};

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    if args.is_empty() {
        print_usage();
        process::exit(1);
    }

    let cmd = &args[0];
    let rest = &args[1..];

    let code = match cmd.as_str() {
        "gen-modmap" => cmd_gen_modmap(rest),
        "agg-ddi" => cmd_agg_ddi(rest),
        "-h" | "--help" | "help" => {
            print_usage();
            0
        }
        "-v" | "--version" | "version" => {
            println!("modtool version 0.1.0");
            0
        }
        _ => {
            eprintln!("unknown command: {}", cmd);
            print_usage();
            1
        }
    };

    process::exit(code);
}

fn print_usage() {
    println!("Usage: modtool <command> [arguments]");
    println!();
    println!("Commands:");
    println!("  gen-modmap <ddi> <registry> <output> <compiler>");
    println!("                  Resolve a unit's transitive module dependencies and");
    println!("                  write <output> (the modmap) and <output>.input (the");
    println!("                  artifact path list). Compilers: clang, gcc, msvc-cl.");
    println!("  agg-ddi -d <ddi> <artifact-path> [-d ...] [-m <registry> ...] -o <output>");
    println!("                  Aggregate scanned ddis and dependency registries into");
    println!("                  one registry JSON file.");
    println!("  help            Show this help");
    println!("  version         Show version");
}

fn cmd_gen_modmap(args: &[String]) -> i32 {
    if args.len() != 4 {
        eprintln!("usage: modtool gen-modmap <ddi> <registry> <output> <compiler>");
        return 1;
    }

    match gen_modmap(&args[0], &args[1], &args[2], &args[3]) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("modtool: {}", e);
            1
        }
    }
}

fn gen_modmap(ddi: &str, registry: &str, output: &str, compiler: &str) -> ToolResult<()> {
    // Fail on a bad compiler before any input work or output is done.
    let compiler: Compiler = compiler.parse()?;

    let dep = ModuleDep::from_file(ddi)?;
    let info = ModulesInfo::from_file(registry)?;
    let entries = resolve(&dep, &info)?;
    let (modmap, inputs) = render(&entries, compiler);

    write_text(output, &modmap)?;
    write_text(&format!("{}.input", output), &inputs)
}

fn cmd_agg_ddi(args: &[String]) -> i32 {
    let parsed = match AggArgs::parse(args) {
        Ok(parsed) => parsed,
        Err(msg) => {
            eprintln!("{}", msg);
            eprintln!(
                "usage: modtool agg-ddi -d <ddi> <artifact-path> [-d ...] [-m <registry> ...] -o <output>"
            );
            return 1;
        }
    };

    match agg_ddi(&parsed) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("modtool: {}", e);
            1
        }
    }
}

fn agg_ddi(args: &AggArgs) -> ToolResult<()> {
    let mut info = ModulesInfo::default();

    for registry in &args.registries {
        info.merge(ModulesInfo::from_file(registry)?);
    }

    for (ddi, artifact_path) in &args.ddis {
        let dep = ModuleDep::from_file(ddi)?;
        // A unit providing no module contributes no registry entry.
        if let Some(name) = dep.provides {
            info.insert(name, artifact_path.clone(), dep.requires);
        }
    }

    info.write_file(&args.output)
}

fn write_text(path: &str, content: &str) -> ToolResult<()> {
    fs::write(path, content).map_err(|e| ToolError::Io(PathBuf::from(path), e.to_string()))
}

/// Parsed arguments for `agg-ddi`.
struct AggArgs {
    /// (ddi file, artifact path) pairs.
    ddis: Vec<(String, String)>,
    /// Already-aggregated registries of direct dependencies.
    registries: Vec<String>,
    /// Output registry path.
    output: String,
}

impl AggArgs {
    fn parse(args: &[String]) -> Result<AggArgs, String> {
        let mut ddis = Vec::new();
        let mut registries = Vec::new();
        let mut output: Option<String> = None;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "-d" => {
                    if i + 2 >= args.len() {
                        return Err("-d expects <ddi> <artifact-path>".to_string());
                    }
                    ddis.push((args[i + 1].clone(), args[i + 2].clone()));
                    i += 3;
                }
                "-m" => {
                    if i + 1 >= args.len() {
                        return Err("-m expects <registry>".to_string());
                    }
                    registries.push(args[i + 1].clone());
                    i += 2;
                }
                "-o" => {
                    if i + 1 >= args.len() {
                        return Err("-o expects <output>".to_string());
                    }
                    output = Some(args[i + 1].clone());
                    i += 2;
                }
                other => {
                    return Err(format!("unexpected argument: {}", other));
                }
            }
        }

        match output {
            Some(output) => Ok(AggArgs {
                ddis,
                registries,
                output,
            }),
            None => Err("missing required -o <output>".to_string()),
        }
    }
}
