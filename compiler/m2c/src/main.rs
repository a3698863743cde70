//! Modula-2 table tooling CLI.

use m2c::commands::{
    check_literal, dump_table, list_productions, parse_dialect_flags, parse_production,
    show_production, CommandError, DumpTarget,
};

fn main() {
    m2c::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "dump" => {
            if args.len() < 3 {
                eprintln!("Usage: m2c dump <first|follow|resync>");
                std::process::exit(1);
            }
            let output = args[2].parse::<DumpTarget>().map(dump_table);
            finish(output);
        }
        "show" => {
            if args.len() < 3 {
                eprintln!("Usage: m2c show <production> [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --variant-records        Records may have variant parts (default)");
                eprintln!("  --no-variant-records     Records are extensible instead");
                eprintln!("  --const-parameters       Formal parameters may be CONST");
                eprintln!("  --no-const-parameters    Formal parameters may not be CONST (default)");
                std::process::exit(1);
            }
            let output = parse_production(&args[2]).and_then(|production| {
                let flags = parse_dialect_flags(&args[3..])?;
                Ok(show_production(production, flags))
            });
            finish(output);
        }
        "check" => {
            if args.len() < 3 {
                eprintln!("Usage: m2c check <literal>");
                eprintln!();
                eprintln!("Example: m2c check \"0x00001000, 0x00000000, 0x00000008, 2\"");
                std::process::exit(1);
            }
            finish(check_literal(&args[2..].join(" ")));
        }
        "productions" => print!("{}", list_productions()),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn finish(output: Result<String, CommandError>) {
    match output {
        Ok(text) => print!("{text}"),
        Err(error) => {
            eprintln!("error: {error}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("m2c - Modula-2 grammar table tooling");
    println!();
    println!("Usage: m2c <command> [options]");
    println!();
    println!("Commands:");
    println!("  dump <table>              Print first, follow, or resync rows as literals");
    println!("  show <production> [opts]  Show FIRST and FOLLOW for a production");
    println!("  check <literal>           Validate a token set literal");
    println!("  productions               List productions and their option dependency");
    println!("  help                      Show this message");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=m2_parse=trace) for lookup tracing.");
}
