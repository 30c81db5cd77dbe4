use anyhow::{Context, Result};
use jsonval::{Json, ParseOptions};
use std::fs::{self, File};
use std::io::{stdin, Read, Write};
use std::path::Path;

#[macro_use]
extern crate clap;
use clap::App;

fn main() -> Result<()> {
    let yaml = load_yaml!("main.yml");
    let matches = App::from_yaml(yaml).get_matches();
    let mut options = ParseOptions::default();
    if let Some(depth) = matches.value_of("max_depth") {
        let depth = depth
            .parse()
            .with_context(|| format!("invalid --max-depth `{}`", depth))?;
        options = options.with_max_depth(depth);
    }
    if let Some(path) = matches.value_of_os("json_file") {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.to_string_lossy()))?;
        let result = format(&text, &options)?;
        if matches.is_present("in_place") {
            write_in_place(Path::new(path), &result)?;
        } else {
            println!("{}", result);
        }
    } else {
        let mut text = String::new();
        stdin().read_to_string(&mut text)?;
        let result = format(&text, &options)?;
        println!("{}", result);
    }
    Ok(())
}

fn write_in_place(path: &Path, result: &str) -> Result<()> {
    let mut f = File::create(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    writeln!(f, "{}", result).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

fn format(text: &str, options: &ParseOptions) -> Result<String> {
    let v = Json::parse_with(text, options)?;
    Ok(v.dump())
}
