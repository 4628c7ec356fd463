//! Developer tasks (schema generation, explain coverage, fixture conformance).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Get the project root (parent of xtask directory).
fn project_root() -> anyhow::Result<PathBuf> {
    let manifest_dir = match std::env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => std::env::current_dir().context("Cannot determine current directory")?,
    };

    if manifest_dir.ends_with("xtask") {
        match manifest_dir.parent() {
            Some(parent) => Ok(parent.to_path_buf()),
            None => bail!("xtask has no parent directory"),
        }
    } else {
        Ok(manifest_dir)
    }
}

fn schemas_dir() -> anyhow::Result<PathBuf> {
    Ok(project_root()?.join("schemas"))
}

fn fixtures_dir() -> anyhow::Result<PathBuf> {
    Ok(project_root()?.join("tests").join("fixtures"))
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(glyphlint_types::GlyphlintReport)
}

fn generate_icemap_schema() -> schemars::Schema {
    schema_for!(glyphlint_settings::IcemapDocumentV1)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "glyphlint.report.v1.json",
            generate: generate_report_schema,
        },
        SchemaSpec {
            filename: "glyphlint.icemap.v1.json",
            generate: generate_icemap_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);
        fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}

/// Check that schemas/ matches what the Rust types generate.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);
        let expected = serialize_schema(&(spec.generate)())?;

        match fs::read_to_string(&path) {
            Ok(actual) if actual == expected => println!("✓ {} is up to date", spec.filename),
            Ok(_) => mismatched.push(spec.filename),
            Err(_) => missing.push(spec.filename),
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {}", name);
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {}", name);
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Validate fixture policies and golden reports against the schemas");
    eprintln!("  explain-coverage  Validate all check IDs and codes have explanations");
}

fn compile(schema: schemars::Schema, name: &str) -> anyhow::Result<jsonschema::Validator> {
    let value = serde_json::to_value(schema).context("Failed to serialize schema")?;
    jsonschema::validator_for(&value)
        .map_err(|e| anyhow::anyhow!("Failed to compile {name} schema: {e}"))
}

/// Load an ICEMAP policy file as a JSON value, whatever its on-disk format.
fn read_policy_value(path: &Path) -> anyhow::Result<serde_json::Value> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let is_yaml = path
        .extension()
        .is_some_and(|ext| ext == "yaml" || ext == "yml");

    let value: Option<serde_json::Value> = if is_yaml {
        serde_yaml::from_str(&text)
            .with_context(|| format!("Failed to parse {} as YAML", path.display()))?
    } else {
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse {} as JSON", path.display()))?
    };
    Ok(value.unwrap_or_else(|| serde_json::Value::Object(Default::default())))
}

fn relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

/// Validate the fixture corpus.
///
/// This checks:
/// 1. Every `icemap.yaml`/`icemap.json` validates against glyphlint.icemap.v1
/// 2. Every `expected.report.json` validates against glyphlint.report.v1
/// 3. Golden findings only use check IDs and codes that have explanations
fn conform() -> anyhow::Result<()> {
    let report_schema = compile(generate_report_schema(), "glyphlint.report.v1")?;
    let icemap_schema = compile(generate_icemap_schema(), "glyphlint.icemap.v1")?;
    println!("✓ glyphlint.report.v1 and glyphlint.icemap.v1 schemas compile");

    let root = fixtures_dir()?;
    if !root.exists() {
        bail!("tests/fixtures/ not found at {}", root.display());
    }

    let mut policies = 0;
    let mut reports = 0;
    let mut errors = Vec::new();

    for entry in WalkDir::new(&root).sort_by_file_name() {
        let entry = entry.context("Failed to walk tests/fixtures/")?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let name = relative(path, &root);
        let file_name = entry.file_name().to_string_lossy();

        match file_name.as_ref() {
            "icemap.yaml" | "icemap.yml" | "icemap.json" => {
                let value = read_policy_value(path)?;
                for err in icemap_schema.iter_errors(&value) {
                    errors.push(format!("{}: schema validation: {}", name, err));
                }
                policies += 1;
            }
            "expected.report.json" => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", name))?;
                let value: serde_json::Value = serde_json::from_str(&text)
                    .with_context(|| format!("Failed to parse {} as JSON", name))?;
                let value = glyphlint_test_util::normalize_nondeterministic(value);

                for err in report_schema.iter_errors(&value) {
                    errors.push(format!("{}: schema validation: {}", name, err));
                }
                check_finding_ids(&name, &value, &mut errors);
                reports += 1;
            }
            _ => continue,
        }
        println!("  ✓ {} checked", name);
    }

    if policies == 0 {
        bail!("No ICEMAP policies found in {}", root.display());
    }

    if !errors.is_empty() {
        eprintln!("\nConformance errors:");
        for err in &errors {
            eprintln!("  - {}", err);
        }
        bail!("Conformance validation failed with {} errors", errors.len());
    }

    println!(
        "\n✓ {} policies and {} golden reports pass conformance checks!",
        policies, reports
    );
    Ok(())
}

fn check_finding_ids(name: &str, report: &serde_json::Value, errors: &mut Vec<String>) {
    let Some(findings) = report.get("findings").and_then(|v| v.as_array()) else {
        return;
    };
    let check_ids = glyphlint_types::explain::all_check_ids();
    let codes = glyphlint_types::explain::all_codes();

    for (i, finding) in findings.iter().enumerate() {
        let check_id = finding.get("check_id").and_then(|v| v.as_str());
        if !check_id.is_some_and(|id| check_ids.contains(&id)) {
            errors.push(format!("{}: findings[{}].check_id {:?} is not registered", name, i, check_id));
        }
        let code = finding.get("code").and_then(|v| v.as_str());
        if !code.is_some_and(|c| codes.contains(&c)) {
            errors.push(format!("{}: findings[{}].code {:?} is not registered", name, i, code));
        }
    }
}

fn explanation_errors(kind: &str, identifier: &str, errors: &mut Vec<String>) {
    match glyphlint_types::lookup_explanation(identifier) {
        Some(exp) => {
            if exp.title.is_empty() {
                errors.push(format!("{kind} '{identifier}' has empty title"));
            }
            if exp.description.is_empty() {
                errors.push(format!("{kind} '{identifier}' has empty description"));
            }
            if exp.remediation.is_empty() {
                errors.push(format!("{kind} '{identifier}' has empty remediation"));
            }
        }
        None => errors.push(format!("{kind} '{identifier}' has no explanation")),
    }
}

/// Validate that all check IDs and codes have explanations.
fn explain_coverage() -> anyhow::Result<()> {
    let check_ids = glyphlint_types::explain::all_check_ids();
    let codes = glyphlint_types::explain::all_codes();

    let mut errors = Vec::new();
    for check_id in check_ids {
        explanation_errors("Check ID", check_id, &mut errors);
    }
    for code in codes {
        explanation_errors("Code", code, &mut errors);
    }

    if errors.is_empty() {
        println!("✓ {} check IDs have explanations", check_ids.len());
        println!("✓ {} codes have explanations", codes.len());
        println!("\n✓ All explain coverage checks passed!");
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!(
            "Explain coverage validation failed with {} errors",
            errors.len()
        )
    }
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "conform" => conform(),
        "explain-coverage" => explain_coverage(),
        "print-schema-ids" => {
            println!("{}", glyphlint_types::SCHEMA_REPORT_V1);
            println!("{}", glyphlint_settings::SCHEMA_ICEMAP_V1);
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
