use std::{
    collections::BTreeMap,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

fn main() {
    println!("cargo::rerun-if-changed=migrations");

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let migrations_rs = out_dir.join("migrations.rs");
    let migrations_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("migrations");

    let migrations = collect_migrations(&migrations_dir);
    emit_migrations(&migrations_rs, &migrations);
    println!("cargo::rustc-env=MIGRATIONS={}", migrations_rs.display());
}

#[derive(Default)]
struct Scripts {
    up: Option<String>,
    down: Option<String>,
}

/// Pair every `<name>.up.sql` with its `<name>.down.sql`, ordered by name.
fn collect_migrations(dir: &Path) -> BTreeMap<String, Scripts> {
    let mut out = BTreeMap::<String, Scripts>::new();
    for entry in dir.read_dir().unwrap() {
        let entry = entry.unwrap();
        let file_name = entry.file_name().into_string().unwrap();

        let (name, is_up) = if let Some(name) = file_name.strip_suffix(".up.sql") {
            (name, true)
        } else if let Some(name) = file_name.strip_suffix(".down.sql") {
            (name, false)
        } else {
            continue;
        };

        let content = std::fs::read_to_string(entry.path()).unwrap();
        let scripts = out.entry(name.to_owned()).or_default();
        if is_up {
            scripts.up = Some(content);
        } else {
            scripts.down = Some(content);
        }
    }
    out
}

fn emit_migrations(path: &Path, migrations: &BTreeMap<String, Scripts>) {
    let file = std::fs::File::create(path).unwrap();
    let mut writer = BufWriter::new(file);
    write!(&mut writer, "&[").unwrap();
    for (name, Scripts { up, down }) in migrations {
        let up = up
            .as_deref()
            .unwrap_or_else(|| panic!("migration {name} has no up script"));
        let down = down
            .as_deref()
            .unwrap_or_else(|| panic!("migration {name} has no down script"));
        write!(
            &mut writer,
            "Migration{{name:{name:?},up:{up:?},down:{down:?}}},"
        )
        .unwrap();
    }
    write!(&mut writer, "]").unwrap();
    writer.flush().unwrap();
}
