use crate::config::Config;
use crate::error::Error;
use crate::error::Result;
use crate::script::Script;
use rusqlite::Connection;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;
use tracing::debug;
use tracing::info;
use tracing::warn;

/// A database file that passed verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub size: u64,
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Generated {} ({} bytes)", self.path.display(), self.size)
    }
}

/// Builds a fresh database at `config.output_path` from the SQL script at `config.script_path`.
///
/// Any existing file at the output path is replaced. If the script fails to execute, the partial
/// output is removed and the engine's error is returned as [`Error::Execution`].
pub fn materialize(config: &Config) -> Result<Artifact> {
    let script = Script::load(&config.script_path)?;
    let output = config.output_path.as_path();

    if let Some(dir) = output.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(Error::io(dir))?;
    }

    remove_stale(output)?;

    info!(
        script = %config.script_path.display(),
        output = %output.display(),
        bytes = script.text().len(),
        "building database"
    );

    if let Err(err) = populate(output, &script) {
        warn!(output = %output.display(), "{err}");

        if let Err(remove_err) = fs::remove_file(output) {
            if remove_err.kind() != io::ErrorKind::NotFound {
                warn!(output = %output.display(), "couldn't remove partial output: {remove_err}");
            }
        }

        return Err(err);
    }

    verify(output, config.min_size)
}

fn remove_stale(output: &Path) -> Result<()> {
    match fs::remove_file(output) {
        Ok(()) => {
            debug!(output = %output.display(), "removed previous build");
            Ok(())
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(Error::io(output)(err)),
    }
}

/// Runs the script in autocommit mode, so its own `BEGIN`/`COMMIT` pairs and statements such as
/// `VACUUM` behave as they would in the sqlite3 shell.
fn populate(output: &Path, script: &Script) -> Result<()> {
    let conn = Connection::open(output)?;

    configure_for_bulk_load(&conn)?;

    conn.execute_batch(script.text())?;

    conn.close().map_err(|(_, err)| err)?;

    Ok(())
}

/// The output is rebuilt from scratch on every run, so durability is traded for speed.
fn configure_for_bulk_load(conn: &Connection) -> Result<()> {
    let journal_mode: String =
        conn.pragma_update_and_check(None, "journal_mode", "OFF", |row| row.get(0))?;
    conn.pragma_update(None, "synchronous", "OFF")?;
    conn.pragma_update(None, "temp_store", "MEMORY")?;

    debug!(journal_mode, "configured connection for bulk load");

    Ok(())
}

fn verify(output: &Path, min_size: u64) -> Result<Artifact> {
    let size = fs::metadata(output)
        .ok()
        .filter(|metadata| metadata.is_file())
        .map(|metadata| metadata.len());

    match size {
        Some(size) if size >= min_size => Ok(Artifact {
            path: output.to_path_buf(),
            size,
        }),
        _ => Err(Error::BuildVerification {
            path: output.to_path_buf(),
            size,
            min_size,
        }),
    }
}
