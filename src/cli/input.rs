use crate::cli::global::GlobalArgs;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

/// Reads the whole input from `file`, or from stdin when it is absent or `-`.
///
/// Input larger than `--max-size` is refused unless `--force` is given.
pub fn read_input(
    file: Option<&Path>,
    global: &GlobalArgs,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    match file.filter(|path| *path != Path::new("-")) {
        Some(path) => {
            // Check file size before reading it
            if global.max_size > 0 {
                let file_size = fs::metadata(path)?.len() as usize;
                check_size(file_size, global)?;
            }
            Ok(fs::read(path)?)
        }
        None => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            if global.max_size > 0 {
                check_size(buffer.len(), global)?;
            }
            Ok(buffer)
        }
    }
}

fn check_size(size: usize, global: &GlobalArgs) -> Result<(), Box<dyn std::error::Error>> {
    if size <= global.max_size {
        return Ok(());
    }

    if global.force {
        log::warn!(
            "processing large input ({size} bytes, limit: {} bytes)",
            global.max_size
        );
        Ok(())
    } else {
        Err(format!(
            "input size ({size} bytes) exceeds limit ({} bytes). Use --force to process anyway.",
            global.max_size
        )
        .into())
    }
}

/// Writes `data` to `output`, or to stdout when it is absent.
pub fn write_output(output: Option<&Path>, data: &[u8]) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => fs::write(path, data)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(data)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
