//! Legacy `.doc` conversion through an external program.

use std::path::Path;
use std::process::Command;

use affinity_core::ConverterCommand;

use super::decode_text;
use crate::error::IoError;

pub(super) fn convert(path: &Path, converter: &ConverterCommand) -> Result<String, IoError> {
    tracing::debug!(
        program = %converter.program,
        path = %path.display(),
        "converting legacy document"
    );

    let output = Command::new(&converter.program)
        .args(converter.args_for(path))
        .output()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                IoError::ConverterMissing {
                    program: converter.program.clone(),
                }
            } else {
                IoError::ConverterSpawn {
                    program: converter.program.clone(),
                    source: e,
                }
            }
        })?;

    if !output.status.success() {
        return Err(IoError::ConverterFailed {
            program: converter.program.clone(),
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(decode_text(output.stdout))
}
